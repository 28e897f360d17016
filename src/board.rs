//! Letter grid geometry.
//!
//! A board is a flat, row-major buffer of cells addressed by
//! `index = y * width + x`. Construction validates the geometry, so every
//! `Board` value that exists can be searched without further checks.

use std::fmt;

use crate::error::{Error, Result};

/// Offsets of the eight cells surrounding a cell.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Board {
    /// Create a board from a flat row-major cell buffer.
    ///
    /// Cells are taken as-is. Anything outside `[a-z]` is kept on the board
    /// but can never be part of a found word.
    pub fn new(cells: impl Into<Vec<u8>>, width: usize, height: usize) -> Result<Self> {
        let cells = cells.into();
        if width == 0 || height == 0 {
            return Err(Error::ZeroDimension { width, height });
        }
        if width.checked_mul(height) != Some(cells.len()) {
            return Err(Error::BoardSizeMismatch {
                width,
                height,
                cells: cells.len(),
            });
        }
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Parse a board written as rows of letters.
    ///
    /// Rows are separated by newlines, `/` or whitespace, e.g. `"cat/dog"`.
    /// ASCII letters are lowercased. All rows must have the same length.
    pub fn parse(text: &str) -> Result<Self> {
        let rows: Vec<&str> = text
            .split(|c: char| c == '/' || c.is_whitespace())
            .filter(|row| !row.is_empty())
            .collect();

        let width = match rows.first() {
            Some(row) => row.len(),
            None => return Err(Error::EmptyBoard),
        };

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, text) in rows.iter().enumerate() {
            if text.len() != width {
                return Err(Error::RaggedBoard {
                    row,
                    expected: width,
                    got: text.len(),
                });
            }
            cells.extend(text.bytes().map(|b| b.to_ascii_lowercase()));
        }

        Self::new(cells, width, rows.len())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells, `width * height`.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: a board has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// The character stored at a flat index.
    #[inline]
    pub fn at(&self, index: usize) -> u8 {
        self.cells[index]
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<u8> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }

    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    /// In-bounds cells adjacent to `index`, orthogonally or diagonally.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let (x, y) = self.coords(index);
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            self.index(nx, ny)
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, &cell) in row.iter().enumerate() {
                if x > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    b'q' => write!(f, "Qu")?,
                    c => write!(f, "{:<2}", (c as char).to_ascii_uppercase())?,
                }
            }
        }
        Ok(())
    }
}
