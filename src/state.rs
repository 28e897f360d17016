//! Path states explored by the search.
//!
//! A [`BoardState`] is one candidate path through the grid: the cells it has
//! used, the letters it spelled, and where those letters lead in the trie.
//! States are value types. Branching always clones, so siblings never share
//! a visited set or a word buffer.

use fixedbitset::FixedBitSet;

use crate::board::Board;
use crate::trie::{NodeId, Trie};

/// Letter that stands for the `qu` digraph on a board.
pub(crate) const Q: u8 = b'q';
const U: u8 = b'u';

/// Outcome of matching the latest letters of a path against the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The trie has no continuation; the path is dropped.
    NoMatch,
    /// The letters are a proper prefix of some word.
    PartialMatch,
    /// The letters spell a dictionary word (which may also be a prefix).
    FullMatch,
}

impl MatchOutcome {
    /// Whether a path with this outcome is worth extending.
    #[inline]
    pub fn is_match(self) -> bool {
        !matches!(self, MatchOutcome::NoMatch)
    }
}

/// One in-progress path through the grid and its place in the trie.
#[derive(Debug, Clone)]
pub struct BoardState {
    visited: FixedBitSet,
    word: Vec<u8>,
    cursor: NodeId,
    /// Set when the last two letters are an implicit `qu` whose `q` has not
    /// yet been matched against the trie.
    pending_qu: bool,
    next_cell: usize,
}

impl BoardState {
    /// A fresh path that starts at `cell`.
    pub fn new(board: &Board, trie: &Trie, cell: usize) -> Self {
        Self {
            visited: FixedBitSet::with_capacity(board.len()),
            word: Vec::new(),
            cursor: trie.root(),
            pending_qu: false,
            next_cell: cell,
        }
    }

    #[inline]
    pub fn next_cell(&self) -> usize {
        self.next_cell
    }

    #[inline]
    pub fn cursor(&self) -> NodeId {
        self.cursor
    }

    #[inline]
    pub fn pending_qu(&self) -> bool {
        self.pending_qu
    }

    #[inline]
    pub fn is_visited(&self, cell: usize) -> bool {
        self.visited.contains(cell)
    }

    /// The letters spelled so far.
    #[inline]
    pub fn letters(&self) -> &[u8] {
        &self.word
    }

    pub fn word(&self) -> String {
        String::from_utf8_lossy(&self.word).into_owned()
    }

    /// Step onto `next_cell`: append its letter (unless the cell is already
    /// on this path) and mark it used.
    ///
    /// When the cell holds a `q` and `expand_qu` is set, a sibling that reads
    /// the cell as `qu` is returned alongside. The sibling has already used
    /// the cell and still owes the trie its `q`.
    pub fn enter(&mut self, board: &Board, expand_qu: bool) -> Option<BoardState> {
        let cell = self.next_cell;
        let mut qu_branch = None;

        if !self.visited.contains(cell) {
            let letter = board.at(cell);
            self.word.push(letter);

            if letter == Q && expand_qu {
                let mut branch = self.clone();
                branch.pending_qu = true;
                branch.word.push(U);
                branch.visited.insert(cell);
                qu_branch = Some(branch);
            }
        }

        self.visited.insert(cell);
        qu_branch
    }

    /// Advance the trie cursor over the letters added since the last match.
    ///
    /// Normally that is just the last letter. For a pending `qu` the `q` is
    /// matched first and the `u` after it; a `q` that ends a word is reported
    /// by the literal-`q` sibling, so this path only needs the `qu` prefix.
    /// The cursor always spells the same letters as the path, so a full
    /// match is never reported for a non-word.
    pub fn match_path(&mut self, trie: &Trie) -> MatchOutcome {
        if self.pending_qu {
            self.pending_qu = false;
            let q = self.word[self.word.len() - 2];
            if self.match_letter(trie, q) == MatchOutcome::NoMatch {
                return MatchOutcome::NoMatch;
            }
        }

        match self.word.last() {
            Some(&letter) => self.match_letter(trie, letter),
            None => MatchOutcome::NoMatch,
        }
    }

    fn match_letter(&mut self, trie: &Trie, letter: u8) -> MatchOutcome {
        match trie.step(self.cursor, letter) {
            None => MatchOutcome::NoMatch,
            Some(node) => {
                self.cursor = node;
                if trie.is_word_end(node) {
                    MatchOutcome::FullMatch
                } else {
                    MatchOutcome::PartialMatch
                }
            }
        }
    }

    /// A copy of this path about to visit `cell`.
    pub fn branch_to(&self, cell: usize) -> BoardState {
        let mut next = self.clone();
        next.next_cell = cell;
        next
    }

    /// Unvisited cells adjacent to the current cell.
    pub fn open_neighbors<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = usize> + 'a {
        board
            .neighbors(self.next_cell)
            .filter(move |&cell| !self.visited.contains(cell))
    }
}
