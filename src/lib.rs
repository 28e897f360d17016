//! # Boggle Solver
//!
//! Finds every dictionary word that can be traced on a Boggle board and
//! scores the result.
//!
//! A word is a path of horizontally, vertically or diagonally adjacent
//! cells that uses each cell at most once. The dictionary is held in a
//! prefix tree so that a path is abandoned as soon as its letters stop
//! being the start of any word. A `q` cell may be read as `qu`.
//!
//! ```
//! use boggle_solver::{Board, Solver, Trie};
//!
//! let solver = Solver::new(Trie::from_words(["cat", "quad"]));
//! let board = Board::parse("ca/tx").unwrap();
//! let results = solver.solve(&board);
//! assert_eq!(results.words(), ["cat"]);
//! assert_eq!(results.total_score(), 1);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod results;
pub mod solver;
pub mod state;
pub mod trie;

pub use board::Board;
pub use config::SolverConfig;
pub use error::{Error, Result};
pub use results::{score, Results};
pub use solver::{find_words, SearchStats, Solver};
pub use state::MatchOutcome;
pub use trie::Trie;

/// Shortest word that is reported or scored
pub const MIN_WORD_LENGTH: usize = 3;

/// Letters `a` through `z`
pub const ALPHABET_SIZE: usize = 26;

/// Load the small word list embedded in the crate
pub fn load_sample_dictionary() -> Trie {
    Trie::from_words(
        include_str!("../dictionary/words.txt")
            .lines()
            .filter(|line| !line.is_empty())
            .map(|s| s.to_lowercase()),
    )
}
