//! Word search over a letter grid.
//!
//! The search is a breadth-first sweep over path states. Every cell seeds a
//! path; each path is extended to its unused neighbours for as long as its
//! letters are still a prefix of some dictionary word. The trie prunes dead
//! paths after a single lookup, so the work done is proportional to the
//! number of live prefixes on the board rather than to the number of paths.

use std::collections::{HashSet, VecDeque};

use log::{debug, trace};
use rayon::prelude::*;

use crate::board::Board;
use crate::config::SolverConfig;
use crate::error::Result;
use crate::results::Results;
use crate::state::{BoardState, MatchOutcome};
use crate::trie::Trie;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Path states taken off the worklist
    pub states_dequeued: u64,
    /// Path states dropped because the trie had no continuation
    pub states_pruned: u64,
    /// Extra paths created by reading a `q` cell as `qu`
    pub qu_branches: u64,
    /// Largest worklist size seen
    pub max_queue_len: usize,
}

/// Finds dictionary words on boards.
///
/// The solver owns its dictionary and only reads it during a search, so one
/// solver can be shared across threads and used for any number of boards.
#[derive(Debug, Clone)]
pub struct Solver {
    trie: Trie,
    config: SolverConfig,
}

impl Solver {
    pub fn new(trie: Trie) -> Self {
        Self::with_config(trie, SolverConfig::default())
    }

    pub fn with_config(trie: Trie, config: SolverConfig) -> Self {
        Self { trie, config }
    }

    /// A solver whose dictionary is read from a one-word-per-line file.
    pub fn from_dictionary_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Trie::load(path)?))
    }

    /// Add the words of a dictionary file to this solver's dictionary.
    ///
    /// On a read error the words loaded so far are kept.
    pub fn load_dictionary<P: AsRef<std::path::Path>>(&mut self, path: P) -> Result<usize> {
        self.trie.load_into(path)
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    pub fn config(&self) -> SolverConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SolverConfig) {
        self.config = config;
    }

    /// All distinct dictionary words that can be traced on `board`.
    pub fn find_words(&self, board: &Board) -> HashSet<String> {
        self.search(board).0
    }

    /// Find and score all words on `board`.
    pub fn solve(&self, board: &Board) -> Results {
        Results::from_words(self.find_words(board))
    }

    /// Solve independent boards in parallel. Each board is searched on a
    /// single thread; results come back in input order.
    pub fn solve_batch(&self, boards: &[Board]) -> Vec<Results> {
        boards.par_iter().map(|board| self.solve(board)).collect()
    }

    /// Find all words on `board`, also returning search counters.
    pub fn search(&self, board: &Board) -> (HashSet<String>, SearchStats) {
        search(&self.trie, board, &self.config)
    }
}

fn search(
    trie: &Trie,
    board: &Board,
    config: &SolverConfig,
) -> (HashSet<String>, SearchStats) {
    let mut stats = SearchStats::default();
    let mut found = HashSet::new();

    let mut queue: VecDeque<BoardState> = (0..board.len())
        .map(|cell| BoardState::new(board, trie, cell))
        .collect();

    while let Some(mut state) = queue.pop_front() {
        stats.states_dequeued += 1;

        if let Some(qu_branch) = state.enter(board, config.expand_qu) {
            stats.qu_branches += 1;
            queue.push_back(qu_branch);
        }

        let outcome = state.match_path(trie);

        if outcome == MatchOutcome::FullMatch
            && state.letters().len() >= config.min_word_length
        {
            let word = state.word();
            trace!("found {:?} ending at cell {}", word, state.next_cell());
            found.insert(word);
        }

        if outcome.is_match() {
            queue.extend(
                state
                    .open_neighbors(board)
                    .map(|cell| state.branch_to(cell)),
            );
        } else {
            stats.states_pruned += 1;
        }

        stats.max_queue_len = stats.max_queue_len.max(queue.len());
    }

    debug!(
        "searched {}x{} board: {} words, {} states ({} pruned, {} qu branches, peak queue {})",
        board.width(),
        board.height(),
        found.len(),
        stats.states_dequeued,
        stats.states_pruned,
        stats.qu_branches,
        stats.max_queue_len
    );

    (found, stats)
}

/// Find all words of `trie` on a flat row-major board of `width * height`
/// cells.
///
/// The geometry is checked before the search starts.
pub fn find_words(
    trie: &Trie,
    cells: &[u8],
    width: usize,
    height: usize,
) -> Result<HashSet<String>> {
    let board = Board::new(cells, width, height)?;
    Ok(search(trie, &board, &SolverConfig::default()).0)
}
