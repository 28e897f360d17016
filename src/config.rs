//! Search configuration.

use crate::MIN_WORD_LENGTH;

/// Tunables for a [`Solver`](crate::Solver).
///
/// The defaults are the standard Boggle rules: words of at least three
/// letters, and a `q` cell also read as `qu`.
///
/// ```
/// use boggle_solver::SolverConfig;
///
/// let config = SolverConfig::default().with_min_word_length(4);
/// assert_eq!(config.min_word_length, 4);
/// assert!(config.expand_qu);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Shortest word (after `qu` expansion) that is reported
    pub min_word_length: usize,
    /// Whether a `q` cell may also be read as `qu`
    pub expand_qu: bool,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_word_length(mut self, length: usize) -> Self {
        self.min_word_length = length;
        self
    }

    pub fn with_expand_qu(mut self, enabled: bool) -> Self {
        self.expand_qu = enabled;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            min_word_length: MIN_WORD_LENGTH,
            expand_qu: true,
        }
    }
}
