use std::{sync::Arc, time::Duration};

use portable_atomic::{AtomicBool, Ordering};

use crate::heuristic::HeuristicKind;

/// A cloneable flag for cancelling a running search from another thread.
///
/// The search polls the token once per loop iteration, so cancellation takes
/// effect between expansions and never interrupts one.
///
/// # Examples
///
/// ```
/// use slidetile_solver::{CancellationToken, SolveConfig, SolveError, solve};
///
/// let token = CancellationToken::new();
/// let config = SolveConfig::new().with_cancellation(token.clone());
///
/// token.cancel();
/// let result = solve(&[1, 2, 3, 4, 0, 5, 7, 8, 6], &config);
/// assert!(matches!(result, Err(SolveError::Cancelled { .. })));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token that is not yet cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of every search holding a clone of this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Configuration for a solve.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use slidetile_solver::{HeuristicKind, SolveConfig};
///
/// let config = SolveConfig::new()
///     .with_dimension(4)
///     .with_max_states_expanded(1_000_000)
///     .with_max_duration(Duration::from_secs(5))
///     .with_heuristic(HeuristicKind::Manhattan);
/// assert_eq!(config.dimension(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct SolveConfig {
    dimension: usize,
    max_states_expanded: Option<usize>,
    max_duration: Option<Duration>,
    cancellation: Option<CancellationToken>,
    heuristic: HeuristicKind,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            dimension: Self::DEFAULT_DIMENSION,
            max_states_expanded: None,
            max_duration: None,
            cancellation: None,
            heuristic: HeuristicKind::default(),
        }
    }
}

impl SolveConfig {
    /// Grid dimension used unless configured otherwise (the 8-puzzle).
    pub const DEFAULT_DIMENSION: usize = 3;

    /// Creates the default configuration: 3×3, no budgets, Manhattan distance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grid dimension N.
    #[must_use]
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Caps the number of states the search may expand.
    #[must_use]
    pub fn with_max_states_expanded(mut self, max: usize) -> Self {
        self.max_states_expanded = Some(max);
        self
    }

    /// Caps the wall-clock time the search may run.
    #[must_use]
    pub fn with_max_duration(mut self, max: Duration) -> Self {
        self.max_duration = Some(max);
        self
    }

    /// Attaches a cancellation token.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Selects the heuristic.
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Returns the grid dimension N.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the expansion budget, if any.
    #[must_use]
    pub fn max_states_expanded(&self) -> Option<usize> {
        self.max_states_expanded
    }

    /// Returns the time budget, if any.
    #[must_use]
    pub fn max_duration(&self) -> Option<Duration> {
        self.max_duration
    }

    /// Returns the cancellation token, if any.
    #[must_use]
    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }

    /// Returns the selected heuristic.
    #[must_use]
    pub fn heuristic(&self) -> HeuristicKind {
        self.heuristic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolveConfig::default();
        assert_eq!(config.dimension(), 3);
        assert_eq!(config.max_states_expanded(), None);
        assert_eq!(config.max_duration(), None);
        assert!(config.cancellation().is_none());
        assert_eq!(config.heuristic(), HeuristicKind::Manhattan);
    }

    #[test]
    fn test_token_clones_share_state() {
        let token = CancellationToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_token_cancel_crosses_threads() {
        let token = CancellationToken::new();
        let remote = token.clone();
        std::thread::spawn(move || remote.cancel()).join().unwrap();
        assert!(token.is_cancelled());
    }
}
