//! Engine and display configuration
//!
//! Configuration is passed around as plain values; nothing here is global.

use std::io::IsTerminal;
use std::time::Duration;

use crate::eval::Weights;

/// Default per-move time budget
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(5);

/// Search configuration.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use othello::config::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_time_limit(Duration::from_millis(200))
///     .with_max_depth(Some(6));
/// assert_eq!(config.max_depth, Some(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Wall-clock budget per move request
    pub time_limit: Duration,
    /// Optional cap on iterative deepening
    pub max_depth: Option<u32>,
    /// Evaluator weights
    pub weights: Weights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            max_depth: None,
            weights: Weights::DEFAULT,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Time limit from fractional seconds; see [`budget_from_secs`].
    #[must_use]
    pub fn with_time_limit_secs(self, secs: f64) -> Self {
        self.with_time_limit(budget_from_secs(secs))
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<u32>) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }
}

/// Convert a budget in seconds to a [`Duration`].
///
/// Negative, NaN and out-of-range values become zero.
#[must_use]
pub fn budget_from_secs(secs: f64) -> Duration {
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
}

/// Terminal rendering options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayConfig {
    /// Draw the board with ANSI colour escapes
    pub ansi_colors: bool,
}

impl DisplayConfig {
    pub fn plain() -> Self {
        Self { ansi_colors: false }
    }

    pub fn colored() -> Self {
        Self { ansi_colors: true }
    }

    /// Colours on when stdout is a terminal, except on Windows consoles.
    pub fn detect() -> Self {
        Self {
            ansi_colors: !cfg!(windows) && std::io::stdout().is_terminal(),
        }
    }
}
