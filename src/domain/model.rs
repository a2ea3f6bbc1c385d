use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Digits appended at every level, in emission order.
pub const DIGITS: &[u8; 10] = b"0123456789";

/// Number of lines a walk of `depth` emits: `10^max(depth, 1)`.
///
/// Returns `None` when the count does not fit in a `u64` (depth > 19).
pub fn expected_line_count(depth: u32) -> Option<u64> {
    10u64.checked_pow(depth.max(1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Strategy {
    /// Explicit work stack and a single reused line buffer.
    #[default]
    Iterative,
    /// Plain call-stack recursion, one `String` per level.
    Recursive,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Iterative => f.write_str("iterative"),
            Strategy::Recursive => f.write_str("recursive"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationRequest {
    pub prefix: String,
    pub depth: u32,
    pub strategy: Strategy,
}

impl EnumerationRequest {
    pub fn new(prefix: impl Into<String>, depth: u32) -> Self {
        Self {
            prefix: prefix.into(),
            depth,
            strategy: Strategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn expected_lines(&self) -> Option<u64> {
        expected_line_count(self.depth)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub prefix: String,
    pub depth: u32,
    pub strategy: Strategy,
    pub lines_written: u64,
    pub expected_lines: Option<u64>,
    /// File path, or `"stdout"`.
    pub output: String,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
}
