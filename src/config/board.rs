//! Board presentation and request settings.

use serde::{Deserialize, Serialize};

fn default_date_format() -> String {
    "%m/%d/%Y".to_owned()
}

/// What to do when a status update or delete request fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryPolicy {
    /// Never retry; the user re-triggers the gesture.
    #[default]
    None,
    /// Retry network failures straight away, up to `attempts` more times.
    Immediate {
        /// Extra attempts after the first failure.
        attempts: u8,
    },
}

impl RetryPolicy {
    /// Returns how many extra attempts a network failure earns.
    #[must_use]
    pub const fn extra_attempts(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Immediate { attempts } => attempts,
        }
    }
}

/// Board settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BoardConfig {
    /// `chrono` format string for card dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Retry behaviour for failed mutations.
    #[serde(default)]
    pub retry: RetryPolicy,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            retry: RetryPolicy::default(),
        }
    }
}
