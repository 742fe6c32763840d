use serde::{Deserialize, Serialize};

/// What the popover slice does when asked for an identifier it does not know.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingKeyPolicy {
    /// Surface the lookup failure to the caller.
    #[default]
    FailFast,
    /// Log a warning and render an empty string instead.
    Blank,
}

/// Popover help text configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PopoverConfig {
    pub missing_key: MissingKeyPolicy,
}

impl PopoverConfig {
    #[must_use]
    pub const fn with_missing_key(mut self, policy: MissingKeyPolicy) -> Self {
        self.missing_key = policy;
        self
    }
}
