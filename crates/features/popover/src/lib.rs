//! Popover feature slice: help texts for the resource server and client app forms.
//!
//! The [`TextBundle`] is a pure lookup table. The [`Popovers`] handle layers the configured
//! [`MissingKeyPolicy`] and logging on top of it.
//!
//! ```rust
//! use apis_popover::{init, PopoverConfig};
//!
//! let popovers = init(PopoverConfig::default());
//! assert_eq!(popovers.title("client-name").unwrap(), "Client app name");
//! assert!(popovers.title("does-not-exist").is_err());
//! ```

mod bundle;
mod error;

pub use crate::bundle::TextBundle;
pub use crate::error::{PopoverError, PopoverErrorExt};
pub use apis_domain::config::{MissingKeyPolicy, PopoverConfig};
pub use apis_domain::popover::{HelpText, PopoverForm, PopoverKey};

use std::ops::Deref;
use std::sync::Arc;
use tracing::{error, info, warn};

const BLANK: HelpText = HelpText { title: "", description: "" };

/// Popover feature state.
#[derive(Debug, Clone)]
pub struct PopoversInner {
    bundle: &'static TextBundle,
    config: PopoverConfig,
}

/// Thin Arc-wrapped handle for inexpensive cloning into render code.
#[derive(Debug, Clone)]
pub struct Popovers {
    inner: Arc<PopoversInner>,
}

impl Deref for Popovers {
    type Target = PopoversInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Initialize the popover feature over the process-wide bundle.
#[must_use]
pub fn init(config: PopoverConfig) -> Popovers {
    let bundle = TextBundle::global();
    info!(entries = bundle.len(), missing_key = ?config.missing_key, "Popover slice initialized");

    Popovers { inner: Arc::new(PopoversInner { bundle, config }) }
}

impl PopoversInner {
    #[must_use]
    pub const fn bundle(&self) -> &'static TextBundle {
        self.bundle
    }

    #[must_use]
    pub const fn config(&self) -> &PopoverConfig {
        &self.config
    }

    /// Title for the popover of `key`.
    ///
    /// # Errors
    /// Returns [`PopoverError::KeyNotFound`] for unknown keys unless the policy is
    /// [`MissingKeyPolicy::Blank`].
    pub fn title(&self, key: &str) -> Result<&'static str, PopoverError> {
        self.help_text(key).map(|text| text.title)
    }

    /// Description for the popover of `key`.
    ///
    /// # Errors
    /// Returns [`PopoverError::KeyNotFound`] for unknown keys unless the policy is
    /// [`MissingKeyPolicy::Blank`].
    pub fn content(&self, key: &str) -> Result<&'static str, PopoverError> {
        self.help_text(key).map(|text| text.description)
    }

    /// Full help text for `key`; an empty record when blanking unknown keys.
    ///
    /// # Errors
    /// Returns [`PopoverError::KeyNotFound`] for unknown keys unless the policy is
    /// [`MissingKeyPolicy::Blank`].
    pub fn help_text(&self, key: &str) -> Result<HelpText, PopoverError> {
        match self.bundle.lookup(key) {
            Ok(text) => Ok(*text),
            Err(err) => match self.config.missing_key {
                MissingKeyPolicy::FailFast => {
                    error!(key, "No popover help text registered for form field");
                    Err(err)
                },
                MissingKeyPolicy::Blank => {
                    warn!(key, "No popover help text registered for form field, rendering blank");
                    Ok(BLANK)
                },
            },
        }
    }
}
