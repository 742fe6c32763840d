use std::borrow::Cow;

/// A specialized [`PopoverError`] enum of this crate.
#[derive(Debug, thiserror::Error)]
pub enum PopoverError {
    /// The identifier has no help text registered.
    #[error("Popover key not found{}: `{key}`", format_context(.context))]
    KeyNotFound { key: String, context: Option<Cow<'static, str>> },

    /// Serde serialization error with optional context.
    #[error("Serde serialization error{}: {source}", format_context(.context))]
    SerdeSerialize { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

impl PopoverError {
    pub(crate) fn key_not_found(key: &str) -> Self {
        Self::KeyNotFound { key: key.to_owned(), context: None }
    }
}

pub trait PopoverErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PopoverError>;
}

impl<T> PopoverErrorExt<T> for Result<T, PopoverError> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                PopoverError::KeyNotFound { context: c, .. }
                | PopoverError::SerdeSerialize { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl From<serde_json::Error> for PopoverError {
    #[inline]
    fn from(source: serde_json::Error) -> Self {
        Self::SerdeSerialize { source, context: None }
    }
}

impl<T> PopoverErrorExt<T> for Result<T, serde_json::Error> {
    #[inline]
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, PopoverError> {
        self.map_err(|source| PopoverError::SerdeSerialize { source, context: Some(context.into()) })
    }
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}
