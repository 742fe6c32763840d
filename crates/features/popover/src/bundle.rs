//! The process-wide table of popover help texts.

use crate::error::{PopoverError, PopoverErrorExt};
use apis_domain::popover::{HelpText, PopoverForm, PopoverKey};
use fxhash::FxHashMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::LazyLock;
use strum::IntoEnumIterator;

static BUNDLE: LazyLock<TextBundle> = LazyLock::new(TextBundle::build);

/// Immutable mapping from form-field identifier to its [`HelpText`].
///
/// Built once on first access and shared by every reader for the lifetime of the process.
#[derive(Debug)]
pub struct TextBundle {
    // Indexed by `PopoverKey` discriminant.
    texts: Vec<HelpText>,
    index: FxHashMap<&'static str, PopoverKey>,
}

impl TextBundle {
    fn build() -> Self {
        let texts = PopoverKey::iter().map(PopoverKey::help_text).collect();
        let index = PopoverKey::iter().map(|key| (key.as_str(), key)).collect();
        Self { texts, index }
    }

    /// Returns the process-wide bundle.
    #[must_use]
    pub fn global() -> &'static Self {
        &BUNDLE
    }

    /// Resolves a form-field identifier to its typed key.
    ///
    /// # Errors
    /// Returns [`PopoverError::KeyNotFound`] when the identifier is not registered.
    pub fn resolve(&self, key: &str) -> Result<PopoverKey, PopoverError> {
        self.index.get(key).copied().ok_or_else(|| PopoverError::key_not_found(key))
    }

    /// Returns the full entry for `key`.
    ///
    /// # Errors
    /// Returns [`PopoverError::KeyNotFound`] when the identifier is not registered.
    pub fn lookup(&self, key: &str) -> Result<&HelpText, PopoverError> {
        self.resolve(key).map(|key| self.entry(key))
    }

    /// Returns the title shown in the popover header.
    ///
    /// # Errors
    /// Returns [`PopoverError::KeyNotFound`] when the identifier is not registered.
    pub fn title(&self, key: &str) -> Result<&'static str, PopoverError> {
        self.lookup(key).map(|text| text.title)
    }

    /// Returns the long description shown in the popover body.
    ///
    /// # Errors
    /// Returns [`PopoverError::KeyNotFound`] when the identifier is not registered.
    pub fn content(&self, key: &str) -> Result<&'static str, PopoverError> {
        self.lookup(key).map(|text| text.description)
    }

    #[must_use]
    pub fn entry(&self, key: PopoverKey) -> &HelpText {
        &self.texts[key as usize]
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Registered keys in form order.
    pub fn keys(&self) -> impl Iterator<Item = PopoverKey> {
        self.iter().map(|(key, _)| key)
    }

    /// Entries in form order.
    pub fn iter(&self) -> impl Iterator<Item = (PopoverKey, &HelpText)> {
        self.into_iter()
    }

    /// Entries rendered on one form, in form order.
    pub fn for_form(&self, form: PopoverForm) -> impl Iterator<Item = (PopoverKey, &HelpText)> {
        self.iter().filter(move |(key, _)| key.form() == form)
    }

    /// Serializes the bundle as a compact JSON object keyed by identifier.
    ///
    /// # Errors
    /// Returns [`PopoverError::SerdeSerialize`] if serialization fails.
    pub fn to_json(&self) -> Result<String, PopoverError> {
        serde_json::to_string(self).context("Serializing popover bundle")
    }

    /// Same as [`TextBundle::to_json`], indented for human readers.
    ///
    /// # Errors
    /// Returns [`PopoverError::SerdeSerialize`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, PopoverError> {
        serde_json::to_string_pretty(self).context("Serializing popover bundle")
    }
}

impl Serialize for TextBundle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, text) in self.iter() {
            map.serialize_entry(&key, text)?;
        }
        map.end()
    }
}

impl<'a> IntoIterator for &'a TextBundle {
    type Item = (PopoverKey, &'a HelpText);
    type IntoIter =
        std::iter::Zip<<PopoverKey as IntoEnumIterator>::Iterator, std::slice::Iter<'a, HelpText>>;

    fn into_iter(self) -> Self::IntoIter {
        PopoverKey::iter().zip(self.texts.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn build_covers_every_key() {
        let bundle = TextBundle::build();
        assert_eq!(bundle.len(), PopoverKey::COUNT);
        assert_eq!(bundle.index.len(), PopoverKey::COUNT);
        for key in PopoverKey::iter() {
            assert_eq!(bundle.entry(key), &key.help_text());
            assert_eq!(bundle.resolve(key.as_str()).unwrap(), key);
        }
    }

    #[test]
    fn global_is_built_once() {
        assert!(std::ptr::eq(TextBundle::global(), TextBundle::global()));
    }

    #[test]
    fn iteration_order_follows_the_forms() {
        let bundle = TextBundle::global();
        let first = bundle.iter().next().map(|(key, _)| key);
        let last = bundle.iter().last().map(|(key, _)| key);
        assert_eq!(first, Some(PopoverKey::ResourceServerName));
        assert_eq!(last, Some(PopoverKey::ClientAttributes));
    }
}
