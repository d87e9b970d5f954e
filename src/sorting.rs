use std::cmp::Ordering;

use icu::collator::{Collator, CollatorOptions};
use icu::locid::Locale;

use crate::dictionary::DictionaryEntry;
use crate::errors::OptionsError;
use crate::grouping::WordSelector;

pub const DEFAULT_COLLATION_LOCALE: &str = "en-US";

/// Locale-aware ordering of records by their selected word.
pub struct EntrySorter {
    locale: Locale,
    collator: Collator,
}

impl EntrySorter {
    pub fn new(locale: &str) -> Result<Self, OptionsError> {
        let invalid = |reason: String| OptionsError::Locale {
            locale: locale.to_string(),
            reason,
        };
        let parsed: Locale = locale.parse().map_err(|e| invalid(format!("{e}")))?;
        let collator = Collator::try_new(&(&parsed).into(), CollatorOptions::new())
            .map_err(|e| invalid(format!("{e}")))?;
        Ok(Self {
            locale: parsed,
            collator,
        })
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }

    /// Stable sort by selected word.
    /// Records without a selected word go last, in input order.
    pub fn sort(&self, entries: &mut [&DictionaryEntry], selector: WordSelector) {
        entries.sort_by(|a, b| match (selector.select(a), selector.select(b)) {
            (Some(a), Some(b)) => self.compare(a, b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });
    }
}

#[cfg(test)]
impl Default for EntrySorter {
    fn default() -> Self {
        Self::new(DEFAULT_COLLATION_LOCALE).expect("en-US collation data is compiled in")
    }
}

impl std::fmt::Debug for EntrySorter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntrySorter")
            .field("locale", &self.locale.to_string())
            .finish()
    }
}
