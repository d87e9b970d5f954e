use serde::{Deserialize, Serialize};

use crate::dictionary::{DictionaryEntry, EntryStatus};

/// Predicates applied to records before sorting and grouping.
///
/// Every set predicate must hold. The default filter keeps everything.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntryFilter {
    /// Keep only these statuses; `None` keeps all.
    pub statuses: Option<Vec<EntryStatus>>,
    /// Keep only this part of speech, compared case-insensitively.
    pub part_of_speech: Option<String>,
    /// Drop records without a non-blank translation.
    pub require_translation: bool,
}

impl EntryFilter {
    /// Published entries only.
    pub fn published() -> Self {
        Self::with_statuses([EntryStatus::Approved])
    }

    pub fn with_statuses(statuses: impl IntoIterator<Item = EntryStatus>) -> Self {
        Self {
            statuses: Some(statuses.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn part_of_speech(mut self, pos: impl Into<String>) -> Self {
        self.part_of_speech = Some(pos.into());
        self
    }

    pub fn require_translation(mut self) -> Self {
        self.require_translation = true;
        self
    }

    pub fn matches(&self, entry: &DictionaryEntry) -> bool {
        if let Some(statuses) = &self.statuses {
            if !statuses.contains(&entry.status) {
                return false;
            }
        }
        if let Some(pos) = &self.part_of_speech {
            if !entry.part_of_speech.trim().eq_ignore_ascii_case(pos.trim()) {
                return false;
            }
        }
        !self.require_translation || entry.has_translation()
    }

    /// Matching records, in input order.
    pub fn apply<'e, I>(&self, entries: I) -> Vec<&'e DictionaryEntry>
    where
        I: IntoIterator<Item = &'e DictionaryEntry>,
    {
        entries.into_iter().filter(|e| self.matches(e)).collect()
    }
}
