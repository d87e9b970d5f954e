use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Lifecycle tag of a record.
///
/// Contributors create `Initial` drafts, submit them for review (`Pending`)
/// and a reviewer publishes them (`Approved`). Rejected proposals are deleted
/// rather than tagged, so there is no `Rejected` variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    #[default]
    Initial,
    Pending,
    Approved,
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EntryStatus::Initial => "initial",
            EntryStatus::Pending => "pending",
            EntryStatus::Approved => "approved",
        };
        write!(f, "{s}")
    }
}

/// An example sentence attached to a record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentenceExample {
    #[serde(deserialize_with = "null_as_default")]
    pub mankon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub english: String,
}

/// A dictionary record as stored upstream.
///
/// Proposals and published entries share this shape; only `status` differs.
/// Upstream records are sparse, so every field defaults when missing or `null`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DictionaryEntry {
    /// Opaque key of the record in the live feed.
    /// Filled from the snapshot map key, never read from the record body.
    #[serde(skip)]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mankon_word: String,
    #[serde(deserialize_with = "null_as_default")]
    pub translated_words: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub status: EntryStatus,
    #[serde(deserialize_with = "null_as_default")]
    pub part_of_speech: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sentences: Vec<SentenceExample>,
    #[serde(deserialize_with = "null_as_default")]
    pub word_audio_filenames: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub sentence_audio_filenames: Vec<String>,
    pub contributor: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
}

impl DictionaryEntry {
    pub fn new(id: impl Into<String>, mankon_word: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            mankon_word: mankon_word.into(),
            ..Default::default()
        }
    }

    /// The headword, or `None` if it is blank.
    pub fn headword(&self) -> Option<&str> {
        non_blank(&self.mankon_word)
    }

    /// The first translation, or `None` if there is none or it is blank.
    pub fn first_translation(&self) -> Option<&str> {
        self.translated_words.first().and_then(|t| non_blank(t))
    }

    pub fn has_translation(&self) -> bool {
        self.translated_words.iter().any(|t| non_blank(t).is_some())
    }

    pub fn is_published(&self) -> bool {
        self.status == EntryStatus::Approved
    }
}

pub(crate) fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
