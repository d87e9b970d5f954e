//! The review workflow for contributed records.
//!
//! ```text
//! initial --submit--> pending --approve--> approved
//!    \                   |
//!     `----reject--------+--> (deleted)
//! ```
//!
//! `approve` additionally requires [is_complete]. The same predicate decides
//! which proposals the review queue offers, so a reviewer is never shown a
//! proposal that would then be refused.

use serde::Serialize;
use std::fmt;

use crate::dictionary::{non_blank, DictionaryEntry, EntryStatus};
use crate::errors::ProposalError;

/// A field a proposal needs before it can be approved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MissingField {
    Headword,
    Sentence,
    WordAudio,
    SentenceAudio,
    PartOfSpeech,
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MissingField::Headword => "headword",
            MissingField::Sentence => "example sentence",
            MissingField::WordAudio => "word audio",
            MissingField::SentenceAudio => "sentence audio",
            MissingField::PartOfSpeech => "part of speech",
        };
        write!(f, "{s}")
    }
}

/// Every required field `entry` lacks, in a fixed order.
pub fn missing_fields(entry: &DictionaryEntry) -> Vec<MissingField> {
    let any_non_blank = |list: &[String]| list.iter().any(|s| non_blank(s).is_some());

    let mut missing = Vec::new();
    if entry.headword().is_none() {
        missing.push(MissingField::Headword);
    }
    if !entry
        .sentences
        .iter()
        .any(|s| non_blank(&s.mankon).is_some())
    {
        missing.push(MissingField::Sentence);
    }
    if !any_non_blank(&entry.word_audio_filenames) {
        missing.push(MissingField::WordAudio);
    }
    if !any_non_blank(&entry.sentence_audio_filenames) {
        missing.push(MissingField::SentenceAudio);
    }
    if non_blank(&entry.part_of_speech).is_none() {
        missing.push(MissingField::PartOfSpeech);
    }
    missing
}

/// Whether `entry` carries everything an approved entry must have:
/// a headword, an example sentence, word audio, sentence audio and a part of speech.
pub fn is_complete(entry: &DictionaryEntry) -> bool {
    missing_fields(entry).is_empty()
}

/// A reviewer or contributor action on a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Submit,
    Approve,
    Reject,
}

impl Transition {
    fn target(self) -> &'static str {
        match self {
            Transition::Submit => "pending",
            Transition::Approve => "approved",
            Transition::Reject => "rejected",
        }
    }
}

/// Checks `transition` against `entry`.
///
/// # Returns
/// - `Some(status)`: the status the record moves to
/// - `None`: the record is to be deleted (rejection)
pub fn next_status(
    entry: &DictionaryEntry,
    transition: Transition,
) -> Result<Option<EntryStatus>, ProposalError> {
    let invalid = || ProposalError::InvalidTransition {
        id: entry.id.clone(),
        from: entry.status,
        to: transition.target(),
    };
    match (entry.status, transition) {
        (EntryStatus::Initial, Transition::Submit) => Ok(Some(EntryStatus::Pending)),
        (EntryStatus::Pending, Transition::Approve) => {
            let missing = missing_fields(entry);
            if !missing.is_empty() {
                return Err(ProposalError::Incomplete {
                    id: entry.id.clone(),
                    missing,
                });
            }
            Ok(Some(EntryStatus::Approved))
        }
        (EntryStatus::Initial | EntryStatus::Pending, Transition::Reject) => Ok(None),
        _ => Err(invalid()),
    }
}

/// Pending, complete proposals; oldest submission first.
/// Proposals without a submission time come last, in input order.
pub fn review_queue<'e, I>(entries: I) -> Vec<&'e DictionaryEntry>
where
    I: IntoIterator<Item = &'e DictionaryEntry>,
{
    let mut queue: Vec<&DictionaryEntry> = entries
        .into_iter()
        .filter(|e| e.status == EntryStatus::Pending && is_complete(e))
        .collect();
    queue.sort_by_key(|e| (e.submitted_at.is_none(), e.submitted_at));
    queue
}
