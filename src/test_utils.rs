use chrono::{TimeZone, Utc};

use crate::dictionary::{DictionaryEntry, EntryStatus, SentenceExample};

/// An approved entry with only a headword.
pub(crate) fn entry(id: &str, word: &str) -> DictionaryEntry {
    DictionaryEntry {
        status: EntryStatus::Approved,
        ..DictionaryEntry::new(id, word)
    }
}

/// An approved entry with translations.
pub(crate) fn translated(id: &str, word: &str, translations: &[&str]) -> DictionaryEntry {
    DictionaryEntry {
        translated_words: translations.iter().map(|t| t.to_string()).collect(),
        ..entry(id, word)
    }
}

/// A pending proposal that passes the completeness check.
pub(crate) fn complete_proposal(id: &str, word: &str) -> DictionaryEntry {
    DictionaryEntry {
        status: EntryStatus::Pending,
        part_of_speech: "noun".into(),
        translated_words: vec![format!("{word} (en)")],
        sentences: vec![SentenceExample {
            mankon: format!("{word} yǐ"),
            english: "this one".into(),
        }],
        word_audio_filenames: vec![format!("{id}-word.webm")],
        sentence_audio_filenames: vec![format!("{id}-sentence.webm")],
        contributor: Some("tester".into()),
        ..DictionaryEntry::new(id, word)
    }
}

/// [complete_proposal] submitted `minutes` after a fixed epoch.
pub(crate) fn submitted(id: &str, word: &str, minutes: i64) -> DictionaryEntry {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    DictionaryEntry {
        submitted_at: Some(base + chrono::Duration::minutes(minutes)),
        ..complete_proposal(id, word)
    }
}

/// `count` approved entries named `prefix0`, `prefix1`, ...
pub(crate) fn numbered(prefix: &str, count: usize) -> Vec<DictionaryEntry> {
    (0..count)
        .map(|i| entry(&format!("{prefix}-{i}"), &format!("{prefix}{i}")))
        .collect()
}

/// A two-record snapshot as the live feed would push it.
pub(crate) const SNAPSHOT_JSON: &str = r#"{
    "-Nb1": {
        "mankonWord": "Tʃuʔu",
        "translatedWords": ["bird"],
        "status": "approved",
        "partOfSpeech": "noun"
    },
    "-Nb2": {
        "mankonWord": "àbɨ̀",
        "translatedWords": ["knife"],
        "status": "pending",
        "partOfSpeech": "noun",
        "sentences": [{ "mankon": "àbɨ̀ yǐ", "english": "this knife" }],
        "wordAudioFilenames": ["abi.webm"],
        "sentenceAudioFilenames": ["abi-s1.webm"],
        "contributor": "ngwa",
        "submittedAt": "2024-02-10T08:30:00Z"
    }
}"#;
