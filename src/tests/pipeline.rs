use crate::errors::{DictionaryError, ProposalError};
use crate::language::{classify, normalize, Alphabet, Edition, NO_MATCH};
use crate::pagination::{page_window, BrowseCursor, PageWindow};
use crate::proposal::MissingField;
use crate::search::SearchScope;
use crate::settings::Options;
use crate::test_utils::SNAPSHOT_JSON;
use crate::{EntryStatus, MankonDictionary};
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

fn dictionary() -> MankonDictionary {
    let mut md = MankonDictionary::new(Options::default()).unwrap();
    md.apply_snapshot(SNAPSHOT_JSON).unwrap();
    md
}

/// `count` approved records starting with `word`, as one snapshot.
fn bulk_snapshot(word: &str, count: usize) -> String {
    let records: serde_json::Map<String, serde_json::Value> = (0..count)
        .map(|i| {
            (
                format!("-N{i:04}"),
                serde_json::json!({ "mankonWord": format!("{word}{i:04}"), "status": "approved" }),
            )
        })
        .collect();
    serde_json::Value::Object(records).to_string()
}

#[test]
fn digraph_headword_lands_under_its_digraph() {
    let md = dictionary();
    let mut cursor = BrowseCursor::new();
    let view = md.browse(Edition::Mankon, &mut cursor);
    assert_eq!(view.letter, "Tʃ");
    assert_eq!(view.entries.len(), 1);
    assert_eq!(view.entries[0].id, "-Nb1");
    let t = view.letters.iter().find(|l| l.letter == "T").unwrap();
    assert_eq!(t.count, 0);
}

#[test]
fn classification_examples() {
    let mankon = Alphabet::builtin(Edition::Mankon);
    assert_eq!(classify("Tʃuʔu", &mankon), "Tʃ");
    assert_eq!(classify("àbɨ̀", &mankon), "A");
    assert_eq!(classify("7 ndâ", &mankon), NO_MATCH);
    assert_eq!(classify("", &mankon), NO_MATCH);
    assert_eq!(normalize(&normalize("Ǹdâ")), normalize("Ǹdâ"));
}

#[test]
fn hundred_and_twenty_entries_make_three_pages() {
    let mut md = MankonDictionary::new(Options::default()).unwrap();
    assert_eq!(md.apply_snapshot(&bulk_snapshot("mbɨ", 120)).unwrap(), 120);

    let mut cursor = BrowseCursor::new();
    let first = md.browse(Edition::Mankon, &mut cursor);
    assert_eq!(first.letter, "M");
    assert_eq!((first.page, first.total_pages), (1, 3));
    assert_eq!(first.entries.len(), 50);
    assert_eq!(first.window, PageWindow { start: 1, end: 3 });

    cursor.go_to(3, first.total_pages);
    let last = md.browse(Edition::Mankon, &mut cursor);
    assert_eq!(last.entries.len(), 20);
    assert_eq!(last.entries[0].mankon_word, "mbɨ0100");
}

#[test]
fn window_near_the_ends() {
    assert_eq!(page_window(1, 10, 5), PageWindow { start: 1, end: 5 });
    assert_eq!(page_window(10, 10, 5), PageWindow { start: 6, end: 10 });
}

#[test]
fn letter_change_goes_back_to_page_one() {
    let mut md = MankonDictionary::new(Options::default()).unwrap();
    md.apply_snapshot(&bulk_snapshot("ndâ", 80)).unwrap();
    let mut cursor = BrowseCursor::new();
    cursor.select_letter("N");
    cursor.next_page(2);
    assert_eq!(md.browse(Edition::Mankon, &mut cursor).page, 2);

    cursor.select_letter("A");
    let view = md.browse(Edition::Mankon, &mut cursor);
    assert_eq!(view.letter, "A");
    assert_eq!(view.page, 1);
    assert!(view.entries.is_empty());
}

#[test]
fn new_snapshot_replaces_the_view() {
    let mut md = dictionary();
    let mut cursor = BrowseCursor::new();
    assert_eq!(md.browse(Edition::Mankon, &mut cursor).letter, "Tʃ");

    md.apply_snapshot(r#"{ "-Nc1": { "mankonWord": "ndâ", "status": "approved" } }"#)
        .unwrap();
    assert_eq!(md.store().len(), 1);
    let view = md.browse(Edition::Mankon, &mut cursor);
    assert_eq!(view.letter, "N");
    assert_eq!(view.entries[0].id, "-Nc1");

    md.apply_snapshot("null").unwrap();
    assert!(md.store().is_empty());
    assert!(md.browse(Edition::Mankon, &mut cursor).entries.is_empty());
}

#[test]
fn broken_snapshot_keeps_what_was_there() {
    let mut md = dictionary();
    let err = md.apply_snapshot("[1, 2]").unwrap_err();
    assert!(matches!(err, DictionaryError::Snapshot(_)));
    assert_eq!(md.store().len(), 2);
}

#[test]
fn english_edition_browses_by_translation() {
    let md = dictionary();
    let mut cursor = BrowseCursor::new();
    let view = md.browse(Edition::English, &mut cursor);
    assert_eq!(view.letter, "B");
    assert_eq!(view.entries[0].first_translation(), Some("bird"));
}

#[test]
fn search_ignores_tone_and_case() {
    let md = dictionary();
    let hits = md.search("TSHUU", &SearchScope::default());
    assert!(hits.is_empty());
    let hits = md.search("tʃùʔù", &SearchScope::default());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].entry.id, "-Nb1");
}

#[test]
#[traced_test]
fn review_flow() {
    let mut md = dictionary();
    let queue: Vec<&str> = md.review_queue().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(queue, vec!["-Nb2"]);

    let approved = md.approve("-Nb2").unwrap();
    assert_eq!(approved.status, EntryStatus::Approved);
    assert!(logs_contain("proposal moved"));
    assert!(md.review_queue().is_empty());

    let mut cursor = BrowseCursor::new();
    cursor.select_letter("A");
    let view = md.browse(Edition::Mankon, &mut cursor);
    assert_eq!(view.entries[0].id, "-Nb2");
}

#[test]
fn incomplete_proposal_is_refused_and_stays_pending() {
    let mut md = MankonDictionary::new(Options::default()).unwrap();
    md.apply_snapshot(
        r#"{ "-Nd1": { "mankonWord": "nùm", "status": "pending", "partOfSpeech": "noun" } }"#,
    )
    .unwrap();
    let err = md.approve("-Nd1").unwrap_err();
    let DictionaryError::Proposal(ProposalError::Incomplete { missing, .. }) = &err else {
        panic!("expected an incomplete proposal, got {err:?}");
    };
    assert_eq!(
        missing,
        &vec![
            MissingField::Sentence,
            MissingField::WordAudio,
            MissingField::SentenceAudio
        ]
    );
    assert_eq!(md.store().get("-Nd1").unwrap().status, EntryStatus::Pending);
}

#[test]
fn rejected_proposal_disappears() {
    let mut md = dictionary();
    let removed = md.reject("-Nb2").unwrap();
    assert_eq!(removed.mankon_word, "àbɨ̀");
    assert!(md.store().get("-Nb2").is_none());
    assert!(matches!(
        md.reject("-Nb1"),
        Err(DictionaryError::Proposal(ProposalError::InvalidTransition { .. }))
    ));
}
