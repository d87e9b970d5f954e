use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::dictionary::DictionaryEntry;
use crate::language::classifier::{LetterClassifier, NO_MATCH};

/// Which word of a record is used for grouping, sorting and searching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WordSelector {
    /// `mankonWord`
    #[default]
    Headword,
    /// `translatedWords[0]`, for browsing in English
    FirstTranslation,
}

impl WordSelector {
    /// The selected word, or `None` when it is absent or blank.
    pub fn select(self, entry: &DictionaryEntry) -> Option<&str> {
        match self {
            WordSelector::Headword => entry.headword(),
            WordSelector::FirstTranslation => entry.first_translation(),
        }
    }

    /// The selected word as stored, surrounding whitespace included.
    pub fn raw(self, entry: &DictionaryEntry) -> &str {
        match self {
            WordSelector::Headword => &entry.mankon_word,
            WordSelector::FirstTranslation => entry
                .translated_words
                .first()
                .map(String::as_str)
                .unwrap_or_default(),
        }
    }
}

/// Entries keyed by grapheme.
///
/// Keys are every grapheme of the alphabet in alphabet order, then [NO_MATCH].
/// Empty buckets are kept so callers can render the full letter bar.
pub type LetterBuckets<'e, T = DictionaryEntry> = IndexMap<String, Vec<&'e T>>;

/// Partitions `entries` by the grapheme their selected word starts with.
///
/// Entries whose selected word is absent are skipped; every other entry lands
/// in exactly one bucket, and buckets keep the input order. Filtering and
/// sorting are done by the caller beforehand.
pub fn group_by_letter<'e, T, I, F>(entries: I, alphabet: &[String], select: F) -> LetterBuckets<'e, T>
where
    I: IntoIterator<Item = &'e T>,
    F: Fn(&'e T) -> Option<&'e str>,
{
    let mut buckets: LetterBuckets<'e, T> = alphabet
        .iter()
        .map(|g| (g.clone(), Vec::new()))
        .collect();
    buckets.entry(NO_MATCH.to_string()).or_default();

    let classifier = LetterClassifier::new(alphabet);
    for entry in entries {
        let Some(word) = select(entry) else {
            continue;
        };
        let letter = classifier.classify(word);
        buckets.entry(letter.to_string()).or_default().push(entry);
    }
    buckets
}

/// [group_by_letter] over dictionary records with a [WordSelector].
///
/// Blank words are skipped; any other word is classified as stored, the same
/// way [crate::language::classify] would classify it.
pub fn group_entries<'e, I>(entries: I, alphabet: &[String], selector: WordSelector) -> LetterBuckets<'e>
where
    I: IntoIterator<Item = &'e DictionaryEntry>,
{
    group_by_letter(entries, alphabet, move |e| {
        selector.select(e).map(|_| selector.raw(e))
    })
}

#[cfg(test)]
mod grouping {
    use super::{group_by_letter, group_entries, WordSelector};
    use crate::dictionary::DictionaryEntry;
    use crate::language::{classify, Alphabet, Edition, NO_MATCH};
    use crate::test_utils::{entry, translated};
    use pretty_assertions::assert_eq;

    fn ids(bucket: &[&DictionaryEntry]) -> Vec<String> {
        bucket.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn every_grapheme_gets_a_bucket_and_sentinel_is_last() {
        let mankon = Alphabet::builtin(Edition::Mankon);
        let entries: Vec<DictionaryEntry> = vec![];
        let buckets = group_entries(&entries, &mankon, WordSelector::Headword);
        assert_eq!(buckets.len(), mankon.len() + 1);
        assert_eq!(buckets.keys().last().map(String::as_str), Some(NO_MATCH));
        assert!(buckets.values().all(Vec::is_empty));
    }

    #[test]
    fn partitions_every_word_exactly_once() {
        let mankon = Alphabet::builtin(Edition::Mankon);
        let entries = vec![
            entry("1", "Tʃuʔu"),
            entry("2", "tàŋ"),
            entry("3", ""),
            entry("4", "42"),
            entry("5", "àbɨ̀"),
            entry("6", "   "),
            entry("7", "tʃǐ"),
            entry("8", "bvʉ̀"),
        ];
        let buckets = group_entries(&entries, &mankon, WordSelector::Headword);
        let total: usize = buckets.values().map(Vec::len).sum();
        let with_word = entries.iter().filter(|e| e.headword().is_some()).count();
        assert_eq!(total, with_word);
        assert_eq!(total, 6);

        assert_eq!(ids(&buckets["Tʃ"]), vec!["1", "7"]);
        assert_eq!(ids(&buckets["T"]), vec!["2"]);
        assert_eq!(ids(&buckets["A"]), vec!["5"]);
        assert_eq!(ids(&buckets["Bv"]), vec!["8"]);
        assert_eq!(ids(&buckets[NO_MATCH]), vec!["4"]);
    }

    #[test]
    fn keeps_input_order_within_a_bucket() {
        let mankon = Alphabet::builtin(Edition::Mankon);
        let entries = vec![
            entry("z", "Ndâ"),
            entry("a", "nùm"),
            entry("m", "Nɛ̀"),
        ];
        let buckets = group_entries(&entries, &mankon, WordSelector::Headword);
        assert_eq!(ids(&buckets["N"]), vec!["z", "a", "m"]);
    }

    #[test]
    fn english_groups_by_first_translation() {
        let english = Alphabet::builtin(Edition::English);
        let entries = vec![
            translated("1", "ndâ", &["house", "home"]),
            translated("2", "mbɨ̀", &[]),
            translated("3", "tʃuʔu", &["" , "bird"]),
            translated("4", "nùm", &["Hand"]),
        ];
        let buckets = group_entries(&entries, &english, WordSelector::FirstTranslation);
        assert_eq!(ids(&buckets["H"]), vec!["1", "4"]);
        assert_eq!(buckets.values().map(Vec::len).sum::<usize>(), 2);
    }

    #[test]
    fn padded_words_file_where_classify_puts_them() {
        let mankon = Alphabet::builtin(Edition::Mankon);
        let entries = vec![entry("1", " Tʃu"), entry("2", "Tʃu "), entry("3", "\tndâ")];
        let buckets = group_entries(&entries, &mankon, WordSelector::Headword);
        for e in &entries {
            let letter = classify(&e.mankon_word, &mankon);
            assert!(buckets[letter].iter().any(|b| b.id == e.id), "{:?}", e.mankon_word);
        }
        assert_eq!(ids(&buckets[NO_MATCH]), vec!["1", "3"]);
        assert_eq!(ids(&buckets["Tʃ"]), vec!["2"]);

        let english = Alphabet::builtin(Edition::English);
        let entries = vec![translated("4", "ndâ", &[" house"])];
        let buckets = group_entries(&entries, &english, WordSelector::FirstTranslation);
        assert_eq!(ids(&buckets[NO_MATCH]), vec!["4"]);
    }

    #[test]
    fn accepts_any_record_with_a_closure() {
        let alphabet = Alphabet::new(["A", "B"]);
        let words = ["bee", "ant", "cat", "", "ape"];
        let buckets = group_by_letter(&words, &alphabet, |w: &&str| {
            (!w.is_empty()).then_some(*w)
        });
        assert_eq!(buckets["A"], vec![&"ant", &"ape"]);
        assert_eq!(buckets["B"], vec![&"bee"]);
        assert_eq!(buckets[NO_MATCH], vec![&"cat"]);
    }
}
