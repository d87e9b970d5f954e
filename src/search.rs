use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::dictionary::{non_blank, DictionaryEntry};
use crate::filter::EntryFilter;
use crate::language::normalize;
use crate::sorting::EntrySorter;

/// How the query relates to the matched word.
/// Variants are ordered best first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchType {
    Exact,
    Prefix,
    Contains,
}

/// Which field of the record matched.
/// Variants are ordered by preference when a record matches in several places.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchSource {
    Headword,
    Translation,
    Sentence,
}

/// Fields to look in, and which records are searchable at all.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchScope {
    pub headwords: bool,
    pub translations: bool,
    /// Matches single words of example sentences, never whole sentences.
    pub sentences: bool,
    pub filter: EntryFilter,
}

impl Default for SearchScope {
    fn default() -> Self {
        Self {
            headwords: true,
            translations: true,
            sentences: false,
            filter: EntryFilter::published(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'e> {
    pub entry: &'e DictionaryEntry,
    pub source: MatchSource,
    pub match_type: MatchType,
    /// The word that matched, as written in the record
    pub matched: &'e str,
}

fn match_type(candidate: &str, query: &str) -> Option<MatchType> {
    let candidate = normalize(candidate);
    if candidate == query {
        Some(MatchType::Exact)
    } else if candidate.starts_with(query) {
        Some(MatchType::Prefix)
    } else if candidate.contains(query) {
        Some(MatchType::Contains)
    } else {
        None
    }
}

fn candidates<'e>(
    entry: &'e DictionaryEntry,
    scope: &SearchScope,
) -> impl Iterator<Item = (MatchSource, &'e str)> {
    let SearchScope {
        headwords,
        translations,
        sentences,
        ..
    } = *scope;
    let headword = headwords
        .then(|| entry.headword())
        .flatten()
        .map(|w| (MatchSource::Headword, w));
    let translated = entry
        .translated_words
        .iter()
        .filter(move |_| translations)
        .filter_map(|t| non_blank(t))
        .map(|t| (MatchSource::Translation, t));
    let sentence_words = entry
        .sentences
        .iter()
        .filter(move |_| sentences)
        .flat_map(|s| s.mankon.unicode_words().chain(s.english.unicode_words()))
        .map(|w| (MatchSource::Sentence, w));
    headword.into_iter().chain(translated).chain(sentence_words)
}

/// Finds records containing `query`, ignoring case and diacritics.
///
/// Each record appears once, with its best match. Hits are ordered by
/// [MatchType], then [MatchSource], then collation order of the matched word.
/// A blank query finds nothing.
pub fn search<'e, I>(
    entries: I,
    query: &str,
    scope: &SearchScope,
    sorter: &EntrySorter,
) -> Vec<SearchHit<'e>>
where
    I: IntoIterator<Item = &'e DictionaryEntry>,
{
    let query = normalize(query.trim());
    if query.is_empty() {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit<'e>> = scope
        .filter
        .apply(entries)
        .into_iter()
        .filter_map(|entry| {
            candidates(entry, scope)
                .filter_map(|(source, word)| {
                    match_type(word, &query).map(|match_type| SearchHit {
                        entry,
                        source,
                        match_type,
                        matched: word,
                    })
                })
                .min_by_key(|hit| (hit.match_type, hit.source))
        })
        .collect();

    hits.sort_by(|a, b| {
        (a.match_type, a.source)
            .cmp(&(b.match_type, b.source))
            .then_with(|| sorter.compare(a.matched, b.matched))
    });
    tracing::debug!(query = %query, hits = hits.len(), "search");
    hits
}
