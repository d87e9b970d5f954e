//! Browse, search and review logic for the Mankon–English community dictionary.
//!
//! The live record feed is consumed as JSON snapshots; every snapshot replaces
//! the previous records and every view is recomputed from scratch:
//!
//! ```text
//! filter -> sort -> group by letter -> select letter -> paginate
//! ```
pub mod browse;
pub mod dictionary;
pub mod errors;
pub mod filter;
pub mod grouping;
pub mod language;
pub mod pagination;
pub mod proposal;
pub mod search;
pub mod settings;
pub mod sorting;
pub mod store;
#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod tests;

pub use browse::{BrowseView, Browser, LetterSummary};
pub use dictionary::{DictionaryEntry, EntryStatus, SentenceExample};
pub use errors::{DictionaryError, OptionsError, ProposalError, SnapshotError};
pub use filter::EntryFilter;
pub use grouping::{group_by_letter, group_entries, LetterBuckets, WordSelector};
pub use language::{classify, normalize, Alphabet, Edition, LetterClassifier, NO_MATCH};
pub use pagination::{page_window, paginate, BrowseCursor, Page, PageWindow};
pub use proposal::{is_complete, missing_fields, review_queue, MissingField};
pub use search::{search, MatchSource, MatchType, SearchHit, SearchScope};
pub use settings::Options;
pub use sorting::EntrySorter;
pub use store::EntryStore;

/// A dictionary instance: the current records plus the browse settings.
#[derive(Debug)]
pub struct MankonDictionary {
    store: EntryStore,
    browser: Browser,
}

impl MankonDictionary {
    /// An empty dictionary with `options`.
    ///
    /// # Examples
    /// ```
    /// use mankon_dictionary::{BrowseCursor, Edition, MankonDictionary, Options};
    ///
    /// let mut md = MankonDictionary::new(Options::default()).unwrap();
    /// md.apply_snapshot(r#"{ "-N1": { "mankonWord": "Tʃuʔu", "status": "approved" } }"#)
    ///     .unwrap();
    /// let mut cursor = BrowseCursor::new();
    /// let view = md.browse(Edition::Mankon, &mut cursor);
    /// assert_eq!(view.letter, "Tʃ");
    /// ```
    pub fn new(options: Options) -> Result<Self, DictionaryError> {
        Ok(Self {
            store: EntryStore::new(),
            browser: Browser::new(options)?,
        })
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }

    pub fn options(&self) -> &Options {
        self.browser.options()
    }

    /// Replaces all records with a snapshot from the live feed.
    pub fn apply_snapshot(&mut self, json: &str) -> Result<usize, DictionaryError> {
        Ok(self.store.apply_snapshot(json)?)
    }

    pub fn browse(&self, edition: Edition, cursor: &mut BrowseCursor) -> BrowseView<'_> {
        self.browser.view(self.store.entries(), edition, cursor)
    }

    pub fn search(&self, query: &str, scope: &SearchScope) -> Vec<SearchHit<'_>> {
        search::search(self.store.entries(), query, scope, self.browser.sorter())
    }

    /// Proposals ready for a reviewer.
    pub fn review_queue(&self) -> Vec<&DictionaryEntry> {
        proposal::review_queue(self.store.entries())
    }

    pub fn submit(&mut self, id: &str) -> Result<&DictionaryEntry, DictionaryError> {
        Ok(self.store.submit(id)?)
    }

    pub fn approve(&mut self, id: &str) -> Result<&DictionaryEntry, DictionaryError> {
        Ok(self.store.approve(id)?)
    }

    pub fn reject(&mut self, id: &str) -> Result<DictionaryEntry, DictionaryError> {
        Ok(self.store.reject(id)?)
    }
}
