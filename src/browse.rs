use serde::Serialize;

use crate::dictionary::DictionaryEntry;
use crate::errors::OptionsError;
use crate::filter::EntryFilter;
use crate::grouping::{group_entries, WordSelector};
use crate::language::{Edition, NO_MATCH};
use crate::pagination::{page_window, paginate, BrowseCursor, PageWindow};
use crate::settings::Options;
use crate::sorting::EntrySorter;

/// Part of speech that puts an entry in the names list.
pub const NAME_PART_OF_SPEECH: &str = "name";

impl Edition {
    pub fn word_selector(self) -> WordSelector {
        match self {
            Edition::Mankon | Edition::Names => WordSelector::Headword,
            Edition::English => WordSelector::FirstTranslation,
        }
    }

    /// The records an edition lists before any caller filter.
    pub fn base_filter(self) -> EntryFilter {
        match self {
            Edition::Mankon => EntryFilter::published(),
            Edition::Names => EntryFilter::published().part_of_speech(NAME_PART_OF_SPEECH),
            Edition::English => EntryFilter::published().require_translation(),
        }
    }
}

/// A letter of the letter bar and how many entries it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LetterSummary {
    pub letter: String,
    pub count: usize,
}

/// Everything a browse page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseView<'e> {
    pub edition: Edition,
    /// Every grapheme then `#`, with counts
    pub letters: Vec<LetterSummary>,
    /// The bucket shown
    pub letter: String,
    pub entries: Vec<&'e DictionaryEntry>,
    pub page: usize,
    pub total_pages: usize,
    pub window: PageWindow,
}

/// Runs filter, sort, group, letter selection and pagination.
#[derive(Debug)]
pub struct Browser {
    options: Options,
    sorter: EntrySorter,
}

impl Browser {
    pub fn new(options: Options) -> Result<Self, OptionsError> {
        options.validate()?;
        let sorter = options.sorter()?;
        Ok(Self { options, sorter })
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn sorter(&self) -> &EntrySorter {
        &self.sorter
    }

    /// Builds the view of `edition` at `cursor`.
    ///
    /// Without a letter, or with one the edition does not have, the first
    /// non-empty bucket is shown. The cursor is updated to what is shown:
    /// a different letter means page 1, and the page is kept within range.
    pub fn view<'e, I>(&self, entries: I, edition: Edition, cursor: &mut BrowseCursor) -> BrowseView<'e>
    where
        I: IntoIterator<Item = &'e DictionaryEntry>,
    {
        self.view_filtered(entries, edition, &edition.base_filter(), cursor)
    }

    /// [Self::view] with a caller-chosen filter instead of the edition's.
    pub fn view_filtered<'e, I>(
        &self,
        entries: I,
        edition: Edition,
        filter: &EntryFilter,
        cursor: &mut BrowseCursor,
    ) -> BrowseView<'e>
    where
        I: IntoIterator<Item = &'e DictionaryEntry>,
    {
        let selector = edition.word_selector();
        let alphabet = self.options.alphabet(edition);

        let mut kept = filter.apply(entries);
        self.sorter.sort(&mut kept, selector);
        let mut buckets = group_entries(kept, &alphabet, selector);

        let letters: Vec<LetterSummary> = buckets
            .iter()
            .map(|(letter, bucket)| LetterSummary {
                letter: letter.clone(),
                count: bucket.len(),
            })
            .collect();

        let letter = cursor
            .letter()
            .filter(|l| buckets.contains_key(*l))
            .map(str::to_string)
            .or_else(|| {
                letters
                    .iter()
                    .find(|s| s.count > 0)
                    .or(letters.first())
                    .map(|s| s.letter.clone())
            })
            .unwrap_or_else(|| NO_MATCH.to_string());
        let bucket = buckets.swap_remove(&letter).unwrap_or_default();

        let page_size = self.options.page_size();
        let total_pages = crate::pagination::total_pages(bucket.len(), page_size);
        cursor.settle(&letter, total_pages);

        let page = paginate(&bucket, cursor.page(), page_size);
        let window = page_window(page.number, total_pages, self.options.page_window());
        tracing::trace!(%edition, letter = %letter, page = page.number, total_pages, "browse view");

        BrowseView {
            edition,
            letters,
            entries: page.items.to_vec(),
            page: page.number,
            total_pages,
            window,
            letter,
        }
    }
}
