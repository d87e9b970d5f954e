use getset::{CopyGetters, Getters, Setters};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::OptionsError;
use crate::language::{Alphabet, Edition};
use crate::pagination::{DEFAULT_PAGE_SIZE, DEFAULT_WINDOW_WIDTH};
use crate::sorting::{EntrySorter, DEFAULT_COLLATION_LOCALE};

/// Browse and review settings.
///
/// Every field has a default, so an options file only needs the keys it changes:
/// ```json
/// { "pageSize": 25, "alphabets": { "names": ["A", "B", "Bv"] } }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Getters, CopyGetters, Setters)]
#[serde(rename_all = "camelCase", default)]
pub struct Options {
    /// Entries per page.
    #[getset(get_copy = "pub", set = "pub")]
    page_size: usize,
    /// Page buttons shown around the current page.
    #[getset(get_copy = "pub", set = "pub")]
    page_window: usize,
    /// BCP 47 tag of the collation used to sort entries.
    #[getset(get = "pub", set = "pub")]
    collation_locale: String,
    /// Alphabets that replace the built-in table of an edition.
    #[getset(get = "pub")]
    alphabets: IndexMap<Edition, Alphabet>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_window: DEFAULT_WINDOW_WIDTH,
            collation_locale: DEFAULT_COLLATION_LOCALE.to_string(),
            alphabets: IndexMap::new(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self, OptionsError> {
        let options: Options = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads and validates an options file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|reason| OptionsError::FailedOpen {
            path: path.to_path_buf(),
            reason,
        })?;
        let options = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), "loaded options");
        Ok(options)
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.page_size == 0 {
            return Err(OptionsError::Zero { field: "pageSize" });
        }
        if self.page_window == 0 {
            return Err(OptionsError::Zero {
                field: "pageWindow",
            });
        }
        if let Some((edition, _)) = self.alphabets.iter().find(|(_, a)| a.is_empty()) {
            return Err(OptionsError::EmptyAlphabet(edition.to_string()));
        }
        self.sorter().map(|_| ())
    }

    /// The alphabet `edition` browses by: the override if one is set,
    /// the built-in table otherwise.
    pub fn alphabet(&self, edition: Edition) -> Alphabet {
        self.alphabets
            .get(&edition)
            .cloned()
            .unwrap_or_else(|| Alphabet::builtin(edition))
    }

    pub fn set_alphabet(&mut self, edition: Edition, alphabet: Alphabet) {
        self.alphabets.insert(edition, alphabet);
    }

    pub fn sorter(&self) -> Result<EntrySorter, OptionsError> {
        EntrySorter::new(&self.collation_locale)
    }
}
