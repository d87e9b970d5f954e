use derive_more::derive::{Deref, From};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dictionary edition: which alphabet it browses by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edition {
    /// General Mankon vocabulary, browsed by headword.
    #[default]
    Mankon,
    /// The Mankon names list, browsed by headword.
    Names,
    /// Browsed by the first English translation.
    English,
}

impl Edition {
    pub const ALL: [Edition; 3] = [Edition::Mankon, Edition::Names, Edition::English];

    /// Key of this edition in the built-in [alphabet_tables].
    pub fn table_key(self) -> &'static str {
        match self {
            Edition::Mankon => alphabet_tables::MANKON,
            Edition::Names => alphabet_tables::NAMES,
            Edition::English => alphabet_tables::ENGLISH,
        }
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table_key())
    }
}

/// An ordered list of graphemes.
///
/// Graphemes may span several characters (`Tʃ`, `Dʒ`, `Bv`);
/// see [crate::language::classifier] for how they are matched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Deref, From)]
#[serde(transparent)]
pub struct Alphabet(Vec<String>);

impl Alphabet {
    pub fn new<I, S>(graphemes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(graphemes.into_iter().map(Into::into).collect())
    }

    /// The built-in alphabet of `edition`.
    pub fn builtin(edition: Edition) -> Self {
        let graphemes = alphabet_tables::graphemes(edition.table_key()).unwrap_or_default();
        Self(graphemes.to_vec())
    }

    pub fn graphemes(&self) -> &[String] {
        &self.0
    }
}
