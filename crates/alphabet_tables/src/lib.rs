use indexmap::IndexMap;
use serde::Deserialize;
use std::sync::LazyLock;

/// Key of the full Mankon alphabet (general vocabulary).
pub const MANKON: &str = "mankon";
/// Key of the Mankon alphabet used by the names list.
/// It has no `Gv` and no glottal stop `ʔ`.
pub const NAMES: &str = "names";
/// Key of the English alphabet, used when browsing by translation.
pub const ENGLISH: &str = "english";

#[derive(Deserialize, Debug, Clone)]
struct EditionTable {
    edition: String,
    graphemes: Vec<String>,
}

/// Ordered grapheme lists, keyed by edition, in file order.
#[derive(Debug, Clone)]
pub struct AlphabetTables {
    editions: IndexMap<String, Vec<String>>,
}

impl AlphabetTables {
    /// Parses the embedded edition tables.
    ///
    /// This function will panic if the embedded JSON data is invalid,
    /// which can only happen if `json_lists/editions.json` is edited badly.
    fn new() -> Self {
        let editions_json = include_str!("../json_lists/editions.json");
        let tables: Vec<EditionTable> =
            serde_json::from_str(editions_json).expect("Failed to parse editions.json");

        let mut editions = IndexMap::new();
        for table in tables {
            assert!(
                !table.graphemes.is_empty(),
                "edition `{}` has no graphemes",
                table.edition
            );
            editions.insert(table.edition, table.graphemes);
        }
        AlphabetTables { editions }
    }

    /// Returns the graphemes of `edition` in alphabet order.
    pub fn get(&self, edition: &str) -> Option<&[String]> {
        self.editions.get(edition).map(Vec::as_slice)
    }

    pub fn editions(&self) -> impl Iterator<Item = &str> {
        self.editions.keys().map(String::as_str)
    }
}

static DEFAULT_TABLES: LazyLock<AlphabetTables> = LazyLock::new(AlphabetTables::new);

/// Graphemes of a built-in edition, or `None` for an unknown key.
pub fn graphemes(edition: &str) -> Option<&'static [String]> {
    DEFAULT_TABLES.get(edition)
}

/// Keys of every built-in edition.
pub fn editions() -> impl Iterator<Item = &'static str> {
    DEFAULT_TABLES.editions()
}
