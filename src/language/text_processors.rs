use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static COMBINING_DIACRITICS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\u{0300}-\u{036f}]").expect("diacritics regex"));

/// A named text transformation applied when building comparison keys.
#[derive(Clone, Copy)]
pub struct TextProcessor {
    pub name: &'static str,
    pub description: &'static str,
    pub process: fn(&str) -> String,
}

fn remove_alphabetic_diacritics(text: &str) -> String {
    // NFD splits tone marks off their base letter so the regex can drop them
    let decomposed: String = text.nfd().collect();
    COMBINING_DIACRITICS
        .replace_all(&decomposed, "")
        .into_owned()
}

pub const REMOVE_ALPHABETIC_DIACRITICS: TextProcessor = TextProcessor {
    name: "Remove Alphabetic Diacritics",
    description: "àbɨ̀ → abɨ",
    process: remove_alphabetic_diacritics,
};

pub const CAPITALIZE: TextProcessor = TextProcessor {
    name: "Capitalize Text",
    description: "tʃuʔu → TƩUʔU",
    process: |text: &str| -> String { text.to_uppercase() },
};

/// Processors that turn a word into its comparison key, in application order.
pub const COMPARISON_KEY_PROCESSORS: [TextProcessor; 2] =
    [REMOVE_ALPHABETIC_DIACRITICS, CAPITALIZE];

/// Strips diacritics and tone marks and uppercases the result.
///
/// Both the word being classified and every alphabet grapheme go through this,
/// so `Tʃùʔù` and the grapheme `Tʃ` compare on the same footing.
/// `normalize(normalize(w)) == normalize(w)` for every `w`.
pub fn normalize(word: &str) -> String {
    COMPARISON_KEY_PROCESSORS
        .iter()
        .fold(word.to_owned(), |text, processor| (processor.process)(&text))
}

#[cfg(test)]
mod text_processors {
    use super::{normalize, COMPARISON_KEY_PROCESSORS};
    use pretty_assertions::assert_eq;

    const SAMPLES: &[&str] = &[
        "",
        "a",
        "Tʃùʔù",
        "dʒǐŋ",
        "àbɨ̀",
        "Mɛ̀ŋkǒŋ",
        "ǰ",
        "ΐ",
        "ẖ",
        "ß",
        "ŉ",
        "ǅ",
        "123",
        "  spaced  word ",
        "Ə̂ḿ",
        "café",
    ];

    #[test]
    fn strips_tone_marks() {
        assert_eq!(normalize("àbɨ̀"), "ABƗ");
        assert_eq!(normalize("Mɛ̀ŋkǒŋ"), "MƐŊKOŊ");
        assert_eq!(normalize("café"), "CAFE");
    }

    #[test]
    fn uppercases_ipa_letters() {
        assert_eq!(normalize("tʃuʔu"), "TƩUʔU");
        assert_eq!(normalize("Tʃ"), normalize("TƩ"));
        assert_eq!(normalize("dʒ"), "DƷ");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn idempotent() {
        for s in SAMPLES {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn processors_are_named() {
        for p in COMPARISON_KEY_PROCESSORS {
            assert!(!p.name.is_empty());
            assert!(!p.description.is_empty());
        }
    }
}
