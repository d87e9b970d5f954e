use super::text_processors::normalize;

/// Bucket for words that start with no grapheme of the alphabet.
pub const NO_MATCH: &str = "#";

/// Decides which alphabet grapheme a word starts with.
///
/// Graphemes are probed longest first, so a word beginning with the digraph
/// `Tʃ` lands under `Tʃ` and not under `T`. Graphemes of equal length keep
/// their alphabet order. The probe list is built once per alphabet.
#[derive(Debug, Clone)]
pub struct LetterClassifier<'a> {
    graphemes: &'a [String],
    /// `(index into graphemes, normalized grapheme)`, longest grapheme first
    probes: Vec<(usize, String)>,
}

impl<'a> LetterClassifier<'a> {
    pub fn new(graphemes: &'a [String]) -> Self {
        let mut probes: Vec<(usize, String)> = graphemes
            .iter()
            .enumerate()
            .map(|(i, g)| (i, normalize(g)))
            // a grapheme made only of diacritics would prefix every word
            .filter(|(_, key)| !key.is_empty())
            .collect();
        // stable: equal lengths keep alphabet order
        probes.sort_by_key(|(i, _)| std::cmp::Reverse(graphemes[*i].chars().count()));
        Self { graphemes, probes }
    }

    /// Returns the grapheme `word` is filed under, or [NO_MATCH].
    pub fn classify(&self, word: &str) -> &'a str {
        let key = normalize(word);
        if key.is_empty() {
            return NO_MATCH;
        }
        self.probes
            .iter()
            .find(|(_, probe)| key.starts_with(probe.as_str()))
            .map(|(i, _)| self.graphemes[*i].as_str())
            .unwrap_or(NO_MATCH)
    }

    pub fn graphemes(&self) -> &'a [String] {
        self.graphemes
    }
}

/// One-off classification of `word` against `alphabet`.
///
/// Prefer building a [LetterClassifier] when classifying many words.
pub fn classify<'a>(word: &str, alphabet: &'a [String]) -> &'a str {
    LetterClassifier::new(alphabet).classify(word)
}
