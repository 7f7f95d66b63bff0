#![forbid(unsafe_code)]

/// Index of the padding marker.
pub const PAD: usize = 0;
/// Index of the unknown-word marker. Unmatched words tokenize to this.
pub const UNK: usize = 1;
/// Index of the sequence-start marker.
pub const START: usize = 2;

/// Surface form of the padding marker.
pub const PAD_WORD: &str = "<PAD>";
/// Surface form of the unknown-word marker; also returned for any
/// out-of-range detokenization.
pub const UNK_WORD: &str = "<UNK>";
/// Surface form of the sequence-start marker.
pub const START_WORD: &str = "<START>";
/// The literal word that terminates a generated sentence.
pub const TERMINATOR: &str = ".";

/// True for marker words that never appear in the visible reply.
pub fn is_marker(word: &str) -> bool {
    matches!(word, PAD_WORD | UNK_WORD | START_WORD)
}

/// Fixed, ordered word table. Index 0..3 are the reserved markers above;
/// the rest is the trained vocabulary in model order.
pub struct Vocab {
    words: Vec<String>,
}

impl Vocab {
    /// Wrap an already-ordered word list.
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Build from string slices (handy for fixtures).
    pub fn from_words(words: &[&str]) -> Self {
        Self::new(words.iter().map(|w| w.to_string()).collect())
    }

    /// Build from newline-separated text, one word per line; blank lines
    /// are skipped.
    pub fn from_lines(text: &str) -> Self {
        Self::new(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Number of entries (V).
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-fold `word` and scan for an exact match; the first matching
    /// index wins. Unmatched words map to [`UNK`] — never an error.
    pub fn token_id(&self, word: &str) -> usize {
        let lower = word.to_lowercase();
        self.words.iter().position(|w| *w == lower).unwrap_or(UNK)
    }

    /// Entry at `idx`, or the literal [`UNK_WORD`] when `idx` is outside
    /// the table.
    pub fn word(&self, idx: usize) -> &str {
        self.words.get(idx).map(String::as_str).unwrap_or(UNK_WORD)
    }
}
