/// Below this many words the summary is rarely useful
pub const MIN_RECOMMENDED_WORDS: usize = 10;

/// An input document as an ordered sequence of whitespace-delimited words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    words: Vec<String>,
}

impl Document {
    /// Tokenize raw text on runs of whitespace
    pub fn new(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn from_words(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the document has enough words to be worth summarizing
    pub fn meets_minimum(&self) -> bool {
        self.word_count() >= MIN_RECOMMENDED_WORDS
    }

    /// Words joined back with single spaces
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

impl From<&str> for Document {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Count whitespace-delimited words without allocating
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
