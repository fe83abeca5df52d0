use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChunkError {
    #[error("chunk size must be at least 1 word")]
    InvalidChunkSize,
}

/// A contiguous run of words borrowed from a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// Position of this chunk within its split
    pub index: usize,
    /// Word offset of the first word in the source sequence
    pub start: usize,
    /// The words themselves
    pub words: &'a [String],
}

impl Chunk<'_> {
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Exclusive end offset in the source sequence
    pub fn end(&self) -> usize {
        self.start + self.words.len()
    }

    /// The chunk as text, words joined by single spaces
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// Split words into consecutive chunks of `chunk_size` words.
///
/// Chunk `i` covers `[i * chunk_size, min((i + 1) * chunk_size, len))`, so
/// the chunks partition the input in order and only the last one may be
/// shorter. An empty input yields no chunks.
pub fn split_words(words: &[String], chunk_size: usize) -> Result<Vec<Chunk<'_>>, ChunkError> {
    if chunk_size == 0 {
        return Err(ChunkError::InvalidChunkSize);
    }

    Ok(words
        .chunks(chunk_size)
        .enumerate()
        .map(|(index, words)| Chunk {
            index,
            start: index * chunk_size,
            words,
        })
        .collect())
}
