mod splitter;

#[cfg(test)]
mod tests;

pub use splitter::{Chunk, ChunkError, split_words};

/// Default words per chunk on the multi-pass path
pub const DEFAULT_CHUNK_SIZE: usize = 500;
