use super::*;

fn make_words(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("word{}", i)).collect()
}

#[test]
fn test_split_empty_input() {
    for size in [1, 2, 500] {
        let chunks = split_words(&[], size).unwrap();
        assert!(chunks.is_empty());
    }
}

#[test]
fn test_split_partitions_input() {
    for len in [1, 2, 5, 17, 100, 501] {
        let source = make_words(len);
        for size in [1, 2, 3, 7, 50, 500, 1000] {
            let chunks = split_words(&source, size).unwrap();

            // Concatenating the chunks gives back the input exactly
            let rebuilt: Vec<String> = chunks.iter().flat_map(|c| c.words.to_vec()).collect();
            assert_eq!(rebuilt, source, "len={} size={}", len, size);

            // Every chunk but the last is full, and none is oversized
            let (last, rest) = chunks.split_last().unwrap();
            assert!(rest.iter().all(|c| c.word_count() == size));
            assert!(last.word_count() >= 1 && last.word_count() <= size);

            // Indices and offsets are contiguous
            for (i, chunk) in chunks.iter().enumerate() {
                assert_eq!(chunk.index, i);
                assert_eq!(chunk.start, i * size);
            }
        }
    }
}

#[test]
fn test_split_default_size_on_long_document() {
    let source = make_words(1200);
    let chunks = split_words(&source, DEFAULT_CHUNK_SIZE).unwrap();

    let sizes: Vec<usize> = chunks.iter().map(|c| c.word_count()).collect();
    assert_eq!(sizes, vec![500, 500, 200]);
    assert_eq!(chunks[1].words[0], "word500");
}

#[test]
fn test_split_exact_multiple() {
    let source = make_words(1000);
    let chunks = split_words(&source, DEFAULT_CHUNK_SIZE).unwrap();
    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[1].end(), 1000);
}

#[test]
fn test_split_chunk_larger_than_input() {
    let source = make_words(3);
    let chunks = split_words(&source, 10).unwrap();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].text(), "word0 word1 word2");
}
