//! Chunked transfer framing.

/// Frame `body` as HTTP/1.1 chunks of at most `max_chunk_size` bytes,
/// followed by the terminal zero-length chunk.
///
/// # Panics
/// Panics if `max_chunk_size` is zero.
pub fn encode(body: &[u8], max_chunk_size: usize) -> Vec<u8> {
    assert!(max_chunk_size > 0, "max_chunk_size must be non-zero");

    let chunks = body.len().div_ceil(max_chunk_size);
    let mut framed = Vec::with_capacity(body.len() + chunks * 12 + 5);
    for chunk in body.chunks(max_chunk_size) {
        framed.extend_from_slice(format!("{:x}\r\n", chunk.len()).as_bytes());
        framed.extend_from_slice(chunk);
        framed.extend_from_slice(b"\r\n");
    }
    // last chunk, empty trailer
    framed.extend_from_slice(b"0\r\n\r\n");
    framed
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Reverse of [`encode`]: returns the data of each chunk, terminal chunk excluded.
    pub(crate) fn decode(mut framed: &[u8]) -> Vec<Vec<u8>> {
        let mut chunks = Vec::new();
        loop {
            let line_end = framed.windows(2).position(|w| w == b"\r\n").expect("chunk size line");
            let size_line = std::str::from_utf8(&framed[..line_end]).unwrap();
            let size = usize::from_str_radix(size_line, 16).unwrap();
            framed = &framed[line_end + 2..];
            if size == 0 {
                assert_eq!(framed, b"\r\n", "terminal chunk must end the body");
                return chunks;
            }
            chunks.push(framed[..size].to_vec());
            assert_eq!(&framed[size..size + 2], b"\r\n");
            framed = &framed[size + 2..];
        }
    }

    #[test]
    fn splits_into_max_sized_chunks() {
        let framed = encode(b"HELLOWORLD", 5);
        assert_eq!(framed, b"5\r\nHELLO\r\n5\r\nWORLD\r\n0\r\n\r\n".to_vec());

        let chunks = decode(&framed);
        assert_eq!(chunks, vec![b"HELLO".to_vec(), b"WORLD".to_vec()]);
        assert_eq!(chunks.concat(), b"HELLOWORLD");
    }

    #[test]
    fn sizes_are_lowercase_hex() {
        let body = vec![b'q'; 300];
        let framed = encode(&body, 255);
        assert!(framed.starts_with(b"ff\r\n"));

        let chunks = decode(&framed);
        assert_eq!(chunks.iter().map(Vec::len).collect::<Vec<_>>(), vec![255, 45]);
    }

    #[test]
    fn empty_body_is_only_terminal_chunk() {
        assert_eq!(encode(b"", 8), b"0\r\n\r\n".to_vec());
    }

    #[test]
    #[should_panic(expected = "max_chunk_size")]
    fn zero_chunk_size_panics() {
        encode(b"abc", 0);
    }
}
