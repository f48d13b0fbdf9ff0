//! Message splitting for Discord's content length limit.

/// Maximum characters in a single message.
pub const MESSAGE_LIMIT: usize = 2000;

/// Split `text` into consecutive slices of at most `limit` characters.
///
/// The split is positional: no word or line awareness. Slices never cut
/// through a UTF-8 sequence. Empty input yields no slices.
pub fn split_message(text: &str, limit: usize) -> Vec<&str> {
    assert!(limit > 0, "chunk limit must be positive");

    let mut chunks = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let end = rest
            .char_indices()
            .nth(limit)
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        let (chunk, tail) = rest.split_at(end);
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}
