//! Text chunking for AI analysis passes
//!
//! Chunks are built over character indices, so multi-byte text never gets
//! split inside a code point.

pub const DEFAULT_CHUNK_MAX_LEN: usize = 3000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Split text into chunks of at most `max_length` characters.
///
/// When a cut would land mid-text, the window is shortened to the last
/// sentence boundary ('.') in it, or failing that the last word boundary
/// (' '), provided the boundary falls in the second half of the window.
/// The next window starts at `max(start + max_length - overlap, end)`, so
/// the scan always advances and terminates for any input. Chunks are
/// trimmed; empty ones are dropped.
pub fn chunk_text(text: &str, max_length: usize, overlap: usize) -> Vec<String> {
    let max_length = max_length.max(1);
    let chars: Vec<char> = text.chars().collect();
    let total = chars.len();

    if total <= max_length {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut start = 0usize;

    while start < total {
        let mut end = (start + max_length).min(total);

        if start + max_length < total {
            let half = start + max_length / 2;
            match rfind_char(&chars, '.', start, end) {
                Some(dot) if dot > half => end = dot + 1,
                _ => {
                    if let Some(space) = rfind_char(&chars, ' ', start, end) {
                        if space > half {
                            end = space;
                        }
                    }
                }
            }
        }

        let chunk: String = chars[start..end].iter().collect();
        let trimmed = chunk.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }

        start = (start + max_length).saturating_sub(overlap).max(end);
    }

    chunks
}

/// Highest index of `needle` within `chars[start..end]`, if any
fn rfind_char(chars: &[char], needle: char, start: usize, end: usize) -> Option<usize> {
    chars[start..end]
        .iter()
        .rposition(|&c| c == needle)
        .map(|pos| start + pos)
}
