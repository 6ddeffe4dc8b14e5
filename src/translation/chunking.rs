/*!
 * Sentence-based chunking of long text.
 *
 * Text is split into sentence units on `". "` and the units are greedily
 * packed into segments of bounded length. Lengths are counted in characters,
 * not bytes.
 */

/// Separator between sentence units, re-inserted when packing and joining
pub const SENTENCE_DELIMITER: &str = ". ";

/// Default upper bound on segment length, in characters
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 500;

const DELIMITER_LEN: usize = 2;

/// Split `text` into segments of at most `max_chunk_size` characters
///
/// A sentence unit longer than the bound is emitted alone as an oversized
/// segment. Segments are trimmed and never empty; whitespace-only input
/// yields no segments.
pub fn split_into_segments(text: &str, max_chunk_size: usize) -> Vec<String> {
    let mut segments = Vec::new();
    let mut buffer = String::new();
    let mut buffer_len = 0usize;

    for sentence in text.split(SENTENCE_DELIMITER) {
        let sentence_len = sentence.chars().count();

        if buffer.is_empty() {
            buffer.push_str(sentence);
            buffer_len = sentence_len;
            continue;
        }

        if buffer_len + DELIMITER_LEN + sentence_len > max_chunk_size {
            push_segment(&mut segments, &buffer);
            buffer.clear();
            buffer.push_str(sentence);
            buffer_len = sentence_len;
        } else {
            buffer.push_str(SENTENCE_DELIMITER);
            buffer.push_str(sentence);
            buffer_len += DELIMITER_LEN + sentence_len;
        }
    }

    push_segment(&mut segments, &buffer);
    segments
}

fn push_segment(segments: &mut Vec<String>, buffer: &str) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        segments.push(trimmed.to_string());
    }
}

/// Reassemble segment results into one string
pub fn join_segments<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(SENTENCE_DELIMITER)
}

/// Preview of a segment for diagnostics
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_string()
    }
}
