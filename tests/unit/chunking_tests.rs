/*!
 * Tests for sentence-based segmentation
 */

use cascadeanime::translation::{DEFAULT_MAX_CHUNK_SIZE, join_segments, split_into_segments};

use crate::common::{sentence, text_with_sentences};

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[test]
fn test_split_withShortSentence_shouldProduceOneSegment() {
    let text = "Spike Spiegel is a bounty hunter.";
    let segments = split_into_segments(text, DEFAULT_MAX_CHUNK_SIZE);
    assert_eq!(segments, vec![text.to_string()]);
}

#[test]
fn test_split_withEmptyInput_shouldProduceNoSegments() {
    assert!(split_into_segments("", DEFAULT_MAX_CHUNK_SIZE).is_empty());
}

#[test]
fn test_split_thenJoin_shouldReconstructInput() {
    let text = text_with_sentences(&[120, 300, 80, 450, 60, 200, 10, 499, 3, 250]);

    let segments = split_into_segments(&text, DEFAULT_MAX_CHUNK_SIZE);

    assert!(segments.len() > 1);
    assert_eq!(join_segments(&segments), text);
}

#[test]
fn test_split_withPaddedSentences_shouldReconstructModuloWhitespace() {
    let text = "aaaa.  bbbb.   cccc. dddd";

    let segments = split_into_segments(text, 6);
    let rejoined = join_segments(&segments);

    let words = |s: &str| s.split_whitespace().map(str::to_string).collect::<Vec<_>>();
    assert_eq!(words(&rejoined), words(text));
    assert!(segments.iter().all(|s| s.trim() == s));
}

#[test]
fn test_split_withSurroundingWhitespace_shouldTrim() {
    let text = " Leading and trailing.  Next one ";
    let segments = split_into_segments(text, DEFAULT_MAX_CHUNK_SIZE);
    assert_eq!(segments, vec![text.trim().to_string()]);
}

#[test]
fn test_split_withManySentences_shouldRespectBound() {
    let lengths: Vec<usize> = (0..60).map(|i| 20 + (i * 37) % 400).collect();
    let text = text_with_sentences(&lengths);

    let segments = split_into_segments(&text, DEFAULT_MAX_CHUNK_SIZE);

    for segment in &segments {
        assert!(char_len(segment) <= DEFAULT_MAX_CHUNK_SIZE, "segment of {} chars", char_len(segment));
        assert!(!segment.is_empty());
    }
}

#[test]
fn test_split_shouldPackGreedily() {
    // 240 + 2 + 240 fits, a third sentence does not
    let text = text_with_sentences(&[240, 240, 240]);

    let segments = split_into_segments(&text, DEFAULT_MAX_CHUNK_SIZE);

    assert_eq!(segments.len(), 2);
    assert_eq!(char_len(&segments[0]), 482);
    assert_eq!(char_len(&segments[1]), 240);
}

#[test]
fn test_split_withSeparatorPushingOverBound_shouldStartNewSegment() {
    // 250 + 250 is exactly the bound but the separator adds two characters
    let text = text_with_sentences(&[250, 250]);

    let segments = split_into_segments(&text, DEFAULT_MAX_CHUNK_SIZE);

    assert_eq!(segments.len(), 2);
}

#[test]
fn test_split_withOversizedSentence_shouldIsolateIt() {
    let text = text_with_sentences(&[100, 700, 100]);

    let segments = split_into_segments(&text, DEFAULT_MAX_CHUNK_SIZE);

    assert_eq!(segments.len(), 3);
    assert_eq!(char_len(&segments[0]), 100);
    assert_eq!(char_len(&segments[1]), 700);
    assert_eq!(char_len(&segments[2]), 100);
}

#[test]
fn test_split_withOversizedFirstSentence_shouldNotEmitEmptySegment() {
    let text = text_with_sentences(&[700, 50]);

    let segments = split_into_segments(&text, DEFAULT_MAX_CHUNK_SIZE);

    assert_eq!(segments.len(), 2);
    assert!(segments.iter().all(|s| !s.is_empty()));
    assert_eq!(segments[0], sentence(700, 0));
}

#[test]
fn test_split_withoutDelimiter_shouldKeepWholeText() {
    let text = sentence(1200, 3);
    let segments = split_into_segments(&text, DEFAULT_MAX_CHUNK_SIZE);
    assert_eq!(segments, vec![text]);
}

#[test]
fn test_resplit_ofSegments_shouldBeStable() {
    let text = text_with_sentences(&[120, 300, 80, 450, 60, 700, 10, 499, 3, 250, 240, 240]);

    let segments = split_into_segments(&text, DEFAULT_MAX_CHUNK_SIZE);

    for segment in &segments {
        let resplit = split_into_segments(segment, DEFAULT_MAX_CHUNK_SIZE);
        assert_eq!(resplit, vec![segment.clone()]);
    }
}
