/*!
 * Chunked translation of long text.
 *
 * This module contains the translation routine used for anime synopses.
 * It is split into several submodules:
 *
 * - `core`: the `ChunkedTranslator` and its per-segment reports
 * - `chunking`: sentence-based segmentation with a length bound
 * - `retry`: retry policy and per-segment state machine
 * - `diagnostics`: injectable sinks for translator diagnostics
 */

// Re-export main types for easier usage
pub use self::chunking::{DEFAULT_MAX_CHUNK_SIZE, SENTENCE_DELIMITER, join_segments, split_into_segments};
pub use self::core::{ChunkedTranslator, SegmentOutcome, SegmentReport, TranslationReport, TranslatorOptions};
pub use self::diagnostics::{CapturedLog, DiagnosticsSink, LogEntry, LogSink};
pub use self::retry::{Backoff, RetryPolicy, SegmentState};

// Submodules
pub mod chunking;
pub mod core;
pub mod diagnostics;
pub mod retry;
