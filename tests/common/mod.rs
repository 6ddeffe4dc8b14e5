/*!
 * Common test utilities for the cascadeanime test suite
 */

use std::sync::Arc;
use std::time::Duration;

use cascadeanime::providers::mock::MockProvider;
use cascadeanime::translation::{CapturedLog, ChunkedTranslator, RetryPolicy, TranslatorOptions};

/// Route `log` output through env_logger so failures show diagnostics
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A sentence of exactly `len` characters, without a trailing period
pub fn sentence(len: usize, seed: usize) -> String {
    let letters = b"abcdefghijklmnopqrstuvwxyz";
    (0..len)
        .map(|i| {
            if i > 0 && i + 1 < len && i % 7 == 0 {
                ' '
            } else {
                letters[(i + seed) % letters.len()] as char
            }
        })
        .collect()
}

/// Text made of sentences with the given lengths, joined by ". "
pub fn text_with_sentences(lengths: &[usize]) -> String {
    lengths
        .iter()
        .enumerate()
        .map(|(i, len)| sentence(*len, i))
        .collect::<Vec<_>>()
        .join(". ")
}

/// Translator over a mock provider with a capturing diagnostics sink
pub fn translator_with(
    provider: MockProvider,
    max_chunk_size: usize,
) -> (ChunkedTranslator<MockProvider>, CapturedLog) {
    init_logging();
    let log = CapturedLog::new();
    let options = TranslatorOptions {
        max_chunk_size,
        retry: RetryPolicy::new(3, Duration::from_millis(1000)),
        ..TranslatorOptions::default()
    };
    let translator = ChunkedTranslator::with_diagnostics(provider, options, Arc::new(log.clone()));
    (translator, log)
}
