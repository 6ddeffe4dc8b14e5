/*!
 * Chunked translation with per-segment retry.
 *
 * `ChunkedTranslator` splits text into bounded segments, translates each one
 * through a `Provider` with bounded retries and exponential backoff, and
 * falls back to the original segment text when the retries run out. It never
 * returns an error.
 */

use log::Level;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::providers::{Provider, TranslationRequest};
use super::chunking::{self, DEFAULT_MAX_CHUNK_SIZE};
use super::diagnostics::{DiagnosticsSink, LogSink};
use super::retry::{Backoff, RetryPolicy, SegmentState};

/// Translation options for customizing the translation process
#[derive(Debug, Clone, PartialEq)]
pub struct TranslatorOptions {
    /// Maximum characters per segment
    pub max_chunk_size: usize,

    /// Retry budget and backoff per segment
    pub retry: RetryPolicy,

    /// Source language code
    pub source_language: String,

    /// Target language code
    pub target_language: String,
}

impl Default for TranslatorOptions {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            retry: RetryPolicy::default(),
            source_language: "en".to_string(),
            target_language: "es".to_string(),
        }
    }
}

/// Result for one segment
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentOutcome {
    /// The provider returned this translation
    Translated(String),
    /// Retries were exhausted; holds the original segment text
    Fallback(String),
}

impl SegmentOutcome {
    pub fn text(&self) -> &str {
        match self {
            SegmentOutcome::Translated(text) | SegmentOutcome::Fallback(text) => text,
        }
    }

    pub fn is_translated(&self) -> bool {
        matches!(self, SegmentOutcome::Translated(_))
    }
}

/// What happened to one segment
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentReport {
    /// Segment text before translation
    pub source: String,
    /// Final outcome
    pub outcome: SegmentOutcome,
    /// Number of provider requests issued
    pub attempts: u32,
    /// Backoff delays waited between attempts, in order
    ///
    /// The delay keeps doubling across segments of the same call, so a later
    /// segment may start above the initial backoff.
    pub backoff: Vec<Duration>,
}

/// Per-segment results of a `translate_detailed` call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationReport {
    pub segments: Vec<SegmentReport>,
}

impl TranslationReport {
    /// Reassembled output, identical to what `translate` returns
    pub fn text(&self) -> String {
        let parts: Vec<&str> = self.segments.iter().map(|s| s.outcome.text()).collect();
        chunking::join_segments(&parts)
    }

    /// Number of segments left untranslated
    pub fn fallback_count(&self) -> usize {
        self.segments.iter().filter(|s| !s.outcome.is_translated()).count()
    }

    /// True when every segment was translated
    pub fn is_complete(&self) -> bool {
        self.fallback_count() == 0
    }

    /// Provider requests issued across all segments
    pub fn total_attempts(&self) -> u32 {
        self.segments.iter().map(|s| s.attempts).sum()
    }
}

/// Best-effort translator for arbitrarily long text
#[derive(Debug)]
pub struct ChunkedTranslator<P: Provider> {
    provider: P,
    options: TranslatorOptions,
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl<P: Provider> ChunkedTranslator<P> {
    /// Create a translator that reports through the `log` facade
    pub fn new(provider: P, options: TranslatorOptions) -> Self {
        Self::with_diagnostics(provider, options, Arc::new(LogSink))
    }

    /// Create a translator with an explicit diagnostics sink
    pub fn with_diagnostics(provider: P, options: TranslatorOptions, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        Self {
            provider,
            options,
            diagnostics,
        }
    }

    pub fn options(&self) -> &TranslatorOptions {
        &self.options
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Split text the way `translate` will
    pub fn segments(&self, text: &str) -> Vec<String> {
        chunking::split_into_segments(text, self.options.max_chunk_size)
    }

    /// Translate `text`, leaving any segment that keeps failing untranslated
    pub async fn translate(&self, text: &str) -> String {
        self.translate_detailed(text).await.text()
    }

    /// Translate `text` and report the outcome of every segment
    pub async fn translate_detailed(&self, text: &str) -> TranslationReport {
        self.translate_detailed_with_progress(text, |_, _| {}).await
    }

    /// Same as `translate_detailed`, calling `progress(done, total)` after each segment
    pub async fn translate_detailed_with_progress(
        &self,
        text: &str,
        progress: impl Fn(usize, usize) + Send + Sync,
    ) -> TranslationReport {
        if text.trim().is_empty() {
            return TranslationReport::default();
        }

        let start_time = Instant::now();
        let segments = self.segments(text);
        let total = segments.len();

        self.log(Level::Debug, format!("Split text into {} segment(s)", total));

        let mut backoff = self.options.retry.backoff();
        let mut reports = Vec::with_capacity(total);
        for (index, segment) in segments.into_iter().enumerate() {
            let report = self.translate_segment(index, total, segment, &mut backoff).await;
            reports.push(report);
            progress(index + 1, total);
        }

        let report = TranslationReport { segments: reports };
        if report.is_complete() {
            self.log(
                Level::Info,
                format!("Translated {} segment(s) in {:?}", total, start_time.elapsed()),
            );
        } else {
            self.log(
                Level::Warn,
                format!(
                    "{} of {} segment(s) left untranslated after {:?}",
                    report.fallback_count(),
                    total,
                    start_time.elapsed()
                ),
            );
        }
        report
    }

    async fn translate_segment(
        &self,
        index: usize,
        total: usize,
        segment: String,
        backoff: &mut Backoff,
    ) -> SegmentReport {
        let mut state = SegmentState::Attempting(1);
        let mut attempts = 0;
        let mut waited = Vec::new();

        self.log(
            Level::Debug,
            format!("Translating segment {}/{}: {}", index + 1, total, chunking::preview(&segment, 50)),
        );

        while let SegmentState::Attempting(attempt) = state {
            attempts = attempt;
            let request = TranslationRequest::new(
                segment.clone(),
                self.options.source_language.clone(),
                self.options.target_language.clone(),
            );

            match self.provider.translate(request).await {
                Ok(text) if !text.is_empty() => {
                    state = SegmentState::Succeeded(text);
                }
                Ok(_) => {
                    self.log(
                        Level::Error,
                        format!("Attempt {} for segment {}/{} returned no text", attempt, index + 1, total),
                    );
                    state = self.fail(state, backoff, &mut waited).await;
                }
                Err(e) => {
                    self.log(
                        Level::Error,
                        format!("Attempt {} for segment {}/{} failed: {}", attempt, index + 1, total, e),
                    );
                    state = self.fail(state, backoff, &mut waited).await;
                }
            }
        }

        let outcome = match state {
            SegmentState::Succeeded(text) => SegmentOutcome::Translated(text),
            _ => {
                self.log(
                    Level::Warn,
                    format!(
                        "Max attempts reached for segment {}/{}, keeping original text",
                        index + 1,
                        total
                    ),
                );
                SegmentOutcome::Fallback(segment.clone())
            }
        };

        SegmentReport {
            source: segment,
            outcome,
            attempts,
            backoff: waited,
        }
    }

    async fn fail(&self, state: SegmentState, backoff: &mut Backoff, waited: &mut Vec<Duration>) -> SegmentState {
        let (next, delay) = state.after_failure(&self.options.retry, backoff);
        if let Some(delay) = delay {
            self.log(Level::Debug, format!("Retrying in {:?}", delay));
            tokio::time::sleep(delay).await;
            waited.push(delay);
        }
        next
    }

    fn log(&self, level: Level, message: String) {
        self.diagnostics.record(level, message);
    }
}
