/*!
 * # CascadeAnime - synopsis translation for the anime catalog
 *
 * A Rust library for best-effort translation of long text, such as anime
 * synopses fetched from Jikan, through a free translation API.
 *
 * ## Features
 *
 * - Sentence-based chunking with a per-segment length bound
 * - Bounded per-segment retries with exponential backoff
 * - Graceful degradation: a segment that keeps failing stays untranslated
 *   instead of failing the whole text
 * - Per-segment reports for callers that need to know what fell back
 * - Jikan details client for translating synopses
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `translation`: Chunked translation:
 *   - `translation::core`: `ChunkedTranslator` and segment reports
 *   - `translation::chunking`: Sentence segmentation
 *   - `translation::retry`: Retry policy and segment state machine
 *   - `translation::diagnostics`: Injectable diagnostics sinks
 * - `providers`: Translation endpoint clients:
 *   - `providers::mymemory`: MyMemory API client
 *   - `providers::mock`: Scripted provider for tests
 * - `catalog`: Jikan anime details client
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod catalog;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use catalog::{AnimeDetails, CatalogClient};
pub use errors::{AppError, CatalogError, ProviderError};
pub use language_utils::{get_language_name, language_codes_match, language_pair};
pub use translation::{ChunkedTranslator, SegmentOutcome, TranslationReport, TranslatorOptions};
