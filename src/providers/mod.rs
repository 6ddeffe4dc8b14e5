/*!
 * Provider implementations for translation services.
 *
 * This module contains client implementations for the translation endpoint:
 * - MyMemory: the free public translation API used by the catalog
 * - Mock: scripted provider used by the test suite
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// A single translation call for one segment
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    /// The text to translate
    pub text: String,
    /// Source language code
    pub source_language: String,
    /// Target language code
    pub target_language: String,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        source_language: impl Into<String>,
        target_language: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source_language: source_language.into(),
            target_language: target_language.into(),
        }
    }
}

/// Common trait for all translation providers
///
/// Implementations perform exactly one request per call and never retry;
/// retrying is the translator's job.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Translate one segment
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - Non-empty translated text, or an error
    async fn translate(&self, request: TranslationRequest) -> Result<String, ProviderError>;

    /// Test the connection to the provider
    async fn test_connection(&self) -> Result<(), ProviderError>;
}

pub mod mock;
pub mod mymemory;
