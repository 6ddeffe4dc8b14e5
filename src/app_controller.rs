use anyhow::{Context, Result};
use log::{info, warn};
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::Config;
use crate::catalog::{AnimeDetails, CatalogClient};
use crate::providers::Provider;
use crate::providers::mymemory::MyMemory;
use crate::translation::{ChunkedTranslator, DiagnosticsSink, LogSink, TranslationReport};

// @module: Application controller wiring config, translator and catalog

/// Main application controller
pub struct Controller<P: Provider> {
    // @field: App configuration
    config: Config,
    translator: ChunkedTranslator<P>,
    catalog: CatalogClient,
}

impl Controller<MyMemory> {
    // @method: Create a controller backed by the MyMemory endpoint
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;

        let provider = MyMemory::new_with_timeout(
            config.translation.endpoint.clone(),
            config.translation.contact_email.clone(),
            Duration::from_secs(config.translation.timeout_secs),
        );
        Ok(Self::with_provider(config, provider, Arc::new(LogSink)))
    }
}

impl<P: Provider> Controller<P> {
    /// Create a controller around any provider
    pub fn with_provider(config: Config, provider: P, diagnostics: Arc<dyn DiagnosticsSink>) -> Self {
        let options = config
            .translation
            .translator_options(&config.source_language, &config.target_language);
        let catalog = CatalogClient::new(
            config.catalog.api_base_url.clone(),
            Duration::from_secs(config.catalog.timeout_secs),
        );

        Self {
            translator: ChunkedTranslator::with_diagnostics(provider, options, diagnostics),
            catalog,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn translator(&self) -> &ChunkedTranslator<P> {
        &self.translator
    }

    /// Check that the translation endpoint answers
    pub async fn test_connection(&self) -> Result<()> {
        let config = &self.config;
        self.translator
            .provider()
            .test_connection()
            .await
            .with_context(|| {
                format!(
                    "Translation endpoint is unreachable for {} -> {}",
                    config.source_language, config.target_language
                )
            })?;
        info!("Translation endpoint is reachable");
        Ok(())
    }

    /// Translate free text, reporting progress per segment
    pub async fn translate_text(
        &self,
        text: &str,
        progress: impl Fn(usize, usize) + Send + Sync,
    ) -> TranslationReport {
        self.translator.translate_detailed_with_progress(text, progress).await
    }

    /// Replace the synopsis of `details` with its translation
    pub async fn translate_synopsis(&self, mut details: AnimeDetails) -> AnimeDetails {
        match details.synopsis.take() {
            Some(synopsis) => {
                info!("Translating synopsis for '{}'", details.title);
                let report = self.translator.translate_detailed(&synopsis).await;
                if !report.is_complete() {
                    warn!(
                        "Synopsis for '{}' is only partially translated ({} segment(s) kept in {})",
                        details.title,
                        report.fallback_count(),
                        self.config.source_language
                    );
                }
                details.synopsis = Some(report.text());
            }
            None => {
                info!("'{}' has no synopsis to translate", details.title);
            }
        }
        details
    }

    /// Fetch an anime and translate its synopsis
    ///
    /// Catalog failures propagate; translation failures only degrade the synopsis.
    pub async fn anime_with_translated_synopsis(&self, id: u64) -> Result<AnimeDetails> {
        let details = self.catalog.fetch_anime_details(id).await
            .with_context(|| format!("Failed to fetch details for anime {}", id))?;

        Ok(self.translate_synopsis(details).await)
    }
}
