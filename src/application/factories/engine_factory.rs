use std::sync::Arc;

use crate::adapters::outbound::engine::{GeminiEngine, LexiconEngine};
use crate::config::{EngineConfig, EngineProvider};
use crate::ports::outbound::AnalysisEngine;
use crate::shared::error::TrustLensError;
use crate::shared::Result;

/// Factory for creating analysis engines
///
/// Encapsulates the creation logic for the configured engine provider so
/// the rest of the application only ever sees the `AnalysisEngine` port.
pub struct EngineFactory;

impl EngineFactory {
    /// Creates the engine for the resolved configuration
    ///
    /// # Arguments
    /// * `config` - Resolved engine settings
    ///
    /// # Returns
    /// A shared AnalysisEngine trait object for the configured provider
    ///
    /// # Errors
    /// Returns an error when the Gemini provider is selected without an
    /// API key, or when the HTTP client cannot be constructed
    ///
    /// # Examples
    /// ```
    /// use trust_lens::application::factories::EngineFactory;
    /// use trust_lens::config::{EngineConfig, EngineProvider};
    ///
    /// let config = EngineConfig {
    ///     provider: EngineProvider::Lexicon,
    ///     model: "gemini-2.0-flash".to_string(),
    ///     api_key: None,
    /// };
    /// let engine = EngineFactory::create(&config).unwrap();
    /// assert_eq!(engine.name(), "lexicon");
    /// ```
    pub fn create(config: &EngineConfig) -> Result<Arc<dyn AnalysisEngine>> {
        match config.provider {
            EngineProvider::Lexicon => Ok(Arc::new(LexiconEngine::new())),
            EngineProvider::Gemini => {
                let api_key = config.api_key.clone().ok_or_else(|| TrustLensError::Config {
                    message: "the gemini engine requires an API key".to_string(),
                    hint: "Set the GOOGLE_API_KEY environment variable, or use --engine lexicon"
                        .to_string(),
                })?;
                let engine = GeminiEngine::new(api_key, config.model.clone())?;
                Ok(Arc::new(engine))
            }
        }
    }

    /// Returns the progress message for the configured provider
    pub fn progress_message(provider: EngineProvider) -> &'static str {
        match provider {
            EngineProvider::Lexicon => "🔍 Scoring reviews with the lexicon engine...",
            EngineProvider::Gemini => "🔍 Scoring reviews with Gemini...",
        }
    }
}
