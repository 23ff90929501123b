use std::sync::Arc;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    services::{
        providers::{
            gemini::GenerationParams, GeminiProvider, MetadataProvider, OmdbProvider,
            SuggestionProvider,
        },
        SuggestionService,
    },
};

/// Shared application state
///
/// When a credential is missing the server still runs: the suggestion
/// service is absent and the route reports a configuration error instead.
#[derive(Clone)]
pub struct AppState {
    suggestions: Option<SuggestionService>,
    missing_credentials: Vec<&'static str>,
}

impl AppState {
    /// Builds state with both providers wired to the orchestrator
    pub fn new(
        generator: Arc<dyn SuggestionProvider>,
        metadata: Arc<dyn MetadataProvider>,
    ) -> Self {
        Self {
            suggestions: Some(SuggestionService::new(generator, metadata)),
            missing_credentials: Vec::new(),
        }
    }

    /// Builds state for a process started without the named credentials
    pub fn unconfigured(missing_credentials: Vec<&'static str>) -> Self {
        Self {
            suggestions: None,
            missing_credentials,
        }
    }

    /// Builds state from configuration, wiring the Gemini and OMDb providers
    pub fn from_config(config: &Config) -> Self {
        match config.credentials() {
            Ok(credentials) => {
                let generator = GeminiProvider::new(
                    credentials.gemini_api_key,
                    config.gemini_api_url.clone(),
                    config.gemini_model.clone(),
                    GenerationParams {
                        max_output_tokens: config.gemini_max_output_tokens,
                        temperature: config.gemini_temperature,
                    },
                );
                let metadata =
                    OmdbProvider::new(credentials.omdb_api_key, config.omdb_api_url.clone());

                tracing::info!(
                    generator = generator.name(),
                    metadata = metadata.name(),
                    model = %config.gemini_model,
                    "Providers configured"
                );

                Self::new(Arc::new(generator), Arc::new(metadata))
            }
            Err(missing) => {
                tracing::error!(
                    missing = ?missing,
                    "Missing API credentials; suggestions are disabled until they are set"
                );
                Self::unconfigured(missing)
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.suggestions.is_some()
    }

    pub fn missing_credentials(&self) -> &[&'static str] {
        &self.missing_credentials
    }

    /// The orchestrator, or a configuration error naming what is missing
    pub fn suggestions(&self) -> AppResult<&SuggestionService> {
        self.suggestions.as_ref().ok_or_else(|| {
            AppError::Configuration(format!(
                "Movie suggestions are unavailable: set {} and restart the server",
                self.missing_credentials.join(" and ")
            ))
        })
    }
}
