/// External API provider abstraction
///
/// The orchestrator talks to two collaborators: a text-generation API that
/// proposes candidate titles, and a movie-metadata API that turns titles and
/// ids into records. Each sits behind a trait so either can be swapped or
/// mocked without touching the orchestration logic.
use crate::{error::AppResult, models::MovieRecord};

pub mod gemini;
pub mod omdb;

pub use gemini::GeminiProvider;
pub use omdb::OmdbProvider;

/// Trait for text-generation providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Sends the prompt and returns the generated text
    ///
    /// Non-success responses and responses without text are errors.
    async fn generate(&self, prompt: &str) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// One hit from a keyword search, before details are fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
}

/// Trait for movie-metadata providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Exact-title lookup. `Ok(None)` when the provider reports "not found".
    async fn lookup_title(&self, title: &str) -> AppResult<Option<MovieRecord>>;

    /// Keyword search. An empty list when nothing matched.
    async fn search(&self, keyword: &str) -> AppResult<Vec<SearchHit>>;

    /// Detail lookup by unique id. `Ok(None)` when the id is unknown.
    async fn lookup_id(&self, id: &str) -> AppResult<Option<MovieRecord>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
