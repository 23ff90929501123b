use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use crate::{
    error::{AppError, AppResult, UpstreamService},
    models::{MovieRecord, SuggestionRequest},
    services::{
        prompt::{build_prompt, parse_candidate_titles},
        providers::{MetadataProvider, SuggestionProvider},
        year_filter::filter_by_year,
    },
};

/// Turns a mood description into a list of resolved movies
///
/// The flow is linear:
/// 1. Ask the generation provider for candidate titles
/// 2. Resolve each title against the metadata provider, one at a time
/// 3. If nothing resolved, fall back to a keyword search on the mood text
/// 4. Drop records without posters, then apply the year filter
///
/// Records are deduplicated by id in resolution order; the first record
/// seen for an id wins.
#[derive(Clone)]
pub struct SuggestionService {
    generator: Arc<dyn SuggestionProvider>,
    metadata: Arc<dyn MetadataProvider>,
}

impl SuggestionService {
    pub fn new(generator: Arc<dyn SuggestionProvider>, metadata: Arc<dyn MetadataProvider>) -> Self {
        Self {
            generator,
            metadata,
        }
    }

    /// Runs one suggestion request end to end
    ///
    /// An empty vector is a valid outcome meaning "no matches".
    pub async fn suggest(&self, request: &SuggestionRequest) -> AppResult<Vec<MovieRecord>> {
        let start = Instant::now();

        let text = request.text.trim();
        if text.is_empty() {
            return Err(AppError::InvalidInput(
                "Describe a mood to get suggestions".to_string(),
            ));
        }

        let prompt = build_prompt(text, request.language, request.genre, &request.year);
        let generated = self.generator.generate(&prompt).await?;

        let candidates = parse_candidate_titles(&generated);
        if candidates.is_empty() {
            tracing::error!(
                provider = self.generator.name(),
                generated = %generated,
                "Generated text contained no titles"
            );
            return Err(AppError::upstream(
                UpstreamService::Suggestion,
                "Generated text contained no movie titles",
            ));
        }

        tracing::info!(
            candidates = candidates.len(),
            provider = self.generator.name(),
            "Candidate titles generated"
        );

        let mut seen = HashSet::new();
        let mut records = self.resolve_titles(&candidates, &mut seen).await;

        if records.is_empty() {
            tracing::info!("No candidate titles resolved, falling back to keyword search");
            records = self.keyword_fallback(&request.text, &mut seen).await?;
        }

        let resolved = records.len();
        let with_posters: Vec<MovieRecord> =
            records.into_iter().filter(MovieRecord::has_poster).collect();
        let filtered = filter_by_year(with_posters, &request.year);

        tracing::info!(
            resolved,
            returned = filtered.len(),
            year = %request.year,
            duration_ms = start.elapsed().as_millis() as u64,
            "Suggestion request completed"
        );

        Ok(filtered)
    }

    /// Looks up each candidate by exact title, skipping failures
    async fn resolve_titles(
        &self,
        candidates: &[String],
        seen: &mut HashSet<String>,
    ) -> Vec<MovieRecord> {
        let mut records = Vec::new();

        for title in candidates {
            match self.metadata.lookup_title(title).await {
                Ok(Some(record)) => keep_unseen(record, seen, &mut records),
                Ok(None) => {
                    tracing::warn!(title = %title, "Candidate title not found");
                }
                Err(e) => {
                    tracing::warn!(title = %title, error = %e, "Candidate title lookup failed");
                }
            }
        }

        records
    }

    /// Searches by the mood text and fetches details for unseen hits
    ///
    /// The search call itself propagates failures; per-hit detail lookups
    /// are skipped on failure.
    async fn keyword_fallback(
        &self,
        keyword: &str,
        seen: &mut HashSet<String>,
    ) -> AppResult<Vec<MovieRecord>> {
        let hits = self.metadata.search(keyword).await.map_err(|e| {
            tracing::error!(
                error = %e,
                provider = self.metadata.name(),
                "Keyword search failed"
            );
            e
        })?;

        let mut records = Vec::new();

        for hit in hits {
            if seen.contains(&hit.id) {
                continue;
            }

            match self.metadata.lookup_id(&hit.id).await {
                Ok(Some(record)) => keep_unseen(record, seen, &mut records),
                Ok(None) => {
                    tracing::warn!(id = %hit.id, title = %hit.title, "Search hit has no details");
                }
                Err(e) => {
                    tracing::warn!(id = %hit.id, error = %e, "Search hit lookup failed");
                }
            }
        }

        Ok(records)
    }
}

fn keep_unseen(record: MovieRecord, seen: &mut HashSet<String>, records: &mut Vec<MovieRecord>) {
    if seen.insert(record.id.clone()) {
        records.push(record);
    } else {
        tracing::debug!(id = %record.id, title = %record.title, "Duplicate record skipped");
    }
}
