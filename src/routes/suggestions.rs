use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::{SuggestionRequest, SuggestionResponse},
    routes::AppState,
};

/// Handler for the suggestion endpoint
pub async fn suggest(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<SuggestionRequest>,
) -> AppResult<Json<SuggestionResponse>> {
    tracing::info!(
        request_id = %request_id,
        language = %request.language,
        genre = %request.genre,
        year = %request.year,
        "Processing suggestion request"
    );

    let records = state.suggestions()?.suggest(&request).await.map_err(|e| {
        tracing::error!(request_id = %request_id, error = %e, "Suggestion request failed");
        e
    })?;

    let response = SuggestionResponse::from(records);

    tracing::info!(
        request_id = %request_id,
        results = response.movies.len(),
        no_matches = response.no_matches,
        "Suggestion request completed"
    );

    Ok(Json(response))
}
