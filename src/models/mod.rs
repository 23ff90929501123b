use serde::{Deserialize, Serialize};

pub mod filters;
pub mod movie;

pub use filters::{Genre, Language, YearBucket};
pub use movie::{MovieCard, MovieRecord, POSTER_UNAVAILABLE};

/// Form submission: a mood description plus the three filters
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct SuggestionRequest {
    pub text: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub genre: Genre,
    #[serde(default)]
    pub year: YearBucket,
}

impl SuggestionRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: Language::All,
            genre: Genre::All,
            year: YearBucket::All,
        }
    }
}

/// Message shown when a run resolves nothing
pub const NO_MATCHES_MESSAGE: &str =
    "No movies matched that mood and those filters. Try describing it differently.";

/// Response for POST /api/v1/suggestions
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub movies: Vec<MovieCard>,
    /// Set when the run succeeded but nothing survived resolution and filtering
    pub no_matches: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<Vec<MovieRecord>> for SuggestionResponse {
    fn from(records: Vec<MovieRecord>) -> Self {
        let movies: Vec<MovieCard> = records.iter().map(MovieCard::from).collect();
        let no_matches = movies.is_empty();
        Self {
            movies,
            no_matches,
            message: no_matches.then(|| NO_MATCHES_MESSAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_filters_default_to_all() {
        let request: SuggestionRequest =
            serde_json::from_str(r#"{"text": "cozy rainy day"}"#).unwrap();
        assert_eq!(request.language, Language::All);
        assert_eq!(request.genre, Genre::All);
        assert_eq!(request.year, YearBucket::All);
    }

    #[test]
    fn test_request_full_form() {
        let request: SuggestionRequest = serde_json::from_str(
            r#"{"text": "a funny family movie", "language": "english", "genre": "comedy", "year": "2010s"}"#,
        )
        .unwrap();
        assert_eq!(request.language, Language::English);
        assert_eq!(request.genre, Genre::Comedy);
        assert_eq!(request.year, YearBucket::Decade(2010));
    }

    #[test]
    fn test_empty_response_flags_no_matches() {
        let response = SuggestionResponse::from(Vec::new());
        assert!(response.no_matches);
        assert_eq!(response.message.as_deref(), Some(NO_MATCHES_MESSAGE));
    }

    #[test]
    fn test_response_omits_message_when_found() {
        let response = SuggestionResponse::from(vec![MovieRecord::new(
            "tt0435761",
            "Toy Story 3",
            "2010",
            "https://img/ts3.jpg",
        )]);
        assert!(!response.no_matches);
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("message").is_none());
        assert_eq!(json["movies"][0]["id"], "tt0435761");
    }
}
