/// OMDb metadata provider
///
/// Every call is a GET against the API root with a single selector:
/// - `t=<title>` exact-title lookup
/// - `s=<keyword>` keyword search, hits under `Search`
/// - `i=<id>` details by IMDb id
///
/// Responses carry `"Response": "True" | "False"`; "False" means not found.
use crate::{
    error::{AppError, AppResult, UpstreamService},
    models::MovieRecord,
    services::providers::{MetadataProvider, SearchHit},
};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::Value;

const CONTENT_TYPE: &str = "movie";

/// Title as returned by `t=` and `i=` lookups and inside `Search`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbTitle {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    pub title: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub poster: String,
}

impl From<OmdbTitle> for MovieRecord {
    fn from(title: OmdbTitle) -> Self {
        MovieRecord::new(title.imdb_id, title.title, title.year, title.poster)
    }
}

impl From<OmdbTitle> for SearchHit {
    fn from(title: OmdbTitle) -> Self {
        SearchHit {
            id: title.imdb_id,
            title: title.title,
        }
    }
}

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Issues one GET with the given selector and returns the decoded body
    async fn get(&self, selector: (&str, &str)) -> AppResult<Value> {
        let url = format!("{}/", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                selector,
                ("type", CONTENT_TYPE),
            ])
            .send()
            .await
            .map_err(|e| AppError::upstream(UpstreamService::Metadata, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body,
                provider = "omdb",
                "Metadata request failed"
            );
            return Err(AppError::upstream(
                UpstreamService::Metadata,
                format!("OMDb API returned status {}", status),
            ));
        }

        response.json().await.map_err(|e| {
            AppError::upstream(
                UpstreamService::Metadata,
                format!("Failed to parse OMDb response: {}", e),
            )
        })
    }

    /// True when the envelope reports a hit
    fn is_found(body: &Value) -> bool {
        body["Response"]
            .as_str()
            .is_some_and(|flag| flag.eq_ignore_ascii_case("true"))
    }

    fn parse_record(body: Value) -> AppResult<Option<MovieRecord>> {
        if !Self::is_found(&body) {
            tracing::debug!(
                reason = body["Error"].as_str().unwrap_or("unknown"),
                provider = "omdb",
                "Title not found"
            );
            return Ok(None);
        }

        let title: OmdbTitle = serde_json::from_value(body).map_err(|e| {
            AppError::upstream(
                UpstreamService::Metadata,
                format!("Invalid OMDb title format: {}", e),
            )
        })?;

        Ok(Some(title.into()))
    }

    fn parse_search(body: Value) -> AppResult<Vec<SearchHit>> {
        if !Self::is_found(&body) {
            return Ok(Vec::new());
        }

        let results = body["Search"].as_array().ok_or_else(|| {
            AppError::upstream(UpstreamService::Metadata, "Invalid OMDb search format")
        })?;

        // Malformed entries are dropped rather than failing the whole search
        let hits = results
            .iter()
            .filter_map(|result| {
                serde_json::from_value::<OmdbTitle>(result.clone())
                    .map(SearchHit::from)
                    .ok()
            })
            .collect();

        Ok(hits)
    }
}

#[async_trait::async_trait]
impl MetadataProvider for OmdbProvider {
    async fn lookup_title(&self, title: &str) -> AppResult<Option<MovieRecord>> {
        let body = self.get(("t", title)).await?;
        let record = Self::parse_record(body)?;

        tracing::debug!(
            title = %title,
            found = record.is_some(),
            provider = "omdb",
            "Title lookup completed"
        );

        Ok(record)
    }

    async fn search(&self, keyword: &str) -> AppResult<Vec<SearchHit>> {
        let body = self.get(("s", keyword)).await?;
        let hits = Self::parse_search(body)?;

        tracing::info!(
            keyword = %keyword,
            results = hits.len(),
            provider = "omdb",
            "Keyword search completed"
        );

        Ok(hits)
    }

    async fn lookup_id(&self, id: &str) -> AppResult<Option<MovieRecord>> {
        let body = self.get(("i", id)).await?;
        Self::parse_record(body)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_record_found() {
        let body = json!({
            "Title": "Up",
            "Year": "2009",
            "Rated": "PG",
            "Poster": "https://m.media-amazon.com/images/up.jpg",
            "imdbID": "tt1049413",
            "Type": "movie",
            "Response": "True"
        });

        let record = OmdbProvider::parse_record(body).unwrap().unwrap();
        assert_eq!(record.id, "tt1049413");
        assert_eq!(record.title, "Up");
        assert_eq!(record.year, "2009");
        assert!(record.has_poster());
    }

    #[test]
    fn test_parse_record_not_found() {
        let body = json!({"Response": "False", "Error": "Movie not found!"});
        assert_eq!(OmdbProvider::parse_record(body).unwrap(), None);
    }

    #[test]
    fn test_parse_record_keeps_unavailable_poster_sentinel() {
        let body = json!({
            "Title": "Obscure",
            "Year": "1975",
            "Poster": "N/A",
            "imdbID": "tt0000001",
            "Response": "True"
        });

        let record = OmdbProvider::parse_record(body).unwrap().unwrap();
        assert_eq!(record.poster, "N/A");
        assert!(!record.has_poster());
    }

    #[test]
    fn test_parse_record_missing_id_is_upstream_error() {
        let body = json!({"Title": "No Id", "Response": "True"});
        let err = OmdbProvider::parse_record(body).unwrap_err();
        assert!(err.is_upstream(UpstreamService::Metadata));
    }

    #[test]
    fn test_parse_search_hits() {
        let body = json!({
            "Search": [
                {"Title": "Paddington", "Year": "2014", "imdbID": "tt1109624", "Type": "movie", "Poster": "https://img/p.jpg"},
                {"Title": "Broken", "Year": "2001"},
                {"Title": "Paddington 2", "Year": "2017", "imdbID": "tt4468740", "Type": "movie", "Poster": "N/A"}
            ],
            "totalResults": "3",
            "Response": "True"
        });

        let hits = OmdbProvider::parse_search(body).unwrap();
        assert_eq!(
            hits,
            vec![
                SearchHit {
                    id: "tt1109624".to_string(),
                    title: "Paddington".to_string()
                },
                SearchHit {
                    id: "tt4468740".to_string(),
                    title: "Paddington 2".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_parse_search_not_found_is_empty() {
        let body = json!({"Response": "False", "Error": "Too many results."});
        assert!(OmdbProvider::parse_search(body).unwrap().is_empty());
    }
}
