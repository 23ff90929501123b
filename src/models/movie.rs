use serde::{Deserialize, Serialize};

/// Sentinel the metadata API uses when no poster exists
pub const POSTER_UNAVAILABLE: &str = "N/A";

/// Base URL of the external detail page for a title
const DETAIL_PAGE_BASE: &str = "https://www.imdb.com/title";

/// A movie resolved against the metadata API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MovieRecord {
    /// Stable per-title identifier (IMDb id), used for dedup
    pub id: String,
    pub title: String,
    /// Release year as reported upstream; may be a range like "2010–2012"
    pub year: String,
    /// Poster URL or [`POSTER_UNAVAILABLE`]
    pub poster: String,
}

impl MovieRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        year: impl Into<String>,
        poster: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: year.into(),
            poster: poster.into(),
        }
    }

    /// True when the record carries a usable poster URL
    pub fn has_poster(&self) -> bool {
        let poster = self.poster.trim();
        !poster.is_empty() && poster != POSTER_UNAVAILABLE
    }

    /// Year parsed as an integer, if the field is numeric
    pub fn parsed_year(&self) -> Option<i32> {
        self.year.trim().parse().ok()
    }

    /// External detail page keyed by the record's id
    pub fn detail_url(&self) -> String {
        format!("{}/{}/", DETAIL_PAGE_BASE, self.id)
    }
}

/// Card rendered by the display layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieCard {
    pub id: String,
    pub title: String,
    pub year: String,
    pub poster: String,
    pub link: String,
}

impl From<&MovieRecord> for MovieCard {
    fn from(record: &MovieRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            year: record.year.clone(),
            poster: record.poster.clone(),
            link: record.detail_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_poster() {
        let with = MovieRecord::new("tt1", "Up", "2009", "https://img/up.jpg");
        let without = MovieRecord::new("tt2", "Lost", "2001", "N/A");
        let blank = MovieRecord::new("tt3", "Blank", "2001", " ");
        assert!(with.has_poster());
        assert!(!without.has_poster());
        assert!(!blank.has_poster());
    }

    #[test]
    fn test_parsed_year() {
        assert_eq!(MovieRecord::new("a", "b", " 2010 ", "p").parsed_year(), Some(2010));
        assert_eq!(MovieRecord::new("a", "b", "2010–2012", "p").parsed_year(), None);
        assert_eq!(MovieRecord::new("a", "b", "N/A", "p").parsed_year(), None);
    }

    #[test]
    fn test_card_links_to_detail_page() {
        let record = MovieRecord::new("tt1049413", "Up", "2009", "https://img/up.jpg");
        let card = MovieCard::from(&record);
        assert_eq!(card.link, "https://www.imdb.com/title/tt1049413/");
        assert_eq!(card.title, "Up");
    }
}
