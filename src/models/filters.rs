use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Language filter offered by the form
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    All,
    English,
    Hindi,
    Spanish,
    French,
    Korean,
    Japanese,
    Italian,
    German,
}

impl Language {
    /// Human-readable name used in prompts; `None` for `all`
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Language::All => None,
            Language::English => Some("English"),
            Language::Hindi => Some("Hindi"),
            Language::Spanish => Some("Spanish"),
            Language::French => Some("French"),
            Language::Korean => Some("Korean"),
            Language::Japanese => Some("Japanese"),
            Language::Italian => Some("Italian"),
            Language::German => Some("German"),
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().unwrap_or("all"))
    }
}

/// Genre filter offered by the form
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    #[default]
    All,
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Fantasy,
    Horror,
    Mystery,
    Romance,
    #[serde(rename = "sci-fi")]
    SciFi,
    Thriller,
}

impl Genre {
    /// Lowercase name used in prompts; `None` for `all`
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Genre::All => None,
            Genre::Action => Some("action"),
            Genre::Adventure => Some("adventure"),
            Genre::Animation => Some("animation"),
            Genre::Comedy => Some("comedy"),
            Genre::Crime => Some("crime"),
            Genre::Documentary => Some("documentary"),
            Genre::Drama => Some("drama"),
            Genre::Fantasy => Some("fantasy"),
            Genre::Horror => Some("horror"),
            Genre::Mystery => Some("mystery"),
            Genre::Romance => Some("romance"),
            Genre::SciFi => Some("science fiction"),
            Genre::Thriller => Some("thriller"),
        }
    }
}

impl Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().unwrap_or("all"))
    }
}

/// Release-year filter
///
/// Parsed from the form's string value. Anything that is not `all`, a
/// four-digit year, a decade such as `2010s`, or `classic` is kept as
/// [`YearBucket::Unrecognized`] so that filtering stays permissive.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum YearBucket {
    #[default]
    All,
    /// Exact release year
    Year(i32),
    /// First year of a decade, matching `[start, start + 9]`
    Decade(i32),
    /// Released before 1980
    Classic,
    Unrecognized(String),
}

/// Releases before this year count as classics
pub const CLASSIC_CUTOFF: i32 = 1980;

impl YearBucket {
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        let lower = value.to_ascii_lowercase();

        if lower.is_empty() || lower == "all" {
            return YearBucket::All;
        }
        if lower == "classic" {
            return YearBucket::Classic;
        }
        if let Some(year) = parse_four_digits(&lower) {
            return YearBucket::Year(year);
        }
        if let Some(start) = lower.strip_suffix('s').and_then(parse_four_digits) {
            if start % 10 == 0 {
                return YearBucket::Decade(start);
            }
        }

        YearBucket::Unrecognized(value.to_string())
    }
}

fn parse_four_digits(value: &str) -> Option<i32> {
    if value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit()) {
        value.parse().ok()
    } else {
        None
    }
}

impl From<String> for YearBucket {
    fn from(value: String) -> Self {
        YearBucket::parse(&value)
    }
}

impl From<YearBucket> for String {
    fn from(bucket: YearBucket) -> Self {
        bucket.to_string()
    }
}

impl Display for YearBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearBucket::All => write!(f, "all"),
            YearBucket::Year(year) => write!(f, "{}", year),
            YearBucket::Decade(start) => write!(f, "{}s", start),
            YearBucket::Classic => write!(f, "classic"),
            YearBucket::Unrecognized(raw) => write!(f, "{}", raw),
        }
    }
}
