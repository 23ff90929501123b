use crate::models::{Genre, Language, YearBucket};

/// Builds the generation prompt for a mood and its filters
pub fn build_prompt(text: &str, language: Language, genre: Genre, year: &YearBucket) -> String {
    let movies = language
        .label()
        .map(|l| format!("{}-language movies", l))
        .unwrap_or_else(|| "movies in any language".to_string());
    let genre = genre
        .label()
        .map(|g| format!("in the {} genre", g))
        .unwrap_or_else(|| "of any genre".to_string());

    format!(
        "Suggest 5-8 well-known {movies} {genre}, {period}, \
         that match this mood: \"{text}\". \
         Respond with only the movie titles, comma-separated, no explanation.",
        movies = movies,
        genre = genre,
        period = year_phrase(year),
        text = text,
    )
}

fn year_phrase(year: &YearBucket) -> String {
    match year {
        YearBucket::Year(y) => format!("released in {}", y),
        YearBucket::Decade(start) => format!("released in the {}s", start),
        YearBucket::Classic => "released before 1980".to_string(),
        YearBucket::All | YearBucket::Unrecognized(_) => "from any year".to_string(),
    }
}

/// Splits generated text into candidate titles
///
/// Order follows the model's output and duplicates are kept; dedup happens
/// on resolved ids, not on titles.
pub fn parse_candidate_titles(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|title| !title.is_empty())
        .map(str::to_string)
        .collect()
}
