use crate::models::{filters::CLASSIC_CUTOFF, MovieRecord, YearBucket};

impl YearBucket {
    /// Whether a record's year falls inside this bucket
    ///
    /// Records whose year does not parse as an integer never match a
    /// concrete bucket. `All` and unrecognized buckets match everything.
    pub fn admits(&self, record: &MovieRecord) -> bool {
        let year = match self {
            YearBucket::All | YearBucket::Unrecognized(_) => return true,
            _ => match record.parsed_year() {
                Some(year) => year,
                None => return false,
            },
        };

        match self {
            YearBucket::Year(exact) => year == *exact,
            YearBucket::Decade(start) => (*start..=*start + 9).contains(&year),
            YearBucket::Classic => year < CLASSIC_CUTOFF,
            YearBucket::All | YearBucket::Unrecognized(_) => true,
        }
    }
}

/// Keeps the records admitted by `bucket`, preserving order
pub fn filter_by_year(records: Vec<MovieRecord>, bucket: &YearBucket) -> Vec<MovieRecord> {
    if matches!(bucket, YearBucket::All | YearBucket::Unrecognized(_)) {
        return records;
    }

    records
        .into_iter()
        .filter(|record| bucket.admits(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, year: &str) -> MovieRecord {
        MovieRecord::new(id, format!("Movie {}", id), year, "https://img/poster.jpg")
    }

    fn sample() -> Vec<MovieRecord> {
        vec![
            record("a", "1972"),
            record("b", "1980"),
            record("c", "2009"),
            record("d", "2010"),
            record("e", "2019"),
            record("f", "2020"),
            record("g", "2024"),
            record("h", "2012–2015"),
            record("i", "N/A"),
        ]
    }

    fn ids(records: &[MovieRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_all_is_identity() {
        let filtered = filter_by_year(sample(), &YearBucket::All);
        assert_eq!(filtered, sample());
    }

    #[test]
    fn test_exact_year() {
        let filtered = filter_by_year(sample(), &YearBucket::Year(2024));
        assert_eq!(ids(&filtered), vec!["g"]);
    }

    #[test]
    fn test_decade_is_inclusive() {
        let filtered = filter_by_year(sample(), &YearBucket::Decade(2010));
        assert_eq!(ids(&filtered), vec!["d", "e"]);
        for record in &filtered {
            let year = record.parsed_year().unwrap();
            assert!((2010..=2019).contains(&year));
        }
    }

    #[test]
    fn test_classic_is_before_1980() {
        let filtered = filter_by_year(sample(), &YearBucket::Classic);
        assert_eq!(ids(&filtered), vec!["a"]);
        assert!(filtered.iter().all(|r| r.parsed_year().unwrap() < 1980));
    }

    #[test]
    fn test_unparsable_years_are_excluded() {
        let filtered = filter_by_year(sample(), &YearBucket::Decade(2010));
        assert!(!ids(&filtered).contains(&"h"));
        assert!(!ids(&filtered).contains(&"i"));
    }

    #[test]
    fn test_unrecognized_bucket_passes_everything() {
        let bucket = YearBucket::Unrecognized("recent".to_string());
        let filtered = filter_by_year(sample(), &bucket);
        assert_eq!(filtered, sample());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let buckets = [
            YearBucket::All,
            YearBucket::Year(2010),
            YearBucket::Decade(2010),
            YearBucket::Classic,
            YearBucket::Unrecognized("later".to_string()),
        ];

        for bucket in &buckets {
            let once = filter_by_year(sample(), bucket);
            let twice = filter_by_year(once.clone(), bucket);
            assert_eq!(once, twice, "bucket {} not idempotent", bucket);
        }
    }
}
