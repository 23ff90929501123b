pub mod prompt;
pub mod providers;
pub mod suggestions;
pub mod year_filter;

pub use suggestions::SuggestionService;
pub use year_filter::filter_by_year;
