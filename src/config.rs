use serde::Deserialize;

/// Environment variable holding the generation API key
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
/// Environment variable holding the metadata API key
pub const OMDB_API_KEY_VAR: &str = "OMDB_API_KEY";

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Generation API key. Missing keys are reported at runtime, not at load.
    #[serde(default)]
    pub gemini_api_key: Option<String>,

    /// Generation API base URL
    #[serde(default = "default_gemini_api_url")]
    pub gemini_api_url: String,

    /// Model used for `generateContent`
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,

    /// Upper bound on generated tokens
    #[serde(default = "default_max_output_tokens")]
    pub gemini_max_output_tokens: u32,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub gemini_temperature: f32,

    /// Metadata API key
    #[serde(default)]
    pub omdb_api_key: Option<String>,

    /// Metadata API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_gemini_api_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_max_output_tokens() -> u32 {
    200
}

fn default_temperature() -> f32 {
    0.7
}

fn default_omdb_api_url() -> String {
    "https://www.omdbapi.com".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Both credentials, present and non-blank
#[derive(Debug, Clone)]
pub struct Credentials {
    pub gemini_api_key: String,
    pub omdb_api_key: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Names of the credential variables that are unset or blank
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if non_blank(&self.gemini_api_key).is_none() {
            missing.push(GEMINI_API_KEY_VAR);
        }
        if non_blank(&self.omdb_api_key).is_none() {
            missing.push(OMDB_API_KEY_VAR);
        }
        missing
    }

    /// Returns both credentials, or the list of missing variable names
    pub fn credentials(&self) -> Result<Credentials, Vec<&'static str>> {
        match (
            non_blank(&self.gemini_api_key),
            non_blank(&self.omdb_api_key),
        ) {
            (Some(gemini), Some(omdb)) => Ok(Credentials {
                gemini_api_key: gemini.to_string(),
                omdb_api_key: omdb.to_string(),
            }),
            _ => Err(self.missing_credentials()),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
