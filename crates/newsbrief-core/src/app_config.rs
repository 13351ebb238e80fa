use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub newsapi_key: String,
    pub newsapi_base_url: String,
    pub hf_base_url: String,
    pub hf_api_token: Option<String>,
    pub tts_base_url: String,
    pub audio_dir: PathBuf,
    pub narration_language: String,
    pub user_agent: String,
    pub scrape_timeout_secs: u64,
    pub nlp_timeout_secs: u64,
    pub max_concurrent_enrichments: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("newsapi_key", &"[redacted]")
            .field("newsapi_base_url", &self.newsapi_base_url)
            .field("hf_base_url", &self.hf_base_url)
            .field(
                "hf_api_token",
                &self.hf_api_token.as_ref().map(|_| "[redacted]"),
            )
            .field("tts_base_url", &self.tts_base_url)
            .field("audio_dir", &self.audio_dir)
            .field("narration_language", &self.narration_language)
            .field("user_agent", &self.user_agent)
            .field("scrape_timeout_secs", &self.scrape_timeout_secs)
            .field("nlp_timeout_secs", &self.nlp_timeout_secs)
            .field(
                "max_concurrent_enrichments",
                &self.max_concurrent_enrichments,
            )
            .finish()
    }
}
