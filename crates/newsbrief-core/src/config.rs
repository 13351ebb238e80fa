use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let newsapi_key = require("NEWSBRIEF_NEWSAPI_KEY")?;

    let env = parse_environment(&or_default("NEWSBRIEF_ENV", "development"));
    let log_level = or_default("NEWSBRIEF_LOG_LEVEL", "info");

    let newsapi_base_url = or_default("NEWSBRIEF_NEWSAPI_BASE_URL", "https://newsapi.org");
    let hf_base_url = or_default(
        "NEWSBRIEF_HF_BASE_URL",
        "https://api-inference.huggingface.co",
    );
    let hf_api_token = lookup("NEWSBRIEF_HF_API_TOKEN").ok();
    let tts_base_url = or_default("NEWSBRIEF_TTS_BASE_URL", "https://translate.google.com");

    let audio_dir = PathBuf::from(or_default("NEWSBRIEF_AUDIO_DIR", "."));
    let narration_language = or_default("NEWSBRIEF_NARRATION_LANG", "hi");
    let user_agent = or_default("NEWSBRIEF_USER_AGENT", "newsbrief/0.1 (news-analysis)");

    let scrape_timeout_secs = parse_u64("NEWSBRIEF_SCRAPE_TIMEOUT_SECS", "10")?;
    let nlp_timeout_secs = parse_u64("NEWSBRIEF_NLP_TIMEOUT_SECS", "30")?;
    let max_concurrent_enrichments = parse_usize("NEWSBRIEF_MAX_CONCURRENT_ENRICHMENTS", "4")?;

    Ok(AppConfig {
        env,
        log_level,
        newsapi_key,
        newsapi_base_url,
        hf_base_url,
        hf_api_token,
        tts_base_url,
        audio_dir,
        narration_language,
        user_agent,
        scrape_timeout_secs,
        nlp_timeout_secs,
        max_concurrent_enrichments,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("NEWSBRIEF_NEWSAPI_KEY", "test-api-key");
        m
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("unknown"), Environment::Development);
    }

    #[test]
    fn build_app_config_fails_without_newsapi_key() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "NEWSBRIEF_NEWSAPI_KEY"),
            "expected MissingEnvVar(NEWSBRIEF_NEWSAPI_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_all_required_vars() {
        let map = full_env();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.newsapi_base_url, "https://newsapi.org");
        assert_eq!(cfg.hf_base_url, "https://api-inference.huggingface.co");
        assert!(cfg.hf_api_token.is_none());
        assert_eq!(cfg.tts_base_url, "https://translate.google.com");
        assert_eq!(cfg.audio_dir, PathBuf::from("."));
        assert_eq!(cfg.narration_language, "hi");
        assert_eq!(cfg.user_agent, "newsbrief/0.1 (news-analysis)");
        assert_eq!(cfg.scrape_timeout_secs, 10);
        assert_eq!(cfg.nlp_timeout_secs, 30);
        assert_eq!(cfg.max_concurrent_enrichments, 4);
    }

    #[test]
    fn scrape_timeout_secs_override() {
        let mut map = full_env();
        map.insert("NEWSBRIEF_SCRAPE_TIMEOUT_SECS", "20");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.scrape_timeout_secs, 20);
    }

    #[test]
    fn scrape_timeout_secs_invalid() {
        let mut map = full_env();
        map.insert("NEWSBRIEF_SCRAPE_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NEWSBRIEF_SCRAPE_TIMEOUT_SECS"),
            "expected InvalidEnvVar(NEWSBRIEF_SCRAPE_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn max_concurrent_enrichments_override() {
        let mut map = full_env();
        map.insert("NEWSBRIEF_MAX_CONCURRENT_ENRICHMENTS", "8");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.max_concurrent_enrichments, 8);
    }

    #[test]
    fn max_concurrent_enrichments_invalid() {
        let mut map = full_env();
        map.insert("NEWSBRIEF_MAX_CONCURRENT_ENRICHMENTS", "four");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "NEWSBRIEF_MAX_CONCURRENT_ENRICHMENTS"),
            "expected InvalidEnvVar(NEWSBRIEF_MAX_CONCURRENT_ENRICHMENTS), got: {result:?}"
        );
    }

    #[test]
    fn narration_language_override() {
        let mut map = full_env();
        map.insert("NEWSBRIEF_NARRATION_LANG", "en");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.narration_language, "en");
    }

    #[test]
    fn hf_api_token_read_when_present() {
        let mut map = full_env();
        map.insert("NEWSBRIEF_HF_API_TOKEN", "hf-secret");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.hf_api_token.as_deref(), Some("hf-secret"));
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let mut map = full_env();
        map.insert("NEWSBRIEF_HF_API_TOKEN", "hf-secret");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let debug = format!("{cfg:?}");
        assert!(!debug.contains("test-api-key"), "api key leaked: {debug}");
        assert!(!debug.contains("hf-secret"), "hf token leaked: {debug}");
    }
}
