// src/config/mod.rs
// Runtime tuning comes from the environment; a .env file is honored when present.

use once_cell::sync::Lazy;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct SageConfig {
    // ── OpenAI Configuration
    pub openai_base_url: String,
    pub model: String,
    pub chat_max_tokens: u32,
    pub chat_temperature: f32,
    pub openai_timeout: u64,

    // ── Server Configuration
    pub host: String,
    pub port: u16,
    pub request_timeout: u64,

    // ── Logging Configuration
    pub log_level: String,
}

/// Reads an env var, strips inline '#' comments, and parses it.
/// Falls back to the default on a missing var or a failed parse.
fn env_var_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    match std::env::var(key) {
        Ok(val) => {
            let clean_val = val.split('#').next().unwrap_or("").trim();
            match clean_val.parse::<T>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("Config: {} = '{}' (parse failed, using default)", key, val);
                    default
                }
            }
        }
        Err(_) => default,
    }
}

impl SageConfig {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_err() {
            eprintln!("Warning: .env file not found. Using environment variables and defaults.");
        }

        Self {
            openai_base_url: env_var_or("OPENAI_BASE_URL", "https://api.openai.com/v1".to_string()),
            model: env_var_or("SAGE_MODEL", "gpt-4o".to_string()),
            chat_max_tokens: env_var_or("SAGE_CHAT_MAX_TOKENS", 1000),
            chat_temperature: env_var_or("SAGE_CHAT_TEMPERATURE", 0.7),
            openai_timeout: env_var_or("SAGE_OPENAI_TIMEOUT", 60),
            host: env_var_or("SAGE_HOST", "0.0.0.0".to_string()),
            port: env_var_or("SAGE_PORT", 8080),
            request_timeout: env_var_or("SAGE_REQUEST_TIMEOUT", 120),
            log_level: env_var_or("SAGE_LOG_LEVEL", "info".to_string()),
        }
    }
}

/// Global config instance - loaded once at startup
pub static CONFIG: Lazy<SageConfig> = Lazy::new(SageConfig::from_env);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_var_or_uses_default_when_unset() {
        let value: u32 = env_var_or("SAGE_TEST_DEFINITELY_UNSET_VAR", 42);
        assert_eq!(value, 42);

        let text: String = env_var_or("SAGE_TEST_DEFINITELY_UNSET_VAR", "fallback".to_string());
        assert_eq!(text, "fallback");
    }

    #[test]
    fn test_from_env_produces_usable_config() {
        let config = SageConfig::from_env();
        assert!(!config.model.is_empty());
        assert!(!config.openai_base_url.is_empty());
        assert!(config.port > 0);
        assert!(config.chat_max_tokens > 0);
    }
}
