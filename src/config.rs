//! Configuration loaded from the environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} env var required")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Configuration for the video service process.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    /// HTTP server bind address
    pub addr: String,
    /// HTTP server port
    pub port: String,
    /// MongoDB connection string
    pub mongo_url: String,
    /// MongoDB database holding the transcript and question collections
    pub mongo_db: String,
    /// Hex-encoded HS256 secret used to verify bearer tokens
    pub jwt_secret_hex: String,
    /// AWS region of the Bedrock runtime endpoint
    pub aws_region: String,
    /// Bedrock model identifier
    pub bedrock_model_id: String,
    /// Upper bound on generated tokens per model call
    pub max_tokens: u32,
    /// yt-dlp executable
    pub ytdlp_bin: String,
    /// Subtitle language requested from yt-dlp
    pub subtitle_lang: String,
    /// Parent directory for per-request subtitle downloads
    pub work_dir: PathBuf,
    /// Timeout applied to each yt-dlp invocation
    pub extract_timeout: Duration,
    /// Emit JSON log lines instead of human-readable ones
    pub json_logs: bool,
}

impl ServiceConfig {
    /// Load configuration from `.env` and environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let jwt_secret_hex = lookup("JWT_SECRET_KEY")
            .filter(|s| !s.trim().is_empty())
            .ok_or(ConfigError::Missing("JWT_SECRET_KEY"))?;

        let max_tokens =
            parse_number::<u32>("BEDROCK_MAX_TOKENS", lookup("BEDROCK_MAX_TOKENS"), 1000)?;
        let timeout_secs =
            parse_number::<u64>("EXTRACT_TIMEOUT_SECS", lookup("EXTRACT_TIMEOUT_SECS"), 120)?;

        Ok(Self {
            addr: or("ADDR", "0.0.0.0"),
            port: or("PORT", "8000"),
            mongo_url: or("MONGO_DB_URL", "mongodb://localhost:27017"),
            mongo_db: or("MONGO_DB_NAME", "videoService_db"),
            jwt_secret_hex,
            aws_region: or("AWS_REGION", "us-east-1"),
            bedrock_model_id: or("BEDROCK_MODEL_ID", "anthropic.claude-3-sonnet-20240229-v1:0"),
            max_tokens,
            ytdlp_bin: or("YTDLP_BIN", "yt-dlp"),
            subtitle_lang: or("SUBTITLE_LANG", "en"),
            work_dir: lookup("SUBTITLE_WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(env::temp_dir),
            extract_timeout: Duration::from_secs(timeout_secs),
            json_logs: lookup("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
        })
    }
}

fn parse_number<T>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}
