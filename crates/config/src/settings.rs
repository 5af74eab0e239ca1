//! Runtime settings for the loan advisor service.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Top-level service settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging settings
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Hosted language model settings
    #[serde(default)]
    pub llm: LlmSettings,
}

impl Settings {
    /// Settings with every field at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check cross-field constraints after deserialization.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(invalid("server.port", "port must be non-zero"));
        }
        if self.server.timeout_seconds == 0 {
            return Err(invalid("server.timeout_seconds", "timeout must be positive"));
        }
        if self.llm.enabled && self.llm.model.is_empty() {
            return Err(invalid(
                "llm.model",
                "model name is required while the language model is enabled",
            ));
        }
        if self.llm.timeout_seconds == 0 {
            return Err(invalid("llm.timeout_seconds", "timeout must be positive"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the listener binds to
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port the listener binds to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Whether origin checks are enforced at all
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed origins; an empty list admits any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_true() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            cors_enabled: true,
            cors_origins: Vec::new(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level filter (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_json: false,
        }
    }
}

/// Hosted language model settings.
///
/// An empty `api_key` means the engine runs without a model collaborator
/// and every reply comes from the rule-based responder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Whether to attach a model at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// API key; falls back to OPENAI_API_KEY when left empty
    #[serde(default)]
    pub api_key: String,

    /// Model identifier sent with each completion request
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the completion API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Completion request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Load settings from files and the environment.
///
/// Sources are merged lowest to highest: `config/default.toml`, then
/// `config/{env}.toml` when an environment name is given, then variables
/// prefixed `LOAN_ADVISOR` with `__` separating nesting levels. The API
/// key additionally falls back to `OPENAI_API_KEY` so the conventional
/// variable works without any file at all.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder =
        Config::builder().add_source(File::with_name("config/default").required(false));

    if let Some(name) = env {
        builder = builder.add_source(File::with_name(&format!("config/{name}")).required(false));
    }

    let config = builder
        .add_source(
            Environment::with_prefix("LOAN_ADVISOR")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut settings: Settings = config.try_deserialize()?;

    if settings.llm.api_key.is_empty() {
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            settings.llm.api_key = key;
        }
    }

    settings.validate()?;
    Ok(settings)
}
