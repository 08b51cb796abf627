use serde::Deserialize;

/// Application configuration
///
/// Layered from `config/default`, `config/local`, and `APP__`-prefixed
/// environment variables (e.g. `APP__SERVER__PORT=8080`). Every section has
/// working defaults so the server runs with no configuration at all.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub store: StoreConfig,
    pub session: SessionConfig,
    pub upstream: UpstreamSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// User store settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path of the JSON user file
    pub path: String,
}

/// Session token settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Signing secret; falls back to the SESSION_SECRET environment variable,
    /// then to a random per-process secret
    pub secret: Option<String>,
    /// Token lifetime in hours
    pub expiration_hours: u64,
}

/// Upstream player API settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamSettings {
    pub profile_url: String,
    pub like_url: String,
    /// Falls back to the VORTEX_API_KEY environment variable
    pub like_api_key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: "users.json".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: None,
            expiration_hours: 24,
        }
    }
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            profile_url: "https://glob-info.vercel.app/info".to_string(),
            like_url: "https://vortexapi.up.railway.app/like".to_string(),
            like_api_key: None,
            timeout_secs: 10,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
