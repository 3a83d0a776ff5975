use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Remote relational database. Leaving it out (or the URL empty) runs the
/// dashboard in offline mode.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RemoteConfig {
    #[serde(default)]
    pub database_url: String,
    #[serde(default)]
    pub run_migrations: bool,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    5
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CacheConfig {
    #[serde(default = "default_cache_url")]
    pub url: String,
}

fn default_cache_url() -> String {
    "sqlite://facility_cache.db?mode=rwc".to_string()
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: default_cache_url(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AdminConfig {
    /// Shared password guarding destructive actions
    #[serde(default = "default_admin_password")]
    pub password: String,
}

fn default_admin_password() -> String {
    "1234".to_string()
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password: default_admin_password(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}
fn default_server_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub remote: Option<RemoteConfig>,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start with default settings
            .set_default("cache.url", default_cache_url())?
            .set_default("admin.password", default_admin_password())?
            .set_default("server.host", default_server_host())?
            .set_default("server.port", i64::from(default_server_port()))?
            // Shared settings, e.g. config/default.toml
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            // Per-environment overrides, e.g. config/production.toml
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Environment variables (e.g. FACILITY__REMOTE__DATABASE_URL=postgres://...)
            .add_source(Environment::with_prefix("FACILITY").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Remote database URL, if one is configured
    pub fn remote_url(&self) -> Option<&str> {
        self.remote
            .as_ref()
            .map(|r| r.database_url.trim())
            .filter(|url| !url.is_empty())
    }
}
