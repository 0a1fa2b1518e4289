use std::time::Duration;

use config::{Config, ConfigError};
use serde::Deserialize;
use tracing::info;

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_UPSTREAM: &str = "http://localhost:8085";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub backend: BackendSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub port: u16,
    /// Origin every `/api/*` request is relayed to.
    pub upstream: String,
    /// Built browser output: static assets and the `index.html` shell.
    pub browser_dist: String,
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    /// Base URL the console's REST services call, normally the proxy's `/api` prefix.
    pub base_url: String,
    pub retry_delay_ms: u64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "local".to_string());
        let mut cfg = Self::load_from_file(&env)?;
        Self::customize_from_env(&mut cfg);

        Ok(cfg)
    }

    fn load_from_file(env: &str) -> Result<Self, ConfigError> {
        let file = format!("config.{}.yaml", env);
        info!("Loading configuration from: {}", file);
        Config::builder()
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("server.upstream", DEFAULT_UPSTREAM)?
            .set_default("server.browser_dist", "dist/browser")?
            .set_default(
                "server.allowed_origins",
                vec!["http://localhost:4200", "http://localhost:4000"],
            )?
            .set_default("backend.base_url", "http://localhost:4000/api")?
            .set_default("backend.retry_delay_ms", 1000)?
            .add_source(config::File::with_name(&file).required(false))
            .build()?
            .try_deserialize()
    }

    fn customize_from_env(cfg: &mut Self) {
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            cfg.server.port = port;
        }
        if let Ok(upstream) = std::env::var("BACKEND_UPSTREAM") {
            cfg.server.upstream = upstream;
        }
        if let Ok(base_url) = std::env::var("BACKEND_BASE_URL") {
            cfg.backend.base_url = base_url;
        }
    }
}

impl ServerSettings {
    pub fn listen_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

impl BackendSettings {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}
