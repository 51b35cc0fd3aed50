//! Layered configuration: optional `config.toml`, then `CREDSENDER__*`
//! environment variables (double-underscore separator), over built-in
//! defaults.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub smtp: SmtpSettings,
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    File,
    Redis,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    pub file_path: PathBuf,
    pub redis_url: String,
    pub redis_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiSettings {
    pub static_dir: String,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080_i64)?
            .set_default("storage.backend", "file")?
            .set_default("storage.file_path", "data/credentials.json")?
            .set_default("storage.redis_url", "redis://127.0.0.1:6379")?
            .set_default("storage.redis_key", "credsender:credentials")?
            .set_default("smtp.host", "smtp.gmail.com")?
            .set_default("smtp.port", 587_i64)?
            .set_default("smtp.username", "")?
            .set_default("smtp.password", "")?
            .set_default("smtp.from", "credsender@localhost")?
            .set_default("ui.static_dir", "static")?
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("CREDSENDER")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}
