//! # configs
//!
//! Layered runtime settings: built-in defaults, then an optional
//! `chalkline.toml` next to the binary, then `CHALKLINE__`-prefixed
//! environment variables (e.g. `CHALKLINE__SERVER__PORT=8080`,
//! `CHALKLINE__DATABASE__URL=postgres://...`).

use std::net::IpAddr;
use std::path::PathBuf;

use config::{Config, Environment, File, FileFormat};
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    /// Defaulted in code rather than in the base layer: a partially
    /// overridden media table must not inherit keys from the other
    /// backend variant.
    #[serde(default = "MediaSettings::local_default")]
    pub media: MediaSettings,
    pub uploads: UploadSettings,
    pub cors: CorsSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: SecretString,
    pub max_connections: u32,
}

/// Which media backend the gallery writes to. Selected at runtime; the
/// matching cargo feature must be compiled into the binary.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum MediaSettings {
    /// Files on the serving host, exposed read-only under `url_prefix`.
    Local {
        root_dir: PathBuf,
        url_prefix: String,
        public_base_url: String,
    },
    /// Remote object store (S3 or compatible).
    S3 {
        bucket: String,
        region: String,
        #[serde(default = "default_key_prefix")]
        key_prefix: String,
        #[serde(default)]
        endpoint_url: Option<String>,
        #[serde(default)]
        force_path_style: bool,
        #[serde(default)]
        public_base_url: Option<String>,
    },
}

impl MediaSettings {
    fn local_default() -> Self {
        Self::Local {
            root_dir: PathBuf::from("./data/uploads"),
            url_prefix: "/uploads".to_string(),
            public_base_url: "http://127.0.0.1:5001".to_string(),
        }
    }
}

fn default_key_prefix() -> String {
    "gallery".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadSettings {
    pub max_files: usize,
    pub max_file_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorsSettings {
    pub allowed_origins: Vec<String>,
}

impl Settings {
    pub fn load() -> Result<Self, SettingsError> {
        // A missing .env file is fine; real deployments use the process
        // environment directly.
        dotenvy::dotenv().ok();

        let config = Config::builder()
            .add_source(File::from_str(DEFAULTS, FileFormat::Toml))
            .add_source(File::with_name("chalkline").required(false))
            .add_source(
                Environment::with_prefix("CHALKLINE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(","),
            )
            .build()?;
        Ok(config.try_deserialize()?)
    }
}

/// Built-in defaults; every key can be overridden by file or environment.
const DEFAULTS: &str = r#"
[server]
host = "127.0.0.1"
port = 5001

[database]
url = "postgres://localhost/chalkline"
max_connections = 5

[uploads]
max_files = 20
max_file_bytes = 5242880

[cors]
allowed_origins = ["http://localhost:3000", "http://localhost:5173"]
"#;
