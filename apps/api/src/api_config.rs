use std::env;
use std::fmt::{Display, Formatter};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;

use clubdesk_core::AppError;
use tracing_subscriber::EnvFilter;

const DEFAULT_STORAGE_DIR: &str = ".clubdesk";

/// Where the application list is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackendConfig {
    /// One JSON file per storage key under a directory.
    Directory(PathBuf),
    /// Process memory, lost on restart.
    Memory,
}

impl StorageBackendConfig {
    fn from_values(backend: &str, directory: Option<String>) -> Result<Self, AppError> {
        match backend {
            "directory" => Ok(Self::Directory(PathBuf::from(
                directory
                    .filter(|value| !value.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_STORAGE_DIR.to_owned()),
            ))),
            "memory" => Ok(Self::Memory),
            other => Err(AppError::Validation(format!(
                "STORAGE_BACKEND must be either 'directory' or 'memory', got '{other}'"
            ))),
        }
    }
}

impl Display for StorageBackendConfig {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Directory(path) => write!(formatter, "directory:{}", path.display()),
            Self::Memory => formatter.write_str("memory"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub frontend_url: String,
    pub api_host: String,
    pub api_port: u16,
    pub storage: StorageBackendConfig,
    pub seed_demo_data: bool,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let frontend_url =
            env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned());

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
        let api_port = env::var("API_PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);

        let storage = StorageBackendConfig::from_values(
            env::var("STORAGE_BACKEND")
                .unwrap_or_else(|_| "directory".to_owned())
                .as_str(),
            env::var("STORAGE_DIR").ok(),
        )?;

        let seed_demo_data = env::var("DEV_SEED_APPLICATIONS")
            .unwrap_or_else(|_| "false".to_owned())
            .eq_ignore_ascii_case("true");

        Ok(Self {
            frontend_url,
            api_host,
            api_port,
            storage,
            seed_demo_data,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Internal(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
