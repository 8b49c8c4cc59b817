use serde::Deserialize;

fn default_listen_addr() -> String {
    "127.0.0.1:4221".to_string()
}

fn default_files_root() -> String {
    "/tmp/".to_string()
}

fn default_max_connections() -> usize {
    10
}

/// Server configuration, resolved once at startup and immutable afterward.
///
/// The file root is the directory all `/files/` requests are served from.
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    #[serde(default = "default_files_root")]
    pub files_root: String,

    /// Upper bound on connections handled concurrently.
    #[serde(default = "default_max_connections")]
    pub max_connections: usize,
}

impl Config {
    /// Resolves the configuration: a YAML file named by `EMBER_CONFIG` if
    /// set, otherwise individual environment variables, otherwise defaults.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("EMBER_CONFIG") {
            match Self::from_file(&path) {
                Ok(cfg) => return cfg,
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", path, e);
                }
            }
        }
        Self::from_env()
    }

    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn from_env() -> Self {
        let listen_addr =
            std::env::var("LISTEN").unwrap_or_else(|_| default_listen_addr());
        let files_root =
            std::env::var("FILES_ROOT").unwrap_or_else(|_| default_files_root());
        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_max_connections);

        Self {
            listen_addr,
            files_root,
            max_connections,
        }
    }
}
