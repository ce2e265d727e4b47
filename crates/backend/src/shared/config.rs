use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with the built frontend (served as fallback)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "dist".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Path to the sales JSON file, or an http(s) URL
    pub source: String,
}

impl DataConfig {
    pub fn is_remote(&self) -> bool {
        self.source.starts_with("http://") || self.source.starts_with("https://")
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[data]
source = "dist/dados-vendas.json"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Resolve a configured relative path
///
/// Absolute paths are used as is. Relative paths are tried next to the
/// executable first, then relative to the current directory.
pub fn resolve_path(path_str: &str) -> PathBuf {
    let path = Path::new(path_str);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved_path = exe_dir.join(path);
            if resolved_path.exists() {
                return resolved_path;
            }
        }
    }

    PathBuf::from(path_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.data.source, "dist/dados-vendas.json");
        assert!(!config.data.is_remote());
    }

    #[test]
    fn test_server_section_is_optional() {
        let config = parse_config("[data]\nsource = \"https://cdn.example.com/vendas.json\"\n").unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.data.is_remote());
    }

    #[test]
    fn test_missing_data_section_fails() {
        assert!(parse_config("[server]\nport = 8080\n").is_err());
    }

    #[test]
    fn test_absolute_path_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let abs = dir.path().join("vendas.json");
        let abs_str = abs.to_string_lossy().to_string();
        assert_eq!(resolve_path(&abs_str), abs);
    }
}
