use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
path = "target/db/app.db"
"#;

/// Directory the running executable lives in
fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()?
        .parent()
        .map(Path::to_path_buf)
}

/// Loads config.toml from next to the executable, falling back to the
/// embedded default when the file is missing
pub fn load_config() -> anyhow::Result<Config> {
    if let Some(dir) = exe_dir() {
        let config_path = dir.join("config.toml");
        if config_path.exists() {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            return Ok(toml::from_str(&contents)?);
        }
        tracing::warn!("config.toml not found at: {}", config_path.display());
    }

    tracing::info!("Using default embedded configuration");
    Ok(toml::from_str(DEFAULT_CONFIG)?)
}

/// Database file path; relative paths resolve against the executable
/// directory so the service can run from anywhere
pub fn get_database_path(config: &Config) -> anyhow::Result<PathBuf> {
    let db_path = Path::new(&config.database.path);
    if db_path.is_absolute() {
        return Ok(db_path.to_path_buf());
    }
    match exe_dir() {
        Some(dir) => Ok(dir.join(db_path)),
        None => Ok(db_path.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.path, "target/db/app.db");
    }

    #[test]
    fn test_absolute_path_is_kept() {
        let config = Config {
            database: DatabaseConfig {
                path: "/var/lib/app/app.db".into(),
            },
        };
        let resolved = get_database_path(&config).unwrap();
        assert_eq!(resolved, PathBuf::from("/var/lib/app/app.db"));
    }
}
