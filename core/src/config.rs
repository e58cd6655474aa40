use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Overrides the data directory (default `~/.ordertally`).
pub const HOME_ENV: &str = "ORDERTALLY_HOME";
const DATA_DIR_NAME: &str = ".ordertally";
const CONFIG_FILE_NAME: &str = "config.json";

/// Where orders are read from and summary rows appended to.
///
/// Loaded from `config.json` in the data directory. Relative paths resolve
/// against the data directory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    #[serde(skip)]
    pub data_dir: PathBuf,
    pub orders_file: PathBuf,
    pub sink_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::new(),
            orders_file: PathBuf::from("orders.json"),
            sink_file: PathBuf::from("summary.json"),
        }
    }
}

impl Config {
    pub fn load(base_dir: Option<PathBuf>) -> Result<Self, ConfigError> {
        let data_dir = match base_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        Self::load_from(data_dir)
    }

    fn load_from(data_dir: PathBuf) -> Result<Self, ConfigError> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        let mut config = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str::<Config>(&content)
                .map_err(|source| ConfigError::Parse { path, source })?
        } else {
            Config::default()
        };
        config.data_dir = data_dir;
        Ok(config)
    }

    pub fn orders_path(&self) -> PathBuf {
        self.resolve(&self.orders_file)
    }

    pub fn sink_path(&self) -> PathBuf {
        self.resolve(&self.sink_file)
    }

    fn resolve(&self, file: &Path) -> PathBuf {
        // join keeps absolute paths as they are
        self.data_dir.join(file)
    }
}

fn default_data_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home_dir = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home_dir.join(DATA_DIR_NAME))
}
