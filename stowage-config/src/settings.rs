// Store selection settings

use crate::{ConfigError, ConfigLoader, ConfigValidator, EnvLoader, FileFormat, Result, Validate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const BACKEND_KEY: &str = "STORE_BACKEND";
const PATH_KEY: &str = "STORE_PATH";
const BACKENDS: [&str; 2] = ["memory", "file"];

/// Where settings are persisted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local map
    #[default]
    Memory,
    /// JSON files in a directory
    File,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Memory => "memory",
            StoreBackend::File => "file",
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        ConfigValidator::one_of(&name, &BACKENDS, "backend")?;
        Ok(if name == "file" {
            StoreBackend::File
        } else {
            StoreBackend::Memory
        })
    }
}

/// Settings selecting and configuring the key-value store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub backend: StoreBackend,

    /// Directory for the file backend
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl StoreSettings {
    /// In-memory store
    pub fn memory() -> Self {
        Self::default()
    }

    /// File store rooted at `path`
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: StoreBackend::File,
            path: Some(path.into()),
        }
    }

    /// Load from a JSON, TOML or .env file.
    ///
    /// JSON and TOML files hold the settings either at the top level or under
    /// a `store` table. `.env` files use the `STORE_BACKEND` and `STORE_PATH`
    /// variable names.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let loader = ConfigLoader::auto(path)?;
        let data = loader.load_file(path)?;

        let settings = match loader.format() {
            FileFormat::Env => Self::from_lookup(|key| {
                Ok(data.get(key).and_then(Value::as_str).map(str::to_string))
            })?,
            FileFormat::Json | FileFormat::Toml => {
                let table = match data.get("store") {
                    Some(store) => store.clone(),
                    None => data,
                };
                serde_json::from_value(table)
                    .map_err(|e| ConfigError::DeserializationError(e.to_string()))?
            }
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Load from `<PREFIX>_STORE_BACKEND` and `<PREFIX>_STORE_PATH`
    pub fn from_env(prefix: Option<&str>) -> Result<Self> {
        let loader = EnvLoader::new(prefix.map(str::to_string));
        let settings = Self::from_lookup(|key| loader.load_optional(key))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load a `.env` file into the process environment, then read it like
    /// [`StoreSettings::from_env`]. A missing default `.env` is not an error.
    pub fn from_dotenv(dotenv_path: Option<&Path>, prefix: Option<&str>) -> Result<Self> {
        match dotenv_path {
            Some(path) => {
                dotenvy::from_path(path).map_err(|e| ConfigError::LoadError(e.to_string()))?;
            }
            None => {
                dotenvy::dotenv().ok();
            }
        }
        Self::from_env(prefix)
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<Option<String>>,
    {
        let backend = match lookup(BACKEND_KEY)? {
            Some(name) => name.parse()?,
            None => StoreBackend::default(),
        };
        let path = lookup(PATH_KEY)?.map(PathBuf::from);

        Ok(Self { backend, path })
    }
}

impl Validate for StoreSettings {
    fn validate(&self) -> Result<()> {
        if self.backend == StoreBackend::File {
            let path = self.path.as_deref().ok_or_else(|| {
                ConfigError::ValidationError("path is required for the file backend".to_string())
            })?;
            ConfigValidator::not_empty(&path.to_string_lossy(), "path")?;
        }
        Ok(())
    }
}
