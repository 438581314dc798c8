use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
#[cfg(test)]
use std::cell::RefCell;
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that wins over anything persisted on disk.
pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";

/// An API key. `Debug` never shows the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Credential(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// Somewhere the API key can be persisted between runs.
pub trait ConfigStore {
    /// Returns the stored key, or `None` when missing or unreadable.
    fn load_api_key(&self) -> Option<String>;

    /// Replaces whatever was stored before.
    fn save_api_key(&self, api_key: &str) -> Result<()>;
}

/// On-disk shape of the config file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct FileConfig {
    api_key: Option<String>,
}

/// JSON config file, by default `~/.config/commit-msg-gen/config.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// The store at the standard per-user location.
    pub fn default_location() -> Result<Self> {
        let path = config_path().ok_or_else(|| anyhow!("could not determine home directory"))?;
        Ok(FileStore::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigStore for FileStore {
    fn load_api_key(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }

        let data = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<FileConfig>(&data) {
            Ok(cfg) => cfg.api_key,
            Err(e) => {
                log::debug!("ignoring unreadable config file {:?}: {e}", self.path);
                None
            }
        }
    }

    fn save_api_key(&self, api_key: &str) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create config directory {:?}", dir))?;
        }

        let body = serde_json::to_string(&FileConfig {
            api_key: Some(api_key.to_string()),
        })
        .context("failed to encode config")?;

        fs::write(&self.path, body)
            .with_context(|| format!("failed to write config to {:?}", self.path))?;

        log::info!("Saved API key to {:?}", self.path);
        Ok(())
    }
}

/// Keeps the key in memory only.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    api_key: RefCell<Option<String>>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with_key(api_key: &str) -> Self {
        MemoryStore {
            api_key: RefCell::new(Some(api_key.to_string())),
        }
    }
}

#[cfg(test)]
impl ConfigStore for MemoryStore {
    fn load_api_key(&self) -> Option<String> {
        self.api_key.borrow().clone()
    }

    fn save_api_key(&self, api_key: &str) -> Result<()> {
        *self.api_key.borrow_mut() = Some(api_key.to_string());
        Ok(())
    }
}

/// Read the key from `ANTHROPIC_API_KEY`, if set.
pub fn api_key_from_env() -> Option<String> {
    env::var(API_KEY_ENV).ok()
}

/// Resolve the API key.
///
/// Precedence:
///   1. `env_value` (normally `ANTHROPIC_API_KEY`)
///   2. The config store, when there is one
///
/// Empty values count as unset.
pub fn resolve_api_key(
    env_value: Option<String>,
    store: Option<&dyn ConfigStore>,
) -> Option<Credential> {
    if let Some(key) = env_value.filter(|k| !k.is_empty()) {
        log::debug!("Using API key from {API_KEY_ENV}");
        return Some(Credential::new(key));
    }

    let key = store?.load_api_key().filter(|k| !k.is_empty())?;
    log::debug!("Using API key from config store");
    Some(Credential::new(key))
}

/// Persist a key for later runs.
pub fn persist_api_key(store: &dyn ConfigStore, credential: &Credential) -> Result<()> {
    store.save_api_key(credential.expose())
}

/// Return `~/.config/commit-msg-gen/config.json`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(
        home.join(".config")
            .join("commit-msg-gen")
            .join("config.json"),
    )
}
