use super::types::PremiumState;
use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const STORE_NAME: &str = "premium-store";

/// Where premium state lives between runs
pub trait StateStore {
    /// Read the stored state. Nothing stored yet means the default state.
    fn load(&self) -> Result<PremiumState>;

    fn save(&mut self, state: &PremiumState) -> Result<()>;
}

/// Default store file path (~/.config/career-guide/premium-store.json)
pub fn default_store_path() -> Result<PathBuf> {
    Ok(crate::config::get_config_dir()?.join(format!("{}.json", STORE_NAME)))
}

/// JSON file replaced atomically on every save
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<PremiumState> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no premium store yet, using defaults");
            return Ok(PremiumState::default());
        }

        let file = File::open(&self.path).with_context(|| {
            format!("Failed to open premium store at {}", self.path.display())
        })?;

        let state: PremiumState =
            serde_json::from_reader(file).context("Failed to load premium store")?;

        tracing::debug!(
            path = %self.path.display(),
            premium = state.is_premium_user,
            "loaded premium store"
        );
        Ok(state)
    }

    fn save(&mut self, state: &PremiumState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create store directory at {}", parent.display())
                })?;
            }
        }

        let mut file = AtomicWriteFile::open(&self.path).with_context(|| {
            format!("Failed to open atomic write file at {}", self.path.display())
        })?;

        serde_json::to_writer_pretty(&mut file, state)
            .context("Failed to serialize premium store")?;

        file.commit().context("Failed to save premium store")?;

        tracing::debug!(path = %self.path.display(), "saved premium store");
        Ok(())
    }
}

/// Keeps the serialized state in memory, so tests see exactly what would be written
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contents: Option<String>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last saved JSON, if any
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<PremiumState> {
        match &self.contents {
            None => Ok(PremiumState::default()),
            Some(json) => serde_json::from_str(json).context("Failed to load premium store"),
        }
    }

    fn save(&mut self, state: &PremiumState) -> Result<()> {
        self.contents =
            Some(serde_json::to_string(state).context("Failed to serialize premium store")?);
        self.saves += 1;
        Ok(())
    }
}
