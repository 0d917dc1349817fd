use crate::core::university::University;
use crate::core::{Format, Storage};
use crate::utils::error::{Result, UniversityError};

/// Saves and loads a [`University`] through a storage backend.
pub struct DataStore<S: Storage> {
    storage: S,
}

impl<S: Storage> DataStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn save(&self, format: &dyn Format, data: &University, path: &str) -> Result<()> {
        let bytes = format.encode(data)?;
        self.storage.write_file(path, &bytes)?;
        tracing::info!("Saved {} data to {} ({})", format.name(), path, data.counts());
        Ok(())
    }

    pub fn load(&self, format: &dyn Format, path: &str) -> Result<University> {
        let bytes = self.storage.read_file(path)?;
        let data = format.decode(&bytes)?;
        tracing::info!("Loaded {} data from {} ({})", format.name(), path, data.counts());
        Ok(data)
    }

    /// Like [`DataStore::load`], but any failure is logged and an empty
    /// university is returned instead.
    pub fn load_or_default(&self, format: &dyn Format, path: &str) -> University {
        match self.load(format, path) {
            Ok(data) => data,
            Err(UniversityError::FileNotFound { path }) => {
                tracing::warn!("File {} not found, starting with empty data", path);
                University::default()
            }
            Err(e) => {
                tracing::error!("Failed to load {} data from {}: {}", format.name(), path, e);
                University::default()
            }
        }
    }
}
