pub mod codec;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::TaskList;

/// File-backed persistence for a [`TaskList`].
///
/// Every save rewrites the whole file. Writes are not atomic: a crash mid-write
/// can leave a truncated file behind.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the data file. A file that does not exist yet loads as an empty list.
    pub fn load(&self) -> Result<TaskList> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No data file at {}, starting empty", self.path.display());
                return Ok(TaskList::new());
            }
            Err(e) => return Err(e.into()),
        };

        let tasks = codec::decode(&contents)?;
        tracing::debug!("Loaded {} task(s) from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    /// Copy the data file to `<path>.bak`, replacing any earlier backup.
    pub fn back_up(&self) -> Result<PathBuf> {
        let mut name = self.path.clone().into_os_string();
        name.push(".bak");
        let backup = PathBuf::from(name);
        fs::copy(&self.path, &backup)?;
        tracing::info!("Copied {} to {}", self.path.display(), backup.display());
        Ok(backup)
    }

    /// Overwrite the data file with `tasks`, creating parent directories first.
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, codec::encode(tasks))?;
        tracing::debug!("Saved {} task(s) to {}", tasks.len(), self.path.display());
        Ok(())
    }
}
