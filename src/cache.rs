//! This module provides the storage backends tasks are persisted in

use std::error::Error;
use std::path::Path;
use std::path::PathBuf;

use crate::traits::TaskStorage;
use crate::Task;

/// A [`TaskStorage`] that keeps the serialized task sequence in a local JSON file.
///
/// The file holds a single JSON array of task objects. Unparseable content is not fatal: it is
/// reported as a `load` error, the store starts empty, and the corrupted file is overwritten on
/// the next save.
#[derive(Debug, PartialEq)]
pub struct Cache {
    backing_file: PathBuf,
}

impl Cache {
    /// Get the default path to the storage file
    pub fn default_file() -> PathBuf {
        let app = crate::config::APP_NAME.lock().unwrap().clone();
        let file = crate::config::STORAGE_FILE_NAME.lock().unwrap().clone();
        PathBuf::from(format!("~/.config/{}/{}", app, file))
    }

    /// A storage backed by the given file
    pub fn new(path: &Path) -> Self {
        Self {
            backing_file: PathBuf::from(path),
        }
    }

    /// A storage backed by a file in `folder`, named after a user-chosen store name.
    /// The name is sanitized so that arbitrary store names cannot escape the folder.
    pub fn new_in_folder(folder: &Path, store_name: &str) -> Self {
        let file_name = sanitize_filename::sanitize(store_name) + ".json";
        Self {
            backing_file: folder.join(file_name),
        }
    }

    /// The file this cache reads and writes
    pub fn backing_file(&self) -> &Path {
        &self.backing_file
    }
}

impl TaskStorage for Cache {
    fn load(&self) -> Result<Vec<Task>, Box<dyn Error>> {
        let file = match std::fs::File::open(&self.backing_file) {
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No saved tasks at {:?}", self.backing_file);
                return Ok(Vec::new());
            },
            Err(err) => {
                return Err(format!("Unable to open file {:?}: {}", self.backing_file, err).into());
            },
            Ok(file) => file,
        };

        let tasks = serde_json::from_reader(file)?;
        Ok(tasks)
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.backing_file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::File::create(&self.backing_file)?;
        serde_json::to_writer(file, tasks)?;
        Ok(())
    }
}

/// A [`TaskStorage`] that only lives in memory.
///
/// Useful in tests and demos, and as a stand-in when no persistence is wanted.
#[derive(Default, Debug, PartialEq)]
pub struct MemoryCache {
    tasks: Vec<Task>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A memory cache pre-populated with the given tasks, as if they had been saved earlier
    pub fn containing(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}

impl TaskStorage for MemoryCache {
    fn load(&self) -> Result<Vec<Task>, Box<dyn Error>> {
        Ok(self.tasks.clone())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), Box<dyn Error>> {
        self.tasks = tasks.to_vec();
        Ok(())
    }
}
