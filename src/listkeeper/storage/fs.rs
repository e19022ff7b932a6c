use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ListKeeperError, Result};
use crate::storage::KeyValueStore;

const DATA_FILENAME: &str = "data.json";

/// File-backed storage: one `data.json` map in the app data directory.
///
/// Every operation reads the map fresh from disk and writes it back on
/// mutation. The collection is small (a handful of keys) and the CLI is the
/// only writer, so read-modify-write per call is the simple, safe choice.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn data_path(&self) -> PathBuf {
        self.dir.join(DATA_FILENAME)
    }

    fn load_map(&self) -> Result<BTreeMap<String, String>> {
        let path = self.data_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&path).map_err(ListKeeperError::Io)?;
        let map = serde_json::from_str(&content).map_err(ListKeeperError::Serialization)?;
        Ok(map)
    }

    fn save_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(ListKeeperError::Io)?;
        }
        let content = serde_json::to_string_pretty(map).map_err(ListKeeperError::Serialization)?;
        fs::write(self.data_path(), content).map_err(ListKeeperError::Io)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_map()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut map = self.load_map()?;
        map.insert(key.to_string(), value.to_string());
        self.save_map(&map)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut map = self.load_map()?;
        if map.remove(key).is_some() {
            self.save_map(&map)?;
        }
        Ok(())
    }
}
