//! JSONファイルによるキー・値ストア
//!
//! ブラウザのlocalStorageと同じキー・値（文字列）を1つのJSONオブジェクトとして保存する。
//! 書き込みのたびにファイル全体を一時ファイル経由で置き換える。

use foodscan_common::{Error, KeyValueStore, Result};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, e: std::io::Error) -> Error {
        Error::Storage(format!("{}: {}", self.path.display(), e))
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content)
            .map_err(|e| Error::Storage(format!("{}: {}", self.path.display(), e)))
    }

    /// 同じディレクトリの一時ファイルに書いてから置き換える
    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent.to_path_buf(),
            None => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir).map_err(|e| self.io_error(e))?;

        let content = serde_json::to_string_pretty(map)?;
        let mut tmp = NamedTempFile::new_in(&dir).map_err(|e| self.io_error(e))?;
        tmp.write_all(content.as_bytes()).map_err(|e| self.io_error(e))?;
        tmp.as_file().sync_all().map_err(|e| self.io_error(e))?;
        tmp.persist(&self.path).map_err(|e| self.io_error(e.error))?;
        tracing::debug!(path = %self.path.display(), keys = map.len(), "store written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("storage.json"));
        assert_eq!(store.get_item("theme").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_set_get_remove() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::open(dir.path().join("data").join("storage.json"));

        store.set_item("theme", "dark").unwrap();
        store.set_item("scannedBarcode", "123").unwrap();
        assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("dark"));

        // 別インスタンスから読める
        let reopened = FileStore::open(store.path());
        assert_eq!(reopened.get_item("scannedBarcode").unwrap().as_deref(), Some("123"));

        reopened.remove_item("theme").unwrap();
        assert_eq!(store.get_item("theme").unwrap(), None);
        assert_eq!(store.get_item("scannedBarcode").unwrap().as_deref(), Some("123"));
    }

    #[test]
    fn test_write_replaces_file_without_leftovers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, r#"{"theme": "light"}"#).unwrap();

        let store = FileStore::open(&path);
        store.set_item("dietLog", "[]").unwrap();
        store.set_item("theme", "dark").unwrap();

        // 一時ファイルは残らず、保存ファイルは常に完全なJSON
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("storage.json")]);
        let map: BTreeMap<String, String> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(map.get("theme").map(String::as_str), Some("dark"));
        assert_eq!(map.get("dietLog").map(String::as_str), Some("[]"));
    }

    #[test]
    fn test_broken_file_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "[1, 2").unwrap();
        let store = FileStore::open(&path);
        assert!(matches!(store.get_item("theme"), Err(Error::Storage(_))));
    }
}
