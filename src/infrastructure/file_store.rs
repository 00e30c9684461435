//! 文件键值存储 - 基础设施层
//!
//! 整个存储是一个 JSON 对象文件（键 → 字符串值）。
//! 每次写入先写临时文件再 rename 覆盖，所以一次 `set_many` 落盘是原子的

use crate::error::{StorageError, StorageResult};
use crate::infrastructure::kv_store::KeyValueStore;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 文件键值存储
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// 打开或创建存储文件
    ///
    /// 文件不存在时不会立即创建，第一次写入时才落盘
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| StorageError::ReadFailed {
                path: path.display().to_string(),
                source,
            })?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).map_err(|source| StorageError::CorruptFile {
                    path: path.display().to_string(),
                    source,
                })?
            }
        } else {
            BTreeMap::new()
        };

        debug!("打开存储文件 {} ({} 个键)", path.display(), entries.len());

        Ok(Self { path, entries })
    }

    /// 将 `next` 写入磁盘，成功后才替换内存中的表
    fn commit(&mut self, next: BTreeMap<String, String>) -> StorageResult<()> {
        let write_failed = |source: std::io::Error| StorageError::WriteFailed {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_failed)?;
            }
        }

        let body = serde_json::to_string(&next)
            .map_err(|source| StorageError::serialize_failed(self.path.display().to_string(), source))?;

        let tmp_path = self.tmp_path();
        {
            let file = File::create(&tmp_path).map_err(write_failed)?;
            let mut writer = BufWriter::new(&file);
            writer.write_all(body.as_bytes()).map_err(write_failed)?;
            writer.flush().map_err(write_failed)?;
            drop(writer);
            file.sync_all().map_err(write_failed)?;
        }
        fs::rename(&tmp_path, &self.path).map_err(write_failed)?;

        self.entries = next;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> StorageResult<()> {
        self.set_many(vec![(key.to_string(), value)])
    }

    fn set_many(&mut self, entries: Vec<(String, String)>) -> StorageResult<()> {
        let mut next = self.entries.clone();
        next.extend(entries);
        self.commit(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");

        let mut store = FileStore::open(&path).unwrap();
        store
            .set_many(vec![
                ("questions".to_string(), "[]".to_string()),
                ("responses".to_string(), "[]".to_string()),
            ])
            .unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("questions").unwrap().as_deref(), Some("[]"));
        assert_eq!(reopened.get("responses").unwrap().as_deref(), Some("[]"));
        assert!(!dir.path().join("board.json.tmp").exists());
    }

    #[test]
    fn missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("nested").join("board.json")).unwrap();

        assert_eq!(store.get("questions").unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        fs::write(&path, "not json").unwrap();

        let result = FileStore::open(&path);
        assert!(matches!(result, Err(StorageError::CorruptFile { .. })));
    }
}
