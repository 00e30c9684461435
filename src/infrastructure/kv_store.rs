//! 键值存储 - 基础设施层
//!
//! 只暴露"按名字读写字符串"的能力，不认识 Question / Response

use crate::error::StorageResult;
use std::collections::BTreeMap;

/// 持久化键值存储
///
/// 语义对应浏览器的 localStorage：键和值都是字符串
pub trait KeyValueStore {
    /// 读取键对应的值，不存在时返回 `None`
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// 覆盖写入单个键
    fn set(&mut self, key: &str, value: String) -> StorageResult<()>;

    /// 一次写入多个键
    ///
    /// 要么全部生效，要么全部不生效
    fn set_many(&mut self, entries: Vec<(String, String)>) -> StorageResult<()>;
}

/// 内存键值存储
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: String) -> StorageResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    fn set_many(&mut self, entries: Vec<(String, String)>) -> StorageResult<()> {
        self.entries.extend(entries);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn set_many(&mut self, entries: Vec<(String, String)>) -> StorageResult<()> {
        (**self).set_many(entries)
    }
}
