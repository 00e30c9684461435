//! 基础设施层
//!
//! 持有存储资源，只暴露键值读写能力

pub mod file_store;
pub mod kv_store;

pub use file_store::FileStore;
pub use kv_store::{KeyValueStore, MemoryStore};

use crate::config::{Config, StorageBackend};
use crate::error::AppResult;

/// 根据配置创建存储后端
pub fn open_store(config: &Config) -> AppResult<Box<dyn KeyValueStore>> {
    let store: Box<dyn KeyValueStore> = match config.storage_backend {
        StorageBackend::Memory => Box::new(MemoryStore::new()),
        StorageBackend::File => Box::new(FileStore::open(&config.storage_path)?),
    };
    Ok(store)
}
