use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 存储相关错误
    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 存储错误
///
/// 键值存储本身不区分记录类型，`key` 即记录名（`questions` / `responses`）
#[derive(Debug, Error)]
pub enum StorageError {
    /// 读取存储文件失败
    #[error("读取存储失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入存储文件失败
    #[error("写入存储失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 存储文件本身不是合法的键值表
    #[error("存储文件格式损坏 ({path}): {source}")]
    CorruptFile {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// 记录内容无法解析
    #[error("记录 {key} 无法解析: {source}")]
    CorruptRecord {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    /// 记录序列化失败
    #[error("记录 {key} 序列化失败: {source}")]
    SerializeFailed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

impl StorageError {
    /// 创建记录解析错误
    pub fn corrupt_record(key: impl Into<String>, source: serde_json::Error) -> Self {
        StorageError::CorruptRecord {
            key: key.into(),
            source,
        }
    }

    /// 创建记录序列化错误
    pub fn serialize_failed(key: impl Into<String>, source: serde_json::Error) -> Self {
        StorageError::SerializeFailed {
            key: key.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

/// 存储层结果类型
pub type StorageResult<T> = Result<T, StorageError>;
