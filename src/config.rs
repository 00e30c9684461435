use crate::error::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// 存储后端类型
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// 进程内存储，退出即丢失
    Memory,
    /// JSON 文件存储
    File,
}

impl FromStr for StorageBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "file" => Ok(StorageBackend::File),
            _ => Err(()),
        }
    }
}

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 存储后端
    pub storage_backend: StorageBackend,
    /// 文件存储路径（仅 `file` 后端使用）
    pub storage_path: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件，为空时日志写到 stderr
    pub output_log_file: String,
    /// 问题ID随机数种子，不设置则使用系统熵
    pub id_seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::File,
            storage_path: "qa_board.json".to_string(),
            verbose_logging: false,
            output_log_file: "qa_board.log".to_string(),
            id_seed: None,
        }
    }
}

impl Config {
    /// 加载配置
    ///
    /// 先读取 `QA_BOARD_CONFIG` 指向的 TOML 文件（如果有），再用环境变量覆盖
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var("QA_BOARD_CONFIG") {
            Ok(path) if !path.is_empty() => Self::from_toml_file(Path::new(&path))?,
            _ => Self::default(),
        };
        base.with_overrides(|name| std::env::var(name).ok())
    }

    /// 只从环境变量构建配置
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_overrides(|name| std::env::var(name).ok())
    }

    /// 从 TOML 文件读取配置，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    /// 用外部变量覆盖配置
    ///
    /// `lookup` 通常是 `std::env::var`，测试中可以替换为固定表
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(backend) = parse_var::<StorageBackend, _>(&lookup, "QA_BOARD_STORAGE", "memory|file")? {
            self.storage_backend = backend;
        }
        if let Some(path) = lookup("QA_BOARD_STORAGE_PATH") {
            self.storage_path = path;
        }
        if let Some(verbose) = parse_var::<bool, _>(&lookup, "VERBOSE_LOGGING", "bool")? {
            self.verbose_logging = verbose;
        }
        if let Some(file) = lookup("OUTPUT_LOG_FILE") {
            self.output_log_file = file;
        }
        if let Some(seed) = parse_var::<u64, _>(&lookup, "QA_BOARD_ID_SEED", "u64")? {
            self.id_seed = Some(seed);
        }
        Ok(self)
    }
}

fn parse_var<T, F>(lookup: &F, var_name: &str, expected_type: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(var_name) {
        None => Ok(None),
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn overrides_replace_defaults() {
        let config = Config::default()
            .with_overrides(lookup_from(&[
                ("QA_BOARD_STORAGE", "Memory"),
                ("VERBOSE_LOGGING", "true"),
                ("QA_BOARD_ID_SEED", "42"),
            ]))
            .unwrap();

        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert!(config.verbose_logging);
        assert_eq!(config.id_seed, Some(42));
        assert_eq!(config.storage_path, "qa_board.json");
    }

    #[test]
    fn bad_override_is_reported() {
        let err = Config::default()
            .with_overrides(lookup_from(&[("VERBOSE_LOGGING", "maybe")]))
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::EnvVarParseFailed { ref var_name, .. } if var_name == "VERBOSE_LOGGING"
        ));
    }

    #[test]
    fn toml_file_fills_missing_fields_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.toml");
        std::fs::write(&path, "storage_backend = \"memory\"\nid_seed = 7\n").unwrap();

        let config = Config::from_toml_file(&path).unwrap();

        assert_eq!(config.storage_backend, StorageBackend::Memory);
        assert_eq!(config.id_seed, Some(7));
        assert_eq!(config.output_log_file, "qa_board.log");
    }
}
