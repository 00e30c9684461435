use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 问题ID
///
/// 客户端随机生成，不保证连续。序列化为 JSON 整数，
/// 反序列化时同时接受整数和数字字符串（旧数据中回答的 `qid` 以字符串保存）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct QuestionId(u64);

impl QuestionId {
    /// 随机ID的上界（不含）
    pub const UPPER_BOUND: u64 = 10_000_000_000_000_000;

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for QuestionId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(QuestionId)
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = QuestionId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a non-negative integer or numeric string question id")
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(QuestionId(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u64::try_from(value)
                    .map(QuestionId)
                    .map_err(|_| E::custom(format!("negative question id: {}", value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                if value.fract() == 0.0 && value >= 0.0 && value < u64::MAX as f64 {
                    Ok(QuestionId(value as u64))
                } else {
                    Err(E::custom(format!("invalid question id: {}", value)))
                }
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                value
                    .parse()
                    .map_err(|_| E::custom(format!("invalid question id: {:?}", value)))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// 问题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub subject: String,
    /// 问题正文
    pub question: String,
}

/// 回答
///
/// 没有自己的ID，只通过 `qid` 关联到问题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub qid: QuestionId,
    pub name: String,
    /// 回答正文
    pub response: String,
}
