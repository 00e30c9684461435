//! 问答板仓库 - 业务能力层
//!
//! 唯一持有 `questions` / `responses` 两条记录的模块。
//! 每次读取都重新从存储中取，不做跨操作缓存

use crate::error::{StorageError, StorageResult};
use crate::infrastructure::KeyValueStore;
use crate::models::{Question, QuestionId, Response};
use crate::services::query;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// 问题记录的键名
pub const QUESTIONS_KEY: &str = "questions";
/// 回答记录的键名
pub const RESPONSES_KEY: &str = "responses";

/// 解决（删除）问题的结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveSummary {
    pub questions_removed: usize,
    pub responses_removed: usize,
}

/// 问答板仓库
///
/// 通过注入的 `KeyValueStore` 读写数据，测试中可以换成 `MemoryStore`
pub struct BoardRepository<S> {
    store: S,
}

impl<S: KeyValueStore> BoardRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 读取全部问题
    ///
    /// 记录不存在时写入空数组并返回空列表
    pub fn load_questions(&mut self) -> StorageResult<Vec<Question>> {
        self.load_record(QUESTIONS_KEY)
    }

    /// 整体覆盖问题记录
    pub fn save_questions(&mut self, questions: &[Question]) -> StorageResult<()> {
        let text = encode(QUESTIONS_KEY, questions)?;
        self.store.set(QUESTIONS_KEY, text)
    }

    /// 读取全部回答
    ///
    /// 记录不存在时写入空数组并返回空列表
    pub fn load_responses(&mut self) -> StorageResult<Vec<Response>> {
        self.load_record(RESPONSES_KEY)
    }

    /// 整体覆盖回答记录
    pub fn save_responses(&mut self, responses: &[Response]) -> StorageResult<()> {
        let text = encode(RESPONSES_KEY, responses)?;
        self.store.set(RESPONSES_KEY, text)
    }

    /// 按ID查找问题（重新读取存储）
    pub fn find_question(&mut self, id: QuestionId) -> StorageResult<Option<Question>> {
        let questions = self.load_questions()?;
        Ok(query::find_question_by_id(&questions, id).cloned())
    }

    /// 查找问题下的全部回答（重新读取存储）
    pub fn responses_for(&mut self, id: QuestionId) -> StorageResult<Vec<Response>> {
        let responses = self.load_responses()?;
        Ok(query::find_responses_by_question_id(&responses, id))
    }

    /// 删除问题及其全部回答
    ///
    /// 两条记录通过一次 `set_many` 写入，不会出现只删了问题没删回答的中间状态
    pub fn resolve_question(&mut self, id: QuestionId) -> StorageResult<ResolveSummary> {
        let mut questions = self.load_questions()?;
        let mut responses = self.load_responses()?;

        let questions_before = questions.len();
        let responses_before = responses.len();
        questions.retain(|q| q.id != id);
        responses.retain(|r| r.qid != id);

        let summary = ResolveSummary {
            questions_removed: questions_before - questions.len(),
            responses_removed: responses_before - responses.len(),
        };

        self.store.set_many(vec![
            (QUESTIONS_KEY.to_string(), encode(QUESTIONS_KEY, &questions)?),
            (RESPONSES_KEY.to_string(), encode(RESPONSES_KEY, &responses)?),
        ])?;

        debug!(
            "删除问题 {}: 移除 {} 个问题, {} 个回答",
            id, summary.questions_removed, summary.responses_removed
        );

        Ok(summary)
    }

    fn load_record<T: DeserializeOwned>(&mut self, key: &str) -> StorageResult<Vec<T>> {
        match self.store.get(key)? {
            Some(text) if !text.is_empty() => {
                serde_json::from_str(&text).map_err(|source| StorageError::corrupt_record(key, source))
            }
            _ => {
                debug!("记录 {} 不存在，初始化为空数组", key);
                self.store.set(key, "[]".to_string())?;
                Ok(Vec::new())
            }
        }
    }
}

fn encode<T: Serialize>(key: &str, records: &[T]) -> StorageResult<String> {
    serde_json::to_string(records).map_err(|source| StorageError::serialize_failed(key, source))
}
