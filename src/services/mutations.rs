//! 写操作 - 业务能力层
//!
//! 发布问题、发布回答、解决问题。每个操作先校验表单，再通过仓库读写存储。
//! 校验失败时返回 `Submission::Rejected`，不做任何写入

use crate::error::StorageResult;
use crate::infrastructure::KeyValueStore;
use crate::models::{
    Question, QuestionDraft, QuestionId, Response, ResponseDraft, Submission, Validation,
};
use crate::services::board_repository::{BoardRepository, ResolveSummary};
use crate::utils::truncate_text;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

/// 问题ID生成器
///
/// 在 `[0, 10^16)` 内均匀随机取值。不保证无碰撞，只是概率极低
pub struct IdGenerator {
    rng: StdRng,
}

impl IdGenerator {
    /// 使用系统熵初始化
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// 使用固定种子初始化，结果可复现
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_id(&mut self) -> QuestionId {
        QuestionId::new(self.rng.gen_range(0..QuestionId::UPPER_BOUND))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// 发布新问题
///
/// 成功时追加到问题记录末尾并返回新问题
pub fn create_question<S: KeyValueStore>(
    repo: &mut BoardRepository<S>,
    draft: &QuestionDraft,
    ids: &mut IdGenerator,
) -> StorageResult<Submission<Question>> {
    if let Validation::Rejected(reason) = draft.validate() {
        debug!("放弃发布问题: {}", reason);
        return Ok(Submission::Rejected(reason));
    }

    let question = Question {
        id: ids.next_id(),
        subject: draft.subject.clone(),
        question: draft.question.clone(),
    };

    let mut questions = repo.load_questions()?;
    questions.push(question.clone());
    repo.save_questions(&questions)?;

    info!(
        "✓ 发布问题 #{}: {}",
        question.id,
        truncate_text(&question.subject, 30)
    );

    Ok(Submission::Accepted(question))
}

/// 发布回答
///
/// 只检查字段是否填写，不检查 `qid` 对应的问题是否存在
pub fn create_response<S: KeyValueStore>(
    repo: &mut BoardRepository<S>,
    draft: &ResponseDraft,
) -> StorageResult<Submission<Response>> {
    if let Validation::Rejected(reason) = draft.validate() {
        debug!("放弃发布回答: {}", reason);
        return Ok(Submission::Rejected(reason));
    }

    let response = Response {
        qid: draft.qid,
        name: draft.name.clone(),
        response: draft.response.clone(),
    };

    let mut responses = repo.load_responses()?;
    responses.push(response.clone());
    repo.save_responses(&responses)?;

    info!("✓ {} 回答了问题 #{}", truncate_text(&response.name, 20), response.qid);

    Ok(Submission::Accepted(response))
}

/// 解决（删除）问题及其全部回答
pub fn resolve<S: KeyValueStore>(
    repo: &mut BoardRepository<S>,
    id: QuestionId,
) -> StorageResult<ResolveSummary> {
    let summary = repo.resolve_question(id)?;
    info!(
        "✓ 问题 #{} 已解决，删除回答 {} 条",
        id, summary.responses_removed
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::MemoryStore;
    use crate::models::Rejection;
    use crate::services::board_repository::QUESTIONS_KEY;

    fn repo() -> BoardRepository<MemoryStore> {
        BoardRepository::new(MemoryStore::new())
    }

    #[test]
    fn ids_stay_in_range() {
        let mut ids = IdGenerator::seeded(1);
        for _ in 0..1000 {
            assert!(ids.next_id().value() < QuestionId::UPPER_BOUND);
        }
    }

    #[test]
    fn seeded_generators_repeat() {
        let mut a = IdGenerator::seeded(9);
        let mut b = IdGenerator::seeded(9);
        assert_eq!(a.next_id(), b.next_id());
    }

    #[test]
    fn accepted_question_is_appended_and_retrievable() {
        let mut repo = repo();
        let mut ids = IdGenerator::seeded(3);

        let created = create_question(&mut repo, &QuestionDraft::new("Math", "What is 2+2?"), &mut ids)
            .unwrap()
            .accepted()
            .unwrap();

        assert_eq!(repo.load_questions().unwrap().len(), 1);
        assert_eq!(repo.find_question(created.id).unwrap(), Some(created));
    }

    #[test]
    fn rejected_question_does_not_touch_storage() {
        let mut repo = repo();
        let mut ids = IdGenerator::seeded(3);

        let result = create_question(&mut repo, &QuestionDraft::new("Math", ""), &mut ids).unwrap();

        assert_eq!(result, Submission::Rejected(Rejection::MissingQuestion));
        // 连默认空数组都没有写入
        assert_eq!(repo.store().get(QUESTIONS_KEY).unwrap(), None);
    }

    #[test]
    fn response_is_stored_with_target_qid() {
        let mut repo = repo();
        let draft = ResponseDraft::new(QuestionId::new(12), "Al", "4");

        let created = create_response(&mut repo, &draft).unwrap();

        assert!(created.is_accepted());
        assert_eq!(repo.responses_for(QuestionId::new(12)).unwrap().len(), 1);
    }

    #[test]
    fn rejected_response_is_not_stored() {
        let mut repo = repo();
        let draft = ResponseDraft::new(QuestionId::new(12), "", "4");

        let created = create_response(&mut repo, &draft).unwrap();

        assert_eq!(created, Submission::Rejected(Rejection::MissingName));
        assert!(repo.load_responses().unwrap().is_empty());
    }

    #[test]
    fn resolve_unknown_id_changes_nothing() {
        let mut repo = repo();
        let mut ids = IdGenerator::seeded(5);
        create_question(&mut repo, &QuestionDraft::new("a", "b"), &mut ids).unwrap();

        let summary = resolve(&mut repo, QuestionId::new(QuestionId::UPPER_BOUND)).unwrap();

        assert_eq!(summary, ResolveSummary::default());
        assert_eq!(repo.load_questions().unwrap().len(), 1);
    }
}
