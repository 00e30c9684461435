//! 查询能力 - 业务能力层
//!
//! 纯函数，只处理内存中的序列，不碰存储

use crate::models::{Question, QuestionId, Response};

/// 搜索词
///
/// 不会为空：空输入表示"不过滤"，由调用方直接跳过搜索
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    lowered: String,
}

impl SearchTerm {
    /// 空字符串返回 `None`
    pub fn new(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }
        Some(Self {
            raw: raw.to_string(),
            lowered: raw.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// 标题或正文包含搜索词（忽略大小写）
    pub fn matches(&self, question: &Question) -> bool {
        question.subject.to_lowercase().contains(&self.lowered)
            || question.question.to_lowercase().contains(&self.lowered)
    }
}

/// 按ID查找问题，返回第一个匹配项
pub fn find_question_by_id(questions: &[Question], id: QuestionId) -> Option<&Question> {
    questions.iter().find(|q| q.id == id)
}

/// 查找问题下的全部回答，保持存储顺序
pub fn find_responses_by_question_id(responses: &[Response], id: QuestionId) -> Vec<Response> {
    responses.iter().filter(|r| r.qid == id).cloned().collect()
}

/// 按搜索词过滤问题，保持原有顺序
pub fn search(questions: &[Question], term: &SearchTerm) -> Vec<Question> {
    questions.iter().filter(|q| term.matches(q)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64, subject: &str, body: &str) -> Question {
        Question {
            id: QuestionId::new(id),
            subject: subject.to_string(),
            question: body.to_string(),
        }
    }

    fn board() -> Vec<Question> {
        vec![
            question(1, "Math", "What is 2+2?"),
            question(2, "History", "When did Rome fall?"),
            question(3, "Cooking", "How long to boil an egg? Math optional"),
        ]
    }

    #[test]
    fn empty_term_is_not_a_search_term() {
        assert!(SearchTerm::new("").is_none());
        assert!(SearchTerm::new(" ").is_some());
    }

    #[test]
    fn search_is_case_insensitive_over_subject_and_body() {
        let term = SearchTerm::new("MATH").unwrap();
        let ids: Vec<u64> = search(&board(), &term).iter().map(|q| q.id.value()).collect();

        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn search_without_hits_is_empty() {
        let term = SearchTerm::new("physics").unwrap();
        assert!(search(&board(), &term).is_empty());
    }

    #[test]
    fn find_by_id_returns_first_match() {
        let mut questions = board();
        questions.push(question(1, "Duplicate", "same id"));

        let found = find_question_by_id(&questions, QuestionId::new(1)).unwrap();
        assert_eq!(found.subject, "Math");
        assert!(find_question_by_id(&questions, QuestionId::new(42)).is_none());
    }

    #[test]
    fn responses_keep_storage_order() {
        let responses = vec![
            Response {
                qid: QuestionId::new(2),
                name: "first".to_string(),
                response: "a".to_string(),
            },
            Response {
                qid: QuestionId::new(1),
                name: "other".to_string(),
                response: "b".to_string(),
            },
            Response {
                qid: QuestionId::new(2),
                name: "second".to_string(),
                response: "c".to_string(),
            },
        ];

        let names: Vec<String> = find_responses_by_question_id(&responses, QuestionId::new(2))
            .into_iter()
            .map(|r| r.name)
            .collect();

        assert_eq!(names, vec!["first", "second"]);
        assert!(find_responses_by_question_id(&responses, QuestionId::new(9)).is_empty());
    }
}
