//! 表单草稿与校验结果
//!
//! 校验只做"是否填写"检查：空字符串视为缺失，纯空白视为已填写

use crate::models::question::QuestionId;
use std::fmt;

/// 提交被拒绝的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    MissingSubject,
    MissingQuestion,
    MissingName,
    MissingResponse,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::MissingSubject => write!(f, "标题未填写"),
            Rejection::MissingQuestion => write!(f, "问题内容未填写"),
            Rejection::MissingName => write!(f, "姓名未填写"),
            Rejection::MissingResponse => write!(f, "回答内容未填写"),
        }
    }
}

/// 校验结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Rejected(Rejection),
}

/// 提交结果
///
/// `Rejected` 表示操作被放弃，没有任何存储写入
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<T> {
    Accepted(T),
    Rejected(Rejection),
}

impl<T> Submission<T> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted(_))
    }

    pub fn accepted(self) -> Option<T> {
        match self {
            Submission::Accepted(value) => Some(value),
            Submission::Rejected(_) => None,
        }
    }
}

/// 新问题表单
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub subject: String,
    pub question: String,
}

impl QuestionDraft {
    pub fn new(subject: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            question: question.into(),
        }
    }

    pub fn validate(&self) -> Validation {
        if self.subject.is_empty() {
            Validation::Rejected(Rejection::MissingSubject)
        } else if self.question.is_empty() {
            Validation::Rejected(Rejection::MissingQuestion)
        } else {
            Validation::Valid
        }
    }

    pub fn clear(&mut self) {
        self.subject.clear();
        self.question.clear();
    }
}

/// 回答表单
///
/// `qid` 对应页面上的隐藏字段，由详情视图渲染时写入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDraft {
    pub qid: QuestionId,
    pub name: String,
    pub response: String,
}

impl ResponseDraft {
    pub fn new(qid: QuestionId, name: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            qid,
            name: name.into(),
            response: response.into(),
        }
    }

    pub fn validate(&self) -> Validation {
        if self.name.is_empty() {
            Validation::Rejected(Rejection::MissingName)
        } else if self.response.is_empty() {
            Validation::Rejected(Rejection::MissingResponse)
        } else {
            Validation::Valid
        }
    }

    /// 清空可见字段，隐藏的 `qid` 保留
    pub fn clear(&mut self) {
        self.name.clear();
        self.response.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_rejected() {
        assert_eq!(
            QuestionDraft::new("", "body").validate(),
            Validation::Rejected(Rejection::MissingSubject)
        );
        assert_eq!(
            QuestionDraft::new("Math", "").validate(),
            Validation::Rejected(Rejection::MissingQuestion)
        );
        assert_eq!(
            ResponseDraft::new(QuestionId::new(1), "Al", "").validate(),
            Validation::Rejected(Rejection::MissingResponse)
        );
    }

    #[test]
    fn whitespace_counts_as_present() {
        assert_eq!(QuestionDraft::new(" ", " ").validate(), Validation::Valid);
    }

    #[test]
    fn clearing_response_keeps_hidden_qid() {
        let mut draft = ResponseDraft::new(QuestionId::new(5), "Al", "4");
        draft.clear();

        assert_eq!(draft.qid, QuestionId::new(5));
        assert!(draft.name.is_empty() && draft.response.is_empty());
    }
}
