//! 视图模型与渲染器
//!
//! 渲染器接收可序列化的视图模型，返回整块面板的标记文本

use crate::models::{Question, QuestionId, Response};
use serde::Serialize;
use std::fmt::Write;

/// 问题列表视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionListView {
    pub questions: Vec<Question>,
}

/// 问题详情视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionDetailView {
    pub id: QuestionId,
    pub subject: String,
    pub question: String,
    pub responses: Vec<Response>,
}

impl QuestionDetailView {
    pub fn new(question: Question, responses: Vec<Response>) -> Self {
        Self {
            id: question.id,
            subject: question.subject,
            question: question.question,
            responses,
        }
    }
}

/// 模板渲染器
pub trait Renderer {
    fn render_question_list(&self, view: &QuestionListView) -> String;

    fn render_question_detail(&self, view: &QuestionDetailView) -> String;

    /// 新问题表单不需要数据
    fn render_question_form(&self) -> String;
}

/// 终端文本渲染器
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render_question_list(&self, view: &QuestionListView) -> String {
        let mut out = format!("== 问题列表 ({}) ==\n", view.questions.len());
        if view.questions.is_empty() {
            out.push_str("(暂无问题)\n");
        }
        for q in &view.questions {
            let _ = writeln!(out, "[{}] {}", q.id, q.subject);
        }
        out
    }

    fn render_question_detail(&self, view: &QuestionDetailView) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "== 问题 #{} ==", view.id);
        let _ = writeln!(out, "标题: {}", view.subject);
        let _ = writeln!(out, "{}", view.question);
        let _ = writeln!(out, "-- 回答 ({}) --", view.responses.len());
        for r in &view.responses {
            let _ = writeln!(out, "{}: {}", r.name, r.response);
        }
        out.push_str("回答: reply <姓名> | <回答>    解决: resolve\n");
        out
    }

    fn render_question_form(&self) -> String {
        "== 新问题 ==\n提问: ask <标题> | <问题内容>\n".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_shows_every_question() {
        let view = QuestionListView {
            questions: vec![Question {
                id: QuestionId::new(7),
                subject: "Math".to_string(),
                question: "What is 2+2?".to_string(),
            }],
        };

        let out = TextRenderer.render_question_list(&view);
        assert!(out.contains("问题列表 (1)"));
        assert!(out.contains("[7] Math"));
    }

    #[test]
    fn detail_lists_responses_in_order() {
        let view = QuestionDetailView {
            id: QuestionId::new(7),
            subject: "Math".to_string(),
            question: "What is 2+2?".to_string(),
            responses: vec![
                Response {
                    qid: QuestionId::new(7),
                    name: "Al".to_string(),
                    response: "4".to_string(),
                },
                Response {
                    qid: QuestionId::new(7),
                    name: "Bo".to_string(),
                    response: "four".to_string(),
                },
            ],
        };

        let out = TextRenderer.render_question_detail(&view);
        let al = out.find("Al: 4").unwrap();
        let bo = out.find("Bo: four").unwrap();
        assert!(al < bo);
    }

    #[test]
    fn detail_view_serializes_with_template_field_names() {
        let view = QuestionDetailView {
            id: QuestionId::new(1),
            subject: "s".to_string(),
            question: "q".to_string(),
            responses: Vec::new(),
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["id"], 1);
        assert!(json["responses"].as_array().unwrap().is_empty());
    }
}
