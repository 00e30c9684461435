//! 面板控制器 - 视图层
//!
//! 管理左侧问题列表和右侧面板两块区域。右侧面板只有两种状态：
//! 新问题表单，或某个问题的详情。
//!
//! 每次渲染都会整体替换面板内容，并重新登记可点击的列表项

use crate::error::StorageResult;
use crate::infrastructure::KeyValueStore;
use crate::models::{Question, QuestionDraft, QuestionId, Response, ResponseDraft, Submission};
use crate::services::{self, BoardRepository, IdGenerator, ResolveSummary, SearchTerm};
use crate::view::render::{QuestionDetailView, QuestionListView, Renderer};
use tracing::{debug, warn};

/// 点击列表项的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// 详情已显示
    Shown,
    /// 不在当前列表中，点击被忽略
    NotListed,
    /// 列表中有，但存储里已经没有这个问题
    Missing,
}

/// 右侧面板状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RightPane {
    QuestionForm,
    QuestionDetail(QuestionId),
}

/// 面板控制器
pub struct BoardController<S, R> {
    repo: BoardRepository<S>,
    renderer: R,
    ids: IdGenerator,
    state: RightPane,
    left_pane: String,
    right_pane: String,
    /// 当前列表中可点击的问题
    list_items: Vec<QuestionId>,
    search_term: Option<SearchTerm>,
    question_form: QuestionDraft,
    /// 只有详情面板显示时才存在
    response_form: Option<ResponseDraft>,
}

impl<S: KeyValueStore, R: Renderer> BoardController<S, R> {
    pub fn new(repo: BoardRepository<S>, renderer: R, ids: IdGenerator) -> Self {
        Self {
            repo,
            renderer,
            ids,
            state: RightPane::QuestionForm,
            left_pane: String::new(),
            right_pane: String::new(),
            list_items: Vec::new(),
            search_term: None,
            question_form: QuestionDraft::default(),
            response_form: None,
        }
    }

    /// 初始化：完整列表 + 新问题表单
    pub fn init(&mut self) -> StorageResult<()> {
        self.display_questions(None)?;
        self.display_question_form();
        Ok(())
    }

    // ========== 事件 ==========

    /// 点击列表中的问题
    ///
    /// 不在当前列表中的ID被忽略
    pub fn click_question(&mut self, id: QuestionId) -> StorageResult<ClickOutcome> {
        if !self.list_items.contains(&id) {
            warn!("⚠️ 问题 #{} 不在当前列表中，忽略点击", id);
            return Ok(ClickOutcome::NotListed);
        }
        if self.show_question(id)? {
            Ok(ClickOutcome::Shown)
        } else {
            Ok(ClickOutcome::Missing)
        }
    }

    /// "新问题"按钮
    pub fn new_question(&mut self) {
        self.display_question_form();
    }

    /// 填写新问题表单，表单未显示时返回 `false`
    pub fn set_question_fields(&mut self, subject: impl Into<String>, question: impl Into<String>) -> bool {
        if self.state != RightPane::QuestionForm {
            return false;
        }
        self.question_form = QuestionDraft::new(subject, question);
        true
    }

    /// 填写回答表单，详情面板未显示时返回 `false`
    pub fn set_response_fields(&mut self, name: impl Into<String>, response: impl Into<String>) -> bool {
        match self.response_form.as_mut() {
            Some(form) => {
                form.name = name.into();
                form.response = response.into();
                true
            }
            None => false,
        }
    }

    /// 提交新问题表单
    ///
    /// 表单未显示时返回 `None`，不做任何写入。
    /// 无论成功与否表单都会被清空。成功时刷新完整列表，右侧面板不变
    pub fn submit_question(&mut self) -> StorageResult<Option<Submission<Question>>> {
        if self.state != RightPane::QuestionForm {
            warn!("⚠️ 当前没有显示新问题表单，无法发布");
            return Ok(None);
        }
        let draft = std::mem::take(&mut self.question_form);
        let result = services::create_question(&mut self.repo, &draft, &mut self.ids)?;
        if result.is_accepted() {
            self.display_questions(None)?;
        }
        Ok(Some(result))
    }

    /// 提交回答表单
    ///
    /// 详情面板未显示时返回 `None`。成功时重新渲染同一个问题的详情
    pub fn submit_response(&mut self) -> StorageResult<Option<Submission<Response>>> {
        let Some(form) = self.response_form.as_mut() else {
            warn!("⚠️ 当前没有显示问题详情，无法回答");
            return Ok(None);
        };
        let draft = form.clone();
        form.clear();

        let result = services::create_response(&mut self.repo, &draft)?;
        if result.is_accepted() {
            self.show_question(draft.qid)?;
        }
        Ok(Some(result))
    }

    /// 解决当前显示的问题
    ///
    /// 右侧不是详情面板时什么也不做，返回 `None`
    pub fn resolve(&mut self) -> StorageResult<Option<ResolveSummary>> {
        let RightPane::QuestionDetail(id) = self.state else {
            warn!("⚠️ 当前没有显示问题详情，无法解决");
            return Ok(None);
        };

        let summary = services::resolve(&mut self.repo, id)?;
        self.display_questions(None)?;
        self.display_question_form();
        Ok(Some(summary))
    }

    /// 搜索框输入变化
    ///
    /// 空输入恢复完整列表；非空时过滤列表，详情中的问题被过滤掉则切回表单
    pub fn search_input(&mut self, text: &str) -> StorageResult<()> {
        self.display_questions(SearchTerm::new(text))
    }

    // ========== 渲染 ==========

    fn display_questions(&mut self, term: Option<SearchTerm>) -> StorageResult<()> {
        let mut questions = self.repo.load_questions()?;
        if let Some(term) = &term {
            questions = services::search(&questions, term);
            self.check_right_pane(&questions);
            debug!("搜索 {:?}: {} 个结果", term.as_str(), questions.len());
        }

        self.list_items = questions.iter().map(|q| q.id).collect();
        self.left_pane = self
            .renderer
            .render_question_list(&QuestionListView { questions });
        self.search_term = term;
        Ok(())
    }

    fn check_right_pane(&mut self, visible: &[Question]) {
        if let RightPane::QuestionDetail(id) = self.state {
            if !visible.iter().any(|q| q.id == id) {
                debug!("问题 #{} 不在搜索结果中，切回新问题表单", id);
                self.display_question_form();
            }
        }
    }

    fn display_question_form(&mut self) {
        self.state = RightPane::QuestionForm;
        self.right_pane = self.renderer.render_question_form();
        self.question_form.clear();
        self.response_form = None;
    }

    /// 显示问题详情，问题已不存在时切回表单并返回 `false`
    fn show_question(&mut self, id: QuestionId) -> StorageResult<bool> {
        let Some(question) = self.repo.find_question(id)? else {
            warn!("⚠️ 问题 #{} 不存在，显示新问题表单", id);
            self.display_question_form();
            return Ok(false);
        };
        let responses = self.repo.responses_for(id)?;

        self.right_pane = self
            .renderer
            .render_question_detail(&QuestionDetailView::new(question, responses));
        self.state = RightPane::QuestionDetail(id);
        self.response_form = Some(ResponseDraft::new(id, "", ""));
        Ok(true)
    }

    // ========== 访问器 ==========

    pub fn state(&self) -> RightPane {
        self.state
    }

    pub fn left_pane(&self) -> &str {
        &self.left_pane
    }

    pub fn right_pane(&self) -> &str {
        &self.right_pane
    }

    pub fn list_items(&self) -> &[QuestionId] {
        &self.list_items
    }

    pub fn search_term(&self) -> Option<&SearchTerm> {
        self.search_term.as_ref()
    }

    pub fn question_form(&self) -> &QuestionDraft {
        &self.question_form
    }

    pub fn response_form(&self) -> Option<&ResponseDraft> {
        self.response_form.as_ref()
    }

    pub fn repository(&mut self) -> &mut BoardRepository<S> {
        &mut self.repo
    }
}
