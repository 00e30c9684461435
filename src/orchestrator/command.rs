//! 终端命令解析
//!
//! 每条命令对应页面上的一个交互事件

use crate::models::QuestionId;
use anyhow::{bail, Context, Result};

/// 帮助文本
pub const HELP: &str = "\
命令:
  list                         显示两块面板
  search [关键词]              过滤问题列表（留空恢复完整列表）
  open <问题ID>                打开列表中的问题
  new                          显示新问题表单
  ask <标题> | <问题内容>      发布问题
  reply <姓名> | <回答>        回答当前问题
  resolve                      解决（删除）当前问题
  help                         显示本帮助
  quit                         退出
";

/// 用户命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Search(String),
    Open(QuestionId),
    New,
    Ask { subject: String, question: String },
    Reply { name: String, response: String },
    Resolve,
    Help,
    Quit,
}

impl Command {
    /// 解析一行输入，空行返回 `None`
    ///
    /// `search` 的参数保留原样（包括首尾空格），其余命令的参数去掉首尾空白
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        if line.trim_end().is_empty() {
            return Ok(None);
        }

        let (verb, raw_rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest),
            None => (line, ""),
        };
        let rest = raw_rest.trim();

        let command = match verb {
            "list" | "ls" => Command::List,
            "search" => Command::Search(raw_rest.to_string()),
            "open" => {
                let id = rest
                    .parse::<QuestionId>()
                    .with_context(|| format!("无效的问题ID: {:?}", rest))?;
                Command::Open(id)
            }
            "new" => Command::New,
            "ask" => {
                let (subject, question) = split_fields(rest);
                Command::Ask { subject, question }
            }
            "reply" => {
                let (name, response) = split_fields(rest);
                Command::Reply { name, response }
            }
            "resolve" => Command::Resolve,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => bail!("未知命令: {}（输入 help 查看帮助）", other),
        };

        Ok(Some(command))
    }
}

/// 按 `|` 拆成两个字段，缺少分隔符时第二个字段为空
fn split_fields(rest: &str) -> (String, String) {
    match rest.split_once('|') {
        Some((first, second)) => (first.trim().to_string(), second.trim().to_string()),
        None => (rest.trim().to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ask_with_separator() {
        let cmd = Command::parse("ask Math | What is 2+2?").unwrap();
        assert_eq!(
            cmd,
            Some(Command::Ask {
                subject: "Math".to_string(),
                question: "What is 2+2?".to_string(),
            })
        );
    }

    #[test]
    fn missing_separator_leaves_second_field_empty() {
        let cmd = Command::parse("reply Al").unwrap();
        assert_eq!(
            cmd,
            Some(Command::Reply {
                name: "Al".to_string(),
                response: String::new(),
            })
        );
    }

    #[test]
    fn bare_search_clears_filter() {
        assert_eq!(
            Command::parse("search").unwrap(),
            Some(Command::Search(String::new()))
        );
    }

    #[test]
    fn search_keeps_surrounding_spaces() {
        assert_eq!(
            Command::parse("search  a ").unwrap(),
            Some(Command::Search(" a ".to_string()))
        );
        assert_eq!(
            Command::parse("search  \r\n").unwrap(),
            Some(Command::Search(" ".to_string()))
        );
    }

    #[test]
    fn open_requires_numeric_id() {
        assert_eq!(
            Command::parse("open 42").unwrap(),
            Some(Command::Open(QuestionId::new(42)))
        );
        assert!(Command::parse("open abc").is_err());
    }

    #[test]
    fn blank_and_unknown_lines() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert!(Command::parse("dance").is_err());
    }
}
