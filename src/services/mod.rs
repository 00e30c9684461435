pub mod board_repository;
pub mod mutations;
pub mod query;

pub use board_repository::{BoardRepository, ResolveSummary, QUESTIONS_KEY, RESPONSES_KEY};
pub use mutations::{create_question, create_response, resolve, IdGenerator};
pub use query::{find_question_by_id, find_responses_by_question_id, search, SearchTerm};
