pub mod form;
pub mod question;

pub use form::{QuestionDraft, Rejection, ResponseDraft, Submission, Validation};
pub use question::{Question, QuestionId, Response};
