//! Data models module
//!
//! Contains the fixed question set, the persisted statistics record and
//! the per-visit quiz session state.

pub mod question;
pub mod session;
pub mod statistics;

// Re-export commonly used types
pub use question::{ImageRef, Question, QuestionSet, QUESTIONS};
pub use session::{AnswerState, QuizSession};
pub use statistics::Statistics;
