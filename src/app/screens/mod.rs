//! TUI screen components
//!
//! Contains individual screen implementations for the navigation targets.

pub mod menu;
pub mod question;
pub mod statistics;

pub use menu::{MenuItem, MenuScreen};
pub use question::QuestionScreen;
pub use statistics::StatisticsScreen;
