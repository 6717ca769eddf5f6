//! Statistics module
//!
//! Durable correct/incorrect/total counters on top of the preferences
//! persistence layer.

pub mod store;

pub use store::{StatisticsStore, KEY_CORRECT, KEY_INCORRECT, KEY_TOTAL};
