//! UI components for the dashboard page.

pub mod chat_assistant;
pub mod log_feed;
