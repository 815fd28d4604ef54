//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by widget (`logs`, `chat`) so each component depends on a
//! small focused model. Nothing is shared between the two widgets; each
//! owns its signal exclusively.

pub mod chat;
pub mod logs;
