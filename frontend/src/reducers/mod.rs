//! Sub-reducers, one per domain.
//!
//! Each exposes `update(state, msg, commands) -> bool` and returns true when
//! it consumed the message.  The root `update.rs` tries them in turn.

pub mod auth;
pub mod navigation;
pub mod theme;
pub mod workflow;
