//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and auth surfaces while reading/writing
//! shared state from Leptos context providers. The header is the only
//! place session-dependent visibility is applied.

pub mod auth_modals;
pub mod catalog;
pub mod header;
pub mod leaderboard;
pub mod notification;
