//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `notify`, `ui`) so individual
//! components can depend on small focused models. `session` is the single
//! source of truth for authentication; `ui` holds transient chrome only.

pub mod notify;
pub mod session;
pub mod ui;
