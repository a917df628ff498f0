//! Networking modules for the REST boundary with the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the login/register/current-user exchanges and `types`
//! defines the shared wire schema. All real business logic (credential
//! checks, persistence, scoring) lives server-side.

pub mod api;
pub mod types;
