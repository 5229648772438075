//! Billet CLI - command orchestration
//!
//! This crate provides the `billet` binary and the commands behind it.

pub mod commands;
pub mod context;

pub use context::AppContext;
