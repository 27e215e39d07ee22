//! # Domain Models
//!
//! Plain data shared by the shell crates: page configuration, static content and
//! application settings. Only `serde` is allowed here; parsing helpers are fine,
//! I/O and session logic live in `mmrag-shell`.

pub mod config;
pub mod constants;
pub mod content;
pub mod page;
