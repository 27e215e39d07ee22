//! Multi-modal question answering.
//!
//! The shell only needs the [`MultiModalEngine`] seam. Until a retrieval
//! backend is wired in, hosts use [`UnavailableEngine`], which checks the input
//! and reports the feature as unavailable.

mod engine;
mod error;

pub use engine::{MAX_PAYLOAD_BYTES, MediaKind, MultiModalEngine, UnavailableEngine, validate_query};
pub use error::{AssistantError, AssistantErrorExt};
