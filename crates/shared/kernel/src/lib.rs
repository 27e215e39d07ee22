//! Kernel utilities shared by the hosts.
//! Keep this crate lightweight: configuration loading, session ids and, behind the
//! `server` feature, the shared HTTP state and system routes.
//!
//! ## Session ids
//! Every render pass gets a short, unambiguous id for its log records:
//! ```rust
//! # use mmrag_kernel::session_id;
//! let id = session_id!();
//! assert_eq!(id.len(), 12);
//! ```
//!
//! ## Config loading
//! ```rust,no_run
//! use mmrag_kernel::config::{load_app_config, load_content};
//!
//! let cfg = load_app_config(None::<&str>)?;
//! let content = load_content(&cfg)?;
//! # Ok::<(), mmrag_kernel::config::ConfigError>(())
//! ```
pub mod config;
#[cfg(feature = "server")]
pub mod server;

// Alphabet excludes visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub use mmrag_domain as domain;
pub use nanoid::nanoid;

/// Generates a session id from [`SAFE_ALPHABET`].
#[macro_export]
macro_rules! session_id {
    () => {
        $crate::nanoid!(12, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::SAFE_ALPHABET)
    };
}
