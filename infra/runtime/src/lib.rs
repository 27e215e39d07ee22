//! # Runtime
//!
//! Tokio runtime profiles used by the shell hosts.
//!
//! * [`RuntimeProfile::Server`]: multi-threaded, sized for the HTTP host.
//! * [`RuntimeProfile::Compact`]: a current-thread runtime for short-lived tools.
//! * [`RuntimeProfile::Default`]: multi-threaded with conservative settings.
//!
//! ## Example
//!
//! ```rust,ignore
//! #[mmrag_runtime::main(server)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use mmrag_derive::main;

use anyhow::anyhow;
use std::sync::OnceLock;
use std::thread::available_parallelism;
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

const DEFAULT_WORKER_THREADS: usize = 4;
const MAX_WORKER_THREADS: usize = 1024;
const MIN_STACK_SIZE: usize = 1024 * 1024;
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;

static WORKER_THREADS: OnceLock<usize> = OnceLock::new();

/// Worker count from `TOKIO_WORKER_THREADS`, falling back to available parallelism.
fn detected_worker_threads() -> usize {
    *WORKER_THREADS.get_or_init(|| {
        std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0 && n <= MAX_WORKER_THREADS)
            .unwrap_or_else(|| {
                available_parallelism().map(std::num::NonZero::get).unwrap_or(DEFAULT_WORKER_THREADS)
            })
    })
}

/// Named runtime presets selectable from `#[mmrag_runtime::main(...)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeProfile {
    #[default]
    Default,
    Server,
    Compact,
}

/// Resolved runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// `None` selects the current-thread scheduler.
    pub worker_threads: Option<usize>,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl From<RuntimeProfile> for RuntimeConfig {
    fn from(profile: RuntimeProfile) -> Self {
        match profile {
            RuntimeProfile::Default => Self {
                worker_threads: Some(detected_worker_threads()),
                stack_size: 2 * 1024 * 1024,
                thread_name: "mmrag-worker".to_owned(),
                thread_keep_alive: Duration::from_secs(60),
            },
            RuntimeProfile::Server => Self {
                worker_threads: Some(detected_worker_threads()),
                stack_size: 4 * 1024 * 1024,
                thread_name: "mmrag-server".to_owned(),
                thread_keep_alive: Duration::from_secs(300),
            },
            RuntimeProfile::Compact => Self {
                worker_threads: None,
                stack_size: 2 * 1024 * 1024,
                thread_name: "mmrag-compact".to_owned(),
                thread_keep_alive: Duration::from_secs(10),
            },
        }
    }
}

impl RuntimeConfig {
    #[must_use = "Customize the number of worker threads for the runtime"]
    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads.clamp(1, MAX_WORKER_THREADS));
        self
    }

    #[must_use = "Customize the stack size for worker threads"]
    pub fn with_stack_size(mut self, size: usize) -> Self {
        self.stack_size = size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE);
        self
    }

    #[must_use = "Customize the thread name"]
    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.trim().is_empty() {
            self.thread_name = name;
        }
        self
    }
}

/// Builds a runtime for the given profile.
///
/// # Errors
/// Returns an error if the OS refuses to create the runtime threads.
pub fn build_runtime(profile: RuntimeProfile) -> Result<Runtime> {
    build_runtime_with_config(&RuntimeConfig::from(profile))
}

/// Builds a runtime from explicit settings. All I/O and timer drivers are enabled.
///
/// # Errors
/// Returns an error if the OS refuses to create the runtime threads.
pub fn build_runtime_with_config(config: &RuntimeConfig) -> Result<Runtime> {
    debug!(config = ?config, "Building tokio runtime");

    let mut builder = match config.worker_threads {
        Some(threads) => {
            let mut builder = Builder::new_multi_thread();
            builder.worker_threads(threads.clamp(1, MAX_WORKER_THREADS));
            builder
        },
        None => Builder::new_current_thread(),
    };

    builder
        .thread_name(&config.thread_name)
        .thread_stack_size(config.stack_size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE))
        .thread_keep_alive(config.thread_keep_alive)
        .enable_all();

    builder.build().map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}
