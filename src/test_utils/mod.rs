//! Test utilities for msm-scaffold
//!
//! Helpers for unit and integration tests: one-time logging setup and
//! fixtures that build template sources with metadata blocks.
//!
//! # Example
//!
//! ```rust,no_run
//! use msm_scaffold::test_utils::{TemplateFixture, init_test_logging, memory_store};
//!
//! init_test_logging(None);
//! let store = memory_store(&[
//!     TemplateFixture::new("tica/tica.py", "print('tica')\n").depends(&["ftrajs"]),
//! ]);
//! ```

pub mod fixtures;

pub use fixtures::{TemplateFixture, fixed_renderer, memory_store, write_template_dir};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has any effect. With `level` set, that level is used;
/// otherwise `RUST_LOG` is honored, and without either nothing is logged.
///
/// ```bash
/// RUST_LOG=msm_scaffold=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
