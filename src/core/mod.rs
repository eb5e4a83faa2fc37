//! Core types shared by every layer of msm-scaffold.
//!
//! Currently this is the error system: a typed [`ScaffoldError`] used by the
//! library, plus [`ErrorContext`] and [`user_friendly_error`] for presenting
//! failures to CLI users with details and suggestions.

pub mod error;

pub use error::{ErrorContext, Result, ScaffoldError, user_friendly_error};
