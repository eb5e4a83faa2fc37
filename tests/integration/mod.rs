//! Integration test suite for msm-scaffold
//!
//! End-to-end tests that render whole layouts to disk and drive the binary.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **project**: the bundled layout rendered into a scratch directory
//! - **rerun**: rendering over an existing project and the backups it leaves
//! - **notebook**: notebook mode end to end
//! - **failure**: error propagation and working-directory stability
//! - **cli**: the `msm-scaffold` binary

#[path = "../common/mod.rs"]
mod common;

mod cli;
mod failure;
mod notebook;
mod project;
mod rerun;
