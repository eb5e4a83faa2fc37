//! Configuration management.
//!
//! msm-scaffold reads one optional user-wide TOML file (see [`global`]).
//! Values from it provide defaults for command line flags; a flag given on
//! the command line always wins.

pub mod global;

pub use global::GlobalConfig;
