//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Verbosity-aware printing and result rendering
//!
//! All command output goes through this module so quiet and debug modes
//! behave the same everywhere.

pub mod output;
