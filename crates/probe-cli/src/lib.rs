//! Probe CLI - dependency checks for monitoring scripts.
//!
//! A thin driver over [`probe_graph`]: it loads configuration, resolves a
//! check's local files and packages, and renders the result for humans or
//! as JSON.
//!
//! - [`cli`] - argument definitions
//! - [`commands`] - `deps` and `packages`
//! - [`error`] - error types and miette conversion
//! - [`logger`] - tracing setup
//! - [`ui`] - colored status messages

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
