//! Command-line front end for `starter-config`.
//!
//! - [`cli`] - argument definitions
//! - [`commands`] - command implementations
//! - [`settings`] - layered settings (defaults, `STARTER_*` environment, flags)
//! - [`logger`] - tracing setup
//! - [`error`] - error types and miette conversion

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod settings;
