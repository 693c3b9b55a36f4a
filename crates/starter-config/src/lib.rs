//! Derive a webpack configuration from the `webpack` field of a project's
//! `package.json`.
//!
//! The manifest is loaded once through [`ManifestLoader`], each subsection is
//! defaulted by an independent transform in [`sections`], and the result is
//! assembled into a [`WebpackConfig`] that a [`BuildBackend`] consumes.

pub mod backend;
pub mod context;
pub mod error;
pub mod loading;
pub mod manifest;
mod merge;
pub mod sections;
pub mod webpack;

// Re-export main types
pub use backend::{BuildBackend, JsonBackend};
pub use context::BuildContext;
pub use error::*;
pub use loading::{load, substitute_env, ManifestLoader, MANIFEST_FILE, UNSET_VALUE};
pub use manifest::{Manifest, WebpackSection};
pub use sections::*;
pub use webpack::*;
