//! Independent default-filling transforms over the `webpack` section.
//!
//! Each builder takes one raw subsection plus the [`BuildContext`]. The only
//! ordering constraint is that the dev-server settings read the resolved
//! output path.

mod dev_server;
mod entry;
mod env;
mod html;
mod output;
mod resolve;

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::context::BuildContext;
use crate::error::Result;
use crate::manifest::WebpackSection;

pub use dev_server::{build_dev_server, DevServerSettings, DEFAULT_DEV_SERVER_PORT};
pub use entry::{build_entries, bundle_entries, template_entries};
pub use env::{build_defines, DEFAULT_NODE_ENV, ENV_INDIRECTION, NODE_ENV_DEFINE};
pub use html::{build_html, HtmlDescriptor, HTML_INJECT};
pub use output::{build_output, OutputSettings, DEFAULT_OUTPUT_FILENAME, DEFAULT_OUTPUT_PATH};
pub use resolve::{build_resolve, ResolveSettings, DEFAULT_SOURCE_DIRS, DEPENDENCY_DIR};

/// Fully defaulted, path-resolved subsections of the `webpack` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedConfig {
    /// Bundle entries: output name → absolute source path
    pub js: IndexMap<String, PathBuf>,

    /// `process.env.*` defines, values as JavaScript source
    pub env: IndexMap<String, String>,

    pub html: Vec<HtmlDescriptor>,
    pub output: OutputSettings,
    pub resolve: ResolveSettings,
    pub dev_server: DevServerSettings,
}

impl DerivedConfig {
    pub fn derive(section: &WebpackSection, ctx: &BuildContext) -> Result<Self> {
        let output = build_output(section.output.as_ref(), ctx)?;
        let dev_server = build_dev_server(section.dev_server.as_ref(), &output)?;

        let derived = Self {
            js: build_entries(&section.entry, ctx),
            env: build_defines(&section.env, ctx),
            html: build_html(&section.entry),
            resolve: build_resolve(section.resolve.as_ref(), ctx)?,
            output,
            dev_server,
        };

        debug!(
            entries = derived.js.len(),
            pages = derived.html.len(),
            defines = derived.env.len(),
            "derived webpack configuration"
        );

        Ok(derived)
    }
}
