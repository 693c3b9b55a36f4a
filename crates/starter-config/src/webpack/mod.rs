//! The assembled configuration handed to a [`BuildBackend`](crate::BuildBackend).

mod plugins;
mod rules;

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::context::BuildContext;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::sections::{DerivedConfig, DevServerSettings, OutputSettings, ResolveSettings};

pub use plugins::{
    CopyPattern, PluginSpec, COPY_IGNORE, CSS_CHUNK_FILENAME, CSS_FILENAME, DEFAULT_SRC_DIR,
};
pub use rules::{
    default_babel_options, LoaderEntry, ModuleOptions, Rule, CSS_EXTRACT_LOADER, SCRIPT_EXCLUDE,
    SCRIPT_TEST, STYLE_TEST,
};

pub const DEFAULT_MODE: &str = "development";
pub const DEVTOOL: &str = "source-map";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebpackConfig {
    pub mode: String,
    pub devtool: String,
    pub dev_server: DevServerSettings,
    pub entry: IndexMap<String, PathBuf>,
    pub output: OutputSettings,
    pub resolve: ResolveSettings,
    pub module: ModuleOptions,
    pub plugins: Vec<PluginSpec>,
}

impl WebpackConfig {
    /// Derive every subsection from the manifest and assemble the result.
    ///
    /// # Example
    ///
    /// ```
    /// use starter_config::{BuildContext, Manifest, WebpackConfig};
    /// use serde_json::json;
    ///
    /// let manifest: Manifest = serde_json::from_value(json!({
    ///     "webpack": { "entry": { "main.js": "src/index.js" } }
    /// }))
    /// .unwrap();
    ///
    /// let config = WebpackConfig::assemble(&manifest, &BuildContext::new("/app")).unwrap();
    /// assert_eq!(config.mode, "development");
    /// assert!(config.entry.contains_key("main"));
    /// ```
    pub fn assemble(manifest: &Manifest, ctx: &BuildContext) -> Result<Self> {
        let section = manifest.webpack()?;
        let derived = DerivedConfig::derive(section, ctx)?;
        let src = section.src.as_deref().unwrap_or(DEFAULT_SRC_DIR);

        let mut plugins = vec![
            PluginSpec::Define(derived.env),
            PluginSpec::Clean {
                paths: vec![derived.output.path.clone()],
                root: ctx.cwd().to_path_buf(),
            },
            PluginSpec::HotModuleReplacement,
            PluginSpec::css_extract(),
        ];
        plugins.extend(derived.html.into_iter().map(PluginSpec::Html));
        plugins.push(PluginSpec::defer_scripts());
        plugins.push(PluginSpec::copy_static(src));
        plugins.push(PluginSpec::copy_assets(src));

        debug!(
            plugins = ?plugins.iter().map(PluginSpec::name).collect::<Vec<_>>(),
            "assembled plugin list"
        );

        Ok(Self {
            mode: section.mode.clone().unwrap_or_else(|| DEFAULT_MODE.to_owned()),
            devtool: DEVTOOL.to_owned(),
            dev_server: derived.dev_server,
            entry: derived.js,
            output: derived.output,
            resolve: derived.resolve,
            module: ModuleOptions::new(manifest.babel.as_ref(), ctx),
            plugins,
        })
    }
}
