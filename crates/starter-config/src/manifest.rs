//! Typed view of the parts of `package.json` this crate reads.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webpack: Option<WebpackSection>,

    /// Transpiler options replacing the built-in babel preset list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub babel: Option<Value>,
}

impl Manifest {
    pub fn webpack(&self) -> Result<&WebpackSection> {
        self.webpack
            .as_ref()
            .ok_or(ConfigError::MissingWebpackSection)
    }
}

/// The `webpack` field of the manifest.
///
/// `output`, `resolve` and `devServer` stay untyped so keys this crate does
/// not know about pass through to the bundler untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebpackSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    /// Output name → source path, in manifest order
    #[serde(default)]
    pub entry: IndexMap<String, String>,

    /// Variable name → literal value or `$NAME` indirection
    #[serde(default)]
    pub env: IndexMap<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolve: Option<Map<String, Value>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<Map<String, Value>>,

    /// Source directory used as the asset copy context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}
