//! Plugin instantiations, described as data for the build backend.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::sections::HtmlDescriptor;

pub const CSS_FILENAME: &str = "[hash].[name].css";
pub const CSS_CHUNK_FILENAME: &str = "[id].css";
pub const DEFAULT_SRC_DIR: &str = "src";

/// Extensions left to the loaders rather than copied verbatim.
pub const COPY_IGNORE: [&str; 5] = ["*.js", "*.scss", "*.css", "*.html", "*.map"];

/// A plugin the backend should instantiate, tagged with its constructor name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "plugin", content = "options")]
pub enum PluginSpec {
    #[serde(rename = "DefinePlugin")]
    Define(IndexMap<String, String>),

    #[serde(rename = "CleanWebpackPlugin")]
    Clean { paths: Vec<PathBuf>, root: PathBuf },

    #[serde(rename = "HotModuleReplacementPlugin")]
    HotModuleReplacement,

    #[serde(rename = "MiniCssExtractPlugin", rename_all = "camelCase")]
    CssExtract {
        filename: String,
        chunk_filename: String,
    },

    #[serde(rename = "HtmlWebpackPlugin")]
    Html(HtmlDescriptor),

    #[serde(rename = "ScriptExtHtmlWebpackPlugin", rename_all = "camelCase")]
    ScriptExtHtml { default_attribute: String },

    #[serde(rename = "CopyWebpackPlugin")]
    Copy {
        patterns: Vec<CopyPattern>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        ignore: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyPattern {
    pub context: String,
    pub from: String,
}

impl PluginSpec {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Define(_) => "DefinePlugin",
            Self::Clean { .. } => "CleanWebpackPlugin",
            Self::HotModuleReplacement => "HotModuleReplacementPlugin",
            Self::CssExtract { .. } => "MiniCssExtractPlugin",
            Self::Html(_) => "HtmlWebpackPlugin",
            Self::ScriptExtHtml { .. } => "ScriptExtHtmlWebpackPlugin",
            Self::Copy { .. } => "CopyWebpackPlugin",
        }
    }

    pub fn css_extract() -> Self {
        Self::CssExtract {
            filename: CSS_FILENAME.to_owned(),
            chunk_filename: CSS_CHUNK_FILENAME.to_owned(),
        }
    }

    pub fn defer_scripts() -> Self {
        Self::ScriptExtHtml {
            default_attribute: "defer".to_owned(),
        }
    }

    /// Copy everything under `src` that no loader handles.
    pub fn copy_static(src: &str) -> Self {
        Self::Copy {
            patterns: vec![CopyPattern {
                context: src.to_owned(),
                from: "**/*".to_owned(),
            }],
            ignore: COPY_IGNORE.iter().map(|s| (*s).to_owned()).collect(),
        }
    }

    /// Copy `asset/` as-is, including files the static copy ignores.
    pub fn copy_assets(src: &str) -> Self {
        Self::Copy {
            patterns: vec![CopyPattern {
                context: src.to_owned(),
                from: "asset/**/*".to_owned(),
            }],
            ignore: Vec::new(),
        }
    }
}
