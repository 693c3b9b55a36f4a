//! Loader rules for script and stylesheet sources.
//!
//! `test` and `exclude` hold regular expression sources; the consumer turns
//! them into `RegExp` values.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::context::BuildContext;
use crate::sections::DEFAULT_SOURCE_DIRS;

pub const SCRIPT_TEST: &str = r"\.js$";
pub const SCRIPT_EXCLUDE: &str = "(node_modules|bower_components)";
pub const STYLE_TEST: &str = r"\.scss$";
pub const CSS_EXTRACT_LOADER: &str = "mini-css-extract-plugin/dist/loader";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleOptions {
    pub rules: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub test: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<PathBuf>,

    /// Loaders, applied last to first
    #[serde(rename = "use")]
    pub loaders: Vec<LoaderEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderEntry {
    pub loader: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl LoaderEntry {
    fn new(loader: &str, options: Value) -> Self {
        Self {
            loader: loader.to_owned(),
            options: Some(options),
        }
    }
}

impl ModuleOptions {
    /// Script rule transpiled with `babel` (or the default presets) and the
    /// sass → css → extract chain for stylesheets.
    pub fn new(babel: Option<&Value>, ctx: &BuildContext) -> Self {
        Self {
            rules: vec![script_rule(babel, ctx), style_rule()],
        }
    }
}

fn script_rule(babel: Option<&Value>, ctx: &BuildContext) -> Rule {
    let options = babel.cloned().unwrap_or_else(default_babel_options);
    Rule {
        test: SCRIPT_TEST.to_owned(),
        exclude: Some(SCRIPT_EXCLUDE.to_owned()),
        include: DEFAULT_SOURCE_DIRS.iter().map(|dir| ctx.resolve(dir)).collect(),
        loaders: vec![LoaderEntry::new("babel-loader", options)],
    }
}

fn style_rule() -> Rule {
    Rule {
        test: STYLE_TEST.to_owned(),
        exclude: None,
        include: Vec::new(),
        loaders: vec![
            LoaderEntry::new(CSS_EXTRACT_LOADER, json!({})),
            LoaderEntry::new("css-loader", json!({ "sourceMap": true, "url": false })),
            LoaderEntry::new(
                "sass-loader",
                json!({ "outputStyle": "compressed", "sourceMap": true }),
            ),
        ],
    }
}

/// Babel options used when the manifest has no `babel` field.
pub fn default_babel_options() -> Value {
    json!({
        "presets": ["@babel/env", "@babel/react"],
        "plugins": [
            "@babel/plugin-proposal-function-bind",
            "@babel/plugin-proposal-export-default-from",
            "@babel/plugin-proposal-logical-assignment-operators",
            ["@babel/plugin-proposal-optional-chaining", { "loose": false }],
            ["@babel/plugin-proposal-pipeline-operator", { "proposal": "minimal" }],
            ["@babel/plugin-proposal-nullish-coalescing-operator", { "loose": false }],
            "@babel/plugin-proposal-do-expressions",
            ["@babel/plugin-proposal-decorators", { "legacy": true }],
            "@babel/plugin-proposal-function-sent",
            "@babel/plugin-proposal-export-namespace-from",
            "@babel/plugin-proposal-numeric-separator",
            "@babel/plugin-proposal-throw-expressions",
            "@babel/plugin-syntax-dynamic-import",
            "@babel/plugin-syntax-import-meta",
            ["@babel/plugin-proposal-class-properties", { "loose": false }],
            "@babel/plugin-proposal-json-strings"
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_rule_uses_default_presets() {
        let module = ModuleOptions::new(None, &BuildContext::new("/app"));
        let script = &module.rules[0];

        assert_eq!(script.test, r"\.js$");
        assert_eq!(
            script.include,
            vec![PathBuf::from("/app/src"), PathBuf::from("/app/lib")]
        );
        assert_eq!(script.loaders[0].loader, "babel-loader");
        let options = script.loaders[0].options.as_ref().unwrap();
        assert_eq!(options["presets"], json!(["@babel/env", "@babel/react"]));
    }

    #[test]
    fn manifest_babel_replaces_defaults() {
        let babel = json!({ "presets": ["@babel/preset-env"] });
        let module = ModuleOptions::new(Some(&babel), &BuildContext::new("/app"));
        assert_eq!(module.rules[0].loaders[0].options, Some(babel));
    }

    #[test]
    fn style_chain_order() {
        let module = ModuleOptions::new(None, &BuildContext::new("/app"));
        let loaders: Vec<_> = module.rules[1]
            .loaders
            .iter()
            .map(|l| l.loader.as_str())
            .collect();
        assert_eq!(loaders, vec![CSS_EXTRACT_LOADER, "css-loader", "sass-loader"]);
    }

    #[test]
    fn rule_serializes_use_key() {
        let module = ModuleOptions::new(None, &BuildContext::new("/app"));
        let value = serde_json::to_value(&module.rules[1]).unwrap();
        assert!(value.get("use").is_some());
        assert!(value.get("include").is_none());
        assert!(value.get("exclude").is_none());
    }
}
