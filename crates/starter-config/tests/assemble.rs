//! End-to-end derivation from a manifest to the assembled webpack configuration.

use serde_json::{json, Value};
use starter_config::{
    BuildContext, ConfigError, Manifest, PluginSpec, WebpackConfig, NODE_ENV_DEFINE,
};
use std::path::{Path, PathBuf};

const ROOT: &str = "/work/site";

fn manifest(webpack: Value) -> Manifest {
    serde_json::from_value(json!({ "name": "site", "webpack": webpack })).expect("manifest")
}

fn assemble(webpack: Value) -> WebpackConfig {
    assemble_with(webpack, BuildContext::new(ROOT))
}

fn assemble_with(webpack: Value, ctx: BuildContext) -> WebpackConfig {
    WebpackConfig::assemble(&manifest(webpack), &ctx).expect("assemble")
}

fn html_plugins(config: &WebpackConfig) -> Vec<&starter_config::HtmlDescriptor> {
    config
        .plugins
        .iter()
        .filter_map(|p| match p {
            PluginSpec::Html(html) => Some(html),
            _ => None,
        })
        .collect()
}

#[test]
fn entries_split_into_bundles_and_pages() {
    let config = assemble(json!({
        "entry": { "main.js": "src/index.js", "page.html": "src/page.html" }
    }));

    assert_eq!(config.entry.len(), 1);
    assert_eq!(config.entry["main"], Path::new(ROOT).join("src/index.js"));

    let pages = html_plugins(&config);
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].filename, "page.html");
    assert_eq!(pages[0].template, "src/page.html");
    assert_eq!(pages[0].inject, "head");
    assert_eq!(pages[0].chunks, vec!["page"]);
}

#[test]
fn env_defines_follow_indirections() {
    let ctx = BuildContext::new(ROOT).with_var("SECRET", "abc");
    let config = assemble_with(
        json!({ "env": { "API_URL": "https://x", "TOKEN": "$SECRET" } }),
        ctx,
    );

    let PluginSpec::Define(defines) = &config.plugins[0] else {
        panic!("first plugin should be DefinePlugin");
    };
    assert_eq!(defines["process.env.API_URL"], "\"https://x\"");
    assert_eq!(defines["process.env.TOKEN"], "\"abc\"");
    assert_eq!(defines[NODE_ENV_DEFINE], "\"development\"");
}

#[test]
fn output_defaults_and_forced_strict_flag() {
    let config = assemble(json!({}));
    assert_eq!(config.output.path, PathBuf::from("/work/site/dist"));
    assert!(config.output.strict_module_exception_handling);

    let config = assemble(json!({ "output": { "strictModuleExceptionHandling": false } }));
    assert!(config.output.strict_module_exception_handling);
}

#[test]
fn resolve_modules_order() {
    let config = assemble(json!({ "resolve": { "modules": ["custom"] } }));
    assert_eq!(
        config.resolve.modules,
        vec!["/work/site/src", "/work/site/lib", "node_modules", "custom"]
    );
}

#[test]
fn dev_server_content_base_ignores_caller_value() {
    let config = assemble(json!({
        "output": { "path": "public" },
        "devServer": { "contentBase": "/explicit/path", "port": 9000 }
    }));

    assert_eq!(config.dev_server.content_base, PathBuf::from("/work/site/public"));
    assert_eq!(config.dev_server.port, json!(9000));
    assert_eq!(config.dev_server.compress, json!(true));
}

#[test]
fn dev_server_accepts_string_port_and_browser_name() {
    let config = assemble(json!({
        "devServer": { "open": "Google Chrome", "port": "8081" }
    }));

    assert_eq!(config.dev_server.open, json!("Google Chrome"));
    assert_eq!(config.dev_server.port, json!("8081"));
}

#[test]
fn mode_and_devtool() {
    assert_eq!(assemble(json!({})).mode, "development");
    let config = assemble(json!({ "mode": "production" }));
    assert_eq!(config.mode, "production");
    assert_eq!(config.devtool, "source-map");
}

#[test]
fn plugin_order() {
    let config = assemble(json!({
        "entry": { "a.html": "src/a.html", "b.html": "src/b.html" },
        "src": "web"
    }));

    let names: Vec<_> = config.plugins.iter().map(PluginSpec::name).collect();
    assert_eq!(
        names,
        vec![
            "DefinePlugin",
            "CleanWebpackPlugin",
            "HotModuleReplacementPlugin",
            "MiniCssExtractPlugin",
            "HtmlWebpackPlugin",
            "HtmlWebpackPlugin",
            "ScriptExtHtmlWebpackPlugin",
            "CopyWebpackPlugin",
            "CopyWebpackPlugin",
        ]
    );

    let PluginSpec::Copy { patterns, ignore } = &config.plugins[7] else {
        panic!("expected CopyWebpackPlugin");
    };
    assert_eq!(patterns[0].context, "web");
    assert_eq!(patterns[0].from, "**/*");
    assert!(ignore.contains(&"*.scss".to_string()));
}

#[test]
fn clean_plugin_targets_output_path() {
    let config = assemble(json!({ "output": { "path": "build" } }));
    assert_eq!(
        config.plugins[1],
        PluginSpec::Clean {
            paths: vec![PathBuf::from("/work/site/build")],
            root: PathBuf::from(ROOT),
        }
    );
}

#[test]
fn serialized_shape_matches_webpack_schema() {
    let config = assemble(json!({ "entry": { "main.js": "src/index.js" } }));
    let value = serde_json::to_value(&config).unwrap();

    for key in ["mode", "devtool", "devServer", "entry", "output", "resolve", "module", "plugins"] {
        assert!(value.get(key).is_some(), "missing `{key}`");
    }
    assert_eq!(value["output"]["strictModuleExceptionHandling"], json!(true));
    assert_eq!(value["module"]["rules"][0]["use"][0]["loader"], json!("babel-loader"));
}

#[test]
fn missing_webpack_field_is_rejected() {
    let manifest: Manifest = serde_json::from_value(json!({ "name": "plain" })).unwrap();
    let err = WebpackConfig::assemble(&manifest, &BuildContext::new(ROOT)).unwrap_err();
    assert!(matches!(err, ConfigError::MissingWebpackSection));
}
