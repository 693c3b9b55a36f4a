use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::merge::layered;
use crate::sections::output::OutputSettings;

pub const DEFAULT_DEV_SERVER_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevServerSettings {
    /// Caller values pass through untyped; webpack-dev-server also accepts
    /// strings and objects here.
    pub compress: Value,
    pub port: Value,
    pub open: Value,

    /// Always the resolved output path; never overridable.
    pub content_base: PathBuf,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Layer caller overrides on the defaults, then derive the content root
/// from the already-resolved output path.
pub fn build_dev_server(
    overrides: Option<&Map<String, Value>>,
    output: &OutputSettings,
) -> Result<DevServerSettings> {
    let mut value = layered(
        json!({
            "compress": true,
            "port": DEFAULT_DEV_SERVER_PORT,
            "open": true,
        }),
        overrides,
    );

    if let Value::Object(map) = &mut value {
        let content_base = Value::String(output.path.to_string_lossy().into_owned());
        if let Some(previous) = map.insert("contentBase".into(), content_base) {
            debug!(%previous, "contentBase is derived from output.path; caller value ignored");
        }
    }

    serde_json::from_value(value).map_err(|err| ConfigError::invalid_section("devServer", err))
}
