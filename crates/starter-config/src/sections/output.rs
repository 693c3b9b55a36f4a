use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::context::BuildContext;
use crate::error::{ConfigError, Result};
use crate::merge::layered;

pub const DEFAULT_OUTPUT_PATH: &str = "dist";
pub const DEFAULT_OUTPUT_FILENAME: &str = "[hash].[name].js";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputSettings {
    pub filename: String,

    /// Always absolute
    pub path: PathBuf,

    /// Forced on regardless of caller input
    pub strict_module_exception_handling: bool,

    /// Caller keys passed through to the bundler
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub fn build_output(
    overrides: Option<&Map<String, Value>>,
    ctx: &BuildContext,
) -> Result<OutputSettings> {
    let path = match overrides.and_then(|o| o.get("path")) {
        None | Some(Value::Null) => DEFAULT_OUTPUT_PATH,
        Some(Value::String(path)) => path.as_str(),
        Some(other) => {
            return Err(ConfigError::invalid_section(
                "output",
                format!("`path` must be a string, got {other}"),
            ));
        }
    };
    let path = ctx.resolve(path);

    let mut value = layered(json!({ "filename": DEFAULT_OUTPUT_FILENAME }), overrides);
    if let Value::Object(map) = &mut value {
        map.insert("strictModuleExceptionHandling".into(), Value::Bool(true));
        map.insert("path".into(), Value::String(path.to_string_lossy().into_owned()));
    }

    serde_json::from_value(value).map_err(|err| ConfigError::invalid_section("output", err))
}
