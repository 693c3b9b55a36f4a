use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::context::BuildContext;
use crate::error::{ConfigError, Result};

/// Directories searched before any caller-supplied module path.
pub const DEFAULT_SOURCE_DIRS: [&str; 2] = ["src", "lib"];
pub const DEPENDENCY_DIR: &str = "node_modules";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolveSettings {
    pub modules: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub fn build_resolve(
    overrides: Option<&Map<String, Value>>,
    ctx: &BuildContext,
) -> Result<ResolveSettings> {
    let mut extra = overrides.cloned().unwrap_or_default();

    let caller_modules: Vec<String> = match extra.remove("modules") {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => serde_json::from_value(value)
            .map_err(|err| ConfigError::invalid_section("resolve", err))?,
    };

    let modules = DEFAULT_SOURCE_DIRS
        .iter()
        .map(|dir| ctx.resolve(dir).to_string_lossy().into_owned())
        .chain(std::iter::once(DEPENDENCY_DIR.to_owned()))
        .chain(caller_modules)
        .collect();

    Ok(ResolveSettings { modules, extra })
}
