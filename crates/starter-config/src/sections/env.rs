//! `process.env.*` defines handed to the bundler's define plugin.

use indexmap::IndexMap;
use serde_json::Value;

use crate::context::BuildContext;

pub const NODE_ENV_DEFINE: &str = "process.env.NODE_ENV";
pub const DEFAULT_NODE_ENV: &str = "development";

/// Marks a value as the name of a process environment variable.
pub const ENV_INDIRECTION: char = '$';

/// Expression spliced in for an indirection to an unset variable.
const UNDEFINED: &str = "undefined";

/// Build the defines map. Every value is JavaScript source text, so strings
/// are encoded as JSON string literals.
pub fn build_defines(
    env: &IndexMap<String, Value>,
    ctx: &BuildContext,
) -> IndexMap<String, String> {
    let mut defines = IndexMap::with_capacity(env.len() + 1);
    defines.insert(
        NODE_ENV_DEFINE.to_owned(),
        json_string(
            ctx.var("NODE_ENV")
                .filter(|mode| !mode.is_empty())
                .unwrap_or(DEFAULT_NODE_ENV),
        ),
    );

    for (name, value) in env {
        defines.insert(format!("process.env.{name}"), define_value(value, ctx));
    }

    defines
}

fn define_value(value: &Value, ctx: &BuildContext) -> String {
    match value {
        Value::String(text) => match text.strip_prefix(ENV_INDIRECTION) {
            Some(var) => ctx
                .var(var)
                .map_or_else(|| UNDEFINED.to_owned(), json_string),
            None => json_string(text),
        },
        other => other.to_string(),
    }
}

fn json_string(text: &str) -> String {
    Value::String(text.to_owned()).to_string()
}
