//! Manifest loading with `process.env` substitution.
//!
//! The manifest is read as text, every quoted `"process.env.NAME"` token is
//! replaced with the value of `NAME` from the [`BuildContext`], and only then
//! is the result parsed.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, error, info, warn};

use crate::context::BuildContext;
use crate::error::{ConfigError, Result};
use crate::manifest::Manifest;

pub const MANIFEST_FILE: &str = "package.json";

/// Text substituted for a `"process.env.NAME"` token whose variable is unset.
pub const UNSET_VALUE: &str = "undefined";

static PROCESS_ENV_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""process\.env\.([^"]+)""#).expect("valid regex")
});

/// Reads the manifest relative to a build context.
///
/// # Example
///
/// ```no_run
/// use starter_config::{BuildContext, ManifestLoader};
///
/// let ctx = BuildContext::from_process().unwrap();
/// let manifest = ManifestLoader::new(&ctx).load().unwrap();
/// ```
pub struct ManifestLoader<'a> {
    ctx: &'a BuildContext,
    file_name: PathBuf,
}

impl<'a> ManifestLoader<'a> {
    pub fn new(ctx: &'a BuildContext) -> Self {
        Self {
            ctx,
            file_name: PathBuf::from(MANIFEST_FILE),
        }
    }

    /// Use a manifest file other than `package.json`.
    pub fn with_file_name(mut self, file_name: impl AsRef<Path>) -> Self {
        self.file_name = file_name.as_ref().to_path_buf();
        self
    }

    /// Absolute path of the manifest this loader reads.
    pub fn path(&self) -> PathBuf {
        self.ctx.resolve(&self.file_name)
    }

    /// Load and parse the manifest.
    ///
    /// Exactly one diagnostic is logged: the substituted `webpack` section on
    /// success, or the failure itself.
    pub fn load(&self) -> Result<Manifest> {
        match self.try_load() {
            Ok(manifest) => {
                if let Some(webpack) = &manifest.webpack {
                    if let Ok(pretty) = serde_json::to_string_pretty(webpack) {
                        info!("config:: {pretty}");
                    }
                }
                Ok(manifest)
            }
            Err(err) => {
                error!("failed to load {}: {err}", self.path().display());
                Err(err)
            }
        }
    }

    fn try_load(&self) -> Result<Manifest> {
        let path = self.path();
        if !path.exists() {
            return Err(ConfigError::NotFound(path));
        }

        debug!(path = %path.display(), "reading manifest");
        let content = fs::read_to_string(&path)?;
        let content = substitute_env(&content, self.ctx);

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }
}

/// Replace quoted `"process.env.NAME"` tokens with the JSON-encoded value of
/// `NAME`. Unset variables become the string `undefined`.
pub fn substitute_env<'c>(content: &'c str, ctx: &BuildContext) -> Cow<'c, str> {
    PROCESS_ENV_TOKEN.replace_all(content, |caps: &Captures<'_>| {
        let name = &caps[1];
        let value = ctx.var(name).unwrap_or_else(|| {
            warn!(variable = name, "manifest references an unset environment variable");
            UNSET_VALUE
        });
        serde_json::Value::String(value.to_owned()).to_string()
    })
}

/// Load `package.json` from the context's working directory (convenience function).
pub fn load(ctx: &BuildContext) -> Result<Manifest> {
    ManifestLoader::new(ctx).load()
}
