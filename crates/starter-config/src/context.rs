//! Explicit process context threaded through every transform.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// Working directory and environment snapshot used during derivation.
///
/// Transforms never read `std::env` directly, so a derivation is a pure
/// function of the manifest and this value.
#[derive(Debug, Clone, Default)]
pub struct BuildContext {
    cwd: PathBuf,
    env: HashMap<String, String>,
}

impl BuildContext {
    /// Context rooted at `cwd` with an empty environment.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            env: HashMap::new(),
        }
    }

    /// Snapshot the current process working directory and environment.
    pub fn from_process() -> std::io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd).with_vars(std::env::vars()))
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn with_vars<K, V>(mut self, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.env
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn var(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    /// Resolve `path` against the working directory.
    ///
    /// Absolute paths are kept as given; both forms are lexically normalized.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.clean()
        } else {
            self.cwd.join(path).clean()
        }
    }
}
