//! Settings layered with figment.
//!
//! Priority: command-line flags > `STARTER_*` environment > defaults

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};
use starter_config::{BuildContext, MANIFEST_FILE};

use crate::cli::ProjectArgs;
use crate::error::Result;

pub const ENV_PREFIX: &str = "STARTER_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Project directory; the process working directory when unset
    pub cwd: Option<PathBuf>,

    /// Manifest file relative to the project directory
    pub manifest: PathBuf,

    /// Destination for the derived configuration; stdout when unset
    pub out: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cwd: None,
            manifest: PathBuf::from(MANIFEST_FILE),
            out: None,
        }
    }
}

/// Flags that were actually given; absent ones don't override lower layers.
#[derive(Debug, Default, Serialize)]
struct FlagOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    cwd: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    manifest: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    out: Option<PathBuf>,
}

impl Settings {
    pub fn load(project: &ProjectArgs, out: Option<&Path>) -> Result<Self> {
        Ok(Self::figment(project, out).extract()?)
    }

    fn figment(project: &ProjectArgs, out: Option<&Path>) -> Figment {
        let flags = FlagOverrides {
            cwd: project.cwd.clone(),
            manifest: project.manifest.clone(),
            out: out.map(Path::to_path_buf),
        };

        Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(flags))
    }

    /// Build context for the project directory with the current environment.
    pub fn context(&self) -> Result<BuildContext> {
        let process = BuildContext::from_process()?;
        Ok(match &self.cwd {
            Some(cwd) => {
                let cwd = process.resolve(cwd);
                process.with_cwd(cwd)
            }
            None => process,
        })
    }
}
