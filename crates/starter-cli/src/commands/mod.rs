//! Command implementations.

mod derive;
mod inspect;

pub use self::derive::execute as derive_execute;
pub use self::inspect::execute as inspect_execute;

use starter_config::{BuildContext, Manifest, ManifestLoader};

use crate::error::Result;
use crate::settings::Settings;

/// Resolve the project context and load its manifest.
fn load_manifest(settings: &Settings) -> Result<(BuildContext, Manifest)> {
    let ctx = settings.context()?;
    let manifest = ManifestLoader::new(&ctx)
        .with_file_name(&settings.manifest)
        .load()?;
    Ok((ctx, manifest))
}
