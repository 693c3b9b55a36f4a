use std::fs::File;
use std::io::{self, BufWriter};

use starter_config::{BuildBackend, JsonBackend, WebpackConfig};
use tracing::info;

use crate::cli::DeriveArgs;
use crate::commands::load_manifest;
use crate::error::{CliError, Result};
use crate::settings::Settings;

pub fn execute(args: DeriveArgs) -> Result<()> {
    let settings = Settings::load(&args.project, args.out.as_deref())?;
    let (ctx, manifest) = load_manifest(&settings)?;
    let config = WebpackConfig::assemble(&manifest, &ctx)?;

    match &settings.out {
        Some(out) => {
            let path = ctx.resolve(out);
            let file = File::create(&path).map_err(|source| CliError::WriteOutput {
                path: path.clone(),
                source,
            })?;
            JsonBackend::new(BufWriter::new(file)).run(&config)?;
            info!("configuration written to {}", path.display());
        }
        None => {
            JsonBackend::new(io::stdout().lock()).run(&config)?;
        }
    }

    Ok(())
}
