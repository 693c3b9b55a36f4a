use std::io::{self, Write};

use crate::cli::InspectArgs;
use crate::commands::load_manifest;
use crate::error::Result;
use crate::settings::Settings;

/// Print the `webpack` field as the deriver sees it, after substitution.
pub fn execute(args: InspectArgs) -> Result<()> {
    let settings = Settings::load(&args.project, None)?;
    let (_, manifest) = load_manifest(&settings)?;
    let section = manifest.webpack()?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, section)?;
    writeln!(stdout)?;
    Ok(())
}
