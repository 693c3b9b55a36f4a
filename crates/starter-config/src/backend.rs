//! Seam between derivation and the external bundler.

use std::io::Write;

use tracing::info;

use crate::error::{ConfigError, Result};
use crate::webpack::WebpackConfig;

/// Consumes an assembled configuration. The bundler, its loaders and plugins
/// live behind this trait.
pub trait BuildBackend {
    fn run(&mut self, config: &WebpackConfig) -> Result<()>;
}

/// Writes the configuration as pretty-printed JSON, for a JavaScript shim
/// that passes it to webpack.
pub struct JsonBackend<W: Write> {
    writer: W,
}

impl<W: Write> JsonBackend<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> BuildBackend for JsonBackend<W> {
    fn run(&mut self, config: &WebpackConfig) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, config).map_err(ConfigError::Serialize)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        info!(
            entries = config.entry.len(),
            plugins = config.plugins.len(),
            "wrote webpack configuration"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::BuildContext;
    use crate::manifest::Manifest;
    use serde_json::{json, Value};

    #[test]
    fn json_backend_writes_parseable_config() {
        let manifest: Manifest = serde_json::from_value(json!({
            "webpack": { "entry": { "main.js": "src/index.js" } }
        }))
        .unwrap();
        let config = WebpackConfig::assemble(&manifest, &BuildContext::new("/app")).unwrap();

        let mut backend = JsonBackend::new(Vec::new());
        backend.run(&config).unwrap();

        let written: Value = serde_json::from_slice(&backend.into_inner()).unwrap();
        assert_eq!(written["entry"]["main"], json!("/app/src/index.js"));
        assert_eq!(written["devtool"], json!("source-map"));
        assert_eq!(written["devServer"]["contentBase"], json!("/app/dist"));
    }
}
