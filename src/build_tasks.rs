use std::io::Write;
use std::path::PathBuf;

use log::{debug, warn};
use thiserror::Error;

use crate::header::{HeaderConfig, HeaderStyle, generate_header};

#[derive(Debug, Error)]
pub enum GenerateHeaderError {
    #[error("error reading shader source {path:?}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error rendering header template")]
    Render(#[from] askama::Error),
}

/// Reads the configured shader and renders its header.
/// Nothing is produced unless the whole input was read.
pub fn prepare_header(config: &HeaderConfig) -> Result<String, GenerateHeaderError> {
    warn_ignored_flags(config);

    let source = std::fs::read_to_string(&config.input_path).map_err(|source| {
        GenerateHeaderError::ReadSource {
            path: config.input_path.clone(),
            source,
        }
    })?;

    debug!(
        "embedding {} bytes from {:?} as {:?} ({:?} style)",
        source.len(),
        config.input_path,
        config.identifier(),
        config.style
    );

    let header = generate_header(config, &source)?;
    Ok(header)
}

/// Renders the header and writes it to `writer` in a single write.
pub fn write_header(config: &HeaderConfig, mut writer: impl Write) -> anyhow::Result<()> {
    let header = prepare_header(config)?;

    writer.write_all(header.as_bytes())?;
    writer.flush()?;

    Ok(())
}

fn warn_ignored_flags(config: &HeaderConfig) {
    match config.style {
        HeaderStyle::Function if config.no_static => {
            warn!("--no-static only applies to the constant style and is ignored")
        }
        HeaderStyle::Constant if config.release => {
            warn!("--release only applies to the function style and is ignored")
        }
        _ => {}
    }
}
