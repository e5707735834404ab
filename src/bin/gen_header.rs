use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use shader_header::build_tasks;
use shader_header::{HeaderConfig, HeaderStyle};

/// Generate a C++ header with a shader embedded as a raw string literal.
/// The header is written to stdout.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The shader source file.
    input: PathBuf,
    /// Name of the generated function or variable.
    /// Defaults to the input file name without its extension.
    #[arg(long)]
    name: Option<String>,
    /// Do not emit `#include <string>`.
    #[arg(long)]
    no_include: bool,
    /// Wrap the declaration in this namespace.
    #[arg(long)]
    namespace: Option<String>,
    /// Never emit a namespace, even if --namespace is given.
    #[arg(long)]
    no_namespace: bool,
    /// Strip comments and blank lines (function style only).
    #[arg(long)]
    release: bool,
    /// Omit the `static` qualifier (constant style only).
    #[arg(long)]
    no_static: bool,
    /// How the source is exposed.
    #[arg(long, value_enum, default_value_t)]
    style: HeaderStyle,
}

impl From<Cli> for HeaderConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input_path: cli.input,
            name: cli.name,
            namespace: cli.namespace,
            no_namespace: cli.no_namespace,
            no_include: cli.no_include,
            no_static: cli.no_static,
            release: cli.release,
            style: cli.style,
        }
    }
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let config = HeaderConfig::from(Cli::parse());

    build_tasks::write_header(&config, std::io::stdout().lock())
        .with_context(|| format!("failed to generate header for {:?}", config.input_path))
}
