//! Clap adapter for envlayer.
//!
//! Compiled only with the `clap` Cargo feature (on by default). [`EnvArgs`]
//! is a clap derive struct you flatten into your own parser to give users
//! `--env-file`, `--env`, and `--no-local` flags. The only bridge to the core
//! is [`EnvArgs::into_builder()`]; everything after that is the clap-free
//! [`EnvLayerBuilder`] API.

use std::path::PathBuf;

use clap::Args;

use crate::builder::{DEFAULT_FILE, EnvLayer, EnvLayerBuilder};

/// Clap-derived flags selecting which `.env` files to load.
///
/// ```ignore
/// #[derive(Parser)]
/// struct Cli {
///     #[command(flatten)]
///     env: EnvArgs,
/// }
///
/// let cli = Cli::parse();
/// cli.env.into_builder().load();
/// ```
#[derive(Debug, Clone, Args)]
pub struct EnvArgs {
    /// Base env file; variants are derived from its name.
    #[arg(long = "env-file", value_name = "PATH", default_value = DEFAULT_FILE, global = true)]
    pub env_file: PathBuf,

    /// Deployment environment (loads `.env.<NAME>` and `.env.<NAME>.local`).
    #[arg(long = "env", value_name = "NAME", global = true)]
    pub environment: Option<String>,

    /// Skip `.local` override files.
    #[arg(long, global = true)]
    pub no_local: bool,
}

impl EnvArgs {
    /// Convert parsed flags into a loader builder.
    pub fn into_builder(self) -> EnvLayerBuilder {
        EnvLayer::builder()
            .path(self.env_file)
            .maybe_environment(self.environment.as_deref())
            .local_overrides(!self.no_local)
    }
}
