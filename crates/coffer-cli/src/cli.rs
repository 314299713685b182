use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "coffer",
    about = "Coffer — pluggable key-path configuration store",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Interactively gather backend connection details
    Setup(SetupArgs),
    /// Print a stored connection configuration
    ShowConfig(ShowConfigArgs),
}

#[derive(Args)]
pub struct SetupArgs {
    /// Where to write the configuration file
    #[arg(short, long, default_value = "coffer.toml")]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct ShowConfigArgs {
    /// Configuration file to read
    #[arg(short, long, default_value = "coffer.toml")]
    pub config: PathBuf,
}
