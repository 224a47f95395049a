// Parent `tools` module controls `cli` gating; avoid duplicating crate-level cfg here.
mod commands;
pub mod io;
pub mod state;

use anyhow::Result;
use clap::{Parser, Subcommand};
use state::CliContext;

#[derive(Parser, Debug)]
#[command(name = "addrspan")]
#[command(
    version,
    about = "Derive addresses and address ranges from CIDR blocks."
)]
pub struct Cli {
    /// Config file (defaults to addrspan.toml / addrspan.json in the current directory)
    #[arg(long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate (( ips <ip-or-cidr> <index> [count] )) and print the result as JSON
    Ips(commands::ips::IpsCommand),
    /// List the document locations an ips call depends on
    Deps(commands::deps::DepsCommand),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = CliContext::load(cli.config.as_deref(), cli.debug)?;

    match cli.command {
        Commands::Ips(command) => command.execute(&ctx),
        Commands::Deps(command) => command.execute(&ctx),
    }
}
