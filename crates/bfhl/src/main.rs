use crate::prelude::*;
use clap::Parser;

mod config;
mod error;
mod prelude;
mod process;
mod server;
mod smoke;
mod stdio;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Classify token lists into numbers, letters and special characters"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    #[clap(flatten)]
    identity: config::IdentityArgs,

    /// Whether to display additional information.
    #[clap(long, env = "BFHL_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Serve the HTTP API
    Serve(crate::server::ServeOptions),

    /// Answer JSON request envelopes read line by line from stdin
    Stdio,

    /// Classify tokens given on the command line
    Process(crate::process::ProcessOptions),

    /// Check a running server against the reference scenarios
    Smoke(crate::smoke::SmokeOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Serve(options) => crate::server::run(options, app.global).await,
        SubCommands::Stdio => crate::stdio::run(app.global).await,
        SubCommands::Process(options) => crate::process::run(options, app.global),
        SubCommands::Smoke(options) => crate::smoke::run(options, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
