//! Entry point for kindabot, a small terminal chatbot for a food delivery site.
//!
//! This binary loads environment variables, parses CLI arguments via [`cli`],
//! and dispatches to the appropriate subcommand handler.

mod chat;
mod cli;
mod config;
mod constants;
mod logging;
mod output;
mod provider;
mod responder;
#[cfg(test)]
mod testing;

use anyhow::Result;

/// Runs the kindabot CLI.
///
/// Loads `.env` files (silently ignored if absent), parses command-line
/// arguments into a [`cli::Cli`] struct, and dispatches the chosen
/// subcommand via [`cli::run`].
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = cli::parse();
    cli::run(cli).await
}
