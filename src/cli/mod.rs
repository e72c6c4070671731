//! Command-line interface definition and dispatch for kindabot.
//!
//! Uses [`clap`] for argument parsing with derive macros. Running with no
//! subcommand starts the interactive chat; config handling lives in the
//! [`config`] submodule.

mod config;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use crate::config::Config;
use crate::output::{Renderer, TranscriptRenderer};
use crate::provider::{self, RemoteSettings};
use crate::responder::{Dispatcher, GenerationSettings, RuleBook};
use crate::{chat, logging};

/// Top-level CLI structure for kindabot.
#[derive(Parser, Debug)]
#[command(
    name = "kindabot",
    about = "A small food-delivery chatbot with a local fallback",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
    #[command(flatten)]
    pub responder: ResponderArgs,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available subcommands for the kindabot CLI.
///
/// The `///` doc comments on variants double as `--help` text rendered by clap.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start an interactive chat session (the default)
    Chat,
    /// Answer a single question and exit
    Ask {
        /// The question to ask
        prompt: Vec<String>,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Flags for commands that answer questions.
///
/// Global, so they work before or after `chat`/`ask` and with no subcommand.
#[derive(Args, Debug, Default)]
pub struct ResponderArgs {
    /// Model to use (overrides config)
    #[arg(short, long, global = true)]
    pub model: Option<String>,
    /// Never call the remote API; answer from local rules only
    #[arg(long, global = true)]
    pub local: bool,
}

/// Subcommands for the `config` command.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the config path and effective settings
    Show,
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Dispatches the parsed CLI command to its handler.
pub async fn run(cli: Cli) -> Result<()> {
    logging::init(cli.verbose);
    tracing::debug!("parsed CLI arguments: {:?}", cli);

    let responder = cli.responder;
    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => {
            let dispatcher = build_dispatcher(&load_config(), &responder);
            chat::run_chat(dispatcher).await
        }
        Commands::Ask { prompt } => {
            let prompt = prompt.join(" ");
            if prompt.trim().is_empty() {
                anyhow::bail!("No prompt provided. Usage: kindabot ask \"your question here\"");
            }

            let dispatcher = build_dispatcher(&load_config(), &responder);
            eprintln!("{}", dispatcher.status().to_string().dimmed());

            let reply = dispatcher.respond(prompt.trim()).await;
            TranscriptRenderer::stdout().render_reply(&reply);
            Ok(())
        }
        Commands::Config { action } => config::handle_config(action),
    }
}

/// Loads config, falling back to built-in defaults when it cannot be read.
fn load_config() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("using default config: {e:#}");
            Config::default()
        }
    }
}

/// Builds the rule book and client for a session and picks its mode.
///
/// Unusable configured rules are reported and skipped in favor of the
/// built-in table.
fn build_dispatcher(config: &Config, args: &ResponderArgs) -> Dispatcher {
    let rules = RuleBook::with_extra(&config.rules).unwrap_or_else(|e| {
        tracing::warn!("ignoring configured rules: {e}");
        RuleBook::builtin()
    });
    if args.local {
        return Dispatcher::local(rules);
    }

    let settings = RemoteSettings::from_config(config, args.model.as_deref());
    let availability = provider::connect(&settings);
    Dispatcher::initialize(availability, rules, GenerationSettings::from_config(config))
}

#[cfg(test)]
mod tests;
