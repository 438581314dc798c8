mod cli_args;
mod config;
mod error;
mod git;
mod input;
mod llm;
mod logging;
mod pipeline;
mod setup;

use anyhow::{Result, bail};
use clap::Parser;
use colored::Colorize;

use cli_args::{Cli, Command};
use config::{Credential, FileStore};
use error::CommitError;
use git::GitCli;
use pipeline::Outcome;

/// Save the API key, prompting for it when not given on the command line.
fn run_configure(api_key: Option<String>) -> Result<()> {
    // An empty --api-key prompts as if none was given.
    let api_key = match api_key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty()) {
        Some(key) => key,
        None => input::prompt_secret("Please enter your Anthropic API key")?,
    };

    if api_key.is_empty() {
        bail!("API key must not be empty");
    }

    let store = FileStore::default_location()?;
    config::persist_api_key(&store, &Credential::new(api_key))?;
    log::info!("Configuration written to {:?}", store.path());

    println!("Configuration saved successfully!");
    Ok(())
}

/// Generate a message for the staged diff, then preview or commit it.
fn run_commit(preview: bool, model: &str, api_base_url: &str) -> Result<()> {
    // Without a home directory there is no config file, but the env var still counts.
    let store = FileStore::default_location()
        .inspect_err(|e| log::debug!("No config store: {e}"))
        .ok();
    let credential = config::resolve_api_key(
        config::api_key_from_env(),
        store.as_ref().map(|s| s as &dyn config::ConfigStore),
    )
    .ok_or(CommitError::CredentialMissing)?;

    let llm = setup::build_llm_client(model, api_base_url)?;
    let outcome = pipeline::run_commit(&GitCli, llm.as_ref(), &credential, preview)?;

    let message = outcome.message();
    match &outcome {
        Outcome::Previewed(_) => {
            println!();
            println!("Generated commit message:");
            println!("{}", message.green());
        }
        Outcome::Committed(_) => {
            println!();
            println!("{}", "Successfully committed with message:".green());
            println!("{message}");
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match cli.command {
        Command::Configure { api_key } => run_configure(api_key),
        Command::Commit {
            preview,
            model,
            api_base_url,
        } => run_commit(preview, &model, &api_base_url),
    }
}
