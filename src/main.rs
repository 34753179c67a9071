use anyhow::Context;
use clap::Parser;
use notekeeper::application::InMemoryNoteStore;
use notekeeper::cli::{Cli, Session};
use notekeeper::error::NotekeeperError;
use notekeeper::infrastructure::{init_logging, Config};
use std::io::{self, IsTerminal};

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            match e.downcast_ref::<NotekeeperError>() {
                Some(err) => {
                    eprintln!("Error: {}", err.display_with_suggestions());
                    std::process::exit(err.exit_code());
                }
                None => {
                    eprintln!("Error: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let config = Config::load(cli.config.as_deref())?;

    let level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    let _logger = init_logging(level)?;

    let use_color = config.color && !cli.no_color && io::stdout().is_terminal();
    colored::control::set_override(use_color);

    let store = InMemoryNoteStore::new().with_layout(config.table_layout());
    let mut session = Session::new(store, config.prompt.clone());
    let mut stdout = io::stdout().lock();

    if !cli.commands.is_empty() {
        let last = session
            .run_batch(&cli.commands, &mut stdout)
            .context("failed to write command output")?;
        return Ok(if last.is_ok() { 0 } else { 1 });
    }

    session
        .run(io::stdin().lock(), &mut stdout)
        .context("interactive session failed")?;
    Ok(0)
}
