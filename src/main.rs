//! PokeFetch - explore the Pokemon world from your terminal
//!
//! A line-based shell that browses location areas and catches pokemon using
//! the PokeAPI, caching responses in memory.

use std::io;
use std::process;

use clap::Parser;
use crossterm::tty::IsTty;

use pokefetch::cli::{Cli, StartupConfig};
use pokefetch::client::Client;
use pokefetch::logging;
use pokefetch::repl::{self, Session};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    };

    logging::init(&config.log_level);

    let client = Client::new(config.client)?;
    let mut session = Session::new(client);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let styled = stdout.is_tty();
    repl::run(&mut session, stdin.lock(), &mut stdout, styled).await?;

    session.client().cache().shutdown();
    Ok(())
}
