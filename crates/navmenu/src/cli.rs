//! Command-line interface.

use anyhow::Result;
use clap::{Parser, Subcommand};

use navmenu::MenuProvider;
use navmenu::dump::dump_menu;

/// Navigation menu server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the menu over HTTP (default).
    Serve,

    /// Print the resolved menu as JSON.
    Dump {
        /// Language to resolve labels in (default: DEFAULT_LANGUAGE).
        #[arg(long)]
        lang: Option<String>,

        /// Emit compact JSON instead of pretty-printed.
        #[arg(long)]
        compact: bool,
    },
}

/// Write the menu for `lang` to stdout.
pub fn cmd_dump(provider: &MenuProvider, lang: Option<&str>, compact: bool) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    dump_menu(provider, lang, compact, &mut stdout)?;
    Ok(())
}
