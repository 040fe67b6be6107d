mod config;
mod shell;
mod ui;
mod users;

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::config::{Overrides, UsersConfig};
use crate::shell::{ConsoleNotifier, LinePrompter, Shell, TerminalPrompter};
use crate::ui::prelude::*;
use crate::users::UserStore;

/// Manage an in-memory list of users from an interactive menu
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Show debug events (store operations, generated ids)
    #[arg(short, long)]
    debug: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Read settings from this file instead of the default location
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    ui::set_debug_mode(cli.debug);

    if let Err(e) = run(&cli) {
        emit(Level::Error, "app.error", &format!("{:#}", e), None);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = UsersConfig::load(cli.config.as_deref())?.apply(&Overrides {
        output: cli.output,
        no_color: cli.no_color,
    });
    ui::init(config.output, config.color);
    emit(
        Level::Debug,
        "app.config",
        &format!("Using configuration {:?}", config),
        None,
    );

    let store = UserStore::new();
    let notifier = ConsoleNotifier;
    let options = config.shell_options();

    if std::io::stdin().is_terminal() {
        Shell::new(store, TerminalPrompter, notifier, options).run()
    } else {
        Shell::new(store, LinePrompter::stdio(), notifier, options).run()
    }
}
