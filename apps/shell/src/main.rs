#![allow(clippy::print_stdout)]

mod args;
mod config;

use crate::args::{Cli, PopoverCommands};
use crate::config::load_config;
use anyhow::Result;
use apis_logger::{LevelFilter, Logger};
use apis_popover::{PopoverConfig, PopoverForm, Popovers, TextBundle};
use clap::Parser;
use tracing::debug;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).level(level).init()?;

    let config: PopoverConfig = load_config(cli.config.as_deref())?;
    let popovers = apis_popover::init(config);

    run(&popovers, cli.command)
}

fn run(popovers: &Popovers, command: PopoverCommands) -> Result<()> {
    debug!(?command, "Running popover command");

    match command {
        PopoverCommands::Title { key } => println!("{}", popovers.title(&key)?),
        PopoverCommands::Content { key } => println!("{}", popovers.content(&key)?),
        PopoverCommands::Show { key } => {
            let text = popovers.help_text(&key)?;
            println!("{}", text.title);
            println!("{}", text.description);
        },
        PopoverCommands::Keys { form } => print_keys(popovers.bundle(), form),
        PopoverCommands::Export { pretty } => {
            let bundle = popovers.bundle();
            let json = if pretty { bundle.to_json_pretty()? } else { bundle.to_json()? };
            println!("{json}");
        },
    }

    Ok(())
}

fn print_keys(bundle: &TextBundle, form: Option<PopoverForm>) {
    let keys = bundle.iter().map(|(key, _)| key).filter(|key| form.is_none_or(|f| key.form() == f));
    for key in keys {
        println!("{key}");
    }
}
