//! # CLI Argument Definitions
//!
//! Subcommands print popover texts for a single form field or export the whole bundle
//! for the front-end build.

use apis_popover::PopoverForm;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "popover")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Help popover texts of the authorization server console")]
pub(crate) struct Cli {
    /// Configuration file (TOML, YAML or JSON); `APIS__*` environment variables override it
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Emit debug logs on stderr
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub(crate) command: PopoverCommands,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub(crate) enum PopoverCommands {
    /// Print the popover title of a form field
    Title {
        /// Form field identifier (e.g. 'client-name')
        key: String,
    },
    /// Print the popover description of a form field
    Content {
        /// Form field identifier (e.g. 'client-name')
        key: String,
    },
    /// Print title and description of a form field on two lines
    Show {
        /// Form field identifier (e.g. 'client-name')
        key: String,
    },
    /// List the form field identifiers that carry a popover
    Keys {
        /// Only list the fields of one form ('resource-server' or 'client')
        #[arg(short, long)]
        form: Option<PopoverForm>,
    },
    /// Export the bundle as a JSON object keyed by form field identifier
    Export {
        /// Indent the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}
