use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "skydesk")]
#[command(about = "Manage flight bookings from the admin console", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding default.toml and per-environment overrides
    #[arg(long, default_value = "config", global = true)]
    pub config_dir: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Stats cards plus one page of the bookings table
    List {
        #[arg(long, default_value = "")]
        search: String,

        /// Zero-based page index
        #[arg(long, default_value_t = 0)]
        page: usize,

        #[arg(long)]
        page_size: Option<usize>,
    },

    Stats {
        #[arg(long)]
        json: bool,
    },

    /// Full detail of one booking
    Show { id: String },

    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
