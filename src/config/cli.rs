use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "call-lookup")]
#[command(about = "Look up logged calls from the spreadsheet call log")]
pub struct CliArgs {
    /// TOML config file; the environment is used when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find a call record by attendant name and date.
    Lookup {
        #[arg(long)]
        name: String,

        /// Call date, `YYYY-MM-DD` or `DD/MM/YYYY`.
        #[arg(long)]
        date: String,
    },

    /// Check an email against the allow-list.
    CheckAuth {
        #[arg(long)]
        email: String,
    },

    /// Fetch a recording through the authenticated audio proxy.
    FetchAudio {
        #[arg(long)]
        url: String,

        /// Where to write the audio bytes.
        #[arg(long)]
        output: PathBuf,
    },
}
