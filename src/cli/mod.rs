pub mod commands;
pub mod context;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::core::models::swap_request::RequestStatus;

/// Record shift-swap requests and approve or deny them.
#[derive(Parser, Debug)]
#[command(
    name = "shiftswap",
    version,
    about,
    long_about = None,
    after_help = "Examples:\n  \
        shiftswap request --from 2026-01-12T07:00 --to 2026-01-12T15:00 --with \"Jane Doe\" --reason \"Kid pickup\"\n  \
        shiftswap list\n  \
        shiftswap approve --id 3f9a1c0b7e42"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the request file and optional config.toml
    #[arg(long, global = true, env = "SHIFTSWAP_DIR", default_value = ".shiftswap")]
    pub data_dir: PathBuf,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only show errors and requested data
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a new shift-swap request
    Request {
        /// Start of the shift, e.g. 2026-01-12T07:00
        #[arg(long)]
        from: String,
        /// End of the shift, e.g. 2026-01-12T15:00
        #[arg(long)]
        to: String,
        /// Colleague taking the shift
        #[arg(long = "with")]
        with: String,
        /// Why the swap is needed
        #[arg(long)]
        reason: String,
    },

    /// List requests, newest first
    List {
        /// Only show requests in this state
        #[arg(long, value_enum)]
        status: Option<StatusFilter>,
    },

    /// Approve a request
    Approve {
        /// Id of the request
        #[arg(long)]
        id: String,
    },

    /// Deny a request
    Deny {
        /// Id of the request
        #[arg(long)]
        id: String,
    },
}

/// `--status` values accepted by `list`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusFilter {
    Pending,
    Approved,
    Denied,
}

impl StatusFilter {
    pub fn matches(self, status: RequestStatus) -> bool {
        let wanted = match self {
            StatusFilter::Pending => RequestStatus::Pending,
            StatusFilter::Approved => RequestStatus::Approved,
            StatusFilter::Denied => RequestStatus::Denied,
        };
        wanted == status
    }
}
