pub mod batch;
pub mod check;
pub mod enforce;
pub mod validate;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use ipward_common::config::{
    DEFAULT_FORWARDED_FOR_HEADER, DEFAULT_RANGES_ATTRIBUTE, DEFAULT_REAL_IP_HEADER,
};
use ipward_core::policy::PolicyEvent;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ipward")]
#[command(about = "Checks client addresses against CIDR allow-lists.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Less output (-q hides decoration, -qq also hides warnings)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Client attribute holding the allow-list
    #[arg(long, global = true, default_value = DEFAULT_RANGES_ATTRIBUTE)]
    pub attribute: String,

    #[arg(long, global = true, default_value = DEFAULT_FORWARDED_FOR_HEADER)]
    pub forwarded_for_header: String,

    #[arg(long, global = true, default_value = DEFAULT_REAL_IP_HEADER)]
    pub real_ip_header: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check one address against a comma-separated list of ranges
    #[command(alias = "c")]
    Check { address: String, ranges: String },
    /// Tell whether a value is a valid address or CIDR range
    #[command(alias = "v")]
    Validate { value: String },
    /// Check one address per line (FILE or stdin) against a list of ranges
    #[command(alias = "b")]
    Batch {
        #[arg(short, long)]
        ranges: String,
        file: Option<PathBuf>,
    },
    /// Run the token endpoint policy against a simulated request
    #[command(alias = "e")]
    Enforce {
        #[arg(long, value_enum, default_value_t = EventKind::Token)]
        event: EventKind,
        #[arg(long, default_value = "cli-client")]
        client_id: String,
        /// Value of the allow-list attribute; omit to simulate a client without one
        #[arg(long)]
        allowed_ranges: Option<String>,
        #[arg(long)]
        forwarded_for: Option<String>,
        #[arg(long)]
        real_ip: Option<String>,
        #[arg(long)]
        remote_addr: Option<String>,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum EventKind {
    Token,
    ServiceAccount,
    Authorization,
}

impl From<EventKind> for PolicyEvent {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Token => PolicyEvent::TokenRequest,
            EventKind::ServiceAccount => PolicyEvent::ServiceAccountTokenRequest,
            EventKind::Authorization => PolicyEvent::Other(String::from("AuthorizationRequest")),
        }
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Splits an allow-list the way it is stored on a client: on commas, untrimmed.
pub fn split_ranges(raw: &str) -> Vec<&str> {
    raw.split(',').collect()
}
