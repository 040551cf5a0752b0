use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "listing-route")]
#[command(about = "Listing search parameter normalization and route access checks")]
pub struct CliConfig {
    /// Path to TOML configuration file; built-in defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the canonical form of a query string
    Normalize { query: String },

    /// Drop property filters from a query string, keeping the location
    Reset { query: String },

    /// Show the page summary and page links for a query string
    Paginate {
        query: String,

        /// Total number of matching listings
        #[arg(long)]
        total: u64,

        /// Page to build a link for; defaults to the next page
        #[arg(long)]
        target: Option<u64>,

        /// Pages shown either side of the current one
        #[arg(long, default_value = "2")]
        window: u64,
    },

    /// Decide whether a request target is allowed, e.g. "/results?state=CA"
    Guard {
        target: String,

        /// Raw Cookie header sent with the request
        #[arg(long)]
        cookie: Option<String>,
    },

    /// Check the signed-in user against the identity endpoint
    Probe {
        /// Roles allowed through; empty accepts any signed-in user
        #[arg(long, value_delimiter = ',')]
        roles: Vec<String>,

        /// Authentication token to forward as the auth cookie
        #[arg(long)]
        token: Option<String>,
    },
}
