use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "sheet-standings backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Fetch a leaderboard source once and print the standings as JSON
    Fetch {
        /// Data source key (e.g. elo, dcpr)
        #[arg(short, long, default_value = "elo")]
        source: String,
    },
    /// Fetch a leaderboard source once and print summary statistics
    Summary {
        /// Data source key (e.g. elo, dcpr)
        #[arg(short, long, default_value = "elo")]
        source: String,
        /// Histogram bucket count (defaults to the configured value)
        #[arg(short, long)]
        buckets: Option<usize>,
    },
}
