mod commands;
mod http;
mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Environment variable naming the write-capable API endpoint.
const API_URL_ENV: &str = "CLIENT_MESSAGES_API_URL";

#[derive(Parser)]
#[command(
    name = "tracker",
    version,
    about = "Track, filter, and edit client inquiry messages"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Path to a spreadsheet export (CSV)
    #[arg(long, value_name = "FILE", conflicts_with_all = ["input", "api_url"])]
    sheet: Option<PathBuf>,

    /// Path to a saved API payload (JSON)
    #[arg(long, value_name = "FILE", conflicts_with = "api_url")]
    input: Option<PathBuf>,

    /// API endpoint to fetch from (defaults to $CLIENT_MESSAGES_API_URL)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List messages, optionally filtered
    List {
        #[command(flatten)]
        input: InputArgs,

        /// Substring search across name, message, phone, email, and notes
        #[arg(short, long)]
        search: Option<String>,

        /// Status filter: new, in-progress, handled (default: all)
        #[arg(long)]
        status: Option<String>,

        /// Category filter: wedding, tour, event, vendor, other (default: all)
        #[arg(long)]
        category: Option<String>,

        /// Source filter (exact match)
        #[arg(long)]
        source: Option<String>,

        /// Stat quick filter: total, new, inProgress, handled, wedding
        #[arg(long)]
        stat: Option<String>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Print summary tile counts for the full (unfiltered) set
    Stats {
        #[command(flatten)]
        input: InputArgs,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Create a new message at the API endpoint
    Create {
        /// API endpoint (defaults to $CLIENT_MESSAGES_API_URL)
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        message: String,
        #[arg(long, default_value = "")]
        date_time: String,
        /// wedding, tour, event, vendor, or other
        #[arg(long, default_value = "other")]
        category: String,
        #[arg(long, default_value = "")]
        source: String,
        #[arg(long, default_value = "")]
        assigned_to: String,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Replace the internal notes on a message
    Note {
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Message id
        id: String,

        /// New notes text
        notes: String,
    },
    /// Set the status of a message (new, in-progress, handled)
    Mark {
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Message id
        id: String,

        /// Canonical status value
        status: String,
    },
    /// Delete a message
    Delete {
        #[arg(long, value_name = "URL")]
        api_url: Option<String>,

        /// Message id
        id: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List {
            input,
            search,
            status,
            category,
            source,
            stat,
            output,
        } => commands::list::run(input, search, status, category, source, stat, &output),
        Commands::Stats { input, output } => commands::stats::run(input, &output),
        Commands::Create {
            api_url,
            name,
            email,
            phone,
            message,
            date_time,
            category,
            source,
            assigned_to,
            notes,
        } => commands::write::create(
            api_url,
            name,
            email,
            phone,
            message,
            date_time,
            category,
            source,
            assigned_to,
            notes,
        ),
        Commands::Note { api_url, id, notes } => commands::write::note(api_url, &id, &notes),
        Commands::Mark {
            api_url,
            id,
            status,
        } => commands::write::mark(api_url, &id, &status),
        Commands::Delete { api_url, id } => commands::write::delete(api_url, &id),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
