use crate::constants::{APP_DESCRIPTION, APP_NAME};
use crate::journal_core::{parse_date, WritingContext};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Content analysis, time capsules and template recommendations for journal entries
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// JSON document with entries, capsules and optional templates ("-" for stdin)
    #[clap(short = 'i', long, global = true)]
    pub input: Option<String>,

    /// Date to treat as today (format: YYYY-MM-DD or YYYYMMDD, UTC)
    #[clap(short = 't', long, global = true, value_parser = parse_cli_date)]
    pub today: Option<NaiveDate>,

    /// Log output format: text or json
    #[clap(long, global = true)]
    pub log_format: Option<String>,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Analyze the content of an entry
    Analyze {
        /// Id of the entry to analyze
        #[clap(short, long)]
        entry: Uuid,
    },

    /// Recommend a template for a writing context
    Recommend {
        /// Writing context (morning, evening, travel, gratitude, reflection, custom)
        #[clap(short, long)]
        context: WritingContext,

        /// Text to match against template keyword hints
        #[clap(long, default_value = "")]
        content: String,
    },

    /// Analyze an entry and recommend a template for it
    Assist {
        #[clap(short, long)]
        entry: Uuid,

        #[clap(short, long)]
        context: WritingContext,
    },

    /// Append a template's prompts to an entry
    Apply {
        #[clap(short, long)]
        entry: Uuid,

        /// Writing context used to pick the recommended template
        #[clap(short, long, required_unless_present = "template")]
        context: Option<WritingContext>,

        /// Apply this catalog template instead of the recommended one
        #[clap(long, conflicts_with = "context")]
        template: Option<String>,
    },

    /// Seal an entry in a time capsule
    Capsule {
        #[clap(short, long)]
        entry: Uuid,

        /// Date the capsule opens (format: YYYY-MM-DD or YYYYMMDD)
        #[clap(long, value_parser = parse_cli_date)]
        target: NaiveDate,
    },

    /// List capsules that can be opened today
    Due,

    /// List capsules opening soon
    Upcoming {
        /// Window in days; defaults to the configured look-ahead
        #[clap(short, long)]
        days_ahead: Option<i64>,
    },

    /// List entries written on this day in earlier years
    Anniversaries,

    /// List the template catalog
    Templates {
        /// Show only the template with this id
        #[clap(long)]
        id: Option<String>,
    },
}

fn parse_cli_date(date_str: &str) -> Result<NaiveDate, String> {
    parse_date(date_str).map_err(|e| format!("Invalid date format: {}", e))
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}
