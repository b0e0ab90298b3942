/*!
# Journal Life - Command-Line Driver

Runs the journal intelligence core against a JSON document of entries,
capsules and (optionally) templates, and prints the result as JSON.

## Usage

```text
journal-life [OPTIONS] <COMMAND>

Commands:
  analyze        Analyze the content of an entry
  recommend      Recommend a template for a writing context
  assist         Analyze an entry and recommend a template for it
  apply          Append a template's prompts to an entry
  capsule        Seal an entry in a time capsule
  due            List capsules that can be opened today
  upcoming       List capsules opening soon
  anniversaries  List entries written on this day in earlier years
  templates      List the template catalog

Options:
  -i, --input <INPUT>            JSON document ("-" for stdin)
  -t, --today <TODAY>            Date to treat as today (YYYY-MM-DD or YYYYMMDD, UTC)
      --log-format <LOG_FORMAT>  Log output format: text or json
  -v, --verbose                  Print verbose output
```

## Configuration

- `JOURNAL_LIFE_INPUT`: default input document
- `JOURNAL_LIFE_LOOKAHEAD_DAYS`: default window for `upcoming` (defaults to 7)
- `JOURNAL_LIFE_LOG_FORMAT` / `JOURNAL_LIFE_LOG_LEVEL`: logging defaults
- `RUST_LOG`: overrides the log filter entirely

Without `--today`, "today" is the current UTC date, the same calendar that
entry creation dates are compared in.

Logs go to stderr; stdout carries only JSON results.
*/

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use journal_life::capsule::{self, CapsuleStatus, TimeCapsule};
use journal_life::cli::{CliArgs, Command};
use journal_life::config::Config;
use journal_life::constants::{LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME};
use journal_life::errors::{AppError, AppResult};
use journal_life::journal_core::JournalEntry;
use journal_life::journal_io::{self, InputDocument};
use journal_life::templates::TemplateManager;
use journal_life::JournalLifeCore;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, info_span};
use tracing_subscriber::EnvFilter;

/// A capsule together with its status on the requested date.
#[derive(Serialize)]
struct CapsuleReport<'a> {
    #[serde(flatten)]
    capsule: &'a TimeCapsule,
    status: CapsuleStatus,
    days_until_open: i64,
}

/// An anniversary entry labelled with how long ago it was written.
#[derive(Serialize)]
struct AnniversaryReport<'a> {
    years_ago: i32,
    entry: &'a JournalEntry,
}

fn capsule_reports(capsules: &[TimeCapsule], today: NaiveDate) -> Vec<CapsuleReport<'_>> {
    capsules
        .iter()
        .map(|capsule| CapsuleReport {
            capsule,
            status: capsule.status_on(today),
            days_until_open: capsule.days_until_open(today),
        })
        .collect()
}

fn init_tracing(log_format: &str, default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if log_format == LOG_FORMAT_JSON {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
}

fn resolve_input(args: &CliArgs, config: &Config) -> AppResult<Option<PathBuf>> {
    match &args.input {
        Some(raw) => Config::expand_path(raw).map(Some),
        None => Ok(config.input_path.clone()),
    }
}

fn require_document(document: Option<InputDocument>) -> AppResult<InputDocument> {
    document.ok_or_else(|| {
        AppError::Config(
            "No input document: pass --input or set JOURNAL_LIFE_INPUT".to_string(),
        )
    })
}

fn run(
    args: CliArgs,
    config: Config,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> AppResult<()> {
    let document = match resolve_input(&args, &config)? {
        Some(path) => {
            debug!("Reading input document from {:?}", path);
            Some(journal_io::load_input_document(&path)?)
        }
        None => None,
    };

    let mut core = JournalLifeCore::from_config(&config);
    if let Some(doc) = &document {
        if !doc.templates.is_empty() {
            info!("Using {} templates from input document", doc.templates.len());
            core = JournalLifeCore::new(
                TemplateManager::new(doc.templates.clone()),
                config.lookahead_days,
            );
        }
    }

    let stdout = io::stdout();
    let out = stdout.lock();

    match args.command {
        Command::Analyze { entry } => {
            let doc = require_document(document)?;
            let analysis = core.analyze_journal_content(doc.entry(entry)?);
            journal_io::write_json(out, &analysis)
        }
        Command::Recommend { context, content } => {
            let template = core.recommend_template(context, &content)?;
            journal_io::write_json(out, template)
        }
        Command::Assist { entry, context } => {
            let doc = require_document(document)?;
            let insights = core.intelligent_journal_assistant(doc.entry(entry)?, context)?;
            journal_io::write_json(out, &insights)
        }
        Command::Apply {
            entry,
            context,
            template,
        } => {
            let doc = require_document(document)?;
            let entry = doc.entry(entry)?;
            let applied = match (template, context) {
                (Some(id), _) => core.apply_named_template(entry, &id)?,
                (None, Some(context)) => core.apply_template_to_entry(entry, context)?,
                (None, None) => {
                    return Err(AppError::Config(
                        "apply needs --context or --template".to_string(),
                    ))
                }
            };
            journal_io::write_json(out, &applied)
        }
        Command::Capsule { entry, target } => {
            let doc = require_document(document)?;
            let capsule = core.create_time_capsule(doc.entry(entry)?, target, now)?;
            journal_io::write_json(out, &capsule)
        }
        Command::Due => {
            let doc = require_document(document)?;
            let due = core.check_due_time_capsules(&doc.capsules, today);
            journal_io::write_json(out, &capsule_reports(&due, today))
        }
        Command::Upcoming { days_ahead } => {
            let doc = require_document(document)?;
            let upcoming = core.get_upcoming_time_capsules(&doc.capsules, today, days_ahead);
            journal_io::write_json(out, &capsule_reports(&upcoming, today))
        }
        Command::Anniversaries => {
            let doc = require_document(document)?;
            let entries = core.get_anniversary_entries(&doc.entries, today);
            let reports: Vec<AnniversaryReport> = entries
                .iter()
                .map(|entry| AnniversaryReport {
                    years_ago: capsule::years_since(entry, today),
                    entry,
                })
                .collect();
            journal_io::write_json(out, &reports)
        }
        Command::Templates { id: None } => {
            journal_io::write_json(out, core.template_manager().templates())
        }
        Command::Templates { id: Some(id) } => {
            journal_io::write_json(out, core.template_manager().get(&id)?)
        }
    }
}

/// The main entry point for the journal-life binary.
///
/// Reads the UTC clock once, loads configuration, installs logging, and runs the
/// requested command. Errors are reported once here and turned into a
/// non-zero exit code.
fn main() -> ExitCode {
    let current_datetime = Utc::now();
    let args = CliArgs::parse();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(format) = &args.log_format {
        config.log_format = format.trim().to_lowercase();
    }
    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    let level = if args.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    init_tracing(&config.log_format, level);

    let correlation_id = uuid::Uuid::new_v4();
    let span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = span.enter();

    // Entry dates are UTC, so "today" is too. --today pins both the date and
    // the capsule creation time.
    let (today, now) = match args.today {
        Some(date) => (date, date.and_time(NaiveTime::MIN).and_utc()),
        None => (current_datetime.date_naive(), current_datetime),
    };
    debug!("Running {:?} as of {}", args.command, today);
    debug!("Configuration: {:?}", config);

    match run(args, config, today, now) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Command failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
