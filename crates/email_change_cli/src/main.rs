//! CLI entry point for the email change use-case.
//!
//! # Responsibility
//! - Wire the fixture-backed store, stdout mailer and service together.
//! - Run one email change and print the resulting records as JSON lines.
//!
//! Usage: `email_change_cli [<user_id> <new_email> | --version]`. Without
//! arguments the demo change `3 -> michael@loglass.co.jp` is applied.

use email_change_core::{
    core_version, default_log_level, init_logging, EmailChangeError, EmailChangeService,
    InMemoryRecordStore, Mailer, Notifier, RecordStore,
};
use log::info;
use std::fmt::{Display, Formatter};
use std::io::{self, Write};
use std::process::ExitCode;

const DEMO_USER_ID: &str = "3";
const DEMO_NEW_EMAIL: &str = "michael@loglass.co.jp";
const LOG_DIR_ENV: &str = "EMAIL_CHANGE_LOG_DIR";
const LOG_LEVEL_ENV: &str = "EMAIL_CHANGE_LOG_LEVEL";
const USAGE: &str = "usage: email_change_cli [<user_id> <new_email> | --version]";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command<'a> {
    Version,
    Change { user_id: &'a str, new_email: &'a str },
}

/// CLI failures and their process exit codes.
#[derive(Debug)]
enum CliError {
    /// Unsupported argument shape; exit code 2.
    Usage,
    /// Domain rejection from the email change; exit code 1.
    Change(EmailChangeError),
    /// Output could not be rendered or written; exit code 1.
    Render(String),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Usage => 2,
            Self::Change(_) | Self::Render(_) => 1,
        }
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage => f.write_str(USAGE),
            Self::Change(err) => write!(f, "email change failed: {err}"),
            Self::Render(details) => write!(f, "failed to render records: {details}"),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Render(value.to_string())
    }
}

impl From<io::Error> for CliError {
    fn from(value: io::Error) -> Self {
        Self::Render(value.to_string())
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = parse_args(&args).and_then(|command| match command {
        Command::Version => {
            writeln!(out, "email_change_cli {}", core_version())?;
            Ok(())
        }
        Command::Change { user_id, new_email } => {
            if let Some((level, log_dir)) = log_settings(
                std::env::var(LOG_LEVEL_ENV).ok(),
                std::env::var(LOG_DIR_ENV).ok(),
            ) {
                if let Err(err) = init_logging(&level, &log_dir) {
                    eprintln!("logging disabled: {err}");
                }
            }

            let store = InMemoryRecordStore::with_fixture();
            run(&store, Mailer::stdout(), user_id, new_email, &mut out)
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn parse_args(args: &[String]) -> Result<Command<'_>, CliError> {
    match args {
        [] => Ok(Command::Change {
            user_id: DEMO_USER_ID,
            new_email: DEMO_NEW_EMAIL,
        }),
        [flag] if flag == "--version" => Ok(Command::Version),
        [user_id, new_email] => Ok(Command::Change {
            user_id: user_id.as_str(),
            new_email: new_email.as_str(),
        }),
        _ => Err(CliError::Usage),
    }
}

/// Returns `(level, log_dir)` when file logging should be enabled.
fn log_settings(level: Option<String>, log_dir: Option<String>) -> Option<(String, String)> {
    let log_dir = log_dir.filter(|dir| !dir.trim().is_empty())?;
    let level = level.unwrap_or_else(|| default_log_level().to_string());
    Some((level, log_dir))
}

/// Applies one change and writes the changed user and the company to `out`.
///
/// Nothing is written to `out` when the change is rejected.
fn run<N: Notifier>(
    store: &InMemoryRecordStore,
    notifier: N,
    user_id: &str,
    new_email: &str,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let service = EmailChangeService::new(store, notifier);
    service
        .change_email(user_id, new_email)
        .map_err(CliError::Change)?;

    info!(
        "event=cli_run module=cli status=ok version={} user_id={} employees_audited={}",
        core_version(),
        user_id,
        store.employee_count()
    );

    if let Some(user) = store.get_user_by_id(user_id) {
        writeln!(out, "{}", serde_json::to_string(&user)?)?;
    }
    writeln!(out, "{}", serde_json::to_string(&store.get_company())?)?;
    Ok(())
}
