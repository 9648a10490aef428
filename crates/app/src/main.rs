use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::QuizService;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};
use vitium_core::model::QuizSettingsDraft;

const QUESTIONS_ENV: &str = "VITIUM_QUESTIONS";
const DELAY_ENV: &str = "VITIUM_CALCULATING_MS";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDelay { raw: String },
    EmptyPath { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDelay { raw } => write!(f, "invalid --delay-ms value: {raw}"),
            ArgsError::EmptyPath { flag } => write!(f, "{flag} requires a non-empty path"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz_service: Arc<QuizService>,
}

impl UiApp for DesktopApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    questions: Option<PathBuf>,
    calculating_delay_ms: Option<u64>,
    help: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <bank.json>] [--delay-ms <ms>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in question bank");
    eprintln!("  --delay-ms 4500");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {QUESTIONS_ENV}, {DELAY_ENV}, RUST_LOG");
}

impl Args {
    /// Flags win over environment values. Unparseable environment values
    /// are skipped with a warning; bad flags are errors.
    fn parse(
        args: impl IntoIterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            questions: env(QUESTIONS_ENV)
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from),
            calculating_delay_ms: env(DELAY_ENV).and_then(|value| match value.trim().parse() {
                Ok(ms) => Some(ms),
                Err(_) => {
                    tracing::warn!(%value, "ignoring unparseable VITIUM_CALCULATING_MS");
                    None
                }
            }),
            help: false,
        };

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(&mut args, "--questions")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::EmptyPath { flag: "--questions" });
                    }
                    parsed.questions = Some(PathBuf::from(value));
                }
                "--delay-ms" => {
                    let value = require_value(&mut args, "--delay-ms")?;
                    let ms = value
                        .trim()
                        .parse()
                        .map_err(|_| ArgsError::InvalidDelay { raw: value.clone() })?;
                    parsed.calculating_delay_ms = Some(ms);
                }
                "--help" | "-h" => parsed.help = true,
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn settings_draft(&self) -> QuizSettingsDraft {
        QuizSettingsDraft {
            calculating_delay_ms: self.calculating_delay_ms,
            ..QuizSettingsDraft::default()
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn build_service(args: &Args) -> Result<QuizService, Box<dyn std::error::Error>> {
    let settings = args.settings_draft().validate()?;
    let service = match &args.questions {
        Some(path) => QuizService::from_path(path, settings)?,
        None => QuizService::embedded(settings)?,
    };
    Ok(service)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    if parsed.help {
        print_usage();
        return Ok(());
    }

    let service = build_service(&parsed)?;
    tracing::info!(
        questions = service.bank().len(),
        delay_ms = service.settings().calculating_delay_ms(),
        "starting vitium"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_service: Arc::new(service),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Vitium")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run() {
        // Binary glue: print once and exit.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn no_arguments_uses_defaults() {
        let parsed = Args::parse(Vec::new(), no_env).unwrap();
        assert_eq!(parsed, Args::default());
        assert_eq!(parsed.settings_draft(), QuizSettingsDraft::default());
    }

    #[test]
    fn flags_override_environment() {
        let env = |key: &str| match key {
            QUESTIONS_ENV => Some("/from/env.json".to_string()),
            DELAY_ENV => Some("100".to_string()),
            _ => None,
        };
        let parsed =
            Args::parse(args(&["--questions", "bank.json", "--delay-ms", "250"]), env).unwrap();

        assert_eq!(parsed.questions, Some(PathBuf::from("bank.json")));
        assert_eq!(parsed.calculating_delay_ms, Some(250));
    }

    #[test]
    fn environment_fills_missing_flags() {
        let env = |key: &str| match key {
            QUESTIONS_ENV => Some("/from/env.json".to_string()),
            DELAY_ENV => Some("soon".to_string()),
            _ => None,
        };
        let parsed = Args::parse(Vec::new(), env).unwrap();

        assert_eq!(parsed.questions, Some(PathBuf::from("/from/env.json")));
        assert_eq!(parsed.calculating_delay_ms, None);
    }

    #[test]
    fn bad_flags_are_rejected() {
        assert_eq!(
            Args::parse(args(&["--delay-ms"]), no_env),
            Err(ArgsError::MissingValue { flag: "--delay-ms" })
        );
        assert_eq!(
            Args::parse(args(&["--delay-ms", "fast"]), no_env),
            Err(ArgsError::InvalidDelay {
                raw: "fast".to_string()
            })
        );
        assert_eq!(
            Args::parse(args(&["--questions", " "]), no_env),
            Err(ArgsError::EmptyPath { flag: "--questions" })
        );
        assert_eq!(
            Args::parse(args(&["--deck"]), no_env),
            Err(ArgsError::UnknownArg("--deck".to_string()))
        );
    }

    #[test]
    fn help_flag_is_recorded() {
        assert!(Args::parse(args(&["-h"]), no_env).unwrap().help);
    }

    #[test]
    fn out_of_range_delay_fails_validation() {
        let parsed = Args::parse(args(&["--delay-ms", "600000"]), no_env).unwrap();
        assert!(build_service(&parsed).is_err());
    }
}
