use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    DEFAULT_BACKEND_URL, GatewayConfig, HttpTutorBackend, PreferencesService, TutorBackend,
};
use storage::repository::Storage;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tutor_core::model::Preferences;
use ui::{App, UiApp, build_app_context};

const BACKEND_URL_ENV: &str = "DSA_TUTOR_BACKEND_URL";
const DB_URL_ENV: &str = "DSA_TUTOR_DB_URL";
const DEFAULT_DB_URL: &str = "sqlite://dsa-tutor.sqlite3";
const MEMORY_DB_URL: &str = "sqlite::memory:";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidDbUrl { raw: String },
    InvalidBackendUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown subcommand: {cmd}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidBackendUrl { raw } => write!(f, "invalid --backend value: {raw}"),
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
    backend: Arc<dyn TutorBackend>,
    preferences: Arc<PreferencesService>,
    initial_preferences: Preferences,
}

impl UiApp for DesktopApp {
    fn backend(&self) -> Arc<dyn TutorBackend> {
        Arc::clone(&self.backend)
    }

    fn preferences(&self) -> Arc<PreferencesService> {
        Arc::clone(&self.preferences)
    }

    fn initial_preferences(&self) -> Preferences {
        self.initial_preferences.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    backend_url: String,
    db_url: String,
}

#[derive(Debug, PartialEq, Eq)]
enum Invocation {
    Ui(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  dsa-tutor [ui] [--backend <url>] [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --backend {DEFAULT_BACKEND_URL}");
    eprintln!("  --db {DEFAULT_DB_URL}   (use {MEMORY_DB_URL} for a throwaway session)");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {BACKEND_URL_ENV}, {DB_URL_ENV}, RUST_LOG");
}

impl Args {
    fn from_env() -> Self {
        let backend_url = std::env::var(BACKEND_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        let db_url = std::env::var(DB_URL_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| normalize_sqlite_url(DEFAULT_DB_URL.into()), normalize_sqlite_url);
        Self {
            backend_url,
            db_url,
        }
    }

    /// Apply command-line flags on top of `self`. A leading `ui` is optional.
    fn parse(mut self, argv: Vec<String>) -> Result<Invocation, ArgsError> {
        let mut args = argv.into_iter().peekable();
        if let Some(first) = args.peek() {
            if first == "ui" {
                args.next();
            } else if !first.starts_with('-') {
                return Err(ArgsError::UnknownCommand(first.clone()));
            }
        }

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--backend" => {
                    let value = require_value(&mut args, "--backend")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidBackendUrl { raw: value });
                    }
                    self.backend_url = value;
                }
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    self.db_url = normalize_sqlite_url(value);
                }
                "--help" | "-h" => return Ok(Invocation::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Invocation::Ui(self))
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    let trimmed = raw.trim().to_string();
    if trimmed == MEMORY_DB_URL || trimmed.starts_with("sqlite:///") {
        return trimmed;
    }

    let path_str = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == MEMORY_DB_URL {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Open storage, load preferences and wire the gateway.
async fn compose(args: &Args) -> Result<DesktopApp, Box<dyn std::error::Error>> {
    let config = GatewayConfig::new(&args.backend_url)?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&args.db_url)?;
    let storage = Storage::sqlite(&args.db_url).await?;
    let preferences = Arc::new(PreferencesService::new(Arc::clone(&storage.preferences)));
    let initial_preferences = match preferences.load().await {
        Ok(loaded) => loaded,
        Err(err) => {
            tracing::warn!(error = %err, "could not load preferences, using defaults");
            Preferences::default()
        }
    };

    tracing::info!(
        backend = %config.base_url(),
        db = %args.db_url,
        user = %initial_preferences.user_id(),
        "starting DSA Tutor"
    );

    Ok(DesktopApp {
        backend: Arc::new(HttpTutorBackend::new(config)),
        preferences,
        initial_preferences,
    })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match Args::from_env().parse(argv) {
        Ok(Invocation::Ui(args)) => args,
        Ok(Invocation::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            print_usage();
            return Err(err.into());
        }
    };

    // Dioxus desktop drives its own runtime, so setup runs on a separate one
    // that stays alive for the pool's background work.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let app = runtime.block_on(compose(&args))?;
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("DSA Tutor")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    drop(runtime);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> Args {
        Args {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            db_url: MEMORY_DB_URL.to_string(),
        }
    }

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| (*item).to_string()).collect()
    }

    #[test]
    fn no_arguments_launch_ui_with_defaults() {
        assert_eq!(defaults().parse(Vec::new()), Ok(Invocation::Ui(defaults())));
    }

    #[test]
    fn flags_override_defaults_with_or_without_subcommand() {
        let expected = Args {
            backend_url: "http://tutor.local:9000/v1".into(),
            db_url: MEMORY_DB_URL.into(),
        };
        for items in [
            &["ui", "--backend", "http://tutor.local:9000/v1"][..],
            &["--backend", "http://tutor.local:9000/v1"][..],
        ] {
            assert_eq!(
                defaults().parse(argv(items)),
                Ok(Invocation::Ui(expected.clone()))
            );
        }
    }

    #[test]
    fn bad_arguments_are_reported() {
        assert_eq!(
            defaults().parse(argv(&["--db"])),
            Err(ArgsError::MissingValue { flag: "--db" })
        );
        assert_eq!(
            defaults().parse(argv(&["--verbose"])),
            Err(ArgsError::UnknownArg("--verbose".into()))
        );
        assert_eq!(
            defaults().parse(argv(&["seed"])),
            Err(ArgsError::UnknownCommand("seed".into()))
        );
        assert_eq!(
            defaults().parse(argv(&["--backend", " "])),
            Err(ArgsError::InvalidBackendUrl { raw: " ".into() })
        );
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(
            defaults().parse(argv(&["--help", "--bogus"])),
            Ok(Invocation::Help)
        );
    }

    #[test]
    fn sqlite_urls_are_made_absolute() {
        assert_eq!(normalize_sqlite_url(MEMORY_DB_URL.into()), MEMORY_DB_URL);
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/tutor.db".into()),
            "sqlite:///tmp/tutor.db"
        );
        let relative = normalize_sqlite_url("sqlite://tutor.db".into());
        assert!(relative.starts_with("sqlite:///"), "{relative}");
        assert!(relative.ends_with("tutor.db"), "{relative}");
        let bare = normalize_sqlite_url("data/tutor.db".into());
        assert!(bare.ends_with("data/tutor.db"), "{bare}");
    }

    #[test]
    fn padded_sqlite_urls_are_trimmed_first() {
        assert_eq!(normalize_sqlite_url(" sqlite::memory: ".into()), MEMORY_DB_URL);
        assert_eq!(
            normalize_sqlite_url("\tsqlite:///tmp/tutor.db\n".into()),
            "sqlite:///tmp/tutor.db"
        );
    }

    #[test]
    fn memory_database_needs_no_file() {
        assert!(prepare_sqlite_file(MEMORY_DB_URL).is_ok());
        assert!(prepare_sqlite_file("postgres://nope").is_err());
    }
}
