//! Activity Board CLI
//!
//! Terminal front-end for the activities API. Drives the same controller as
//! the browser board, printing to stdout instead of the DOM:
//! - List and search activities
//! - Show participants
//! - Sign up or unregister
//! - Generate a config file
//!
//! Logs go to stderr; `RUST_LOG` overrides the configured level.

use activity_board::{
    generate_default_config, BoardController, Config, ConfigError, HttpActivitiesClient,
    LoggingConfig,
    SignupForm, TerminalSurface, TokioScheduler,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::rc::Rc;
use tokio::task::LocalSet;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "activity-board")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse and sign up for extracurricular activities")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL (overrides the config file)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: standard locations, then environment)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List activities
    List {
        /// Only activities whose name or description matches
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Show who signed up for an activity
    Participants {
        /// Activity name
        activity: String,
    },

    /// Sign up for an activity
    Signup {
        /// Activity name
        activity: String,
        /// School email address
        email: String,
    },

    /// Remove a signup
    Unregister {
        /// Activity name
        activity: String,
        /// School email address
        email: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

type CliBoard = BoardController<HttpActivitiesClient, TerminalSurface<std::io::Stdout>, TokioScheduler>;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)?;
                println!("Wrote default config to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let (mut config, source) = load_config(cli.config.clone(), &Config::default_paths())?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_logging(&config.logging);
    match &source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::debug!("Using default config with environment overrides"),
    }
    tracing::debug!("Using API at {}", config.api.base_url);

    let api = HttpActivitiesClient::new(&config.api)?;
    let surface = TerminalSurface::new(std::io::stdout());
    let board: Rc<CliBoard> = Rc::new(BoardController::new(api, surface, TokioScheduler, config.ui));

    let ok = LocalSet::new().run_until(run(cli.command, board)).await;
    if !ok {
        std::process::exit(1);
    }

    Ok(())
}

/// Explicit path, else the first standard location that exists, else
/// defaults. A file that exists but cannot be loaded is an error.
fn load_config(
    explicit: Option<PathBuf>,
    defaults: &[PathBuf],
) -> Result<(Config, Option<PathBuf>), ConfigError> {
    match explicit.or_else(|| Config::find_file(defaults)) {
        Some(path) => Ok((Config::load_with_env(&path)?, Some(path))),
        None => Ok((Config::from_env(), None)),
    }
}

/// Returns false when the command should exit non-zero
async fn run(command: Commands, board: Rc<CliBoard>) -> bool {
    match command {
        Commands::List { search } => {
            board.set_search(&search);
            board.load_activities().await
        }
        Commands::Participants { activity } => board.view_participants(&activity).await,
        Commands::Signup { activity, email } => board
            .submit_signup(&SignupForm::new(activity, email))
            .await
            .is_accepted(),
        Commands::Unregister { activity, email } => board
            .unregister(&SignupForm::new(activity, email))
            .await
            .is_accepted(),
        Commands::Config { .. } => true,
    }
}

fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("activity_board={}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_broken_default_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url =").unwrap();

        let result = load_config(None, &[file.path().to_path_buf()]);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_explicit_path_wins() {
        let mut explicit = tempfile::NamedTempFile::new().unwrap();
        writeln!(explicit, "[ui]\nemail_domain = \"example.org\"").unwrap();
        let mut fallback = tempfile::NamedTempFile::new().unwrap();
        writeln!(fallback, "broken [").unwrap();

        let (config, source) = load_config(
            Some(explicit.path().to_path_buf()),
            &[fallback.path().to_path_buf()],
        )
        .unwrap();
        assert_eq!(config.ui.email_domain, "example.org");
        assert_eq!(source.as_deref(), Some(explicit.path()));
    }

    #[test]
    fn test_no_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, source) = load_config(None, &[dir.path().join("absent.toml")]).unwrap();
        assert!(source.is_none());
        assert_eq!(config.ui.search_debounce_ms, 300);
    }
}
