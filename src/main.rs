use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use sportscores::client::EspnClient;
use sportscores::commands;
use sportscores::config;
use sportscores::data_provider::ScoresProvider;
use sportscores::league::League;
use sportscores::tui;

// Default Configuration Constants
/// Default log level when not specified
const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Parser)]
#[command(name = "sportscores")]
#[command(version, about = "Live scores for the NBA, NFL, NHL, MLB and Premier League", long_about = "Live scores for the NBA, NFL, NHL, MLB and Premier League\n\nIf no command is specified, the program starts in interactive mode.")]
struct Cli {
    /// Set log level (trace, debug, info, warn, error)
    #[arg(short = 'L', long, global = true, default_value = DEFAULT_LOG_LEVEL)]
    log_level: String,

    /// Log file path (default: /dev/null for no logging)
    #[arg(short = 'F', long, global = true, default_value = DEFAULT_LOG_FILE)]
    log_file: String,

    /// Serve fixture data instead of calling the API
    #[cfg(feature = "development")]
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display every game of a date, grouped by league
    Scores {
        /// Date in YYYY-MM-DD format (optional, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Only show these leagues (repeatable, defaults to the configured leagues)
        #[arg(short, long = "league", value_enum)]
        leagues: Vec<League>,
    },
    /// Display team and player statistics for a game
    Boxscore {
        league: League,
        /// Event ID from the scoreboard (e.g., 401584793)
        event_id: String,
    },
    /// Print the game page URL
    Url {
        league: League,
        event_id: String,
    },
    /// Display current configuration
    Config,
}

fn create_client(config: &config::Config) -> EspnClient {
    match EspnClient::new(&config.api_base_url) {
        Ok(client) => client,
        Err(e) => {
            let error_msg = format!("Failed to create API client: {}", e);
            tracing::error!("{}", error_msg);
            eprintln!("{}", error_msg);
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "development")]
fn create_provider(cli: &Cli, config: &config::Config) -> Arc<dyn ScoresProvider> {
    if cli.mock {
        return Arc::new(sportscores::dev::mock_client::MockClient::new());
    }
    Arc::new(create_client(config))
}

#[cfg(not(feature = "development"))]
fn create_provider(_cli: &Cli, config: &config::Config) -> Arc<dyn ScoresProvider> {
    Arc::new(create_client(config))
}

fn init_logging(log_level: &str, log_file: &str) {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
    {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open log file {}: {}", log_file, e);
            return;
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Handle the config command - display current configuration
fn handle_config_command() {
    let cfg = config::read();

    let (path_str, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    let leagues: Vec<&str> = cfg.leagues.iter().map(|league| league.as_str()).collect();

    println!("Configuration File: {} (Exists: {})", path_str, if exists { "yes" } else { "no" });
    println!();
    println!("Current Configuration:");
    println!("=====================");
    println!("log_level: {}", cfg.log_level);
    println!("log_file: {}", cfg.log_file);
    println!("refresh_interval: {} seconds", cfg.refresh_interval);
    println!("time_format: {}", cfg.time_format);
    println!("leagues: {}", leagues.join(", "));
    println!("api_base_url: {}", cfg.api_base_url);
    println!("web_base_url: {}", cfg.web_base_url);
    println!();
    println!("[display]");
    println!("use_unicode: {}", cfg.display.use_unicode);
    println!();
    println!("[theme]");
    println!("selection_fg: {:?}", cfg.theme.selection_fg);
    println!("live_fg: {:?}", cfg.theme.live_fg);
}

/// Resolve log configuration from CLI args and config file
/// CLI arguments take precedence over config file
fn resolve_log_config<'a>(cli: &'a Cli, config: &'a config::Config) -> (&'a str, &'a str) {
    let log_level = if cli.log_level != DEFAULT_LOG_LEVEL {
        cli.log_level.as_str()
    } else {
        config.log_level.as_str()
    };

    let log_file = if cli.log_file != DEFAULT_LOG_FILE {
        cli.log_file.as_str()
    } else {
        config.log_file.as_str()
    };

    (log_level, log_file)
}

/// Execute a CLI command by routing it to the appropriate command handler
async fn execute_command(
    client: &dyn ScoresProvider,
    command: Commands,
    config: &config::Config,
) -> anyhow::Result<()> {
    match command {
        Commands::Config | Commands::Url { .. } => {
            unreachable!("Config and Url commands should be handled before execute_command")
        }
        Commands::Scores { date, leagues } => {
            let leagues = if leagues.is_empty() { config.leagues.clone() } else { leagues };
            commands::scores::run(client, date, &leagues, config).await
        }
        Commands::Boxscore { league, event_id } => {
            commands::boxscore::run(client, league, &event_id, config).await
        }
    }
}

#[tokio::main]
async fn main() {
    let config = config::read();
    let cli = Cli::parse();

    // Resolve and initialize logging
    let (log_level, log_file) = resolve_log_config(&cli, &config);
    if log_file != DEFAULT_LOG_FILE {
        init_logging(log_level, log_file);
    }

    let provider = create_provider(&cli, &config);

    // If no subcommand, run TUI
    let Some(command) = cli.command else {
        if let Err(e) = tui::run(provider, config).await {
            eprintln!("Error running TUI: {}", e);
            std::process::exit(1);
        }
        return;
    };

    // Handle commands that don't need a client
    match &command {
        Commands::Config => {
            handle_config_command();
            return;
        }
        Commands::Url { league, event_id } => {
            println!("{}", league.game_url(&config.web_base_url, event_id));
            return;
        }
        _ => {}
    }

    if let Err(e) = execute_command(provider.as_ref(), command, &config).await {
        eprintln!("Error: {:#}", e);
        tracing::error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
