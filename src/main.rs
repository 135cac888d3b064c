use clap::Parser;
use talent_match::cli::{execute, load_catalog, Cli};
use talent_match::config::{LoggingSettings, Settings};
use talent_match::core::{MatchEvaluator, Matcher};
use talent_match::error::AppError;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(2);
        }
    };

    init_logging(&settings.logging);

    if let Err(e) = run(&cli, &settings) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, settings: &Settings) -> Result<(), AppError> {
    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| settings.data.catalog_path.clone());
    let catalog = load_catalog(&catalog_path)?;

    let matcher = Matcher::new(MatchEvaluator::new(), settings.matching.min_score);

    info!(
        "Matcher initialized (judge: {}, min score: {})",
        matcher.evaluator().judge_name(),
        settings.matching.min_score
    );

    let output = execute(&cli.command, settings, &matcher, &catalog)?;
    println!("{}", output);

    Ok(())
}

/// Initialize logging on stderr; RUST_LOG overrides the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}
