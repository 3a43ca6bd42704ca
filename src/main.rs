use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use voyage_dna::config::{ExplainerProvider, LogFormat, LoggingSettings, Settings};
use voyage_dna::core::{Questionnaire, Ranker, TravelDnaProfiler};
use voyage_dna::models::{Archetype, Category, DestinationSummary, Season, TripRequest};
use voyage_dna::planner::TripPlanner;
use voyage_dna::services::{
    Catalog, Explainer, ExploreFilter, GeminiConfig, GeminiExplainer, TemplateExplainer,
};

/// Travel DNA profiling and destination ranking
#[derive(Parser, Debug)]
#[command(name = "voyage-dna")]
#[command(author, version, about)]
struct Cli {
    /// Path to a configuration file (defaults to config/default + config/local)
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// JSON catalog to use instead of the configured one
    #[arg(long, value_name = "PATH", global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank destinations for a trip request (JSON file, or stdin when omitted)
    Plan {
        #[arg(value_name = "REQUEST")]
        request: Option<PathBuf>,
    },
    /// Print the quiz questions and their admissible answers
    Questions,
    /// Print catalog composition statistics
    Stats,
    /// Compare two catalog destinations for a traveler archetype
    Compare {
        first: String,
        second: String,
        #[arg(long, default_value = "culture_connoisseur")]
        archetype: Archetype,
    },
    /// Browse the catalog by category, cost and season
    Explore {
        /// Repeat to allow several categories; all categories when omitted
        #[arg(long = "category", value_name = "CATEGORY")]
        categories: Vec<Category>,
        /// Maximum typical cost in USD
        #[arg(long)]
        max_cost: Option<f64>,
        #[arg(long)]
        season: Option<Season>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    let settings = match settings {
        Ok(settings) => {
            init_logging(&settings.logging);
            settings
        }
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Configuration loaded successfully");

    match run(cli, settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only the JSON output
fn init_logging(logging: &LoggingSettings) {
    let filter = logging
        .env_filter()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    match logging.format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.init(),
    }
}

async fn run(cli: Cli, settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    if let Command::Questions = cli.command {
        println!("{}", serde_json::to_string_pretty(&Questionnaire::standard())?);
        return Ok(());
    }

    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| settings.catalog.path.as_ref().map(PathBuf::from));

    let catalog = match catalog_path {
        Some(path) => {
            info!("Loading catalog from {}", path.display());
            Catalog::load_from(&path)?
        }
        None => Catalog::builtin(),
    };

    info!(
        "Catalog ready: {} destinations, {} excluded",
        catalog.len(),
        catalog.excluded()
    );

    match cli.command {
        Command::Stats => {
            println!("{}", serde_json::to_string_pretty(&catalog.stats())?);
            Ok(())
        }
        Command::Plan { request } => {
            let request = read_request(request)?;
            let planner = build_planner(&settings, catalog);
            let report = planner.plan(&request).await?;

            info!(
                "Returning {} recommendations for session {}",
                report.recommendations.len(),
                report.session_id
            );

            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Command::Compare {
            first,
            second,
            archetype,
        } => {
            let planner = build_planner(&settings, catalog);
            let report = planner.compare(&first, &second, archetype).await?;

            info!(
                "Compared {} and {} for {} ({:?})",
                report.first.id, report.second.id, archetype, report.status
            );

            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Command::Explore {
            categories,
            max_cost,
            season,
        } => {
            let filter = ExploreFilter {
                categories: categories.into_iter().collect(),
                max_cost,
                season,
            };
            let found: Vec<DestinationSummary> = catalog
                .explore(&filter)
                .into_iter()
                .map(DestinationSummary::from)
                .collect();

            info!("Found {} destinations matching {:?}", found.len(), filter);

            println!("{}", serde_json::to_string_pretty(&found)?);
            Ok(())
        }
        Command::Questions => Ok(()),
    }
}

fn read_request(path: Option<PathBuf>) -> Result<TripRequest, Box<dyn std::error::Error>> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };
    Ok(serde_json::from_str(&json)?)
}

fn build_planner(settings: &Settings, catalog: Catalog) -> TripPlanner {
    let weights = settings.scoring_weights();
    let ranker = Ranker::new(weights, settings.scoring_params());

    info!("Ranker initialized with weights: {:?}", weights);

    let explainer: Arc<dyn Explainer> = match settings.explanation.effective_provider() {
        ExplainerProvider::Gemini => {
            let config = GeminiConfig {
                model: settings.explanation.model.clone(),
                endpoint: settings.explanation.endpoint.clone(),
                ..GeminiConfig::new(settings.explanation.api_key.clone().unwrap_or_default())
            };
            match GeminiExplainer::new(config) {
                Ok(gemini) => {
                    info!("Using Gemini explainer ({})", settings.explanation.model);
                    Arc::new(gemini)
                }
                Err(e) => {
                    warn!("Gemini explainer unavailable, using templates: {}", e);
                    Arc::new(TemplateExplainer::new())
                }
            }
        }
        ExplainerProvider::Template => Arc::new(TemplateExplainer::new()),
    };

    TripPlanner::new(
        Arc::new(TravelDnaProfiler::standard()),
        ranker,
        Arc::new(catalog),
    )
    .with_explainer(explainer)
    .with_policy(settings.explanation_policy())
    .with_default_limit(settings.ranking.default_limit)
}
