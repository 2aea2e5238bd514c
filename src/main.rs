//! ecotrack: EcoScore analysis for shopping carts
//!
//! Scores products by carbon footprint and packaging waste, and suggests
//! greener alternatives from a product catalog.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use ecotrack::{
    cli,
    config::{self, AppConfig, ConfigOverrides, CONFIG_FILE_NAMES},
    model::ProductId,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with scoring info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nEcoScore formula:",
        "\n  60% carbon footprint (0-100 kg CO2e), 40% packaging waste (0-500 g)",
        "\n\nOutput Formats:",
        "\n  summary, json"
    )
}

#[derive(Parser)]
#[command(name = "ecotrack")]
#[command(version, long_version = build_long_version())]
#[command(about = "EcoScore analysis and greener alternatives for shopping carts", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Cart green score below --min-green-score
    2  Invalid request (missing ids, unknown product, self-swap, bad input)
    3  Error occurred

EXAMPLES:
    # Analyze a cart
    ecotrack analyze --catalog catalog.json bev-001 snk-001

    # Analyze a JSON request body and fail below a green score of 60
    ecotrack analyze --catalog catalog.json --request cart.json --min-green-score 60

    # Swap a product for a greener one
    ecotrack swap --catalog catalog.json bev-001 bev-002

    # Score raw attributes
    ecotrack score 45 180 -o json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "ECOTRACK_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Shared argument groups
// ============================================================================

/// Output selection shared by every reporting command
#[derive(clap::Args)]
struct OutputArgs {
    /// Output format (defaults to the config file, then summary)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Scoring overrides shared by every scoring command
#[derive(clap::Args)]
struct ScoringArgs {
    /// Carbon footprint (kg CO2e) that maps to a zero carbon score
    #[arg(long)]
    max_carbon_footprint: Option<f64>,

    /// Packaging waste (grams) that maps to a zero packaging score
    #[arg(long)]
    max_packaging_waste: Option<f64>,
}

/// Catalog location
#[derive(clap::Args)]
struct CatalogArgs {
    /// JSON product catalog (array of product documents)
    #[arg(short, long, env = "ECOTRACK_CATALOG")]
    catalog: PathBuf,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Arguments for the `analyze` subcommand
#[derive(Parser)]
struct AnalyzeArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Product ids in the cart
    product_ids: Vec<String>,

    /// Read a `{"productIds": [...]}` request body from a file
    #[arg(long, conflicts_with = "product_ids")]
    request: Option<PathBuf>,

    /// Exit with code 1 if the cart green score is below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    min_green_score: Option<u8>,

    /// Maximum sustainable candidates considered per product
    #[arg(long)]
    candidate_limit: Option<usize>,

    /// Minimum EcoPoints awarded per suggestion
    #[arg(long)]
    min_eco_points: Option<u32>,

    /// Look up alternatives one product at a time
    #[arg(long)]
    serial: bool,

    #[command(flatten)]
    scoring: ScoringArgs,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `swap` subcommand
#[derive(Parser)]
struct SwapArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Id of the product being replaced
    original: String,

    /// Id of the replacement product
    alternative: String,

    /// Minimum EcoPoints awarded for the swap
    #[arg(long)]
    min_eco_points: Option<u32>,

    #[command(flatten)]
    scoring: ScoringArgs,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Carbon footprint in kg CO2e
    #[arg(allow_negative_numbers = true)]
    carbon_footprint: f64,

    /// Packaging waste in grams
    #[arg(allow_negative_numbers = true)]
    packaging_waste: f64,

    #[command(flatten)]
    scoring: ScoringArgs,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `products` subcommand
#[derive(Parser)]
struct ProductsArgs {
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Only list products in this category
    #[arg(long)]
    category: Option<String>,

    /// Only list products flagged sustainable
    #[arg(long)]
    sustainable_only: bool,

    /// Sort by EcoScore, best first
    #[arg(long)]
    sort_by_score: bool,

    #[command(flatten)]
    scoring: ScoringArgs,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a cart: green score, totals and greener alternatives
    Analyze(AnalyzeArgs),

    /// Swap a product for an alternative and compute EcoPoints earned
    Swap(SwapArgs),

    /// Compute the EcoScore of raw attribute values
    Score(ScoreArgs),

    /// List catalog products with their EcoScores
    Products(ProductsArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .ecotrack.yaml in the current directory
    Init,
}

/// Layer CLI flags over the discovered config file.
fn effective_config(
    cli: &Cli,
    scoring: &ScoringArgs,
    output: &OutputArgs,
    tweak: impl FnOnce(ConfigOverrides) -> ConfigOverrides,
) -> AppConfig {
    let overrides = ConfigOverrides {
        max_carbon_footprint: scoring.max_carbon_footprint,
        max_packaging_waste: scoring.max_packaging_waste,
        format: output.output,
        file: output.output_file.clone(),
        no_color: cli.no_color.then_some(true),
        ..ConfigOverrides::default()
    };
    let overrides = tweak(overrides);

    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    config
}

fn exit_with(code: i32) -> Result<()> {
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    // Dispatch to command handlers
    match &cli.command {
        Commands::Analyze(args) => {
            let app = effective_config(&cli, &args.scoring, &args.output, |o| ConfigOverrides {
                candidate_limit: args.candidate_limit,
                min_eco_points: args.min_eco_points,
                parallel_lookups: args.serial.then_some(false),
                ..o
            });
            exit_with(cli::run_analyze(cli::AnalyzeConfig {
                catalog: args.catalog.catalog.clone(),
                product_ids: args.product_ids.clone(),
                request_file: args.request.clone(),
                min_green_score: args.min_green_score,
                app,
                quiet: cli.quiet,
            })?)
        }

        Commands::Swap(args) => {
            let app = effective_config(&cli, &args.scoring, &args.output, |o| ConfigOverrides {
                min_eco_points: args.min_eco_points,
                ..o
            });
            exit_with(cli::run_swap(cli::SwapConfig {
                catalog: args.catalog.catalog.clone(),
                original: ProductId::from(args.original.as_str()),
                alternative: ProductId::from(args.alternative.as_str()),
                app,
                quiet: cli.quiet,
            })?)
        }

        Commands::Score(args) => {
            let app = effective_config(&cli, &args.scoring, &args.output, |o| o);
            exit_with(cli::run_score(cli::ScoreConfig {
                carbon_footprint: args.carbon_footprint,
                packaging_waste: args.packaging_waste,
                app,
                quiet: cli.quiet,
            })?)
        }

        Commands::Products(args) => {
            let app = effective_config(&cli, &args.scoring, &args.output, |o| o);
            exit_with(cli::run_products(cli::ProductsConfig {
                catalog: args.catalog.catalog.clone(),
                category: args.category.clone(),
                sustainable_only: args.sustainable_only,
                sort_by_score: args.sort_by_score,
                app,
                quiet: cli.quiet,
            })?)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "ecotrack", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema =
                config::generate_json_schema().context("failed to generate config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                eprintln!("Config file search paths (in order):");
                for path in config::config_search_dirs() {
                    eprintln!("  {}", path.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".ecotrack.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
