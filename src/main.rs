//! compliance-maturity: regulatory maturity scoring and roadmap planning
//!
//! Scores NIS2, GDPR and BSI C5 self-assessments, classifies organizations
//! and plans implementation roadmaps with scaled cost estimates.

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use compliance_maturity::{
    cli,
    config::{AppConfig, ConfigOverrides, Validatable},
    model::FrameworkId,
    pipeline::exit_codes,
    reports::ReportFormat,
    scoring::AggregationPolicy,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "compliance-maturity")]
#[command(version)]
#[command(about = "Compliance maturity scoring and roadmap planning", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Overall score below --min-score
    3  Error occurred

EXAMPLES:
    # Score a NIS2 self-assessment
    compliance-maturity score content/nis2.yaml session.yaml

    # Fail CI when maturity drops below 60%
    compliance-maturity score content/nis2.yaml session.yaml --min-score 60

    # Roadmap with scaled costs as JSON
    compliance-maturity roadmap content/nis2.yaml session.yaml -o json

    # How much of C5 does NIS2 work already cover?
    compliance-maturity overlap nis2 bsi-c5")]
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
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output options shared by report-producing subcommands
#[derive(clap::Args)]
struct OutputArgs {
    /// Output format (defaults to the config file setting, else summary)
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Framework content file (YAML or JSON)
    content: PathBuf,

    /// Assessment session file (YAML or JSON)
    session: PathBuf,

    /// How category percentages combine into the overall score
    #[arg(long, value_enum)]
    aggregation: Option<AggregationPolicy>,

    /// Exit with code 1 if the overall score is below this percentage
    #[arg(long)]
    min_score: Option<f64>,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `roadmap` subcommand
#[derive(Parser)]
struct RoadmapArgs {
    /// Framework content file (YAML or JSON)
    content: PathBuf,

    /// Assessment session file (YAML or JSON)
    session: PathBuf,

    /// How category percentages combine into the overall score
    #[arg(long, value_enum)]
    aggregation: Option<AggregationPolicy>,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `overlap` subcommand
#[derive(Parser)]
struct OverlapArgs {
    /// Framework whose implemented measures are reused (nis2, gdpr, bsi-c5)
    from: FrameworkId,

    /// Framework being targeted
    to: FrameworkId,

    /// Custom overlap table (YAML, `mappings: [...]`); built-in table otherwise
    #[arg(long)]
    table: Option<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an assessment session per category and overall
    Score(ScoreArgs),

    /// Classify the session's organization (NIS2 entity category, fine ceiling)
    Classify {
        /// Assessment session file (YAML or JSON)
        session: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build a three-phase implementation roadmap with cost estimates
    Roadmap(RoadmapArgs),

    /// Estimate how much of one framework another already covers
    Overlap(OverlapArgs),

    /// Validate a framework content file
    Validate {
        /// Framework content file (YAML or JSON)
        content: PathBuf,

        /// Overlap table to lint for asymmetric mappings
        #[arg(long)]
        table: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

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
    /// Generate an example .compliance-maturity.yaml in the current directory
    Init,
}

/// Load the file config, merge CLI overrides and validate the result.
fn effective_config(
    cli: &Cli,
    output: &OutputArgs,
    aggregation: Option<AggregationPolicy>,
    min_score: Option<f64>,
) -> Result<AppConfig> {
    let overrides = ConfigOverrides {
        aggregation,
        min_score,
        format: output.output,
        output_file: output.output_file.clone(),
        no_color: cli.no_color,
    };
    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides)
            .context("failed to load config file")?;
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for error in &errors {
            tracing::error!("{error}");
        }
        bail!("invalid configuration ({} errors)", errors.len());
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<i32> {
    let quiet = cli.quiet;
    match &cli.command {
        Commands::Score(args) => {
            let config = effective_config(cli, &args.output, args.aggregation, args.min_score)?;
            cli::run_score(&args.content, &args.session, &config, quiet)
        }

        Commands::Classify { session, output } => {
            let config = effective_config(cli, output, None, None)?;
            cli::run_classify(session, &config, quiet)
        }

        Commands::Roadmap(args) => {
            let config = effective_config(cli, &args.output, args.aggregation, None)?;
            cli::run_roadmap(&args.content, &args.session, &config, quiet)
        }

        Commands::Overlap(args) => {
            let config = effective_config(cli, &args.output, None, None)?;
            cli::run_overlap(args.from, args.to, args.table.as_deref(), &config, quiet)
        }

        Commands::Validate {
            content,
            table,
            output,
        } => {
            let config = effective_config(cli, output, None, None)?;
            cli::run_validate(content, table.as_deref(), &config, quiet)
        }

        Commands::Completions { shell } => {
            generate(
                *shell,
                &mut Cli::command(),
                "compliance-maturity",
                &mut io::stdout(),
            );
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema = compliance_maturity::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => run_config_action(action, cli),
    }
}

fn run_config_action(action: &ConfigAction, cli: &Cli) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) =
                compliance_maturity::config::load_or_default(cli.config.as_deref())
                    .context("failed to load config file")?;
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            let search_paths = [
                std::env::current_dir().ok(),
                dirs::config_dir().map(|p| p.join("compliance-maturity")),
                dirs::home_dir(),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {}", path.display());
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in compliance_maturity::config::CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match compliance_maturity::config::discover_config_file(cli.config.as_deref()) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".compliance-maturity.yaml");
            if target.exists() {
                bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            std::fs::write(&target, compliance_maturity::config::generate_example_config())
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(exit_codes::SUCCESS)
}

fn main() {
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

    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_codes::ERROR
        }
    };
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
}
