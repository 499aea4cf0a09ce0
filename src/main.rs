// Registry Match CLI
//
//   registry-match match  <QUERY>   --candidates results.csv
//   registry-match screen <GEOJSON>
//   registry-match batch  <GEOJSON> --candidates results.csv --workers 4

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use registry_match::classifier::OwnerClassifier;
use registry_match::report::{self, render_summary};
use registry_match::{
    extract_owners, load_candidates_csv, LookupOutcome, LookupPipeline, MatchConfig, MatchEngine,
    RegistrySearch, DEFAULT_OWNER_FIELD, VERSION,
};

/// Match property-owner names against business-registry search results
#[derive(Parser, Debug)]
#[command(name = "registry-match", version, about, long_about = None)]
struct Cli {
    /// Verbose output. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// JSON file overriding lexicons and thresholds
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Match one name against candidate registry results
    Match(MatchArgs),

    /// Classify every owner in a GeoJSON file as lookup / excluded
    Screen(ScreenArgs),

    /// Screen, search and match every owner in a GeoJSON file
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct MatchArgs {
    /// Owner or company name to look up
    query: String,

    /// CSV of registry results
    #[arg(long)]
    candidates: PathBuf,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ScreenArgs {
    /// GeoJSON parcel file
    geojson: PathBuf,

    #[arg(long, default_value = DEFAULT_OWNER_FIELD)]
    owner_field: String,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// GeoJSON parcel file
    geojson: PathBuf,

    /// CSV of registry results
    #[arg(long)]
    candidates: PathBuf,

    #[arg(long, default_value = DEFAULT_OWNER_FIELD)]
    owner_field: String,

    /// Worker threads
    #[arg(long, default_value_t = 1)]
    workers: usize,

    /// Write the report here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Only owners without a direct match
    #[arg(long)]
    unmatched_only: bool,

    /// Only matches whose registry business type equals this (case-insensitive)
    #[arg(long)]
    business_type: Option<String>,

    /// Write outcomes as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("registry-match v{} starting", VERSION);

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Match(args) => run_match(&args, config),
        Commands::Screen(args) => run_screen(&args, &config),
        Commands::Batch(args) => run_batch(&args, config),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("❌ {e:#}");
            ExitCode::from(1)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<MatchConfig> {
    match path {
        Some(path) => MatchConfig::from_file(path),
        None => Ok(MatchConfig::default()),
    }
}

fn run_match(args: &MatchArgs, config: MatchConfig) -> Result<()> {
    let snapshot = load_candidates_csv(&args.candidates)?;
    let candidates = snapshot.search(&args.query)?;

    let engine = MatchEngine::new(config);
    let result = engine.find_match(&args.query, &candidates);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::render_result(&result));
    }
    Ok(())
}

fn run_screen(args: &ScreenArgs, config: &MatchConfig) -> Result<()> {
    let owners = extract_owners(&args.geojson, &args.owner_field)?;
    let classifier = OwnerClassifier::new(config);

    let mut lookup = 0;
    for owner in &owners {
        let class = classifier.classify(owner);
        match class.reason() {
            None => {
                lookup += 1;
                println!("LOOKUP   {}", owner);
            }
            Some(reason) => println!("SKIP     {} ({})", owner, reason.as_str()),
        }
    }

    println!();
    println!("✓ {} owners, {} to look up, {} skipped", owners.len(), lookup, owners.len() - lookup);
    Ok(())
}

fn run_batch(args: &BatchArgs, config: MatchConfig) -> Result<()> {
    let owners = extract_owners(&args.geojson, &args.owner_field)?;
    let snapshot = load_candidates_csv(&args.candidates)?;

    let pipeline = LookupPipeline::new(config);
    let outcomes = pipeline.run_parallel(&owners, &snapshot, args.workers);

    let selected: Option<(String, Vec<&LookupOutcome>)> = match &args.business_type {
        Some(business_type) => Some((
            format!("Matches with business type: {}", business_type),
            report::filter_by_business_type(&outcomes, business_type),
        )),
        None if args.unmatched_only => Some((
            "Owners without a direct match".to_string(),
            report::unmatched(&outcomes),
        )),
        None => None,
    };

    let output = match (&selected, args.json) {
        (Some((_, filtered)), true) => serde_json::to_string_pretty(filtered)?,
        (Some((title, filtered)), false) => render_summary(title, filtered),
        (None, true) => serde_json::to_string_pretty(&outcomes)?,
        (None, false) => report::render_batch(&outcomes, chrono::Local::now()),
    };

    match &args.output {
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            println!("✓ Report written to {}", path.display());
        }
        None => print!("{}", output),
    }
    Ok(())
}
