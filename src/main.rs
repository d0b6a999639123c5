use anyhow::Context;
use citrusmatch::prelude::*;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Match taste preferences against a citrus catalog
#[derive(Parser, Debug)]
#[command(name = "citrusmatch")]
#[command(about = "Rank catalog items against six 1-6 taste ratings", long_about = None)]
struct Args {
    /// Path to a catalog file (JSON array of records); the embedded
    /// sample catalog is used when omitted
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Sweetness rating (1-6)
    #[arg(long, default_value_t = 3)]
    sweetness: u8,

    /// Sourness rating (1-6)
    #[arg(long, default_value_t = 3)]
    sourness: u8,

    /// Bitterness rating (1-6)
    #[arg(long, default_value_t = 3)]
    bitterness: u8,

    /// Aroma rating (1-6)
    #[arg(long, default_value_t = 3)]
    aroma: u8,

    /// Juiciness rating (1-6)
    #[arg(long, default_value_t = 3)]
    juiciness: u8,

    /// Texture rating (1-6)
    #[arg(long, default_value_t = 3)]
    texture: u8,

    /// Preferred season: winter, spring, summer or autumn
    #[arg(long)]
    season: Option<String>,

    /// Six comma-separated per-axis weights, canonical order
    /// (brix,acid,bitterness,aroma,moisture,texture)
    #[arg(long)]
    weights: Option<String>,

    /// Scoring strategy: euclidean or cosine
    #[arg(long, default_value = "euclidean")]
    strategy: String,

    /// Number of results to print
    #[arg(long, default_value_t = 3)]
    top: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let table = match &args.catalog {
        Some(path) => {
            let file = std::fs::File::open(path)
                .with_context(|| format!("cannot open catalog file {}", path.display()))?;
            let records: Vec<serde_json::Value> = serde_json::from_reader(file)
                .with_context(|| format!("catalog file {} is not a JSON array", path.display()))?;
            RawTable::from_records(&records)
        }
        None => {
            info!("no catalog file given, using the embedded sample catalog");
            sample_table()
        }
    };

    let catalog = prepare(&table)?;
    info!(rows = catalog.len(), "catalog prepared");

    let mut user = UserPreference::new(TasteRatings {
        sweetness: args.sweetness,
        sourness: args.sourness,
        bitterness: args.bitterness,
        aroma: args.aroma,
        juiciness: args.juiciness,
        texture: args.texture,
    })?;
    if let Some(season) = &args.season {
        user = user.with_season(season.parse()?);
    }
    if let Some(weights) = &args.weights {
        user = user.with_weights(parse_weights(weights)?);
    }

    let strategy = match args.strategy.as_str() {
        "euclidean" => ScoreStrategy::Euclidean,
        "cosine" => ScoreStrategy::Cosine,
        other => anyhow::bail!("unknown strategy {other:?}; expected euclidean or cosine"),
    };

    let recommendation = Recommender::new()
        .with_strategy(strategy)
        .with_top_k(args.top)
        .recommend(catalog.items(), &user)?;

    info!(
        candidates = recommendation.len(),
        top_ids = ?recommendation.top_ids(),
        "ranking complete"
    );
    println!("{}", serde_json::to_string_pretty(recommendation.top())?);

    Ok(())
}

fn parse_weights(raw: &str) -> anyhow::Result<Weights> {
    let values: Vec<f32> = raw
        .split(',')
        .map(|part| part.trim().parse::<f32>())
        .collect::<std::result::Result<_, _>>()
        .context("weights must be numbers")?;
    let values: [f32; 6] = values
        .try_into()
        .map_err(|v: Vec<f32>| anyhow::anyhow!("expected 6 weights, got {}", v.len()))?;
    Ok(Weights::new(values))
}
