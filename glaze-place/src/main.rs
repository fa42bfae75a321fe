//! glaze-place - Compute a floating-element placement from a JSON scenario
//!
//! Prints the placement (and arrow offset, when the component has one) as
//! JSON on stdout. Logging goes to stderr and is controlled by `RUST_LOG`.

mod scenario;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use positioning::PositioningConfig;
use scenario::Scenario;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Scenario describing the reference, floating element and viewport
    #[arg(value_name = "SCENARIO")]
    scenario: PathBuf,

    /// Positioning config overriding the built-in component defaults
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match &cli.config {
        Some(path) => PositioningConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PositioningConfig::default(),
    };

    let content = std::fs::read_to_string(&cli.scenario)
        .with_context(|| format!("Failed to read scenario {}", cli.scenario.display()))?;
    let scenario: Scenario = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse scenario {}", cli.scenario.display()))?;

    tracing::debug!("Placing scenario from {}", cli.scenario.display());
    let outcome = scenario.evaluate(&config)?;

    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}
