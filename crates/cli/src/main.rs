use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use ncc_notation::NotationConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ncc-parse")]
#[command(about = "Decode a findings cell into typed finding records")]
struct Cli {
    /// Raw findings cell text; read from stdin when omitted
    raw: Option<String>,

    /// YAML file overriding the built-in lookup tables
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let raw = match cli.raw {
        Some(raw) => raw,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let config = match &cli.config {
        Some(path) => NotationConfig::from_yaml(&std::fs::read_to_string(path)?)?,
        None => NotationConfig::default(),
    };

    let parser = ncc_notation::Parser::with_config(config);
    match parser.parse(&raw) {
        Ok(findings) => {
            let json = if cli.compact {
                serde_json::to_string(&findings)?
            } else {
                serde_json::to_string_pretty(&findings)?
            };
            println!("{json}");
            Ok(())
        }
        Err(err) => {
            // The import pipeline's policy: log the offending cell, skip the row.
            tracing::warn!(cell = raw.trim(), error = %err, "failed to decode findings cell");
            Err(err.into())
        }
    }
}
