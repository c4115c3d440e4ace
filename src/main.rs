use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use insight_synth::clients::{CannedModel, GeminiClient, GenerativeModel};
use insight_synth::config::{CliOverrides, Config};
use insight_synth::feedback::{load_feedback_file, preprocess, sample_feedback};
use insight_synth::pipeline;

/// Insight Synth - cluster user feedback into themed insight cards
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of insight cards to request (overrides config)
    #[arg(short = 'n', long)]
    cards: Option<usize>,

    /// Feedback file: JSON array of strings, or one item per line
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Gemini model id (overrides GEMINI_MODEL)
    #[arg(short, long)]
    model: Option<String>,

    /// Parse a saved model reply instead of calling the API
    #[arg(long)]
    reply_file: Option<PathBuf>,

    /// Do not ask the provider for an application/json response
    #[arg(long)]
    no_json_mode: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("insight_synth=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut config = Config::load().context("Failed to load configuration")?;
    config.apply_cli_overrides(&CliOverrides {
        num_cards: args.cards,
        model: args.model,
        disable_json_mode: args.no_json_mode,
    });
    config.validate()?;

    let raw = match &args.input {
        Some(path) => load_feedback_file(path)?,
        None => {
            debug!("No --input given, using built-in sample feedback");
            sample_feedback()
        }
    };
    let feedback = preprocess(&raw);
    let num_cards = config.synthesis.num_cards;

    let model: Box<dyn GenerativeModel> = match &args.reply_file {
        Some(path) => {
            info!("Replaying saved reply from {}", path.display());
            Box::new(CannedModel::from_file(path)?)
        }
        None => {
            let key = config.require_api_key()?.to_string();
            Box::new(GeminiClient::new(key, &config.model)?)
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    pipeline::run(model.as_ref(), &feedback, num_cards, &mut out).await?;
    Ok(())
}
