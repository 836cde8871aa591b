//! Veracity CLI - one-shot prediction from command-line flags
//!
//! ```text
//! veracity --text "The sky is blue." --trust 0.9 --suspicion 0.1 --level low
//! Prediction: likely honest
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use veracity_core::constants::{
    DEFAULT_MODEL_PATH, DEFAULT_SUSPICION_SCORE, DEFAULT_TRUST_SCORE, MODEL_PATH_ENV, MODEL_SHA256_ENV,
};
use veracity_core::{MessageRecord, OnnxOracle, PredictError, Predictor, Verdict};

#[derive(Parser, Debug)]
#[command(name = "veracity", version, about = "Baseline Message Veracity Prediction")]
struct Cli {
    /// Message text
    #[arg(long)]
    text: String,

    /// Trust score
    #[arg(long, default_value_t = DEFAULT_TRUST_SCORE, allow_negative_numbers = true)]
    trust: f64,

    /// Suspicion score
    #[arg(long, default_value_t = DEFAULT_SUSPICION_SCORE, allow_negative_numbers = true)]
    suspicion: f64,

    /// Suspicion level (none, low, medium, high)
    #[arg(long, default_value = "none")]
    level: String,

    /// Trained ONNX classifier
    #[arg(long, env = MODEL_PATH_ENV, default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,

    /// Expected SHA-256 of the model file
    #[arg(long = "model-sha256", env = MODEL_SHA256_ENV)]
    model_sha256: Option<String>,
}

impl Cli {
    fn record(&self) -> MessageRecord {
        MessageRecord::new(self.text.clone())
            .with_trust(self.trust)
            .with_suspicion(self.suspicion)
            .with_level(&self.level)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(verdict) => {
            println!("{}", format_prediction(verdict));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// The single stdout line of a successful run
fn format_prediction(verdict: Verdict) -> String {
    format!("Prediction: {}", verdict)
}

fn run(cli: &Cli) -> anyhow::Result<Verdict> {
    let oracle = OnnxOracle::load(&cli.model, cli.model_sha256.as_deref())
        .map_err(PredictError::from)
        .with_context(|| format!("loading model {}", cli.model.display()))?;

    let predictor = Predictor::new(oracle);
    let verdict = predictor.predict(&cli.record())?;

    Ok(verdict)
}
