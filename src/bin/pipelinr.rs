use clap::Parser;
use log::{error, info};
use pipelinr::adapter::JsonDocument;
use pipelinr::logging::LoggingSystem;
use pipelinr::{Evaluator, EvaluatorConfig, Pipe, TransformRegistry};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON document to extract from
    #[arg(short, long, required = true)]
    document: PathBuf,

    /// JSON pipeline description
    #[arg(short, long, required = true)]
    pipeline: PathBuf,

    /// Optional TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the execution trace to stderr
    #[arg(short, long)]
    trace: bool,
}

/// Evaluates a JSON pipeline against a JSON document and prints the result.
///
/// # Errors
///
/// Returns an error if:
/// * A file cannot be read or parsed
/// * The pipeline description is invalid
/// * A `required` step found no value
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EvaluatorConfig::from_file(path)?,
        None => {
            let mut config = EvaluatorConfig::default();
            config.apply_env_overrides()?;
            config
        }
    };
    LoggingSystem::init_with_config(&config.logging)?;

    let registry = TransformRegistry::new();

    info!("Loading document from: {}", cli.document.display());
    let document = JsonDocument::parse(&fs::read_to_string(&cli.document)?)?;

    info!("Loading pipeline from: {}", cli.pipeline.display());
    let pipeline = Pipe::parse_json(&fs::read_to_string(&cli.pipeline)?, &registry)?;

    let mut evaluator = Evaluator::with_config(document, config);
    let result = evaluator.evaluate(&pipeline);

    if cli.trace {
        eprintln!("{}", evaluator.last_trace().render(&evaluator.config().trace));
    }

    match result {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value.to_json())?);
            Ok(())
        }
        Err(err) => {
            error!("Evaluation failed: {}", err);
            Err(err.into())
        }
    }
}
