//! Netguard - NSL-KDD intrusion-detection trainer
//!
//! One-shot batch run: loads `KDDTrain+.csv` from the working directory,
//! trains a 50-tree random forest, and prints the evaluation report.

use netguard::config::PipelineConfig;
use netguard::pipeline;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "netguard=info".into()),
        )
        .init();

    let config = PipelineConfig::default();

    // Missing input is the one locally handled failure: report and exit.
    if !config.data_path.exists() {
        eprintln!("Error: '{}' not found.", config.data_path.display());
        eprintln!("Please place the file in the working directory and rerun.");
        std::process::exit(1);
    }

    pipeline::run(&config)?;
    Ok(())
}
