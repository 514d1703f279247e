mod cli;
mod error;
mod report;

use chrono::Utc;
use clap::Parser;
use cli::Args;
use rootcause::prelude::ResultExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voc_streaming_model::DeploymentConfig;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let deployment = match DeploymentConfig::from_env() {
        Ok(deployment) => deployment,
        Err(e) => {
            tracing::error!(error = %e, "failed to load deployment settings");
            std::process::exit(1);
        }
    };

    // Sampled once so every facet of the report sees the same instant.
    let now = Utc::now();

    let output = report::run(&args, &deployment, now).and_then(|report| {
        serde_json::to_string_pretty(&report).context(error::StatusError::Output)
    });

    match output {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!(error = %e, "failed to report conference status");
            std::process::exit(1);
        }
    }
}
