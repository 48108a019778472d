use anyhow::{Context, Result};
use clap::Parser;
use llama_batch::{BatchRunner, ChatClient, DEFAULT_MODEL, RunConfig};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use crate::args::{Commands, FullArgs, QueryLlamaArgs};

mod args;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let args = FullArgs::parse();

    match args.command {
        Commands::QueryLlama(query_args) => query_llama(query_args),
        Commands::Models { url } => list_models(&url),
    }
}

/// `RUST_LOG` when set, otherwise `info` for this crate
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new("llama_batch=info"),
    }
}

fn query_llama(args: QueryLlamaArgs) -> Result<()> {
    let start_time = Instant::now();
    let config = RunConfig::from(args);

    let runner = BatchRunner::connect(config.clone())
        .context(format!("Failed to set up client for {}", config.url))?;

    let summary = runner.run().context(format!(
        "Batch run over {} failed",
        config.queries_path.display()
    ))?;

    tracing::info!(
        queries = summary.total_queries,
        batches = summary.num_batches,
        written = summary.records_written,
        combined_rows = summary.combined_rows,
        elapsed_secs = start_time.elapsed().as_secs_f64(),
        "Run complete"
    );

    Ok(())
}

fn list_models(url: &str) -> Result<()> {
    let client = ChatClient::new(url, DEFAULT_MODEL)
        .context(format!("Failed to set up client for {}", url))?;

    let models = client
        .health_check()
        .context(format!("Could not reach the model server at {}", url))?;

    if models.is_empty() {
        println!("No models available. Pull one with: ollama pull {}", DEFAULT_MODEL);
    }
    for model in models {
        match model.size {
            Some(size) => println!("{}  ({:.1} GB)", model.name, size as f64 / 1e9),
            None => println!("{}", model.name),
        }
    }

    Ok(())
}
