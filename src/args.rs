use clap::{Args, Parser, Subcommand};
use llama_batch::{DEFAULT_CHAT_URL, DEFAULT_MODEL, RunConfig};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct FullArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send every query in a CSV file to a local llama model, saving responses in batches
    QueryLlama(QueryLlamaArgs),

    /// List the models available on the local server
    Models {
        /// Chat endpoint of the local server
        #[arg(long, default_value = DEFAULT_CHAT_URL, env = "LLAMA_BATCH_URL")]
        url: String,
    },
}

#[derive(Args, Debug)]
pub struct QueryLlamaArgs {
    /// The path to the CSV file containing queries.
    #[arg(long, value_parser = existing_path)]
    pub queries_path: PathBuf,

    /// The path to the directory in which to save batches of responses.
    #[arg(long)]
    pub output_directory: PathBuf,

    /// Number of queries to process and responses to save during each batch.
    #[arg(long)]
    pub batch_size: NonZeroUsize,

    /// Llama model to use.
    #[arg(long, default_value = DEFAULT_MODEL, env = "LLAMA_BATCH_MODEL")]
    pub model: String,

    /// Ensure the local server is running at this url
    #[arg(long, default_value = DEFAULT_CHAT_URL, env = "LLAMA_BATCH_URL")]
    pub url: String,

    /// Batch to start from (0-based). Earlier batch files must already exist.
    #[arg(long, default_value_t = 0)]
    pub start_batch: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 180)]
    pub timeout_secs: u64,
}

impl From<QueryLlamaArgs> for RunConfig {
    fn from(args: QueryLlamaArgs) -> Self {
        RunConfig::new(args.queries_path, args.output_directory, args.batch_size)
            .model(args.model)
            .url(args.url)
            .start_batch(args.start_batch)
            .timeout(Duration::from_secs(args.timeout_secs))
    }
}

fn existing_path(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("Path '{}' does not exist.", s))
    }
}
