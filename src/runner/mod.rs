mod config;


pub use config::RunConfig;

use std::fs;
use std::ops::Range;
use std::path::PathBuf;
use thiserror::Error;

use crate::batcher::Batcher;
use crate::client::{ChatClient, ChatError, Responder};
use crate::output::{self, OutputError, ResponseRecord};
use crate::queries::{self, QueryError};

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Queries(#[from] QueryError),

    #[error("Inference failed on query {index} in batch {batch}: {source}")]
    Inference {
        /// 1-based, as in the batch file name
        batch: usize,
        /// Position within the full query list
        index: usize,
        #[source]
        source: ChatError,
    },

    #[error(transparent)]
    Output(#[from] OutputError),
}

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total_queries: usize,
    pub num_batches: usize,
    /// 0-based indices of the batches sent in this run
    pub processed_batches: Range<usize>,
    /// Response records written by this run
    pub records_written: usize,
    pub combined_path: PathBuf,
    /// Rows in the combined file, including batches from earlier runs
    pub combined_rows: usize,
}

/// Sends every query through a [`Responder`] one batch at a time.
///
/// Load -> validate -> for each batch: send, collect, persist -> merge.
/// Nothing is retried; the first error ends the run and leaves the batch
/// files already written on disk.
pub struct BatchRunner<R> {
    config: RunConfig,
    batcher: Batcher,
    responder: R,
}

impl BatchRunner<ChatClient> {
    /// Build a runner backed by the chat endpoint and model from `config`
    pub fn connect(config: RunConfig) -> Result<Self, ChatError> {
        let client = ChatClient::with_timeout(&config.url, config.model.clone(), config.timeout)?;
        Ok(Self::new(config, client))
    }
}

impl<R: Responder> BatchRunner<R> {
    pub fn new(config: RunConfig, responder: R) -> Self {
        let batcher = Batcher::new(config.batch_size);
        Self {
            config,
            batcher,
            responder,
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn run(&self) -> Result<RunSummary, RunError> {
        let queries = queries::load_queries(&self.config.queries_path)?;
        let total = queries.len();
        let num_batches = self.batcher.num_batches(total);
        let dir = &self.config.output_directory;

        tracing::info!(
            queries = total,
            batch_size = self.config.batch_size.get(),
            num_batches,
            start_batch = self.config.start_batch,
            model = %self.config.model,
            "Starting batch run"
        );

        fs::create_dir_all(dir).map_err(|source| OutputError::Io {
            path: dir.clone(),
            source,
        })?;

        let processed = self.config.start_batch.min(num_batches)..num_batches;
        let mut records_written = 0;

        for batch_num in processed.clone() {
            records_written += self.run_batch(&queries, batch_num, num_batches)?;
        }

        let combined_rows = output::merge_batches(dir, num_batches)?;
        let combined_path = output::combined_path(dir);
        println!(
            "All batches combined and saved to {}",
            combined_path.display()
        );
        tracing::info!(rows = combined_rows, path = %combined_path.display(), "Merged batches");

        Ok(RunSummary {
            total_queries: total,
            num_batches,
            processed_batches: processed,
            records_written,
            combined_path,
            combined_rows,
        })
    }

    /// Send one batch and write its file. Returns the number of records.
    fn run_batch(
        &self,
        queries: &[String],
        batch_num: usize,
        num_batches: usize,
    ) -> Result<usize, RunError> {
        let first_index = self.batcher.bounds(batch_num, queries.len()).start;
        let batch = self.batcher.slice(queries, batch_num);
        let batch_size = self.config.batch_size.get();

        println!(
            "Processing batch {}/{} with {} queries.",
            batch_num + 1,
            num_batches,
            batch.len()
        );

        let mut responses = Vec::with_capacity(batch.len());
        for (cnt, prompt) in batch.iter().enumerate() {
            tracing::debug!(batch = batch_num + 1, index = first_index + cnt, "Sending prompt");

            let response = self
                .responder
                .respond(prompt)
                .map_err(|source| RunError::Inference {
                    batch: batch_num + 1,
                    index: first_index + cnt,
                    source,
                })?;
            responses.push(ResponseRecord::new(prompt.as_str(), response));

            println!("\nProcessed prompt: {}", prompt);
            println!("{}", progress_line(cnt + 1, batch_size, batch_num));
        }

        let path = output::batch_path(&self.config.output_directory, batch_num);
        output::write_records(&path, &responses)?;

        println!(
            "Saved batch {} responses to {}",
            batch_num + 1,
            path.display()
        );
        tracing::info!(
            batch = batch_num + 1,
            records = responses.len(),
            path = %path.display(),
            "Saved batch"
        );

        Ok(responses.len())
    }
}

/// Progress after `done` prompts of batch `batch_num`.
///
/// Measured against the configured size, so a short final batch stops below 100%.
fn progress_line(done: usize, batch_size: usize, batch_num: usize) -> String {
    let progress = done as f64 / batch_size as f64 * 100.0;
    format!("\n {:?}% done with batch {}", progress, batch_num + 1)
}
