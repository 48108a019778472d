use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use crate::client::{DEFAULT_CHAT_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT};

/// Everything a batch run needs to know
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// CSV file with a `query` column
    pub queries_path: PathBuf,
    /// Where batch files and the combined file are written
    pub output_directory: PathBuf,
    pub batch_size: NonZeroUsize,
    pub model: String,
    pub url: String,
    /// 0-based index of the first batch to send
    pub start_batch: usize,
    pub timeout: Duration,
}

impl RunConfig {
    /// Create a config with the default model, endpoint and timeout
    pub fn new(
        queries_path: impl Into<PathBuf>,
        output_directory: impl Into<PathBuf>,
        batch_size: NonZeroUsize,
    ) -> Self {
        Self {
            queries_path: queries_path.into(),
            output_directory: output_directory.into(),
            batch_size,
            model: DEFAULT_MODEL.to_string(),
            url: DEFAULT_CHAT_URL.to_string(),
            start_batch: 0,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Skip batches below this index. Their files must already exist for the
    /// final merge to succeed.
    pub fn start_batch(mut self, start_batch: usize) -> Self {
        self.start_batch = start_batch;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
