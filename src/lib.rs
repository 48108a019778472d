// Public API exports
pub mod batcher;
pub mod client;
pub mod output;
pub mod queries;
pub mod runner;

// Re-export main types for convenience
pub use batcher::Batcher;
pub use client::{
    ChatClient, ChatError, DEFAULT_CHAT_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT, Responder,
};
pub use output::{
    COMBINED_FILE_NAME, OutputError, ResponseRecord, batch_path, combined_path, merge_batches,
    read_records, write_records,
};
pub use queries::{QUERY_COLUMN, QueryError, load_queries};
pub use runner::{BatchRunner, RunConfig, RunError, RunSummary};
