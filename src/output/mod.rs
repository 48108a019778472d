use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;


pub const COMBINED_FILE_NAME: &str = "all_llama_responses.csv";
const HEADER: [&str; 2] = ["prompt", "response"];

/// One prompt and the model's reply to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub prompt: String,
    pub response: String,
}

impl ResponseRecord {
    pub fn new(prompt: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response: response.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Batch file not found: {path}")]
    MissingBatch { path: PathBuf },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error on {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// `<dir>/llama_batch_<batch_num + 1>.csv`; file names are 1-based
pub fn batch_path(dir: impl AsRef<Path>, batch_num: usize) -> PathBuf {
    dir.as_ref().join(format!("llama_batch_{}.csv", batch_num + 1))
}

pub fn combined_path(dir: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join(COMBINED_FILE_NAME)
}

/// Write records as CSV with a `prompt,response` header.
///
/// The header is written even when `records` is empty.
pub fn write_records(
    path: impl AsRef<Path>,
    records: &[ResponseRecord],
) -> Result<(), OutputError> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };
    let csv_err = |source: csv::Error| OutputError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer.write_record(HEADER).map_err(csv_err)?;
    for record in records {
        writer.serialize(record).map_err(csv_err)?;
    }

    let mut inner = writer
        .into_inner()
        .map_err(|e| io_err(std::io::Error::other(e.to_string())))?;
    inner.flush().map_err(io_err)?;
    Ok(())
}

/// Read back a file written by [`write_records`]
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<ResponseRecord>, OutputError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => OutputError::MissingBatch {
            path: path.to_path_buf(),
        },
        _ => OutputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    reader
        .deserialize()
        .collect::<Result<Vec<ResponseRecord>, _>>()
        .map_err(|source| OutputError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

/// Concatenate batch files `0..num_batches` in order into the combined file.
///
/// Every batch file must exist; the first missing one aborts the merge before
/// the combined file is written. Returns the number of merged rows.
pub fn merge_batches(dir: impl AsRef<Path>, num_batches: usize) -> Result<usize, OutputError> {
    let dir = dir.as_ref();
    let mut all = Vec::new();

    for batch_num in 0..num_batches {
        all.extend(read_records(batch_path(dir, batch_num))?);
    }

    write_records(combined_path(dir), &all)?;
    Ok(all.len())
}
