use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Header of the input column holding the prompts
pub const QUERY_COLUMN: &str = "query";

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Failed to open queries file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse queries CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("The CSV file {path} must have a '{column}' column.")]
    MissingColumn { column: String, path: PathBuf },
}

/// Load the ordered list of prompts from the `query` column of a CSV file.
///
/// The file must have a header row whose `query` header matches exactly (no
/// surrounding whitespace). Other columns are ignored and may appear
/// in any order. A row without a `query` cell yields an empty prompt.
pub fn load_queries(path: impl AsRef<Path>) -> Result<Vec<String>, QueryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| QueryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let csv_err = |source: csv::Error| QueryError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let column = reader
        .headers()
        .map_err(csv_err)?
        .iter()
        .position(|h| h == QUERY_COLUMN)
        .ok_or_else(|| QueryError::MissingColumn {
            column: QUERY_COLUMN.to_string(),
            path: path.to_path_buf(),
        })?;

    let mut queries = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        queries.push(record.get(column).unwrap_or_default().to_string());
    }

    tracing::debug!(path = %path.display(), count = queries.len(), "Loaded queries");
    Ok(queries)
}
