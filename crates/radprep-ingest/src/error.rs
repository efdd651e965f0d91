use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("table file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to read table file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("table {path} contains no data rows")]
    EmptyTable { path: PathBuf },

    #[error("dataframe error: {0}")]
    DataFrame(#[from] polars::error::PolarsError),
}

impl IngestError {
    pub(crate) fn file_read(path: &Path, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn csv_parse(path: &Path, source: csv::Error) -> Self {
        Self::CsvParse {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
