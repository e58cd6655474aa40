use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TimestampError {
    #[error("created_at is missing")]
    Missing,
    #[error("created_at {0:?} does not start with a YYYY-MM-DD date")]
    Invalid(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum AggregateError {
    #[error("order #{index} cannot be grouped")]
    MalformedGroupingInput {
        index: usize,
        #[source]
        source: TimestampError,
    },
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read orders from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse orders in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("orders in {} are not a list", path.display())]
    NotASequence { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to access summary rows at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("summary rows at {} are corrupt", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error("failed to read config {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
