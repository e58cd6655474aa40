use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::SourceError;
use crate::model::order::Order;
use crate::repository::traits::OrderSource;

/// Reads orders from a JSON file holding either a bare array of orders or
/// an order listing response (`{"orders": [...]}`).
#[derive(Clone, Debug)]
pub struct FileOrderSource {
    file_path: PathBuf,
}

impl FileOrderSource {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn parse_error(&self, source: serde_json::Error) -> SourceError {
        SourceError::Parse {
            path: self.file_path.clone(),
            source,
        }
    }
}

impl OrderSource for FileOrderSource {
    fn fetch(&self) -> Result<Vec<Order>, SourceError> {
        let content = fs::read_to_string(&self.file_path).map_err(|source| SourceError::Io {
            path: self.file_path.clone(),
            source,
        })?;
        let document: Value = serde_json::from_str(&content).map_err(|e| self.parse_error(e))?;

        let listing = match document {
            Value::Array(_) => document,
            Value::Object(mut map) => match map.remove("orders") {
                Some(orders @ Value::Array(_)) => orders,
                _ => {
                    return Err(SourceError::NotASequence {
                        path: self.file_path.clone(),
                    })
                }
            },
            _ => {
                return Err(SourceError::NotASequence {
                    path: self.file_path.clone(),
                })
            }
        };

        let orders: Vec<Order> = serde_json::from_value(listing).map_err(|e| self.parse_error(e))?;
        debug!(path = %self.file_path.display(), count = orders.len(), "loaded orders");
        Ok(orders)
    }
}
