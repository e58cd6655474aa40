use crate::error::{SinkError, SourceError};
use crate::model::order::Order;
use crate::model::summary::SummaryRow;

pub trait OrderSource {
    fn fetch(&self) -> Result<Vec<Order>, SourceError>;
}

/// Append-only destination for summary rows.
pub trait SummarySink {
    /// Appends `rows` after any rows already stored and returns how many were written.
    fn append(&self, rows: &[SummaryRow]) -> Result<usize, SinkError>;
}
