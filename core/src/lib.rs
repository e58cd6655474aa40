pub mod config;
pub mod error;
pub mod model;
pub mod period;
pub mod repository;
pub mod segment;
pub mod service;
pub mod usecase;

pub use config::Config;
pub use error::{AggregateError, ConfigError, SinkError, SourceError, TimestampError};
pub use model::order::{Customer, Lenient, LineItem, NumericField, Order};
pub use model::summary::{Segment, SummaryRow};
pub use period::{parse_day, period_ends, resolve_day, PeriodEnds};
pub use repository::{FileOrderSource, FileSummarySink, OrderSource, SummarySink};
pub use segment::{classify, group_key, GroupKey};
pub use service::accumulator::{CoercionReport, GroupTotals, OrderAccumulator, OrderField};
pub use service::report_service::ReportService;
pub use usecase::aggregate::{aggregate, aggregate_with_report, Aggregation};
