use tracing::info;

use crate::error::AggregateError;
use crate::model::order::Order;
use crate::model::summary::SummaryRow;
use crate::segment::group_key;
use crate::service::accumulator::{CoercionReport, OrderAccumulator};
use crate::service::formatter::format_row;

/// Rows of one aggregation run and the numeric fields it had to zero out.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregation {
    pub rows: Vec<SummaryRow>,
    pub coercions: CoercionReport,
}

pub fn aggregate(orders: &[Order]) -> Result<Vec<SummaryRow>, AggregateError> {
    aggregate_with_report(orders).map(|aggregation| aggregation.rows)
}

/// Folds `orders` into one row per (day, segment), newest day first.
///
/// Rows of the same day keep the order in which their first order appeared.
/// An order without a readable `created_at` fails the whole call.
pub fn aggregate_with_report(orders: &[Order]) -> Result<Aggregation, AggregateError> {
    let mut accumulator = OrderAccumulator::new();

    for (index, order) in orders.iter().enumerate() {
        let key = group_key(order)
            .map_err(|source| AggregateError::MalformedGroupingInput { index, source })?;
        accumulator.fold(key, order);
    }

    let (groups, coercions) = accumulator.finish();
    let mut rows: Vec<SummaryRow> = groups.iter().map(format_row).collect();
    // stable: equal days keep fold order
    rows.sort_by(|a, b| b.day.cmp(&a.day));

    info!(
        orders = orders.len(),
        rows = rows.len(),
        missing_fields = coercions.total_missing(),
        unparseable_fields = coercions.total_unparseable(),
        "aggregated orders"
    );

    Ok(Aggregation { rows, coercions })
}
