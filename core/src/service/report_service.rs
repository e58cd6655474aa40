use anyhow::Result;
use chrono::NaiveDate;

use crate::model::order::Order;
use crate::period::parse_day;
use crate::repository::{OrderSource, SummarySink};
use crate::usecase::aggregate::{aggregate_with_report, Aggregation};

pub struct ReportService<S: OrderSource> {
    source: S,
}

impl<S: OrderSource> ReportService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Aggregates every order from the source, or only those created on `day`.
    pub fn summarize(&self, day: Option<NaiveDate>) -> Result<Aggregation> {
        let mut orders = self.source.fetch()?;
        if let Some(day) = day {
            orders.retain(|order| created_on(order, day));
        }
        Ok(aggregate_with_report(&orders)?)
    }

    /// Summarizes and appends the rows to `sink`; returns the rows appended.
    pub fn publish<K: SummarySink>(&self, sink: &K, day: Option<NaiveDate>) -> Result<usize> {
        let aggregation = self.summarize(day)?;
        Ok(sink.append(&aggregation.rows)?)
    }
}

// Orders with an unreadable timestamp are kept so aggregation rejects them.
fn created_on(order: &Order, day: NaiveDate) -> bool {
    match order.created_at.as_deref().and_then(parse_day) {
        Some(created) => created == day,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SinkError, SourceError};
    use crate::model::summary::{Segment, SummaryRow};
    use serde_json::json;
    use std::cell::RefCell;

    struct MockOrderSource {
        orders: Vec<Order>,
    }

    impl OrderSource for MockOrderSource {
        fn fetch(&self) -> Result<Vec<Order>, SourceError> {
            Ok(self.orders.clone())
        }
    }

    #[derive(Default)]
    struct MockSink {
        rows: RefCell<Vec<SummaryRow>>,
    }

    impl SummarySink for MockSink {
        fn append(&self, rows: &[SummaryRow]) -> Result<usize, SinkError> {
            self.rows.borrow_mut().extend_from_slice(rows);
            Ok(rows.len())
        }
    }

    fn order(created_at: Option<&str>, orders_count: u64) -> Order {
        serde_json::from_value(json!({
            "created_at": created_at,
            "customer": {"orders_count": orders_count},
            "total_price": "10.00",
            "line_items": [{"quantity": 1}]
        }))
        .unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_summarize_filters_by_day() {
        let source = MockOrderSource {
            orders: vec![
                order(Some("2024-06-01T10:00:00Z"), 1),
                order(Some("2024-06-02T10:00:00Z"), 1),
                order(Some("2024-06-02T11:00:00Z"), 6),
            ],
        };
        let service = ReportService::new(source);

        let all = service.summarize(None).unwrap();
        assert_eq!(all.rows.len(), 3);

        let one_day = service.summarize(Some(date(2024, 6, 2))).unwrap();
        assert_eq!(one_day.rows.len(), 2);
        assert!(one_day.rows.iter().all(|r| r.day == date(2024, 6, 2)));
        assert_eq!(one_day.rows[0].segment, Segment::New);
    }

    #[test]
    fn test_filter_keeps_unreadable_orders() {
        let source = MockOrderSource {
            orders: vec![order(Some("2024-06-02T10:00:00Z"), 1), order(None, 1)],
        };
        let service = ReportService::new(source);

        assert!(service.summarize(Some(date(2024, 6, 2))).is_err());
    }

    #[test]
    fn test_publish_appends_rows() {
        let source = MockOrderSource {
            orders: vec![
                order(Some("2024-06-01T10:00:00Z"), 1),
                order(Some("2024-06-01T12:00:00Z"), 2),
            ],
        };
        let service = ReportService::new(source);
        let sink = MockSink::default();

        assert_eq!(service.publish(&sink, None).unwrap(), 2);
        assert_eq!(service.publish(&sink, None).unwrap(), 2);
        assert_eq!(sink.rows.borrow().len(), 4);
    }
}
