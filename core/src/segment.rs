use chrono::NaiveDate;

use crate::error::TimestampError;
use crate::model::order::Order;
use crate::model::summary::Segment;
use crate::period::parse_day;

/// Identifies one summary row: all orders created on `day` by customers of `segment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub day: NaiveDate,
    pub segment: Segment,
}

/// A customer with more than one lifetime order is returning. No customer,
/// no count, or an unreadable count all mean a new customer.
pub fn classify(order: &Order) -> Segment {
    match order.lifetime_orders().value() {
        Some(count) if count > 1.0 => Segment::Returning,
        _ => Segment::New,
    }
}

pub fn group_key(order: &Order) -> Result<GroupKey, TimestampError> {
    let created_at = order.created_at.as_deref().ok_or(TimestampError::Missing)?;
    let day = parse_day(created_at).ok_or_else(|| TimestampError::Invalid(created_at.to_string()))?;

    Ok(GroupKey {
        day,
        segment: classify(order),
    })
}
