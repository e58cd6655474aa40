use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde_json::Value;
use tracing::{debug, warn};

use crate::model::order::{Lenient, NumericField, Order};
use crate::period::{period_ends, PeriodEnds};
use crate::segment::GroupKey;

/// Order fields that feed a summary total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OrderField {
    TotalPrice,
    TotalDiscounts,
    CurrentSubtotalPrice,
    ShippingAmount,
    TotalDuties,
    TotalTax,
    CurrentTotalPrice,
    LineItems,
    LineItemQuantity,
    CustomerOrdersCount,
}

impl OrderField {
    pub fn name(&self) -> &'static str {
        match self {
            OrderField::TotalPrice => "total_price",
            OrderField::TotalDiscounts => "total_discounts",
            OrderField::CurrentSubtotalPrice => "current_subtotal_price",
            OrderField::ShippingAmount => "total_shipping_price_set.shop_money.amount",
            OrderField::TotalDuties => "total_duties",
            OrderField::TotalTax => "total_tax",
            OrderField::CurrentTotalPrice => "current_total_price",
            OrderField::LineItems => "line_items",
            OrderField::LineItemQuantity => "line_items.quantity",
            OrderField::CustomerOrdersCount => "customer.orders_count",
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Counts of numeric fields that contributed zero instead of a value.
///
/// Missing fields are routine (duties are usually absent); unparseable ones
/// mean the totals under-count what the source actually charged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoercionReport {
    missing: BTreeMap<OrderField, u64>,
    unparseable: BTreeMap<OrderField, u64>,
}

impl CoercionReport {
    pub fn missing(&self, field: OrderField) -> u64 {
        self.missing.get(&field).copied().unwrap_or(0)
    }

    pub fn unparseable(&self, field: OrderField) -> u64 {
        self.unparseable.get(&field).copied().unwrap_or(0)
    }

    pub fn total_missing(&self) -> u64 {
        self.missing.values().sum()
    }

    pub fn total_unparseable(&self) -> u64 {
        self.unparseable.values().sum()
    }

    pub fn unparseable_fields(&self) -> impl Iterator<Item = (OrderField, u64)> + '_ {
        self.unparseable.iter().map(|(field, count)| (*field, *count))
    }

    fn record(&mut self, field: OrderField, value: &NumericField) {
        match value {
            NumericField::Value(_) => {}
            NumericField::Missing => {
                debug!(field = %field, "missing numeric field counted as 0");
                *self.missing.entry(field).or_default() += 1;
            }
            NumericField::Unparseable(raw) => {
                warn!(field = %field, value = %raw, "unparseable numeric field counted as 0");
                *self.unparseable.entry(field).or_default() += 1;
            }
        }
    }

    /// Reads `value`, records how it was coerced and returns its contribution.
    fn take(&mut self, field: OrderField, value: Option<&Value>) -> f64 {
        let read = NumericField::read(value);
        self.record(field, &read);
        read.or_zero()
    }
}

/// Running totals for one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotals {
    pub key: GroupKey,
    pub periods: PeriodEnds,
    pub orders: u64,
    pub gross_sales: f64,
    pub discounts: f64,
    pub net_sales: f64,
    pub shipping: f64,
    pub duties: f64,
    pub taxes: f64,
    pub total_sales: f64,
    pub item_quantity: i64,
}

impl GroupTotals {
    // Refund and adjustment data is not part of an order listing, so these
    // totals cannot be accumulated and stay zero on every row.
    pub const RETURNS: f64 = 0.0;
    pub const ADDITIONAL_CHARGES: f64 = 0.0;
    pub const RETURNED_QUANTITY: i64 = 0;

    pub fn new(key: GroupKey) -> Self {
        Self {
            key,
            periods: period_ends(key.day),
            orders: 0,
            gross_sales: 0.0,
            discounts: 0.0,
            net_sales: 0.0,
            shipping: 0.0,
            duties: 0.0,
            taxes: 0.0,
            total_sales: 0.0,
            item_quantity: 0,
        }
    }

    pub fn add_order(&mut self, order: &Order, report: &mut CoercionReport) {
        self.orders += 1;
        self.gross_sales += report.take(OrderField::TotalPrice, order.total_price.as_ref());
        self.discounts += report.take(OrderField::TotalDiscounts, order.total_discounts.as_ref());
        self.net_sales += report.take(OrderField::CurrentSubtotalPrice, order.current_subtotal_price.as_ref());
        self.shipping += report.take(OrderField::ShippingAmount, order.shipping_amount());
        self.duties += report.take(OrderField::TotalDuties, order.total_duties.as_ref());
        self.taxes += report.take(OrderField::TotalTax, order.total_tax.as_ref());
        self.total_sales += report.take(OrderField::CurrentTotalPrice, order.current_total_price.as_ref());
        self.item_quantity = self.item_quantity.saturating_add(item_quantity(order, report));
        // Segment is decided from the same count; record how it was read.
        report.record(OrderField::CustomerOrdersCount, &order.lifetime_orders());
    }
}

// Sums saturate at i64::MAX/MIN instead of overflowing.
fn item_quantity(order: &Order, report: &mut CoercionReport) -> i64 {
    if let Some(raw) = order.malformed_line_items() {
        report.record(OrderField::LineItems, &NumericField::Unparseable(raw.to_string()));
        return 0;
    }

    let mut qty: i64 = 0;
    for item in order.line_items() {
        let read = match item {
            Lenient::Parsed(item) => match NumericField::read(item.quantity.as_ref()) {
                NumericField::Value(v) if v.fract() != 0.0 => NumericField::Unparseable(v.to_string()),
                other => other,
            },
            Lenient::Malformed(raw) => NumericField::Unparseable(raw.to_string()),
        };
        report.record(OrderField::LineItemQuantity, &read);
        // `as` saturates out-of-range floats
        qty = qty.saturating_add(read.or_zero() as i64);
    }
    qty
}

/// Group totals for one aggregation run, kept in first-seen order.
#[derive(Debug, Default)]
pub struct OrderAccumulator {
    groups: Vec<GroupTotals>,
    slots: HashMap<GroupKey, usize>,
    coercions: CoercionReport,
}

impl OrderAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Totals for `key`, opened with zeroes and the day's period ends on first use.
    pub fn entry(&mut self, key: GroupKey) -> &mut GroupTotals {
        let slot = self.slot(key);
        &mut self.groups[slot]
    }

    pub fn fold(&mut self, key: GroupKey, order: &Order) {
        let slot = self.slot(key);
        self.groups[slot].add_order(order, &mut self.coercions);
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn coercions(&self) -> &CoercionReport {
        &self.coercions
    }

    pub fn finish(self) -> (Vec<GroupTotals>, CoercionReport) {
        (self.groups, self.coercions)
    }

    fn slot(&mut self, key: GroupKey) -> usize {
        if let Some(&slot) = self.slots.get(&key) {
            return slot;
        }
        debug!(day = %key.day, segment = %key.segment, "opening summary group");
        let slot = self.groups.len();
        self.groups.push(GroupTotals::new(key));
        self.slots.insert(key, slot);
        slot
    }
}
