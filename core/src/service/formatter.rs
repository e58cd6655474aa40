use crate::model::summary::SummaryRow;
use crate::service::accumulator::GroupTotals;

/// Projects finished group totals onto the sink's row shape.
pub fn format_row(totals: &GroupTotals) -> SummaryRow {
    SummaryRow {
        day: totals.key.day,
        segment: totals.key.segment,
        orders: totals.orders,
        gross_sales: totals.gross_sales,
        discounts: totals.discounts,
        returns: GroupTotals::RETURNS,
        net_sales: totals.net_sales,
        shipping: totals.shipping,
        duties: totals.duties,
        additional_charges: GroupTotals::ADDITIONAL_CHARGES,
        taxes: totals.taxes,
        total_sales: totals.total_sales,
        item_quantity: totals.item_quantity,
        returned_quantity: GroupTotals::RETURNED_QUANTITY,
        week_end: totals.periods.week_end,
        month_end: totals.periods.month_end,
    }
}

impl From<&GroupTotals> for SummaryRow {
    fn from(totals: &GroupTotals) -> Self {
        format_row(totals)
    }
}
