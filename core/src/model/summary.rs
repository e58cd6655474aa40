use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    New,
    Returning,
}

impl Segment {
    pub fn label(&self) -> &'static str {
        match self {
            Segment::New => "New",
            Segment::Returning => "Returning",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One reporting row: every order of one day and one customer segment.
///
/// The serialized keys are the sink's column headers, in column order.
/// `returns`, `additional_charges` and `returned_quantity` have no data
/// source yet (refunds and adjustments are not fetched) and are always zero.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SummaryRow {
    #[serde(rename = "Day")]
    pub day: NaiveDate,
    #[serde(rename = "New_or_re")]
    pub segment: Segment,
    #[serde(rename = "Orders")]
    pub orders: u64,
    #[serde(rename = "Gross_sale")]
    pub gross_sales: f64,
    #[serde(rename = "Discounts")]
    pub discounts: f64,
    #[serde(rename = "Returns")]
    pub returns: f64,
    #[serde(rename = "Net_sales")]
    pub net_sales: f64,
    #[serde(rename = "Shipping_")]
    pub shipping: f64,
    #[serde(rename = "Duties")]
    pub duties: f64,
    #[serde(rename = "Additional_")]
    pub additional_charges: f64,
    #[serde(rename = "Taxes")]
    pub taxes: f64,
    #[serde(rename = "Total_sales")]
    pub total_sales: f64,
    #[serde(rename = "Quantity_c")]
    pub item_quantity: i64,
    #[serde(rename = "Quantity_r")]
    pub returned_quantity: i64,
    #[serde(rename = "Week_End")]
    pub week_end: NaiveDate,
    #[serde(rename = "Month_End")]
    pub month_end: NaiveDate,
}

impl SummaryRow {
    pub const HEADERS: [&'static str; 16] = [
        "Day",
        "New_or_re",
        "Orders",
        "Gross_sale",
        "Discounts",
        "Returns",
        "Net_sales",
        "Shipping_",
        "Duties",
        "Additional_",
        "Taxes",
        "Total_sales",
        "Quantity_c",
        "Quantity_r",
        "Week_End",
        "Month_End",
    ];

    /// Cell values in `HEADERS` order, money rendered with two decimals.
    pub fn cells(&self) -> [String; 16] {
        let money = |v: f64| format!("{:.2}", v);
        [
            self.day.format("%Y-%m-%d").to_string(),
            self.segment.to_string(),
            self.orders.to_string(),
            money(self.gross_sales),
            money(self.discounts),
            money(self.returns),
            money(self.net_sales),
            money(self.shipping),
            money(self.duties),
            money(self.additional_charges),
            money(self.taxes),
            money(self.total_sales),
            self.item_quantity.to_string(),
            self.returned_quantity.to_string(),
            self.week_end.format("%Y-%m-%d").to_string(),
            self.month_end.format("%Y-%m-%d").to_string(),
        ]
    }
}
