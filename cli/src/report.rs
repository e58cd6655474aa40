use ordertally_core::{CoercionReport, SummaryRow};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct SummaryTableRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "New_or_re")]
    segment: String,
    #[tabled(rename = "Orders")]
    orders: String,
    #[tabled(rename = "Gross_sale")]
    gross_sales: String,
    #[tabled(rename = "Discounts")]
    discounts: String,
    #[tabled(rename = "Returns")]
    returns: String,
    #[tabled(rename = "Net_sales")]
    net_sales: String,
    #[tabled(rename = "Shipping_")]
    shipping: String,
    #[tabled(rename = "Duties")]
    duties: String,
    #[tabled(rename = "Additional_")]
    additional_charges: String,
    #[tabled(rename = "Taxes")]
    taxes: String,
    #[tabled(rename = "Total_sales")]
    total_sales: String,
    #[tabled(rename = "Quantity_c")]
    item_quantity: String,
    #[tabled(rename = "Quantity_r")]
    returned_quantity: String,
    #[tabled(rename = "Week_End")]
    week_end: String,
    #[tabled(rename = "Month_End")]
    month_end: String,
}

impl From<&SummaryRow> for SummaryTableRow {
    fn from(row: &SummaryRow) -> Self {
        let [
            day,
            segment,
            orders,
            gross_sales,
            discounts,
            returns,
            net_sales,
            shipping,
            duties,
            additional_charges,
            taxes,
            total_sales,
            item_quantity,
            returned_quantity,
            week_end,
            month_end,
        ] = row.cells();
        Self {
            day,
            segment,
            orders,
            gross_sales,
            discounts,
            returns,
            net_sales,
            shipping,
            duties,
            additional_charges,
            taxes,
            total_sales,
            item_quantity,
            returned_quantity,
            week_end,
            month_end,
        }
    }
}

pub fn print_rows(rows: &[SummaryRow]) {
    if rows.is_empty() {
        println!("No orders found.");
        return;
    }

    let mut table = Table::new(rows.iter().map(SummaryTableRow::from));
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("{}", table);
}

/// Warns on stderr when unparseable fields were counted as zero.
pub fn print_coercions(report: &CoercionReport) {
    if report.total_unparseable() == 0 {
        return;
    }
    eprintln!(
        "Warning: {} numeric field(s) could not be parsed and were counted as 0:",
        report.total_unparseable()
    );
    for (field, count) in report.unparseable_fields() {
        eprintln!("  {:<44} {}", field, count);
    }
}
