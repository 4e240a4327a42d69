use std::fmt::Write;

use anyhow::Result;
use chrono::{DateTime, NaiveDateTime};
use dialoguer::console::Style;
use order_client::Order;
use prettytable::{
    format::{LinePosition, LineSeparator, TableFormat},
    row,
    Cell,
    Row,
    Table,
};

use crate::interactive::form::FormMode;

fn markdown_format() -> TableFormat {
    prettytable::format::FormatBuilder::new()
        .column_separator('|')
        .borders('|')
        .separator(LinePosition::Title, LineSeparator::new('-', '|', '|', '|'))
        .padding(1, 1)
        .build()
}

fn markdown_style(table: &mut Table) {
    table.set_format(markdown_format());
}

/// The slug that keys a status string to its badge style, e.g. `status-NEW`. The server owns the status vocabulary;
/// unknown slugs get a neutral style rather than an error.
pub fn badge_class(status: &str) -> String {
    format!("status-{status}")
}

fn badge_style(class: &str) -> Style {
    match class {
        "status-NEW" => Style::new().cyan(),
        "status-PROCESSED" => Style::new().green(),
        "status-CANCELLED" => Style::new().yellow(),
        "status-ERROR_JMS" => Style::new().red(),
        _ => Style::new().dim(),
    }
}

pub fn format_status_badge(status: Option<&str>) -> String {
    match status {
        None | Some("") => String::new(),
        Some(s) => badge_style(&badge_class(s)).apply_to(format!("[{s}]")).to_string(),
    }
}

/// Best-effort display form for server timestamps. Absent input renders as an empty string; values that parse render
/// as `YYYY-MM-DD HH:MM:SS`; anything else passes through verbatim. Total over arbitrary input.
///
/// The server sends offset date-times for creation and naive local date-times for processing, so both shapes parse.
pub fn format_timestamp(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return String::new();
    };
    if raw.is_empty() {
        return String::new();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    raw.to_string()
}

/// Render the order table, one row per order in server order. At most one row carries the edit marker: the one whose
/// id the form is currently targeting.
pub fn format_orders(orders: &[Order], mode: &FormMode) -> String {
    if orders.is_empty() {
        return "No orders".to_string();
    }
    let mut table = Table::new();
    table.set_titles(row!["", "ID", "Customer", "Product", "Qty", "Status", "Created At", "Processed At"]);
    orders.iter().for_each(|order| {
        let marker = if mode.editing_id() == Some(order.id) { "»" } else { "" };
        table.add_row(Row::new(vec![
            Cell::new(marker),
            Cell::new(&order.id.to_string()),
            Cell::new(&order.customer_name),
            Cell::new(&order.product_name),
            Cell::new(&order.quantity.to_string()),
            Cell::new(&format_status_badge(order.status.as_deref())),
            Cell::new(&format_timestamp(order.created_at.as_deref())),
            Cell::new(&format_timestamp(order.processed_at.as_deref())),
        ]));
    });
    markdown_style(&mut table);
    table.to_string()
}

/// Single-order detail card.
pub fn format_order(order: &Order) -> Result<String> {
    let mut f = String::new();
    writeln!(
        f,
        "Order #{id:<12} {badge}",
        id = order.id,
        badge = format_status_badge(order.status.as_deref())
    )?;
    writeln!(f, "-----------------------------------------------------------------------------")?;
    writeln!(f, "Customer:  {}", order.customer_name)?;
    writeln!(f, "Product:   {} x {}", order.product_name, order.quantity)?;
    writeln!(f, "Created:   {}", format_timestamp(order.created_at.as_deref()))?;
    writeln!(f, "Processed: {}", format_timestamp(order.processed_at.as_deref()))?;
    writeln!(f, "-----------------------------------------------------------------------------")?;
    Ok(f)
}
