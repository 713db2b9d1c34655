use std::io::Write;

use anyhow::Context;
use customer_map::{Customer, Listing, Session};
use serde::Serialize;

use super::terminal::{Colorize, truncate};

/// Width of the row number column, including padding.
const ROW_NUMBER_WIDTH: usize = 5;

/// Renders the current listing as the list view.
///
/// `width` is the terminal width, if known; long names are shortened to fit.
pub fn render(session: &Session, width: Option<u16>, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", header(session).info())?;

    match session.listing() {
        Listing::NoCustomers => {
            writeln!(out, "\n  {}", "No customers yet".strong())?;
            writeln!(
                out,
                "  {}",
                "Use 'add' to add your first customer".dim()
            )?;
        }
        Listing::NoResults => {
            writeln!(out, "\n  {}", "No results found".strong())?;
            writeln!(out, "  {}", "Try a different search term".dim())?;
        }
        Listing::Rows(rows) => {
            for (index, customer) in rows.iter().enumerate() {
                writeln!(out, "{}", row(index + 1, customer, width))?;
            }
        }
    }

    Ok(())
}

fn header(session: &Session) -> String {
    let count = session.directory().len();
    let noun = if count == 1 { "customer" } else { "customers" };

    let mut header = format!("{count} {noun} · sorted {}", session.direction());
    if !session.search().trim().is_empty() {
        header.push_str(&format!(" · search \"{}\"", session.search()));
    }
    header
}

fn row(number: usize, customer: &Customer, width: Option<u16>) -> String {
    let prefix = format!("{number:>3}  [{}] ", customer.initial());
    let name = match width {
        Some(width) => {
            let available = usize::from(width)
                .saturating_sub(prefix.chars().count())
                .max(ROW_NUMBER_WIDTH);
            truncate(customer.name(), available)
        }
        None => customer.name().to_string(),
    };
    format!("{prefix}{name}")
}

#[derive(Debug, Serialize)]
struct SerializableRow<'a> {
    id: String,
    name: &'a str,
    phone_number: &'a str,
    address: &'a str,
    page_number: &'a str,
    created: String,
}

impl<'a> From<&'a Customer> for SerializableRow<'a> {
    fn from(customer: &'a Customer) -> Self {
        Self {
            id: customer.id().to_string(),
            name: customer.name(),
            phone_number: customer.phone_number(),
            address: customer.address(),
            page_number: customer.page_number(),
            created: customer.created().to_rfc3339(),
        }
    }
}

/// Renders the current listing as a JSON array.
pub fn render_json(session: &Session, out: &mut impl Write) -> anyhow::Result<()> {
    let listing = session.listing();
    let rows: Vec<SerializableRow> = listing.rows().iter().map(|&c| c.into()).collect();

    serde_json::to_writer_pretty(&mut *out, &rows).context("failed to render json output")?;
    writeln!(out)?;
    Ok(())
}
