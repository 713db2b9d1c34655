use std::io::{self, Write};

use customer_map::Customer;

use super::terminal::Colorize;

/// Renders the detail view of a single customer.
pub fn render(customer: &Customer, show_created: bool, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "\n[{}] {}\n",
        customer.initial(),
        customer.name().strong()
    )?;

    field(out, "Phone Number", customer.phone_number())?;
    field(out, "Address", customer.address())?;
    field(out, "Page Number", customer.page_number())?;

    if show_created {
        let created = customer.created().format("%Y-%m-%d %H:%M:%S UTC").to_string();
        field(out, "Added", &created)?;
    }

    writeln!(out)
}

fn field(out: &mut impl Write, label: &str, value: &str) -> io::Result<()> {
    let label = format!("{label:<13}");
    writeln!(out, "  {} {value}", label.dim())
}
