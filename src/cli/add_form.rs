//! The add-customer form.

use customer_map::Candidate;

use super::prompt::Prompter;

/// Field labels, in the order they are asked for.
pub const LABELS: [&str; 4] = ["Name *", "Phone Number", "Address", "Page Number"];

/// Separator between fields when the form is filled in on one line.
const SEPARATOR: char = '|';

/// Errors raised when parsing an inline form.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    /// More fields than the form has.
    #[error("expected at most {max} fields separated by '|', got {0}", max = LABELS.len())]
    TooManyFields(usize),
}

/// Parses a form filled in on one line: `name | phone | address | page`.
///
/// Trailing fields may be omitted. Fields are not trimmed here; that happens
/// when the candidate is submitted.
pub fn parse_inline(input: &str) -> Result<Candidate, FormError> {
    let fields: Vec<&str> = input.split(SEPARATOR).collect();
    if fields.len() > LABELS.len() {
        return Err(FormError::TooManyFields(fields.len()));
    }

    let field = |index: usize| fields.get(index).copied().unwrap_or_default();

    Ok(Candidate::new(field(0))
        .with_phone_number(field(1))
        .with_address(field(2))
        .with_page_number(field(3)))
}

/// Asks for each field in turn.
pub fn fill(prompter: &mut impl Prompter) -> anyhow::Result<Candidate> {
    let [name, phone, address, page] = LABELS;

    let mut candidate = Candidate::default();
    candidate.name = prompter.text(name)?;
    candidate.phone_number = prompter.text(phone)?;
    candidate.address = prompter.text(address)?;
    candidate.page_number = prompter.text(page)?;

    Ok(candidate)
}
