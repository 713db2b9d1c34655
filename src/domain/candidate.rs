use non_empty_string::NonEmptyString;

use crate::domain::NewCustomer;

/// Raw input for a new customer, as typed into the add form.
///
/// Nothing is trimmed or checked until [`Candidate::validate`] is called.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    /// The customer's name. Required.
    pub name: String,
    /// The customer's phone number.
    pub phone_number: String,
    /// The customer's address.
    pub address: String,
    /// The page number the customer is filed under.
    pub page_number: String,
}

/// Errors raised when a candidate cannot become a customer.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The name is empty once surrounding whitespace is removed.
    #[error("customer name must not be empty")]
    EmptyName,
}

impl Candidate {
    /// Start a candidate with the given name and no other details.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the phone number.
    #[must_use]
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    /// Set the address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Set the page number.
    #[must_use]
    pub fn with_page_number(mut self, page_number: impl Into<String>) -> Self {
        self.page_number = page_number.into();
        self
    }

    /// Trim every field and check that a name remains.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyName`] if the name is empty or whitespace-only.
    pub fn validate(&self) -> Result<NewCustomer, Error> {
        let name =
            NonEmptyString::new(self.name.trim().to_string()).map_err(|_| Error::EmptyName)?;

        Ok(NewCustomer::new(
            name,
            self.phone_number.trim(),
            self.address.trim(),
            self.page_number.trim(),
        ))
    }
}
