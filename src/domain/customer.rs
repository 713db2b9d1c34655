use chrono::{DateTime, Utc};
use non_empty_string::NonEmptyString;
use uuid::Uuid;

/// A customer held in the directory.
///
/// Customers are value entities. Once created they are never edited; they
/// are only ever added to or removed from a [`Directory`](crate::Directory).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// The user-supplied contact details.
    pub(crate) details: NewCustomer,
    /// Identity and creation time, assigned by the directory.
    pub(crate) metadata: Metadata,
}

/// Customer metadata.
///
/// Assigned once, when the customer is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Metadata {
    /// Globally unique, never reused identifier
    pub(crate) id: Uuid,
    /// Timestamp recording when the customer was added.
    pub(crate) created: DateTime<Utc>,
}

/// The contact details of a customer that has not yet been added.
///
/// The name is guaranteed to be non-empty. Callers are expected to have
/// trimmed all fields already; see [`Candidate`](crate::Candidate) for the
/// form-level validation that produces these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    name: NonEmptyString,
    phone_number: String,
    address: String,
    page_number: String,
}

impl NewCustomer {
    /// Construct a new [`NewCustomer`].
    ///
    /// Fields are stored exactly as given.
    #[must_use]
    pub fn new(
        name: NonEmptyString,
        phone_number: impl Into<String>,
        address: impl Into<String>,
        page_number: impl Into<String>,
    ) -> Self {
        Self {
            name,
            phone_number: phone_number.into(),
            address: address.into(),
            page_number: page_number.into(),
        }
    }

    /// The customer's name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The customer's phone number. May be empty.
    #[must_use]
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// The customer's address. May be empty.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The page number the customer is filed under. May be empty.
    #[must_use]
    pub fn page_number(&self) -> &str {
        &self.page_number
    }
}

impl Customer {
    /// Construct a new [`Customer`] from its details.
    ///
    /// A new UUID is automatically generated.
    #[must_use]
    pub(crate) fn new(details: NewCustomer) -> Self {
        let metadata = Metadata {
            id: Uuid::new_v4(),
            created: Utc::now(),
        };

        Self { details, metadata }
    }

    /// The unique, stable identifier of this customer
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.metadata.id
    }

    /// When the customer was added
    #[must_use]
    pub const fn created(&self) -> DateTime<Utc> {
        self.metadata.created
    }

    /// The customer's name. Never empty.
    #[must_use]
    pub fn name(&self) -> &str {
        self.details.name()
    }

    /// The customer's phone number.
    #[must_use]
    pub fn phone_number(&self) -> &str {
        self.details.phone_number()
    }

    /// The customer's address.
    #[must_use]
    pub fn address(&self) -> &str {
        self.details.address()
    }

    /// The page number the customer is filed under.
    #[must_use]
    pub fn page_number(&self) -> &str {
        self.details.page_number()
    }

    /// The searchable text fields, in display order.
    #[must_use]
    pub fn fields(&self) -> [&str; 4] {
        [
            self.name(),
            self.phone_number(),
            self.address(),
            self.page_number(),
        ]
    }

    /// The glyph shown next to the customer in listings.
    ///
    /// This is the upper-cased first character of the name. Some characters
    /// upper-case to more than one character (e.g. 'ß' becomes "SS").
    #[must_use]
    pub fn initial(&self) -> String {
        self.name()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}
