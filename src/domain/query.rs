use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::Customer;

/// The direction in which customers are listed by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// A to Z
    #[default]
    Ascending,
    /// Z to A
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Whether this is [`SortDirection::Ascending`].
    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }

    /// Orient an ascending comparison result in this direction.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "A-Z"),
            Self::Descending => write!(f, "Z-A"),
        }
    }
}

/// Error returned when parsing an unrecognised sort direction.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid sort direction '{0}': expected 'asc' or 'desc'")]
pub struct InvalidDirectionError(String);

impl FromStr for SortDirection {
    type Err = InvalidDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" | "a-z" => Ok(Self::Ascending),
            "desc" | "descending" | "z-a" => Ok(Self::Descending),
            _ => Err(InvalidDirectionError(s.to_string())),
        }
    }
}

/// The parameters of a directory listing: free-text search and sort
/// direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Lower-cased search text, or `None` when the search is blank.
    needle: Option<String>,
    direction: SortDirection,
}

impl Query {
    /// Construct a new [`Query`].
    ///
    /// Search text made only of whitespace matches every customer.
    #[must_use]
    pub fn new(text: &str, direction: SortDirection) -> Self {
        let needle = (!text.trim().is_empty()).then(|| text.to_lowercase());
        Self { needle, direction }
    }

    /// A query matching every customer, sorted A to Z.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// The sort direction.
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Checks whether a customer matches the search text.
    ///
    /// A customer matches if the search text appears, ignoring case, anywhere
    /// in its name, phone number, address or page number.
    #[must_use]
    pub fn matches(&self, customer: &Customer) -> bool {
        self.needle.as_deref().is_none_or(|needle| {
            customer
                .fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use test_case::test_case;

    use super::{Query, SortDirection};
    use crate::{Candidate, domain::Customer};

    fn alice() -> Customer {
        let details = Candidate::new("Alice")
            .with_phone_number("555-1234")
            .with_address("1 Main Street")
            .with_page_number("P12")
            .validate()
            .unwrap();
        Customer::new(details)
    }

    #[test_case("", true; "empty")]
    #[test_case("   ", true; "whitespace only")]
    #[test_case("ALICE", true; "name ignoring case")]
    #[test_case("lic", true; "name substring")]
    #[test_case("1234", true; "phone")]
    #[test_case("main st", true; "address ignoring case")]
    #[test_case("p1", true; "page number")]
    #[test_case("bob", false; "no field")]
    #[test_case(" alice", false; "untrimmed text must match as typed")]
    #[test_case("alice 555", false; "not tokenised across fields")]
    fn matching(text: &str, expected: bool) {
        let query = Query::new(text, SortDirection::Ascending);
        assert_eq!(query.matches(&alice()), expected);
    }

    #[test]
    fn toggling_direction_round_trips() {
        assert_eq!(
            SortDirection::Ascending.toggled(),
            SortDirection::Descending
        );
        assert_eq!(
            SortDirection::Descending.toggled(),
            SortDirection::Ascending
        );
    }

    #[test]
    fn descending_reverses_ordering() {
        assert_eq!(
            SortDirection::Descending.apply(Ordering::Less),
            Ordering::Greater
        );
        assert_eq!(
            SortDirection::Ascending.apply(Ordering::Less),
            Ordering::Less
        );
    }

    #[test_case("asc", SortDirection::Ascending)]
    #[test_case("Descending", SortDirection::Descending)]
    #[test_case("z-a", SortDirection::Descending)]
    fn parse_direction(input: &str, expected: SortDirection) {
        assert_eq!(input.parse::<SortDirection>().unwrap(), expected);
    }

    #[test]
    fn parse_invalid_direction() {
        assert!("sideways".parse::<SortDirection>().is_err());
    }
}
