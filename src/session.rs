use std::fmt;

use tracing::instrument;
use uuid::Uuid;

use crate::{Candidate, Config, Customer, Directory, Query, SortDirection};

/// The state of one customer directory session.
///
/// A session owns the [`Directory`] together with the current search text and
/// sort direction. The presentation layer holds the session and passes it to
/// whichever view needs it; nothing else has write access to the customers.
///
/// Listings borrow the session, so a listing can never be held across a
/// mutation. Every render recomputes it from the current state.
#[derive(Debug, Default, Clone)]
pub struct Session {
    directory: Directory,
    search: String,
    direction: SortDirection,
}

/// What the list view should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing<'a> {
    /// The directory is empty.
    NoCustomers,
    /// The directory has customers, but none match the search.
    NoResults,
    /// The matching customers, in display order.
    Rows(Vec<&'a Customer>),
}

impl<'a> Listing<'a> {
    /// The customers to display. Empty unless this is [`Listing::Rows`].
    #[must_use]
    pub fn rows(&self) -> &[&'a Customer] {
        match self {
            Self::Rows(rows) => rows,
            Self::NoCustomers | Self::NoResults => &[],
        }
    }
}

/// A transient message confirming a change to the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Short headline.
    pub title: String,
    /// One-sentence detail.
    pub description: String,
}

impl Notification {
    fn added(name: &str) -> Self {
        Self {
            title: "Customer added".to_string(),
            description: format!("{name} has been added successfully."),
        }
    }

    fn deleted() -> Self {
        Self {
            title: "Customer deleted".to_string(),
            description: "The customer has been removed.".to_string(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

impl Session {
    /// Starts an empty session sorted in the given direction.
    #[must_use]
    pub fn new(direction: SortDirection) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    /// Starts an empty session using the configured defaults.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_sort())
    }

    /// The customers in this session.
    #[must_use]
    pub const fn directory(&self) -> &Directory {
        &self.directory
    }

    /// The current search text.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// The current sort direction.
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Replaces the search text.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        tracing::debug!("Search text set to {:?}", self.search);
    }

    /// Clears the search text, so every customer is listed.
    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    /// Sets the sort direction.
    pub const fn set_sort(&mut self, direction: SortDirection) {
        self.direction = direction;
    }

    /// Reverses the sort direction, returning the new direction.
    pub const fn toggle_sort(&mut self) -> SortDirection {
        self.direction = self.direction.toggled();
        self.direction
    }

    /// The query described by the current search text and sort direction.
    #[must_use]
    pub fn query(&self) -> Query {
        Query::new(&self.search, self.direction)
    }

    /// Submits the add form.
    ///
    /// The candidate is trimmed and checked. If its name is blank the
    /// submission is ignored and `None` is returned; nothing is added and no
    /// message should be shown. Otherwise the customer is added and the
    /// success notification is returned.
    #[instrument(level = "debug", skip_all)]
    pub fn submit(&mut self, candidate: &Candidate) -> Option<Notification> {
        let details = match candidate.validate() {
            Ok(details) => details,
            Err(e) => {
                tracing::debug!("Ignoring submission: {e}");
                return None;
            }
        };

        let customer = self.directory.add(details);
        Some(Notification::added(customer.name()))
    }

    /// Removes a customer, as confirmed from the detail view.
    ///
    /// Returns the removal notification, or `None` if no customer has that
    /// identifier.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, id: Uuid) -> Option<Notification> {
        self.directory.delete(id).map(|_| Notification::deleted())
    }

    /// Computes what the list view should display right now.
    #[must_use]
    pub fn listing(&self) -> Listing<'_> {
        if self.directory.is_empty() {
            return Listing::NoCustomers;
        }

        let rows = self.directory.visible(&self.query());
        if rows.is_empty() {
            Listing::NoResults
        } else {
            Listing::Rows(rows)
        }
    }

    /// Selects a customer by its 1-based row number in the current listing.
    #[must_use]
    pub fn select(&self, row: usize) -> Option<&Customer> {
        let index = row.checked_sub(1)?;
        self.listing().rows().get(index).copied()
    }
}
