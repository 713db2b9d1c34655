//! In-memory customer directory
//!
//! Customers are added through a form, listed with free-text search and name
//! ordering, and removed from a detail view. Everything lives in memory for
//! the lifetime of a single [`Session`].

pub mod domain;
pub use domain::{
    Candidate, CandidateError, Config, ConfigError, Customer, NewCustomer, Query, SortDirection,
};

/// The customer collection and its filtered, sorted projection.
pub mod directory;
pub use directory::Directory;

/// Session state shared by the add form, list view and detail view.
pub mod session;
pub use session::{Listing, Notification, Session};
