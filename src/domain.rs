//! Domain models for the customer directory.
//!
//! This module contains the customer record, the form input it is created
//! from, the listing query and session configuration.

/// Customer records.
pub mod customer;
pub use customer::{Customer, NewCustomer};

/// Raw form input and its validation.
pub mod candidate;
pub use candidate::{Candidate, Error as CandidateError};

mod config;
pub use config::{Config, ConfigError};

mod query;
pub use query::{InvalidDirectionError, Query, SortDirection};
