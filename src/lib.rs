//! Employee records with derived identifiers and emails, pay raises, and
//! text reporting.
//!
//! Records are built from a [`models::NewEmployee`] plus an injected
//! [`ids::IdGenerator`]; the identifier and email are derived during
//! construction and never supplied by callers.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod ids;
pub mod models;
pub mod report;
pub mod roster;
