//! Derivations and pay calculations.
//!
//! This module holds the pure functions behind record construction (email
//! derivation) and the raise operation.

mod email;
mod raise;

pub use email::derive_email;
pub use raise::{RaiseResult, apply_raise};
