//! Configuration types for the roster.
//!
//! Every field has a literal default, so an empty document (or no document
//! at all) yields the canonical policy.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{RosterError, RosterResult};

/// Default mail domain appended to every derived address.
pub const DEFAULT_EMAIL_DOMAIN: &str = "company.com";

/// Default separator placed between lower-cased name tokens.
pub const DEFAULT_EMAIL_SEPARATOR: &str = ".";

/// Default number of characters in a generated identifier.
pub const DEFAULT_ID_LENGTH: usize = 8;

/// Default digit-group separator used when printing pay amounts.
pub const DEFAULT_PAY_GROUP_SEPARATOR: char = ',';

/// Returns the company-wide raise rate (4%).
pub fn default_raise_rate() -> Decimal {
    Decimal::new(104, 2)
}

/// How an email address is derived from an employee's name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmailPolicy {
    /// The domain after the `@`, e.g. "company.com".
    pub domain: String,
    /// The text joining name tokens in the local part.
    pub separator: String,
}

impl Default for EmailPolicy {
    fn default() -> Self {
        Self {
            domain: DEFAULT_EMAIL_DOMAIN.to_string(),
            separator: DEFAULT_EMAIL_SEPARATOR.to_string(),
        }
    }
}

/// Settings shared by construction, raises and reporting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Email derivation policy.
    pub email: EmailPolicy,
    /// Multiplier applied by a raise.
    pub raise_rate: Decimal,
    /// Length of identifiers produced by the random generator.
    pub id_length: usize,
    /// Digit-group separator for pay amounts.
    pub pay_group_separator: char,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            email: EmailPolicy::default(),
            raise_rate: default_raise_rate(),
            id_length: DEFAULT_ID_LENGTH,
            pay_group_separator: DEFAULT_PAY_GROUP_SEPARATOR,
        }
    }
}

impl RosterConfig {
    /// Checks the values the derivation rules depend on.
    ///
    /// An empty domain or a zero identifier length would let construction
    /// produce records whose derived fields are blank.
    pub fn validate(&self) -> RosterResult<()> {
        if self.email.domain.trim().is_empty() {
            return Err(RosterError::InvalidConfig {
                field: "email.domain".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.email.domain.contains('@') || self.email.separator.contains('@') {
            return Err(RosterError::InvalidConfig {
                field: "email".to_string(),
                message: "domain and separator must not contain '@'".to_string(),
            });
        }
        if self.id_length == 0 {
            return Err(RosterError::InvalidConfig {
                field: "id_length".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
