//! Configuration for the employee roster.
//!
//! The defaults are literal constants; a YAML file can override any subset
//! of them.
//!
//! # Example
//!
//! ```no_run
//! use employee_roster::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/roster.yaml").unwrap();
//! println!("Email domain: {}", config.config().email.domain);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_EMAIL_DOMAIN, DEFAULT_EMAIL_SEPARATOR, DEFAULT_ID_LENGTH, DEFAULT_PAY_GROUP_SEPARATOR,
    EmailPolicy, RosterConfig, default_raise_rate,
};
