//! Employee model and related types.
//!
//! An [`Employee`] is one record shape shared by every role, plus an
//! [`EmployeeKind`] carrying the state only some roles have. The identifier
//! and email are derived during [`Employee::new`] and cannot be set by
//! callers afterwards.

use getset::{CopyGetters, Getters, Setters};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculation::{RaiseResult, apply_raise, derive_email};
use crate::config::EmailPolicy;
use crate::error::{RosterError, RosterResult};
use crate::ids::IdGenerator;

use super::Role;

/// The caller-supplied fields of a new employee.
///
/// # Examples
///
/// ```
/// use employee_roster::models::{NewEmployee, Role};
///
/// let json = r#"{"name": "Mary Smith", "age": 30, "pay_amount": 50000, "role": "worker"}"#;
/// let new: NewEmployee = serde_json::from_str(json).unwrap();
/// assert_eq!(new, NewEmployee::new("Mary Smith", 30, 50_000, Role::Worker));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// Full name; must contain at least one word.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Yearly pay in whole currency units.
    pub pay_amount: i64,
    /// The role the employee is hired into.
    pub role: Role,
}

impl NewEmployee {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, age: u32, pay_amount: i64, role: Role) -> Self {
        Self {
            name: name.into(),
            age,
            pay_amount,
            role,
        }
    }
}

/// State specific to each role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum EmployeeKind {
    /// A worker has no extra state.
    Worker,
    /// An intern has no extra state.
    Intern,
    /// A developer and the languages they program in.
    Developer {
        /// Language names in insertion order, without duplicates.
        languages: Vec<String>,
    },
    /// A manager and the people they supervise.
    Manager {
        /// Supervised employee names in insertion order, without duplicates.
        managed_employees: Vec<String>,
    },
}

impl EmployeeKind {
    /// Creates the variant for `role` with empty collections.
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Worker => EmployeeKind::Worker,
            Role::Intern => EmployeeKind::Intern,
            Role::Developer => EmployeeKind::Developer {
                languages: Vec::new(),
            },
            Role::Manager => EmployeeKind::Manager {
                managed_employees: Vec::new(),
            },
        }
    }

    /// Returns the role this variant represents.
    pub fn role(&self) -> Role {
        match self {
            EmployeeKind::Worker => Role::Worker,
            EmployeeKind::Intern => Role::Intern,
            EmployeeKind::Developer { .. } => Role::Developer,
            EmployeeKind::Manager { .. } => Role::Manager,
        }
    }
}

/// A fully constructed employee record.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters, Setters, Serialize)]
pub struct Employee {
    /// The generated identifier.
    #[getset(get = "pub")]
    id: String,
    /// The employee's full name.
    #[getset(get = "pub")]
    name: String,
    /// The employee's age.
    #[getset(get_copy = "pub")]
    age: u32,
    /// The current pay amount.
    #[getset(get_copy = "pub", set = "pub(crate)")]
    pay_amount: i64,
    /// The derived email address.
    #[getset(get = "pub")]
    email: String,
    /// The role-specific state.
    #[getset(get = "pub")]
    #[serde(flatten)]
    kind: EmployeeKind,
}

impl Employee {
    /// Constructs an employee, deriving its identifier and email.
    ///
    /// Construction is all-or-nothing: on error no record exists. The name
    /// is checked before an identifier is drawn, so a rejected name leaves
    /// the generator untouched.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmployee` when the name has no words, contains `@`,
    /// or the generator returns an empty identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_roster::config::EmailPolicy;
    /// use employee_roster::ids::SequentialIdGenerator;
    /// use employee_roster::models::{Employee, NewEmployee, Role};
    ///
    /// let mut ids = SequentialIdGenerator::new("EMP");
    /// let mary = Employee::new(
    ///     NewEmployee::new("Mary Smith", 30, 50_000, Role::Worker),
    ///     &mut ids,
    ///     &EmailPolicy::default(),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(mary.id(), "EMP1");
    /// assert_eq!(mary.email(), "mary.smith@company.com");
    /// ```
    pub fn new(
        new: NewEmployee,
        ids: &mut dyn IdGenerator,
        email_policy: &EmailPolicy,
    ) -> RosterResult<Self> {
        let email = derive_email(&new.name, email_policy).inspect_err(|err| {
            warn!(name = %new.name, error = %err, "Rejected employee");
        })?;

        let id = ids.next_id();
        if id.is_empty() {
            return Err(RosterError::InvalidEmployee {
                field: "id".to_string(),
                message: "identifier generator returned an empty identifier".to_string(),
            });
        }

        debug!(id = %id, email = %email, role = %new.role, "Constructed employee");

        Ok(Self {
            id,
            name: new.name,
            age: new.age,
            pay_amount: new.pay_amount,
            email,
            kind: EmployeeKind::for_role(new.role),
        })
    }

    /// Seeds a developer's languages, skipping duplicates.
    pub fn with_languages<I, S>(mut self, languages: I) -> RosterResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for language in languages {
            self.add_language(language.as_ref())?;
        }
        Ok(self)
    }

    /// Seeds a manager's supervised employees, skipping duplicates.
    pub fn with_managed_employees<I, S>(mut self, names: I) -> RosterResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.add_managed_employee(name.as_ref())?;
        }
        Ok(self)
    }

    /// Returns the employee's role.
    pub fn role(&self) -> Role {
        self.kind.role()
    }

    /// Returns the languages of a developer, or `None` for other roles.
    pub fn languages(&self) -> Option<&[String]> {
        match &self.kind {
            EmployeeKind::Developer { languages } => Some(languages),
            _ => None,
        }
    }

    /// Returns the supervised names of a manager, or `None` for other roles.
    pub fn managed_employees(&self) -> Option<&[String]> {
        match &self.kind {
            EmployeeKind::Manager { managed_employees } => Some(managed_employees),
            _ => None,
        }
    }

    /// Raises the stored pay by `rate`. Repeated calls compound.
    ///
    /// On error the stored pay is left unchanged.
    pub fn apply_raise(&mut self, rate: Decimal) -> RosterResult<RaiseResult> {
        let result = apply_raise(self.pay_amount, rate)?;
        debug!(id = %self.id, reasoning = %result.reasoning, "Applied raise");
        self.set_pay_amount(result.new_pay);
        Ok(result)
    }

    /// Adds a language to a developer. Returns `false` if already present.
    ///
    /// # Errors
    ///
    /// Returns `VariantMismatch` when the employee is not a developer.
    pub fn add_language(&mut self, language: &str) -> RosterResult<bool> {
        let role = self.role();
        match &mut self.kind {
            EmployeeKind::Developer { languages } => Ok(push_unique(languages, language)),
            _ => Err(RosterError::VariantMismatch {
                operation: "add language".to_string(),
                role,
            }),
        }
    }

    /// Adds a supervised employee to a manager. Returns `false` if already present.
    ///
    /// The name is not checked against any existing record.
    ///
    /// # Errors
    ///
    /// Returns `VariantMismatch` when the employee is not a manager.
    pub fn add_managed_employee(&mut self, name: &str) -> RosterResult<bool> {
        let role = self.role();
        match &mut self.kind {
            EmployeeKind::Manager { managed_employees } => {
                Ok(push_unique(managed_employees, name))
            }
            _ => Err(RosterError::VariantMismatch {
                operation: "add managed employee".to_string(),
                role,
            }),
        }
    }
}

fn push_unique(items: &mut Vec<String>, item: &str) -> bool {
    if items.iter().any(|existing| existing == item) {
        return false;
    }
    items.push(item.to_string());
    true
}
