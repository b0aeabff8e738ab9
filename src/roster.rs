//! A collection of employee records.
//!
//! [`Roster`] owns its records and the [`RosterConfig`] used to build and
//! report on them. [`Roster::sample`] builds the fixed demonstration roster
//! printed by the binary.

use tracing::{debug, info};

use crate::calculation::{RaiseResult, apply_raise};
use crate::config::RosterConfig;
use crate::error::RosterResult;
use crate::ids::IdGenerator;
use crate::models::{Employee, NewEmployee, Role};
use crate::report::introduce;

/// An ordered set of employees sharing one configuration.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<Employee>,
    config: RosterConfig,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new(config: RosterConfig) -> Self {
        Self {
            employees: Vec::new(),
            config,
        }
    }

    /// Returns the roster configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Returns the records in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the roster holds no records.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Constructs an employee with this roster's email policy and adds it.
    pub fn hire(
        &mut self,
        new: NewEmployee,
        ids: &mut dyn IdGenerator,
    ) -> RosterResult<&mut Employee> {
        let employee = Employee::new(new, ids, &self.config.email)?;
        Ok(self.push(employee))
    }

    /// Adds an already-constructed employee.
    pub fn push(&mut self, employee: Employee) -> &mut Employee {
        self.employees.push(employee);
        let last = self.employees.len() - 1;
        &mut self.employees[last]
    }

    /// Returns every record ordered by age, youngest first.
    ///
    /// Employees of equal age keep their insertion order.
    pub fn sorted_by_age(&self) -> Vec<&Employee> {
        let mut sorted: Vec<&Employee> = self.employees.iter().collect();
        sorted.sort_by_key(|employee| employee.age());
        sorted
    }

    /// Returns the records holding `role`, in insertion order.
    pub fn by_role(&self, role: Role) -> Vec<&Employee> {
        self.employees
            .iter()
            .filter(|employee| employee.role() == role)
            .collect()
    }

    /// Finds the first record with exactly this name.
    pub fn find_by_name(&self, name: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.name() == name)
    }

    /// Mutable variant of [`Roster::find_by_name`].
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut Employee> {
        self.employees
            .iter_mut()
            .find(|employee| employee.name() == name)
    }

    /// Gives every employee one raise at the configured rate.
    ///
    /// All raises are computed before any pay is stored, so a failure leaves
    /// every employee's pay unchanged.
    pub fn apply_raise_to_all(&mut self) -> RosterResult<Vec<RaiseResult>> {
        let rate = self.config.raise_rate;
        let results = self
            .employees
            .iter()
            .map(|employee| apply_raise(employee.pay_amount(), rate))
            .collect::<RosterResult<Vec<_>>>()?;
        for (employee, result) in self.employees.iter_mut().zip(&results) {
            employee.set_pay_amount(result.new_pay);
        }
        info!(count = results.len(), rate = %rate, "Applied raises");
        Ok(results)
    }

    /// Renders every introduction, grouped by role and sorted by age.
    ///
    /// Each introduction is followed by an empty line, and non-empty role
    /// groups are separated by one more.
    pub fn report(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for role in Role::ALL {
            let mut group = self.by_role(role);
            if group.is_empty() {
                continue;
            }
            if !lines.is_empty() {
                lines.push(String::new());
            }
            group.sort_by_key(|employee| employee.age());
            for employee in group {
                lines.extend(introduce(employee, &self.config));
                lines.push(String::new());
            }
        }
        lines
    }

    /// Builds the demonstration roster: three workers, three interns, two
    /// developers and two managers.
    pub fn sample(ids: &mut dyn IdGenerator, config: RosterConfig) -> RosterResult<Self> {
        let mut roster = Self::new(config);

        for (name, age) in [("Mary Smith", 30), ("John Doe", 35), ("Alexander Octavian", 27)] {
            roster.hire(NewEmployee::new(name, age, 50_000, Role::Worker), ids)?;
        }
        for (name, age) in [("Jennifer Ivans", 20), ("Brian Donahue", 19), ("Bernard Johnson", 22)] {
            roster.hire(NewEmployee::new(name, age, 20_000, Role::Intern), ids)?;
        }

        let developers: [(&str, u32, i64, &[&str]); 2] = [
            ("Olivia Chen", 33, 85_000, &["Rust"]),
            ("Samuel Okafor", 28, 80_000, &["TypeScript", "Go"]),
        ];
        for (name, age, pay, languages) in developers {
            let developer = roster.hire(NewEmployee::new(name, age, pay, Role::Developer), ids)?;
            for language in languages {
                developer.add_language(language)?;
            }
        }

        let managers: [(&str, u32, &[&str]); 2] = [
            ("Brandon Smith", 40, &["Mary Smith", "John Doe"]),
            ("Markus Sextus", 45, &["Jennifer Ivans", "Brian Donahue"]),
        ];
        for (name, age, supervised) in managers {
            let manager = roster.hire(NewEmployee::new(name, age, 90_000, Role::Manager), ids)?;
            for employee in supervised {
                manager.add_managed_employee(employee)?;
            }
        }

        debug!(count = roster.len(), "Built sample roster");
        Ok(roster)
    }
}

/// Runs the demonstration: builds the sample roster, hands the remaining
/// worker and intern to their managers, gives everyone a raise and returns
/// the report lines.
pub fn sample_report(ids: &mut dyn IdGenerator, config: RosterConfig) -> RosterResult<Vec<String>> {
    let mut roster = Roster::sample(ids, config)?;

    for (manager, employee) in [
        ("Brandon Smith", "Alexander Octavian"),
        ("Markus Sextus", "Bernard Johnson"),
    ] {
        if let Some(manager) = roster.find_by_name_mut(manager) {
            manager.add_managed_employee(employee)?;
        }
    }
    if let Some(developer) = roster.find_by_name_mut("Olivia Chen") {
        developer.add_language("Python")?;
        // already known, ignored
        developer.add_language("Rust")?;
    }

    roster.apply_raise_to_all()?;
    Ok(roster.report())
}
