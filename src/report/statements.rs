//! First-person statements about an employee.
//!
//! Each `say_*` function renders one fact. [`introduce`] composes the lines
//! every employee shares with the lines only its variant has.

use crate::config::RosterConfig;
use crate::models::{Employee, EmployeeKind, Role};

use super::format_pay;

/// Returns the role preceded by its indefinite article, e.g. "an Intern".
pub fn role_with_article(role: Role) -> String {
    format!("{} {}", role.article(), role)
}

/// Renders names as a bracketed, quoted list: `['Alice', 'Bob']`.
pub fn format_name_list(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| format!("'{}'", name)).collect();
    format!("[{}]", quoted.join(", "))
}

/// "My name is Mary Smith and I am 30 years old."
pub fn say_description(employee: &Employee) -> String {
    format!(
        "My name is {} and I am {} years old.",
        employee.name(),
        employee.age()
    )
}

/// "My email address is mary.smith@company.com."
pub fn say_email(employee: &Employee) -> String {
    format!("My email address is {}.", employee.email())
}

/// "My pay is $52,000."
pub fn say_pay_amount(employee: &Employee, separator: char) -> String {
    format!("My pay is ${}.", format_pay(employee.pay_amount(), separator))
}

/// "My id is 1A2B3C4D and I am a Worker."
pub fn say_id_and_role(employee: &Employee) -> String {
    format!(
        "My id is {} and I am {}.",
        employee.id(),
        role_with_article(employee.role())
    )
}

/// Lists a manager's supervised employees; `None` for other roles.
pub fn say_supervised_employees(employee: &Employee) -> Option<String> {
    employee.managed_employees().map(|names| {
        format!(
            "The employees under my supervision are {}.",
            format_name_list(names)
        )
    })
}

/// Lists a developer's languages; `None` for other roles.
pub fn say_languages(employee: &Employee) -> Option<String> {
    employee
        .languages()
        .map(|languages| format!("The languages I know are {}.", format_name_list(languages)))
}

/// The lines every employee reports, regardless of role.
pub fn base_statements(employee: &Employee, config: &RosterConfig) -> Vec<String> {
    vec![
        say_description(employee),
        say_email(employee),
        say_pay_amount(employee, config.pay_group_separator),
        say_id_and_role(employee),
    ]
}

/// The full introduction: base lines followed by variant-specific lines.
///
/// # Examples
///
/// ```
/// use employee_roster::config::RosterConfig;
/// use employee_roster::ids::SequentialIdGenerator;
/// use employee_roster::models::{Employee, NewEmployee, Role};
/// use employee_roster::report::introduce;
///
/// let config = RosterConfig::default();
/// let mut ids = SequentialIdGenerator::new("M");
/// let manager = Employee::new(
///     NewEmployee::new("Brandon Smith", 40, 90_000, Role::Manager),
///     &mut ids,
///     &config.email,
/// )
/// .unwrap();
///
/// let lines = introduce(&manager, &config);
/// assert_eq!(lines[3], "My id is M1 and I am a Manager.");
/// assert_eq!(lines[4], "The employees under my supervision are [].");
/// ```
pub fn introduce(employee: &Employee, config: &RosterConfig) -> Vec<String> {
    let mut lines = base_statements(employee, config);
    let extra = match employee.kind() {
        EmployeeKind::Worker | EmployeeKind::Intern => None,
        EmployeeKind::Developer { .. } => say_languages(employee),
        EmployeeKind::Manager { .. } => say_supervised_employees(employee),
    };
    lines.extend(extra);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIdGenerator;
    use crate::models::NewEmployee;

    fn hire(name: &str, age: u32, pay: i64, role: Role) -> Employee {
        let mut ids = SequentialIdGenerator::new("ID");
        Employee::new(
            NewEmployee::new(name, age, pay, role),
            &mut ids,
            &RosterConfig::default().email,
        )
        .unwrap()
    }

    #[test]
    fn test_role_with_article() {
        assert_eq!(role_with_article(Role::Worker), "a Worker");
        assert_eq!(role_with_article(Role::Intern), "an Intern");
        assert_eq!(role_with_article(Role::Developer), "a Developer");
        assert_eq!(role_with_article(Role::Manager), "a Manager");
    }

    #[test]
    fn test_format_name_list() {
        assert_eq!(format_name_list(&[]), "[]");
        assert_eq!(format_name_list(&["Alice".to_string()]), "['Alice']");
        assert_eq!(
            format_name_list(&["Mary Smith".to_string(), "John Doe".to_string()]),
            "['Mary Smith', 'John Doe']"
        );
    }

    #[test]
    fn test_single_fact_statements() {
        let mary = hire("Mary Smith", 30, 52_000, Role::Worker);

        assert_eq!(
            say_description(&mary),
            "My name is Mary Smith and I am 30 years old."
        );
        assert_eq!(
            say_email(&mary),
            "My email address is mary.smith@company.com."
        );
        assert_eq!(say_pay_amount(&mary, ','), "My pay is $52,000.");
        assert_eq!(say_pay_amount(&mary, '_'), "My pay is $52_000.");
        assert_eq!(say_id_and_role(&mary), "My id is ID1 and I am a Worker.");
    }

    #[test]
    fn test_intern_uses_an() {
        let intern = hire("Jennifer Ivans", 20, 20_000, Role::Intern);
        assert_eq!(say_id_and_role(&intern), "My id is ID1 and I am an Intern.");
    }

    #[test]
    fn test_variant_statements_only_for_their_variant() {
        let worker = hire("John Doe", 35, 50_000, Role::Worker);
        assert!(say_supervised_employees(&worker).is_none());
        assert!(say_languages(&worker).is_none());

        let manager = hire("Markus Sextus", 45, 90_000, Role::Manager)
            .with_managed_employees(["Jennifer Ivans", "Brian Donahue"])
            .unwrap();
        assert_eq!(
            say_supervised_employees(&manager).unwrap(),
            "The employees under my supervision are ['Jennifer Ivans', 'Brian Donahue']."
        );
    }

    #[test]
    fn test_introduce_worker_has_only_base_lines() {
        let config = RosterConfig::default();
        let worker = hire("John Doe", 35, 50_000, Role::Worker);

        let lines = introduce(&worker, &config);
        assert_eq!(lines, base_statements(&worker, &config));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_introduce_developer_appends_languages() {
        let config = RosterConfig::default();
        let developer = hire("Grace Hopper", 38, 85_000, Role::Developer)
            .with_languages(["COBOL", "Rust"])
            .unwrap();

        let lines = introduce(&developer, &config);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[..4], base_statements(&developer, &config)[..]);
        assert_eq!(lines[4], "The languages I know are ['COBOL', 'Rust'].");
    }
}
