//! Email address derivation.

use crate::config::EmailPolicy;
use crate::error::{RosterError, RosterResult};

/// Derives an email address from a person's name.
///
/// The name is split on whitespace, each token is lower-cased, and the
/// tokens are joined with the policy's separator before the domain is
/// appended. The result depends on nothing but `name` and `policy`.
///
/// # Errors
///
/// Returns `InvalidEmployee` for the `name` field when the name contains no
/// non-whitespace token, or when a token contains `@`.
///
/// # Examples
///
/// ```
/// use employee_roster::calculation::derive_email;
/// use employee_roster::config::EmailPolicy;
///
/// let policy = EmailPolicy::default();
/// assert_eq!(derive_email("Mary Smith", &policy).unwrap(), "mary.smith@company.com");
/// assert_eq!(derive_email("Cher", &policy).unwrap(), "cher@company.com");
/// assert!(derive_email("   ", &policy).is_err());
/// assert!(derive_email("Mary @ Smith", &policy).is_err());
/// ```
pub fn derive_email(name: &str, policy: &EmailPolicy) -> RosterResult<String> {
    let tokens: Vec<String> = name.split_whitespace().map(str::to_lowercase).collect();

    if tokens.is_empty() {
        return Err(RosterError::InvalidEmployee {
            field: "name".to_string(),
            message: "must contain at least one word to derive an email address".to_string(),
        });
    }

    if tokens.iter().any(|token| token.contains('@')) {
        return Err(RosterError::InvalidEmployee {
            field: "name".to_string(),
            message: "must not contain '@'".to_string(),
        });
    }

    Ok(format!(
        "{}@{}",
        tokens.join(policy.separator.as_str()),
        policy.domain
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(separator: &str) -> EmailPolicy {
        EmailPolicy {
            domain: "company.com".to_string(),
            separator: separator.to_string(),
        }
    }

    #[test]
    fn test_two_tokens_joined_with_dot() {
        assert_eq!(
            derive_email("Mary Smith", &policy(".")).unwrap(),
            "mary.smith@company.com"
        );
    }

    #[test]
    fn test_single_token_has_no_separator() {
        assert_eq!(
            derive_email("Madonna", &policy(".")).unwrap(),
            "madonna@company.com"
        );
    }

    #[test]
    fn test_three_tokens_all_joined() {
        assert_eq!(
            derive_email("Anna Maria Lopez", &policy(".")).unwrap(),
            "anna.maria.lopez@company.com"
        );
    }

    #[test]
    fn test_underscore_separator() {
        assert_eq!(
            derive_email("John Doe", &policy("_")).unwrap(),
            "john_doe@company.com"
        );
    }

    #[test]
    fn test_surrounding_and_repeated_whitespace_ignored() {
        assert_eq!(
            derive_email("  Brian \t Donahue ", &policy(".")).unwrap(),
            "brian.donahue@company.com"
        );
    }

    #[test]
    fn test_custom_domain() {
        let policy = EmailPolicy {
            domain: "example.org".to_string(),
            separator: ".".to_string(),
        };
        assert_eq!(
            derive_email("Jo Bloggs", &policy).unwrap(),
            "jo.bloggs@example.org"
        );
    }

    #[test]
    fn test_empty_name_is_rejected() {
        match derive_email("", &policy(".")) {
            Err(RosterError::InvalidEmployee { field, .. }) => assert_eq!(field, "name"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_whitespace_only_name_is_rejected() {
        assert!(derive_email(" \n\t ", &policy(".")).is_err());
    }

    #[test]
    fn test_at_sign_in_name_is_rejected() {
        for name in ["Mary @ Smith", "mary@evil.com", "Mary Smith@"] {
            match derive_email(name, &policy(".")) {
                Err(RosterError::InvalidEmployee { field, .. }) => assert_eq!(field, "name"),
                other => panic!("Expected InvalidEmployee for {:?}, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_exactly_one_at_sign() {
        let email = derive_email("Alexander Octavian", &policy(".")).unwrap();
        assert_eq!(email.matches('@').count(), 1);
    }
}
