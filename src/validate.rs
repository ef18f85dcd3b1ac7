//! Field-level checks for [`PackageConfig`].
//!
//! Each check is a pure predicate over a single field; failures are
//! messages, not errors. Normalization (space replacement, lower-casing)
//! happens later in [`crate::scaffold`], never here.

use tracing::warn;

use crate::package::PackageConfig;

/// `Err` carries the message shown next to the offending field.
pub type FieldResult = Result<(), String>;

pub fn validate_package_name(value: &str) -> FieldResult {
    if value.trim().is_empty() {
        return Err("Package name cannot be empty or whitespace.".to_string());
    }
    if value.contains(' ') {
        return Err("Package name cannot contain spaces.".to_string());
    }
    Ok(())
}

/// The description is free-form; every input is accepted.
pub fn validate_package_description(_value: &str) -> FieldResult {
    Ok(())
}

pub fn validate_package_author(value: &str) -> FieldResult {
    if value.trim().is_empty() {
        return Err("Package author cannot be empty or whitespace.".to_string());
    }
    Ok(())
}

/// Only non-emptiness is checked; the address format is deliberately left
/// unvalidated.
pub fn validate_package_author_email(value: &str) -> FieldResult {
    if value.trim().is_empty() {
        return Err("Package author email cannot be empty or whitespace.".to_string());
    }
    Ok(())
}

pub fn validate_organization(value: &str) -> FieldResult {
    if value.trim().is_empty() {
        return Err("Organization cannot be empty or whitespace.".to_string());
    }
    Ok(())
}

/// Run every field check and collect the failures, labelled by field.
pub fn field_errors(config: &PackageConfig) -> Vec<(&'static str, String)> {
    let checks = [
        ("package name", validate_package_name(&config.package_name)),
        (
            "package description",
            validate_package_description(&config.package_description),
        ),
        (
            "package author",
            validate_package_author(&config.package_author),
        ),
        (
            "package author email",
            validate_package_author_email(&config.package_author_email),
        ),
        ("organization", validate_organization(&config.organization)),
    ];
    checks
        .into_iter()
        .filter_map(|(field, result)| result.err().map(|message| (field, message)))
        .collect()
}

/// Whole-config gate: true only when every field check passes. Each failure
/// is also reported through the diagnostic channel.
pub fn is_valid(config: &PackageConfig) -> bool {
    let errors = field_errors(config);
    for (field, message) in &errors {
        warn!("{field}: {message}");
    }
    errors.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::PackageConfig;

    fn valid_config() -> PackageConfig {
        PackageConfig {
            package_name: "Widgets".into(),
            package_author: "Ada Lovelace".into(),
            package_author_email: "ada@example.com".into(),
            organization: "Acme".into(),
            ..PackageConfig::default()
        }
    }

    #[test]
    fn name_accepts_space_free_strings() {
        assert!(validate_package_name("MyCoolPackage").is_ok());
        assert!(validate_package_name("pkg_2").is_ok());
        assert!(validate_package_name("a").is_ok());
    }

    #[test]
    fn name_rejects_spaces_with_message() {
        let message = validate_package_name("My Cool Package").unwrap_err();
        assert_eq!(message, "Package name cannot contain spaces.");
    }

    #[test]
    fn name_rejects_empty_and_whitespace() {
        assert_eq!(
            validate_package_name("").unwrap_err(),
            "Package name cannot be empty or whitespace."
        );
        assert!(validate_package_name("   ").is_err());
        assert!(validate_package_name("\t").is_err());
    }

    #[test]
    fn description_accepts_everything() {
        assert!(validate_package_description("").is_ok());
        assert!(validate_package_description("   ").is_ok());
        assert!(validate_package_description("anything at all").is_ok());
    }

    #[test]
    fn author_email_organization_require_content() {
        for check in [
            validate_package_author,
            validate_package_author_email,
            validate_organization,
        ] {
            assert!(check("someone").is_ok());
            assert!(check("").is_err());
            assert!(check(" \t ").is_err());
        }
    }

    #[test]
    fn email_format_is_not_checked() {
        assert!(validate_package_author_email("not-an-email").is_ok());
    }

    #[test]
    fn aggregate_check_requires_every_field() {
        let config = valid_config();
        assert!(field_errors(&config).is_empty());
        assert!(is_valid(&config));
    }

    #[test]
    fn aggregate_check_collects_each_failure() {
        let broken = PackageConfig {
            package_name: "bad name".into(),
            organization: "  ".into(),
            ..valid_config()
        };
        let errors = field_errors(&broken);
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|(field, _)| *field == "package name"));
        assert!(errors.iter().any(|(field, _)| *field == "organization"));
        assert!(!is_valid(&broken));
    }
}
