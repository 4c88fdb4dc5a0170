//! Reusable validator building blocks.
//!
//! Each constructor returns a closure suitable for
//! [`FieldSpec::with_validator`](crate::FieldSpec::with_validator). Messages
//! are supplied by the caller so the schema owns its wording.

use crate::format::parse_number;
use crate::types::Validation;

/// Boxed rule, as stored by [`all_of`].
pub type Rule = Box<dyn Fn(&str) -> Validation + Send + Sync>;

/// Fails on the empty string.
pub fn required(message: impl Into<String>) -> impl Fn(&str) -> Validation + Send + Sync {
    let message = message.into();
    move |value: &str| {
        if value.is_empty() {
            Validation::invalid(message.clone())
        } else {
            Validation::Valid
        }
    }
}

/// Fails when the value has fewer than `min` characters.
pub fn min_chars(
    min: usize,
    message: impl Into<String>,
) -> impl Fn(&str) -> Validation + Send + Sync {
    let message = message.into();
    move |value: &str| {
        if value.chars().count() < min {
            Validation::invalid(message.clone())
        } else {
            Validation::Valid
        }
    }
}

/// Fails unless the value parses as a finite number.
pub fn numeric(message: impl Into<String>) -> impl Fn(&str) -> Validation + Send + Sync {
    let message = message.into();
    move |value: &str| match parse_number(value) {
        Some(_) => Validation::Valid,
        None => Validation::invalid(message.clone()),
    }
}

/// Fails when the parsed value lies outside `min..=max`. Unparseable values pass;
/// pair with [`numeric`] to reject them.
pub fn number_between(
    min: f64,
    max: f64,
    message: impl Into<String>,
) -> impl Fn(&str) -> Validation + Send + Sync {
    let message = message.into();
    move |value: &str| match parse_number(value) {
        Some(n) if n < min || n > max => Validation::invalid(message.clone()),
        _ => Validation::Valid,
    }
}

/// Fails when the parsed value is below `min`. Unparseable values pass.
pub fn number_at_least(
    min: f64,
    message: impl Into<String>,
) -> impl Fn(&str) -> Validation + Send + Sync {
    let message = message.into();
    move |value: &str| match parse_number(value) {
        Some(n) if n < min => Validation::invalid(message.clone()),
        _ => Validation::Valid,
    }
}

/// Fails unless the value equals one of `choices` exactly.
pub fn one_of<I, S>(
    choices: I,
    message: impl Into<String>,
) -> impl Fn(&str) -> Validation + Send + Sync
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
    let message = message.into();
    move |value: &str| {
        if choices.iter().any(|c| c == value) {
            Validation::Valid
        } else {
            Validation::invalid(message.clone())
        }
    }
}

/// Apply a transform before handing the value to `rule`.
pub fn after<T, R>(transform: T, rule: R) -> impl Fn(&str) -> Validation + Send + Sync
where
    T: Fn(&str) -> String + Send + Sync,
    R: Fn(&str) -> Validation + Send + Sync,
{
    move |value: &str| rule(&transform(value))
}

/// Run rules in order and report the first failure.
pub fn all_of(rules: Vec<Rule>) -> impl Fn(&str) -> Validation + Send + Sync {
    move |value: &str| {
        rules
            .iter()
            .map(|rule| rule(value))
            .find(|v| !v.is_valid())
            .unwrap_or(Validation::Valid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::strip_currency;

    #[test]
    fn required_rejects_only_empty() {
        let rule = required("required");
        assert_eq!(rule(""), Validation::invalid("required"));
        assert!(rule(" ").is_valid());
    }

    #[test]
    fn min_chars_counts_characters() {
        let rule = min_chars(4, "short");
        assert!(!rule("Bob").is_valid());
        assert!(rule("Bobby").is_valid());
        assert!(rule("Zoë!").is_valid());
    }

    #[test]
    fn number_between_is_inclusive() {
        let rule = number_between(18.0, 90.0, "range");
        assert!(!rule("17").is_valid());
        assert!(rule("18").is_valid());
        assert!(rule("90").is_valid());
        assert!(!rule("91").is_valid());
        assert!(rule("n/a").is_valid());
    }

    #[test]
    fn one_of_is_exact() {
        let rule = one_of(["Tokyo", "London"], "bad office");
        assert!(rule("Tokyo").is_valid());
        assert!(!rule("tokyo").is_valid());
        assert!(!rule("").is_valid());
    }

    #[test]
    fn all_of_reports_first_failure() {
        let rule = all_of(vec![
            Box::new(required("required")) as Rule,
            Box::new(min_chars(4, "short")),
        ]);
        assert_eq!(rule(""), Validation::invalid("required"));
        assert_eq!(rule("Amy"), Validation::invalid("short"));
        assert!(rule("Amelia").is_valid());
    }

    #[test]
    fn after_applies_transform_first() {
        let rule = after(strip_currency, number_at_least(1.0, "positive"));
        assert!(rule("$1,200").is_valid());
        assert!(!rule("$0").is_valid());
    }
}
