//! Core field types for the schema.
//!
//! A [`FieldSpec`] describes one column: how its raw value is entered,
//! checked, shown and ordered. The behavior is carried as function values
//! bound when the spec is built, so a spec never needs a receiver to look up
//! its own formatters.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::sort::{locale_compare, numeric_compare};

/// The kind of a field. Determines the input widget and how raw values are read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    Text,
    Number,
    Choice,
}

/// Outcome of a single field's business rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(String),
}

impl Validation {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid(reason.into())
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Business rule over a raw value.
pub type ValidateFn = Arc<dyn Fn(&str) -> Validation + Send + Sync>;

/// Raw ↔ display transform.
pub type FormatFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Total order over edit-form values.
pub type CompareFn = Arc<dyn Fn(&str, &str) -> Ordering + Send + Sync>;

/// A field definition: the complete behavior of a single named column.
#[derive(Clone)]
pub struct FieldSpec {
    key: String,
    title: String,
    kind: FieldKind,
    choices: Vec<String>,
    validate: ValidateFn,
    view: Option<FormatFn>,
    edit: Option<FormatFn>,
    compare: CompareFn,
}

impl FieldSpec {
    fn new(key: impl Into<String>, title: impl Into<String>, kind: FieldKind) -> Self {
        let compare: CompareFn = match kind {
            FieldKind::Number => Arc::new(numeric_compare) as CompareFn,
            FieldKind::Text | FieldKind::Choice => Arc::new(locale_compare) as CompareFn,
        };
        Self {
            key: key.into(),
            title: title.into(),
            kind,
            choices: Vec::new(),
            validate: Arc::new(|_: &str| Validation::Valid),
            view: None,
            edit: None,
            compare,
        }
    }

    /// Free-text field, compared lexicographically.
    pub fn text(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(key, title, FieldKind::Text)
    }

    /// Numeric field, compared by parsed value.
    pub fn number(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(key, title, FieldKind::Number)
    }

    /// Choice field; `choices` keeps its declared order for the dropdown.
    pub fn choice<I, S>(key: impl Into<String>, title: impl Into<String>, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut spec = Self::new(key, title, FieldKind::Choice);
        spec.choices = choices.into_iter().map(Into::into).collect();
        spec
    }

    /// Attach the business rule for this field.
    pub fn with_validator<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Validation + Send + Sync + 'static,
    {
        self.validate = Arc::new(f);
        self
    }

    /// Attach the raw → display transform.
    pub fn with_view_format<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.view = Some(Arc::new(f));
        self
    }

    /// Attach the display → edit transform.
    pub fn with_edit_format<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.edit = Some(Arc::new(f));
        self
    }

    /// Replace the comparator inferred from the field kind.
    pub fn with_comparator<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, &str) -> Ordering + Send + Sync + 'static,
    {
        self.compare = Arc::new(f);
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Allowed values in declared order; empty unless the field is a choice.
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn validate(&self, raw: &str) -> Validation {
        (self.validate)(raw)
    }

    /// Display form of a raw value. Identity when no view format is set.
    pub fn format_for_view(&self, raw: &str) -> String {
        match &self.view {
            Some(f) => f(raw),
            None => raw.to_string(),
        }
    }

    /// Edit form of a displayed value. Identity when no edit format is set.
    pub fn format_for_edit(&self, display: &str) -> String {
        match &self.edit {
            Some(f) => f(display),
            None => display.to_string(),
        }
    }

    /// Compare two edit-form values.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        (self.compare)(a, b)
    }

    /// Compare two displayed values by their edit form.
    pub fn compare_display(&self, a: &str, b: &str) -> Ordering {
        self.compare(&self.format_for_edit(a), &self.format_for_edit(b))
    }

    pub fn has_view_format(&self) -> bool {
        self.view.is_some()
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("kind", &self.kind)
            .field("choices", &self.choices)
            .field("view", &self.view.is_some())
            .field("edit", &self.edit.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&FieldKind::Choice).unwrap();
        assert_eq!(json, "\"choice\"");
        let parsed: FieldKind = serde_json::from_str("\"number\"").unwrap();
        assert_eq!(parsed, FieldKind::Number);
    }

    #[test]
    fn defaults_are_identity_and_always_valid() {
        let field = FieldSpec::text("position", "Position");
        assert_eq!(field.format_for_view("Engineer"), "Engineer");
        assert_eq!(field.format_for_edit("Engineer"), "Engineer");
        assert!(field.validate("").is_valid());
        assert!(!field.has_view_format());
    }

    #[test]
    fn comparator_inferred_from_kind() {
        let text = FieldSpec::text("t", "T");
        assert_eq!(text.compare("10", "9"), Ordering::Less);

        let number = FieldSpec::number("n", "N");
        assert_eq!(number.compare("10", "9"), Ordering::Greater);
    }

    #[test]
    fn compare_display_uses_edit_form() {
        let field = FieldSpec::number("n", "N").with_edit_format(|s| s.replace('#', ""));
        assert_eq!(field.compare_display("#300", "1200"), Ordering::Less);
    }

    #[test]
    fn choice_keeps_declared_order() {
        let field = FieldSpec::choice("office", "Office", ["Tokyo", "London", "Edinburgh"]);
        assert_eq!(field.kind(), FieldKind::Choice);
        assert_eq!(field.choices().to_vec(), vec!["Tokyo", "London", "Edinburgh"]);
    }

    #[test]
    fn validator_is_bound_at_construction() {
        let field = FieldSpec::text("name", "Name").with_validator(|v| {
            if v.is_empty() {
                Validation::invalid("required")
            } else {
                Validation::Valid
            }
        });
        assert_eq!(field.validate(""), Validation::Invalid("required".into()));
        assert!(field.validate("x").is_valid());
    }

    #[test]
    fn debug_omits_closures() {
        let field = FieldSpec::number("age", "Age");
        let dbg = format!("{field:?}");
        assert!(dbg.contains("age"));
        assert!(dbg.contains("Number"));
    }
}
