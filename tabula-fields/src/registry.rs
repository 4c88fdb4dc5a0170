//! Schema: the immutable registry of field definitions for one table.
//!
//! Fields are kept in column order with an index by key for lookup. A schema
//! is assembled once through [`SchemaBuilder`] and never mutated afterwards.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{FieldsError, Result};
use crate::types::{FieldKind, FieldSpec};

/// Builder for [`Schema`]. Created by [`Schema::builder()`].
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldSpec>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Column order follows call order.
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Build the schema, rejecting duplicate keys and empty choice lists.
    pub fn build(self) -> Result<Schema> {
        let mut index = HashMap::with_capacity(self.fields.len());
        for (i, spec) in self.fields.iter().enumerate() {
            if spec.kind() == FieldKind::Choice && spec.choices().is_empty() {
                return Err(FieldsError::NoChoices {
                    key: spec.key().to_string(),
                });
            }
            if index.insert(spec.key().to_string(), i).is_some() {
                return Err(FieldsError::DuplicateField {
                    key: spec.key().to_string(),
                });
            }
        }

        debug!(fields = self.fields.len(), "schema built");

        Ok(Schema {
            fields: self.fields,
            index,
        })
    }
}

/// Ordered, read-only set of field definitions.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSpec>,
    index: HashMap<String, usize>,
}

impl Schema {
    /// Start building a schema.
    ///
    /// ```rust
    /// use tabula_fields::{FieldSpec, Schema};
    ///
    /// let schema = Schema::builder()
    ///     .field(FieldSpec::text("name", "Name"))
    ///     .field(FieldSpec::number("age", "Age"))
    ///     .build()?;
    /// assert_eq!(schema.keys().collect::<Vec<_>>(), ["name", "age"]);
    /// # Ok::<(), tabula_fields::FieldsError>(())
    /// ```
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }

    /// Get a field definition by key.
    pub fn get(&self, key: &str) -> Result<&FieldSpec> {
        self.index
            .get(key)
            .map(|&i| &self.fields[i])
            .ok_or_else(|| FieldsError::unknown_field(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Resolve a column header label to its field, ignoring case.
    pub fn by_title(&self, title: &str) -> Result<&FieldSpec> {
        let wanted = title.trim().trim_end_matches(':').to_lowercase();
        self.fields
            .iter()
            .find(|f| f.title().to_lowercase() == wanted)
            .ok_or_else(|| FieldsError::unknown_field(wanted))
    }

    /// Column index of a field.
    pub fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Field keys in column order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.fields.iter().map(FieldSpec::key)
    }

    /// All field definitions in column order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schema {
        Schema::builder()
            .field(FieldSpec::text("name", "Name"))
            .field(FieldSpec::choice("office", "Office", ["Tokyo", "London"]))
            .field(FieldSpec::number("age", "Age"))
            .build()
            .unwrap()
    }

    #[test]
    fn keys_follow_registration_order() {
        let schema = sample();
        assert_eq!(schema.keys().collect::<Vec<_>>(), ["name", "office", "age"]);
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.position("age"), Some(2));
    }

    #[test]
    fn get_returns_typed_spec() {
        let schema = sample();
        let office = schema.get("office").unwrap();
        assert_eq!(office.kind(), FieldKind::Choice);
        assert_eq!(office.title(), "Office");
    }

    #[test]
    fn get_unknown_key_errors() {
        let schema = sample();
        let err = schema.get("salary").unwrap_err();
        assert_eq!(err, FieldsError::unknown_field("salary"));
        assert!(!schema.contains("salary"));
    }

    #[test]
    fn by_title_ignores_case_and_label_colon() {
        let schema = sample();
        assert_eq!(schema.by_title("AGE").unwrap().key(), "age");
        assert_eq!(schema.by_title("Office:").unwrap().key(), "office");
        assert!(schema.by_title("Salary").is_err());
    }

    #[test]
    fn by_title_ignores_non_ascii_case() {
        let schema = Schema::builder()
            .field(FieldSpec::text("city", "Ciudad Ñandú"))
            .field(FieldSpec::number("tenure", "Ålder"))
            .build()
            .unwrap();
        assert_eq!(schema.by_title("CIUDAD ÑANDÚ").unwrap().key(), "city");
        assert_eq!(schema.by_title("ålder:").unwrap().key(), "tenure");
    }

    #[test]
    fn duplicate_key_rejected() {
        let err = Schema::builder()
            .field(FieldSpec::text("name", "Name"))
            .field(FieldSpec::text("name", "Full name"))
            .build()
            .unwrap_err();
        assert_eq!(err, FieldsError::DuplicateField { key: "name".into() });
    }

    #[test]
    fn choice_without_choices_rejected() {
        let err = Schema::builder()
            .field(FieldSpec::choice("office", "Office", Vec::<String>::new()))
            .build()
            .unwrap_err();
        assert_eq!(err, FieldsError::NoChoices { key: "office".into() });
    }

    #[test]
    fn empty_schema_builds() {
        let schema = Schema::builder().build().unwrap();
        assert!(schema.is_empty());
    }
}
