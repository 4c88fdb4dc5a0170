//! Record validation against a schema.
//!
//! Records are checked in their own insertion order and validation stops at
//! the first rejected field, so a multi-field form reports the earliest
//! invalid input the user submitted.

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::{FieldsError, Result};
use crate::registry::Schema;
use crate::types::Validation;

/// Field key → raw value, in submission order.
pub type Record = IndexMap<String, String>;

/// Build a [`Record`] from key/value pairs, keeping their order.
pub fn record<I, K, V>(pairs: I) -> Record
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

impl Schema {
    /// Validate a full or partial record.
    ///
    /// Every key must be declared by the schema. The first value a field
    /// rejects ends validation with [`FieldsError::Invalid`].
    pub fn validate_record(&self, record: &Record) -> Result<()> {
        for (key, value) in record {
            let Ok(field) = self.get(key) else {
                warn!(%key, "record submitted with undeclared field");
                return Err(FieldsError::unknown_field(key.as_str()));
            };
            if let Validation::Invalid(reason) = field.validate(value) {
                debug!(%key, %reason, "field rejected");
                return Err(FieldsError::invalid(key.as_str(), reason));
            }
        }
        Ok(())
    }

    /// Validate a record submitted as a new row: it must carry every schema
    /// field before the per-field rules run.
    pub fn validate_entry(&self, record: &Record) -> Result<()> {
        if let Some(missing) = self.keys().find(|k| !record.contains_key(*k)) {
            return Err(FieldsError::MissingField {
                key: missing.to_string(),
            });
        }
        self.validate_record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{min_chars, required};
    use crate::types::FieldSpec;

    fn schema() -> Schema {
        Schema::builder()
            .field(FieldSpec::text("name", "Name").with_validator(min_chars(4, "short name")))
            .field(FieldSpec::text("position", "Position").with_validator(required("no position")))
            .build()
            .unwrap()
    }

    #[test]
    fn partial_record_validates_single_field() {
        let schema = schema();
        assert!(schema.validate_record(&record([("name", "Bobby")])).is_ok());
        assert_eq!(
            schema.validate_record(&record([("name", "Bob")])),
            Err(FieldsError::invalid("name", "short name"))
        );
    }

    #[test]
    fn unknown_key_is_rejected() {
        let schema = schema();
        let err = schema
            .validate_record(&record([("salary", "100")]))
            .unwrap_err();
        assert_eq!(err, FieldsError::unknown_field("salary"));
    }

    #[test]
    fn first_invalid_in_submission_order_wins() {
        let schema = schema();
        let err = schema
            .validate_record(&record([("position", ""), ("name", "Al")]))
            .unwrap_err();
        assert_eq!(err.key(), "position");

        let err = schema
            .validate_record(&record([("name", "Al"), ("position", "")]))
            .unwrap_err();
        assert_eq!(err.key(), "name");
    }

    #[test]
    fn entry_requires_every_field() {
        let schema = schema();
        let err = schema
            .validate_entry(&record([("name", "Bobby")]))
            .unwrap_err();
        assert_eq!(err, FieldsError::MissingField { key: "position".into() });

        assert!(schema
            .validate_entry(&record([("position", "Engineer"), ("name", "Bobby")]))
            .is_ok());
    }

    #[test]
    fn empty_record_is_valid_partial_edit() {
        assert!(schema().validate_record(&Record::new()).is_ok());
    }
}
