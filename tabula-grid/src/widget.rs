//! Declarative input-widget requests.
//!
//! The controller never builds widgets itself. It describes the input it needs
//! (text box, number box, or dropdown with its options) and the front end
//! materializes it.

use serde::{Deserialize, Serialize};
use tabula_fields::{FieldKind, FieldSpec, Schema};

use crate::error::Result;

/// Widget flavor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    Text,
    Number,
    Select,
}

impl From<FieldKind> for InputKind {
    fn from(kind: FieldKind) -> Self {
        match kind {
            FieldKind::Text => Self::Text,
            FieldKind::Number => Self::Number,
            FieldKind::Choice => Self::Select,
        }
    }
}

/// Request to materialize one input widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InputRequest {
    pub kind: InputKind,
    pub name: String,
    pub current_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
}

impl InputRequest {
    /// Widget for `field` pre-filled with `current_value`.
    pub fn for_field(field: &FieldSpec, current_value: impl Into<String>) -> Self {
        let kind = InputKind::from(field.kind());
        Self {
            kind,
            name: field.key().to_string(),
            current_value: current_value.into(),
            choices: (kind == InputKind::Select).then(|| field.choices().to_vec()),
        }
    }

    /// JSON form handed across to a script front end.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// One labelled control of the new-row form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormControl {
    pub label: String,
    pub input: InputRequest,
}

/// The generated new-row form, one control per field in column order.
///
/// Dropdowns start on their first choice, as a browser select does.
pub fn form_controls(schema: &Schema) -> Vec<FormControl> {
    schema
        .fields()
        .iter()
        .map(|field| {
            let initial = field.choices().first().cloned().unwrap_or_default();
            FormControl {
                label: format!("{}:", field.title()),
                input: InputRequest::for_field(field, initial),
            }
        })
        .collect()
}
