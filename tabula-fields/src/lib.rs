//! Field schema engine for editable tables
//!
//! `tabula-fields` is a standalone, UI-agnostic crate describing the columns of
//! a table. Each column is a [`FieldSpec`] carrying its own validator,
//! display/edit formatters and comparator; a [`Schema`] collects them in
//! column order. It knows nothing about rows on screen or notifications;
//! consumers such as `tabula-grid` provide those.
//!
//! # Architecture
//!
//! - **Schema-only**: Owns field behavior, not field values
//! - **Immutable**: Built once through [`SchemaBuilder`], read-only afterwards
//! - **Three value forms**: raw (stored/submitted), display (`format_for_view`),
//!   edit (`format_for_edit`); comparison always runs on the edit form
//! - **Fail-fast validation**: the first rejected field in submission order wins

pub mod error;
pub mod format;
pub mod registry;
pub mod rules;
pub mod sort;
pub mod types;
pub mod validation;

pub use error::{FieldsError, Result};
pub use format::{format_currency, parse_number, strip_currency};
pub use registry::{Schema, SchemaBuilder};
pub use sort::{
    locale_compare, numeric_compare, sort_by_field, sort_records, SortDirection, SortState,
};
pub use types::{CompareFn, FieldKind, FieldSpec, FormatFn, ValidateFn, Validation};
pub use validation::{record, Record};
