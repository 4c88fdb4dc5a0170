//! Comparators and the column sort engine.
//!
//! Rows are ordered by the edit form of their displayed cell text, so a
//! currency column sorts by amount rather than by its formatted string.
//! Sorting is stable; descending order is defined as the exact reverse of
//! the ascending result.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::format::parse_number;
use crate::registry::Schema;
use crate::validation::Record;

/// Sort direction of a column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Locale-style string order.
///
/// Letters compare by their base form first, ignoring accents and case, so
/// `Émile` sorts among the `E`s. Ties are broken by accents (unaccented
/// first), then by case (lowercase first), then by code point.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| {
            a.nfd()
                .flat_map(char::to_lowercase)
                .cmp(b.nfd().flat_map(char::to_lowercase))
        })
        .then_with(|| {
            a.nfd()
                .map(char::is_uppercase)
                .cmp(b.nfd().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

/// Numeric order on parsed values. Values that do not parse sort after all
/// numbers and compare equal to each other.
pub fn numeric_compare(a: &str, b: &str) -> Ordering {
    match (parse_number(a), parse_number(b)) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort arbitrary rows by one field, reading each row's displayed text with `cell`.
pub fn sort_by_field<T, F>(
    schema: &Schema,
    mut rows: Vec<T>,
    key: &str,
    direction: SortDirection,
    cell: F,
) -> Result<Vec<T>>
where
    F: Fn(&T) -> &str,
{
    let field = schema.get(key)?;
    rows.sort_by(|a, b| field.compare_display(cell(a), cell(b)));
    if direction == SortDirection::Descending {
        rows.reverse();
    }
    debug!(%key, ?direction, rows = rows.len(), "rows sorted");
    Ok(rows)
}

/// Sort display records by one field. Missing cells read as empty text.
pub fn sort_records(
    schema: &Schema,
    rows: Vec<Record>,
    key: &str,
    direction: SortDirection,
) -> Result<Vec<Record>> {
    sort_by_field(schema, rows, key, direction, |r| {
        r.get(key).map(String::as_str).unwrap_or("")
    })
}

/// Tracks which column the rows are currently sorted by.
///
/// Toggling the same column again reverses the current order instead of
/// re-sorting; toggling another column sorts ascending by it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    current: Option<(String, SortDirection)>,
}

impl SortState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column and direction of the current order, if any.
    pub fn current(&self) -> Option<(&str, SortDirection)> {
        self.current.as_ref().map(|(k, d)| (k.as_str(), *d))
    }

    pub fn last_sorted(&self) -> Option<&str> {
        self.current().map(|(k, _)| k)
    }

    /// Forget the current order. Call after any change to the row set.
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Apply a header click on `key` to rows in their current display order.
    pub fn toggle<T, F>(
        &mut self,
        schema: &Schema,
        mut rows: Vec<T>,
        key: &str,
        cell: F,
    ) -> Result<(Vec<T>, SortDirection)>
    where
        F: Fn(&T) -> &str,
    {
        let direction = match &self.current {
            Some((last, direction)) if last == key => {
                rows.reverse();
                direction.reversed()
            }
            _ => {
                rows = sort_by_field(schema, rows, key, SortDirection::Ascending, cell)?;
                SortDirection::Ascending
            }
        };
        self.current = Some((key.to_string(), direction));
        Ok((rows, direction))
    }

    /// [`toggle`](Self::toggle) over display records.
    pub fn toggle_records(
        &mut self,
        schema: &Schema,
        rows: Vec<Record>,
        key: &str,
    ) -> Result<(Vec<Record>, SortDirection)> {
        self.toggle(schema, rows, key, |r| {
            r.get(key).map(String::as_str).unwrap_or("")
        })
    }
}
