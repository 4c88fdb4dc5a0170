//! Row identity and contents

use std::fmt;

use serde::{Deserialize, Serialize};
use tabula_fields::Record;
use ulid::Ulid;

/// Stable identifier of a rendered row, independent of its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(Ulid);

impl RowId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for RowId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Ulid> for RowId {
    fn from(id: Ulid) -> Self {
        Self(id)
    }
}

/// A row as shown on the surface: display text per field key.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: RowId,
    pub cells: Record,
    pub selected: bool,
}

impl Row {
    pub fn new(cells: Record) -> Self {
        Self {
            id: RowId::new(),
            cells,
            selected: false,
        }
    }

    /// Displayed text of a cell; empty when the row has no such cell.
    pub fn cell(&self, key: &str) -> &str {
        self.cells.get(key).map(String::as_str).unwrap_or("")
    }
}
