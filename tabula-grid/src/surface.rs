//! Render surface: whatever actually shows the rows.
//!
//! The controller only needs to enumerate rows, read and write a cell's
//! displayed text, append rows, reorder them and toggle the selection marker.
//! [`MemoryTable`] implements this in memory for tests and headless use.

use tabula_fields::Record;

use crate::error::{GridError, Result};
use crate::types::{Row, RowId};

/// Table-like widget the controller drives.
pub trait RenderSurface {
    /// Row ids in display order.
    fn row_ids(&self) -> Vec<RowId>;

    /// Displayed text of one cell.
    fn cell(&self, row: RowId, key: &str) -> Result<String>;

    /// Replace the displayed text of one cell.
    fn set_cell(&mut self, row: RowId, key: &str, text: String) -> Result<()>;

    /// Append a row at the bottom and return its id.
    fn append_row(&mut self, cells: Record) -> RowId;

    /// Redisplay rows in the given order. Ids not on the surface are ignored.
    fn reorder(&mut self, order: &[RowId]);

    /// Set or clear the selection marker of a row.
    fn set_selected(&mut self, row: RowId, selected: bool) -> Result<()>;

    fn is_selected(&self, row: RowId) -> bool;

    fn len(&self) -> usize {
        self.row_ids().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory render surface.
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    rows: Vec<Row>,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface pre-filled with display records, in order.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Self {
        Self {
            rows: records.into_iter().map(Row::new).collect(),
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id == id)
    }

    /// Displayed text of one column, top to bottom.
    pub fn column(&self, key: &str) -> Vec<&str> {
        self.rows.iter().map(|r| r.cell(key)).collect()
    }

    fn row_mut(&mut self, id: RowId) -> Result<&mut Row> {
        self.rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(GridError::RowNotFound { id })
    }
}

impl RenderSurface for MemoryTable {
    fn row_ids(&self) -> Vec<RowId> {
        self.rows.iter().map(|r| r.id).collect()
    }

    fn cell(&self, row: RowId, key: &str) -> Result<String> {
        self.row(row)
            .map(|r| r.cell(key).to_string())
            .ok_or(GridError::RowNotFound { id: row })
    }

    fn set_cell(&mut self, row: RowId, key: &str, text: String) -> Result<()> {
        self.row_mut(row)?.cells.insert(key.to_string(), text);
        Ok(())
    }

    fn append_row(&mut self, cells: Record) -> RowId {
        let row = Row::new(cells);
        let id = row.id;
        self.rows.push(row);
        id
    }

    fn reorder(&mut self, order: &[RowId]) {
        let mut remaining = std::mem::take(&mut self.rows);
        let mut reordered = Vec::with_capacity(remaining.len());
        for id in order {
            if let Some(pos) = remaining.iter().position(|r| r.id == *id) {
                reordered.push(remaining.remove(pos));
            }
        }
        // rows missing from `order` keep their relative order at the end
        reordered.append(&mut remaining);
        self.rows = reordered;
    }

    fn set_selected(&mut self, row: RowId, selected: bool) -> Result<()> {
        self.row_mut(row)?.selected = selected;
        Ok(())
    }

    fn is_selected(&self, row: RowId) -> bool {
        self.row(row).is_some_and(|r| r.selected)
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}
