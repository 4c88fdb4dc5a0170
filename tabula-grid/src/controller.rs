//! TableController: the event handlers of the editable table.
//!
//! One controller owns the schema and all UI state that changes over time:
//! the sorted-column marker, the selected row and the cell being edited. Each
//! method corresponds to a user event (header click, row click, double click,
//! blur, form submit) and runs to completion.

use tabula_fields::{FieldsError, Record, Schema, SortDirection, SortState};
use tracing::{debug, info, warn};

use crate::config::GridConfig;
use crate::defaults::employee_schema;
use crate::error::{GridError, Result};
use crate::notify::{Notification, NotificationCenter, Notifier};
use crate::surface::{MemoryTable, RenderSurface};
use crate::types::RowId;
use crate::widget::{form_controls, FormControl, InputRequest};

/// The cell currently open for editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub row: RowId,
    pub key: String,
    /// Displayed text before editing began, restored on rejection.
    pub previous: String,
}

/// Result of committing an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Accepted and the displayed text changed.
    Changed { display: String },
    /// Accepted, but it redisplays exactly as before.
    Unchanged,
    /// Rejected by the field's rule; the previous text was restored.
    Rejected { key: String, reason: String },
}

/// Result of submitting the new-row form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(RowId),
    Rejected { key: String, reason: String },
}

/// Event handlers and state for one table.
pub struct TableController<S = MemoryTable, N = NotificationCenter> {
    schema: Schema,
    surface: S,
    notifier: N,
    config: GridConfig,
    sort: SortState,
    selected: Option<RowId>,
    editing: Option<EditSession>,
}

impl TableController<MemoryTable, NotificationCenter> {
    /// Employee table over an in-memory surface pre-filled with display records.
    pub fn employees(
        config: GridConfig,
        rows: impl IntoIterator<Item = Record>,
    ) -> Result<Self> {
        let notifier = NotificationCenter::new(config.notification_timeout());
        Ok(Self::new(
            employee_schema()?,
            MemoryTable::from_records(rows),
            notifier,
            config,
        ))
    }
}

impl<S: RenderSurface, N: Notifier> TableController<S, N> {
    pub fn new(schema: Schema, surface: S, notifier: N, config: GridConfig) -> Self {
        Self {
            schema,
            surface,
            notifier,
            config,
            sort: SortState::new(),
            selected: None,
            editing: None,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    pub fn selected(&self) -> Option<RowId> {
        self.selected
    }

    pub fn editing(&self) -> Option<&EditSession> {
        self.editing.as_ref()
    }

    /// Controls of the new-row form.
    pub fn form_controls(&self) -> Vec<FormControl> {
        form_controls(&self.schema)
    }

    // --- Sorting ---

    /// Header click: sort ascending by `key`, or reverse if already sorted by it.
    pub fn click_header(&mut self, key: &str) -> Result<SortDirection> {
        let mut rows = Vec::new();
        for id in self.surface.row_ids() {
            let text = self.surface.cell(id, key)?;
            rows.push((id, text));
        }

        let (sorted, direction) = self
            .sort
            .toggle(&self.schema, rows, key, |(_, text)| text.as_str())?;
        let order: Vec<RowId> = sorted.into_iter().map(|(id, _)| id).collect();
        self.surface.reorder(&order);

        debug!(%key, ?direction, "header clicked");
        Ok(direction)
    }

    /// Header click by its label, e.g. `"Salary"`.
    pub fn click_header_title(&mut self, title: &str) -> Result<SortDirection> {
        let key = self.schema.by_title(title)?.key().to_string();
        self.click_header(&key)
    }

    // --- Selection ---

    /// Row click: the clicked row toggles its marker, any other selected row
    /// loses it.
    pub fn click_row(&mut self, row: RowId) -> Result<()> {
        if let Some(prev) = self.selected.filter(|prev| *prev != row) {
            self.surface.set_selected(prev, false)?;
        }
        let now_selected = !self.surface.is_selected(row);
        self.surface.set_selected(row, now_selected)?;
        self.selected = now_selected.then_some(row);
        Ok(())
    }

    fn select(&mut self, row: RowId) -> Result<()> {
        if let Some(prev) = self.selected.filter(|prev| *prev != row) {
            self.surface.set_selected(prev, false)?;
        }
        self.surface.set_selected(row, true)?;
        self.selected = Some(row);
        Ok(())
    }

    // --- Inline editing ---

    /// Double click on a cell: open it for editing and describe the widget to show.
    pub fn begin_edit(&mut self, row: RowId, key: &str) -> Result<InputRequest> {
        if let Some(session) = &self.editing {
            return Err(GridError::EditInProgress {
                row: session.row,
                key: session.key.clone(),
            });
        }

        let field = self.schema.get(key)?;
        let previous = self.surface.cell(row, key)?;
        let request = InputRequest::for_field(field, field.format_for_edit(&previous));

        self.select(row)?;
        self.editing = Some(EditSession {
            row,
            key: key.to_string(),
            previous,
        });
        debug!(%row, %key, "edit started");
        Ok(request)
    }

    /// Blur: validate the edited value and either store it or restore the
    /// previous display.
    pub fn commit_edit(&mut self, value: &str) -> Result<EditOutcome> {
        let session = self.editing.take().ok_or(GridError::NoActiveEdit)?;
        let EditSession { row, key, previous } = session;

        let mut submitted = Record::new();
        submitted.insert(key.clone(), value.to_string());

        match self.schema.validate_record(&submitted) {
            Ok(()) => {
                let display = self.schema.get(&key)?.format_for_view(value);
                self.surface.set_cell(row, &key, display.clone())?;
                self.sort.reset();

                if display == previous {
                    debug!(%row, %key, "edit saved without change");
                    return Ok(EditOutcome::Unchanged);
                }
                info!(%row, %key, "cell changed");
                self.notifier.notify(Notification::success(
                    "Success!",
                    format!("{}'s {} was changed!", self.config.entity_label, key),
                ));
                Ok(EditOutcome::Changed { display })
            }
            Err(FieldsError::Invalid { key, reason }) => {
                self.surface.set_cell(row, &key, previous)?;
                self.notify_invalid(&key, &reason);
                Ok(EditOutcome::Rejected { key, reason })
            }
            Err(err) => {
                warn!(%row, key = err.key(), %err, "edit rejected by schema");
                self.surface.set_cell(row, &key, previous)?;
                Err(err.into())
            }
        }
    }

    /// Abandon the edit and restore the previous display.
    pub fn cancel_edit(&mut self) -> Result<()> {
        let session = self.editing.take().ok_or(GridError::NoActiveEdit)?;
        self.surface
            .set_cell(session.row, &session.key, session.previous)?;
        debug!(row = %session.row, key = %session.key, "edit cancelled");
        Ok(())
    }

    // --- New rows ---

    /// Form submit: validate the complete record and append it as a new row.
    ///
    /// Rejected submissions insert nothing.
    pub fn submit_form(&mut self, record: &Record) -> Result<SubmitOutcome> {
        match self.schema.validate_entry(record) {
            Ok(()) => {}
            Err(FieldsError::Invalid { key, reason }) => {
                self.notify_invalid(&key, &reason);
                return Ok(SubmitOutcome::Rejected { key, reason });
            }
            Err(err) => {
                warn!(key = err.key(), %err, "form submission does not match schema");
                return Err(err.into());
            }
        }

        let mut cells = Record::with_capacity(self.schema.len());
        for field in self.schema.fields() {
            let raw = record.get(field.key()).map(String::as_str).unwrap_or("");
            cells.insert(field.key().to_string(), field.format_for_view(raw));
        }

        let id = self.surface.append_row(cells);
        self.sort.reset();
        info!(%id, "row added");
        self.notifier.notify(Notification::success(
            "Success!",
            format!("{} was added!", self.config.entity_label),
        ));
        Ok(SubmitOutcome::Added(id))
    }

    fn notify_invalid(&mut self, key: &str, reason: &str) {
        self.notifier
            .notify(Notification::error(format!("Invalid {key}!"), reason));
    }
}
