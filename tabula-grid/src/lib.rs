//! Editable table controller
//!
//! This crate drives an editable table on top of the `tabula-fields` schema:
//! sorting by column, selecting rows, editing cells inline and adding rows
//! through a generated form, with per-field validation and transient
//! notifications.
//!
//! ## Overview
//!
//! - **One controller = one table** - [`TableController`] owns the schema and all UI state
//! - **Pluggable front end** - rows live on a [`RenderSurface`], messages go to a [`Notifier`]
//! - **Declarative widgets** - the controller asks for inputs with [`InputRequest`]
//! - **No partial state** - rejected edits restore the previous text, rejected rows are dropped
//!
//! ## Basic Usage
//!
//! ```rust
//! use tabula_fields::record;
//! use tabula_grid::{GridConfig, RenderSurface, SubmitOutcome, TableController};
//!
//! # fn example() -> tabula_grid::Result<()> {
//! let mut table = TableController::employees(GridConfig::default(), Vec::new())?;
//!
//! let outcome = table.submit_form(&record([
//!     ("name", "Airi Satou"),
//!     ("position", "Accountant"),
//!     ("office", "Tokyo"),
//!     ("age", "33"),
//!     ("salary", "162700"),
//! ]))?;
//! assert!(matches!(outcome, SubmitOutcome::Added(_)));
//!
//! let row = table.surface().row_ids()[0];
//! assert_eq!(table.surface().cell(row, "salary")?, "$162,700");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod controller;
pub mod defaults;
pub mod error;
pub mod notify;
pub mod surface;
pub mod types;
pub mod widget;

pub use config::GridConfig;
pub use controller::{EditOutcome, EditSession, SubmitOutcome, TableController};
pub use defaults::{employee_fields, employee_schema, OFFICES};
pub use error::{GridError, Result};
pub use notify::{Level, Notification, NotificationCenter, Notifier};
pub use surface::{MemoryTable, RenderSurface};
pub use types::{Row, RowId};
pub use widget::{form_controls, FormControl, InputKind, InputRequest};
