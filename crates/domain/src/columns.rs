//! Table column configuration
//!
//! Columns are plain descriptors kept in display order. Every operation is a
//! pure transform returning a new list; the caller owns the current state.
//! UI events map onto [`ColumnCommand`] values.

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::MIN_COLUMN_WIDTH;

/// One column of a table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    pub id: String,
    pub label: String,
    pub visible: bool,
    pub resizable: bool,
    pub sortable: bool,
    /// Width in pixels; `None` lets the table size the column
    #[serde(default)]
    pub width: Option<u16>,
}

impl ColumnDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            visible: true,
            resizable: true,
            sortable: true,
            width: None,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn fixed(mut self) -> Self {
        self.resizable = false;
        self
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }
}

/// User intent against a column list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ColumnCommand {
    SetVisibility { id: String, visible: bool },
    /// `to` is absent when a drag is cancelled
    Reorder { from: usize, to: Option<usize> },
    ShowAll,
    HideAll {
        #[serde(default)]
        except: Vec<String>,
    },
    Resize { id: String, width: u16 },
}

impl ColumnCommand {
    /// Apply the command, producing the next column list.
    pub fn apply(&self, columns: &[ColumnDescriptor]) -> Vec<ColumnDescriptor> {
        match self {
            Self::SetVisibility { id, visible } => set_visibility(columns, id, *visible),
            Self::Reorder { from, to } => reorder(columns, *from, *to),
            Self::ShowAll => show_all(columns),
            Self::HideAll { except } => hide_all(columns, except),
            Self::Resize { id, width } => resize(columns, id, *width),
        }
    }
}

/// Change the visibility of one column. Unknown ids leave the list unchanged.
pub fn set_visibility(columns: &[ColumnDescriptor], id: &str, visible: bool) -> Vec<ColumnDescriptor> {
    columns
        .iter()
        .map(|column| {
            if column.id == id {
                ColumnDescriptor { visible, ..column.clone() }
            } else {
                column.clone()
            }
        })
        .collect()
}

/// Move the column at `from` to `to`.
///
/// No-op when the drag was cancelled (`to` is `None`) or either index falls
/// outside the list.
pub fn reorder(columns: &[ColumnDescriptor], from: usize, to: Option<usize>) -> Vec<ColumnDescriptor> {
    let mut next = columns.to_vec();
    let Some(to) = to else {
        return next;
    };
    if from >= next.len() || to >= next.len() || from == to {
        return next;
    }
    let moved = next.remove(from);
    next.insert(to, moved);
    next
}

pub fn show_all(columns: &[ColumnDescriptor]) -> Vec<ColumnDescriptor> {
    columns.iter().map(|column| ColumnDescriptor { visible: true, ..column.clone() }).collect()
}

/// Hide every column except the listed ids, which become visible.
pub fn hide_all<S: AsRef<str>>(columns: &[ColumnDescriptor], except: &[S]) -> Vec<ColumnDescriptor> {
    columns
        .iter()
        .map(|column| {
            let keep = except.iter().any(|id| id.as_ref() == column.id);
            ColumnDescriptor { visible: keep, ..column.clone() }
        })
        .collect()
}

/// Set the width of a resizable column, clamped to [`MIN_COLUMN_WIDTH`].
/// Fixed-width and unknown columns are left untouched.
pub fn resize(columns: &[ColumnDescriptor], id: &str, width: u16) -> Vec<ColumnDescriptor> {
    columns
        .iter()
        .map(|column| {
            if column.id == id && column.resizable {
                ColumnDescriptor { width: Some(width.max(MIN_COLUMN_WIDTH)), ..column.clone() }
            } else {
                column.clone()
            }
        })
        .collect()
}

/// Column preset of the ticket table.
pub fn default_ticket_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("id", "#").fixed().with_width(80),
        ColumnDescriptor::new("subject", "Subject").with_width(320),
        ColumnDescriptor::new("client", "Client"),
        ColumnDescriptor::new("status", "Status").with_width(120),
        ColumnDescriptor::new("priority", "Priority").with_width(110),
        ColumnDescriptor::new("channel", "Channel").with_width(110),
        ColumnDescriptor::new("assignees", "Assignees").unsortable(),
        ColumnDescriptor::new("sla", "SLA").with_width(90),
        ColumnDescriptor::new("tags", "Tags").unsortable().hidden(),
        ColumnDescriptor::new("updatedAt", "Updated"),
        ColumnDescriptor::new("createdAt", "Created").hidden(),
    ]
}
