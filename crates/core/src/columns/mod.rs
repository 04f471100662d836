//! Column layouts
//!
//! A [`ColumnLayout`] is the column list of one table as a single client
//! session sees it. It is a plain value: the session owns it and every
//! [`ColumnCommand`] produces a new layout. Nothing here is shared between
//! sessions. The transforms themselves live in `helpdesk_domain::columns`.

use helpdesk_domain::columns::default_ticket_columns;
use helpdesk_domain::{ColumnCommand, ColumnDescriptor, HelpdeskError, Result};
use tracing::debug;

/// Column configuration of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    table: &'static str,
    columns: Vec<ColumnDescriptor>,
}

impl ColumnLayout {
    /// The preset layout of `table`.
    ///
    /// # Errors
    /// Returns `HelpdeskError::NotFound` for a table without a preset.
    pub fn preset(table: &str) -> Result<Self> {
        match table {
            "tickets" => Ok(Self::tickets()),
            other => Err(HelpdeskError::not_found("column layout", other)),
        }
    }

    /// Layout of the ticket table, starting from its preset.
    pub fn tickets() -> Self {
        Self { table: "tickets", columns: default_ticket_columns() }
    }

    /// Resume a session layout from the columns the client holds.
    ///
    /// # Errors
    /// Returns `HelpdeskError::NotFound` for a table without a preset.
    pub fn resume(table: &str, columns: Vec<ColumnDescriptor>) -> Result<Self> {
        let preset = Self::preset(table)?;
        Ok(Self { table: preset.table, columns })
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<ColumnDescriptor> {
        self.columns
    }

    /// Columns currently shown, in display order.
    pub fn visible(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter().filter(|c| c.visible)
    }

    /// Layout after applying `command`; `self` is left untouched.
    pub fn apply(&self, command: &ColumnCommand) -> Self {
        debug!(table = self.table, ?command, "column_command_applied");
        Self { table: self.table, columns: command.apply(&self.columns) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_returns_new_layout() {
        let layout = ColumnLayout::tickets();

        let hidden = layout.apply(&ColumnCommand::SetVisibility { id: "subject".into(), visible: false });
        assert!(!hidden.visible().any(|c| c.id == "subject"));
        assert!(layout.visible().any(|c| c.id == "subject"));

        let moved = hidden.apply(&ColumnCommand::Reorder { from: 0, to: Some(layout.columns().len() - 1) });
        assert_eq!(moved.columns().last().map(|c| c.id.as_str()), Some("id"));
        assert_eq!(layout, ColumnLayout::tickets());
    }

    #[test]
    fn test_cancelled_reorder_leaves_layout_alone() {
        let layout = ColumnLayout::tickets();
        assert_eq!(layout.apply(&ColumnCommand::Reorder { from: 2, to: None }), layout);
        assert_eq!(layout.apply(&ColumnCommand::Reorder { from: 2, to: Some(99) }), layout);
    }

    #[test]
    fn test_unknown_table_has_no_preset() {
        assert!(matches!(ColumnLayout::preset("invoices"), Err(HelpdeskError::NotFound(_))));
        assert!(ColumnLayout::resume("invoices", Vec::new()).is_err());
        assert_eq!(ColumnLayout::preset("tickets").unwrap(), ColumnLayout::tickets());
    }

    #[test]
    fn test_sessions_do_not_share_state() {
        let first = ColumnLayout::tickets().apply(&ColumnCommand::HideAll { except: vec!["id".into()] });
        let second = ColumnLayout::tickets();
        assert_eq!(first.visible().count(), 1);
        assert!(second.visible().count() > 1);
    }
}
