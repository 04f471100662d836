//! Table column configuration
//!
//! Column layouts belong to the client session. The server only hands out
//! presets and evaluates commands against the columns the client sends.

use axum::extract::rejection::JsonRejection;
use axum::extract::Path;
use axum::Json;
use helpdesk_core::ColumnLayout;
use helpdesk_domain::{ColumnCommand, ColumnDescriptor};
use serde::{Deserialize, Serialize};

use super::error::ApiResult;
use crate::utils::execute_command;

fn default_table() -> String {
    "tickets".to_string()
}

#[derive(Debug, Deserialize)]
pub struct ApplyColumnsRequest {
    #[serde(default = "default_table")]
    pub table: String,
    /// The session's current columns; the table preset when absent
    #[serde(default)]
    pub columns: Option<Vec<ColumnDescriptor>>,
    pub command: ColumnCommand,
}

#[derive(Debug, Serialize)]
pub struct ColumnsResponse {
    pub table: &'static str,
    pub columns: Vec<ColumnDescriptor>,
}

impl From<ColumnLayout> for ColumnsResponse {
    fn from(layout: ColumnLayout) -> Self {
        Self { table: layout.table(), columns: layout.into_columns() }
    }
}

pub async fn get_columns(Path(table): Path<String>) -> ApiResult<ColumnsResponse> {
    execute_command("columns::get", || ColumnLayout::preset(&table).map(ColumnsResponse::from))
        .map(Json)
}

/// Apply one column command to the columns in the request.
///
/// Commands naming unknown columns or out-of-range positions return the
/// columns unchanged.
pub async fn apply_column_command(
    payload: Result<Json<ApplyColumnsRequest>, JsonRejection>,
) -> ApiResult<ColumnsResponse> {
    let Json(request) = payload?;
    execute_command("columns::apply", || {
        let layout = match request.columns {
            Some(columns) => ColumnLayout::resume(&request.table, columns)?,
            None => ColumnLayout::preset(&request.table)?,
        };
        Ok(layout.apply(&request.command).into())
    })
    .map(Json)
}

pub async fn reset_columns(Path(table): Path<String>) -> ApiResult<ColumnsResponse> {
    execute_command("columns::reset", || ColumnLayout::preset(&table).map(ColumnsResponse::from))
        .map(Json)
}
