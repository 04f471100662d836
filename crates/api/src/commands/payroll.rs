//! Payroll sheets and work type pricing

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use helpdesk_core::NewPayrollSheet;
use helpdesk_domain::{
    EmployeeId, PayrollItemId, PayrollSheet, PayrollSheetId, PayrollStatus, WorkType, WorkTypeId,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::error::{ApiError, ApiResult};
use crate::context::AppContext;
use crate::utils::execute_command;

/* -------------------------------------------------------------------------- */
/* Requests */
/* -------------------------------------------------------------------------- */

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SheetQuery {
    pub employee_id: Option<EmployeeId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub work_type_id: WorkTypeId,
    pub quantity: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct TransitionRequest {
    pub status: PayrollStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepriceRequest {
    pub price_per_unit: Decimal,
}

/* -------------------------------------------------------------------------- */
/* Work types */
/* -------------------------------------------------------------------------- */

pub async fn list_work_types(State(ctx): State<Arc<AppContext>>) -> ApiResult<Vec<WorkType>> {
    execute_command("payroll::list_work_types", || ctx.payroll.work_types()).map(Json)
}

/// Change a work type's price. Lines already on sheets keep their snapshot.
pub async fn reprice_work_type(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<WorkTypeId>,
    payload: Result<Json<RepriceRequest>, JsonRejection>,
) -> ApiResult<WorkType> {
    let Json(request) = payload?;
    execute_command("payroll::reprice_work_type", || {
        ctx.payroll.reprice_work_type(&id, request.price_per_unit)
    })
    .map(Json)
}

/* -------------------------------------------------------------------------- */
/* Sheets */
/* -------------------------------------------------------------------------- */

pub async fn list_sheets(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<SheetQuery>,
) -> ApiResult<Vec<PayrollSheet>> {
    execute_command("payroll::list_sheets", || {
        ctx.payroll.list_sheets(query.employee_id.as_ref())
    })
    .map(Json)
}

pub async fn get_sheet(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<PayrollSheetId>,
) -> ApiResult<PayrollSheet> {
    execute_command("payroll::get_sheet", || ctx.payroll.get_sheet(&id)).map(Json)
}

/// Open a new draft sheet; responds `201 Created`.
pub async fn create_sheet(
    State(ctx): State<Arc<AppContext>>,
    payload: Result<Json<NewPayrollSheet>, JsonRejection>,
) -> Result<(StatusCode, Json<PayrollSheet>), ApiError> {
    let Json(request) = payload?;
    let sheet = execute_command("payroll::create_sheet", || ctx.payroll.create_sheet(request))?;
    Ok((StatusCode::CREATED, Json(sheet)))
}

pub async fn add_item(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<PayrollSheetId>,
    payload: Result<Json<AddItemRequest>, JsonRejection>,
) -> ApiResult<PayrollSheet> {
    let Json(request) = payload?;
    execute_command("payroll::add_item", || {
        ctx.payroll.add_item(&id, &request.work_type_id, request.quantity)
    })
    .map(Json)
}

pub async fn remove_item(
    State(ctx): State<Arc<AppContext>>,
    Path((id, item_id)): Path<(PayrollSheetId, PayrollItemId)>,
) -> ApiResult<PayrollSheet> {
    execute_command("payroll::remove_item", || ctx.payroll.remove_item(&id, &item_id)).map(Json)
}

/// Move the sheet along draft → approved → paid.
pub async fn transition_sheet(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<PayrollSheetId>,
    payload: Result<Json<TransitionRequest>, JsonRejection>,
) -> ApiResult<PayrollSheet> {
    let Json(request) = payload?;
    execute_command("payroll::transition", || ctx.payroll.transition(&id, request.status))
        .map(Json)
}
