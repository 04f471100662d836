//! Clients, employees and departments

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use helpdesk_domain::{Client, ClientId, Department, DepartmentId, Employee, EmployeeId};
use serde::Deserialize;

use super::error::ApiResult;
use crate::context::AppContext;
use crate::utils::execute_command;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmployeeQuery {
    pub include_inactive: bool,
}

pub async fn list_clients(State(ctx): State<Arc<AppContext>>) -> ApiResult<Vec<Client>> {
    execute_command("directory::list_clients", || ctx.directory.clients()).map(Json)
}

pub async fn get_client(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<ClientId>,
) -> ApiResult<Client> {
    execute_command("directory::get_client", || ctx.directory.client(&id)).map(Json)
}

/// Active employees, or everyone with `?includeInactive=true`.
pub async fn list_employees(
    State(ctx): State<Arc<AppContext>>,
    Query(query): Query<EmployeeQuery>,
) -> ApiResult<Vec<Employee>> {
    execute_command("directory::list_employees", || {
        ctx.directory.employees(query.include_inactive)
    })
    .map(Json)
}

pub async fn get_employee(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<EmployeeId>,
) -> ApiResult<Employee> {
    execute_command("directory::get_employee", || ctx.directory.employee(&id)).map(Json)
}

pub async fn list_departments(State(ctx): State<Arc<AppContext>>) -> ApiResult<Vec<Department>> {
    execute_command("directory::list_departments", || ctx.directory.departments()).map(Json)
}

pub async fn get_department(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<DepartmentId>,
) -> ApiResult<Department> {
    execute_command("directory::get_department", || ctx.directory.department(&id)).map(Json)
}
