//! `/api/v1/employees` handlers. Create and update take their fields from the
//! query string. An id that is not a GUID matches no employee and answers 404.

use axum::{Json, extract::State, http::StatusCode};
use platform_api::ApiResult;
use products_hr::{EmployeeForm, EmployeeResponse, EmployeeShortResponse};
use tracing::instrument;
use uuid::Uuid;

use super::{
    AppState,
    extract::{ApiPath, ApiQuery},
};

#[instrument(name = "http.employees.list", skip_all)]
pub async fn list(State(state): State<AppState>) -> Json<Vec<EmployeeShortResponse>> {
    Json(state.hr.list_employees().await)
}

#[instrument(name = "http.employees.get", skip(state))]
pub async fn get(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> ApiResult<Json<EmployeeResponse>> {
    Ok(Json(state.hr.employee(id).await?))
}

#[instrument(name = "http.employees.create", skip_all)]
pub async fn create(
    State(state): State<AppState>,
    ApiQuery(form): ApiQuery<EmployeeForm>,
) -> ApiResult<Json<EmployeeResponse>> {
    Ok(Json(state.hr.create_employee(form).await?))
}

#[instrument(name = "http.employees.update", skip(state, form))]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(form): ApiQuery<EmployeeForm>,
) -> ApiResult<Json<EmployeeResponse>> {
    Ok(Json(state.hr.update_employee(id, form).await?))
}

#[instrument(name = "http.employees.delete", skip(state))]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<Uuid>) -> ApiResult<StatusCode> {
    state.hr.delete_employee(id).await?;
    Ok(StatusCode::OK)
}
