use axum::{Json, extract::State};
use products_hr::RoleResponse;
use tracing::instrument;

use super::AppState;

#[instrument(name = "http.roles.list", skip_all)]
pub async fn list(State(state): State<AppState>) -> Json<Vec<RoleResponse>> {
    Json(state.hr.list_roles().await)
}
