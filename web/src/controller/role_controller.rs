use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::{AppState, Error};
use domain::roles::Role;
use domain::screen as ScreenApi;
use log::*;
use service::config::ApiVersion;

/// GET the four fixed roles, in the order the role menu presents them.
#[utoipa::path(
    get,
    path = "/roles",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved all Roles", body = [domain::roles::Role]),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(_app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Roles");

    Ok(Json(ApiResponse::new(
        StatusCode::OK.into(),
        Role::all().to_vec(),
    )))
}

/// GET the screen catalog for a role: the ordered sub-options its home menu
/// offers. Patient and clinician get two screens, coordinator and admin one.
#[utoipa::path(
    get,
    path = "/roles/{role}/screens",
    params(
        ApiVersion,
        ("role" = String, Path, description = "Role whose screen set to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved the Screens for a Role", body = [domain::screens::Model]),
        (status = 405, description = "Method not allowed"),
        (status = 422, description = "Unknown role name")
    )
)]
pub async fn screens(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(role): Path<String>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Screens for role: {role}");

    let screens = ScreenApi::find_by_role_str(app_state.care_store_ref(), &role).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), screens)))
}
