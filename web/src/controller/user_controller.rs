use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::user::CurrentParams;
use crate::{AppState, Error};
use domain::user as UserApi;
use log::*;
use service::config::ApiVersion;

/// GET the sample user acting as the selected role. With no authentication in
/// this service, the role query parameter is how the app declares who is
/// using it for the session.
#[utoipa::path(
    get,
    path = "/users/current",
    params(ApiVersion, CurrentParams),
    responses(
        (status = 200, description = "Successfully retrieved the current User for a role", body = domain::users::Model),
        (status = 405, description = "Method not allowed"),
        (status = 422, description = "Unknown role name")
    )
)]
pub async fn current(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Query(params): Query<CurrentParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET current User for role: {}", params.role);

    let user = UserApi::find_by_role_str(app_state.care_store_ref(), &params.role).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), user)))
}
