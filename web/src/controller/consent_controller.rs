use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::{AppState, Error};
use domain::consent as ConsentApi;
use domain::Id;
use log::*;
use service::config::ApiVersion;

/// GET all Consents.
#[utoipa::path(
    get,
    path = "/consents",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved all Consents", body = [domain::consents::Model]),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Consents");

    let consents = ConsentApi::find_all(app_state.care_store_ref()).await;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), consents)))
}

/// GET a particular Consent specified by its id.
#[utoipa::path(
    get,
    path = "/consents/{id}",
    params(
        ApiVersion,
        ("id" = String, Path, description = "Consent id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a specific Consent by its id", body = domain::consents::Model),
        (status = 404, description = "Consent not found"),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Consent by id: {id}");

    let consent = ConsentApi::find_by_id(app_state.care_store_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), consent)))
}
