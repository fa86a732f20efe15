use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::params::care_task::{IndexParams, SortField};
use crate::params::WithSortDefaults;
use crate::{AppState, Error};
use domain::care_task as CareTaskApi;
use domain::Id;
use log::*;
use service::config::ApiVersion;

/// GET all CareTasks, optionally narrowed by status or open/completed and
/// ordered by a sortable field.
#[utoipa::path(
    get,
    path = "/care_tasks",
    params(ApiVersion, IndexParams),
    responses(
        (status = 200, description = "Successfully retrieved all CareTasks", body = [domain::care_tasks::Model]),
        (status = 405, description = "Method not allowed"),
        (status = 422, description = "Unprocessable Entity")
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all CareTasks");
    debug!("Filter Params: {params:?}");

    // Apply default sorting parameters
    let mut params = params;
    IndexParams::apply_sort_defaults(
        &mut params.sort_by,
        &mut params.sort_order,
        SortField::DueDate,
    );

    let care_tasks =
        CareTaskApi::find_by(app_state.care_store_ref(), params.into_task_query()).await;

    debug!("Found CareTasks: {care_tasks:?}");

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), care_tasks)))
}

/// GET a particular CareTask specified by its id.
#[utoipa::path(
    get,
    path = "/care_tasks/{id}",
    params(
        ApiVersion,
        ("id" = String, Path, description = "CareTask id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a specific CareTask by its id", body = domain::care_tasks::Model),
        (status = 404, description = "CareTask not found"),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET CareTask by id: {id}");

    let care_task = CareTaskApi::find_by_id(app_state.care_store_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), care_task)))
}
