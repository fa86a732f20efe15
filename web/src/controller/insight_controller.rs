use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::controller::ApiResponse;
use crate::extractors::compare_api_version::CompareApiVersion;
use crate::{AppState, Error};
use domain::insight as InsightApi;
use domain::Id;
use log::*;
use service::config::ApiVersion;

/// Request body for asking the care assistant a question.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AskBody {
    pub question: String,
}

/// Response body echoing the question together with the assistant's answer
/// text, or the fixed fallback when the assistant could not produce one.
#[derive(Debug, Serialize, ToSchema)]
pub struct AskResponse {
    pub question: String,
    pub answer: String,
}

/// GET all Insights.
#[utoipa::path(
    get,
    path = "/insights",
    params(ApiVersion),
    responses(
        (status = 200, description = "Successfully retrieved all Insights", body = [domain::insights::Model]),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn index(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET all Insights");

    let insights = InsightApi::find_all(app_state.care_store_ref()).await;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), insights)))
}

/// GET a particular Insight specified by its id.
#[utoipa::path(
    get,
    path = "/insights/{id}",
    params(
        ApiVersion,
        ("id" = String, Path, description = "Insight id to retrieve")
    ),
    responses(
        (status = 200, description = "Successfully retrieved a specific Insight by its id", body = domain::insights::Model),
        (status = 404, description = "Insight not found"),
        (status = 405, description = "Method not allowed")
    )
)]
pub async fn read(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Path(id): Path<Id>,
) -> Result<impl IntoResponse, Error> {
    debug!("GET Insight by id: {id}");

    let insight = InsightApi::find_by_id(app_state.care_store_ref(), id).await?;

    Ok(Json(ApiResponse::new(StatusCode::OK.into(), insight)))
}

/// POST a free-text question to the care assistant.
///
/// This endpoint always answers 200: the app's contract is the text it
/// displays, and any upstream failure is replaced by the fixed fallback
/// answer before it reaches the client.
#[utoipa::path(
    post,
    path = "/insights/ask",
    params(ApiVersion),
    request_body = AskBody,
    responses(
        (status = 200, description = "Assistant answer or the fixed fallback text", body = AskResponse),
        (status = 405, description = "Method not allowed"),
        (status = 422, description = "Unprocessable Entity")
    )
)]
pub async fn ask(
    CompareApiVersion(_v): CompareApiVersion,
    State(app_state): State<AppState>,
    Json(body): Json<AskBody>,
) -> Result<impl IntoResponse, Error> {
    debug!("POST Ask the care assistant, question length: {}", body.question.len());

    let answer = InsightApi::ask_assistant(&app_state.config, &body.question).await;

    Ok(Json(ApiResponse::new(
        StatusCode::OK.into(),
        AskResponse {
            question: body.question,
            answer: answer.answer,
        },
    )))
}
