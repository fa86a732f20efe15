use crate::{params, AppState};
use axum::{routing::get, routing::post, Router};
use tower_http::services::ServeDir;

use crate::controller::{
    care_task_controller, consent_controller, health_check_controller, insight_controller,
    role_controller, user_controller,
};

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "CareLink Companion API"
        ),
        paths(
            care_task_controller::index,
            care_task_controller::read,
            consent_controller::index,
            consent_controller::read,
            health_check_controller::health_check,
            insight_controller::index,
            insight_controller::read,
            insight_controller::ask,
            role_controller::index,
            role_controller::screens,
            user_controller::current,
        ),
        components(
            schemas(
                domain::care_tasks::Model,
                domain::consents::Model,
                domain::insights::Model,
                domain::screens::Model,
                domain::users::Model,
                domain::roles::Role,
                domain::task_status::TaskStatus,
                domain::consent_status::ConsentStatus,
                insight_controller::AskBody,
                insight_controller::AskResponse,
                params::care_task::SortField,
                params::SortOrder,
            )
        ),
        tags(
            (name = "carelink_companion", description = "CareLink Companion role-scoped care data API")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(care_task_routes(app_state.clone()))
        .merge(consent_routes(app_state.clone()))
        .merge(health_routes())
        .merge(insight_routes(app_state.clone()))
        .merge(role_routes(app_state.clone()))
        .merge(user_routes(app_state))
        .merge(RapiDoc::with_openapi("/api-docs/openapi2.json", ApiDoc::openapi()).path("/rapidoc"))
        .fallback_service(static_routes())
}

fn care_task_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/care_tasks", get(care_task_controller::index))
        .route("/care_tasks/{id}", get(care_task_controller::read))
        .with_state(app_state)
}

fn consent_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/consents", get(consent_controller::index))
        .route("/consents/{id}", get(consent_controller::read))
        .with_state(app_state)
}

fn health_routes() -> Router {
    Router::new().route("/health", get(health_check_controller::health_check))
}

fn insight_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/insights", get(insight_controller::index))
        .route("/insights/{id}", get(insight_controller::read))
        .route("/insights/ask", post(insight_controller::ask))
        .with_state(app_state)
}

fn role_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/roles", get(role_controller::index))
        .route("/roles/{role}/screens", get(role_controller::screens))
        .with_state(app_state)
}

fn user_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/users/current", get(user_controller::current))
        .with_state(app_state)
}

// This will serve static files that we can use as a "fallback" for when the server panics
pub fn static_routes() -> Router {
    Router::new().fallback_service(ServeDir::new("./"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use service::config::{ApiVersion, Config};
    use tower::ServiceExt;

    fn test_router() -> Router {
        let care_store = service::init_care_store();
        let app_state = AppState::new(Config::default(), &care_store);
        define_routes(app_state)
    }

    fn versioned_get(uri: &str) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .header(ApiVersion::field_name(), ApiVersion::default_version())
            .body(Body::empty())
            .unwrap()
    }

    async fn response_data(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        body["data"].clone()
    }

    #[tokio::test]
    async fn health_check_needs_no_version_header() {
        let response = test_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn versioned_routes_reject_a_missing_version_header() {
        let response = test_router()
            .oneshot(Request::builder().uri("/roles").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn roles_index_lists_the_four_roles_in_menu_order() {
        let response = test_router().oneshot(versioned_get("/roles")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let data = response_data(response).await;
        assert_eq!(
            data,
            serde_json::json!(["patient", "clinician", "coordinator", "admin"])
        );
    }

    #[tokio::test]
    async fn each_role_sees_its_own_screen_count() {
        let router = test_router();

        for (role, count) in [
            ("patient", 2),
            ("clinician", 2),
            ("coordinator", 1),
            ("admin", 1),
        ] {
            let response = router
                .clone()
                .oneshot(versioned_get(&format!("/roles/{role}/screens")))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let data = response_data(response).await;
            assert_eq!(
                data.as_array().unwrap().len(),
                count,
                "unexpected screen count for {role}"
            );
        }
    }

    #[tokio::test]
    async fn unknown_role_in_screens_path_is_unprocessable() {
        let response = test_router()
            .oneshot(versioned_get("/roles/superuser/screens"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn current_user_matches_the_selected_role() {
        let response = test_router()
            .oneshot(versioned_get("/users/current?role=clinician"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let data = response_data(response).await;
        assert_eq!(data["role"], "clinician");
    }

    #[tokio::test]
    async fn unknown_role_for_current_user_is_unprocessable() {
        let response = test_router()
            .oneshot(versioned_get("/users/current?role=superuser"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn open_and_completed_task_listings_partition_the_collection() {
        let router = test_router();

        let all = response_data(router.clone().oneshot(versioned_get("/care_tasks")).await.unwrap())
            .await;
        let open = response_data(
            router
                .clone()
                .oneshot(versioned_get("/care_tasks?open=true"))
                .await
                .unwrap(),
        )
        .await;
        let completed = response_data(
            router
                .oneshot(versioned_get("/care_tasks?open=false"))
                .await
                .unwrap(),
        )
        .await;

        assert_eq!(
            open.as_array().unwrap().len() + completed.as_array().unwrap().len(),
            all.as_array().unwrap().len()
        );
        assert!(open
            .as_array()
            .unwrap()
            .iter()
            .all(|t| t["status"] != "completed"));
        assert!(completed
            .as_array()
            .unwrap()
            .iter()
            .all(|t| t["status"] == "completed"));
    }

    #[tokio::test]
    async fn task_listing_defaults_to_due_date_ascending() {
        let response = test_router().oneshot(versioned_get("/care_tasks")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let data = response_data(response).await;
        let due_dates: Vec<String> = data
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["due_date"].as_str().unwrap().to_string())
            .collect();

        let mut sorted = due_dates.clone();
        sorted.sort();
        assert_eq!(due_dates, sorted);
    }

    #[tokio::test]
    async fn unknown_care_task_id_is_not_found() {
        let response = test_router()
            .oneshot(versioned_get(&format!(
                "/care_tasks/{}",
                domain::Id::new_v4()
            )))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn consents_listing_returns_the_seeded_records() {
        let response = test_router().oneshot(versioned_get("/consents")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let data = response_data(response).await;
        assert!(!data.as_array().unwrap().is_empty());
        assert!(data
            .as_array()
            .unwrap()
            .iter()
            .all(|c| c["scope"].is_string() && c["status"].is_string()));
    }

    #[tokio::test]
    async fn ask_answers_with_the_fallback_when_no_assistant_is_configured() {
        std::env::remove_var("ASSISTANT_BASE_URL");
        let router = test_router();

        let request = Request::builder()
            .method("POST")
            .uri("/insights/ask")
            .header(ApiVersion::field_name(), ApiVersion::default_version())
            .header("content-type", "application/json")
            .body(Body::from(r#"{"question": "What should I do next?"}"#))
            .unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let data = response_data(response).await;
        assert_eq!(data["question"], "What should I do next?");
        assert_eq!(data["answer"], domain::insight::FALLBACK_ANSWER);
    }
}
