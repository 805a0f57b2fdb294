//! REST API router.
//!
//! Returns a composable `Router` mounted under `/api` by the app
//! router. Collection paths mirror the record store's four entities.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the REST API router. Mounted under `/api`.
pub fn rest_api_router(ctx: ApiContext) -> Router {
    Router::new()
        .route(
            "/apps",
            get(endpoints::appointments::list).post(endpoints::appointments::create),
        )
        .route(
            "/apps/:id",
            get(endpoints::appointments::detail).delete(endpoints::appointments::remove),
        )
        .route(
            "/doctors",
            get(endpoints::doctors::list).post(endpoints::doctors::create),
        )
        .route(
            "/doctors/:id",
            get(endpoints::doctors::detail).delete(endpoints::doctors::remove),
        )
        .route(
            "/patients",
            get(endpoints::patients::list).post(endpoints::patients::create),
        )
        .route(
            "/patients/:id",
            get(endpoints::patients::detail).delete(endpoints::patients::remove),
        )
        .route(
            "/symptoms",
            get(endpoints::symptoms::list).post(endpoints::symptoms::create),
        )
        .route(
            "/symptoms/:id",
            get(endpoints::symptoms::detail).delete(endpoints::symptoms::remove),
        )
        .with_state(ctx)
}

/// Build the full application router: HTML pages at the root, the REST
/// API under `/api`, request tracing over everything.
pub fn app_router(ctx: ApiContext) -> Router {
    Router::new()
        .merge(crate::html::pages_router(ctx.clone()))
        .nest("/api", rest_api_router(ctx))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::db::sqlite::open_memory_database;

    fn test_app() -> Router {
        let conn = open_memory_database().unwrap();
        app_router(ApiContext::new(conn))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn response_json(response: axum::http::Response<Body>) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 65536).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    fn mina_lee_body() -> serde_json::Value {
        serde_json::json!({
            "first_name": "Mina",
            "last_name": "Lee",
            "gender": "Female",
            "age": 22,
            "birth": "1997-11-21",
            "doctor": "Amy",
            "month": "April",
            "symptom": "Headache"
        })
    }

    #[tokio::test]
    async fn collections_start_empty() {
        for uri in ["/api/apps", "/api/doctors", "/api/patients", "/api/symptoms"] {
            let app = test_app();
            let response = app.oneshot(get_request(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            let json = response_json(response).await;
            assert_eq!(json, serde_json::json!([]), "{uri}");
        }
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let app = test_app();
        let response = app.oneshot(get_request("/api/wards")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn post_doctor_then_fetch() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/doctors",
                serde_json::json!({"name": "Amy"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = response_json(response).await;
        assert_eq!(created["name"], "Amy");
        let id = created["id"].as_i64().unwrap();

        let response = app
            .oneshot(get_request(&format!("/api/doctors/{id}")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await, created);
    }

    #[tokio::test]
    async fn post_doctor_twice_returns_same_row() {
        let app = test_app();

        let first = response_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/doctors",
                    serde_json::json!({"name": "Amy"}),
                ))
                .await
                .unwrap(),
        )
        .await;
        let second = response_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/doctors",
                    serde_json::json!({"name": "Amy"}),
                ))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(first, second);

        let all = response_json(app.oneshot(get_request("/api/doctors")).await.unwrap()).await;
        assert_eq!(all.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn post_doctor_without_name_is_422() {
        let app = test_app();
        let response = app
            .oneshot(json_request("POST", "/api/doctors", serde_json::json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = response_json(response).await;
        assert_eq!(json["error"]["code"], "VALIDATION");
        assert_eq!(json["error"]["message"], "parameter name required");
    }

    #[tokio::test]
    async fn missing_doctor_is_404() {
        let app = test_app();
        let response = app.oneshot(get_request("/api/doctors/7")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = response_json(response).await;
        assert_eq!(json["error"]["message"], "doctor not found");
    }

    #[tokio::test]
    async fn delete_missing_doctor_is_404() {
        let app = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/doctors/7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn post_patient_then_list() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/patients",
                serde_json::json!({
                    "first_name": "Mina",
                    "last_name": "Lee",
                    "gender": "Female",
                    "age": 22,
                    "birth": "1997-11-21"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = response_json(response).await;
        assert_eq!(created["first_name"], "Mina");
        assert_eq!(created["age"], 22);

        let all = response_json(app.oneshot(get_request("/api/patients")).await.unwrap()).await;
        assert_eq!(all.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn post_patient_missing_birth_is_422() {
        let app = test_app();
        let response = app
            .oneshot(json_request(
                "POST",
                "/api/patients",
                serde_json::json!({
                    "first_name": "Mina",
                    "last_name": "Lee",
                    "gender": "Female",
                    "age": 22
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = response_json(response).await;
        assert_eq!(json["error"]["message"], "parameter birth required");
    }

    #[tokio::test]
    async fn post_appointment_returns_joined_record() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/apps", mina_lee_body()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let created = response_json(response).await;
        assert_eq!(created["first_name"], "Mina");
        assert_eq!(created["doctor"], "Amy");
        assert_eq!(created["month"], "April");
        assert_eq!(created["symptom"], "Headache");
        let id = created["id"].as_i64().unwrap();

        // Write-then-read: the stored row equals the returned one.
        let fetched = response_json(
            app.clone()
                .oneshot(get_request(&format!("/api/apps/{id}")))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(fetched, created);

        // The upsert materialized the referenced doctor.
        let doctors = response_json(app.oneshot(get_request("/api/doctors")).await.unwrap()).await;
        assert_eq!(doctors.as_array().unwrap().len(), 1);
        assert_eq!(doctors[0]["name"], "Amy");
    }

    #[tokio::test]
    async fn post_appointment_missing_doctor_inserts_nothing() {
        let app = test_app();

        let mut body = mina_lee_body();
        body.as_object_mut().unwrap().remove("doctor");

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/apps", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = response_json(response).await;
        assert_eq!(json["error"]["message"], "parameter doctor required");

        // Validation failed before any write — every table is empty.
        for uri in ["/api/apps", "/api/doctors", "/api/patients", "/api/symptoms"] {
            let json =
                response_json(app.clone().oneshot(get_request(uri)).await.unwrap()).await;
            assert_eq!(json, serde_json::json!([]), "{uri}");
        }
    }

    #[tokio::test]
    async fn delete_appointment_round_trip() {
        let app = test_app();

        let created = response_json(
            app.clone()
                .oneshot(json_request("POST", "/api/apps", mina_lee_body()))
                .await
                .unwrap(),
        )
        .await;
        let id = created["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/apps/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["message"], "appointment deleted successfully");

        let apps = response_json(app.oneshot(get_request("/api/apps")).await.unwrap()).await;
        assert_eq!(apps, serde_json::json!([]));
    }

    #[tokio::test]
    async fn delete_doctor_cascades_to_appointments() {
        let app = test_app();

        app.clone()
            .oneshot(json_request("POST", "/api/apps", mina_lee_body()))
            .await
            .unwrap();

        let doctors = response_json(
            app.clone().oneshot(get_request("/api/doctors")).await.unwrap(),
        )
        .await;
        let doctor_id = doctors[0]["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/doctors/{doctor_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let apps = response_json(app.oneshot(get_request("/api/apps")).await.unwrap()).await;
        assert_eq!(apps, serde_json::json!([]));
    }

    #[tokio::test]
    async fn post_symptom_then_delete() {
        let app = test_app();

        let created = response_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/symptoms",
                    serde_json::json!({"name": "Headache"}),
                ))
                .await
                .unwrap(),
        )
        .await;
        let id = created["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/symptoms/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = response_json(response).await;
        assert_eq!(json["message"], "symptom deleted successfully");
    }
}
