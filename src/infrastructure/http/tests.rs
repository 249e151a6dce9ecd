//! 路由级测试：真实 Router + 内存 SQLite

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use super::{build_router, AppState};
use crate::application::{ActivityRepositoryPort, SignupRepositoryPort};
use crate::domain::Activity;
use crate::infrastructure::persistence::sqlite::{
    test_pool, DbPool, SqliteActivityRepository, SqliteSignupRepository,
};

struct TestApp {
    router: Router,
    pool: DbPool,
}

impl TestApp {
    async fn new() -> Self {
        let pool = test_pool().await;
        let router = build_router(Arc::new(AppState::from_pool(pool.clone())));
        Self { router, pool }
    }

    async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn json(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, bytes) = self.request(method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn add_activity(&self, name: &str, difficulty: i64) -> i64 {
        SqliteActivityRepository::new(self.pool.clone())
            .insert(&Activity::new(Some(name.to_string()), Some(difficulty)))
            .await
            .unwrap()
            .id
    }

    async fn signup_count(&self) -> usize {
        SqliteSignupRepository::new(self.pool.clone())
            .find_all()
            .await
            .unwrap()
            .len()
    }
}

fn validation_errors() -> Value {
    json!({"errors": ["validation errors"]})
}

#[tokio::test]
async fn test_home_is_empty_ok() {
    let app = TestApp::new().await;
    let (status, body) = app.request("GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_create_camper_returns_created_row() {
    let app = TestApp::new().await;

    let (status, body) = app
        .json("POST", "/campers", Some(json!({"name": "Alex", "age": 12})))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "name": "Alex", "age": 12}));

    let (status, body) = app.json("GET", "/campers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": 1, "name": "Alex", "age": 12, "signups": []}));
}

#[tokio::test]
async fn test_create_camper_rejects_invalid_fields() {
    let app = TestApp::new().await;

    let invalid = [
        json!({"name": "", "age": 12}),
        json!({"age": 12}),
        json!({"name": null, "age": 12}),
        json!({"name": "Alex", "age": 7}),
        json!({"name": "Alex", "age": 19}),
        json!({"name": "Alex"}),
        json!({"name": "Alex", "age": "12"}),
    ];
    for body in invalid {
        let (status, response) = app.json("POST", "/campers", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(response, validation_errors());
    }

    let (_, campers) = app.json("GET", "/campers", None).await;
    assert_eq!(campers, json!([]));
}

#[tokio::test]
async fn test_create_camper_accepts_age_bounds() {
    let app = TestApp::new().await;
    for age in [8, 18] {
        let (status, _) = app
            .json("POST", "/campers", Some(json!({"name": "Edge", "age": age})))
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, campers) = app.json("GET", "/campers", None).await;
    assert_eq!(campers.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let app = TestApp::new().await;
    let request = Request::builder()
        .method("POST")
        .uri("/campers")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, validation_errors());
}

#[tokio::test]
async fn test_get_missing_camper_is_not_found() {
    let app = TestApp::new().await;

    let (status, body) = app.json("GET", "/campers/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Camper not found"}));

    let (status, body) = app.json("GET", "/campers/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Camper not found"}));
}

#[tokio::test]
async fn test_list_campers_excludes_signups() {
    let app = TestApp::new().await;
    let activity_id = app.add_activity("Archery", 2).await;
    app.json("POST", "/campers", Some(json!({"name": "Alex", "age": 12})))
        .await;
    app.json(
        "POST",
        "/signups",
        Some(json!({"camper_id": 1, "activity_id": activity_id, "time": 9})),
    )
    .await;

    let (status, body) = app.json("GET", "/campers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": 1, "name": "Alex", "age": 12}]));
}

#[tokio::test]
async fn test_camper_detail_expands_signups_and_is_stable() {
    let app = TestApp::new().await;
    let archery = app.add_activity("Archery", 2).await;
    let canoe = app.add_activity("Canoeing", 4).await;
    app.json("POST", "/campers", Some(json!({"name": "Alex", "age": 12})))
        .await;
    for (activity_id, time) in [(archery, 9), (canoe, 15)] {
        let (status, _) = app
            .json(
                "POST",
                "/signups",
                Some(json!({"camper_id": 1, "activity_id": activity_id, "time": time})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, first) = app.json("GET", "/campers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        first,
        json!({
            "id": 1,
            "name": "Alex",
            "age": 12,
            "signups": [
                {
                    "id": 1, "time": 9, "camper_id": 1, "activity_id": archery,
                    "activity": {"id": archery, "name": "Archery", "difficulty": 2}
                },
                {
                    "id": 2, "time": 15, "camper_id": 1, "activity_id": canoe,
                    "activity": {"id": canoe, "name": "Canoeing", "difficulty": 4}
                }
            ]
        })
    );

    let (_, second) = app.json("GET", "/campers/1", None).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_patch_camper_updates_fields() {
    let app = TestApp::new().await;
    app.json("POST", "/campers", Some(json!({"name": "Alex", "age": 12})))
        .await;

    let (status, body) = app
        .json("PATCH", "/campers/1", Some(json!({"age": 13, "id": 50})))
        .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body, json!({"id": 1, "name": "Alex", "age": 13}));

    let (status, body) = app
        .json("PATCH", "/campers/1", Some(json!({"name": "Alexis"})))
        .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body, json!({"id": 1, "name": "Alexis", "age": 13}));
}

#[tokio::test]
async fn test_patch_camper_rejects_without_partial_write() {
    let app = TestApp::new().await;
    app.json("POST", "/campers", Some(json!({"name": "Alex", "age": 12})))
        .await;

    for body in [
        json!({"name": "Sam", "age": 40}),
        json!({"name": ""}),
        json!({"age": null}),
    ] {
        let (status, response) = app.json("PATCH", "/campers/1", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response, validation_errors());
    }

    let (_, camper) = app.json("GET", "/campers/1", None).await;
    assert_eq!(camper["name"], "Alex");
    assert_eq!(camper["age"], 12);
}

#[tokio::test]
async fn test_patch_missing_camper_is_not_found() {
    let app = TestApp::new().await;
    let (status, body) = app
        .json("PATCH", "/campers/7", Some(json!({"age": 10})))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Camper not found"}));
}

#[tokio::test]
async fn test_list_activities() {
    let app = TestApp::new().await;
    let (_, empty) = app.json("GET", "/activities", None).await;
    assert_eq!(empty, json!([]));

    let id = app.add_activity("Hiking", 3).await;
    let (status, body) = app.json("GET", "/activities", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{"id": id, "name": "Hiking", "difficulty": 3}]));
}

#[tokio::test]
async fn test_delete_activity_cascades_signups() {
    let app = TestApp::new().await;
    let archery = app.add_activity("Archery", 2).await;
    let swim = app.add_activity("Swimming", 1).await;
    for name in ["Alex", "Sam"] {
        app.json("POST", "/campers", Some(json!({"name": name, "age": 11})))
            .await;
    }
    for (camper_id, activity_id) in [(1, archery), (2, archery), (2, swim)] {
        let (status, _) = app
            .json(
                "POST",
                "/signups",
                Some(json!({"camper_id": camper_id, "activity_id": activity_id, "time": 10})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    assert_eq!(app.signup_count().await, 3);

    let (status, body) = app
        .request("DELETE", &format!("/activities/{}", archery), None)
        .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());
    assert_eq!(app.signup_count().await, 1);

    let (_, alex) = app.json("GET", "/campers/1", None).await;
    assert_eq!(alex["signups"], json!([]));

    let (status, body) = app
        .json("DELETE", &format!("/activities/{}", archery), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Activity not found"}));
}

#[tokio::test]
async fn test_create_signup_expands_activity_and_camper() {
    let app = TestApp::new().await;
    let activity_id = app.add_activity("Archery", 2).await;
    app.json("POST", "/campers", Some(json!({"name": "Alex", "age": 12})))
        .await;

    let (status, body) = app
        .json(
            "POST",
            "/signups",
            Some(json!({"camper_id": 1, "activity_id": activity_id, "time": 10})),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "time": 10,
            "camper_id": 1,
            "activity_id": activity_id,
            "activity": {"id": activity_id, "name": "Archery", "difficulty": 2},
            "camper": {"id": 1, "name": "Alex", "age": 12}
        })
    );
}

#[tokio::test]
async fn test_create_signup_rejects_invalid_input() {
    let app = TestApp::new().await;
    let activity_id = app.add_activity("Archery", 2).await;
    app.json("POST", "/campers", Some(json!({"name": "Alex", "age": 12})))
        .await;

    let invalid = [
        json!({"camper_id": 1, "activity_id": 999, "time": 10}),
        json!({"camper_id": 999, "activity_id": activity_id, "time": 10}),
        json!({"camper_id": 1, "activity_id": activity_id, "time": 24}),
        json!({"camper_id": 1, "activity_id": activity_id, "time": -1}),
        json!({"camper_id": 1, "activity_id": activity_id}),
        json!({"activity_id": activity_id, "time": 10}),
    ];
    for body in invalid {
        let (status, response) = app.json("POST", "/signups", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(response, validation_errors());
    }

    assert_eq!(app.signup_count().await, 0);
}
