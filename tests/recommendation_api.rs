use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use food_insights::insights::{recommendation_router, RatingScale, RecommendationEngine};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn post_json(payload: Value) -> (StatusCode, Value) {
    let router = recommendation_router(RecommendationEngine::new(RatingScale::Five));
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/recommendations")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&payload).expect("serialize payload"),
                ))
                .expect("request"),
        )
        .await
        .expect("router dispatch");

    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload: Value = serde_json::from_slice(&body).expect("json");
    (status, payload)
}

#[tokio::test]
async fn returns_cuisines_dishes_and_tips() {
    let (status, payload) = post_json(json!({
        "entries": [
            { "title": "Khao Soi", "rating": 5, "tags": ["spicy", "thai"] },
            { "title": "Hot Pot", "rating": 4, "tags": ["spicy"] }
        ],
        "include_profile": true
    }))
    .await;

    assert_eq!(status, StatusCode::OK);

    let cuisines = payload["cuisines"].as_array().expect("cuisines array");
    assert!(!cuisines.is_empty() && cuisines.len() <= 4);
    for cuisine in cuisines {
        assert_ne!(cuisine["key"], json!("thai"));
        let confidence = cuisine["confidence"].as_u64().expect("confidence");
        assert!(confidence <= 95);
        assert!(cuisine["name"].is_string());
        assert!(cuisine["reasons"].as_array().expect("reasons").len() <= 2);
    }

    let dishes = payload["dishes"].as_array().expect("dishes array");
    assert!(dishes.len() <= 3);
    assert!(dishes.iter().all(|dish| dish["cuisine"].is_string()));

    assert!(payload["tips"].as_array().expect("tips array").len() <= 2);
    assert_eq!(payload["profile"]["spice_preference"], json!(6.5));
    assert_eq!(payload["profile"]["preferred_flavors"], json!(["spicy"]));
}

#[tokio::test]
async fn tolerates_entries_without_ratings_or_tags() {
    let (status, payload) = post_json(json!({
        "entries": [ { "title": "Untitled" }, { "rating": null, "tags": null } ]
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(payload.get("profile").is_none());
    assert_eq!(payload["cuisines"].as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn rejects_malformed_csv_with_bad_request() {
    let (status, payload) = post_json(json!({
        "entries_csv": "title,rating\nTacos,4,extra\n"
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(payload["error"]
        .as_str()
        .expect("error message")
        .contains("diary CSV"));
}

#[tokio::test]
async fn defaults_wrongly_shaped_fields_instead_of_rejecting_the_batch() {
    let (status, payload) = post_json(json!({
        "entries": [
            { "id": 17, "title": null, "rating": 5, "tags": "spicy" },
            { "title": "Laab", "rating": 4, "tags": ["spicy", null, 3, "thai"] },
            { "title": "Pho", "created_at": "2025-09-20", "user_id": { "id": "u-1" } },
            { "title": "Toast", "created_at": "yesterday", "rating": true }
        ],
        "include_profile": true
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["profile"]["total_entries"], json!(4));
    assert_eq!(payload["profile"]["tried_cuisines"], json!(["thai"]));
    assert_eq!(payload["profile"]["preferred_flavors"], json!(["spicy"]));
    // (5 + 4 + 0 + 0) / 4 = 2.25, half the entries spicy
    assert_eq!(payload["profile"]["average_rating"], json!(2.25));
    assert_eq!(payload["profile"]["spice_preference"], json!(3.3));
}
