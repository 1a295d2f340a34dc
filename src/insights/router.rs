use std::io::Cursor;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use super::domain::{Entry, RatingScale};
use super::engine::RecommendationEngine;
use super::import::EntryImporter;
use super::profile::UserProfile;
use super::views::Recommendation;
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub entries: Vec<Entry>,
    /// Appended to `entries` when present.
    #[serde(default)]
    pub entries_csv: Option<String>,
    #[serde(default)]
    pub rating_scale: Option<RatingScale>,
    #[serde(default)]
    pub include_profile: bool,
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    #[serde(flatten)]
    pub recommendation: Recommendation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
}

/// Router builder exposing the scorer over HTTP.
pub fn recommendation_router(engine: RecommendationEngine) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommend_handler))
        .with_state(engine)
}

pub(crate) async fn recommend_handler(
    State(engine): State<RecommendationEngine>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let RecommendationRequest {
        mut entries,
        entries_csv,
        rating_scale,
        include_profile,
    } = request;

    if let Some(csv) = entries_csv {
        entries.extend(EntryImporter::from_reader(Cursor::new(csv.into_bytes()))?);
    }

    let engine = match rating_scale {
        Some(scale) => RecommendationEngine::with_catalog(*engine.catalog(), scale),
        None => engine,
    };

    let report = engine.report(&entries);
    let profile = if include_profile {
        Some(report.profile)
    } else {
        None
    };

    Ok(Json(RecommendationResponse {
        recommendation: report.recommendation,
        profile,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn handler_scores_inline_entries() {
        let request = RecommendationRequest {
            entries: vec![
                Entry::new("Green Curry", 5.0, ["spicy", "thai"]),
                Entry::new("Vindaloo", 4.0, ["spicy"]),
            ],
            include_profile: true,
            ..RecommendationRequest::default()
        };

        let Json(body) = recommend_handler(State(RecommendationEngine::default()), Json(request))
            .await
            .expect("recommendation builds");

        let profile = body.profile.expect("profile included");
        assert_eq!(profile.spice_preference, 6.5);
        assert!(body
            .recommendation
            .cuisines
            .iter()
            .all(|cuisine| cuisine.key != "thai"));
    }

    #[tokio::test]
    async fn handler_merges_csv_entries_and_honours_scale() {
        let request = RecommendationRequest {
            entries_csv: Some(
                "title,rating,tags\nTacos,8,mexican\nBurrito,10,mexican\n".to_string(),
            ),
            rating_scale: Some(RatingScale::Ten),
            include_profile: true,
            ..RecommendationRequest::default()
        };

        let Json(body) = recommend_handler(State(RecommendationEngine::default()), Json(request))
            .await
            .expect("recommendation builds");

        let profile = body.profile.expect("profile included");
        assert_eq!(profile.total_entries, 2);
        assert_eq!(profile.average_rating, 4.5);
        assert_eq!(profile.tried_cuisines, vec!["mexican"]);
    }
}
