use super::catalog::{CuisineCatalog, CuisineProfile};
use super::profile::UserProfile;
use super::reasons::{cuisine_reasons, shared_flavors};
use serde::Serialize;

const FLAVOR_MATCH_POINTS: f64 = 3.0;
const SPICE_CLOSENESS_WEIGHT: f64 = 2.0;
const SPICE_CLOSENESS_CEILING: f64 = 5.0;
const VARIETY_BONUS_POINTS: f64 = 2.0;
const MAX_CONFIDENCE: f64 = 95.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    FlavorOverlap,
    SpiceCloseness,
    VarietyBonus,
}

/// Discrete contribution to a cuisine's score, kept for audits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: f64,
    pub notes: String,
}

/// A scored, untried cuisine before the top-N cut.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuisineCandidate {
    pub key: &'static str,
    pub name: String,
    pub score: f64,
    pub confidence: u8,
    pub reasons: Vec<String>,
    pub components: Vec<ScoreComponent>,
}

/// Scores every cuisine the user has not tried, best first.
///
/// Equal scores keep catalog declaration order.
pub(crate) fn rank_cuisines(
    profile: &UserProfile,
    catalog: &CuisineCatalog,
) -> Vec<CuisineCandidate> {
    let mut candidates: Vec<CuisineCandidate> = catalog
        .cuisines()
        .iter()
        .filter(|cuisine| !profile.has_tried(cuisine.key))
        .map(|cuisine| score_cuisine(profile, cuisine))
        .collect();

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates
}

fn score_cuisine(profile: &UserProfile, cuisine: &CuisineProfile) -> CuisineCandidate {
    let mut components = Vec::new();

    let shared = shared_flavors(profile, cuisine);
    if !shared.is_empty() {
        components.push(ScoreComponent {
            factor: ScoreFactor::FlavorOverlap,
            points: FLAVOR_MATCH_POINTS * shared.len() as f64,
            notes: format!("shares {}", shared.join(", ")),
        });
    }

    let gap = spice_gap(profile, cuisine);
    components.push(ScoreComponent {
        factor: ScoreFactor::SpiceCloseness,
        points: SPICE_CLOSENESS_WEIGHT * (SPICE_CLOSENESS_CEILING - gap),
        notes: format!(
            "spice level {} vs preference {:.1}",
            cuisine.spice_level, profile.spice_preference
        ),
    });

    if profile.variety_seeker {
        if let Some(similar) = cuisine
            .similar
            .iter()
            .find(|similar| !profile.has_tried(similar))
        {
            components.push(ScoreComponent {
                factor: ScoreFactor::VarietyBonus,
                points: VARIETY_BONUS_POINTS,
                notes: format!("opens the way to {similar}"),
            });
        }
    }

    let score: f64 = components.iter().map(|component| component.points).sum();

    CuisineCandidate {
        key: cuisine.key,
        name: cuisine.display_name(),
        score,
        confidence: confidence_for(score),
        reasons: cuisine_reasons(profile, cuisine),
        components,
    }
}

pub(crate) fn spice_gap(profile: &UserProfile, cuisine: &CuisineProfile) -> f64 {
    (f64::from(cuisine.spice_level) - profile.spice_preference).abs()
}

/// `min(score * 10, 95)`, floored at zero.
pub(crate) fn confidence_for(score: f64) -> u8 {
    if !score.is_finite() {
        return 0;
    }

    (score * 10.0).clamp(0.0, MAX_CONFIDENCE).round() as u8
}
