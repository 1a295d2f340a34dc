use super::profile::UserProfile;
use super::ranking::CuisineCandidate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CuisineRecommendation {
    pub name: String,
    pub key: &'static str,
    pub reasons: Vec<String>,
    pub confidence: u8,
}

impl From<CuisineCandidate> for CuisineRecommendation {
    fn from(candidate: CuisineCandidate) -> Self {
        Self {
            name: candidate.name,
            key: candidate.key,
            reasons: candidate.reasons,
            confidence: candidate.confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DishSuggestion {
    pub name: &'static str,
    pub cuisine: String,
    pub reasons: Vec<String>,
}

/// Output of one scoring run, ready for a presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub cuisines: Vec<CuisineRecommendation>,
    pub dishes: Vec<DishSuggestion>,
    pub tips: Vec<String>,
}

/// Recommendation bundled with the profile it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TasteReport {
    pub profile: UserProfile,
    pub candidates: Vec<CuisineCandidate>,
    pub recommendation: Recommendation,
}
