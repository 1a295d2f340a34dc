use super::catalog::CuisineCatalog;
use super::dishes::suggest_dishes;
use super::domain::{Entry, RatingScale};
use super::profile::{extract_profile, UserProfile};
use super::ranking::{rank_cuisines, CuisineCandidate};
use super::reasons::generate_tips;
use super::views::{CuisineRecommendation, Recommendation, TasteReport};
use tracing::debug;

const MAX_CUISINES: usize = 4;

/// Stateless scorer that turns a user's diary entries into cuisine, dish and tip suggestions.
///
/// Every call is independent; the engine only holds the static catalog and the rating scale
/// incoming entries are expressed on.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine {
    catalog: CuisineCatalog,
    rating_scale: RatingScale,
}

impl RecommendationEngine {
    pub fn new(rating_scale: RatingScale) -> Self {
        Self::with_catalog(CuisineCatalog::standard(), rating_scale)
    }

    pub fn with_catalog(catalog: CuisineCatalog, rating_scale: RatingScale) -> Self {
        Self {
            catalog,
            rating_scale,
        }
    }

    pub fn catalog(&self) -> &CuisineCatalog {
        &self.catalog
    }

    pub fn rating_scale(&self) -> RatingScale {
        self.rating_scale
    }

    pub fn profile(&self, entries: &[Entry]) -> UserProfile {
        extract_profile(entries, &self.catalog, self.rating_scale)
    }

    /// Full ranking of every untried cuisine, best first.
    pub fn rank(&self, profile: &UserProfile) -> Vec<CuisineCandidate> {
        rank_cuisines(profile, &self.catalog)
    }

    pub fn recommend(&self, entries: &[Entry]) -> Recommendation {
        self.report(entries).recommendation
    }

    pub fn report(&self, entries: &[Entry]) -> TasteReport {
        let profile = self.profile(entries);
        debug!(
            entries = profile.total_entries,
            spice_preference = profile.spice_preference,
            tried = profile.tried_cuisines.len(),
            variety_seeker = profile.variety_seeker,
            quality_seeker = profile.quality_seeker,
            "taste profile extracted"
        );

        let candidates = self.rank(&profile);
        let recommendation = self.assemble(&profile, candidates.clone());

        TasteReport {
            profile,
            candidates,
            recommendation,
        }
    }

    fn assemble(
        &self,
        profile: &UserProfile,
        candidates: Vec<CuisineCandidate>,
    ) -> Recommendation {
        let cuisines: Vec<CuisineRecommendation> = candidates
            .into_iter()
            .take(MAX_CUISINES)
            .map(CuisineRecommendation::from)
            .collect();
        let dishes = suggest_dishes(&cuisines, &self.catalog);
        let tips = generate_tips(profile);

        debug!(
            cuisines = cuisines.len(),
            dishes = dishes.len(),
            tips = tips.len(),
            "recommendation assembled"
        );

        Recommendation {
            cuisines,
            dishes,
            tips,
        }
    }
}
