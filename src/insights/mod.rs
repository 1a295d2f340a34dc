//! Taste profiling and cuisine recommendations derived from a user's food diary.
//!
//! Everything here is a pure function of the entries handed in: the cuisine and dish tables are
//! static, nothing is cached between calls, and the same entries always produce the same output.

pub mod catalog;
mod dishes;
pub mod domain;
mod engine;
pub mod import;
mod normalizer;
mod profile;
mod ranking;
mod reasons;
pub mod router;
pub mod views;

pub use catalog::{display_name, CuisineCatalog, CuisineProfile};
pub use domain::{Entry, Flavor, RatingScale};
pub use engine::RecommendationEngine;
pub use import::{EntryImportError, EntryImporter};
pub use profile::{UserProfile, NEUTRAL_SPICE_PREFERENCE};
pub use ranking::{CuisineCandidate, ScoreComponent, ScoreFactor};
pub use router::{recommendation_router, RecommendationRequest, RecommendationResponse};
pub use views::{CuisineRecommendation, DishSuggestion, Recommendation, TasteReport};
