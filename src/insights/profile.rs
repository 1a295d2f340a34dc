use super::catalog::CuisineCatalog;
use super::domain::{Entry, Flavor, RatingScale};
use super::normalizer::normalize_tag;
use serde::Serialize;

/// Spice preference reported when there is no history to learn from.
pub const NEUTRAL_SPICE_PREFERENCE: f64 = 2.5;

const TOP_FLAVOR_COUNT: usize = 3;
const VARIETY_SEEKER_THRESHOLD: usize = 3;
const QUALITY_SEEKER_AVERAGE: f64 = 4.0;

/// Taste profile derived from a user's entries. Recomputed on every call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub preferred_flavors: Vec<Flavor>,
    pub spice_preference: f64,
    pub variety_seeker: bool,
    pub quality_seeker: bool,
    pub tried_cuisines: Vec<&'static str>,
    pub total_entries: usize,
    pub average_rating: f64,
}

impl UserProfile {
    pub fn has_tried(&self, key: &str) -> bool {
        self.tried_cuisines.iter().any(|tried| *tried == key)
    }

    pub fn prefers(&self, flavor: Flavor) -> bool {
        self.preferred_flavors.contains(&flavor)
    }
}

pub(crate) fn extract_profile(
    entries: &[Entry],
    catalog: &CuisineCatalog,
    scale: RatingScale,
) -> UserProfile {
    let tags_per_entry: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            entry
                .tags
                .iter()
                .map(|tag| normalize_tag(tag))
                .filter(|tag| !tag.is_empty())
                .collect()
        })
        .collect();

    let total_entries = entries.len();
    let average_rating = if total_entries == 0 {
        0.0
    } else {
        let sum: f64 = entries
            .iter()
            .map(|entry| scale.normalize(entry.rating_or_zero()))
            .sum();
        sum / total_entries as f64
    };

    let preferred_flavors = preferred_flavors(&tags_per_entry);
    let spice_preference = spice_preference(&tags_per_entry, average_rating);
    let tried_cuisines = tried_cuisines(&tags_per_entry, catalog);

    UserProfile {
        preferred_flavors,
        spice_preference,
        variety_seeker: tried_cuisines.len() >= VARIETY_SEEKER_THRESHOLD,
        quality_seeker: total_entries > 0 && average_rating >= QUALITY_SEEKER_AVERAGE,
        tried_cuisines,
        total_entries,
        average_rating,
    }
}

fn preferred_flavors(tags_per_entry: &[Vec<String>]) -> Vec<Flavor> {
    let mut counts = [0usize; 7];
    for tag in tags_per_entry.iter().flatten() {
        if let Some(flavor) = Flavor::from_tag(tag) {
            counts[flavor.index()] += 1;
        }
    }

    let mut ranked: Vec<Flavor> = Flavor::ordered()
        .into_iter()
        .filter(|flavor| counts[flavor.index()] > 0)
        .collect();
    // stable: equal counts keep vocabulary order
    ranked.sort_by(|a, b| counts[b.index()].cmp(&counts[a.index()]));
    ranked.truncate(TOP_FLAVOR_COUNT);
    ranked
}

fn spice_preference(tags_per_entry: &[Vec<String>], average_rating: f64) -> f64 {
    if tags_per_entry.is_empty() {
        return NEUTRAL_SPICE_PREFERENCE;
    }

    let spicy_entries = tags_per_entry
        .iter()
        .filter(|tags| tags.iter().any(|tag| tag.contains("spicy")))
        .count();
    let spicy_ratio = spicy_entries as f64 / tags_per_entry.len() as f64;

    round_one_decimal(average_rating + spicy_ratio * 2.0)
}

fn tried_cuisines(tags_per_entry: &[Vec<String>], catalog: &CuisineCatalog) -> Vec<&'static str> {
    catalog
        .keys()
        .filter(|key| {
            let spaced = key.replace('_', " ");
            tags_per_entry
                .iter()
                .flatten()
                .any(|tag| tag.contains(key) || tag.contains(spaced.as_str()))
        })
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
