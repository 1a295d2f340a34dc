use super::catalog::CuisineProfile;
use super::domain::Flavor;
use super::profile::UserProfile;
use super::ranking::spice_gap;

const MAX_REASONS: usize = 2;
const MAX_TIPS: usize = 2;
const INGREDIENT_INTERESTS: [&str; 4] = ["noodles", "cheese", "seafood", "vegetables"];

/// Up to two human-readable reasons explaining a cuisine recommendation.
pub(crate) fn cuisine_reasons(profile: &UserProfile, cuisine: &CuisineProfile) -> Vec<String> {
    let mut reasons = Vec::with_capacity(MAX_REASONS);

    let shared = shared_flavors(profile, cuisine);
    if !shared.is_empty() {
        reasons.push(format!("You love {} flavors", shared.join(" & ")));
    }

    if spice_gap(profile, cuisine) <= 1.0 {
        reasons.push("Perfect spice level match".to_string());
    }

    if reasons.len() < MAX_REASONS {
        if let Some(ingredient) = INGREDIENT_INTERESTS
            .iter()
            .find(|interest| cuisine.ingredients.contains(*interest))
        {
            reasons.push(format!("Features {ingredient} you enjoy"));
        }
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

/// Labels of the user's top flavors that the cuisine also lists, in preference order.
pub(crate) fn shared_flavors(
    profile: &UserProfile,
    cuisine: &CuisineProfile,
) -> Vec<&'static str> {
    profile
        .preferred_flavors
        .iter()
        .filter(|flavor| cuisine.has_flavor(**flavor))
        .map(|flavor| flavor.label())
        .collect()
}

/// Global tips for one recommendation run, first two in rule order.
///
/// A profile built from no entries produces no tips.
pub(crate) fn generate_tips(profile: &UserProfile) -> Vec<String> {
    if profile.total_entries == 0 {
        return Vec::new();
    }

    let mut tips = Vec::with_capacity(MAX_TIPS);

    if profile.spice_preference >= 3.5 {
        tips.push(format!(
            "Your spice preference of {:.1} says you'd enjoy bold Mexican or Indian dishes",
            profile.spice_preference
        ));
    } else if profile.spice_preference <= 2.0 {
        tips.push(
            "You lean toward mild flavors, so Mediterranean or French cooking is a safe bet"
                .to_string(),
        );
    }

    if profile.variety_seeker {
        tips.push(
            "You love variety: look for fusion spots that mix the cuisines you already enjoy"
                .to_string(),
        );
    } else if profile.tried_cuisines.len() <= 2 {
        tips.push(
            "Start with cuisines similar to your favorites to branch out gradually".to_string(),
        );
    }

    if tips.len() < MAX_TIPS && profile.quality_seeker {
        tips.push(format!(
            "With an average rating of {:.1}, chef-driven restaurants should match your standards",
            profile.average_rating
        ));
    }

    if tips.len() < MAX_TIPS && profile.prefers(Flavor::Creamy) {
        tips.push(
            "Since you enjoy creamy dishes, try a Thai curry or an Italian pasta".to_string(),
        );
    }

    tips.truncate(MAX_TIPS);
    tips
}
