use super::catalog::CuisineCatalog;
use super::views::{CuisineRecommendation, DishSuggestion};

const CUISINES_SAMPLED: usize = 2;
const DISHES_PER_CUISINE: usize = 2;
const MAX_DISHES: usize = 3;

pub(crate) fn suggest_dishes(
    cuisines: &[CuisineRecommendation],
    catalog: &CuisineCatalog,
) -> Vec<DishSuggestion> {
    cuisines
        .iter()
        .take(CUISINES_SAMPLED)
        .flat_map(|cuisine| {
            catalog
                .dishes_for(cuisine.key)
                .iter()
                .take(DISHES_PER_CUISINE)
                .map(move |dish| DishSuggestion {
                    name: *dish,
                    cuisine: cuisine.name.clone(),
                    reasons: vec![
                        format!("Popular {} dish", cuisine.name),
                        "Matches your taste profile".to_string(),
                    ],
                })
        })
        .take(MAX_DISHES)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recommendation(key: &'static str, name: &str) -> CuisineRecommendation {
        CuisineRecommendation {
            name: name.to_string(),
            key,
            reasons: Vec::new(),
            confidence: 50,
        }
    }

    #[test]
    fn takes_two_dishes_from_first_two_cuisines_capped_at_three() {
        let cuisines = vec![
            recommendation("thai", "Thai"),
            recommendation("middle_eastern", "Middle Eastern"),
            recommendation("italian", "Italian"),
        ];
        let dishes = suggest_dishes(&cuisines, &CuisineCatalog::standard());

        let names: Vec<&str> = dishes.iter().map(|dish| dish.name).collect();
        assert_eq!(names, vec!["Pad Thai", "Green Curry", "Falafel"]);
        assert_eq!(dishes[2].cuisine, "Middle Eastern");
        assert_eq!(
            dishes[2].reasons,
            vec![
                "Popular Middle Eastern dish".to_string(),
                "Matches your taste profile".to_string(),
            ]
        );
    }

    #[test]
    fn no_cuisines_means_no_dishes() {
        assert!(suggest_dishes(&[], &CuisineCatalog::standard()).is_empty());
    }
}
