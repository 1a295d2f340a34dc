use super::domain::Flavor;

/// Static reference record describing one cuisine category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuisineProfile {
    pub key: &'static str,
    pub flavors: &'static [Flavor],
    pub spice_level: u8,
    pub ingredients: &'static [&'static str],
    pub cooking_methods: &'static [&'static str],
    pub similar: &'static [&'static str],
}

impl CuisineProfile {
    pub fn display_name(&self) -> String {
        display_name(self.key)
    }

    pub fn has_flavor(&self, flavor: Flavor) -> bool {
        self.flavors.contains(&flavor)
    }
}

/// Read-only lookup over the cuisine profiles and their representative dishes.
#[derive(Debug, Clone, Copy)]
pub struct CuisineCatalog {
    cuisines: &'static [CuisineProfile],
    dishes: &'static [(&'static str, &'static [&'static str])],
}

impl CuisineCatalog {
    pub fn standard() -> Self {
        Self {
            cuisines: STANDARD_CUISINES,
            dishes: STANDARD_DISHES,
        }
    }

    /// Cuisines in declaration order, which is also the ranking tie-break order.
    pub fn cuisines(&self) -> &'static [CuisineProfile] {
        self.cuisines
    }

    pub fn get(&self, key: &str) -> Option<&'static CuisineProfile> {
        let cuisines = self.cuisines;
        cuisines.iter().find(|cuisine| cuisine.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        let cuisines = self.cuisines;
        cuisines.iter().map(|cuisine| cuisine.key)
    }

    pub fn dishes_for(&self, key: &str) -> &'static [&'static str] {
        let dishes = self.dishes;
        dishes
            .iter()
            .find(|(cuisine, _)| *cuisine == key)
            .map(|(_, dishes)| *dishes)
            .unwrap_or(&[])
    }
}

impl Default for CuisineCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Title-cases each underscore-separated word: `middle_eastern` becomes "Middle Eastern".
pub fn display_name(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

const STANDARD_CUISINES: &[CuisineProfile] = &[
    CuisineProfile {
        key: "italian",
        flavors: &[Flavor::Savory, Flavor::Creamy, Flavor::Aromatic],
        spice_level: 1,
        ingredients: &["pasta", "tomatoes", "cheese", "olive oil", "basil"],
        cooking_methods: &["baking", "simmering", "sauteing"],
        similar: &["mediterranean", "french"],
    },
    CuisineProfile {
        key: "mexican",
        flavors: &[Flavor::Spicy, Flavor::Savory, Flavor::Tangy],
        spice_level: 4,
        ingredients: &["corn", "beans", "chilies", "avocado", "cheese"],
        cooking_methods: &["grilling", "braising", "frying"],
        similar: &["spanish", "middle_eastern"],
    },
    CuisineProfile {
        key: "japanese",
        flavors: &[Flavor::Savory, Flavor::Fresh, Flavor::Sweet],
        spice_level: 1,
        ingredients: &["rice", "seafood", "noodles", "soy", "seaweed"],
        cooking_methods: &["raw", "grilling", "steaming"],
        similar: &["korean", "chinese"],
    },
    CuisineProfile {
        key: "thai",
        flavors: &[Flavor::Spicy, Flavor::Sweet, Flavor::Tangy, Flavor::Aromatic],
        spice_level: 4,
        ingredients: &["rice", "noodles", "coconut milk", "lemongrass", "seafood"],
        cooking_methods: &["stir-frying", "simmering", "grilling"],
        similar: &["vietnamese", "indian"],
    },
    CuisineProfile {
        key: "indian",
        flavors: &[Flavor::Spicy, Flavor::Aromatic, Flavor::Creamy],
        spice_level: 5,
        ingredients: &["rice", "lentils", "vegetables", "yogurt", "ghee"],
        cooking_methods: &["simmering", "tandoor roasting", "frying"],
        similar: &["middle_eastern", "thai"],
    },
    CuisineProfile {
        key: "chinese",
        flavors: &[Flavor::Savory, Flavor::Sweet, Flavor::Spicy],
        spice_level: 3,
        ingredients: &["noodles", "rice", "pork", "vegetables", "soy"],
        cooking_methods: &["stir-frying", "steaming", "braising"],
        similar: &["japanese", "korean"],
    },
    CuisineProfile {
        key: "mediterranean",
        flavors: &[Flavor::Fresh, Flavor::Tangy, Flavor::Savory],
        spice_level: 2,
        ingredients: &["olive oil", "vegetables", "seafood", "cheese", "herbs"],
        cooking_methods: &["grilling", "roasting", "raw"],
        similar: &["italian", "middle_eastern"],
    },
    CuisineProfile {
        key: "middle_eastern",
        flavors: &[Flavor::Aromatic, Flavor::Savory, Flavor::Tangy],
        spice_level: 2,
        ingredients: &["chickpeas", "lamb", "vegetables", "tahini", "flatbread"],
        cooking_methods: &["grilling", "roasting", "stewing"],
        similar: &["mediterranean", "indian"],
    },
];

const STANDARD_DISHES: &[(&str, &[&str])] = &[
    ("italian", &["Margherita Pizza", "Carbonara", "Risotto", "Lasagna"]),
    ("mexican", &["Tacos al Pastor", "Enchiladas", "Chiles Rellenos", "Pozole"]),
    ("japanese", &["Sushi", "Ramen", "Tempura", "Okonomiyaki"]),
    ("thai", &["Pad Thai", "Green Curry", "Tom Yum", "Massaman Curry"]),
    ("indian", &["Butter Chicken", "Biryani", "Palak Paneer", "Chana Masala"]),
    ("chinese", &["Kung Pao Chicken", "Dim Sum", "Mapo Tofu", "Peking Duck"]),
    ("mediterranean", &["Greek Salad", "Grilled Octopus", "Moussaka", "Spanakopita"]),
    ("middle_eastern", &["Falafel", "Shawarma", "Hummus", "Shakshuka"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_has_eight_cuisines_with_dishes() {
        let catalog = CuisineCatalog::standard();
        assert_eq!(catalog.cuisines().len(), 8);
        for cuisine in catalog.cuisines() {
            assert!((1..=5).contains(&cuisine.spice_level), "{}", cuisine.key);
            assert!(catalog.dishes_for(cuisine.key).len() >= 2, "{}", cuisine.key);
        }
    }

    #[test]
    fn display_name_title_cases_underscore_words() {
        assert_eq!(display_name("middle_eastern"), "Middle Eastern");
        assert_eq!(display_name("thai"), "Thai");
        assert_eq!(display_name("__odd__key"), "Odd Key");
    }

    #[test]
    fn unknown_keys_have_no_dishes() {
        let catalog = CuisineCatalog::standard();
        assert!(catalog.get("martian").is_none());
        assert!(catalog.dishes_for("martian").is_empty());
    }
}
