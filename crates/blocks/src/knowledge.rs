//! Static knowledge base backing ingredient enrichment.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Enrichment data for one known ingredient.
#[derive(Debug, Clone)]
pub struct IngredientProfile {
    pub scientific_name: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
}

static INGREDIENT_PROFILES: Lazy<HashMap<&'static str, IngredientProfile>> = Lazy::new(|| {
    HashMap::from([
        (
            "Vitamin C",
            IngredientProfile {
                scientific_name: "Ascorbic Acid",
                description:
                    "A powerful antioxidant that brightens skin and boosts collagen production",
                benefits: &["Brightening", "Anti-aging", "Antioxidant protection"],
            },
        ),
        (
            "Hyaluronic Acid",
            IngredientProfile {
                scientific_name: "Sodium Hyaluronate",
                description: "A moisture-binding ingredient that hydrates and plumps skin",
                benefits: &["Deep hydration", "Plumping", "Moisture retention"],
            },
        ),
    ])
});

/// Looks up a known ingredient profile.
///
/// Returns `None` for unrecognized names; callers substitute generic copy
/// rather than failing.
pub fn ingredient_profile(name: &str) -> Option<&'static IngredientProfile> {
    INGREDIENT_PROFILES.get(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ingredient_resolves() {
        let profile = ingredient_profile("Vitamin C").unwrap();
        assert_eq!(profile.scientific_name, "Ascorbic Acid");
    }

    #[test]
    fn unknown_ingredient_is_none() {
        assert!(ingredient_profile("Snake Oil").is_none());
    }
}
