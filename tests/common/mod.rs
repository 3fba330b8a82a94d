//! Shared fixtures for the integration suite.

use serde_json::{json, Value};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// The end-to-end scenario record.
pub fn raw_x_serum() -> Value {
    json!({
        "product_name": "X Serum",
        "concentration": "10% Vitamin C",
        "skin_type": ["Oily"],
        "key_ingredients": ["Vitamin C"],
        "benefits": ["Brightening"],
        "how_to_use": "Apply daily in the morning",
        "side_effects": "None",
        "price": "₹500"
    })
}

/// A fuller record exercising multi-entry lists and known ingredients.
pub fn raw_glowboost() -> Value {
    json!({
        "product_name": "GlowBoost Vitamin C Serum",
        "concentration": "20% Vitamin C",
        "skin_type": ["Oily", "Combination"],
        "key_ingredients": ["Vitamin C", "Hyaluronic Acid"],
        "benefits": ["Brightening", "Fades dark spots"],
        "how_to_use": "Apply 2-3 drops in the morning before sunscreen",
        "side_effects": "Mild tingling for first-time users",
        "price": "₹599"
    })
}
