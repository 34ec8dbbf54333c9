use super::common::*;
use crate::advisor::infer_profile;
use crate::catalog::domain::{
    AttributeProfile, BrandPositioning, CostTier, PhLevel, ProductState, SensitivityLevel,
    ShelfLifeRequirement, StorageTemperature, SustainabilityPriority,
};
use crate::catalog::records::Catalog;

#[test]
fn canned_goods_with_long_shelf_life_and_economy_budget() {
    let catalog = Catalog::default();

    let profile = infer_profile(
        "Canned Soup",
        "",
        CostTier::Economy,
        ShelfLifeRequirement::Years,
        &catalog,
    );

    // Category block for canned goods.
    assert_eq!(profile.product_state, Some(ProductState::Liquid));
    assert_eq!(profile.storage_temperature, Some(StorageTemperature::Ambient));
    assert_eq!(profile.shelf_life_requirement, Some(ShelfLifeRequirement::Years));
    // Long shelf life forces both sensitivities high, overriding the
    // category's lower values.
    assert_eq!(profile.oxygen_sensitivity, Some(SensitivityLevel::High));
    assert_eq!(profile.moisture_sensitivity, Some(SensitivityLevel::High));
    // Economy budget forces value positioning and cost-focused priority.
    assert_eq!(profile.brand_positioning, Some(BrandPositioning::Value));
    assert_eq!(
        profile.sustainability_priority,
        Some(SustainabilityPriority::CostFocused)
    );
    assert_eq!(profile.budget_range, Some(CostTier::Economy));
}

#[test]
fn milk_forces_cold_storage_within_beverages() {
    let catalog = Catalog::default();

    let profile = infer_profile(
        "Whole Milk",
        "",
        CostTier::Standard,
        ShelfLifeRequirement::Days,
        &catalog,
    );

    assert_eq!(profile.product_state, Some(ProductState::Liquid));
    assert_eq!(profile.storage_temperature, Some(StorageTemperature::Cold));
    assert_eq!(profile.ph_level, Some(PhLevel::Neutral));
    assert_eq!(profile.light_sensitivity, Some(SensitivityLevel::High));
}

#[test]
fn first_matching_category_wins_exclusively() {
    let catalog = Catalog::default();

    // "milk" puts this in beverages before confectionery ever sees
    // "chocolate": the profile stays liquid and cold.
    let profile = infer_profile(
        "Chocolate Milk",
        "",
        CostTier::Standard,
        ShelfLifeRequirement::Days,
        &catalog,
    );

    assert_eq!(profile.product_state, Some(ProductState::Liquid));
    assert_eq!(profile.storage_temperature, Some(StorageTemperature::Cold));
}

#[test]
fn purpose_text_also_drives_category_matching() {
    let catalog = Catalog::default();

    let profile = infer_profile(
        "Morning Blend",
        "ground coffee for drip brewing",
        CostTier::Standard,
        ShelfLifeRequirement::Weeks,
        &catalog,
    );

    assert_eq!(profile.product_state, Some(ProductState::Liquid));
    assert_eq!(profile.industry_category.as_deref(), Some("Food"));
}

#[test]
fn premium_budget_forces_premium_positioning() {
    let catalog = Catalog::default();

    let profile = infer_profile(
        "Olive Oil",
        "",
        CostTier::Premium,
        ShelfLifeRequirement::Months,
        &catalog,
    );

    assert_eq!(profile.brand_positioning, Some(BrandPositioning::Premium));
    assert_eq!(profile.oxygen_sensitivity, Some(SensitivityLevel::High));
    assert_eq!(profile.light_sensitivity, Some(SensitivityLevel::High));
}

#[test]
fn unmatched_names_fall_back_to_the_baseline() {
    let catalog = Catalog::default();

    let profile = infer_profile(
        "Widget",
        "",
        CostTier::Standard,
        ShelfLifeRequirement::Days,
        &catalog,
    );

    let mut expected = AttributeProfile::baseline();
    expected.budget_range = Some(CostTier::Standard);
    expected.shelf_life_requirement = Some(ShelfLifeRequirement::Days);
    assert_eq!(profile, expected);
}

#[test]
fn stored_profiles_short_circuit_keyword_matching() {
    let catalog = catalog_with_stored_product();

    let profile = infer_profile(
        "Orange Juice",
        "",
        CostTier::Economy,
        ShelfLifeRequirement::Months,
        &catalog,
    );

    // Only the two caller-supplied fields are overwritten.
    assert_eq!(profile.budget_range, Some(CostTier::Economy));
    assert_eq!(profile.shelf_life_requirement, Some(ShelfLifeRequirement::Months));

    // Everything else comes from the stored profile untouched; in particular
    // the economy budget does not rewrite positioning or priority here.
    let stored = stored_juice_profile();
    assert_eq!(profile.product_state, stored.product_state);
    assert_eq!(profile.ph_level, stored.ph_level);
    assert_eq!(profile.storage_temperature, stored.storage_temperature);
    assert_eq!(profile.oxygen_sensitivity, stored.oxygen_sensitivity);
    assert_eq!(profile.sustainability_priority, stored.sustainability_priority);
    assert_eq!(profile.brand_positioning, stored.brand_positioning);
}

#[test]
fn category_table_keeps_its_priority_order() {
    use crate::advisor::inference::CATEGORY_RULES;

    let names: Vec<&str> = CATEGORY_RULES.iter().map(|rule| rule.name).collect();
    assert_eq!(
        names,
        [
            "beverages",
            "dairy",
            "oils and sauces",
            "grains and dry goods",
            "snacks",
            "meat and protein",
            "frozen",
            "canned",
            "confectionery",
            "baby food",
        ]
    );
}

#[test]
fn stored_profile_inference_is_idempotent() {
    let catalog = catalog_with_stored_product();

    let first = infer_profile(
        "Orange Juice",
        "",
        CostTier::Premium,
        ShelfLifeRequirement::Weeks,
        &catalog,
    );
    let second = infer_profile(
        "Orange Juice",
        "",
        CostTier::Premium,
        ShelfLifeRequirement::Weeks,
        &catalog,
    );

    assert_eq!(first, second);
}
