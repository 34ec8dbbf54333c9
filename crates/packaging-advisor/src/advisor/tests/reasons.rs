use super::common::*;
use crate::advisor::explain;
use crate::catalog::domain::{
    AttributeProfile, CostTier, SensitivityLevel, SustainabilityPriority,
};

#[test]
fn state_match_is_praised() {
    let profile = easy_liquid_profile();
    let reasons = explain(&profile, &pet_bottle(), 50.0);
    assert!(reasons.contains(&"Well suited to liquid products".to_string()));
}

#[test]
fn barrier_praise_requires_high_need_met_by_high_or_excellent() {
    let mut profile = easy_liquid_profile();
    profile.oxygen_sensitivity = Some(SensitivityLevel::High);
    profile.moisture_sensitivity = Some(SensitivityLevel::High);
    profile.light_sensitivity = Some(SensitivityLevel::Medium);

    // Glass: oxygen Excellent, moisture Excellent, light Low.
    let reasons = explain(&profile, &glass_jar(), 50.0);
    assert!(reasons.contains(&"Strong oxygen, moisture protection".to_string()));
}

#[test]
fn partial_barrier_matches_earn_no_praise() {
    let mut profile = easy_liquid_profile();
    profile.oxygen_sensitivity = Some(SensitivityLevel::Medium);

    let reasons = explain(&profile, &glass_jar(), 50.0);
    assert!(reasons.iter().all(|reason| !reason.starts_with("Strong")));
}

#[test]
fn budget_match_is_praised_only_on_exact_tier() {
    let mut profile = easy_liquid_profile();
    profile.budget_range = Some(CostTier::Premium);
    let reasons = explain(&profile, &glass_jar(), 50.0);
    assert!(reasons.contains(&"Matches a premium budget".to_string()));

    profile.budget_range = None;
    let reasons = explain(&profile, &glass_jar(), 50.0);
    assert!(reasons.iter().all(|reason| !reason.starts_with("Matches")));
}

#[test]
fn sustainability_features_listed_only_under_eco_focus() {
    let mut profile = easy_liquid_profile();
    let reasons = explain(&profile, &pet_bottle(), 50.0);
    assert!(reasons.iter().all(|reason| !reason.starts_with("Eco-friendly")));

    profile.sustainability_priority = Some(SustainabilityPriority::EcoFocused);
    let reasons = explain(&profile, &pet_bottle(), 50.0);
    assert!(reasons.contains(&"Eco-friendly: recyclable, PCR available".to_string()));

    // A material with no green traits produces no feature line even under
    // eco focus.
    let reasons = explain(&profile, &foil_pouch(), 50.0);
    assert!(reasons.iter().all(|reason| !reason.starts_with("Eco-friendly")));
}

#[test]
fn score_tier_remarks_use_fixed_thresholds() {
    let profile = AttributeProfile::default();
    let material = foil_pouch();

    let reasons = explain(&profile, &material, 92.0);
    assert!(reasons.contains(&"Exceptional compatibility match".to_string()));

    let reasons = explain(&profile, &material, 80.0);
    assert!(reasons.contains(&"Excellent compatibility".to_string()));

    let reasons = explain(&profile, &material, 65.0);
    assert!(reasons.contains(&"Good compatibility".to_string()));

    let reasons = explain(&profile, &material, 59.9);
    assert!(reasons
        .iter()
        .all(|reason| !reason.contains("compatibility")));
}

#[test]
fn at_most_two_pros_are_quoted() {
    let mut material = pet_bottle();
    material.pros = vec![
        "First advantage".to_string(),
        "Second advantage".to_string(),
        "Third advantage".to_string(),
    ];

    let reasons = explain(&AttributeProfile::default(), &material, 10.0);

    assert!(reasons.contains(&"First advantage".to_string()));
    assert!(reasons.contains(&"Second advantage".to_string()));
    assert!(!reasons.contains(&"Third advantage".to_string()));
}

#[test]
fn reason_lists_are_deterministic() {
    let mut profile = easy_liquid_profile();
    profile.sustainability_priority = Some(SustainabilityPriority::EcoFocused);

    let first = explain(&profile, &glass_jar(), 80.0);
    let second = explain(&profile, &glass_jar(), 80.0);

    assert_eq!(first, second);
}
