use crate::catalog::domain::{AttributeProfile, BarrierKind, SustainabilityPriority};
use crate::catalog::records::{Catalog, Material};

use super::rules::rule_bonus;

/// Points granted per sustainability flag under an Eco-focused priority.
const ECO_RECYCLABLE_POINTS: i32 = 4;
const ECO_PCR_POINTS: i32 = 2;
const ECO_BIODEGRADABLE_POINTS: i32 = 2;
/// Flat sustainability score for every other priority.
const NEUTRAL_SUSTAINABILITY_POINTS: i32 = 4;

/// Compute the 0-100 compatibility score of one material against a profile,
/// with an itemized breakdown for display and audit.
///
/// Six additive factors are evaluated in fixed order, each contributing its
/// configured weight to the attainable maximum. The barrier sub-score is the
/// one deliberate asymmetry: its lookup points land in the earned total
/// uncapped, while only the configured barrier weight counts toward the
/// maximum, so stacked strong barriers can outearn their nominal cap. Rule
/// bonuses likewise adjust only the earned total.
pub fn score_material(
    profile: &AttributeProfile,
    material_name: &str,
    material: &Material,
    catalog: &Catalog,
) -> (f64, Vec<String>) {
    let params = &catalog.scoring_parameters;
    let weights = &params.compatibility_weights;
    let characteristics = &material.characteristics;

    let mut total: f64 = 0.0;
    let mut max_possible: f64 = 0.0;
    let mut details = Vec::new();

    // Product state.
    let state_compatible = profile
        .product_state
        .is_some_and(|state| characteristics.product_state_compatibility.contains(&state));
    if state_compatible {
        total += f64::from(weights.product_state);
        details.push(format!(
            "Product state compatibility: +{}",
            weights.product_state
        ));
    } else {
        details.push("Product state incompatible: +0".to_string());
    }
    max_possible += f64::from(weights.product_state);

    // Barrier requirements.
    let mut barrier_score = 0;
    for kind in BarrierKind::ALL {
        let need = profile.sensitivity(kind);
        let level = characteristics.barrier(kind);
        let points = params.barrier_scoring.points(kind, need, level);
        barrier_score += points;
        details.push(format!("{} barrier: {points:+}", kind.label()));
    }
    total += f64::from(barrier_score);
    max_possible += f64::from(weights.barrier_requirements);

    // Chemical compatibility.
    if characteristics
        .ph_tolerance
        .contains(&profile.ph_level_or_default())
    {
        total += f64::from(weights.chemical_compatibility);
        details.push(format!(
            "Chemical compatibility: +{}",
            weights.chemical_compatibility
        ));
    } else {
        details.push("Chemical incompatibility: +0".to_string());
    }
    max_possible += f64::from(weights.chemical_compatibility);

    // Cost alignment.
    if let Some(points) = params
        .cost_scoring
        .points(profile.budget_range_or_default(), characteristics.cost_category)
    {
        total += f64::from(points);
        if points >= 0 {
            details.push(format!("Cost alignment: +{points}"));
        } else {
            details.push(format!("Cost mismatch: {points}"));
        }
    }
    max_possible += f64::from(weights.cost_alignment);

    // Temperature requirements.
    if characteristics
        .temperature_range
        .contains(&profile.storage_temperature_or_default())
    {
        total += f64::from(weights.temperature_requirements);
        details.push(format!(
            "Temperature compatibility: +{}",
            weights.temperature_requirements
        ));
    } else {
        details.push("Temperature incompatibility: +0".to_string());
    }
    max_possible += f64::from(weights.temperature_requirements);

    // Sustainability match.
    let sustain_score =
        if profile.sustainability_priority == Some(SustainabilityPriority::EcoFocused) {
            let traits = &material.sustainability;
            let mut earned = 0;
            if traits.recyclable {
                earned += ECO_RECYCLABLE_POINTS;
            }
            if traits.pcr_available {
                earned += ECO_PCR_POINTS;
            }
            if traits.biodegradable {
                earned += ECO_BIODEGRADABLE_POINTS;
            }
            earned
        } else {
            NEUTRAL_SUSTAINABILITY_POINTS
        };
    total += f64::from(sustain_score);
    max_possible += f64::from(weights.sustainability_match);
    details.push(format!("Sustainability match: +{sustain_score}"));

    // Rule bonuses adjust the earned total only.
    let bonus = rule_bonus(profile, material_name, &catalog.recommendation_rules);
    total += bonus;
    if bonus > 0.0 {
        details.push(format!("Rule bonuses: +{bonus:.1}"));
    }

    let score = if max_possible > 0.0 {
        ((total / max_possible) * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    (score, details)
}
