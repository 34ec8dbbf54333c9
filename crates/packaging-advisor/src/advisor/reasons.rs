use crate::catalog::domain::{
    AttributeProfile, BarrierKind, BarrierLevel, SensitivityLevel, SustainabilityPriority,
};
use crate::catalog::records::Material;

/// Score thresholds for the single tier remark.
const EXCEPTIONAL_SCORE: f64 = 90.0;
const EXCELLENT_SCORE: f64 = 75.0;
const GOOD_SCORE: f64 = 60.0;

/// How many declared pros are quoted verbatim.
const MAX_QUOTED_PROS: usize = 2;

/// Derive the human-readable justification list for one scored material.
///
/// Rules run in fixed order and each appends at most one line, so the same
/// inputs always produce the same list in the same order.
pub fn explain(
    profile: &AttributeProfile,
    material: &Material,
    score: f64,
) -> Vec<String> {
    let mut reasons = Vec::new();
    let characteristics = &material.characteristics;

    if let Some(state) = profile.product_state {
        if characteristics.product_state_compatibility.contains(&state) {
            reasons.push(format!(
                "Well suited to {} products",
                state.label().to_lowercase()
            ));
        }
    }

    // Barrier praise only for a High sensitivity answered by a High or
    // Excellent barrier; partial matches produce no line.
    let strong_barriers: Vec<&str> = BarrierKind::ALL
        .iter()
        .filter(|kind| {
            profile.sensitivity(**kind) == SensitivityLevel::High
                && matches!(
                    characteristics.barrier(**kind),
                    BarrierLevel::High | BarrierLevel::Excellent
                )
        })
        .map(|kind| kind.label())
        .collect();
    if !strong_barriers.is_empty() {
        reasons.push(format!(
            "Strong {} protection",
            strong_barriers.join(", ").to_lowercase()
        ));
    }

    if let Some(budget) = profile.budget_range {
        if budget == characteristics.cost_category {
            reasons.push(format!(
                "Matches a {} budget",
                budget.label().to_lowercase()
            ));
        }
    }

    if profile.sustainability_priority == Some(SustainabilityPriority::EcoFocused) {
        let traits = &material.sustainability;
        let mut features = Vec::new();
        if traits.recyclable {
            features.push("recyclable");
        }
        if traits.pcr_available {
            features.push("PCR available");
        }
        if traits.biodegradable {
            features.push("biodegradable");
        }
        if !features.is_empty() {
            reasons.push(format!("Eco-friendly: {}", features.join(", ")));
        }
    }

    if score >= EXCEPTIONAL_SCORE {
        reasons.push("Exceptional compatibility match".to_string());
    } else if score >= EXCELLENT_SCORE {
        reasons.push("Excellent compatibility".to_string());
    } else if score >= GOOD_SCORE {
        reasons.push("Good compatibility".to_string());
    }

    for pro in material.pros.iter().take(MAX_QUOTED_PROS) {
        reasons.push(pro.clone());
    }

    reasons
}
