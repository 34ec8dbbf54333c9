use std::collections::BTreeMap;

use crate::catalog::domain::AttributeProfile;
use crate::catalog::records::RecommendationRule;

/// Fraction of a rule's priority score granted to recommended materials.
const RECOMMENDED_BONUS_RATE: f64 = 0.3;
/// Fraction of a rule's priority score subtracted from avoided materials.
const AVOID_PENALTY_RATE: f64 = 0.2;

/// Accumulate the rule-layer adjustment for one material. The result may be
/// negative.
///
/// A rule fires as soon as any single key/value pair in any of its trigger
/// conditions matches the profile. Per rule, a recommended material earns the
/// bonus and is never also penalized; materials on neither list are
/// unaffected. Adjustments from distinct rules accumulate additively.
pub fn rule_bonus(
    profile: &AttributeProfile,
    material_name: &str,
    rules: &BTreeMap<String, RecommendationRule>,
) -> f64 {
    let mut bonus = 0.0;

    for rule in rules.values() {
        let triggered = rule.triggers.iter().any(|condition| {
            condition.iter().any(|(kind, expected)| {
                profile.attribute(*kind).as_deref() == Some(expected.as_str())
            })
        });
        if !triggered {
            continue;
        }

        if rule.recommended_materials.contains(material_name) {
            bonus += rule.priority_score * RECOMMENDED_BONUS_RATE;
        } else if rule.avoid_materials.contains(material_name) {
            bonus -= rule.priority_score * AVOID_PENALTY_RATE;
        }
    }

    bonus
}
