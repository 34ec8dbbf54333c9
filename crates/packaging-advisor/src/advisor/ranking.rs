use serde::{Deserialize, Serialize};

use crate::catalog::domain::AttributeProfile;
use crate::catalog::records::{Catalog, Material};

use super::reasons::explain;
use super::scoring::score_material;

/// One ranked candidate, recomputed per query and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecommendation {
    pub material_name: String,
    pub display_name: String,
    pub score: f64,
    pub scoring_details: Vec<String>,
    pub reasons: Vec<String>,
    pub material: Material,
}

/// Score every material in the catalog against the profile and return them in
/// descending score order.
///
/// No candidate is filtered out: a 0% match is still returned, ranked last,
/// so callers always see the full catalog. Ties keep catalog (name) order,
/// making the ranking deterministic for identical input. An empty catalog
/// yields an empty sequence, which callers treat as "no data" rather than an
/// error.
pub fn recommend(profile: &AttributeProfile, catalog: &Catalog) -> Vec<ScoredRecommendation> {
    let mut recommendations: Vec<ScoredRecommendation> = catalog
        .packaging_materials
        .iter()
        .map(|(name, material)| {
            let (score, scoring_details) = score_material(profile, name, material, catalog);
            let reasons = explain(profile, material, score);

            ScoredRecommendation {
                material_name: name.clone(),
                display_name: name.replace('_', " "),
                score,
                scoring_details,
                reasons,
                material: material.clone(),
            }
        })
        .collect();

    recommendations.sort_by(|a, b| b.score.total_cmp(&a.score));
    recommendations
}
