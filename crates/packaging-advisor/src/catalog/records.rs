use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{
    AttributeKind, AttributeProfile, BarrierKind, BarrierLevel, CostTier, PhLevel, ProductState,
    StorageTemperature,
};
use super::params::ScoringParameters;

/// One packaging material in the catalog. Read-only during scoring; created
/// and edited only through catalog management.
///
/// The characteristics block has no serde defaults on barrier or tolerance
/// fields: a record missing one of them is a data-integrity fault and must
/// fail catalog load rather than score as silently compatible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub material_type: String,
    pub characteristics: MaterialCharacteristics,
    pub sustainability: SustainabilityTraits,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub technical_specs: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCharacteristics {
    pub cost_category: CostTier,
    pub product_state_compatibility: BTreeSet<ProductState>,
    pub oxygen_barrier: BarrierLevel,
    pub moisture_barrier: BarrierLevel,
    pub light_barrier: BarrierLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chemical_resistance: Option<String>,
    pub ph_tolerance: BTreeSet<PhLevel>,
    pub temperature_range: BTreeSet<StorageTemperature>,
}

impl MaterialCharacteristics {
    pub fn barrier(&self, kind: BarrierKind) -> BarrierLevel {
        match kind {
            BarrierKind::Oxygen => self.oxygen_barrier,
            BarrierKind::Moisture => self.moisture_barrier,
            BarrierKind::Light => self.light_barrier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SustainabilityTraits {
    pub recyclable: bool,
    pub pcr_available: bool,
    pub biodegradable: bool,
}

/// A stored product: descriptive record plus the optional saved attribute
/// profile that short-circuits inference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRecord {
    pub basic_info: ProductBasicInfo,
    pub packaging: PackagingSolutions,
    pub attribute_profile: Option<AttributeProfile>,
    pub created_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductBasicInfo {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub intended_market: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackagingSolutions {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub tertiary: Vec<String>,
}

/// One equality condition set inside a rule's trigger list. Values are the
/// canonical display labels of the attribute vocabulary (`"Semi-solid"`,
/// `"Eco-focused"`, ...).
pub type TriggerCondition = BTreeMap<AttributeKind, String>;

/// Declarative boost/penalty rule layered on top of the base compatibility
/// score. A rule fires when any key/value pair in any trigger condition
/// matches the profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationRule {
    pub triggers: Vec<TriggerCondition>,
    pub recommended_materials: BTreeSet<String>,
    pub avoid_materials: BTreeSet<String>,
    pub priority_score: f64,
}

/// The whole persisted catalog document. Each section defaults to empty so a
/// partial document still loads; `BTreeMap` keeps iteration (and therefore
/// ranking tiebreaks) deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub products: BTreeMap<String, ProductRecord>,
    pub packaging_materials: BTreeMap<String, Material>,
    pub recommendation_rules: BTreeMap<String, RecommendationRule>,
    pub scoring_parameters: ScoringParameters,
}

/// Section counts for status displays and the summary endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub products: usize,
    pub materials: usize,
    pub rules: usize,
}

impl Catalog {
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            products: self.products.len(),
            materials: self.packaging_materials.len(),
            rules: self.recommendation_rules.len(),
        }
    }
}
