use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use metrics_exporter_prometheus::PrometheusHandle;
use packaging_advisor::catalog::{
    AttributeKind, BarrierLevel, Catalog, CatalogRepository, CatalogStoreError, CostTier, Material,
    MaterialCharacteristics, PhLevel, ProductState, RecommendationRule, ShelfLifeRequirement,
    StorageTemperature, SustainabilityTraits, TriggerCondition,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog store for the demo command; nothing touches disk.
#[derive(Default)]
pub(crate) struct InMemoryCatalogStore {
    catalog: Mutex<Catalog>,
}

impl InMemoryCatalogStore {
    pub(crate) fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Mutex::new(catalog),
        }
    }
}

impl CatalogRepository for InMemoryCatalogStore {
    fn load(&self) -> Result<Catalog, CatalogStoreError> {
        Ok(self.catalog.lock().expect("catalog mutex poisoned").clone())
    }

    fn save(&self, catalog: &Catalog) -> Result<(), CatalogStoreError> {
        *self.catalog.lock().expect("catalog mutex poisoned") = catalog.clone();
        Ok(())
    }
}

pub(crate) fn parse_cost(raw: &str) -> Result<CostTier, String> {
    raw.parse::<CostTier>().map_err(|err| err.to_string())
}

pub(crate) fn parse_shelf_life(raw: &str) -> Result<ShelfLifeRequirement, String> {
    raw.parse::<ShelfLifeRequirement>()
        .map_err(|err| err.to_string())
}

fn material(
    material_type: &str,
    cost_category: CostTier,
    states: &[ProductState],
    barriers: [BarrierLevel; 3],
    ph: &[PhLevel],
    temperatures: &[StorageTemperature],
    sustainability: SustainabilityTraits,
    pros: &[&str],
    cons: &[&str],
) -> Material {
    Material {
        material_type: material_type.to_string(),
        characteristics: MaterialCharacteristics {
            cost_category,
            product_state_compatibility: states.iter().copied().collect(),
            oxygen_barrier: barriers[0],
            moisture_barrier: barriers[1],
            light_barrier: barriers[2],
            chemical_resistance: None,
            ph_tolerance: ph.iter().copied().collect(),
            temperature_range: temperatures.iter().copied().collect(),
        },
        sustainability,
        pros: pros.iter().map(|pro| (*pro).to_string()).collect(),
        cons: cons.iter().map(|con| (*con).to_string()).collect(),
        technical_specs: BTreeMap::new(),
    }
}

/// Small but representative catalog used by the demo command and route tests.
pub(crate) fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::default();

    catalog.packaging_materials.insert(
        "Glass_Jar".to_string(),
        material(
            "Rigid glass container",
            CostTier::Premium,
            &[
                ProductState::Liquid,
                ProductState::Paste,
                ProductState::SemiSolid,
            ],
            [
                BarrierLevel::Excellent,
                BarrierLevel::Excellent,
                BarrierLevel::Low,
            ],
            &[PhLevel::Acidic, PhLevel::Neutral, PhLevel::Basic],
            &[
                StorageTemperature::Cold,
                StorageTemperature::Cool,
                StorageTemperature::Ambient,
                StorageTemperature::Hot,
            ],
            SustainabilityTraits {
                recyclable: true,
                pcr_available: true,
                biodegradable: false,
            },
            &["Inert and non-reactive", "Premium shelf presence"],
            &["Heavy to ship", "Breakage risk"],
        ),
    );

    catalog.packaging_materials.insert(
        "PET_Bottle".to_string(),
        material(
            "Rigid plastic bottle",
            CostTier::Standard,
            &[ProductState::Liquid],
            [BarrierLevel::Medium, BarrierLevel::High, BarrierLevel::Low],
            &[PhLevel::Acidic, PhLevel::Neutral],
            &[
                StorageTemperature::Cold,
                StorageTemperature::Cool,
                StorageTemperature::Ambient,
            ],
            SustainabilityTraits {
                recyclable: true,
                pcr_available: true,
                biodegradable: false,
            },
            &["Lightweight", "Shatter resistant"],
            &["Limited hot-fill tolerance"],
        ),
    );

    catalog.packaging_materials.insert(
        "Aluminum_Can".to_string(),
        material(
            "Rigid metal can",
            CostTier::Standard,
            &[ProductState::Liquid],
            [
                BarrierLevel::Excellent,
                BarrierLevel::Excellent,
                BarrierLevel::Excellent,
            ],
            &[PhLevel::Acidic, PhLevel::Neutral],
            &[
                StorageTemperature::Cold,
                StorageTemperature::Cool,
                StorageTemperature::Ambient,
            ],
            SustainabilityTraits {
                recyclable: true,
                pcr_available: true,
                biodegradable: false,
            },
            &["Total light exclusion", "Fast chilling"],
            &["Not resealable"],
        ),
    );

    catalog.packaging_materials.insert(
        "Kraft_Paper_Pouch".to_string(),
        material(
            "Flexible paper pouch",
            CostTier::Economy,
            &[ProductState::Solid, ProductState::Powder],
            [BarrierLevel::Low, BarrierLevel::Low, BarrierLevel::Medium],
            &[PhLevel::Neutral],
            &[StorageTemperature::Ambient],
            SustainabilityTraits {
                recyclable: true,
                pcr_available: false,
                biodegradable: true,
            },
            &["Compostable fiber", "Low unit cost"],
            &["Poor moisture protection"],
        ),
    );

    catalog.packaging_materials.insert(
        "Foil_Laminate_Pouch".to_string(),
        material(
            "Flexible laminate pouch",
            CostTier::Standard,
            &[
                ProductState::Solid,
                ProductState::Powder,
                ProductState::Paste,
            ],
            [
                BarrierLevel::Excellent,
                BarrierLevel::Excellent,
                BarrierLevel::Excellent,
            ],
            &[PhLevel::Acidic, PhLevel::Neutral, PhLevel::Basic],
            &[
                StorageTemperature::Frozen,
                StorageTemperature::Cold,
                StorageTemperature::Cool,
                StorageTemperature::Ambient,
            ],
            SustainabilityTraits {
                recyclable: false,
                pcr_available: false,
                biodegradable: false,
            },
            &["High barrier at low weight", "Good seal integrity"],
            &["Hard to recycle multi-layer"],
        ),
    );

    let mut premium_trigger = TriggerCondition::new();
    premium_trigger.insert(AttributeKind::BudgetRange, "Premium".to_string());
    catalog.recommendation_rules.insert(
        "premium_liquid_glass".to_string(),
        RecommendationRule {
            triggers: vec![premium_trigger],
            recommended_materials: ["Glass_Jar".to_string()].into_iter().collect(),
            avoid_materials: Default::default(),
            priority_score: 10.0,
        },
    );

    let mut liquid_trigger = TriggerCondition::new();
    liquid_trigger.insert(AttributeKind::ProductState, "Liquid".to_string());
    catalog.recommendation_rules.insert(
        "liquids_avoid_paper".to_string(),
        RecommendationRule {
            triggers: vec![liquid_trigger],
            recommended_materials: Default::default(),
            avoid_materials: ["Kraft_Paper_Pouch".to_string()].into_iter().collect(),
            priority_score: 8.0,
        },
    );

    catalog
}
