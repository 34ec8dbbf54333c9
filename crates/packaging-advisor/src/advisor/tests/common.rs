use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use crate::advisor::service::AdvisorService;
use crate::catalog::domain::{
    AttributeKind, AttributeProfile, BarrierLevel, CostTier, PhLevel, ProductState,
    SensitivityLevel, ShelfLifeRequirement, StorageTemperature, SustainabilityPriority,
};
use crate::catalog::records::{
    Catalog, Material, MaterialCharacteristics, ProductRecord, RecommendationRule,
    SustainabilityTraits, TriggerCondition,
};
use crate::catalog::store::{CatalogRepository, CatalogStoreError};

pub(super) fn material(
    material_type: &str,
    cost_category: CostTier,
    states: &[ProductState],
    barriers: [BarrierLevel; 3],
    ph: &[PhLevel],
    temperatures: &[StorageTemperature],
    sustainability: SustainabilityTraits,
    pros: &[&str],
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
        cons: Vec::new(),
        technical_specs: BTreeMap::new(),
    }
}

pub(super) fn glass_jar() -> Material {
    material(
        "Rigid glass container",
        CostTier::Premium,
        &[ProductState::Liquid, ProductState::Paste, ProductState::SemiSolid],
        [BarrierLevel::Excellent, BarrierLevel::Excellent, BarrierLevel::Low],
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
    )
}

pub(super) fn pet_bottle() -> Material {
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
    )
}

pub(super) fn kraft_pouch() -> Material {
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
    )
}

pub(super) fn foil_pouch() -> Material {
    material(
        "Flexible laminate pouch",
        CostTier::Standard,
        &[ProductState::Solid, ProductState::Powder, ProductState::Paste],
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
    )
}

pub(super) fn trigger(kind: AttributeKind, value: &str) -> TriggerCondition {
    let mut condition = TriggerCondition::new();
    condition.insert(kind, value.to_string());
    condition
}

pub(super) fn premium_glass_rule() -> RecommendationRule {
    RecommendationRule {
        triggers: vec![trigger(AttributeKind::BudgetRange, "Premium")],
        recommended_materials: ["Glass_Jar".to_string()].into_iter().collect(),
        avoid_materials: BTreeSet::new(),
        priority_score: 10.0,
    }
}

pub(super) fn liquids_avoid_paper_rule() -> RecommendationRule {
    RecommendationRule {
        triggers: vec![trigger(AttributeKind::ProductState, "Liquid")],
        recommended_materials: BTreeSet::new(),
        avoid_materials: ["Kraft_Paper_Pouch".to_string()].into_iter().collect(),
        priority_score: 8.0,
    }
}

pub(super) fn sample_catalog() -> Catalog {
    let mut catalog = Catalog::default();
    catalog
        .packaging_materials
        .insert("Glass_Jar".to_string(), glass_jar());
    catalog
        .packaging_materials
        .insert("PET_Bottle".to_string(), pet_bottle());
    catalog
        .packaging_materials
        .insert("Kraft_Paper_Pouch".to_string(), kraft_pouch());
    catalog
        .packaging_materials
        .insert("Foil_Laminate_Pouch".to_string(), foil_pouch());
    catalog
}

pub(super) fn ruled_catalog() -> Catalog {
    let mut catalog = sample_catalog();
    catalog
        .recommendation_rules
        .insert("premium_liquid_glass".to_string(), premium_glass_rule());
    catalog.recommendation_rules.insert(
        "liquids_avoid_paper".to_string(),
        liquids_avoid_paper_rule(),
    );
    catalog
}

/// Profile with every factor aligned to `pet_bottle` and no barrier needs.
pub(super) fn easy_liquid_profile() -> AttributeProfile {
    AttributeProfile {
        product_state: Some(ProductState::Liquid),
        ph_level: Some(PhLevel::Neutral),
        oxygen_sensitivity: Some(SensitivityLevel::None),
        moisture_sensitivity: Some(SensitivityLevel::None),
        light_sensitivity: Some(SensitivityLevel::None),
        storage_temperature: Some(StorageTemperature::Ambient),
        budget_range: Some(CostTier::Standard),
        sustainability_priority: Some(SustainabilityPriority::Balanced),
        shelf_life_requirement: Some(ShelfLifeRequirement::Weeks),
        ..AttributeProfile::default()
    }
}

pub(super) fn stored_juice_profile() -> AttributeProfile {
    AttributeProfile {
        product_state: Some(ProductState::Liquid),
        ph_level: Some(PhLevel::Acidic),
        oxygen_sensitivity: Some(SensitivityLevel::High),
        moisture_sensitivity: Some(SensitivityLevel::Low),
        light_sensitivity: Some(SensitivityLevel::High),
        storage_temperature: Some(StorageTemperature::Cold),
        budget_range: Some(CostTier::Premium),
        sustainability_priority: Some(SustainabilityPriority::EcoFocused),
        shelf_life_requirement: Some(ShelfLifeRequirement::Weeks),
        ..AttributeProfile::default()
    }
}

pub(super) fn catalog_with_stored_product() -> Catalog {
    let mut catalog = ruled_catalog();
    catalog.products.insert(
        "Orange Juice".to_string(),
        ProductRecord {
            attribute_profile: Some(stored_juice_profile()),
            ..ProductRecord::default()
        },
    );
    catalog
}

/// Repository double keeping the document in memory.
#[derive(Default)]
pub(super) struct InMemoryCatalogStore {
    catalog: Mutex<Catalog>,
}

impl InMemoryCatalogStore {
    pub(super) fn with_catalog(catalog: Catalog) -> Self {
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

pub(super) fn service_with(catalog: Catalog) -> AdvisorService<InMemoryCatalogStore> {
    let repository = Arc::new(InMemoryCatalogStore::with_catalog(catalog));
    AdvisorService::new(repository).expect("service loads in-memory catalog")
}
