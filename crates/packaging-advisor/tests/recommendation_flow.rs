use std::collections::BTreeMap;
use std::sync::Arc;

use packaging_advisor::advisor::{AdvisorService, RecommendationRequest};
use packaging_advisor::catalog::{
    BarrierLevel, Catalog, CatalogRepository, CostTier, FileCatalogStore, Material, MaterialCharacteristics,
    PhLevel, ProductState, ShelfLifeRequirement, StorageTemperature, SustainabilityTraits,
};

fn seed_material() -> Material {
    Material {
        material_type: "Rigid glass container".to_string(),
        characteristics: MaterialCharacteristics {
            cost_category: CostTier::Premium,
            product_state_compatibility: [ProductState::Liquid].into_iter().collect(),
            oxygen_barrier: BarrierLevel::Excellent,
            moisture_barrier: BarrierLevel::Excellent,
            light_barrier: BarrierLevel::Low,
            chemical_resistance: None,
            ph_tolerance: [PhLevel::Acidic, PhLevel::Neutral].into_iter().collect(),
            temperature_range: [
                StorageTemperature::Cold,
                StorageTemperature::Cool,
                StorageTemperature::Ambient,
            ]
            .into_iter()
            .collect(),
        },
        sustainability: SustainabilityTraits {
            recyclable: true,
            pcr_available: true,
            biodegradable: false,
        },
        pros: vec!["Inert and non-reactive".to_string()],
        cons: vec!["Breakage risk".to_string()],
        technical_specs: BTreeMap::new(),
    }
}

fn seeded_store(dir: &tempfile::TempDir) -> FileCatalogStore {
    let store = FileCatalogStore::new(dir.path().join("catalog.json"));
    let mut catalog = Catalog::default();
    catalog
        .packaging_materials
        .insert("Glass_Jar".to_string(), seed_material());
    store.save(&catalog).expect("seed catalog persists");
    store
}

#[test]
fn remembered_profiles_survive_a_restart_and_reinfer_identically() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = seeded_store(&dir);

    let request = RecommendationRequest {
        product_name: "Cold Brew Coffee".to_string(),
        purpose: "bottled coffee beverage".to_string(),
        cost: CostTier::Premium,
        shelf_life: ShelfLifeRequirement::Weeks,
        limit: None,
    };

    let inferred = {
        let service =
            AdvisorService::new(Arc::new(store.clone())).expect("service loads seeded catalog");
        let outcome = service.recommend(&request);
        assert_eq!(outcome.recommendations.len(), 1);
        assert_eq!(outcome.recommendations[0].material_name, "Glass_Jar");

        service
            .remember_profile("Cold Brew Coffee", outcome.profile.clone())
            .expect("profile persists");
        outcome.profile
    };

    // A fresh service over the same file takes the stored-profile path and,
    // with the same cost and shelf life inputs, reproduces the profile
    // exactly.
    let service = AdvisorService::new(Arc::new(store)).expect("service reloads catalog");
    let outcome = service.recommend(&request);
    assert_eq!(outcome.profile, inferred);
}

#[test]
fn recommendation_passes_are_reproducible_across_service_instances() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = seeded_store(&dir);

    let request = RecommendationRequest {
        product_name: "Tomato Ketchup".to_string(),
        purpose: "".to_string(),
        cost: CostTier::Standard,
        shelf_life: ShelfLifeRequirement::Months,
        limit: None,
    };

    let first = AdvisorService::new(Arc::new(store.clone()))
        .expect("service loads")
        .recommend(&request);
    let second = AdvisorService::new(Arc::new(store))
        .expect("service loads")
        .recommend(&request);

    assert_eq!(first.profile, second.profile);
    assert_eq!(first.recommendations, second.recommendations);
}

#[test]
fn saving_products_rejects_duplicates_across_the_store() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = seeded_store(&dir);
    let service = AdvisorService::new(Arc::new(store)).expect("service loads");

    service
        .save_product("Trail Mix", Default::default())
        .expect("first save succeeds");
    let result = service.save_product("Trail Mix", Default::default());

    assert!(result.is_err());
    assert!(service.product("Trail Mix").is_some());
}
