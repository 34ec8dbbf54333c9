//! Catalog data model and persistence: products, packaging materials,
//! recommendation rules, and scoring parameters, stored as one flat-file JSON
//! document.

pub mod domain;
pub mod import;
pub mod params;
pub mod records;
pub mod store;

pub use domain::{
    AttributeKind, AttributeProfile, BarrierKind, BarrierLevel, BrandPositioning, CostTier,
    FragilityLevel, PhLevel, ProductState, SensitivityLevel, ShelfLifeRequirement,
    StorageTemperature, SustainabilityPriority, UnknownAttributeValue, Viscosity,
};
pub use import::{import_materials_from_path, import_materials_from_reader, MaterialImportError};
pub use params::{BarrierScoring, CompatibilityWeights, CostScoring, ScoringParameters};
pub use records::{
    Catalog, CatalogSummary, Material, MaterialCharacteristics, PackagingSolutions,
    ProductBasicInfo, ProductRecord, RecommendationRule, SustainabilityTraits, TriggerCondition,
};
pub use store::{CatalogRepository, CatalogStoreError, FileCatalogStore};
