use std::sync::{Arc, RwLock};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::domain::{AttributeProfile, CostTier, ShelfLifeRequirement};
use crate::catalog::records::{Catalog, CatalogSummary, Material, ProductRecord, RecommendationRule};
use crate::catalog::store::{CatalogRepository, CatalogStoreError};

use super::inference::infer_profile;
use super::ranking::{recommend, ScoredRecommendation};

/// Inputs a UI layer collects before asking for recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub product_name: String,
    #[serde(default)]
    pub purpose: String,
    pub cost: CostTier,
    pub shelf_life: ShelfLifeRequirement,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Inferred profile plus the full ranked candidate list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationOutcome {
    pub profile: AttributeProfile,
    pub recommendations: Vec<ScoredRecommendation>,
}

/// Error raised by the advisor service.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorServiceError {
    #[error("product '{0}' already exists")]
    DuplicateProduct(String),
    #[error(transparent)]
    Store(#[from] CatalogStoreError),
}

/// Catalog-backed facade composing inference, scoring, ranking, and catalog
/// management.
///
/// The catalog is read-mostly: recommendation passes take a shared read lock,
/// while mutations clone the current document, persist the clone, and swap it
/// in only after the write succeeds, so in-flight reads never observe a
/// half-applied or unpersisted edit.
pub struct AdvisorService<R: CatalogRepository> {
    repository: Arc<R>,
    catalog: RwLock<Catalog>,
}

impl<R: CatalogRepository> AdvisorService<R> {
    pub fn new(repository: Arc<R>) -> Result<Self, AdvisorServiceError> {
        let catalog = repository.load()?;
        let summary = catalog.summary();
        info!(
            products = summary.products,
            materials = summary.materials,
            rules = summary.rules,
            "catalog loaded"
        );

        Ok(Self {
            repository,
            catalog: RwLock::new(catalog),
        })
    }

    /// Infer a profile for the request and rank the whole material catalog
    /// against it.
    pub fn recommend(&self, request: &RecommendationRequest) -> RecommendationOutcome {
        let catalog = self.catalog.read().expect("catalog lock poisoned");
        let profile = infer_profile(
            &request.product_name,
            &request.purpose,
            request.cost,
            request.shelf_life,
            &catalog,
        );
        let recommendations = recommend(&profile, &catalog);
        debug!(
            product = %request.product_name,
            candidates = recommendations.len(),
            "recommendation pass served"
        );

        RecommendationOutcome {
            profile,
            recommendations,
        }
    }

    /// Rank the catalog against an explicit, caller-built profile.
    pub fn recommend_for_profile(&self, profile: &AttributeProfile) -> Vec<ScoredRecommendation> {
        let catalog = self.catalog.read().expect("catalog lock poisoned");
        recommend(profile, &catalog)
    }

    /// Save a new product record; duplicate names are rejected.
    pub fn save_product(
        &self,
        name: &str,
        mut record: ProductRecord,
    ) -> Result<(), AdvisorServiceError> {
        if record.created_date.is_none() {
            record.created_date = Some(Utc::now());
        }

        self.mutate(|catalog| {
            if catalog.products.contains_key(name) {
                return Err(AdvisorServiceError::DuplicateProduct(name.to_string()));
            }
            catalog.products.insert(name.to_string(), record);
            Ok(())
        })?;

        info!(product = %name, "product saved");
        Ok(())
    }

    /// Persist an inferred profile onto a product record so later inference
    /// for the same name takes the stored-profile path. Creates the record
    /// when the product is new.
    pub fn remember_profile(
        &self,
        product_name: &str,
        profile: AttributeProfile,
    ) -> Result<(), AdvisorServiceError> {
        self.mutate(|catalog| {
            let record = catalog.products.entry(product_name.to_string()).or_default();
            if record.created_date.is_none() {
                record.created_date = Some(Utc::now());
            }
            record.attribute_profile = Some(profile);
            Ok(())
        })?;

        info!(product = %product_name, "profile remembered");
        Ok(())
    }

    /// Create or replace a material.
    pub fn upsert_material(
        &self,
        name: &str,
        material: Material,
    ) -> Result<(), AdvisorServiceError> {
        self.mutate(|catalog| {
            catalog
                .packaging_materials
                .insert(name.to_string(), material);
            Ok(())
        })?;

        info!(material = %name, "material saved");
        Ok(())
    }

    /// Merge a batch of materials (e.g. a CSV import) into the catalog.
    pub fn upsert_materials(
        &self,
        materials: impl IntoIterator<Item = (String, Material)>,
    ) -> Result<usize, AdvisorServiceError> {
        let mut count = 0;
        self.mutate(|catalog| {
            for (name, material) in materials {
                catalog.packaging_materials.insert(name, material);
                count += 1;
            }
            Ok(())
        })?;

        info!(count, "materials imported");
        Ok(count)
    }

    /// Create or replace a recommendation rule.
    pub fn upsert_rule(
        &self,
        name: &str,
        rule: RecommendationRule,
    ) -> Result<(), AdvisorServiceError> {
        self.mutate(|catalog| {
            catalog
                .recommendation_rules
                .insert(name.to_string(), rule);
            Ok(())
        })?;

        info!(rule = %name, "rule saved");
        Ok(())
    }

    pub fn product(&self, name: &str) -> Option<ProductRecord> {
        let catalog = self.catalog.read().expect("catalog lock poisoned");
        catalog.products.get(name).cloned()
    }

    pub fn materials(&self) -> std::collections::BTreeMap<String, Material> {
        let catalog = self.catalog.read().expect("catalog lock poisoned");
        catalog.packaging_materials.clone()
    }

    pub fn summary(&self) -> CatalogSummary {
        let catalog = self.catalog.read().expect("catalog lock poisoned");
        catalog.summary()
    }

    /// Apply an edit to a cloned catalog, persist it, then swap it in. A
    /// failed persist leaves the in-memory catalog untouched.
    fn mutate(
        &self,
        edit: impl FnOnce(&mut Catalog) -> Result<(), AdvisorServiceError>,
    ) -> Result<(), AdvisorServiceError> {
        let mut guard = self.catalog.write().expect("catalog lock poisoned");
        let mut draft = guard.clone();
        edit(&mut draft)?;
        self.repository.save(&draft)?;
        *guard = draft;
        Ok(())
    }
}
