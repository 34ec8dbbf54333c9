use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use packaging_advisor::advisor::{AdvisorService, RecommendationRequest, ScoredRecommendation};
use packaging_advisor::catalog::{
    import_materials_from_path, CatalogRepository, CostTier, FileCatalogStore,
    ShelfLifeRequirement,
};
use packaging_advisor::config::AppConfig;
use packaging_advisor::error::AppError;

use crate::infra::{parse_cost, parse_shelf_life, sample_catalog, InMemoryCatalogStore};

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Product name to infer a profile for
    #[arg(long)]
    pub(crate) product_name: String,
    /// Free-text purpose to sharpen keyword matching
    #[arg(long, default_value = "")]
    pub(crate) purpose: String,
    /// Packaging budget (Economy, Standard, Premium)
    #[arg(long, value_parser = parse_cost)]
    pub(crate) cost: CostTier,
    /// Required shelf life (Days, Weeks, Months, Years)
    #[arg(long, value_parser = parse_shelf_life)]
    pub(crate) shelf_life: ShelfLifeRequirement,
    /// How many recommendations to print
    #[arg(long, default_value_t = 5)]
    pub(crate) top: usize,
    /// Override the configured catalog file
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Product name to run the walkthrough for
    #[arg(long, default_value = "Cold Brew Coffee")]
    pub(crate) product_name: String,
}

#[derive(Args, Debug)]
pub(crate) struct ImportMaterialsArgs {
    /// CSV export to load materials from
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Override the configured catalog file
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let path = match args.catalog {
        Some(path) => path,
        None => AppConfig::load()?.catalog.path,
    };

    let store = Arc::new(FileCatalogStore::new(path));
    let service = AdvisorService::new(store)?;

    let request = RecommendationRequest {
        product_name: args.product_name,
        purpose: args.purpose,
        cost: args.cost,
        shelf_life: args.shelf_life,
        limit: None,
    };

    render_recommendations(&service, &request, args.top);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let store = Arc::new(InMemoryCatalogStore::with_catalog(sample_catalog()));
    let service = AdvisorService::new(store)?;

    println!("Packaging advisor demo (seeded catalog)");
    let summary = service.summary();
    println!(
        "Catalog: {} materials, {} rules",
        summary.materials, summary.rules
    );

    let request = RecommendationRequest {
        product_name: args.product_name,
        purpose: "demo walkthrough".to_string(),
        cost: CostTier::Premium,
        shelf_life: ShelfLifeRequirement::Weeks,
        limit: None,
    };

    render_recommendations(&service, &request, 3);
    Ok(())
}

pub(crate) fn run_materials_import(args: ImportMaterialsArgs) -> Result<(), AppError> {
    let path = match args.catalog {
        Some(path) => path,
        None => AppConfig::load()?.catalog.path,
    };

    let materials = import_materials_from_path(&args.csv)?;
    let store = Arc::new(FileCatalogStore::new(path.clone()));
    let service = AdvisorService::new(store)?;
    let count = service.upsert_materials(materials)?;

    println!(
        "Imported {} material(s) from {} into {}",
        count,
        args.csv.display(),
        path.display()
    );
    Ok(())
}

fn render_recommendations<R: CatalogRepository>(
    service: &AdvisorService<R>,
    request: &RecommendationRequest,
    top: usize,
) {
    let outcome = service.recommend(request);

    println!(
        "\nProduct: {} ({} budget, {} shelf life)",
        request.product_name,
        request.cost.label().to_lowercase(),
        request.shelf_life.label().to_lowercase()
    );

    println!("\nInferred profile");
    let profile = &outcome.profile;
    if let Some(state) = profile.product_state {
        println!("- Product state: {state}");
    }
    if let Some(ph) = profile.ph_level {
        println!("- pH: {ph}");
    }
    if let Some(temperature) = profile.storage_temperature {
        println!("- Storage: {temperature}");
    }
    println!(
        "- Sensitivities (oxygen/moisture/light): {}/{}/{}",
        profile
            .oxygen_sensitivity
            .map_or("None", |level| level.label()),
        profile
            .moisture_sensitivity
            .map_or("None", |level| level.label()),
        profile
            .light_sensitivity
            .map_or("None", |level| level.label()),
    );

    if outcome.recommendations.is_empty() {
        println!("\nNo materials in the catalog; import materials first.");
        return;
    }

    println!("\nTop recommendations");
    for (rank, rec) in outcome.recommendations.iter().take(top).enumerate() {
        render_recommendation(rank + 1, rec);
    }
}

fn render_recommendation(rank: usize, rec: &ScoredRecommendation) {
    println!("\n#{rank} {} - {:.1}% match", rec.display_name, rec.score);
    println!("  Type: {}", rec.material.material_type);
    println!(
        "  Cost: {}",
        rec.material.characteristics.cost_category
    );

    for detail in &rec.scoring_details {
        println!("  * {detail}");
    }

    for reason in &rec.reasons {
        println!("  > {reason}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_produces_a_confident_liquid_match() {
        let store = Arc::new(InMemoryCatalogStore::with_catalog(sample_catalog()));
        let service = AdvisorService::new(store).expect("service loads");

        let request = RecommendationRequest {
            product_name: "Cold Brew Coffee".to_string(),
            purpose: "bottled coffee beverage".to_string(),
            cost: CostTier::Premium,
            shelf_life: ShelfLifeRequirement::Weeks,
            limit: None,
        };

        let outcome = service.recommend(&request);

        assert_eq!(outcome.recommendations.len(), 5);
        let best = &outcome.recommendations[0];
        assert!(best.score > 50.0);
        // Liquid-capable materials outrank the paper pouch, which is both
        // state-incompatible and penalized by the avoid rule.
        assert_ne!(best.material_name, "Kraft_Paper_Pouch");
        assert_eq!(
            outcome.recommendations.last().map(|rec| rec.material_name.as_str()),
            Some("Kraft_Paper_Pouch")
        );
    }

    #[test]
    fn import_command_surfaces_row_errors() {
        let dir = tempfile::tempdir().expect("temp dir");
        let csv_path = dir.path().join("materials.csv");
        std::fs::write(
            &csv_path,
            "Name,Material Type,Cost Category,Product States,Oxygen Barrier,Moisture Barrier,Light Barrier,pH Tolerance,Temperature Range,Recyclable,PCR Available,Biodegradable\nBad,Film,Luxury,Liquid,Low,Low,Low,Neutral,Ambient,no,no,no\n",
        )
        .expect("write csv");

        let args = ImportMaterialsArgs {
            csv: csv_path,
            catalog: Some(dir.path().join("catalog.json")),
        };

        let result = run_materials_import(args);
        assert!(matches!(result, Err(AppError::Import(_))));
    }
}
