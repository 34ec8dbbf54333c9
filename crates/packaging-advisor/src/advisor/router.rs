use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::catalog::domain::AttributeProfile;
use crate::catalog::records::{
    Material, PackagingSolutions, ProductBasicInfo, ProductRecord, RecommendationRule,
};
use crate::catalog::store::CatalogRepository;

use super::ranking::ScoredRecommendation;
use super::service::{AdvisorService, AdvisorServiceError, RecommendationRequest};

/// How many recommendations a response carries when the request names no
/// limit.
const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

/// Router builder exposing the engine endpoints consumed by UI layers.
pub fn advisor_router<R>(service: Arc<AdvisorService<R>>) -> Router
where
    R: CatalogRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/recommendations",
            post(recommendations_handler::<R>),
        )
        .route(
            "/api/v1/recommendations/profile",
            post(profile_recommendations_handler::<R>),
        )
        .route("/api/v1/products", post(save_product_handler::<R>))
        .route("/api/v1/products/:name", get(product_handler::<R>))
        .route("/api/v1/materials", get(materials_handler::<R>))
        .route("/api/v1/materials/:name", put(upsert_material_handler::<R>))
        .route("/api/v1/rules/:name", put(upsert_rule_handler::<R>))
        .route("/api/v1/catalog/summary", get(summary_handler::<R>))
        .with_state(service)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub profile: AttributeProfile,
    pub recommendations: Vec<ScoredRecommendation>,
}

pub(crate) async fn recommendations_handler<R>(
    State(service): State<Arc<AdvisorService<R>>>,
    Json(request): Json<RecommendationRequest>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    let limit = request
        .limit
        .unwrap_or(DEFAULT_RECOMMENDATION_LIMIT)
        .max(1);
    let mut outcome = service.recommend(&request);
    outcome.recommendations.truncate(limit);

    let body = RecommendationResponse {
        profile: outcome.profile,
        recommendations: outcome.recommendations,
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Request for callers that already hold a fully-filled attribute form and
/// skip inference entirely.
#[derive(Debug, Deserialize)]
pub(crate) struct ProfileRecommendationRequest {
    pub(crate) profile: AttributeProfile,
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

pub(crate) async fn profile_recommendations_handler<R>(
    State(service): State<Arc<AdvisorService<R>>>,
    Json(request): Json<ProfileRecommendationRequest>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    let limit = request
        .limit
        .unwrap_or(DEFAULT_RECOMMENDATION_LIMIT)
        .max(1);
    let mut recommendations = service.recommend_for_profile(&request.profile);
    recommendations.truncate(limit);

    let body = RecommendationResponse {
        profile: request.profile,
        recommendations,
    };
    (StatusCode::OK, Json(body)).into_response()
}

#[derive(Debug, Deserialize)]
pub(crate) struct SaveProductRequest {
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) basic_info: ProductBasicInfo,
    #[serde(default)]
    pub(crate) packaging: PackagingSolutions,
    #[serde(default)]
    pub(crate) attribute_profile: Option<AttributeProfile>,
}

pub(crate) async fn save_product_handler<R>(
    State(service): State<Arc<AdvisorService<R>>>,
    Json(request): Json<SaveProductRequest>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    let record = ProductRecord {
        basic_info: request.basic_info,
        packaging: request.packaging,
        attribute_profile: request.attribute_profile,
        created_date: None,
    };

    match service.save_product(&request.name, record) {
        Ok(()) => {
            let payload = json!({ "name": request.name, "status": "saved" });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(AdvisorServiceError::DuplicateProduct(name)) => {
            let payload = json!({ "error": format!("product '{name}' already exists") });
            (StatusCode::CONFLICT, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn product_handler<R>(
    State(service): State<Arc<AdvisorService<R>>>,
    Path(name): Path<String>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    match service.product(&name) {
        Some(record) => (StatusCode::OK, Json(record)).into_response(),
        None => {
            let payload = json!({ "error": format!("product '{name}' not found") });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn materials_handler<R>(
    State(service): State<Arc<AdvisorService<R>>>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    (StatusCode::OK, Json(service.materials())).into_response()
}

pub(crate) async fn upsert_material_handler<R>(
    State(service): State<Arc<AdvisorService<R>>>,
    Path(name): Path<String>,
    Json(material): Json<Material>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    match service.upsert_material(&name, material) {
        Ok(()) => {
            let payload = json!({ "name": name, "status": "saved" });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn upsert_rule_handler<R>(
    State(service): State<Arc<AdvisorService<R>>>,
    Path(name): Path<String>,
    Json(rule): Json<RecommendationRule>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    match service.upsert_rule(&name, rule) {
        Ok(()) => {
            let payload = json!({ "name": name, "status": "saved" });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn summary_handler<R>(
    State(service): State<Arc<AdvisorService<R>>>,
) -> Response
where
    R: CatalogRepository + 'static,
{
    (StatusCode::OK, Json(service.summary())).into_response()
}
