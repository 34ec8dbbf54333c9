//! The recommendation engine: attribute inference, weighted compatibility
//! scoring, rule bonuses, ranking, and reason generation, plus the
//! catalog-backed service and router that expose them.
//!
//! The scoring path is pure and synchronous: every function here is a total
//! function over the profile (missing profile fields resolve to documented
//! defaults) and reads the catalog without mutating it.

mod inference;
mod ranking;
mod reasons;
mod router;
mod rules;
mod scoring;
mod service;

#[cfg(test)]
mod tests;

pub use inference::infer_profile;
pub use ranking::{recommend, ScoredRecommendation};
pub use reasons::explain;
pub use router::{advisor_router, RecommendationResponse};
pub use rules::rule_bonus;
pub use scoring::score_material;
pub use service::{
    AdvisorService, AdvisorServiceError, RecommendationOutcome, RecommendationRequest,
};
