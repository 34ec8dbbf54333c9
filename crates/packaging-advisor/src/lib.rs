//! Packaging material recommendation engine.
//!
//! The [`catalog`] module owns the persisted data model (products, materials,
//! recommendation rules, scoring parameters) and its flat-file store. The
//! [`advisor`] module implements the engine itself: attribute inference,
//! weighted compatibility scoring, rule bonuses, ranking, and human-readable
//! justifications, plus the catalog-backed service and HTTP router consumed by
//! the API crate.

pub mod advisor;
pub mod catalog;
pub mod config;
pub mod error;
pub mod telemetry;
