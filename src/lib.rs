//! NutriAI - Affordable meal recommendation service
//!
//! This library provides the recommendation engine behind the NutriAI API.
//! Given a nutrition profile and a food catalog it estimates a daily calorie
//! target, filters the catalog, enumerates meal combinations and ranks them
//! by nutrition fit and cost.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{estimate_daily_calories, filter_eligible, generate_combos, score_combo, FoodCatalog, RecommendError, Recommender};
pub use crate::models::{FoodItem, Profile, RecommendRequest, RecommendationResult, ScoringWeights};
