// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ActivityLevel, Combo, DietaryPreference, FoodItem, Gender, Goal, MealRecommendation, Profile,
    RecommendationResult, RecommendationSettings, ScoredCombo, ScoringWeights,
};
pub use requests::RecommendRequest;
pub use responses::{ErrorResponse, HealthResponse, WelcomeResponse};
