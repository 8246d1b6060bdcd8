use crate::core::error::RecommendError;
use crate::models::{Gender, Profile};

/// Calculate Basal Metabolic Rate (kcal/day) with the Mifflin-St Jeor equation
///
/// - male: `10 * weight_kg + 6.25 * height_cm - 5 * age + 5`
/// - female: `10 * weight_kg + 6.25 * height_cm - 5 * age - 161`
#[inline]
pub fn calculate_bmr(gender: Gender, weight_kg: f64, height_cm: f64, age: u8) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Estimate the daily calorie target for a profile
///
/// BMR is scaled by the activity multiplier and then by the goal factor
/// (lose: 0.8, maintain: 1.0, gain: 1.2).
pub fn estimate_daily_calories(profile: &Profile) -> Result<f64, RecommendError> {
    if profile.age == 0 {
        return Err(RecommendError::InvalidProfile("age must be positive".to_string()));
    }
    if !(profile.weight_kg.is_finite() && profile.weight_kg > 0.0) {
        return Err(RecommendError::InvalidProfile("weight_kg must be positive".to_string()));
    }
    if !(profile.height_cm.is_finite() && profile.height_cm > 0.0) {
        return Err(RecommendError::InvalidProfile("height_cm must be positive".to_string()));
    }

    let bmr = calculate_bmr(profile.gender, profile.weight_kg, profile.height_cm, profile.age);
    let maintenance = bmr * profile.activity_level.multiplier();
    let target = maintenance * profile.goal.calorie_factor();

    // Tiny, elderly profiles can drive the equation below zero
    if target <= 0.0 {
        return Err(RecommendError::InvalidProfile(format!(
            "estimated daily requirement is not positive ({:.1} kcal)",
            target
        )));
    }

    tracing::debug!(
        bmr,
        maintenance,
        target,
        goal = ?profile.goal,
        "Estimated daily calorie target"
    );

    Ok(target)
}
