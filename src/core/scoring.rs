use crate::core::error::RecommendError;
use crate::models::{Combo, Profile, ScoringWeights};

/// Meals the daily calorie and protein targets are split across
pub const MEALS_PER_DAY: f64 = 3.0;

/// Daily protein target in grams per kg of bodyweight
pub const PROTEIN_G_PER_KG: f64 = 1.8;

/// Item count at which the variety score saturates
pub const VARIETY_CEILING: f64 = 3.0;

/// Calculate a fitness score (0-1) and total cost (KSh) for a meal combo
///
/// Scoring formula:
/// score = (
///     calorie_score * 0.4 +   # Closer to a third of the daily target = higher
///     protein_score * 0.3 +   # Meeting the per-meal protein share = higher
///     cost_score * 0.2 +      # Cheaper relative to the daily budget = higher
///     variety_score * 0.1     # More items, up to three = higher
/// )
pub fn score_combo(
    combo: &Combo<'_>,
    profile: &Profile,
    daily_calorie_target: f64,
    weights: &ScoringWeights,
) -> Result<(f64, f64), RecommendError> {
    if !(daily_calorie_target.is_finite() && daily_calorie_target > 0.0) {
        return Err(RecommendError::InvalidProfile(format!(
            "daily calorie target must be positive, got {}",
            daily_calorie_target
        )));
    }

    let total_kcal = combo.total_kcal();
    let total_protein = combo.total_protein_g();
    let total_cost = combo.total_cost_ksh();

    let calorie_score = calculate_calorie_score(total_kcal, daily_calorie_target / MEALS_PER_DAY);
    let protein_score =
        calculate_protein_score(total_protein, profile.weight_kg * PROTEIN_G_PER_KG / MEALS_PER_DAY);
    let cost_score = calculate_cost_score(total_cost, profile.daily_budget_ksh)?;
    let variety_score = calculate_variety_score(combo.len());

    let total_score = calorie_score * weights.calorie
        + protein_score * weights.protein
        + cost_score * weights.cost
        + variety_score * weights.variety;

    Ok((total_score.clamp(0.0, 1.0), total_cost))
}

/// Calculate calorie score (0-1)
/// Linear penalty on relative deviation from the ideal meal size
#[inline]
fn calculate_calorie_score(total_kcal: f64, ideal_meal_kcal: f64) -> f64 {
    let deviation = (total_kcal - ideal_meal_kcal).abs() / ideal_meal_kcal;
    1.0 - deviation.min(1.0)
}

/// Calculate protein score (0-1)
/// No bonus past 100% of the per-meal target
#[inline]
fn calculate_protein_score(total_protein_g: f64, protein_target_g: f64) -> f64 {
    if protein_target_g > 0.0 {
        (total_protein_g / protein_target_g).min(1.0)
    } else {
        0.0
    }
}

/// Calculate cost score (0-1)
#[inline]
fn calculate_cost_score(total_cost_ksh: f64, daily_budget_ksh: f64) -> Result<f64, RecommendError> {
    if daily_budget_ksh > 0.0 {
        return Ok(1.0 - (total_cost_ksh / daily_budget_ksh).min(1.0));
    }

    Err(RecommendError::InvalidProfile(format!(
        "daily_budget_ksh must be positive, got {}",
        daily_budget_ksh
    )))
}

/// Calculate variety score (0-1)
#[inline]
fn calculate_variety_score(item_count: usize) -> f64 {
    (item_count as f64 / VARIETY_CEILING).min(1.0)
}
