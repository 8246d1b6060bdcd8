use crate::core::{
    catalog::FoodCatalog,
    combos::generate_combos_up_to,
    energy::estimate_daily_calories,
    error::RecommendError,
    filters::filter_eligible_with,
    scoring::score_combo,
};
use crate::models::{
    Combo, MealRecommendation, Profile, RecommendationResult, RecommendationSettings, ScoredCombo,
    ScoringWeights,
};

/// Main recommendation orchestrator
///
/// # Pipeline Stages
/// 1. Daily calorie target estimation
/// 2. Allergy, dislike and dietary filtering
/// 3. Combination enumeration
/// 4. Scoring, budget cut and ranking
#[derive(Debug, Clone)]
pub struct Recommender {
    weights: ScoringWeights,
    settings: RecommendationSettings,
}

impl Recommender {
    pub fn new(weights: ScoringWeights, settings: RecommendationSettings) -> Self {
        Self { weights, settings }
    }

    pub fn with_defaults() -> Self {
        Self {
            weights: ScoringWeights::default(),
            settings: RecommendationSettings::default(),
        }
    }

    /// Score, budget-filter and rank candidate combos
    ///
    /// Every combo is scored, then combos costing more than the per-meal
    /// budget window are dropped. The rest are sorted by score (descending,
    /// stable on enumeration order) and truncated to `max_results`.
    pub fn rank<'a>(
        &self,
        combos: Vec<Combo<'a>>,
        profile: &Profile,
        daily_calorie_target: f64,
    ) -> Result<Vec<ScoredCombo<'a>>, RecommendError> {
        if combos.is_empty() {
            return Err(RecommendError::NoEligibleFoods);
        }

        let total_combos = combos.len();
        let budget_window_ksh = self.settings.budget_window(profile.daily_budget_ksh);

        let scored = combos
            .into_iter()
            .map(|combo| {
                let (score, cost) =
                    score_combo(&combo, profile, daily_calorie_target, &self.weights)?;
                Ok(ScoredCombo { score, cost, combo })
            })
            .collect::<Result<Vec<_>, RecommendError>>()?;

        let mut scored: Vec<ScoredCombo<'a>> = scored
            .into_iter()
            .filter(|scored| scored.cost <= budget_window_ksh)
            .collect();

        tracing::debug!(
            total = total_combos,
            affordable = scored.len(),
            budget_window_ksh,
            "Scored affordable combinations"
        );

        if scored.is_empty() {
            return Err(RecommendError::NoAffordableOptions { budget_window_ksh });
        }

        // sort_by is stable, ties keep enumeration order
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        scored.truncate(self.settings.max_results);

        Ok(scored)
    }

    /// Run the full pipeline for a profile against a catalog
    pub fn recommend(
        &self,
        profile: &Profile,
        catalog: &FoodCatalog,
    ) -> Result<RecommendationResult, RecommendError> {
        validate_budget(profile)?;

        let daily_calorie_target = estimate_daily_calories(profile)?;

        let eligible =
            filter_eligible_with(profile, catalog.items(), self.settings.low_carb_max_carbs_g);
        if eligible.is_empty() {
            tracing::warn!(catalog_size = catalog.len(), "No eligible foods for profile");
            return Err(RecommendError::NoEligibleFoods);
        }

        let combos = generate_combos_up_to(&eligible, self.settings.max_combo_size);
        let top = self.rank(combos, profile, daily_calorie_target)?;

        let recommendations: Vec<MealRecommendation> =
            top.iter().map(MealRecommendation::from).collect();

        tracing::info!(
            daily_calorie_target,
            eligible = eligible.len(),
            returned = recommendations.len(),
            "Built meal recommendations"
        );

        Ok(RecommendationResult {
            daily_calorie_target,
            recommendations,
        })
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn validate_budget(profile: &Profile) -> Result<(), RecommendError> {
    if profile.daily_budget_ksh.is_finite() && profile.daily_budget_ksh > 0.0 {
        Ok(())
    } else {
        Err(RecommendError::InvalidProfile(format!(
            "daily_budget_ksh must be positive, got {}",
            profile.daily_budget_ksh
        )))
    }
}
