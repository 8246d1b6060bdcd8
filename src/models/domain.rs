use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Biological sex used by the BMR equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Activity tier with its fixed TDEE multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    /// Multiplier applied to BMR to get maintenance calories
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Low => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::High => 1.725,
        }
    }
}

/// Weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    /// Factor applied to maintenance calories (20% deficit / surplus)
    pub fn calorie_factor(self) -> f64 {
        match self {
            Goal::Lose => 0.8,
            Goal::Maintain => 1.0,
            Goal::Gain => 1.2,
        }
    }
}

/// Dietary preference rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryPreference {
    #[default]
    #[serde(alias = "any")]
    None,
    Vegetarian,
    Vegan,
    LowCarb,
}

/// Nutrition profile the engine recommends for.
///
/// Allergies and dislikes are stored lower-cased.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub age: u8,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    #[serde(default)]
    pub dietary_preference: DietaryPreference,
    pub daily_budget_ksh: f64,
    #[serde(default)]
    pub allergies: BTreeSet<String>,
    #[serde(default)]
    pub dislikes: BTreeSet<String>,
}

/// A single food catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub kcal: f64,
    #[serde(alias = "protein")]
    pub protein_g: f64,
    #[serde(alias = "carbs", default)]
    pub carbs_g: f64,
    #[serde(default)]
    pub price_ksh: f64,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl FoodItem {
    /// Helper to check for a tag, tags are lower-cased on load
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// Candidate meal: one or more distinct catalog items, in enumeration order
#[derive(Debug, Clone, PartialEq)]
pub struct Combo<'a> {
    pub items: Vec<&'a FoodItem>,
}

impl<'a> Combo<'a> {
    pub fn new(items: Vec<&'a FoodItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_kcal(&self) -> f64 {
        self.items.iter().map(|item| item.kcal).sum()
    }

    pub fn total_protein_g(&self) -> f64 {
        self.items.iter().map(|item| item.protein_g).sum()
    }

    pub fn total_cost_ksh(&self) -> f64 {
        self.items.iter().map(|item| item.price_ksh).sum()
    }

    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name.clone()).collect()
    }
}

/// Combo with its composite score (0-1) and total cost
#[derive(Debug, Clone)]
pub struct ScoredCombo<'a> {
    pub score: f64,
    pub cost: f64,
    pub combo: Combo<'a>,
}

/// Scoring weights
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub calorie: f64,
    pub protein: f64,
    pub cost: f64,
    pub variety: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            calorie: 0.4,
            protein: 0.3,
            cost: 0.2,
            variety: 0.1,
        }
    }
}

/// Tunable constants of the recommendation pipeline
#[derive(Debug, Clone, Copy)]
pub struct RecommendationSettings {
    pub max_results: usize,
    /// Share of the daily budget a single meal may use
    pub budget_share: f64,
    /// Floor of the per-meal budget window in KSh
    pub min_budget_window_ksh: f64,
    pub max_combo_size: usize,
    pub low_carb_max_carbs_g: f64,
}

impl RecommendationSettings {
    /// Largest combo cost a profile's budget allows for one meal
    pub fn budget_window(&self, daily_budget_ksh: f64) -> f64 {
        (daily_budget_ksh * self.budget_share).max(self.min_budget_window_ksh)
    }
}

impl Default for RecommendationSettings {
    fn default() -> Self {
        Self {
            max_results: 6,
            budget_share: 0.6,
            min_budget_window_ksh: 1.0,
            max_combo_size: 2,
            low_carb_max_carbs_g: 20.0,
        }
    }
}

/// Final engine output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub daily_calorie_target: f64,
    pub recommendations: Vec<MealRecommendation>,
}

/// One recommended meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRecommendation {
    pub meal_items: Vec<String>,
    pub kcal_total: f64,
    pub protein_g: f64,
    pub price_ksh: f64,
    pub score: f64,
}

impl From<&ScoredCombo<'_>> for MealRecommendation {
    fn from(scored: &ScoredCombo<'_>) -> Self {
        Self {
            meal_items: scored.combo.names(),
            kcal_total: scored.combo.total_kcal(),
            protein_g: scored.combo.total_protein_g(),
            price_ksh: scored.cost,
            score: (scored.score * 1000.0).round() / 1000.0,
        }
    }
}
