use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{ActivityLevel, DietaryPreference, Gender, Goal, Profile};

/// Request body for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(range(min = 1, max = 120))]
    pub age: u8,
    pub gender: Gender,
    #[validate(range(exclusive_min = 0.0, max = 500.0))]
    pub weight_kg: f64,
    #[validate(range(exclusive_min = 0.0, max = 300.0))]
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    #[validate(range(exclusive_min = 0.0))]
    pub daily_budget_ksh: f64,
    #[serde(default)]
    pub dietary_preference: DietaryPreference,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub dislikes: Vec<String>,
}

impl RecommendRequest {
    /// Build the engine profile, normalizing free-text lists to lower-case sets
    pub fn into_profile(self) -> Profile {
        Profile {
            age: self.age,
            gender: self.gender,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            activity_level: self.activity_level,
            goal: self.goal,
            dietary_preference: self.dietary_preference,
            daily_budget_ksh: self.daily_budget_ksh,
            allergies: normalize_terms(self.allergies),
            dislikes: normalize_terms(self.dislikes),
        }
    }
}

fn normalize_terms(terms: Vec<String>) -> std::collections::BTreeSet<String> {
    terms
        .into_iter()
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request_json() -> serde_json::Value {
        serde_json::json!({
            "age": 30,
            "gender": "female",
            "weight_kg": 65.0,
            "height_cm": 165.0,
            "activity_level": "moderate",
            "goal": "maintain",
            "daily_budget_ksh": 300.0,
            "allergies": [" Dairy ", ""],
            "dislikes": ["Omena"]
        })
    }

    #[test]
    fn test_valid_request() {
        let req: RecommendRequest = serde_json::from_value(request_json()).unwrap();
        assert!(req.validate().is_ok());
        assert_eq!(req.dietary_preference, DietaryPreference::None);
    }

    #[test]
    fn test_into_profile_normalizes_terms() {
        let req: RecommendRequest = serde_json::from_value(request_json()).unwrap();
        let profile = req.into_profile();
        assert_eq!(profile.allergies.len(), 1);
        assert!(profile.allergies.contains("dairy"));
        assert!(profile.dislikes.contains("omena"));
    }

    #[test]
    fn test_rejects_zero_weight() {
        let mut json = request_json();
        json["weight_kg"] = serde_json::json!(0.0);
        let req: RecommendRequest = serde_json::from_value(json).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_budget() {
        let mut json = request_json();
        json["daily_budget_ksh"] = serde_json::json!(-5.0);
        let req: RecommendRequest = serde_json::from_value(json).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_budget() {
        let mut json = request_json();
        json["daily_budget_ksh"] = serde_json::json!(0.0);
        let req: RecommendRequest = serde_json::from_value(json).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rejects_unknown_goal() {
        let mut json = request_json();
        json["goal"] = serde_json::json!("bulk");
        assert!(serde_json::from_value::<RecommendRequest>(json).is_err());
    }
}
