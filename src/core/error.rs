use thiserror::Error;

/// Terminal failures of a recommendation computation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Food catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("No foods match the profile's allergies, dislikes and dietary preference")]
    NoEligibleFoods,

    #[error("No meal combination fits the per-meal budget of {budget_window_ksh:.2} KSh")]
    NoAffordableOptions { budget_window_ksh: f64 },
}

impl RecommendError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            RecommendError::InvalidProfile(_) => "invalid_profile",
            RecommendError::CatalogUnavailable(_) => "catalog_unavailable",
            RecommendError::NoEligibleFoods => "no_eligible_foods",
            RecommendError::NoAffordableOptions { .. } => "no_affordable_options",
        }
    }

    /// HTTP status the response layer reports
    pub fn status_code(&self) -> u16 {
        match self {
            RecommendError::InvalidProfile(_) => 400,
            RecommendError::CatalogUnavailable(_) => 500,
            RecommendError::NoEligibleFoods | RecommendError::NoAffordableOptions { .. } => 404,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            RecommendError::InvalidProfile("age".to_string()),
            RecommendError::CatalogUnavailable("missing".to_string()),
            RecommendError::NoEligibleFoods,
            RecommendError::NoAffordableOptions { budget_window_ksh: 60.0 },
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), 4);
    }

    #[test]
    fn test_affordable_message_mentions_window() {
        let err = RecommendError::NoAffordableOptions { budget_window_ksh: 60.0 };
        assert!(err.to_string().contains("60.00 KSh"));
        assert_eq!(err.status_code(), 404);
    }
}
