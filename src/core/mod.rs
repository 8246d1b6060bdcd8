// Core algorithm exports
pub mod catalog;
pub mod combos;
pub mod energy;
pub mod error;
pub mod filters;
pub mod recommender;
pub mod scoring;

pub use catalog::FoodCatalog;
pub use combos::{combo_count, generate_combos, generate_combos_up_to};
pub use energy::{calculate_bmr, estimate_daily_calories};
pub use error::RecommendError;
pub use filters::{exclusion_reason, filter_eligible, filter_eligible_with, is_eligible, ExclusionReason};
pub use recommender::Recommender;
pub use scoring::score_combo;
