use crate::models::{DietaryPreference, FoodItem, Profile};

/// Carbohydrate ceiling (grams per item) for the low-carb preference
pub const LOW_CARB_MAX_CARBS_G: f64 = 20.0;

/// Tags a vegan profile never eats
const ANIMAL_PRODUCT_TAGS: [&str; 3] = ["meat", "dairy", "eggs"];

/// Why an item was dropped from the eligible set
#[derive(Debug, Clone, PartialEq)]
pub enum ExclusionReason {
    Allergy(String),
    Dislike(String),
    Diet(DietaryPreference),
}

/// Find the first rule that excludes an item
///
/// Rules are checked in precedence order: allergies against tags,
/// dislikes against the item name, then the dietary preference.
pub fn exclusion_reason(
    profile: &Profile,
    item: &FoodItem,
    low_carb_max_carbs_g: f64,
) -> Option<ExclusionReason> {
    // Allergies match whole tags, case-insensitively
    if let Some(allergy) = profile
        .allergies
        .iter()
        .find(|allergy| has_tag_ignore_case(item, allergy))
    {
        return Some(ExclusionReason::Allergy(allergy.clone()));
    }

    // Dislikes match anywhere in the name
    let name = item.name.to_lowercase();
    if let Some(dislike) = profile
        .dislikes
        .iter()
        .find(|dislike| name.contains(&dislike.to_lowercase()))
    {
        return Some(ExclusionReason::Dislike(dislike.clone()));
    }

    if violates_diet(profile.dietary_preference, item, low_carb_max_carbs_g) {
        return Some(ExclusionReason::Diet(profile.dietary_preference));
    }

    None
}

/// Check if an item passes every exclusion rule for a profile
#[inline]
pub fn is_eligible(profile: &Profile, item: &FoodItem, low_carb_max_carbs_g: f64) -> bool {
    exclusion_reason(profile, item, low_carb_max_carbs_g).is_none()
}

/// Filter the catalog down to items the profile can eat, preserving catalog order
pub fn filter_eligible<'a>(profile: &Profile, catalog: &'a [FoodItem]) -> Vec<&'a FoodItem> {
    filter_eligible_with(profile, catalog, LOW_CARB_MAX_CARBS_G)
}

/// Same as [`filter_eligible`] with an explicit low-carb ceiling
pub fn filter_eligible_with<'a>(
    profile: &Profile,
    catalog: &'a [FoodItem],
    low_carb_max_carbs_g: f64,
) -> Vec<&'a FoodItem> {
    let eligible: Vec<&FoodItem> = catalog
        .iter()
        .filter(|item| match exclusion_reason(profile, item, low_carb_max_carbs_g) {
            Some(reason) => {
                tracing::trace!(item = %item.name, ?reason, "Excluded food item");
                false
            }
            None => true,
        })
        .collect();

    tracing::debug!(
        eligible = eligible.len(),
        total = catalog.len(),
        diet = ?profile.dietary_preference,
        "Filtered food catalog"
    );

    eligible
}

#[inline]
fn violates_diet(preference: DietaryPreference, item: &FoodItem, low_carb_max_carbs_g: f64) -> bool {
    match preference {
        DietaryPreference::None => false,
        DietaryPreference::Vegetarian => has_tag_ignore_case(item, "meat"),
        DietaryPreference::Vegan => ANIMAL_PRODUCT_TAGS
            .iter()
            .any(|tag| has_tag_ignore_case(item, tag)),
        DietaryPreference::LowCarb => item.carbs_g > low_carb_max_carbs_g,
    }
}

#[inline]
fn has_tag_ignore_case(item: &FoodItem, tag: &str) -> bool {
    item.has_tag(tag) || item.tags.iter().any(|t| t.to_lowercase() == tag.to_lowercase())
}
