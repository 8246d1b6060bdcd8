use crate::core::error::RecommendError;
use crate::models::FoodItem;

/// Immutable in-memory food catalog
///
/// Built once from its source and shared read-only across requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FoodCatalog {
    items: Vec<FoodItem>,
}

impl FoodCatalog {
    /// Build a catalog from parsed items, normalizing tags and rejecting
    /// negative or non-finite numbers
    pub fn new(items: Vec<FoodItem>) -> Result<Self, RecommendError> {
        let items = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| validate_item(index, item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { items })
    }

    /// Parse a catalog from a JSON array of food records
    pub fn from_json_str(json: &str) -> Result<Self, RecommendError> {
        let items: Vec<FoodItem> = serde_json::from_str(json).map_err(|e| {
            RecommendError::CatalogUnavailable(format!("invalid food database format: {}", e))
        })?;
        Self::new(items)
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn validate_item(index: usize, mut item: FoodItem) -> Result<FoodItem, RecommendError> {
    let fields = [
        ("kcal", item.kcal),
        ("protein_g", item.protein_g),
        ("carbs_g", item.carbs_g),
        ("price_ksh", item.price_ksh),
    ];

    for (field, value) in fields {
        if !value.is_finite() || value < 0.0 {
            return Err(RecommendError::CatalogUnavailable(format!(
                "food #{} ({}) has invalid {}: {}",
                index, item.name, field, value
            )));
        }
    }

    item.tags = item.tags.into_iter().map(|tag| tag.to_lowercase()).collect();
    Ok(item)
}
