use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use validator::{Validate, ValidationError};

use crate::models::domain::{Category, Mood, Occasion, RequestContext, WardrobeItem, Weather};

/// Request to complete an outfit around a seed garment
///
/// POST /api/v1/outfits/complete
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_seed_item"))]
pub struct CompleteOutfitRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    pub mood: Mood,
    pub occasion: Occasion,
    pub weather: Weather,
    #[serde(alias = "category", rename = "seedCategory", default)]
    pub seed_category: Option<Category>,
    #[serde(rename = "seedItem", default)]
    pub seed_item: Option<WardrobeItem>,
    #[validate(custom(function = "validate_wardrobe"))]
    #[serde(rename = "wardrobeItems", default)]
    pub wardrobe_items: Vec<WardrobeItem>,
    /// Fixes the random source for reproducible picks
    #[serde(default)]
    pub seed: Option<u64>,
}

impl CompleteOutfitRequest {
    pub fn context(&self) -> RequestContext {
        RequestContext {
            mood: self.mood,
            occasion: self.occasion,
            weather: self.weather,
            seed_category: self.seed_category,
            seed_item: self.seed_item.clone(),
        }
    }

    pub fn has_seed(&self) -> bool {
        self.seed_category.is_some() || self.seed_item.is_some()
    }
}

/// Request to generate a full outfit from the wardrobe
///
/// POST /api/v1/outfits/generate
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateOutfitRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    pub mood: Mood,
    pub occasion: Occasion,
    #[serde(default = "default_weather")]
    pub weather: Weather,
    #[validate(custom(function = "validate_wardrobe"))]
    #[serde(rename = "wardrobeItems", default)]
    pub wardrobe_items: Vec<WardrobeItem>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GenerateOutfitRequest {
    pub fn context(&self) -> RequestContext {
        RequestContext::new(self.mood, self.occasion, self.weather)
    }
}

fn default_weather() -> Weather {
    Weather::Moderate
}

/// Wardrobe snapshots must carry unique ids and non-empty names
#[allow(clippy::ptr_arg)]
fn validate_wardrobe(items: &Vec<WardrobeItem>) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        validate_item_name(item)?;
        if !seen.insert(item.id.as_str()) {
            let mut err = ValidationError::new("duplicate_item_id");
            err.message = Some(format!("wardrobe item id {} appears more than once", item.id).into());
            return Err(err);
        }
    }

    Ok(())
}

fn validate_seed_item(req: &CompleteOutfitRequest) -> Result<(), ValidationError> {
    match &req.seed_item {
        Some(item) => validate_item_name(item),
        None => Ok(()),
    }
}

fn validate_item_name(item: &WardrobeItem) -> Result<(), ValidationError> {
    if item.name.trim().is_empty() {
        let mut err = ValidationError::new("empty_item_name");
        err.message = Some(format!("wardrobe item {} has an empty name", item.id).into());
        return Err(err);
    }
    Ok(())
}
