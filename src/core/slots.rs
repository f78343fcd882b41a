use crate::error::MatchError;
use crate::models::{
    Category, RequestContext, SlotRequirement, SlotRole, BOTTOM_SLOT, LAYER_SLOT, TOP_SLOT,
};

/// Category that completes an outfit anchored on `seed`
///
/// Only tops and pants pair with each other.
#[inline]
pub fn complement_of(seed: Category) -> Option<Category> {
    match seed {
        Category::Top => Some(Category::Pants),
        Category::Pants => Some(Category::Top),
        _ => None,
    }
}

/// Effective seed category of a request
///
/// An explicit `seed_category` wins; otherwise the seed item's category is
/// used. Both present and disagreeing is an invalid context.
pub fn resolve_seed_category(context: &RequestContext) -> Result<Option<Category>, MatchError> {
    match (context.seed_category, context.seed_item.as_ref()) {
        (Some(category), Some(item)) if item.category != category => {
            Err(MatchError::InvalidContext(format!(
                "seed item '{}' is a {} but the seed category is {}",
                item.name, item.category, category
            )))
        }
        (Some(category), _) => Ok(Some(category)),
        (None, Some(item)) => Ok(Some(item.category)),
        (None, None) => Ok(None),
    }
}

/// Derive the slots a request has to fill, in reasoning order
///
/// With a seed garment the mandatory complement slot comes first. Without
/// one, a full outfit is generated from optional top and bottom slots, and
/// the matcher only fails when nothing at all could be selected. An optional
/// jacket slot is appended when the weather calls for a layer.
pub fn derive_slots(context: &RequestContext) -> Result<Vec<SlotRequirement>, MatchError> {
    let mut slots = Vec::with_capacity(3);

    match resolve_seed_category(context)? {
        Some(seed) => {
            let target = complement_of(seed).ok_or_else(|| {
                MatchError::InvalidContext(format!(
                    "cannot complete an outfit around {}; upload a top or pants",
                    seed
                ))
            })?;

            slots.push(SlotRequirement {
                name: slot_name(target),
                category: target,
                role: SlotRole::Complement,
                optional: false,
            });
        }
        None => {
            slots.push(SlotRequirement {
                name: TOP_SLOT,
                category: Category::Top,
                role: SlotRole::Base,
                optional: true,
            });
            slots.push(SlotRequirement {
                name: BOTTOM_SLOT,
                category: Category::Pants,
                role: SlotRole::Base,
                optional: true,
            });
        }
    }

    if context.weather.needs_layer() {
        slots.push(SlotRequirement {
            name: LAYER_SLOT,
            category: Category::Jacket,
            role: SlotRole::Layer,
            optional: true,
        });
    }

    Ok(slots)
}

fn slot_name(category: Category) -> &'static str {
    match category {
        Category::Pants => BOTTOM_SLOT,
        Category::Jacket => LAYER_SLOT,
        _ => TOP_SLOT,
    }
}
