use crate::models::{SlotRequirement, WardrobeItem};

/// Check if an item can fill a slot
#[inline]
pub fn matches_slot(item: &WardrobeItem, slot: &SlotRequirement) -> bool {
    item.category == slot.category
}

/// Select the wardrobe items eligible for a slot
///
/// Wardrobe order is preserved. An empty result means the slot stays
/// unfilled; it is not an error at this stage.
pub fn filter_candidates<'a>(
    wardrobe: &'a [WardrobeItem],
    slot: &SlotRequirement,
) -> Vec<&'a WardrobeItem> {
    wardrobe
        .iter()
        .filter(|item| matches_slot(item, slot))
        .collect()
}
