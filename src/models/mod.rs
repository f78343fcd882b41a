// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Category, Color, Mood, Occasion, RequestContext, ScoringPolicy, SlotRequirement, SlotRole,
    WardrobeItem, Weather, BOTTOM_SLOT, LAYER_SLOT, TOP_SLOT,
};
pub use requests::{CompleteOutfitRequest, GenerateOutfitRequest};
pub use responses::{ErrorResponse, HealthResponse, OutfitResponse};
