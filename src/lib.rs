//! Outfit Match - rule-based outfit recommendation engine for ClosetCoach
//!
//! This library selects complementary garments from a user's wardrobe for a
//! given mood, occasion and weather. It runs a small pipeline: derive the
//! slots to fill, filter the wardrobe per slot, pick and score one item per
//! slot, and explain the result with ordered reasoning statements.

#[macro_use]
mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{
    derive_slots, filter_candidates, MatchResult, Matcher, OutfitScorer, ReasoningStatement,
};
pub use error::MatchError;
pub use models::{Category, Color, Mood, Occasion, RequestContext, WardrobeItem, Weather};
