// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod reasoning;
pub mod scoring;
pub mod slots;

pub use filters::{filter_candidates, matches_slot};
pub use matcher::{MatchResult, Matcher};
pub use reasoning::{build_reasoning, ReasoningStatement};
pub use scoring::{calculate_slot_score, choose_uniform, MoodPaletteScorer, OutfitScorer};
pub use slots::{complement_of, derive_slots, resolve_seed_category};
