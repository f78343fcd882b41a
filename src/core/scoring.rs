use rand::{seq::SliceRandom, Rng, RngCore};
use std::fmt::Debug;

use crate::models::{Color, Mood, RequestContext, ScoringPolicy, SlotRequirement, WardrobeItem};

/// Pluggable scorer consulted by the matcher
///
/// Both hooks are optional. Returning `None` falls back to the built-in
/// policy: uniform random choice and the fixed per-role score constants.
pub trait OutfitScorer: Debug + Send + Sync {
    /// Confidence in `[0, 1]` that `candidate` fits `slot` for this context
    fn score(
        &self,
        _candidate: &WardrobeItem,
        _slot: &SlotRequirement,
        _context: &RequestContext,
    ) -> Option<f64> {
        None
    }

    /// Pick one of `candidates` for `slot`; `candidates` may be empty
    fn select<'a>(
        &self,
        _candidates: &[&'a WardrobeItem],
        _slot: &SlotRequirement,
        _context: &RequestContext,
        _rng: &mut dyn RngCore,
    ) -> Option<&'a WardrobeItem> {
        None
    }
}

/// Uniform random choice among eligible candidates
#[inline]
pub fn choose_uniform<'a, R: Rng + ?Sized>(
    candidates: &[&'a WardrobeItem],
    rng: &mut R,
) -> Option<&'a WardrobeItem> {
    candidates.choose(rng).copied()
}

/// Clamp a score into `[0, 1]`; NaN scores count as zero
#[inline]
pub fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        0.0
    } else {
        score.clamp(0.0, 1.0)
    }
}

/// Calculate the score recorded for a filled slot
///
/// The scorer's value wins when it provides one; otherwise the policy
/// constant for the slot role is used.
pub fn calculate_slot_score(
    chosen: &WardrobeItem,
    slot: &SlotRequirement,
    context: &RequestContext,
    policy: &ScoringPolicy,
    scorer: Option<&dyn OutfitScorer>,
) -> f64 {
    match scorer.and_then(|s| s.score(chosen, slot, context)) {
        Some(raw) => {
            let score = clamp_score(raw);
            if score != raw {
                tracing::warn!(
                    "Scorer returned {} for {} in slot {}, clamped to {}",
                    raw,
                    chosen.id,
                    slot.name,
                    score
                );
            }
            score
        }
        None => policy.score_for(slot.role),
    }
}

const BRIGHT_PALETTE: &[Color] = &[Color::White, Color::Yellow, Color::Blue];
const CALM_PALETTE: &[Color] = &[Color::Beige, Color::Gray];

/// Colours that suit a mood
///
/// Moods share one of two palettes: calm for relaxed and elegant, bright
/// for everything else.
pub fn mood_palette(mood: Mood) -> &'static [Color] {
    match mood {
        Mood::Relaxed | Mood::Elegant => CALM_PALETTE,
        Mood::Casual | Mood::Confident | Mood::Energetic | Mood::Minimal => BRIGHT_PALETTE,
    }
}

/// Palette fit of an item for a mood (0-1)
#[inline]
pub fn palette_score(item: &WardrobeItem, mood: Mood) -> f64 {
    match item.color {
        Some(color) if mood_palette(mood).contains(&color) => 1.0,
        Some(_) => 0.25,
        None => 0.5,
    }
}

/// Scorer preferring garments whose colour suits the requested mood
///
/// Selection is uniform among the candidates sharing the best palette score,
/// so it stays random within the best colour tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoodPaletteScorer;

impl OutfitScorer for MoodPaletteScorer {
    fn score(
        &self,
        candidate: &WardrobeItem,
        _slot: &SlotRequirement,
        context: &RequestContext,
    ) -> Option<f64> {
        Some(palette_score(candidate, context.mood))
    }

    fn select<'a>(
        &self,
        candidates: &[&'a WardrobeItem],
        _slot: &SlotRequirement,
        context: &RequestContext,
        rng: &mut dyn RngCore,
    ) -> Option<&'a WardrobeItem> {
        let best = candidates
            .iter()
            .map(|item| palette_score(item, context.mood))
            .fold(f64::NEG_INFINITY, f64::max);

        let top_tier: Vec<&'a WardrobeItem> = candidates
            .iter()
            .copied()
            .filter(|item| palette_score(item, context.mood) >= best)
            .collect();

        choose_uniform(&top_tier, rng)
    }
}
