use indexmap::IndexMap;
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;

use crate::core::{
    filters::{filter_candidates, matches_slot},
    reasoning::{build_reasoning, ReasoningStatement},
    scoring::{calculate_slot_score, choose_uniform, OutfitScorer},
    slots::derive_slots,
};
use crate::error::MatchError;
use crate::models::{RequestContext, ScoringPolicy, SlotRequirement, WardrobeItem};

/// Result of the matching process
///
/// `selections` and `scores` share the same keys, in slot order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub selections: IndexMap<String, WardrobeItem>,
    pub scores: IndexMap<String, f64>,
    pub reasoning: Vec<ReasoningStatement>,
}

impl MatchResult {
    /// Number of filled slots
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Reasoning rendered to display strings, order preserved
    pub fn rendered_reasoning(&self) -> Vec<String> {
        self.reasoning.iter().map(ToString::to_string).collect()
    }
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Slot derivation from the request context
/// 2. Per-slot inventory filtering
/// 3. Selection (uniform random, or the configured scorer)
/// 4. Scoring and reasoning
///
/// The matcher holds no per-request state. Randomness comes from the `rng`
/// passed to each call, so one matcher can serve any number of threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    policy: ScoringPolicy,
    scorer: Option<Arc<dyn OutfitScorer>>,
}

impl Matcher {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self {
            policy,
            scorer: None,
        }
    }

    pub fn with_default_policy() -> Self {
        Self::new(ScoringPolicy::default())
    }

    /// Consult `scorer` for selection and scoring
    pub fn with_scorer(mut self, scorer: Arc<dyn OutfitScorer>) -> Self {
        self.scorer = Some(scorer);
        self
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Recommend an outfit from `wardrobe` for `context`
    ///
    /// # Arguments
    /// * `wardrobe` - The user's materialized wardrobe snapshot
    /// * `context` - Mood, occasion, weather and optional seed garment
    /// * `rng` - Random source for tie-breaking; seed it for reproducible picks
    ///
    /// # Errors
    /// * `InvalidContext` - unsupported or inconsistent seed, before any filtering
    /// * `NoMatchFound` - a mandatory slot had no candidates, or no slot was filled
    pub fn recommend<R: Rng>(
        &self,
        wardrobe: &[WardrobeItem],
        context: &RequestContext,
        rng: &mut R,
    ) -> Result<MatchResult, MatchError> {
        let slots = derive_slots(context)?;

        let mut selections = IndexMap::with_capacity(slots.len());
        let mut scores = IndexMap::with_capacity(slots.len());

        for slot in &slots {
            let candidates = filter_candidates(wardrobe, slot);

            let Some(chosen) = self.select(&candidates, slot, context, rng) else {
                if slot.optional {
                    tracing::debug!("No candidates for optional slot {}, skipping", slot.name);
                    continue;
                }
                tracing::debug!(
                    "No candidates for mandatory slot {} ({})",
                    slot.name,
                    slot.category
                );
                return Err(MatchError::NoMatchFound {
                    category: slot.category,
                });
            };

            let score = calculate_slot_score(
                chosen,
                slot,
                context,
                &self.policy,
                self.scorer.as_deref(),
            );

            tracing::debug!(
                "Slot {} filled with {} from {} candidates (score {:.2})",
                slot.name,
                chosen.id,
                candidates.len(),
                score
            );

            selections.insert(slot.name.to_string(), chosen.clone());
            scores.insert(slot.name.to_string(), score);
        }

        if selections.is_empty() {
            // Every slot is optional in generate mode
            if let Some(first) = slots.first() {
                return Err(MatchError::NoMatchFound {
                    category: first.category,
                });
            }
        }

        let reasoning = build_reasoning(selections.len(), context);

        Ok(MatchResult {
            selections,
            scores,
            reasoning,
        })
    }

    /// Choose one candidate, falling back to uniform choice when the scorer
    /// declines or returns an item that does not fit the slot
    ///
    /// `None` only when `candidates` is empty.
    fn select<'a, R: Rng>(
        &self,
        candidates: &[&'a WardrobeItem],
        slot: &SlotRequirement,
        context: &RequestContext,
        rng: &mut R,
    ) -> Option<&'a WardrobeItem> {
        if let Some(scorer) = &self.scorer {
            match scorer.select(candidates, slot, context, &mut *rng) {
                Some(item) if matches_slot(item, slot) => return Some(item),
                Some(item) => tracing::warn!(
                    "Scorer picked {} ({}) for slot {}, using uniform choice",
                    item.id,
                    item.category,
                    slot.name
                ),
                None => {}
            }
        }

        choose_uniform(candidates, rng)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_policy()
    }
}
