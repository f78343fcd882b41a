use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Mood, Occasion, RequestContext, Weather};

/// One justification for a recommendation
///
/// Statements are kept as data and rendered to text with `Display` at the
/// presentation boundary. Their position in `MatchResult::reasoning` is
/// meaningful: coverage, occasion, weather, mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReasoningStatement {
    Coverage { matched: usize },
    Occasion { occasion: Occasion },
    Weather { weather: Weather },
    Mood { mood: Mood },
}

impl fmt::Display for ReasoningStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReasoningStatement::Coverage { matched } => {
                write!(f, "Found {} matching item(s) from your wardrobe", matched)
            }
            ReasoningStatement::Occasion { occasion } => {
                write!(f, "Styled for {} occasion", occasion)
            }
            ReasoningStatement::Weather { weather } => {
                write!(f, "Optimized for {} weather", weather)
            }
            ReasoningStatement::Mood { mood } => write!(f, "Matches your {} mood", mood),
        }
    }
}

/// Build the ordered reasoning for `matched` selected items
pub fn build_reasoning(matched: usize, context: &RequestContext) -> Vec<ReasoningStatement> {
    vec![
        ReasoningStatement::Coverage { matched },
        ReasoningStatement::Occasion {
            occasion: context.occasion,
        },
        ReasoningStatement::Weather {
            weather: context.weather,
        },
        ReasoningStatement::Mood { mood: context.mood },
    ]
}
