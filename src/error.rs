use thiserror::Error;

use crate::models::Category;

/// Errors returned by the recommendation engine
///
/// Both variants are expected outcomes of a request, not faults. The
/// presentation layer renders a targeted message per variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The seed garment cannot anchor an outfit, or the seed fields disagree
    #[error("Invalid context: {0}")]
    InvalidContext(String),

    /// A mandatory slot had no eligible candidates
    #[error("No matching {category} found in your wardrobe")]
    NoMatchFound { category: Category },
}

impl MatchError {
    /// Stable machine-readable identifier
    pub fn kind(&self) -> &'static str {
        match self {
            MatchError::InvalidContext(_) => "invalid_context",
            MatchError::NoMatchFound { .. } => "no_match_found",
        }
    }

    /// Actionable message suitable for showing to the wardrobe owner
    pub fn user_message(&self) -> String {
        match self {
            MatchError::InvalidContext(reason) => reason.clone(),
            MatchError::NoMatchFound { category } => format!(
                "No matching {} found in your wardrobe. Please add more items!",
                category
            ),
        }
    }
}

/// A string did not name any variant of a closed enumeration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match_message_names_category() {
        let err = MatchError::NoMatchFound {
            category: Category::Pants,
        };

        assert_eq!(err.kind(), "no_match_found");
        assert!(err.to_string().contains("pants"));
        assert!(err.user_message().contains("add more items"));
    }

    #[test]
    fn test_invalid_context_kind() {
        let err = MatchError::InvalidContext("bad seed".to_string());
        assert_eq!(err.kind(), "invalid_context");
        assert_eq!(err.user_message(), "bad seed");
    }
}
