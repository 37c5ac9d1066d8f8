// src/presentation.rs
//! Display tokens for strength levels, kept apart from `StrengthReport`.
use serde::Serialize;

use crate::models::{StrengthLevel, MAX_SCORE};

/// Colour of a meter segment that the score has not reached.
pub const EMPTY_SEGMENT_COLOR: &str = "#E5E7EB";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthStyle {
    pub emoji: &'static str,
    pub color: &'static str,
}

impl StrengthStyle {
    pub fn for_level(level: StrengthLevel) -> Self {
        let (emoji, color) = match level {
            StrengthLevel::VeryWeak => ("👎", "#FF6B6B"),
            StrengthLevel::Weak => ("✋", "#FFA726"),
            StrengthLevel::Medium => ("👌", "#FFEE58"),
            StrengthLevel::Strong => ("👍", "#66BB6A"),
            StrengthLevel::VeryStrong => ("🤘", "#2E7D32"),
        };
        Self { emoji, color }
    }
}

/// Colours for the five meter segments at the given score.
pub fn segment_colors(score: u8) -> Vec<&'static str> {
    let filled = StrengthStyle::for_level(StrengthLevel::from_score(score)).color;
    (0..MAX_SCORE)
        .map(|index| if index < score { filled } else { EMPTY_SEGMENT_COLOR })
        .collect()
}
