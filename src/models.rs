// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest score a password can reach (one point per requirement).
pub const MAX_SCORE: u8 = 5;

/// Minimum number of characters for the length requirement.
pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementKind {
    Length,
    Uppercase,
    Lowercase,
    Numbers,
    Special,
}

impl RequirementKind {
    /// Every requirement, in the order they are reported.
    pub const ALL: [RequirementKind; 5] = [
        RequirementKind::Length,
        RequirementKind::Uppercase,
        RequirementKind::Lowercase,
        RequirementKind::Numbers,
        RequirementKind::Special,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RequirementKind::Length => "length",
            RequirementKind::Uppercase => "uppercase",
            RequirementKind::Lowercase => "lowercase",
            RequirementKind::Numbers => "numbers",
            RequirementKind::Special => "special",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RequirementKind::Length => "At least 8 characters",
            RequirementKind::Uppercase => "One uppercase letter (A-Z)",
            RequirementKind::Lowercase => "One lowercase letter (a-z)",
            RequirementKind::Numbers => "One number (0-9)",
            RequirementKind::Special => "One special character (!@#$%...)",
        }
    }
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One password property and whether the evaluated password satisfies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub kind: RequirementKind,
    pub name: String,
    pub description: String,
    pub met: bool,
}

impl Requirement {
    pub fn new(kind: RequirementKind, met: bool) -> Self {
        Self {
            kind,
            name: kind.name().to_string(),
            description: kind.description().to_string(),
            met,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLevel {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Medium,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=1 => StrengthLevel::VeryWeak,
            2 => StrengthLevel::Weak,
            3 => StrengthLevel::Medium,
            4 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Medium => "Medium",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Which weak-pattern rules matched a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeakPatterns {
    pub common_password: bool,
    pub repeated_characters: bool,
    pub sequential_characters: bool,
}

impl WeakPatterns {
    pub fn any(&self) -> bool {
        self.common_password || self.repeated_characters || self.sequential_characters
    }
}

/// Result of evaluating a single password.
///
/// `score` is the number of met requirements, lowered by one (never below
/// zero) when a weak pattern was found. `level` is derived from `score` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthReport {
    pub score: u8,
    pub level: StrengthLevel,
    pub requirements: Vec<Requirement>,
    pub weak_pattern_detected: bool,
    pub weak_patterns: WeakPatterns,
}

impl StrengthReport {
    pub fn met_count(&self) -> usize {
        self.requirements.iter().filter(|r| r.met).count()
    }

    pub fn requirement(&self, kind: RequirementKind) -> Option<&Requirement> {
        self.requirements.iter().find(|r| r.kind == kind)
    }

    pub fn is_met(&self, kind: RequirementKind) -> bool {
        self.requirement(kind).map(|r| r.met).unwrap_or(false)
    }

    pub fn all_requirements_met(&self) -> bool {
        self.requirements.iter().all(|r| r.met)
    }

    /// Score as a rounded percentage of the maximum, as shown on the meter.
    pub fn percentage(&self) -> u8 {
        ((self.score as f64 / MAX_SCORE as f64) * 100.0).round() as u8
    }
}

// Password generation options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_symbols: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_symbols: true,
        }
    }
}
