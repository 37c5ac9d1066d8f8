// src/lib.rs
//! Rule-based password strength evaluation and password generation.
//!
//! ```
//! use strength_meter::{evaluate, generate, StrengthLevel};
//!
//! let report = evaluate("Tr0ub4dor&3");
//! assert_eq!(report.level, StrengthLevel::VeryStrong);
//!
//! let password = generate(12, true).unwrap();
//! assert!(evaluate(&password).all_requirements_met());
//! ```

pub mod analyzer;
pub mod core;
pub mod generators;
pub mod models;
pub mod patterns;
pub mod presentation;

pub use crate::analyzer::{check_requirements, evaluate, feedback};
pub use crate::core::{Config, ConfigError};
pub use crate::generators::{
    generate, generate_with_rng, minimum_length, GeneratorError, PasswordGenerator,
};
pub use crate::models::{
    PasswordGenerationOptions, Requirement, RequirementKind, StrengthLevel, StrengthReport,
    WeakPatterns,
};
pub use crate::presentation::StrengthStyle;
