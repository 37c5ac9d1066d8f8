// src/analyzer.rs
use crate::models::{
    Requirement, RequirementKind, StrengthLevel, StrengthReport, MIN_PASSWORD_LENGTH,
};
use crate::patterns;

fn requirement_met(kind: RequirementKind, password: &str) -> bool {
    match kind {
        RequirementKind::Length => password.chars().count() >= MIN_PASSWORD_LENGTH,
        RequirementKind::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
        RequirementKind::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
        RequirementKind::Numbers => password.chars().any(|c| c.is_ascii_digit()),
        RequirementKind::Special => password.chars().any(patterns::is_symbol),
    }
}

/// Runs every requirement check against the password, in reporting order.
pub fn check_requirements(password: &str) -> Vec<Requirement> {
    RequirementKind::ALL
        .iter()
        .map(|&kind| Requirement::new(kind, requirement_met(kind, password)))
        .collect()
}

/// Evaluates the strength of a password.
///
/// Accepts any input, including the empty string, and never fails. The
/// result depends only on `password`.
pub fn evaluate(password: &str) -> StrengthReport {
    let requirements = check_requirements(password);
    let met = requirements.iter().filter(|r| r.met).count() as u8;

    let weak_patterns = patterns::detect(password);
    let weak_pattern_detected = weak_patterns.any();

    let score = if weak_pattern_detected {
        met.saturating_sub(1)
    } else {
        met
    };
    let level = StrengthLevel::from_score(score);

    log::trace!(
        "evaluated password: score={} level={} weak_pattern={}",
        score,
        level,
        weak_pattern_detected
    );

    StrengthReport {
        score,
        level,
        requirements,
        weak_pattern_detected,
        weak_patterns,
    }
}

/// Suggestions for improving the evaluated password.
pub fn feedback(report: &StrengthReport) -> Vec<String> {
    let mut feedback = Vec::new();

    for requirement in report.requirements.iter().filter(|r| !r.met) {
        let tip = match requirement.kind {
            RequirementKind::Length => "Use at least 8 characters",
            RequirementKind::Uppercase => "Add uppercase letters (A-Z)",
            RequirementKind::Lowercase => "Add lowercase letters (a-z)",
            RequirementKind::Numbers => "Add numbers (0-9)",
            RequirementKind::Special => "Add special characters like !@#$%",
        };
        feedback.push(tip.to_string());
    }

    let weak = &report.weak_patterns;
    if weak.common_password {
        feedback.push("Avoid common passwords like \"123456\" or \"password\"".to_string());
    }
    if weak.repeated_characters {
        feedback.push("Avoid repeating the same character (e.g., 'aaa')".to_string());
    }
    if weak.sequential_characters {
        feedback.push("Avoid sequences of letters or numbers (e.g., 'abc', '123')".to_string());
    }

    if feedback.is_empty() {
        feedback.push("Excellent password strength!".to_string());
    }

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_empty_password() {
        init_logger();
        let report = evaluate("");
        assert_eq!(report.score, 0);
        assert_eq!(report.level, StrengthLevel::VeryWeak);
        assert!(report.requirements.iter().all(|r| !r.met));
        assert!(!report.weak_pattern_detected);
    }

    #[test]
    fn test_strong_password() {
        init_logger();
        let report = evaluate("Tr0ub4dor&3");
        assert!(report.all_requirements_met());
        assert!(!report.weak_pattern_detected);
        assert_eq!(report.score, 5);
        assert_eq!(report.level, StrengthLevel::VeryStrong);
    }

    #[test]
    fn test_requirements_are_reported_in_fixed_order() {
        let report = evaluate("whatever");
        let names: Vec<&str> = report.requirements.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["length", "uppercase", "lowercase", "numbers", "special"]);
    }

    #[test]
    fn test_individual_requirements() {
        let report = evaluate("Ab1!");
        assert!(!report.is_met(RequirementKind::Length));
        assert!(report.is_met(RequirementKind::Uppercase));
        assert!(report.is_met(RequirementKind::Lowercase));
        assert!(report.is_met(RequirementKind::Numbers));
        assert!(report.is_met(RequirementKind::Special));
        assert_eq!(report.score, 4);
        assert_eq!(report.level, StrengthLevel::Strong);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        let report = evaluate("ééééééé");
        assert!(!report.is_met(RequirementKind::Length));
        let report = evaluate("éxéxéxéx");
        assert!(report.is_met(RequirementKind::Length));
    }

    #[test]
    fn test_non_ascii_satisfies_no_character_class() {
        let report = evaluate("ÄÖÜßñç€¿");
        assert!(report.is_met(RequirementKind::Length));
        assert!(!report.is_met(RequirementKind::Uppercase));
        assert!(!report.is_met(RequirementKind::Lowercase));
        assert!(!report.is_met(RequirementKind::Numbers));
        assert!(!report.is_met(RequirementKind::Special));
        assert_eq!(report.score, 1);
    }

    #[test]
    fn test_dictionary_penalty() {
        let report = evaluate("MyPassword123");
        assert!(report.weak_pattern_detected);
        assert!(report.weak_patterns.common_password);
        assert_eq!(report.met_count(), 4);
        assert_eq!(report.score, 3);
        assert_eq!(report.level, StrengthLevel::Medium);

        assert!(evaluate("xpasswordx").weak_pattern_detected);
    }

    #[test]
    fn test_repetition_penalty() {
        let report = evaluate("aaa1B2c3");
        assert!(report.weak_pattern_detected);
        assert!(report.weak_patterns.repeated_characters);
        assert_eq!(report.score, 3);
    }

    #[test]
    fn test_sequence_penalty() {
        let report = evaluate("abc12345");
        assert!(report.weak_pattern_detected);
        assert!(report.weak_patterns.sequential_characters);
        assert_eq!(report.met_count(), 3);
        assert_eq!(report.score, 2);
        assert_eq!(report.level, StrengthLevel::Weak);
    }

    #[test]
    fn test_penalty_never_goes_below_zero() {
        // no requirement met, still a weak pattern
        let report = evaluate("€€€");
        assert!(report.weak_pattern_detected);
        assert_eq!(report.met_count(), 0);
        assert_eq!(report.score, 0);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        assert_eq!(evaluate("S0me-Pa55phrase"), evaluate("S0me-Pa55phrase"));
    }

    #[test]
    fn test_feedback_for_weak_password() {
        let report = evaluate("abc");
        let tips = feedback(&report);
        assert!(tips.iter().any(|t| t.contains("8 characters")));
        assert!(tips.iter().any(|t| t.contains("uppercase")));
        assert!(tips.iter().any(|t| t.contains("sequences")));
        assert!(!tips.iter().any(|t| t.contains("lowercase")));
    }

    #[test]
    fn test_feedback_for_strong_password() {
        let tips = feedback(&evaluate("Tr0ub4dor&3"));
        assert_eq!(tips, vec!["Excellent password strength!".to_string()]);
    }
}
