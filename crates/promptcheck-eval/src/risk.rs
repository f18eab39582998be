//! Risk classification rules

use promptcheck_core::{BiasCategory, Finding, RiskLevel};
use serde::{Deserialize, Serialize};

/// Categories that force high risk on a single finding
pub const CRITICAL_CATEGORIES: &[BiasCategory] =
    &[BiasCategory::Gender, BiasCategory::Disability];

/// Total finding count at or above which risk is high
pub const HIGH_RISK_FINDING_COUNT: usize = 5;

/// Total finding count at or above which risk is at least medium
pub const MEDIUM_RISK_FINDING_COUNT: usize = 3;

const RECOMMENDATIONS: [&str; 3] = [
    "Review flagged patterns for unintended bias",
    "Consider more inclusive language alternatives",
    "Verify assumptions are appropriate for audience",
];

/// Risk level plus remediation advice for a set of findings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Overall risk classification
    pub risk_level: RiskLevel,

    /// Fixed advisory messages, present iff findings were non-empty
    pub recommendations: Vec<String>,
}

/// Classify findings into a risk level with recommendations.
///
/// Escalation rules: any finding in a critical category, or a total count of
/// [`HIGH_RISK_FINDING_COUNT`] or more, is high risk; a count of
/// [`MEDIUM_RISK_FINDING_COUNT`] or more is medium; anything else is low.
/// Total and deterministic.
pub fn classify(findings: &[Finding]) -> RiskAssessment {
    if findings.is_empty() {
        return RiskAssessment {
            risk_level: RiskLevel::Low,
            recommendations: Vec::new(),
        };
    }

    let has_critical = findings
        .iter()
        .any(|f| CRITICAL_CATEGORIES.contains(&f.category));

    let risk_level = if has_critical || findings.len() >= HIGH_RISK_FINDING_COUNT {
        RiskLevel::High
    } else if findings.len() >= MEDIUM_RISK_FINDING_COUNT {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    RiskAssessment {
        risk_level,
        recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_critical(n: usize) -> Vec<Finding> {
        (0..n)
            .map(|i| Finding::new(BiasCategory::Age, "old", "Age-related descriptor", i))
            .collect()
    }

    #[test]
    fn test_empty_findings_are_low_risk() {
        let assessment = classify(&[]);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
        assert!(assessment.recommendations.is_empty());
    }

    #[test]
    fn test_two_non_critical_is_low() {
        assert_eq!(classify(&non_critical(2)).risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_exactly_three_non_critical_is_medium() {
        assert_eq!(classify(&non_critical(3)).risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_four_non_critical_is_medium() {
        assert_eq!(classify(&non_critical(4)).risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_exactly_five_non_critical_is_high() {
        assert_eq!(classify(&non_critical(5)).risk_level, RiskLevel::High);
    }

    #[test]
    fn test_single_critical_finding_is_high() {
        let findings = vec![Finding::new(
            BiasCategory::Gender,
            "his",
            "Male pronoun without inclusive alternative",
            0,
        )];
        assert_eq!(classify(&findings).risk_level, RiskLevel::High);

        let findings = vec![Finding::new(
            BiasCategory::Disability,
            "lame",
            "Ableist language",
            0,
        )];
        assert_eq!(classify(&findings).risk_level, RiskLevel::High);
    }

    #[test]
    fn test_recommendations_are_the_fixed_triple() {
        let assessment = classify(&non_critical(1));
        assert_eq!(
            assessment.recommendations,
            vec![
                "Review flagged patterns for unintended bias",
                "Consider more inclusive language alternatives",
                "Verify assumptions are appropriate for audience",
            ]
        );
    }
}
