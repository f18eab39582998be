//! Bias pattern scanner

use promptcheck_core::{BiasCategory, Error, Finding, Result, RiskLevel};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::risk;

/// One entry in the fixed rule table
struct RuleSpec {
    category: BiasCategory,
    pattern: &'static str,
    /// Anchored pattern tested against the text immediately following a
    /// match; a hit suppresses the finding. Stands in for negative
    /// lookahead, which the regex engine does not support.
    exception: Option<&'static str>,
    description: &'static str,
}

/// Fixed rule table. Table order is evaluation order: categories as
/// declared, patterns as declared within each category.
const RULES: &[RuleSpec] = &[
    RuleSpec {
        category: BiasCategory::Gender,
        pattern: r"(?i)\b(he|him|his)\b",
        exception: Some(r"(?i)^ or she"),
        description: "Male pronoun without inclusive alternative",
    },
    RuleSpec {
        category: BiasCategory::Gender,
        pattern: r"(?i)\b(she|her|hers)\b",
        exception: Some(r"(?i)^ or he"),
        description: "Female pronoun without inclusive alternative",
    },
    RuleSpec {
        category: BiasCategory::Gender,
        pattern: r"(?i)\b(mankind|manpower|man-hours)\b",
        exception: None,
        description: "Gendered language (use humanity, workforce, hours)",
    },
    RuleSpec {
        category: BiasCategory::Age,
        pattern: r"(?i)\b(young|old|elderly|aging)\b",
        exception: None,
        description: "Age-related descriptor",
    },
    RuleSpec {
        category: BiasCategory::Age,
        pattern: r"(?i)\b(millennial|boomer|gen-?[xz])\b",
        exception: None,
        description: "Generational stereotype",
    },
    RuleSpec {
        category: BiasCategory::Disability,
        pattern: r"(?i)\b(blind to|deaf to|crippled by|lame)\b",
        exception: None,
        description: "Ableist language",
    },
    RuleSpec {
        category: BiasCategory::Assumption,
        pattern: r"(?i)\b(obviously|clearly|simply|just|merely)\b",
        exception: None,
        description: "Assumption about difficulty",
    },
    RuleSpec {
        category: BiasCategory::Assumption,
        pattern: r"(?i)\b(everyone knows|we all)\b",
        exception: None,
        description: "Assumption about shared knowledge",
    },
];

struct CompiledRule {
    category: BiasCategory,
    pattern: Regex,
    exception: Option<Regex>,
    description: &'static str,
}

/// Result of one scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// True iff the finding list is non-empty
    pub has_issues: bool,

    /// Risk classification derived from the findings
    pub risk_level: RiskLevel,

    /// Findings in rule-table order: category, then pattern within
    /// category, then match position within pattern. Not position-sorted.
    pub findings: Vec<Finding>,

    /// Fixed advisory messages, present iff findings is non-empty
    pub recommendations: Vec<String>,
}

/// Rule-table bias scanner.
///
/// Patterns are compiled once at construction and reused across calls;
/// `scan` itself is pure and shares no mutable state.
pub struct BiasScanner {
    rules: Vec<CompiledRule>,
}

impl BiasScanner {
    /// Create a scanner with the fixed rule table compiled
    pub fn new() -> Result<Self> {
        let mut rules = Vec::with_capacity(RULES.len());

        for spec in RULES {
            let pattern = Regex::new(spec.pattern).map_err(|e| {
                Error::scanner(format!("failed to compile pattern {:?}: {}", spec.pattern, e))
            })?;
            let exception = spec
                .exception
                .map(Regex::new)
                .transpose()
                .map_err(|e| Error::scanner(format!("failed to compile exception: {}", e)))?;

            rules.push(CompiledRule {
                category: spec.category,
                pattern,
                exception,
                description: spec.description,
            });
        }

        debug!("compiled {} bias rules", rules.len());
        Ok(Self { rules })
    }

    /// Scan content against the rule table.
    ///
    /// Every non-overlapping match of every rule is reported as a separate
    /// finding; a substring may satisfy several rules and contribute several
    /// findings. Matching is case-insensitive.
    pub fn scan(&self, content: &str) -> ScanResult {
        let mut findings = Vec::new();

        for rule in &self.rules {
            for m in rule.pattern.find_iter(content) {
                if let Some(ref exception) = rule.exception {
                    if exception.is_match(&content[m.end()..]) {
                        continue;
                    }
                }

                findings.push(Finding {
                    category: rule.category,
                    matched_text: m.as_str().to_string(),
                    description: rule.description.to_string(),
                    position: content[..m.start()].chars().count(),
                });
            }
        }

        let assessment = risk::classify(&findings);

        ScanResult {
            has_issues: !findings.is_empty(),
            risk_level: assessment.risk_level,
            findings,
            recommendations: assessment.recommendations,
        }
    }
}

impl Default for BiasScanner {
    fn default() -> Self {
        Self::new().expect("Failed to compile bias rule table")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_gender_bias() {
        let scanner = BiasScanner::new().unwrap();

        let result = scanner.scan("The developer should update his code regularly.");

        assert!(result.has_issues);
        let finding = result
            .findings
            .iter()
            .find(|f| f.category == BiasCategory::Gender)
            .expect("gender finding");
        assert_eq!(finding.matched_text.to_lowercase(), "his");
        // A single gender finding is critical on its own.
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_clean_content() {
        let scanner = BiasScanner::new().unwrap();

        let result = scanner.scan("This system analyzes data and provides insights for users.");

        assert!(!result.has_issues);
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert!(result.findings.is_empty());
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let scanner = BiasScanner::new().unwrap();

        let result = scanner.scan("");

        assert!(!result.has_issues);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_detect_assumption_bias() {
        let scanner = BiasScanner::new().unwrap();

        let result = scanner.scan("Obviously, everyone knows how to use this feature.");

        assert!(result.has_issues);
        assert!(result
            .findings
            .iter()
            .any(|f| f.category == BiasCategory::Assumption));
    }

    #[test]
    fn test_inclusive_pair_suppression() {
        let scanner = BiasScanner::new().unwrap();

        let result = scanner.scan("he or she");

        // The leading "he" is suppressed by its inclusive continuation; the
        // trailing "she" still matches the female-pronoun rule.
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].matched_text, "she");
    }

    #[test]
    fn test_case_insensitive_matching() {
        let scanner = BiasScanner::new().unwrap();

        let result = scanner.scan("HIS plan. His plan. his plan.");

        assert_eq!(result.findings.len(), 3);
        assert_eq!(result.findings[0].matched_text, "HIS");
        assert_eq!(result.findings[2].matched_text, "his");
    }

    #[test]
    fn test_finding_order_is_rule_table_order() {
        let scanner = BiasScanner::new().unwrap();

        let result = scanner.scan("Everyone knows he is old.");

        // Category order (gender, age, assumption) wins over position order.
        let summary: Vec<(BiasCategory, &str, usize)> = result
            .findings
            .iter()
            .map(|f| (f.category, f.matched_text.as_str(), f.position))
            .collect();

        assert_eq!(
            summary,
            vec![
                (BiasCategory::Gender, "he", 15),
                (BiasCategory::Age, "old", 21),
                (BiasCategory::Assumption, "Everyone knows", 0),
            ]
        );
    }

    #[test]
    fn test_repeated_pattern_yields_one_finding_per_match() {
        let scanner = BiasScanner::new().unwrap();

        let result = scanner.scan("old ideas, old code, old habits");

        let age_findings: Vec<_> = result
            .findings
            .iter()
            .filter(|f| f.category == BiasCategory::Age)
            .collect();
        assert_eq!(age_findings.len(), 3);
    }

    #[test]
    fn test_position_is_character_offset() {
        let scanner = BiasScanner::new().unwrap();

        // Two multi-byte characters precede the match.
        let result = scanner.scan("éé his");

        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].position, 3);
    }

    #[test]
    fn test_recommendations_present_iff_findings() {
        let scanner = BiasScanner::new().unwrap();

        let flagged = scanner.scan("Obviously old.");
        assert_eq!(flagged.recommendations.len(), 3);

        let clean = scanner.scan("A plain sentence.");
        assert!(clean.recommendations.is_empty());
    }
}
