//! Quality judge seam
//!
//! The orchestration layer scores prompt content against its goal before
//! archiving. [`QualityJudge`] is the seam that scoring plugs into;
//! [`StaticJudge`] is the deterministic placeholder implementation.

use promptcheck_core::Result;
use serde::{Deserialize, Serialize};

/// Score at or above which content passes the quality gate
pub const DEFAULT_MIN_SCORE: f64 = 7.0;

/// Evaluation dimensions for prompt content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityDimension {
    Relevance,
    Clarity,
    Effectiveness,
    Accuracy,
}

impl QualityDimension {
    /// All dimensions, in assessment order
    pub const ALL: [QualityDimension; 4] = [
        Self::Relevance,
        Self::Clarity,
        Self::Effectiveness,
        Self::Accuracy,
    ];

    /// String tag for this dimension
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Clarity => "clarity",
            Self::Effectiveness => "effectiveness",
            Self::Accuracy => "accuracy",
        }
    }
}

impl std::fmt::Display for QualityDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quality evaluation results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    /// Mean of the dimension scores, 0-10
    pub overall_score: f64,

    /// Per-dimension scores, 0-10
    pub dimension_scores: Vec<(QualityDimension, f64)>,

    /// What the content does well
    pub strengths: Vec<String>,

    /// Problems worth fixing before shipping
    pub issues: Vec<String>,

    /// Non-blocking improvement ideas
    pub suggestions: Vec<String>,
}

impl Evaluation {
    /// Quality gate check against [`DEFAULT_MIN_SCORE`]
    pub fn passed(&self) -> bool {
        self.overall_score >= DEFAULT_MIN_SCORE
    }
}

/// Scores content quality against a stated goal
pub trait QualityJudge: Send + Sync {
    /// Evaluate content against its intended goal
    fn evaluate(&self, content: &str, goal: &str) -> Result<Evaluation>;

    /// Get the judge name
    fn name(&self) -> &str;
}

/// Build the evaluation prompt a model-backed judge would submit.
///
/// Kept public so future implementations score with the same rubric the
/// placeholder documents.
pub fn evaluation_prompt(content: &str, goal: &str, dimensions: &[QualityDimension]) -> String {
    let criteria = dimensions
        .iter()
        .map(|dim| format!("- {}", dim))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Evaluate this content for quality (0-10 scale):\n\n\
         **Goal**: {goal}\n\n\
         **Content**:\n{content}\n\n\
         **Assess**:\n{criteria}\n\n\
         Return: scores, strengths, issues, suggestions."
    )
}

/// Deterministic placeholder judge.
///
/// Returns fixed scores so downstream plumbing can be exercised without a
/// model-serving endpoint.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticJudge;

impl StaticJudge {
    /// Create a new placeholder judge
    pub fn new() -> Self {
        Self
    }
}

impl QualityJudge for StaticJudge {
    fn evaluate(&self, _content: &str, _goal: &str) -> Result<Evaluation> {
        let dimension_scores: Vec<(QualityDimension, f64)> = QualityDimension::ALL
            .iter()
            .map(|dim| (*dim, 8.0))
            .collect();

        let overall_score = dimension_scores.iter().map(|(_, s)| s).sum::<f64>()
            / dimension_scores.len() as f64;

        Ok(Evaluation {
            overall_score,
            dimension_scores,
            strengths: vec!["Clear structure".to_string(), "Meets goal".to_string()],
            issues: Vec::new(),
            suggestions: vec!["Consider edge cases".to_string()],
        })
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_judge_scores() {
        let judge = StaticJudge::new();

        let evaluation = judge.evaluate("Some content", "Some goal").unwrap();

        assert_eq!(evaluation.overall_score, 8.0);
        assert_eq!(evaluation.dimension_scores.len(), 4);
        assert!(evaluation
            .dimension_scores
            .iter()
            .all(|(_, score)| *score == 8.0));
        assert!(evaluation.issues.is_empty());
    }

    #[test]
    fn test_quality_gate() {
        let judge = StaticJudge::new();
        let evaluation = judge.evaluate("x", "y").unwrap();
        assert!(evaluation.passed());

        let failing = Evaluation {
            overall_score: 6.9,
            dimension_scores: Vec::new(),
            strengths: Vec::new(),
            issues: Vec::new(),
            suggestions: Vec::new(),
        };
        assert!(!failing.passed());
    }

    #[test]
    fn test_evaluation_prompt_embeds_inputs() {
        let prompt = evaluation_prompt(
            "You are a helpful assistant.",
            "Summarize support tickets",
            &QualityDimension::ALL,
        );

        assert!(prompt.contains("**Goal**: Summarize support tickets"));
        assert!(prompt.contains("You are a helpful assistant."));
        assert!(prompt.contains("- relevance"));
        assert!(prompt.contains("- accuracy"));
    }

    #[test]
    fn test_dimension_tags() {
        let json = serde_json::to_string(&QualityDimension::Effectiveness).unwrap();
        assert_eq!(json, r#""effectiveness""#);
    }
}
