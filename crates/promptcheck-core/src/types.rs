//! Core types for promptcheck

use serde::{Deserialize, Serialize};

/// Category of potential bias flagged by the scanner.
///
/// Declaration order is the order categories are evaluated during a scan,
/// which is an observable part of the scan contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiasCategory {
    Gender,
    Age,
    Disability,
    Assumption,
}

impl BiasCategory {
    /// String tag for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::Age => "age",
            Self::Disability => "disability",
            Self::Assumption => "assumption",
        }
    }
}

impl std::fmt::Display for BiasCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete risk classification derived from scan findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// String tag for this risk level
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bias risk recorded on an archived prompt.
///
/// Superset of [`RiskLevel`]: archived units predating evaluation, or whose
/// header carries an unrecognized value, are `Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiasRisk {
    Low,
    Medium,
    High,
    #[default]
    Unknown,
}

impl BiasRisk {
    /// String tag for this risk value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a header value. Unrecognized values map to `Unknown` rather
    /// than failing the surrounding unit.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for BiasRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RiskLevel> for BiasRisk {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Low => Self::Low,
            RiskLevel::Medium => Self::Medium,
            RiskLevel::High => Self::High,
        }
    }
}

/// One rule match against scanned text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Category of the rule that fired
    pub category: BiasCategory,

    /// The exact substring that matched
    pub matched_text: String,

    /// Human-readable rationale tied to the rule
    pub description: String,

    /// Zero-based character offset of the match start in the original text
    pub position: usize,
}

impl Finding {
    /// Create a new finding
    pub fn new(
        category: BiasCategory,
        matched_text: impl Into<String>,
        description: impl Into<String>,
        position: usize,
    ) -> Self {
        Self {
            category,
            matched_text: matched_text.into(),
            description: description.into(),
            position,
        }
    }
}
