//! Metadata header codec
//!
//! Grammar of one archived unit, serialize and parse kept as inverses:
//!
//! ```text
//! unit      = title BLANK entry+ BLANK "## Evaluation" BLANK entry+ separator content
//! title     = "# Prompt Archive"
//! entry     = "**" key ":**" [ SP value ]
//! sublist   = ("- " item){1,3}        ; binds to the preceding empty-valued entry
//! separator = BLANK "---" BLANK
//! content   = raw bytes to end of unit, verbatim
//! ```
//!
//! Keys are normalized on parse (lowercased, spaces to underscores), so
//! `**Quality Score:**` is looked up as `quality_score`. Lines that are not
//! entries or sublist items (the title, section headings, blanks) carry no
//! data and are skipped. The quality score is rendered `X.X/10`; a present
//! but unparseable score is an error, which enumeration treats as a corrupt
//! unit.

use promptcheck_core::{BiasRisk, Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Maximum strengths/issues items serialized per unit
pub const MAX_LIST_ITEMS: usize = 3;

const TITLE: &str = "# Prompt Archive";
const EVALUATION_HEADING: &str = "## Evaluation";
const SEPARATOR: &str = "\n\n---\n\n";

/// Metadata header of one archived unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    /// Creation time, ISO-8601 to whole seconds (fixed width, so the string
    /// itself is the sort key)
    pub timestamp: String,

    /// Downstream consumer this prompt targets
    pub target_system: String,

    /// Free-text description of intent
    pub goal: String,

    /// Optional free-text context
    pub context: Option<String>,

    /// Quality score in [0, 10]
    pub quality_score: f64,

    /// Bias risk recorded at save time
    pub bias_risk: BiasRisk,

    /// Up to [`MAX_LIST_ITEMS`] strengths from evaluation
    pub strengths: Vec<String>,

    /// Up to [`MAX_LIST_ITEMS`] issues from evaluation
    pub issues: Vec<String>,
}

/// Serialize a header and raw content into one unit
pub fn encode(header: &Header, content: &str) -> String {
    let mut lines = vec![
        TITLE.to_string(),
        String::new(),
        format!("**Generated:** {}", header.timestamp),
        format!("**Target:** {}", header.target_system),
        format!("**Goal:** {}", header.goal),
    ];

    if let Some(ref context) = header.context {
        lines.push(format!("**Context:** {}", context));
    }

    lines.push(String::new());
    lines.push(EVALUATION_HEADING.to_string());
    lines.push(String::new());
    lines.push(format!("**Quality Score:** {:.1}/10", header.quality_score));
    lines.push(format!("**Bias Risk:** {}", header.bias_risk));

    for (key, items) in [("Strengths", &header.strengths), ("Issues", &header.issues)] {
        if items.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(format!("**{}:**", key));
        for item in items.iter().take(MAX_LIST_ITEMS) {
            lines.push(format!("- {}", item));
        }
    }

    format!("{}{}{}", lines.join("\n"), SEPARATOR, content)
}

/// Parse one unit back into its header and raw content.
///
/// Fails on a missing separator or an unparseable quality score; absent
/// optional fields fall back to their defaults (empty strings, score 0.0,
/// risk `unknown`).
pub fn parse(document: &str) -> Result<(Header, String)> {
    let (head, content) = document
        .split_once(SEPARATOR)
        .ok_or_else(|| Error::archive("missing metadata separator"))?;

    let mut values: HashMap<String, String> = HashMap::new();
    let mut lists: HashMap<String, Vec<String>> = HashMap::new();
    let mut open_list: Option<String> = None;

    for line in head.lines() {
        if let Some((key, value)) = line
            .strip_prefix("**")
            .and_then(|rest| rest.split_once(":**"))
        {
            let key = normalize_key(key);
            let value = value.trim().to_string();
            open_list = value.is_empty().then(|| key.clone());
            values.insert(key, value);
        } else if let Some(item) = line.strip_prefix("- ") {
            if let Some(ref key) = open_list {
                lists.entry(key.clone()).or_default().push(item.to_string());
            }
        } else {
            open_list = None;
        }
    }

    let quality_score = match values.get("quality_score") {
        Some(raw) => parse_score(raw)?,
        None => 0.0,
    };

    let header = Header {
        timestamp: values.remove("generated").unwrap_or_default(),
        target_system: values.remove("target").unwrap_or_default(),
        goal: values.remove("goal").unwrap_or_default(),
        context: values.remove("context").filter(|v| !v.is_empty()),
        quality_score,
        bias_risk: values
            .get("bias_risk")
            .map(|v| BiasRisk::parse(v))
            .unwrap_or_default(),
        strengths: lists.remove("strengths").unwrap_or_default(),
        issues: lists.remove("issues").unwrap_or_default(),
    };

    Ok((header, content.to_string()))
}

fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase().replace(' ', "_")
}

/// Parse a `X.X/10` score value back to a float
fn parse_score(raw: &str) -> Result<f64> {
    raw.strip_suffix("/10")
        .unwrap_or(raw)
        .trim()
        .parse::<f64>()
        .map_err(|e| Error::archive(format!("invalid quality score {:?}: {}", raw, e)))
}
