//! File-backed prompt archive

use crate::codec::{self, Header};
use crate::slug::slugify;
use promptcheck_core::{BiasRisk, Clock, Result, SystemClock};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Extension of archived units
pub const ARCHIVE_EXTENSION: &str = "md";

const SLUG_MAX_CHARS: usize = 40;

/// Prompt content plus evaluation metadata to archive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptEntry {
    /// The raw prompt text
    pub content: String,

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

    /// Strengths from evaluation (first three are serialized)
    pub strengths: Vec<String>,

    /// Issues from evaluation (first three are serialized)
    pub issues: Vec<String>,
}

impl PromptEntry {
    /// Create an entry with unset evaluation metadata
    pub fn new(
        content: impl Into<String>,
        target_system: impl Into<String>,
        goal: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            target_system: target_system.into(),
            goal: goal.into(),
            context: None,
            quality_score: 0.0,
            bias_risk: BiasRisk::Unknown,
            strengths: Vec::new(),
            issues: Vec::new(),
        }
    }

    /// Set context
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Set quality score
    pub fn with_quality_score(mut self, score: f64) -> Self {
        self.quality_score = score;
        self
    }

    /// Set bias risk
    pub fn with_bias_risk(mut self, risk: BiasRisk) -> Self {
        self.bias_risk = risk;
        self
    }

    /// Set strengths
    pub fn with_strengths(mut self, strengths: Vec<String>) -> Self {
        self.strengths = strengths;
        self
    }

    /// Set issues
    pub fn with_issues(mut self, issues: Vec<String>) -> Self {
        self.issues = issues;
        self
    }
}

/// One persisted prompt with its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchivedRecord {
    /// Location of the persisted unit
    pub path: PathBuf,

    /// Creation time, ISO-8601 to whole seconds
    pub timestamp: String,

    /// Downstream consumer this prompt targets
    pub target_system: String,

    /// Free-text description of intent
    pub goal: String,

    /// Quality score in [0, 10]
    pub quality_score: f64,

    /// Bias risk recorded at save time
    pub bias_risk: BiasRisk,
}

/// Result of enumerating the archive
#[derive(Debug, Clone)]
pub struct ArchiveListing {
    /// Parsed records, newest first
    pub records: Vec<ArchivedRecord>,

    /// Units that could not be read or parsed and were left out
    pub skipped: usize,
}

/// Archive of prompts with evaluation metadata.
///
/// One directory of immutable text units. The store performs no locking:
/// concurrent writers racing on an identical timestamp + target + goal
/// combination collide on the filename and the last write wins; enumeration
/// concurrent with a write may see a partial unit and skip it. Callers
/// needing strict consistency serialize access externally.
pub struct PromptArchive {
    archive_dir: PathBuf,
    clock: Arc<dyn Clock>,
}

impl PromptArchive {
    /// Open an archive backed by the system clock, creating the directory
    /// if absent
    pub fn new(archive_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::with_clock(archive_dir, Arc::new(SystemClock))
    }

    /// Open an archive with an injected clock
    pub fn with_clock(archive_dir: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Result<Self> {
        let archive_dir = archive_dir.into();
        fs::create_dir_all(&archive_dir)?;
        info!("prompt archive ready at {:?}", archive_dir);

        Ok(Self { archive_dir, clock })
    }

    /// The directory units are persisted under
    pub fn dir(&self) -> &Path {
        &self.archive_dir
    }

    /// Persist an entry as one unit.
    ///
    /// The filename is `{YYYYMMDD_HHMMSS}_{target_system}_{slug}.md`; a
    /// colliding name is overwritten (last write wins). The write is not
    /// atomic: an interrupted write leaves a truncated unit, which the next
    /// [`list`](Self::list) skips and counts.
    pub fn save(&self, entry: &PromptEntry) -> Result<ArchivedRecord> {
        let now = self.clock.now();
        let timestamp = now.format("%Y-%m-%dT%H:%M:%S").to_string();

        let filename = format!(
            "{}_{}_{}.{}",
            now.format("%Y%m%d_%H%M%S"),
            entry.target_system,
            slugify(&entry.goal, SLUG_MAX_CHARS),
            ARCHIVE_EXTENSION,
        );
        let path = self.archive_dir.join(filename);

        let header = Header {
            timestamp: timestamp.clone(),
            target_system: entry.target_system.clone(),
            goal: entry.goal.clone(),
            context: entry.context.clone(),
            quality_score: entry.quality_score,
            bias_risk: entry.bias_risk,
            strengths: entry.strengths.clone(),
            issues: entry.issues.clone(),
        };

        fs::write(&path, codec::encode(&header, &entry.content))?;
        debug!("archived prompt at {:?}", path);

        Ok(ArchivedRecord {
            path,
            timestamp,
            target_system: entry.target_system.clone(),
            goal: entry.goal.clone(),
            quality_score: entry.quality_score,
            bias_risk: entry.bias_risk,
        })
    }

    /// Enumerate archived records, newest first.
    ///
    /// Units that cannot be read or parsed are skipped and counted in
    /// [`ArchiveListing::skipped`]; a corrupt or foreign file never aborts
    /// enumeration. With a filter, records whose target does not match are
    /// excluded (and not counted as skipped).
    pub fn list(&self, filter_target_system: Option<&str>) -> Result<ArchiveListing> {
        let mut records = Vec::new();
        let mut skipped = 0;

        for dir_entry in fs::read_dir(&self.archive_dir)? {
            let path = dir_entry?.path();
            if !path
                .extension()
                .is_some_and(|ext| ext == ARCHIVE_EXTENSION)
            {
                continue;
            }

            let document = match fs::read_to_string(&path) {
                Ok(document) => document,
                Err(e) => {
                    debug!("skipping unreadable archive unit {:?}: {}", path, e);
                    skipped += 1;
                    continue;
                }
            };

            let (header, _content) = match codec::parse(&document) {
                Ok(parsed) => parsed,
                Err(e) => {
                    debug!("skipping unparseable archive unit {:?}: {}", path, e);
                    skipped += 1;
                    continue;
                }
            };

            if let Some(filter) = filter_target_system {
                if header.target_system != filter {
                    continue;
                }
            }

            records.push(ArchivedRecord {
                path,
                timestamp: header.timestamp,
                target_system: header.target_system,
                goal: header.goal,
                quality_score: header.quality_score,
                bias_risk: header.bias_risk,
            });
        }

        // Fixed-width ISO timestamps, so string order is time order.
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        Ok(ArchiveListing { records, skipped })
    }
}
