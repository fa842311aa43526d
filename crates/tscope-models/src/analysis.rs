//! Analysis run identifiers and summaries.

use std::collections::HashMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::violation::{Violation, ViolationType};

/// Unique identifier for a single analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct AnalysisId(pub String);

impl AnalysisId {
    /// Generate a new random analysis ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AnalysisId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AnalysisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Aggregated counts shown on the analysis summary card.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViolationStats {
    /// Total violations in the run
    pub total: u32,

    /// Records with confidence above 0.8
    pub high_confidence: u32,

    /// Count per violation type
    pub by_type: HashMap<ViolationType, u32>,
}

impl ViolationStats {
    /// Aggregate a run's violation list.
    pub fn from_violations(violations: &[Violation]) -> Self {
        let mut stats = Self {
            total: violations.len() as u32,
            ..Self::default()
        };

        for violation in violations {
            if violation.is_high_confidence() {
                stats.high_confidence += 1;
            }
            *stats.by_type.entry(violation.violation_type).or_insert(0) += 1;
        }

        stats
    }

    /// Count for a single violation type.
    pub fn count(&self, violation_type: ViolationType) -> u32 {
        self.by_type.get(&violation_type).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::violation::ViolationId;

    fn violation(violation_type: ViolationType, confidence: f64, index: usize) -> Violation {
        Violation {
            id: ViolationId::from_run(1_700_000_000_000, index),
            violation_type,
            timestamp_secs: index as f64,
            license_plate: "AB1234".to_string(),
            confidence,
            frame_url: String::new(),
            description: violation_type.description().to_string(),
        }
    }

    #[test]
    fn test_analysis_id_unique() {
        assert_ne!(AnalysisId::new(), AnalysisId::new());
    }

    #[test]
    fn test_stats_empty() {
        let stats = ViolationStats::from_violations(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.high_confidence, 0);
        assert!(stats.by_type.is_empty());
    }

    #[test]
    fn test_stats_counts() {
        let violations = vec![
            violation(ViolationType::RedLight, 0.95, 0),
            violation(ViolationType::RedLight, 0.7, 1),
            violation(ViolationType::Speeding, 0.85, 2),
        ];

        let stats = ViolationStats::from_violations(&violations);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.high_confidence, 2);
        assert_eq!(stats.count(ViolationType::RedLight), 2);
        assert_eq!(stats.count(ViolationType::Speeding), 1);
        assert_eq!(stats.count(ViolationType::WrongLane), 0);
    }
}
