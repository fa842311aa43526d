//! Violation record models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Categories of traffic violations the analyzer reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViolationType {
    /// Proceeded through an intersection on a red light
    RedLight,
    /// U-turn in a restricted area
    IllegalUturn,
    /// Driving in the wrong lane or against traffic
    WrongLane,
    /// Exceeded the posted speed limit
    Speeding,
}

impl ViolationType {
    /// All violation types, in report order.
    pub const ALL: &'static [ViolationType] = &[
        ViolationType::RedLight,
        ViolationType::IllegalUturn,
        ViolationType::WrongLane,
        ViolationType::Speeding,
    ];

    /// Wire/filename form of the type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationType::RedLight => "red_light",
            ViolationType::IllegalUturn => "illegal_uturn",
            ViolationType::WrongLane => "wrong_lane",
            ViolationType::Speeding => "speeding",
        }
    }

    /// Human-readable label shown on result cards.
    pub fn label(&self) -> &'static str {
        match self {
            ViolationType::RedLight => "Red Light",
            ViolationType::IllegalUturn => "Illegal U-Turn",
            ViolationType::WrongLane => "Wrong Lane",
            ViolationType::Speeding => "Speeding",
        }
    }

    /// Fixed description sentence attached to every record of this type.
    pub fn description(&self) -> &'static str {
        match self {
            ViolationType::RedLight => {
                "Vehicle proceeded through intersection while traffic light was red"
            }
            ViolationType::IllegalUturn => "Vehicle performed illegal U-turn in restricted area",
            ViolationType::WrongLane => {
                "Vehicle driving in wrong lane or against traffic direction"
            }
            ViolationType::Speeding => {
                "Vehicle exceeded posted speed limit based on movement analysis"
            }
        }
    }
}

impl fmt::Display for ViolationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ViolationType {
    type Err = ViolationTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "red_light" => Ok(ViolationType::RedLight),
            "illegal_uturn" => Ok(ViolationType::IllegalUturn),
            "wrong_lane" => Ok(ViolationType::WrongLane),
            "speeding" => Ok(ViolationType::Speeding),
            _ => Err(ViolationTypeParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown violation type: {0}")]
pub struct ViolationTypeParseError(String);

/// Unique identifier for a violation record within an analysis run.
///
/// Encodes the run's wall-clock millisecond timestamp plus the record's
/// sequence index, so ids from the same run are distinct and roughly
/// chronological across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct ViolationId(pub String);

impl ViolationId {
    /// Build an id from the run timestamp (unix milliseconds) and the
    /// record's index within the run.
    pub fn from_run(run_millis: i64, index: usize) -> Self {
        Self(format!("violation_{}_{}", run_millis, index))
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

impl fmt::Display for ViolationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One fabricated detection result.
///
/// Serialized camelCase to match the result-card payload consumed by the UI.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Unique record id
    pub id: ViolationId,

    /// Violation category
    #[serde(rename = "type")]
    pub violation_type: ViolationType,

    /// Offset into the source video, in seconds
    #[serde(rename = "timestamp")]
    pub timestamp_secs: f64,

    /// Fabricated license plate
    pub license_plate: String,

    /// Detection confidence in [0, 1]
    pub confidence: f64,

    /// Inline placeholder frame (data URL)
    pub frame_url: String,

    /// Fixed description for the violation type
    pub description: String,
}

impl Violation {
    /// Whether the record counts as high confidence on the summary card.
    pub fn is_high_confidence(&self) -> bool {
        self.confidence > 0.8
    }

    /// Download filename for the record's frame capture.
    pub fn frame_filename(&self) -> String {
        format!("{}_{}s.jpg", self.id, self.timestamp_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(confidence: f64) -> Violation {
        Violation {
            id: ViolationId::from_run(1_700_000_000_000, 0),
            violation_type: ViolationType::Speeding,
            timestamp_secs: 12.5,
            license_plate: "ABC123".to_string(),
            confidence,
            frame_url: "data:image/jpeg;base64,".to_string(),
            description: ViolationType::Speeding.description().to_string(),
        }
    }

    #[test]
    fn test_violation_type_parse() {
        assert_eq!(
            "red_light".parse::<ViolationType>().unwrap(),
            ViolationType::RedLight
        );
        assert_eq!(
            "SPEEDING".parse::<ViolationType>().unwrap(),
            ViolationType::Speeding
        );
        assert!("jaywalking".parse::<ViolationType>().is_err());
    }

    #[test]
    fn test_violation_type_roundtrip() {
        for vt in ViolationType::ALL {
            assert_eq!(vt.as_str().parse::<ViolationType>().unwrap(), *vt);
        }
    }

    #[test]
    fn test_violation_id_format() {
        let id = ViolationId::from_run(1_700_000_000_000, 3);
        assert_eq!(id.as_str(), "violation_1700000000000_3");
    }

    #[test]
    fn test_violation_serialization_camel_case() {
        let json = serde_json::to_string(&sample(0.9)).unwrap();
        assert!(json.contains("\"type\":\"speeding\""));
        assert!(json.contains("\"licensePlate\":\"ABC123\""));
        assert!(json.contains("\"frameUrl\""));
        assert!(json.contains("\"timestamp\":12.5"));
    }

    #[test]
    fn test_high_confidence_threshold() {
        assert!(sample(0.81).is_high_confidence());
        assert!(!sample(0.8).is_high_confidence());
    }

    #[test]
    fn test_frame_filename() {
        let v = sample(0.9);
        assert_eq!(v.frame_filename(), "violation_1700000000000_0_12.5s.jpg");
    }
}
