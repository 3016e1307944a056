//! Workout report encoding
//!
//! This module encodes computed workouts into JSON reports carrying producer
//! metadata alongside the inputs, metrics and summary line.

use crate::error::ComputeError;
use crate::summary::SummaryBuilder;
use crate::types::{ActivityRecord, ComputedMetrics, Workout};
use crate::{PRODUCER_NAME, WORKOUT_VERSION};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Report producer metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Activity identification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportActivity {
    pub tag: String,
    pub label: String,
}

/// Machine-readable report for one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutReport {
    pub report_version: String,
    pub producer: ReportProducer,
    pub computed_at_utc: String,
    pub activity: ReportActivity,
    pub inputs: ActivityRecord,
    pub metrics: ComputedMetrics,
    pub summary: String,
}

/// Report encoder
pub struct ReportEncoder {
    instance_id: String,
}

impl Default for ReportEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder {
    /// Create a new encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Encode a workout into a report
    pub fn encode(&self, workout: &Workout) -> WorkoutReport {
        let kind = workout.kind();

        WorkoutReport {
            report_version: REPORT_VERSION.to_string(),
            producer: ReportProducer {
                name: PRODUCER_NAME.to_string(),
                version: WORKOUT_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            computed_at_utc: Utc::now().to_rfc3339(),
            activity: ReportActivity {
                tag: kind.tag().to_string(),
                label: kind.label().to_string(),
            },
            inputs: *workout.record(),
            metrics: *workout.metrics(),
            summary: SummaryBuilder::build(workout).message(),
        }
    }

    /// Encode to a compact JSON string
    pub fn encode_to_json(&self, workout: &Workout) -> Result<String, ComputeError> {
        serde_json::to_string(&self.encode(workout)).map_err(ComputeError::JsonError)
    }

    /// Encode to a pretty-printed JSON string
    pub fn encode_to_json_pretty(&self, workout: &Workout) -> Result<String, ComputeError> {
        serde_json::to_string_pretty(&self.encode(workout)).map_err(ComputeError::JsonError)
    }
}
