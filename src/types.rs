//! Core types for the Synheart Workout pipeline
//!
//! This module defines the data structures that flow through each stage of the
//! pipeline: validated activity records, computed metrics, and workouts that
//! own both.

use crate::error::ComputeError;
use crate::formulas;
use serde::{Deserialize, Serialize};

/// Tag for swimming packages
pub const TRAINING_SWIMMING: &str = "SWM";
/// Tag for running packages
pub const TRAINING_RUNNING: &str = "RUN";
/// Tag for sports walking packages
pub const TRAINING_SPORTSWALKING: &str = "WLK";

/// Activity kind, the closed set of supported workouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    Swimming,
    Running,
    SportsWalking,
}

impl ActivityKind {
    /// All kinds, in tag order of the sample packages
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Swimming,
        ActivityKind::Running,
        ActivityKind::SportsWalking,
    ];

    /// Resolve a sensor package tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            TRAINING_SWIMMING => Some(ActivityKind::Swimming),
            TRAINING_RUNNING => Some(ActivityKind::Running),
            TRAINING_SPORTSWALKING => Some(ActivityKind::SportsWalking),
            _ => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ActivityKind::Swimming => TRAINING_SWIMMING,
            ActivityKind::Running => TRAINING_RUNNING,
            ActivityKind::SportsWalking => TRAINING_SPORTSWALKING,
        }
    }

    /// Training name shown in summaries
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Swimming => "Swimming",
            ActivityKind::Running => "Running",
            ActivityKind::SportsWalking => "SportsWalking",
        }
    }

    /// Number of positional values a package of this kind carries
    pub fn arity(&self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::SportsWalking => 4,
            ActivityKind::Swimming => 5,
        }
    }
}

/// Running session inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Running {
    /// Number of steps
    pub action_count: u64,
    /// Session duration (hours)
    pub duration_hours: f64,
    /// Athlete weight (kg)
    pub weight_kg: f64,
}

/// Sports walking session inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SportsWalking {
    /// Number of steps
    pub action_count: u64,
    /// Session duration (hours)
    pub duration_hours: f64,
    /// Athlete weight (kg)
    pub weight_kg: f64,
    /// Athlete height (cm)
    pub height_cm: f64,
}

/// Swimming session inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Swimming {
    /// Number of strokes
    pub action_count: u64,
    /// Session duration (hours)
    pub duration_hours: f64,
    /// Athlete weight (kg)
    pub weight_kg: f64,
    /// Pool length (meters)
    pub pool_length_m: f64,
    /// Completed pool lengths
    pub pool_laps: u64,
}

/// Raw inputs for one completed workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActivityRecord {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl ActivityRecord {
    pub fn kind(&self) -> ActivityKind {
        match self {
            ActivityRecord::Running(_) => ActivityKind::Running,
            ActivityRecord::SportsWalking(_) => ActivityKind::SportsWalking,
            ActivityRecord::Swimming(_) => ActivityKind::Swimming,
        }
    }

    pub fn action_count(&self) -> u64 {
        match self {
            ActivityRecord::Running(r) => r.action_count,
            ActivityRecord::SportsWalking(w) => w.action_count,
            ActivityRecord::Swimming(s) => s.action_count,
        }
    }

    pub fn duration_hours(&self) -> f64 {
        match self {
            ActivityRecord::Running(r) => r.duration_hours,
            ActivityRecord::SportsWalking(w) => w.duration_hours,
            ActivityRecord::Swimming(s) => s.duration_hours,
        }
    }

    pub fn weight_kg(&self) -> f64 {
        match self {
            ActivityRecord::Running(r) => r.weight_kg,
            ActivityRecord::SportsWalking(w) => w.weight_kg,
            ActivityRecord::Swimming(s) => s.weight_kg,
        }
    }
}

/// Metrics derived from an activity record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputedMetrics {
    /// Distance covered (km)
    pub distance_km: f64,
    /// Mean speed over the whole session (km/h)
    pub mean_speed_kmh: f64,
    /// Energy spent (kcal)
    pub calories_kcal: f64,
}

/// A record together with its metrics, computed once at construction
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    record: ActivityRecord,
    metrics: ComputedMetrics,
}

impl Workout {
    /// Compute metrics for a validated record.
    ///
    /// Inputs that are individually finite can still overflow the formulas
    /// (a vanishing duration, an enormous weight); those are rejected rather
    /// than reported as infinite.
    pub fn new(record: ActivityRecord) -> Result<Self, ComputeError> {
        let metrics = formulas::compute(&record);

        for (field, value) in [
            ("distance_km", metrics.distance_km),
            ("mean_speed_kmh", metrics.mean_speed_kmh),
            ("calories_kcal", metrics.calories_kcal),
        ] {
            if !value.is_finite() {
                return Err(ComputeError::InvalidInput(format!(
                    "{field} is not finite for {} inputs",
                    record.kind().tag()
                )));
            }
        }

        Ok(Self { record, metrics })
    }

    pub fn kind(&self) -> ActivityKind {
        self.record.kind()
    }

    pub fn record(&self) -> &ActivityRecord {
        &self.record
    }

    pub fn metrics(&self) -> &ComputedMetrics {
        &self.metrics
    }
}
