//! Pipeline orchestration
//!
//! This module drives sensor packages through the full pipeline:
//! dispatch → formulas → summary. It owns the batch policy for bad records.

use crate::dispatch::read_package;
use crate::error::ComputeError;
use crate::summary::SummaryBuilder;
use crate::types::{Workout, TRAINING_RUNNING, TRAINING_SPORTSWALKING, TRAINING_SWIMMING};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Write;
use tracing::{debug, warn};

/// Integers above 2^53 have no exact f64 representation
const MAX_EXACT_INTEGER: u64 = 1 << 53;

/// A sensor package: activity tag plus positional raw values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<serde_json::Value>,
}

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<serde_json::Value>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Numeric view of the raw values; non-numeric entries are invalid input
    pub fn values(&self) -> Result<Vec<f64>, ComputeError> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, value)| match value.as_u64() {
                Some(n) if n > MAX_EXACT_INTEGER => Err(ComputeError::InvalidInput(format!(
                    "data[{i}] = {n} cannot be represented exactly"
                ))),
                _ => value.as_f64().ok_or_else(|| {
                    ComputeError::InvalidInput(format!("data[{i}] is not a number: {value}"))
                }),
            })
            .collect()
    }

    /// Dispatch and compute this package
    pub fn read(&self) -> Result<Workout, ComputeError> {
        let values = self.values()?;
        read_package(&self.workout_type, &values)
    }
}

/// The built-in sample packages
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new(TRAINING_SWIMMING, vec![json!(720), json!(1), json!(80), json!(25), json!(40)]),
        Package::new(TRAINING_RUNNING, vec![json!(15000), json!(1), json!(75)]),
        Package::new(TRAINING_SPORTSWALKING, vec![json!(9000), json!(1), json!(75), json!(180)]),
    ]
}

/// Parse a JSON array of packages
pub fn parse_packages(json: &str) -> Result<Vec<Package>, ComputeError> {
    let packages: Vec<Package> = serde_json::from_str(json)?;
    Ok(packages)
}

/// Parse NDJSON (one package per line)
pub fn parse_packages_ndjson(ndjson: &str) -> Result<Vec<Package>, ComputeError> {
    let mut packages = Vec::new();
    for (line_num, line) in ndjson.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        match serde_json::from_str::<Package>(trimmed) {
            Ok(package) => packages.push(package),
            Err(e) => {
                return Err(ComputeError::ParseError(format!(
                    "Failed to parse line {}: {}",
                    line_num + 1,
                    e
                )));
            }
        }
    }
    Ok(packages)
}

/// What to do with a package that cannot be computed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Report the package and continue with the next one
    #[default]
    SkipInvalid,
    /// Stop at the first bad package
    FailFast,
}

/// A package that was skipped
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordFailure {
    /// Position in the input
    pub index: usize,
    pub workout_type: String,
    pub error: String,
}

/// Outcome of a batch, in input order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub workouts: Vec<Workout>,
    pub failures: Vec<RecordFailure>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Batch processor for sensor packages
#[derive(Debug, Default)]
pub struct WorkoutProcessor {
    policy: FailurePolicy,
}

impl WorkoutProcessor {
    /// Create a processor that skips invalid packages
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: FailurePolicy) -> Self {
        Self { policy }
    }

    /// Compute every package, collecting workouts and failures
    pub fn process(&self, packages: &[Package]) -> Result<BatchReport, ComputeError> {
        self.process_with(packages, |_| Ok(()))
    }

    /// Compute every package and write one summary line per workout
    pub fn run<W: Write>(
        &self,
        packages: &[Package],
        out: &mut W,
    ) -> Result<BatchReport, ComputeError> {
        self.process_with(packages, |workout| {
            writeln!(out, "{}", SummaryBuilder::build(workout))?;
            Ok(())
        })
    }

    /// Process packages in order, handing each workout to `emit` as soon as it
    /// is computed
    pub fn process_with<F>(
        &self,
        packages: &[Package],
        mut emit: F,
    ) -> Result<BatchReport, ComputeError>
    where
        F: FnMut(&Workout) -> Result<(), ComputeError>,
    {
        let mut report = BatchReport::default();

        for (index, package) in packages.iter().enumerate() {
            match package.read() {
                Ok(workout) => {
                    emit(&workout)?;
                    report.workouts.push(workout);
                }
                Err(e) if self.policy == FailurePolicy::SkipInvalid => {
                    warn!(
                        index,
                        workout_type = %package.workout_type,
                        error = %e,
                        "skipping package"
                    );
                    report.failures.push(RecordFailure {
                        index,
                        workout_type: package.workout_type.clone(),
                        error: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        debug!(
            workouts = report.workouts.len(),
            failures = report.failures.len(),
            "batch processed"
        );

        Ok(report)
    }
}
