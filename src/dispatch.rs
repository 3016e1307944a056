//! Package dispatch
//!
//! Maps a sensor package tag to its activity kind and builds a validated
//! record from the positional values, in the documented order:
//! - `RUN`: action count, duration, weight
//! - `WLK`: action count, duration, weight, height
//! - `SWM`: action count, duration, weight, pool length, pool laps

use crate::error::ComputeError;
use crate::types::{ActivityKind, ActivityRecord, Running, SportsWalking, Swimming, Workout};
use tracing::debug;

/// Read a sensor package and compute its workout.
///
/// # Arguments
/// * `workout_type` - Package tag (`SWM`, `RUN` or `WLK`)
/// * `data` - Positional raw values for that tag
///
/// # Example
/// ```
/// use synheart_workout::read_package;
///
/// let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
/// assert!((workout.metrics().distance_km - 9.75).abs() < 1e-9);
/// ```
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout, ComputeError> {
    let kind = ActivityKind::from_tag(workout_type)
        .ok_or_else(|| ComputeError::UnknownActivityType(workout_type.to_string()))?;

    let record = build_record(kind, data)?;
    let workout = Workout::new(record)?;

    debug!(
        workout_type,
        distance_km = workout.metrics().distance_km,
        calories_kcal = workout.metrics().calories_kcal,
        "computed workout"
    );

    Ok(workout)
}

/// Build a validated record of the given kind from positional values
pub fn build_record(kind: ActivityKind, data: &[f64]) -> Result<ActivityRecord, ComputeError> {
    if data.len() != kind.arity() {
        return Err(ComputeError::ArityMismatch {
            workout_type: kind.tag().to_string(),
            expected: kind.arity(),
            actual: data.len(),
        });
    }

    let action_count = count(data[0], "action_count")?;
    let duration_hours = positive(data[1], "duration_hours")?;
    let weight_kg = positive(data[2], "weight_kg")?;

    let record = match kind {
        ActivityKind::Running => ActivityRecord::Running(Running {
            action_count,
            duration_hours,
            weight_kg,
        }),
        ActivityKind::SportsWalking => ActivityRecord::SportsWalking(SportsWalking {
            action_count,
            duration_hours,
            weight_kg,
            height_cm: positive(data[3], "height_cm")?,
        }),
        ActivityKind::Swimming => ActivityRecord::Swimming(Swimming {
            action_count,
            duration_hours,
            weight_kg,
            pool_length_m: positive(data[3], "pool_length_m")?,
            pool_laps: count(data[4], "pool_laps")?,
        }),
    };

    Ok(record)
}

/// Strictly positive finite quantity (also used as a divisor)
fn positive(value: f64, field: &str) -> Result<f64, ComputeError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ComputeError::InvalidInput(format!(
            "{field} must be a positive number, got {value}"
        )));
    }
    Ok(value)
}

/// Non-negative whole number
fn count(value: f64, field: &str) -> Result<u64, ComputeError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(ComputeError::InvalidInput(format!(
            "{field} must be a non-negative whole number, got {value}"
        )));
    }
    Ok(value as u64)
}
