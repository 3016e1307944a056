//! Workout summaries
//!
//! Builds the human-readable line reported for each workout. Values are
//! formatted straight from the computed floats: three decimals with comma
//! thousands separators, no rounding to whole numbers beforehand.

use crate::types::Workout;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation view of a computed workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub activity_label: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl Summary {
    /// Render the summary line
    pub fn message(&self) -> String {
        format!(
            "Training type: {}; Duration: {} h.; Distance: {} km; Avg speed: {} km/h; Calories burned: {}.",
            self.activity_label,
            format_grouped(self.duration_hours),
            format_grouped(self.distance_km),
            format_grouped(self.mean_speed_kmh),
            format_grouped(self.calories_kcal),
        )
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Summary builder for computed workouts
pub struct SummaryBuilder;

impl SummaryBuilder {
    /// Build the summary of a workout
    pub fn build(workout: &Workout) -> Summary {
        let metrics = workout.metrics();

        Summary {
            activity_label: workout.kind().label().to_string(),
            duration_hours: workout.record().duration_hours(),
            distance_km: metrics.distance_km,
            mean_speed_kmh: metrics.mean_speed_kmh,
            calories_kcal: metrics.calories_kcal,
        }
    }
}

/// Format with three decimals and comma-separated thousands
pub fn format_grouped(value: f64) -> String {
    let fixed = format!("{value:.3}");
    if !value.is_finite() {
        return fixed;
    }

    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::read_package;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0.0), "0.000");
        assert_eq!(format_grouped(0.9936), "0.994");
        assert_eq!(format_grouped(999.9999), "1,000.000");
        assert_eq!(format_grouped(1234.5), "1,234.500");
        assert_eq!(format_grouped(1234567.891), "1,234,567.891");
        assert_eq!(format_grouped(-0.25), "-0.250");
        assert_eq!(format_grouped(-98765.4321), "-98,765.432");
    }

    #[test]
    fn test_swimming_message() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        let summary = SummaryBuilder::build(&workout);

        assert_eq!(
            summary.message(),
            "Training type: Swimming; Duration: 1.000 h.; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories burned: 336.000."
        );
    }

    #[test]
    fn test_running_message() {
        let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        let summary = SummaryBuilder::build(&workout);

        assert_eq!(
            summary.to_string(),
            "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories burned: 699.750."
        );
    }

    #[test]
    fn test_walking_message() {
        let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        let summary = SummaryBuilder::build(&workout);

        assert_eq!(
            summary.message(),
            "Training type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; \
             Avg speed: 5.850 km/h; Calories burned: 157.500."
        );
    }

    #[test]
    fn test_large_values_grouped() {
        let workout = read_package("RUN", &[2_000_000.0, 10.0, 90.0]).unwrap();
        let message = SummaryBuilder::build(&workout).message();

        // 2e6 steps * 0.65 m = 1,300 km
        assert!(message.contains("Distance: 1,300.000 km"));
        assert!(message.contains("Avg speed: 130.000 km/h"));
    }

    #[test]
    fn test_summary_keeps_fractional_values() {
        let workout = read_package("RUN", &[1234.0, 0.75, 71.5]).unwrap();
        let summary = SummaryBuilder::build(&workout);

        assert_eq!(summary.duration_hours, 0.75);
        assert_eq!(summary.distance_km, workout.metrics().distance_km);
        assert!(summary.message().contains("Duration: 0.750 h."));
    }
}
