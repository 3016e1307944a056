//! Distance, speed and calorie formulas
//!
//! Each activity kind shares the step-based distance and speed computation and
//! carries its own calorie model:
//! - Running: speed-linear energy cost scaled by weight and minutes
//! - Sports walking: weight term plus a speed²/height term (floor-divided)
//! - Swimming: pool-based speed, stroke-based distance

use crate::types::{ActivityRecord, ComputedMetrics, Running, SportsWalking, Swimming};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;
/// Step length for running and walking (meters)
pub const LEN_STEP_M: f64 = 0.65;
/// Stroke length for swimming (meters)
pub const LEN_STROKE_M: f64 = 1.38;

mod running {
    pub const SPEED_MULTIPLIER: f64 = 18.0;
    pub const SPEED_SHIFT: f64 = 20.0;
}

mod walking {
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

mod swimming {
    pub const SPEED_SHIFT: f64 = 1.1;
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Compute metrics for a record
pub fn compute(record: &ActivityRecord) -> ComputedMetrics {
    match record {
        ActivityRecord::Running(r) => compute_running(r),
        ActivityRecord::SportsWalking(w) => compute_sports_walking(w),
        ActivityRecord::Swimming(s) => compute_swimming(s),
    }
}

/// Distance in km for a number of actions of a given length (meters)
pub fn step_distance_km(action_count: u64, step_length_m: f64) -> f64 {
    action_count as f64 * step_length_m / M_IN_KM
}

fn compute_running(r: &Running) -> ComputedMetrics {
    let distance_km = step_distance_km(r.action_count, LEN_STEP_M);
    let mean_speed_kmh = distance_km / r.duration_hours;

    let speed_term = running::SPEED_MULTIPLIER * mean_speed_kmh - running::SPEED_SHIFT;
    let minutes = r.duration_hours * MIN_IN_H;
    let calories_kcal = speed_term * r.weight_kg / M_IN_KM * minutes;

    ComputedMetrics {
        distance_km,
        mean_speed_kmh,
        calories_kcal,
    }
}

fn compute_sports_walking(w: &SportsWalking) -> ComputedMetrics {
    let distance_km = step_distance_km(w.action_count, LEN_STEP_M);
    let mean_speed_kmh = distance_km / w.duration_hours;

    let weight_term = walking::WEIGHT_MULTIPLIER * w.weight_kg;
    let speed_height = floor_div(mean_speed_kmh.powi(2), w.height_cm);
    let speed_term = speed_height * walking::SPEED_HEIGHT_MULTIPLIER * w.weight_kg;
    let minutes = w.duration_hours * MIN_IN_H;
    let calories_kcal = (weight_term + speed_term) * minutes;

    ComputedMetrics {
        distance_km,
        mean_speed_kmh,
        calories_kcal,
    }
}

fn compute_swimming(s: &Swimming) -> ComputedMetrics {
    let distance_km = step_distance_km(s.action_count, LEN_STROKE_M);
    let mean_speed_kmh = s.pool_length_m * s.pool_laps as f64 / M_IN_KM / s.duration_hours;
    let calories_kcal =
        (mean_speed_kmh + swimming::SPEED_SHIFT) * swimming::WEIGHT_MULTIPLIER * s.weight_kg;

    ComputedMetrics {
        distance_km,
        mean_speed_kmh,
        calories_kcal,
    }
}

/// Floor division of floats: the whole-number quotient rounded toward
/// negative infinity, computed from the remainder so that `a - b * q` stays
/// consistent with `a % b`.
pub fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;

    // `%` keeps the sign of the dividend; shift when it disagrees with the divisor
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }

    let floored = div.floor();
    if div - floored > 0.5 {
        floored + 1.0
    } else {
        floored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn running(action_count: u64, duration_hours: f64, weight_kg: f64) -> ActivityRecord {
        ActivityRecord::Running(Running {
            action_count,
            duration_hours,
            weight_kg,
        })
    }

    fn walking(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> ActivityRecord {
        ActivityRecord::SportsWalking(SportsWalking {
            action_count,
            duration_hours,
            weight_kg,
            height_cm,
        })
    }

    fn swim(
        action_count: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u64,
    ) -> ActivityRecord {
        ActivityRecord::Swimming(Swimming {
            action_count,
            duration_hours,
            weight_kg,
            pool_length_m,
            pool_laps,
        })
    }

    #[test]
    fn test_running_sample() {
        let metrics = compute(&running(15000, 1.0, 75.0));

        assert!((metrics.distance_km - 9.75).abs() < EPS);
        assert!((metrics.mean_speed_kmh - 9.75).abs() < EPS);
        // (18 * 9.75 - 20) * 75 / 1000 * 60
        assert!((metrics.calories_kcal - 699.75).abs() < EPS);
    }

    #[test]
    fn test_running_calorie_formula_holds() {
        for (steps, hours, weight) in [(5000, 0.5, 60.0), (12000, 1.25, 82.5), (900, 2.0, 95.0)] {
            let metrics = compute(&running(steps, hours, weight));
            let expected =
                (18.0 * metrics.mean_speed_kmh - 20.0) * weight / 1000.0 * (hours * 60.0);
            assert!((metrics.calories_kcal - expected).abs() < EPS);
        }
    }

    #[test]
    fn test_slow_running_burns_negative_calories() {
        // Below 20/18 km/h the linear model goes negative; it is not clamped
        let metrics = compute(&running(1000, 1.0, 70.0));
        assert!(metrics.mean_speed_kmh < 20.0 / 18.0);
        assert!(metrics.calories_kcal < 0.0);
    }

    #[test]
    fn test_walking_sample_uses_floor_division() {
        let metrics = compute(&walking(9000, 1.0, 75.0, 180.0));

        assert!((metrics.distance_km - 5.85).abs() < EPS);
        assert!((metrics.mean_speed_kmh - 5.85).abs() < EPS);
        // 5.85² / 180 = 0.19..., floored to 0, leaving only 0.035 * 75 * 60
        assert!((metrics.calories_kcal - 157.5).abs() < EPS);

        let true_division =
            (0.035 * 75.0 + 5.85_f64.powi(2) / 180.0 * 0.029 * 75.0) * 60.0;
        assert!((metrics.calories_kcal - true_division).abs() > 1.0);
    }

    #[test]
    fn test_walking_floor_term_steps_at_threshold() {
        // speed 13 km/h, speed² = 169; height 160 floors to 1, height 170 floors to 0
        let steps = 20000;
        let at_one = compute(&walking(steps, 1.0, 70.0, 160.0));
        let at_zero = compute(&walking(steps, 1.0, 70.0, 170.0));

        assert!((at_one.mean_speed_kmh - 13.0).abs() < EPS);
        let base = 0.035 * 70.0 * 60.0;
        assert!((at_zero.calories_kcal - base).abs() < EPS);
        assert!((at_one.calories_kcal - (base + 0.029 * 70.0 * 60.0)).abs() < EPS);
    }

    #[test]
    fn test_swimming_sample() {
        let metrics = compute(&swim(720, 1.0, 80.0, 25.0, 40));

        assert!((metrics.distance_km - 0.9936).abs() < EPS);
        assert!((metrics.mean_speed_kmh - 1.0).abs() < EPS);
        assert!((metrics.calories_kcal - 336.0).abs() < EPS);
    }

    #[test]
    fn test_swimming_speed_ignores_strokes() {
        let few = compute(&swim(100, 2.0, 70.0, 50.0, 30));
        let many = compute(&swim(5000, 2.0, 70.0, 50.0, 30));

        assert_eq!(few.mean_speed_kmh, many.mean_speed_kmh);
        assert!((few.mean_speed_kmh - 50.0 * 30.0 / 1000.0 / 2.0).abs() < EPS);
        assert!((many.distance_km - 5000.0 * 1.38 / 1000.0).abs() < EPS);
    }

    #[test]
    fn test_compute_is_deterministic() {
        let record = walking(12345, 1.7, 68.3, 171.0);
        let first = compute(&record);
        let second = compute(&record);

        assert_eq!(first.distance_km.to_bits(), second.distance_km.to_bits());
        assert_eq!(first.mean_speed_kmh.to_bits(), second.mean_speed_kmh.to_bits());
        assert_eq!(first.calories_kcal.to_bits(), second.calories_kcal.to_bits());
    }

    #[test]
    fn test_floor_div() {
        assert_eq!(floor_div(7.0, 2.0), 3.0);
        assert_eq!(floor_div(-7.0, 2.0), -4.0);
        assert_eq!(floor_div(7.0, -2.0), -4.0);
        assert_eq!(floor_div(6.0, 3.0), 2.0);
        assert_eq!(floor_div(34.2225, 180.0), 0.0);
        assert_eq!(floor_div(361.0, 180.0), 2.0);
    }
}
