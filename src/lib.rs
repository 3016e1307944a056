//! Synheart Workout - workout statistics from raw sensor packages
//!
//! Workout turns a sensor package (activity tag plus positional raw values)
//! into distance, mean speed and calories through a deterministic pipeline:
//! dispatch → formulas → summary → text or JSON report.
//!
//! ## Activities
//!
//! - **Running** (`RUN`): action count, duration, weight
//! - **Sports walking** (`WLK`): action count, duration, weight, height
//! - **Swimming** (`SWM`): action count, duration, weight, pool length, pool laps

pub mod dispatch;
pub mod encoder;
pub mod error;
pub mod formulas;
pub mod pipeline;
pub mod summary;
pub mod types;

pub use dispatch::read_package;
pub use encoder::{ReportEncoder, WorkoutReport};
pub use error::ComputeError;
pub use pipeline::{sample_packages, FailurePolicy, Package, WorkoutProcessor};
pub use summary::{Summary, SummaryBuilder};
pub use types::{ActivityKind, ActivityRecord, ComputedMetrics, Workout};

/// Workout version embedded in all reports
pub const WORKOUT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for reports
pub const PRODUCER_NAME: &str = "synheart-workout";
