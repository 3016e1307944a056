//! Workout CLI - Command-line interface for Synheart Workout
//!
//! Without arguments the built-in sample packages are processed and one
//! summary line per workout is printed. Packages can also be read from a file
//! or stdin as a JSON array or NDJSON.

use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use synheart_workout::pipeline::{
    parse_packages, parse_packages_ndjson, sample_packages, FailurePolicy, Package,
    WorkoutProcessor,
};
use synheart_workout::{
    ActivityKind, ComputeError, ReportEncoder, WorkoutReport, WORKOUT_VERSION,
};

/// Workout - compute workout statistics from sensor packages
#[derive(Parser)]
#[command(name = "workout")]
#[command(author = "Synheart AI Inc")]
#[command(version = WORKOUT_VERSION)]
#[command(about = "Compute distance, speed and calories from sensor packages", long_about = None)]
struct Cli {
    /// Input file path (use - for stdin); defaults to the built-in sample packages
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Input format
    #[arg(long, default_value = "json")]
    input_format: InputFormat,

    /// Output format
    #[arg(long, default_value = "text")]
    output_format: OutputFormat,

    /// Stop at the first package that cannot be computed
    #[arg(long)]
    fail_fast: bool,
}

#[derive(Clone, ValueEnum)]
enum InputFormat {
    /// JSON array of packages
    Json,
    /// Newline-delimited JSON (one package per line)
    Ndjson,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// One summary line per workout
    Text,
    /// Newline-delimited JSON (one report per line)
    Ndjson,
    /// Pretty-printed JSON array of reports
    JsonPretty,
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), WorkoutCliError> {
    let packages = match &cli.input {
        Some(path) => read_packages(path, &cli.input_format)?,
        None => sample_packages(),
    };

    if packages.is_empty() {
        return Err(WorkoutCliError::NoPackages);
    }

    let policy = if cli.fail_fast {
        FailurePolicy::FailFast
    } else {
        FailurePolicy::SkipInvalid
    };
    let processor = WorkoutProcessor::with_policy(policy);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = match cli.output_format {
        OutputFormat::Text => processor.run(&packages, &mut out)?,
        OutputFormat::Ndjson => {
            let encoder = ReportEncoder::new();
            processor.process_with(&packages, |workout| {
                writeln!(out, "{}", encoder.encode_to_json(workout)?)?;
                Ok(())
            })?
        }
        OutputFormat::JsonPretty => {
            let encoder = ReportEncoder::new();
            let report = processor.process(&packages)?;
            let reports: Vec<WorkoutReport> =
                report.workouts.iter().map(|w| encoder.encode(w)).collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&reports)?)?;
            report
        }
    };
    out.flush()?;

    if report.is_complete() {
        Ok(())
    } else {
        Err(WorkoutCliError::PackagesFailed(report.failures.len()))
    }
}

fn read_packages(input: &Path, format: &InputFormat) -> Result<Vec<Package>, WorkoutCliError> {
    let input_data = if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(input)?
    };

    let packages = match format {
        InputFormat::Json => parse_packages(&input_data)?,
        InputFormat::Ndjson => parse_packages_ndjson(&input_data)?,
    };
    Ok(packages)
}

// Error types

#[derive(Debug)]
enum WorkoutCliError {
    Io(io::Error),
    Compute(ComputeError),
    Json(serde_json::Error),
    NoPackages,
    PackagesFailed(usize),
}

impl From<io::Error> for WorkoutCliError {
    fn from(e: io::Error) -> Self {
        WorkoutCliError::Io(e)
    }
}

impl From<ComputeError> for WorkoutCliError {
    fn from(e: ComputeError) -> Self {
        WorkoutCliError::Compute(e)
    }
}

impl From<serde_json::Error> for WorkoutCliError {
    fn from(e: serde_json::Error) -> Self {
        WorkoutCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<WorkoutCliError> for CliError {
    fn from(e: WorkoutCliError) -> Self {
        match e {
            WorkoutCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            WorkoutCliError::Compute(e) => CliError {
                code: compute_error_code(&e).to_string(),
                message: e.to_string(),
                hint: Some(compute_error_hint(&e)),
            },
            WorkoutCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: None,
            },
            WorkoutCliError::NoPackages => CliError {
                code: "NO_PACKAGES".to_string(),
                message: "No packages found in input".to_string(),
                hint: Some("Ensure input file is not empty".to_string()),
            },
            WorkoutCliError::PackagesFailed(count) => CliError {
                code: "PACKAGES_FAILED".to_string(),
                message: format!("{} packages could not be computed", count),
                hint: Some("Each skipped package is logged as a warning above".to_string()),
            },
        }
    }
}

fn compute_error_code(e: &ComputeError) -> &'static str {
    match e {
        ComputeError::UnknownActivityType(_) => "UNKNOWN_ACTIVITY_TYPE",
        ComputeError::ArityMismatch { .. } => "ARITY_MISMATCH",
        ComputeError::InvalidInput(_) => "INVALID_INPUT",
        ComputeError::ParseError(_) | ComputeError::JsonError(_) => "PARSE_ERROR",
        ComputeError::Io(_) => "IO_ERROR",
    }
}

fn compute_error_hint(e: &ComputeError) -> String {
    match e {
        ComputeError::UnknownActivityType(_) | ComputeError::ArityMismatch { .. } => {
            let expected: Vec<String> = ActivityKind::ALL
                .iter()
                .map(|kind| format!("{} ({} values)", kind.tag(), kind.arity()))
                .collect();
            format!("Supported workout types: {}", expected.join(", "))
        }
        _ => "Packages look like {\"workout_type\": \"RUN\", \"data\": [15000, 1, 75]}".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_hint_lists_every_kind() {
        let hint = compute_error_hint(&ComputeError::UnknownActivityType("XYZ".to_string()));
        assert_eq!(
            hint,
            "Supported workout types: SWM (5 values), RUN (3 values), WLK (4 values)"
        );
    }

    #[test]
    fn test_invalid_input_hint_shows_package_shape() {
        let hint = compute_error_hint(&ComputeError::InvalidInput("bad".to_string()));
        assert!(hint.contains("\"workout_type\""));
    }
}
