//! Workout package input.
//!
//! A package is one (code, values) tuple as produced by the sensor side:
//! a short workout code plus the positional numeric values for that
//! variant's constructor. Packages can come from the built-in demonstration
//! set or from a JSON file.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One raw workout package: code plus positional values
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl WorkoutPackage {
    pub fn new(workout_type: &str, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.to_string(),
            data,
        }
    }
}

/// Built-in demonstration packages, processed in this exact order
pub fn demo_packages() -> Vec<WorkoutPackage> {
    vec![
        WorkoutPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        WorkoutPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        WorkoutPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Load workout packages from a JSON file
///
/// The file holds a JSON array of `{ "workout_type": .., "data": [..] }`
/// records. A missing or malformed file is an error - unlike optional
/// signals, an explicitly named input must parse.
pub fn load_packages(path: &Path) -> Result<Vec<WorkoutPackage>> {
    let contents = std::fs::read_to_string(path)?;
    let packages: Vec<WorkoutPackage> = serde_json::from_str(&contents)?;

    tracing::info!("Loaded {} packages from {:?}", packages.len(), path);

    Ok(packages)
}
