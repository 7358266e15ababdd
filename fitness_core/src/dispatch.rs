//! Workout code dispatcher.
//!
//! Maps the short sensor codes ("SWM", "RUN", "WLK") to variant constructors.
//! The registry is fixed and built once.

use crate::{Error, Result, Running, SportsWalking, Swimming, Training};
use once_cell::sync::Lazy;
use std::collections::HashMap;

type BuildFn = fn(&[f64]) -> Result<Box<dyn Training>>;

/// Cached code registry - built once and reused across all packages
static WORKOUT_REGISTRY: Lazy<HashMap<&'static str, BuildFn>> = Lazy::new(|| {
    let mut registry: HashMap<&'static str, BuildFn> = HashMap::new();
    registry.insert("SWM", build_swimming);
    registry.insert("RUN", build_running);
    registry.insert("WLK", build_walking);
    registry
});

/// Construct the training variant for a raw workout package
///
/// Looks the code up in the fixed registry and hands the positional values to
/// the matching constructor. An unrecognized code fails with
/// [`Error::UnknownWorkoutType`] without constructing anything; a value count
/// that does not match the variant's arity fails with
/// [`Error::PackageArity`].
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Box<dyn Training>> {
    let build = WORKOUT_REGISTRY
        .get(workout_type)
        .ok_or_else(|| Error::UnknownWorkoutType(workout_type.to_string()))?;

    tracing::debug!(
        "Dispatching {} package with {} values",
        workout_type,
        data.len()
    );

    build(data)
}

fn build_running(data: &[f64]) -> Result<Box<dyn Training>> {
    match data {
        [action, duration_h, weight_kg] => Ok(Box::new(Running::new(
            *action as u32,
            *duration_h,
            *weight_kg,
        ))),
        _ => Err(arity_error("RUN", 3, data.len())),
    }
}

fn build_walking(data: &[f64]) -> Result<Box<dyn Training>> {
    match data {
        [action, duration_h, weight_kg, height_cm] => Ok(Box::new(SportsWalking::new(
            *action as u32,
            *duration_h,
            *weight_kg,
            *height_cm,
        ))),
        _ => Err(arity_error("WLK", 4, data.len())),
    }
}

fn build_swimming(data: &[f64]) -> Result<Box<dyn Training>> {
    match data {
        [action, duration_h, weight_kg, pool_length_m, pool_laps] => {
            Ok(Box::new(Swimming::new(
                *action as u32,
                *duration_h,
                *weight_kg,
                *pool_length_m,
                *pool_laps as u32,
            )))
        }
        _ => Err(arity_error("SWM", 5, data.len())),
    }
}

fn arity_error(code: &str, expected: usize, got: usize) -> Error {
    Error::PackageArity {
        code: code.to_string(),
        expected,
        got,
    }
}
