#![forbid(unsafe_code)]

//! Core domain model for the fitness training calculator.
//!
//! This crate provides:
//! - Training variants (running, sports walking, swimming) with derived metrics
//! - A dispatcher mapping workout codes to variants
//! - The fixed-format training summary
//! - Workout package input loading

pub mod training;
pub mod error;
pub mod report;
pub mod dispatch;
pub mod packages;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use training::{Running, SportsWalking, Swimming, Training};
pub use report::TrainingSummary;
pub use dispatch::read_package;
pub use packages::{demo_packages, load_packages, WorkoutPackage};
