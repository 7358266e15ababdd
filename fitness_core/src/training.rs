//! Training variants and their derived metrics.
//!
//! The `Training` trait is the calculation capability shared by all workout
//! variants: distance, mean speed, and calories. Distance and mean speed have
//! provided defaults; the calorie formula is variant-specific and must be
//! implemented by every variant. Formula coefficients are scoped to each
//! impl block so they cannot leak between variants.

use crate::report::TrainingSummary;

/// Metres in a kilometre
pub(crate) const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub(crate) const MIN_IN_H: f64 = 60.0;

/// Default distance covered per step, metres
const STEP_LENGTH_M: f64 = 0.65;

/// Calculation capability of a workout variant.
///
/// All metrics are pure functions of the constructed record; repeated calls
/// return identical results. Formulas assume a positive duration — callers
/// are responsible for never constructing a variant with `duration_h == 0`.
pub trait Training {
    /// Identifying name used in the report line
    fn training_type(&self) -> &'static str;

    /// Step or stroke count
    fn action(&self) -> u32;

    /// Workout duration, hours
    fn duration_h(&self) -> f64;

    /// Athlete weight, kg
    fn weight_kg(&self) -> f64;

    /// Distance covered per action unit, metres
    fn step_length_m(&self) -> f64 {
        STEP_LENGTH_M
    }

    /// Total distance covered, km
    fn distance_km(&self) -> f64 {
        f64::from(self.action()) * self.step_length_m() / M_IN_KM
    }

    /// Mean speed over the full duration, km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h()
    }

    /// Calories burned, kcal (variant-specific formula)
    fn spent_calories(&self) -> f64;

    /// Assemble the printable summary for this workout
    fn summary(&self) -> TrainingSummary {
        TrainingSummary {
            training_type: self.training_type(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.spent_calories(),
        }
    }
}

/// Running workout record
#[derive(Clone, Debug)]
pub struct Running {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
}

impl Running {
    const SPEED_MULTIPLIER: f64 = 18.0;
    const SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
        }
    }
}

impl Training for Running {
    fn training_type(&self) -> &'static str {
        "Running"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn spent_calories(&self) -> f64 {
        (Self::SPEED_MULTIPLIER * self.mean_speed_kmh() + Self::SPEED_SHIFT)
            * self.weight_kg
            / M_IN_KM
            * (self.duration_h * MIN_IN_H)
    }
}

/// Sports walking workout record
#[derive(Clone, Debug)]
pub struct SportsWalking {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl SportsWalking {
    const WEIGHT_FACTOR: f64 = 0.035;
    const SPEED_HEIGHT_FACTOR: f64 = 0.029;
    const KMH_TO_MS: f64 = 0.278;
    const CM_IN_M: f64 = 100.0;

    pub fn new(action: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
            height_cm,
        }
    }
}

impl Training for SportsWalking {
    fn training_type(&self) -> &'static str {
        "SportsWalking"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn spent_calories(&self) -> f64 {
        let speed_ms = self.mean_speed_kmh() * Self::KMH_TO_MS;

        (Self::WEIGHT_FACTOR * self.weight_kg
            + speed_ms.powi(2) / (self.height_cm / Self::CM_IN_M)
                * Self::SPEED_HEIGHT_FACTOR
                * self.weight_kg)
            * (self.duration_h * MIN_IN_H)
    }
}

/// Swimming workout record
#[derive(Clone, Debug)]
pub struct Swimming {
    pub action: u32,
    pub duration_h: f64,
    pub weight_kg: f64,
    pub pool_length_m: f64,
    pub pool_laps: u32,
}

impl Swimming {
    const STROKE_LENGTH_M: f64 = 1.38;
    const SPEED_SHIFT: f64 = 1.1;
    const WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> Self {
        Self {
            action,
            duration_h,
            weight_kg,
            pool_length_m,
            pool_laps,
        }
    }
}

impl Training for Swimming {
    fn training_type(&self) -> &'static str {
        "Swimming"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn step_length_m(&self) -> f64 {
        Self::STROKE_LENGTH_M
    }

    // Pool geometry, not stroke count, determines the covered distance
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / M_IN_KM / self.duration_h
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + Self::SPEED_SHIFT)
            * Self::WEIGHT_MULTIPLIER
            * self.weight_kg
            * self.duration_h
    }
}
