//! Fixed-format training summary.
//!
//! The output line is a literal contract: Russian labels, each numeric value
//! to exactly 3 decimal places, semicolon-separated, terminated with a
//! period.

use std::fmt;

/// Computed metrics of a single workout, ready for rendering
#[derive(Clone, Debug, PartialEq)]
pub struct TrainingSummary {
    pub training_type: &'static str,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl fmt::Display for TrainingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.training_type,
            self.duration_h,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_format_is_exact() {
        let summary = TrainingSummary {
            training_type: "Swimming",
            duration_h: 1.0,
            distance_km: 0.9936,
            mean_speed_kmh: 1.0,
            calories_kcal: 336.0,
        };

        assert_eq!(
            summary.to_string(),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; \
             Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; \
             Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_values_rounded_to_three_decimals() {
        let summary = TrainingSummary {
            training_type: "Running",
            duration_h: 0.7512345,
            distance_km: 9.75,
            mean_speed_kmh: 12.979234,
            calories_kcal: 797.8049,
        };

        let message = summary.to_string();
        assert!(message.contains("Длительность: 0.751 ч."));
        assert!(message.contains("Дистанция: 9.750 км"));
        assert!(message.contains("Ср. скорость: 12.979 км/ч"));
        assert!(message.contains("Потрачено ккал: 797.805."));
    }
}
