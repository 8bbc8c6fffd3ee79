use std::fmt;

/// Summary of a single workout.
///
/// Created by [`crate::Training::show_training_info`], never cached: every call recomputes it.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfoMessage {
    training_type: String,
    duration: f64,
    distance: f64,
    speed: f64,
    calories: f64,
}

impl InfoMessage {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    pub fn training_type(&self) -> &str {
        &self.training_type
    }

    /// Duration in hours
    pub const fn duration(&self) -> f64 {
        self.duration
    }

    /// Distance in kilometers
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    /// Mean speed in km/h
    pub const fn speed(&self) -> f64 {
        self.speed
    }

    /// Spent kilocalories
    pub const fn calories(&self) -> f64 {
        self.calories
    }

    /// Summary line with every metric rounded to 3 decimal places.
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
