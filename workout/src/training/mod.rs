//! Workout calculations.
//!
//! Every workout shares the same raw inputs ([`Session`]) and the same way to
//! turn them into distance and speed:
//!
//! ```notrust
//! distance = action * step_length / 1000
//! speed    = distance / duration
//! ```
//!
//! where:
//!
//! - action - number of steps (or strokes for swimming)
//! - step_length - meters covered by one action
//! - duration - workout duration in hours
//!
//! Calories are specific to each workout, see [`Running`], [`SportsWalking`] and [`Swimming`].

mod running;
mod swimming;
mod walking;

pub use running::*;
pub use swimming::*;
pub use walking::*;

use crate::{InfoMessage, WorkoutError, WorkoutKind};

/// Meters in kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in hour
pub const MIN_IN_H: f64 = 60.0;
/// Step length for running and walking in meters
pub const LAND_STEP_M: f64 = 0.65;
/// Stroke length for swimming in meters
pub const STROKE_M: f64 = 1.38;

/// Raw sensor readings shared by every workout.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Session {
    action: u64,
    duration_hours: f64,
    weight_kg: f64,
}

impl Session {
    /// # Params
    /// - `action` - number of steps or strokes
    /// - `duration_hours` - workout duration, must be positive
    /// - `weight_kg` - weight of person in kilograms
    pub fn new(action: u64, duration_hours: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        if duration_hours == 0.0 {
            return Err(WorkoutError::DivisionByZero { field: "duration" });
        }

        Ok(Self {
            action,
            duration_hours: non_negative("duration", duration_hours)?,
            weight_kg: non_negative("weight", weight_kg)?,
        })
    }

    pub const fn action(&self) -> u64 {
        self.action
    }

    pub const fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub const fn duration_minutes(&self) -> f64 {
        self.duration_hours * MIN_IN_H
    }
}

/// Calculation contract implemented by every workout.
pub trait Training {
    fn kind(&self) -> WorkoutKind;

    fn session(&self) -> &Session;

    /// Meters covered by one action
    fn step_length_m(&self) -> f64 {
        LAND_STEP_M
    }

    fn distance_km(&self) -> f64 {
        self.session().action() as f64 * self.step_length_m() / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.session().duration_hours()
    }

    fn spent_calories(&self) -> f64;

    /// Summary of the workout. Fails if any metric overflows, e.g. for a
    /// vanishingly small duration.
    fn show_training_info(&self) -> Result<InfoMessage, WorkoutError> {
        let distance = finite("distance", self.distance_km())?;
        let speed = finite("speed", self.mean_speed_kmh())?;
        let calories = finite("calories", self.spent_calories())?;

        tracing::trace!(
            kind = %self.kind(),
            distance,
            speed,
            calories,
            "Computed workout metrics"
        );

        Ok(InfoMessage::new(
            self.kind().label(),
            self.session().duration_hours(),
            distance,
            speed,
            calories,
        ))
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    match value.is_finite() {
        true => Ok(value),
        false => Err(WorkoutError::InvalidValue {
            field,
            value,
            reason: "must be finite",
        }),
    }
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if !value.is_finite() {
        return Err(WorkoutError::InvalidValue {
            field,
            value,
            reason: "must be finite",
        });
    }

    if value.is_sign_negative() && value != 0.0 {
        return Err(WorkoutError::InvalidValue {
            field,
            value,
            reason: "must not be negative",
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration() {
        assert_eq!(
            Session::new(1000, 0.0, 70.0),
            Err(WorkoutError::DivisionByZero { field: "duration" })
        );
    }

    #[test]
    fn negative_zero_duration() {
        assert_eq!(
            Session::new(1000, -0.0, 70.0),
            Err(WorkoutError::DivisionByZero { field: "duration" })
        );
    }

    #[test]
    fn negative_duration() {
        assert!(matches!(
            Session::new(1000, -1.0, 70.0),
            Err(WorkoutError::InvalidValue {
                field: "duration",
                ..
            })
        ));
    }

    #[test]
    fn nan_weight() {
        assert!(matches!(
            Session::new(1000, 1.0, f64::NAN),
            Err(WorkoutError::InvalidValue { field: "weight", .. })
        ));
    }

    #[test]
    fn infinite_duration() {
        assert!(matches!(
            Session::new(1000, f64::INFINITY, 70.0),
            Err(WorkoutError::InvalidValue {
                field: "duration",
                ..
            })
        ));
    }

    #[test]
    fn tiny_duration_overflows_speed() {
        let running = Running::new(15000, 1e-320, 75.0).expect("positive duration");

        assert_eq!(
            running.show_training_info(),
            Err(WorkoutError::InvalidValue {
                field: "speed",
                value: f64::INFINITY,
                reason: "must be finite",
            })
        );
    }

    #[test]
    fn huge_weight_overflows_calories() {
        let swimming = Swimming::new(720, 1.0, 1e308, 25.0, 40).expect("finite weight");

        assert!(matches!(
            swimming.show_training_info(),
            Err(WorkoutError::InvalidValue {
                field: "calories",
                ..
            })
        ));
    }

    #[test]
    fn duration_in_minutes() {
        let session = Session::new(1000, 1.5, 70.0).expect("valid session");

        assert_eq!(session.duration_minutes(), 90.0);
    }
}
