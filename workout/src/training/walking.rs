use super::{Session, Training, non_negative};
use crate::{WorkoutError, WorkoutKind};

const WEIGHT_MULTIPLIER: f64 = 0.035;
const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Sports walking workout.
///
/// ```notrust
/// calories = (0.035 * weight + floor(speed^2 / height) * 0.029 * weight) * duration_minutes
/// ```
///
/// `speed^2 / height` is floored, so for usual walking speeds only the weight term contributes.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SportsWalking {
    session: Session,
    height_cm: f64,
}

impl SportsWalking {
    pub fn new(
        action: u64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        let session = Session::new(action, duration_hours, weight_kg)?;

        if height_cm == 0.0 {
            return Err(WorkoutError::DivisionByZero { field: "height" });
        }

        Ok(Self {
            session,
            height_cm: non_negative("height", height_cm)?,
        })
    }

    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Training for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.session.weight_kg();
        let speed_factor = floor_div(self.mean_speed_kmh().powi(2), self.height_cm);

        (WEIGHT_MULTIPLIER * weight + speed_factor * SPEED_HEIGHT_MULTIPLIER * weight)
            * self.session.duration_minutes()
    }
}

/// Floor division of positive numbers which takes the quotient from the exact
/// remainder, so `x / y` rounding up to a whole number doesn't leak into the result.
fn floor_div(x: f64, y: f64) -> f64 {
    let div = (x - x % y) / y;
    let floor = div.floor();

    match div - floor > 0.5 {
        true => floor + 1.0,
        false => floor,
    }
}
