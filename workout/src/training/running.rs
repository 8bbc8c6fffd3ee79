use super::{M_IN_KM, Session, Training};
use crate::{WorkoutError, WorkoutKind};

const SPEED_MULTIPLIER: f64 = 18.0;
const SPEED_SHIFT: f64 = 20.0;

/// Running workout.
///
/// ```notrust
/// calories = (18 * speed - 20) * weight / 1000 * duration_minutes
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Running {
    session: Session,
}

impl Running {
    pub fn new(action: u64, duration_hours: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            session: Session::new(action, duration_hours, weight_kg)?,
        })
    }
}

impl Training for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        (SPEED_MULTIPLIER * self.mean_speed_kmh() - SPEED_SHIFT) * self.session.weight_kg()
            / M_IN_KM
            * self.session.duration_minutes()
    }
}
