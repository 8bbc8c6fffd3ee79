use super::{M_IN_KM, STROKE_M, Session, Training, non_negative};
use crate::{WorkoutError, WorkoutKind};

const SPEED_SHIFT: f64 = 1.1;
const WEIGHT_MULTIPLIER: f64 = 2.0;

/// Swimming workout.
///
/// Distance is counted from strokes, but speed comes from the pool:
///
/// ```notrust
/// speed    = pool_length * pool_laps / 1000 / duration
/// calories = (speed + 1.1) * 2 * weight
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Swimming {
    session: Session,
    pool_length_m: f64,
    pool_laps: u64,
}

impl Swimming {
    /// # Params
    /// - `pool_length_m` - length of pool in meters
    /// - `pool_laps` - how many times the pool was crossed
    pub fn new(
        action: u64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u64,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            session: Session::new(action, duration_hours, weight_kg)?,
            pool_length_m: non_negative("pool_length", pool_length_m)?,
            pool_laps,
        })
    }

    pub const fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    pub const fn pool_laps(&self) -> u64 {
        self.pool_laps
    }
}

impl Training for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn step_length_m(&self) -> f64 {
        STROKE_M
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_laps as f64 / M_IN_KM / self.session.duration_hours()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + SPEED_SHIFT) * WEIGHT_MULTIPLIER * self.session.weight_kg()
    }
}
