//! Dispatch of raw sensor packages to workouts.
//!
//! A package is a workout type code with positional values:
//!
//! | Code  | Workout           | Values                                              |
//! |-------|-------------------|-----------------------------------------------------|
//! | `SWM` | [`Swimming`]      | action, duration, weight, pool length, pool laps    |
//! | `RUN` | [`Running`]       | action, duration, weight                            |
//! | `WLK` | [`SportsWalking`] | action, duration, weight, height                    |

use std::{fmt, str::FromStr};

use crate::{
    InfoMessage, Running, Session, SportsWalking, Swimming, Training, WorkoutError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WorkoutKind {
    #[cfg_attr(feature = "serde", serde(rename = "SWM"))]
    Swimming,
    #[cfg_attr(feature = "serde", serde(rename = "RUN"))]
    Running,
    #[cfg_attr(feature = "serde", serde(rename = "WLK"))]
    SportsWalking,
}

impl WorkoutKind {
    pub const ALL: [Self; 3] = [Self::Swimming, Self::Running, Self::SportsWalking];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Swimming => "SWM",
            Self::Running => "RUN",
            Self::SportsWalking => "WLK",
        }
    }

    /// Name printed in the summary line
    pub const fn label(self) -> &'static str {
        match self {
            Self::Swimming => "Swimming",
            Self::Running => "Running",
            Self::SportsWalking => "SportsWalking",
        }
    }

    /// Number of positional values the workout is built from
    pub const fn arity(self) -> usize {
        match self {
            Self::Swimming => 5,
            Self::Running => 3,
            Self::SportsWalking => 4,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|this| this.code() == code)
            .ok_or_else(|| WorkoutError::UnknownWorkoutType(code.to_owned()))
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Workout {
    Swimming(Swimming),
    Running(Running),
    SportsWalking(SportsWalking),
}

impl Workout {
    fn as_training(&self) -> &dyn Training {
        match self {
            Self::Swimming(this) => this,
            Self::Running(this) => this,
            Self::SportsWalking(this) => this,
        }
    }
}

impl Training for Workout {
    fn kind(&self) -> WorkoutKind {
        self.as_training().kind()
    }

    fn session(&self) -> &Session {
        self.as_training().session()
    }

    fn step_length_m(&self) -> f64 {
        self.as_training().step_length_m()
    }

    fn distance_km(&self) -> f64 {
        self.as_training().distance_km()
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.as_training().mean_speed_kmh()
    }

    fn spent_calories(&self) -> f64 {
        self.as_training().spent_calories()
    }
}

impl From<Swimming> for Workout {
    fn from(value: Swimming) -> Self {
        Self::Swimming(value)
    }
}

impl From<Running> for Workout {
    fn from(value: Running) -> Self {
        Self::Running(value)
    }
}

impl From<SportsWalking> for Workout {
    fn from(value: SportsWalking) -> Self {
        Self::SportsWalking(value)
    }
}

/// Build a workout from its type code and positional values.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let kind = code.parse::<WorkoutKind>()?;

    tracing::debug!(code, ?data, "Reading package");

    let workout: Workout = match (kind, data) {
        (WorkoutKind::Swimming, &[action, duration, weight, pool_length, pool_laps]) => {
            Swimming::new(
                count("action", action)?,
                duration,
                weight,
                pool_length,
                count("pool_laps", pool_laps)?,
            )?
            .into()
        }
        (WorkoutKind::Running, &[action, duration, weight]) => {
            Running::new(count("action", action)?, duration, weight)?.into()
        }
        (WorkoutKind::SportsWalking, &[action, duration, weight, height]) => {
            SportsWalking::new(count("action", action)?, duration, weight, height)?.into()
        }
        _ => {
            return Err(WorkoutError::ArityMismatch {
                kind,
                expected: kind.arity(),
                actual: data.len(),
            });
        }
    };

    Ok(workout)
}

/// Value that must be a whole non-negative number.
fn count(field: &'static str, value: f64) -> Result<u64, WorkoutError> {
    let reason = if !value.is_finite() {
        "must be finite"
    } else if value < 0.0 {
        "must not be negative"
    } else if value.fract() != 0.0 {
        "must be a whole number"
    } else if value >= u64::MAX as f64 {
        "is too large"
    } else {
        return Ok(value as u64);
    };

    Err(WorkoutError::InvalidValue {
        field,
        value,
        reason,
    })
}

/// Workout type code with raw values, e.g. `RUN:15000,1,75`.
#[derive(Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    pub code: String,
    pub data: Vec<f64>,
}

impl Package {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data,
        }
    }

    pub fn read(&self) -> Result<Workout, WorkoutError> {
        read_package(&self.code, &self.data).inspect_err(|e| {
            tracing::warn!(package = %self, error = %e, "Package rejected");
        })
    }
}

impl FromStr for Package {
    type Err = WorkoutError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: String| WorkoutError::MalformedPackage {
            input: input.to_owned(),
            reason,
        };

        let (code, values) = input
            .split_once(':')
            .ok_or_else(|| malformed("expected 'CODE:v1,v2,...'".to_owned()))?;

        let values = values.trim();
        let data = match values.is_empty() {
            true => Vec::new(),
            false => values
                .split(',')
                .map(|this| {
                    this.trim()
                        .parse::<f64>()
                        .map_err(|e| malformed(format!("'{}' is not a number: {e}", this.trim())))
                })
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(Self::new(code.trim(), data))
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.code)?;

        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }

        Ok(())
    }
}

/// Packages received from the sensors in the reference run.
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Summaries in package order. Stops at the first package which can't be read or summarized.
pub fn summarize<'a>(
    packages: impl IntoIterator<Item = &'a Package>,
) -> Result<Vec<InfoMessage>, WorkoutError> {
    packages
        .into_iter()
        .map(|this| this.read()?.show_training_info())
        .collect()
}
