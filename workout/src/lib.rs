//! # Workout
//!
//! Statistics for a finished workout: distance, mean speed and spent calories,
//! calculated from raw sensor readings.
//!
//! Supported workouts:
//!
//! - `SWM` - [`Swimming`]
//! - `RUN` - [`Running`]
//! - `WLK` - [`SportsWalking`]
//!
//! ```
//! use workout::{Training, read_package};
//!
//! let running = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//!
//! assert_eq!(
//!     running.show_training_info()?.get_message(),
//!     "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
//!      Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
//! );
//! # Ok::<(), workout::WorkoutError>(())
//! ```

mod error;
mod message;
mod package;
mod training;

pub use self::error::*;
pub use self::message::*;
pub use self::package::*;
pub use self::training::*;
