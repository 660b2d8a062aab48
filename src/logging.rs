//! Arguments for the engine's logging setters.
//!
//! The engine takes an integral logging level and a maximum log file size in
//! whole megabytes. This module provides typed versions of both:
//!
//! - [`LoggingLevel`] and the [`IntoLoggingLevel`] conversion used by
//!   [`Scope::set_logging_level`](crate::Scope::set_logging_level), which
//!   rejects non-integral input before it reaches the engine.
//! - [`whole_megabytes`], which turns a [`uom`] information quantity into the
//!   size the engine expects.

use num_traits::ToPrimitive;
use serde::Deserialize;
use uom::si::{f64::Information, information::megabyte};

use crate::error::ScopeError;

/// Verbosity of the engine's own log output.
///
/// The engine defines `0` (default), `1` (debug) and `2` (debug and trace),
/// but accepts any integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(transparent)]
pub struct LoggingLevel(i32);

impl LoggingLevel {
    pub const DEFAULT: Self = Self(0);
    pub const DEBUG: Self = Self(1);
    pub const TRACE: Self = Self(2);

    #[must_use]
    pub const fn new(level: i32) -> Self {
        Self(level)
    }

    /// Returns the integer passed to the engine.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

/// Conversion into a [`LoggingLevel`] that may reject the input.
///
/// Integers convert as long as they fit in an `i32`. Floats and strings
/// convert only when they denote an integral value.
pub trait IntoLoggingLevel {
    /// Converts `self` into a [`LoggingLevel`].
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::BadArgument`] if `self` is not integral.
    fn into_logging_level(self) -> Result<LoggingLevel, ScopeError>;
}

impl IntoLoggingLevel for LoggingLevel {
    fn into_logging_level(self) -> Result<LoggingLevel, ScopeError> {
        Ok(self)
    }
}

impl IntoLoggingLevel for i32 {
    fn into_logging_level(self) -> Result<LoggingLevel, ScopeError> {
        Ok(LoggingLevel(self))
    }
}

impl IntoLoggingLevel for i64 {
    fn into_logging_level(self) -> Result<LoggingLevel, ScopeError> {
        self.to_i32()
            .map(LoggingLevel)
            .ok_or_else(|| ScopeError::bad_argument(self))
    }
}

impl IntoLoggingLevel for u32 {
    fn into_logging_level(self) -> Result<LoggingLevel, ScopeError> {
        self.to_i32()
            .map(LoggingLevel)
            .ok_or_else(|| ScopeError::bad_argument(self))
    }
}

impl IntoLoggingLevel for f64 {
    fn into_logging_level(self) -> Result<LoggingLevel, ScopeError> {
        if self.fract() != 0.0 {
            return Err(ScopeError::bad_argument(self));
        }
        // `fract` is NaN for NaN and infinities, so only range failures reach here.
        self.to_i32()
            .map(LoggingLevel)
            .ok_or_else(|| ScopeError::bad_argument(self))
    }
}

impl IntoLoggingLevel for f32 {
    fn into_logging_level(self) -> Result<LoggingLevel, ScopeError> {
        f64::from(self)
            .into_logging_level()
            .map_err(|_| ScopeError::bad_argument(self))
    }
}

impl IntoLoggingLevel for &str {
    fn into_logging_level(self) -> Result<LoggingLevel, ScopeError> {
        self.trim()
            .parse::<i32>()
            .map(LoggingLevel)
            .map_err(|_| ScopeError::bad_argument(self))
    }
}

impl IntoLoggingLevel for String {
    fn into_logging_level(self) -> Result<LoggingLevel, ScopeError> {
        self.as_str().into_logging_level()
    }
}

/// Returns `true` if `size` is strictly greater than zero bytes.
pub(crate) fn is_positive(size: Information) -> bool {
    size.get::<megabyte>() > 0.0
}

/// Converts `size` to the whole number of megabytes the engine expects.
///
/// Fractional megabytes round up. Negative or non-finite sizes become zero.
#[must_use]
pub fn whole_megabytes(size: Information) -> u64 {
    let megabytes = size.get::<megabyte>();
    if !megabytes.is_finite() {
        return 0;
    }
    megabytes.max(0.0).ceil().to_u64().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::information::{byte, kilobyte};

    #[test]
    fn integers_convert() {
        assert_eq!(2_i32.into_logging_level().unwrap(), LoggingLevel::TRACE);
        assert_eq!(1_i64.into_logging_level().unwrap(), LoggingLevel::DEBUG);
        assert_eq!(0_u32.into_logging_level().unwrap(), LoggingLevel::DEFAULT);
    }

    #[test]
    fn out_of_range_integers_are_rejected() {
        let error = i64::MAX.into_logging_level().unwrap_err();
        assert_eq!(error, ScopeError::bad_argument(i64::MAX));
        assert!(u32::MAX.into_logging_level().is_err());
    }

    #[test]
    fn integral_floats_convert() {
        assert_eq!(1.0_f64.into_logging_level().unwrap(), LoggingLevel::DEBUG);
        assert_eq!((-3.0_f32).into_logging_level().unwrap().get(), -3);
    }

    #[test]
    fn non_integral_floats_are_rejected() {
        let error = 2.5_f64.into_logging_level().unwrap_err();
        assert_eq!(error.to_string(), "bad argument: 2.5");

        assert!(f64::NAN.into_logging_level().is_err());
        assert!(f64::INFINITY.into_logging_level().is_err());
        assert!(0.25_f32.into_logging_level().is_err());
    }

    #[test]
    fn strings_must_hold_integers() {
        assert_eq!(" 2 ".into_logging_level().unwrap(), LoggingLevel::TRACE);
        assert_eq!(
            String::from("1").into_logging_level().unwrap(),
            LoggingLevel::DEBUG
        );

        let error = "debug".into_logging_level().unwrap_err();
        assert_eq!(error.to_string(), "bad argument: debug");
    }

    #[test]
    fn megabytes_round_up() {
        assert_eq!(whole_megabytes(Information::new::<megabyte>(5.0)), 5);
        assert_eq!(whole_megabytes(Information::new::<megabyte>(2.1)), 3);
        assert_eq!(whole_megabytes(Information::new::<kilobyte>(1.0)), 1);
        assert_eq!(whole_megabytes(Information::new::<byte>(0.0)), 0);
    }

    #[test]
    fn invalid_sizes_become_zero() {
        assert_eq!(whole_megabytes(Information::new::<megabyte>(-4.0)), 0);
        assert_eq!(whole_megabytes(Information::new::<megabyte>(f64::NAN)), 0);
    }

    #[test]
    fn positivity() {
        assert!(is_positive(Information::new::<byte>(1.0)));
        assert!(!is_positive(Information::new::<byte>(0.0)));
        assert!(!is_positive(Information::new::<megabyte>(-1.0)));
    }
}
