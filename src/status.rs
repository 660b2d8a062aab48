//! Outcome of a single engine call.

use std::fmt;

/// Status returned by every [`Engine`](crate::Engine) call.
///
/// Only [`Status::Ok`] signals success. All other values are treated the same
/// way by [`Scope`](crate::Scope): the call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Warning,
    Discard,
    Error,
    Fatal,
    Pending,
}

impl Status {
    /// Converts a raw status code from the engine's C API.
    ///
    /// Returns `None` for codes outside `0..=5`.
    #[must_use]
    pub fn from_raw(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Ok),
            1 => Some(Self::Warning),
            2 => Some(Self::Discard),
            3 => Some(Self::Error),
            4 => Some(Self::Fatal),
            5 => Some(Self::Pending),
            _ => None,
        }
    }

    /// Returns the raw status code used by the engine's C API.
    #[must_use]
    pub fn raw(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Discard => 2,
            Self::Error => 3,
            Self::Fatal => 4,
            Self::Pending => 5,
        }
    }

    /// Returns `true` if this is [`Status::Ok`].
    #[must_use]
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Discard => "DISCARD",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
            Self::Pending => "PENDING",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_codes_follow_the_c_api() {
        for code in 0..=5 {
            let status = Status::from_raw(code).unwrap();
            assert_eq!(status.raw(), code);
        }
        assert_eq!(Status::from_raw(0), Some(Status::Ok));
        assert_eq!(Status::from_raw(3), Some(Status::Error));
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert_eq!(Status::from_raw(-1), None);
        assert_eq!(Status::from_raw(6), None);
    }

    #[test]
    fn only_ok_is_success() {
        assert!(Status::Ok.is_ok());
        assert!(!Status::Warning.is_ok());
        assert!(!Status::Discard.is_ok());
        assert!(!Status::Pending.is_ok());
    }

    #[test]
    fn displays_upper_case_names() {
        assert_eq!(Status::Ok.to_string(), "OK");
        assert_eq!(Status::Fatal.to_string(), "FATAL");
    }
}
