use std::fmt;

use thiserror::Error;

use crate::status::Status;

/// Errors returned by [`Scope`](crate::Scope) operations.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ScopeError {
    /// The engine returned a status other than [`Status::Ok`].
    #[error("error {status}")]
    Native {
        /// The engine call that failed.
        operation: Operation,
        status: Status,
    },

    /// An argument was rejected before reaching the engine.
    #[error("bad argument: {value}")]
    BadArgument { value: String },
}

impl ScopeError {
    pub(crate) fn bad_argument(value: impl fmt::Display) -> Self {
        Self::BadArgument {
            value: value.to_string(),
        }
    }

    /// Returns the engine status if this is a [`ScopeError::Native`] failure.
    #[must_use]
    pub fn status(&self) -> Option<Status> {
        match self {
            Self::Native { status, .. } => Some(*status),
            Self::BadArgument { .. } => None,
        }
    }
}

/// Engine calls a [`Scope`](crate::Scope) forwards to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    NewModel,
    ImportFile,
    Delete,
    Rename,
    SetTempDirectory,
    SetCommandLineOption,
    SetLoggingLevel,
    SetMaxLogFileSize,
    SetLogFile,
}

impl Operation {
    /// Fails with [`ScopeError::Native`] unless `status` is [`Status::Ok`].
    pub(crate) fn check(self, status: Status) -> Result<(), ScopeError> {
        if status.is_ok() {
            Ok(())
        } else {
            Err(ScopeError::Native {
                operation: self,
                status,
            })
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NewModel => "newModel",
            Self::ImportFile => "importFile",
            Self::Delete => "delete",
            Self::Rename => "rename",
            Self::SetTempDirectory => "setTempDirectory",
            Self::SetCommandLineOption => "setCommandLineOption",
            Self::SetLoggingLevel => "setLoggingLevel",
            Self::SetMaxLogFileSize => "setMaxLogFileSize",
            Self::SetLogFile => "setLogFile",
        };
        f.write_str(name)
    }
}
