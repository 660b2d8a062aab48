use std::path::PathBuf;

use thiserror::Error;

/// Errors returned while loading the [`NativeEngine`](super::NativeEngine).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NativeError {
    #[error("failed to load {}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },

    #[error("library does not export `{name}`")]
    Symbol {
        name: &'static str,
        #[source]
        source: libloading::Error,
    },

    #[error("OMSimulator library not found; set {} to its path", super::LIBRARY_PATH_VAR)]
    NotFound,
}
