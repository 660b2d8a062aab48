use std::path::PathBuf;

use serde::Deserialize;
use uom::si::{f64::Information, information::megabyte};

use crate::logging::LoggingLevel;

/// Engine-wide settings applied through [`Scope::apply_config`](super::Scope::apply_config).
///
/// Every field is optional. Unset fields leave the engine's default in place.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScopeConfig {
    /// Directory for the engine's temporary files.
    pub temp_directory: Option<PathBuf>,

    /// Engine command line options, applied in order.
    pub command_line_options: Vec<String>,

    pub logging_level: Option<LoggingLevel>,

    /// File the engine logs to instead of standard output.
    pub log_file: Option<PathBuf>,

    /// Maximum log file size in megabytes.
    pub max_log_file_size_mb: Option<f64>,
}

impl ScopeConfig {
    /// Returns the configured maximum log file size, if any.
    #[must_use]
    pub fn max_log_file_size(&self) -> Option<Information> {
        self.max_log_file_size_mb.map(Information::new::<megabyte>)
    }
}
