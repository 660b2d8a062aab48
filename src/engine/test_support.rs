use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::{Engine, Operation, Status};

/// A call received by a [`RecordingEngine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    NewModel(String),
    ImportFile(PathBuf),
    Delete(String),
    Rename(String, String),
    SetTempDirectory(PathBuf),
    SetCommandLineOption(String),
    SetLoggingLevel(i32),
    SetMaxLogFileSize(u64),
    SetLogFile(PathBuf),
}

/// Engine stub that records every call and answers with a configured status.
///
/// Calls succeed unless a failure was configured for their [`Operation`].
/// Imported files yield their file stem as cref.
#[derive(Debug, Default)]
pub(crate) struct RecordingEngine {
    calls: Vec<Call>,
    failures: HashMap<Operation, Status>,
}

impl RecordingEngine {
    /// Makes every call of `operation` return `status`.
    pub(crate) fn failing(mut self, operation: Operation, status: Status) -> Self {
        self.failures.insert(operation, status);
        self
    }

    pub(crate) fn calls(&self) -> &[Call] {
        &self.calls
    }

    fn record(&mut self, call: Call, operation: Operation) -> Status {
        self.calls.push(call);
        self.failures.get(&operation).copied().unwrap_or(Status::Ok)
    }
}

impl Engine for RecordingEngine {
    fn new_model(&mut self, cref: &str) -> Status {
        self.record(Call::NewModel(cref.to_owned()), Operation::NewModel)
    }

    fn import_file(&mut self, path: &Path) -> (String, Status) {
        let cref = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let status = self.record(Call::ImportFile(path.to_owned()), Operation::ImportFile);
        (cref, status)
    }

    fn delete(&mut self, cref: &str) -> Status {
        self.record(Call::Delete(cref.to_owned()), Operation::Delete)
    }

    fn rename(&mut self, cref: &str, new_cref: &str) -> Status {
        self.record(
            Call::Rename(cref.to_owned(), new_cref.to_owned()),
            Operation::Rename,
        )
    }

    fn set_temp_directory(&mut self, dir: &Path) -> Status {
        self.record(
            Call::SetTempDirectory(dir.to_owned()),
            Operation::SetTempDirectory,
        )
    }

    fn set_command_line_option(&mut self, option: &str) -> Status {
        self.record(
            Call::SetCommandLineOption(option.to_owned()),
            Operation::SetCommandLineOption,
        )
    }

    fn set_logging_level(&mut self, level: i32) -> Status {
        self.record(Call::SetLoggingLevel(level), Operation::SetLoggingLevel)
    }

    fn set_max_log_file_size(&mut self, megabytes: u64) -> Status {
        self.record(
            Call::SetMaxLogFileSize(megabytes),
            Operation::SetMaxLogFileSize,
        )
    }

    fn set_log_file(&mut self, path: &Path) -> Status {
        self.record(Call::SetLogFile(path.to_owned()), Operation::SetLogFile)
    }
}
