//! Capability interface to the simulation engine.
//!
//! A [`Scope`](crate::Scope) never talks to the engine directly. It calls an
//! [`Engine`] implementation, which makes it possible to swap the native
//! library for a stub in tests or for another backend.

#[cfg(feature = "native")]
#[cfg_attr(docsrs, doc(cfg(feature = "native")))]
pub mod native;

#[cfg(test)]
pub(crate) mod test_support;

use std::path::Path;

use crate::status::Status;

/// Calls exposed by the simulation engine.
///
/// Each call blocks until the engine returns and reports its outcome as a
/// [`Status`]. Implementors do not track which models exist; the registry is
/// owned by [`Scope`](crate::Scope).
pub trait Engine {
    /// Creates a new, empty model named `cref`.
    fn new_model(&mut self, cref: &str) -> Status;

    /// Loads a model definition from `path`.
    ///
    /// Returns the cref the engine derived for the imported model together
    /// with the call's status. The cref is meaningless unless the status is
    /// [`Status::Ok`].
    fn import_file(&mut self, path: &Path) -> (String, Status);

    /// Unloads the model `cref`.
    fn delete(&mut self, cref: &str) -> Status;

    /// Renames the model `cref` to `new_cref`.
    fn rename(&mut self, cref: &str, new_cref: &str) -> Status;

    fn set_temp_directory(&mut self, dir: &Path) -> Status;

    fn set_command_line_option(&mut self, option: &str) -> Status;

    fn set_logging_level(&mut self, level: i32) -> Status;

    /// Sets the maximum log file size in megabytes.
    fn set_max_log_file_size(&mut self, megabytes: u64) -> Status;

    fn set_log_file(&mut self, path: &Path) -> Status;
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn new_model(&mut self, cref: &str) -> Status {
        (**self).new_model(cref)
    }

    fn import_file(&mut self, path: &Path) -> (String, Status) {
        (**self).import_file(path)
    }

    fn delete(&mut self, cref: &str) -> Status {
        (**self).delete(cref)
    }

    fn rename(&mut self, cref: &str, new_cref: &str) -> Status {
        (**self).rename(cref, new_cref)
    }

    fn set_temp_directory(&mut self, dir: &Path) -> Status {
        (**self).set_temp_directory(dir)
    }

    fn set_command_line_option(&mut self, option: &str) -> Status {
        (**self).set_command_line_option(option)
    }

    fn set_logging_level(&mut self, level: i32) -> Status {
        (**self).set_logging_level(level)
    }

    fn set_max_log_file_size(&mut self, megabytes: u64) -> Status {
        (**self).set_max_log_file_size(megabytes)
    }

    fn set_log_file(&mut self, path: &Path) -> Status {
        (**self).set_log_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{
        Operation, Scope,
        engine::test_support::{Call, RecordingEngine},
    };

    #[test]
    fn boxed_engines_forward_every_call() {
        let boxed: Box<dyn Engine> = Box::new(RecordingEngine::default());
        let mut scope = Scope::new(boxed);

        scope.new_model("sys").unwrap();
        scope.set_command_line_option("--suppressPath=true").unwrap();
        assert!(scope.registry().contains("sys"));
    }

    #[test]
    fn recording_engine_reports_configured_failures() {
        let mut engine = RecordingEngine::default().failing(Operation::Rename, Status::Discard);

        assert_eq!(engine.rename("a", "b"), Status::Discard);
        assert_eq!(engine.delete("a"), Status::Ok);
        assert_eq!(
            engine.calls(),
            [
                Call::Rename("a".into(), "b".into()),
                Call::Delete("a".into())
            ]
        );
    }
}
