//! The [`Scope`] context object.
//!
//! A scope owns an [`Engine`] and the [`Registry`] of models created or
//! imported through it. Registration only happens after the engine reports
//! [`Status::Ok`](crate::Status::Ok), so a failed call never leaves a cref
//! behind.

mod config;
mod registry;

pub use config::ScopeConfig;
pub use registry::Registry;

use std::path::Path;

use tracing::{debug, warn};
use uom::si::f64::Information;

use crate::{
    engine::Engine,
    error::{Operation, ScopeError},
    logging::{self, IntoLoggingLevel},
    model::Model,
};

/// Binds an [`Engine`] to the registry of models known to exist in it.
///
/// Every mutating operation takes `&mut self`; wrap the scope in a
/// [`Mutex`](std::sync::Mutex) to share it across threads.
#[derive(Debug, Default)]
pub struct Scope<E> {
    engine: E,
    registry: Registry,
}

impl<E: Engine> Scope<E> {
    /// Creates a scope with an empty registry.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            registry: Registry::default(),
        }
    }

    /// Creates a new, empty model named `cref`.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::Native`] if the engine rejects the model. The
    /// registry is left unchanged.
    pub fn new_model(&mut self, cref: &str) -> Result<Model, ScopeError> {
        let status = self.engine.new_model(cref);
        Operation::NewModel.check(status)?;

        self.registry.register(cref);
        debug!(cref, "created model");
        Ok(Model::new(cref))
    }

    /// Imports a model definition (e.g. an SSP file) from `path`.
    ///
    /// The returned handle is bound to the cref the engine derived for the
    /// imported model.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::Native`] if the import fails. The registry is left
    /// unchanged.
    pub fn import_file(&mut self, path: impl AsRef<Path>) -> Result<Model, ScopeError> {
        let path = path.as_ref();
        let (cref, status) = self.engine.import_file(path);
        Operation::ImportFile.check(status)?;

        self.registry.register(&cref);
        debug!(cref, path = %path.display(), "imported model");
        Ok(Model::new(cref))
    }

    /// Unloads the model `cref` from the engine and forgets it.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::Native`] if the engine fails to unload it. The
    /// registry is left unchanged.
    pub fn delete_model(&mut self, cref: &str) -> Result<(), ScopeError> {
        let status = self.engine.delete(cref);
        Operation::Delete.check(status)?;

        self.registry.unregister(cref);
        debug!(cref, "deleted model");
        Ok(())
    }

    /// Renames the model `cref` to `new_cref`.
    ///
    /// The registry entry keeps its position.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::Native`] if the engine rejects the rename. The
    /// registry is left unchanged.
    pub fn rename_model(&mut self, cref: &str, new_cref: &str) -> Result<Model, ScopeError> {
        let status = self.engine.rename(cref, new_cref);
        Operation::Rename.check(status)?;

        self.registry.rename(cref, new_cref);
        debug!(cref, new_cref, "renamed model");
        Ok(Model::new(new_cref))
    }

    /// Unloads every registered model in registration order.
    ///
    /// # Errors
    ///
    /// Stops at the first [`ScopeError`]; models not yet unloaded stay
    /// registered.
    pub fn unload_all(&mut self) -> Result<(), ScopeError> {
        let crefs: Vec<String> = self.registry.iter().map(str::to_owned).collect();
        for cref in crefs {
            self.delete_model(&cref)?;
        }
        Ok(())
    }

    /// Sets the directory the engine uses for temporary files.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::Native`] if the engine rejects the directory.
    pub fn set_temp_directory(&mut self, dir: impl AsRef<Path>) -> Result<(), ScopeError> {
        let status = self.engine.set_temp_directory(dir.as_ref());
        Operation::SetTempDirectory.check(status)
    }

    /// Passes a command line option (e.g. `--suppressPath=true`) to the engine.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::Native`] if the engine rejects the option.
    pub fn set_command_line_option(&mut self, option: &str) -> Result<(), ScopeError> {
        let status = self.engine.set_command_line_option(option);
        Operation::SetCommandLineOption.check(status)
    }

    /// Sets the engine's logging level.
    ///
    /// `level` must be integral; see [`IntoLoggingLevel`].
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::BadArgument`] without calling the engine if
    /// `level` is not integral, or [`ScopeError::Native`] if the engine
    /// rejects it.
    pub fn set_logging_level(&mut self, level: impl IntoLoggingLevel) -> Result<(), ScopeError> {
        let level = level.into_logging_level()?;
        let status = self.engine.set_logging_level(level.get());
        Operation::SetLoggingLevel.check(status)
    }

    /// Sets the maximum log file size.
    ///
    /// The engine's status for this call is not checked: a rejected size is
    /// logged and otherwise ignored.
    pub fn set_max_log_file_size(&mut self, size: Information) {
        let megabytes = logging::whole_megabytes(size);
        let status = self.engine.set_max_log_file_size(megabytes);
        if !status.is_ok() {
            warn!(
                operation = %Operation::SetMaxLogFileSize,
                %status,
                megabytes,
                "ignoring failed log file size update"
            );
        }
    }

    /// Redirects the engine's log to `path`.
    ///
    /// If `size` is positive, the maximum log file size is set afterwards via
    /// [`set_max_log_file_size`](Self::set_max_log_file_size), whose status is
    /// not checked.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::Native`] if the engine rejects the log file. The
    /// size is not applied in that case.
    pub fn set_log_file(
        &mut self,
        path: impl AsRef<Path>,
        size: Option<Information>,
    ) -> Result<(), ScopeError> {
        let status = self.engine.set_log_file(path.as_ref());
        Operation::SetLogFile.check(status)?;

        if let Some(size) = size.filter(|size| logging::is_positive(*size)) {
            self.set_max_log_file_size(size);
        }
        Ok(())
    }

    /// Applies every setting present in `config`.
    ///
    /// Settings are applied in field order through the regular operations.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScopeError`] encountered. Settings applied before
    /// the failure stay in effect.
    pub fn apply_config(&mut self, config: &ScopeConfig) -> Result<(), ScopeError> {
        if let Some(dir) = &config.temp_directory {
            self.set_temp_directory(dir)?;
        }
        for option in &config.command_line_options {
            self.set_command_line_option(option)?;
        }
        if let Some(level) = config.logging_level {
            self.set_logging_level(level)?;
        }
        match (&config.log_file, config.max_log_file_size()) {
            (Some(path), size) => self.set_log_file(path, size)?,
            (None, Some(size)) => self.set_max_log_file_size(size),
            (None, None) => {}
        }
        Ok(())
    }

    /// Returns a handle to the registered model `cref`, if any.
    pub fn model(&self, cref: &str) -> Option<Model> {
        if self.registry.contains(cref) {
            Some(Model::new(cref))
        } else {
            warn!(cref, "no model with this cref in the scope");
            None
        }
    }

    /// Iterates over registered model handles in registration order.
    pub fn models(&self) -> impl Iterator<Item = Model> {
        self.registry.iter().map(Model::new)
    }
}

impl<E> Scope<E> {
    /// Returns the crefs known to this scope.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Consumes the scope and returns its engine.
    pub fn into_engine(self) -> E {
        self.engine
    }
}
