#![expect(
    unsafe_code,
    reason = "dlopen, dlsym, and raw FFI calls into libOMSimulator"
)]

//! OMSimulator shared library backend.
//!
//! Loads `libOMSimulator` at runtime and forwards every [`Engine`] call to the
//! matching `oms_*` function of its C API.

mod error;

use std::{
    env,
    ffi::{CStr, CString, c_char, c_int, c_ulong},
    path::{Path, PathBuf},
    ptr,
};

use libloading::Library;
use tracing::{debug, error, info, warn};

use crate::{Engine, Operation, Scope, Status};

pub use error::NativeError;

/// Environment variable naming an explicit library path.
pub const LIBRARY_PATH_VAR: &str = "OMSIMULATOR_LIBRARY_PATH";

type CrefFn = unsafe extern "C" fn(*const c_char) -> c_int;

/// Resolved function pointers from the loaded library.
struct Api {
    new_model: CrefFn,
    import_file: unsafe extern "C" fn(*const c_char, *mut *mut c_char) -> c_int,
    delete: CrefFn,
    rename: unsafe extern "C" fn(*const c_char, *const c_char) -> c_int,
    set_temp_directory: CrefFn,
    set_command_line_option: CrefFn,
    set_logging_level: unsafe extern "C" fn(c_int) -> c_int,
    set_max_log_file_size: unsafe extern "C" fn(c_ulong),
    set_log_file: CrefFn,
    get_version: unsafe extern "C" fn() -> *const c_char,
    // Declared last so the pointers above never outlive the mapping on drop.
    _library: Library,
}

/// [`Engine`] backed by the OMSimulator shared library.
pub struct NativeEngine {
    api: Api,
    path: PathBuf,
}

impl std::fmt::Debug for NativeEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeEngine")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl NativeEngine {
    /// Loads the library, trying in order:
    ///
    /// 1. The path in [`LIBRARY_PATH_VAR`], if set.
    /// 2. The platform library name (`libOMSimulator.so`, `OMSimulator.dll`, ...)
    ///    through the system search path.
    ///
    /// # Errors
    ///
    /// Returns [`NativeError::NotFound`] if no candidate loads, or
    /// [`NativeError::Symbol`] if a loaded library lacks part of the C API.
    pub fn load() -> Result<Self, NativeError> {
        if let Some(explicit) = env::var_os(LIBRARY_PATH_VAR) {
            match Self::open(&explicit) {
                Ok(engine) => return Ok(engine),
                Err(e) => warn!("{LIBRARY_PATH_VAR}={explicit:?} set but failed: {e}"),
            }
        }

        let fallback = libloading::library_filename("OMSimulator");
        match Self::open(&fallback) {
            Ok(engine) => Ok(engine),
            Err(NativeError::Load { source, .. }) => {
                debug!("{fallback:?} not found on the search path: {source}");
                Err(NativeError::NotFound)
            }
            Err(e) => Err(e),
        }
    }

    /// Loads the library at `path` and resolves the C API.
    ///
    /// # Errors
    ///
    /// Returns [`NativeError::Load`] if the library cannot be opened, or
    /// [`NativeError::Symbol`] if a required function is missing.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, NativeError> {
        let path = path.as_ref();

        // SAFETY: loading the OMSimulator library runs its initializers, which
        // only set up the engine's own global state.
        let library = unsafe { Library::new(path) }.map_err(|source| NativeError::Load {
            path: path.to_owned(),
            source,
        })?;

        let api = Api {
            new_model: resolve(&library, "oms_newModel")?,
            import_file: resolve(&library, "oms_importFile")?,
            delete: resolve(&library, "oms_delete")?,
            rename: resolve(&library, "oms_rename")?,
            set_temp_directory: resolve(&library, "oms_setTempDirectory")?,
            set_command_line_option: resolve(&library, "oms_setCommandLineOption")?,
            set_logging_level: resolve(&library, "oms_setLoggingLevel")?,
            set_max_log_file_size: resolve(&library, "oms_setMaxLogFileSize")?,
            set_log_file: resolve(&library, "oms_setLogFile")?,
            get_version: resolve(&library, "oms_getVersion")?,
            _library: library,
        };

        let engine = Self {
            api,
            path: path.to_owned(),
        };
        info!("Loaded {} from {}", engine.version(), engine.path.display());
        Ok(engine)
    }

    /// Returns the engine's version string.
    #[must_use]
    pub fn version(&self) -> String {
        // SAFETY: `oms_getVersion` takes no arguments and returns a pointer to
        // a static string owned by the library.
        let version = unsafe { (self.api.get_version)() };
        if version.is_null() {
            return String::from("OMSimulator (unknown version)");
        }
        // SAFETY: non-null and NUL-terminated per the C API.
        unsafe { CStr::from_ptr(version) }
            .to_string_lossy()
            .into_owned()
    }

    /// Returns the path the library was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Calls a single-string function of the C API.
    fn call_with_str(&self, function: CrefFn, operation: Operation, value: &str) -> Status {
        let Some(value) = c_string(operation, value) else {
            return Status::Error;
        };
        // SAFETY: `value` is a valid C string that outlives the call.
        let code = unsafe { function(value.as_ptr()) };
        to_status(operation, code)
    }

    /// Calls a single-path function of the C API.
    fn call_with_path(&self, function: CrefFn, operation: Operation, path: &Path) -> Status {
        match path.to_str() {
            Some(path) => self.call_with_str(function, operation, path),
            None => {
                error!(%operation, path = %path.display(), "path is not valid UTF-8");
                Status::Error
            }
        }
    }
}

impl Engine for NativeEngine {
    fn new_model(&mut self, cref: &str) -> Status {
        self.call_with_str(self.api.new_model, Operation::NewModel, cref)
    }

    fn import_file(&mut self, path: &Path) -> (String, Status) {
        let operation = Operation::ImportFile;
        let Some(file) = path.to_str().and_then(|path| c_string(operation, path)) else {
            error!(%operation, path = %path.display(), "path cannot be passed to the engine");
            return (String::new(), Status::Error);
        };

        let mut cref: *mut c_char = ptr::null_mut();
        // SAFETY: `file` outlives the call and `cref` is a valid out pointer.
        // The engine stores a pointer to a string it owns; it is copied below
        // and never freed here.
        let code = unsafe { (self.api.import_file)(file.as_ptr(), &raw mut cref) };
        let status = to_status(operation, code);

        let cref = if cref.is_null() {
            String::new()
        } else {
            // SAFETY: non-null and NUL-terminated per the C API.
            unsafe { CStr::from_ptr(cref) }
                .to_string_lossy()
                .into_owned()
        };
        (cref, status)
    }

    fn delete(&mut self, cref: &str) -> Status {
        self.call_with_str(self.api.delete, Operation::Delete, cref)
    }

    fn rename(&mut self, cref: &str, new_cref: &str) -> Status {
        let operation = Operation::Rename;
        let (Some(cref), Some(new_cref)) = (
            c_string(operation, cref),
            c_string(operation, new_cref),
        ) else {
            return Status::Error;
        };
        // SAFETY: both strings are valid C strings that outlive the call.
        let code = unsafe { (self.api.rename)(cref.as_ptr(), new_cref.as_ptr()) };
        to_status(operation, code)
    }

    fn set_temp_directory(&mut self, dir: &Path) -> Status {
        self.call_with_path(
            self.api.set_temp_directory,
            Operation::SetTempDirectory,
            dir,
        )
    }

    fn set_command_line_option(&mut self, option: &str) -> Status {
        self.call_with_str(
            self.api.set_command_line_option,
            Operation::SetCommandLineOption,
            option,
        )
    }

    fn set_logging_level(&mut self, level: i32) -> Status {
        // SAFETY: plain integer argument.
        let code = unsafe { (self.api.set_logging_level)(level) };
        to_status(Operation::SetLoggingLevel, code)
    }

    /// `oms_setMaxLogFileSize` returns nothing, so this always reports OK.
    fn set_max_log_file_size(&mut self, megabytes: u64) -> Status {
        let size = c_ulong::try_from(megabytes).unwrap_or(c_ulong::MAX);
        // SAFETY: plain integer argument.
        unsafe { (self.api.set_max_log_file_size)(size) };
        Status::Ok
    }

    fn set_log_file(&mut self, path: &Path) -> Status {
        self.call_with_path(self.api.set_log_file, Operation::SetLogFile, path)
    }
}

impl Scope<NativeEngine> {
    /// Creates a scope backed by [`NativeEngine::load`].
    ///
    /// # Errors
    ///
    /// Returns [`NativeError`] if the library cannot be loaded.
    pub fn native() -> Result<Self, NativeError> {
        NativeEngine::load().map(Scope::new)
    }
}

/// Resolves `name` from `library` as a function pointer of type `T`.
fn resolve<T: Copy>(library: &Library, name: &'static str) -> Result<T, NativeError> {
    // SAFETY: every call site pairs `name` with the signature declared for it
    // in OMSimulator.h.
    let symbol = unsafe { library.get::<T>(name.as_bytes()) }
        .map_err(|source| NativeError::Symbol { name, source })?;
    Ok(*symbol)
}

fn c_string(operation: Operation, value: &str) -> Option<CString> {
    match CString::new(value) {
        Ok(value) => Some(value),
        Err(_) => {
            error!(%operation, value, "argument contains an interior NUL byte");
            None
        }
    }
}

fn to_status(operation: Operation, code: c_int) -> Status {
    Status::from_raw(code).unwrap_or_else(|| {
        warn!(%operation, code, "engine returned an unknown status code");
        Status::Fatal
    })
}
