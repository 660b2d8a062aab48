#![cfg_attr(docsrs, feature(doc_cfg))]

//! # OMS Scope
//!
//! Typed bindings for creating, importing and configuring models in the
//! OMSimulator engine.
//!
//! ## Crate layout
//!
//! - [`scope`]: The [`Scope`] context object and its registry of known models.
//! - [`engine`]: The [`Engine`] capability trait every backend implements.
//! - [`status`]: The [`Status`] returned by each engine call.
//! - [`logging`]: Logging level and log file size arguments.
//!
//! ## How calls flow
//!
//! Every [`Scope`] operation forwards to its [`Engine`], compares the returned
//! [`Status`] against [`Status::Ok`], and either fails with a [`ScopeError`]
//! or returns a lightweight [`Model`] handle. The scope owns no simulation
//! logic; composition, scheduling and FMU/SSP handling live in the engine.
//!
//! ```
//! # use std::path::Path;
//! # use oms_scope::{Engine, Scope, Status};
//! # #[derive(Default)]
//! # struct Stub;
//! # impl Engine for Stub {
//! #     fn new_model(&mut self, _: &str) -> Status { Status::Ok }
//! #     fn import_file(&mut self, _: &Path) -> (String, Status) { (String::new(), Status::Error) }
//! #     fn delete(&mut self, _: &str) -> Status { Status::Ok }
//! #     fn rename(&mut self, _: &str, _: &str) -> Status { Status::Ok }
//! #     fn set_temp_directory(&mut self, _: &Path) -> Status { Status::Ok }
//! #     fn set_command_line_option(&mut self, _: &str) -> Status { Status::Ok }
//! #     fn set_logging_level(&mut self, _: i32) -> Status { Status::Ok }
//! #     fn set_max_log_file_size(&mut self, _: u64) -> Status { Status::Ok }
//! #     fn set_log_file(&mut self, _: &Path) -> Status { Status::Ok }
//! # }
//! let mut scope = Scope::new(Stub);
//!
//! let model = scope.new_model("sys").unwrap();
//! assert_eq!(model.cref(), "sys");
//! assert!(scope.registry().contains("sys"));
//!
//! let error = scope.import_file("model.ssp").unwrap_err();
//! assert_eq!(error.to_string(), "error ERROR");
//! ```
//!
//! ## Native backend
//!
//! With the `native` feature enabled, [`engine::native::NativeEngine`] loads
//! the OMSimulator shared library at runtime.

mod error;
mod model;

pub mod engine;
pub mod logging;
pub mod scope;
pub mod status;

pub use engine::Engine;
pub use error::{Operation, ScopeError};
pub use logging::{IntoLoggingLevel, LoggingLevel};
pub use model::Model;
pub use scope::{Registry, Scope, ScopeConfig};
pub use status::Status;
