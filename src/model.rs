use std::fmt;

/// Handle to a model that the engine created or imported.
///
/// A handle only carries the model's cref. It does not keep the engine or the
/// owning [`Scope`](crate::Scope) borrowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Model {
    cref: String,
}

impl Model {
    pub(crate) fn new(cref: impl Into<String>) -> Self {
        Self { cref: cref.into() }
    }

    /// Returns the cref this handle is bound to.
    #[must_use]
    pub fn cref(&self) -> &str {
        &self.cref
    }

    /// Consumes the handle and returns its cref.
    #[must_use]
    pub fn into_cref(self) -> String {
        self.cref
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cref)
    }
}

impl AsRef<str> for Model {
    fn as_ref(&self) -> &str {
        &self.cref
    }
}
