/// Ordered set of crefs a [`Scope`](super::Scope) knows to exist in its engine.
///
/// Crefs are kept in the order they were registered. Each cref appears at
/// most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    crefs: Vec<String>,
}

impl Registry {
    /// Appends `cref` unless it is already registered.
    ///
    /// Returns `true` if the cref was added.
    pub(crate) fn register(&mut self, cref: &str) -> bool {
        if self.contains(cref) {
            return false;
        }
        self.crefs.push(cref.to_owned());
        true
    }

    /// Removes `cref`, returning `true` if it was registered.
    pub(crate) fn unregister(&mut self, cref: &str) -> bool {
        let before = self.crefs.len();
        self.crefs.retain(|known| known != cref);
        self.crefs.len() != before
    }

    /// Replaces `cref` with `new_cref` in place.
    ///
    /// A cref that was never registered is registered under its new name.
    pub(crate) fn rename(&mut self, cref: &str, new_cref: &str) {
        if cref == new_cref {
            self.register(cref);
            return;
        }
        if self.contains(new_cref) {
            self.unregister(cref);
            return;
        }
        match self.crefs.iter_mut().find(|known| *known == cref) {
            Some(known) => new_cref.clone_into(known),
            None => {
                self.crefs.push(new_cref.to_owned());
            }
        }
    }

    #[must_use]
    pub fn contains(&self, cref: &str) -> bool {
        self.crefs.iter().any(|known| known == cref)
    }

    /// Iterates over registered crefs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.crefs.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.crefs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.crefs.is_empty()
    }
}
