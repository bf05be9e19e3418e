//! Views (groups) and the view filter.
//!
//! A view is a named partition of a type's properties. Views are nominal and form a
//! hierarchy: a view may extend other views, and a property declared for a parent view
//! is visible whenever one of its descendants is requested.

use core::fmt;
use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// A named view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct View(String);

impl View {
    /// Creates a view with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The name of the view.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for View {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for View {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Serialize for View {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// The inheritance relation between views.
#[derive(Debug, Clone, Default)]
pub struct ViewHierarchy {
    parents: HashMap<View, Vec<View>>,
}

impl ViewHierarchy {
    /// Creates an empty hierarchy, in which every view is only assignable from itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares that `view` extends each of `parents`.
    pub fn declare<I, P>(&mut self, view: impl Into<View>, parents: I) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: Into<View>,
    {
        self.parents
            .entry(view.into())
            .or_default()
            .extend(parents.into_iter().map(Into::into));
        self
    }

    /// Whether `target` is `source` or one of its (transitive) parents.
    pub fn is_assignable_from(&self, target: &View, source: &View) -> bool {
        let mut pending = vec![source];
        let mut seen = HashSet::new();
        while let Some(view) = pending.pop() {
            if view == target {
                return true;
            }
            if !seen.insert(view) {
                continue;
            }
            if let Some(parents) = self.parents.get(view) {
                pending.extend(parents);
            }
        }

        false
    }
}

/// Decides whether a member declaring `declared` views is visible under `requested`.
///
/// Nothing requested or nothing declared always qualifies. Otherwise **every** declared
/// view must be assignable from **some** requested view.
pub fn qualifies(declared: &[View], requested: &[View], hierarchy: &ViewHierarchy) -> bool {
    if requested.is_empty() || declared.is_empty() {
        return true;
    }

    declared.iter().all(|declared| {
        requested
            .iter()
            .any(|requested| hierarchy.is_assignable_from(declared, requested))
    })
}
