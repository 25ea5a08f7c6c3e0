//! Validation group filtering
//!
//! A constraint annotation may list the groups it belongs to. Callers pass a
//! [`GroupFilter`] naming the groups to ignore; an annotation is active
//! unless one of its groups is ignored.

use crate::declarations::{AnnotationMirror, AnnotationValue};
use std::collections::BTreeSet;

/// Name of the attribute listing validation groups
pub const GROUPS_ATTRIBUTE: &str = "groups";

/// Set of validation groups to ignore
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupFilter {
    ignored: BTreeSet<String>,
}

impl GroupFilter {
    /// A filter ignoring nothing
    pub fn none() -> Self {
        Self::default()
    }

    /// A filter ignoring the given groups (qualified class names)
    pub fn ignoring<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignored: groups.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a group is ignored
    pub fn is_ignored(&self, group: &str) -> bool {
        self.ignored.contains(group)
    }

    /// Whether no group is ignored
    pub fn is_empty(&self) -> bool {
        self.ignored.is_empty()
    }

    /// Whether an annotation is active under this filter
    pub fn is_active(&self, mirror: &AnnotationMirror) -> bool {
        if self.is_empty() {
            return true;
        }

        !validation_groups(mirror)
            .iter()
            .any(|group| self.is_ignored(group))
    }
}

/// Qualified names of the groups an annotation declares
///
/// Absent or malformed `groups` attributes yield no groups.
pub fn validation_groups(mirror: &AnnotationMirror) -> Vec<String> {
    match mirror.value(GROUPS_ATTRIBUTE) {
        Some(value) => value
            .as_list()
            .into_iter()
            .filter_map(AnnotationValue::as_class)
            .map(|group| group.trim().to_string())
            .collect(),
        None => Vec::new(),
    }
}
