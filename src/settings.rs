//! Run settings
//!
//! One [`Settings`] value configures a generation run: which validation
//! groups to ignore and how `@Max`/`@Min` are read on string types. Settings
//! load from JSON; every field is optional.

use crate::error::Result;
use crate::types::{KnownXmlType, XmlType};
use crate::validation::GroupFilter;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Which base types turn `@Max`/`@Min` into length facets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthBoundPolicy {
    /// Only `xs:string` and `xs:normalizedString`
    #[default]
    Strict,
    /// Every known string-like type (token, Name, NCName, ID, ...)
    StringLike,
}

impl LengthBoundPolicy {
    /// Whether bounds on this base type limit length rather than value
    pub fn uses_length_facets(&self, base: &XmlType) -> bool {
        let Some(known) = base.as_known() else {
            return false;
        };

        match self {
            LengthBoundPolicy::Strict => {
                matches!(known, KnownXmlType::String | KnownXmlType::NormalizedString)
            }
            LengthBoundPolicy::StringLike => known.is_string_like(),
        }
    }
}

/// Settings for a generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Validation groups whose constraints are left out
    pub ignored_validation_groups: BTreeSet<String>,

    /// How `@Max`/`@Min` map onto facets
    pub length_bound_policy: LengthBoundPolicy,

    /// Whether to report facets the base type does not admit
    pub report_inapplicable_facets: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ignored_validation_groups: BTreeSet::new(),
            length_bound_policy: LengthBoundPolicy::Strict,
            report_inapplicable_facets: true,
        }
    }
}

impl Settings {
    /// Create settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Ignore a validation group
    pub fn with_ignored_group(mut self, group: impl Into<String>) -> Self {
        self.ignored_validation_groups.insert(group.into());
        self
    }

    /// Set the length-bound policy
    pub fn with_length_bound_policy(mut self, policy: LengthBoundPolicy) -> Self {
        self.length_bound_policy = policy;
        self
    }

    /// Set whether inapplicable facets are reported
    pub fn with_report_inapplicable_facets(mut self, report: bool) -> Self {
        self.report_inapplicable_facets = report;
        self
    }

    /// The group filter for extraction calls
    pub fn group_filter(&self) -> GroupFilter {
        GroupFilter::ignoring(self.ignored_validation_groups.iter().cloned())
    }
}
