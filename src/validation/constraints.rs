//! Bean Validation constraints
//!
//! A [`Constraint`] is a classified validation rule; each variant carries the
//! typed parameters of its annotation. [`ConstraintKind::ALL`] fixes the
//! order in which kinds are collected.

use serde::Serialize;
use std::fmt;

/// Package holding the standard constraint annotations
pub const CONSTRAINTS_PACKAGE: &str = "javax.validation.constraints";

/// Kind of a constraint, independent of its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum ConstraintKind {
    /// `@Null`
    Null,
    /// `@NotNull`
    NotNull,
    /// `@AssertFalse`
    False,
    /// `@AssertTrue`
    True,
    /// `@DecimalMax`
    DecimalMax,
    /// `@DecimalMin`
    DecimalMin,
    /// `@Digits`
    Digits,
    /// `@Future`
    Future,
    /// `@Max`
    Max,
    /// `@Min`
    Min,
    /// `@Past`
    Past,
    /// `@Pattern`
    Regexp,
    /// `@Size`
    Size,
}

impl ConstraintKind {
    /// All kinds, in collection priority order
    pub const ALL: [ConstraintKind; 13] = [
        ConstraintKind::Null,
        ConstraintKind::NotNull,
        ConstraintKind::False,
        ConstraintKind::True,
        ConstraintKind::DecimalMax,
        ConstraintKind::DecimalMin,
        ConstraintKind::Digits,
        ConstraintKind::Future,
        ConstraintKind::Max,
        ConstraintKind::Min,
        ConstraintKind::Past,
        ConstraintKind::Regexp,
        ConstraintKind::Size,
    ];

    /// Qualified name of the annotation type expressing this kind
    pub fn annotation_name(&self) -> &'static str {
        match self {
            ConstraintKind::Null => "javax.validation.constraints.Null",
            ConstraintKind::NotNull => "javax.validation.constraints.NotNull",
            ConstraintKind::False => "javax.validation.constraints.AssertFalse",
            ConstraintKind::True => "javax.validation.constraints.AssertTrue",
            ConstraintKind::DecimalMax => "javax.validation.constraints.DecimalMax",
            ConstraintKind::DecimalMin => "javax.validation.constraints.DecimalMin",
            ConstraintKind::Digits => "javax.validation.constraints.Digits",
            ConstraintKind::Future => "javax.validation.constraints.Future",
            ConstraintKind::Max => "javax.validation.constraints.Max",
            ConstraintKind::Min => "javax.validation.constraints.Min",
            ConstraintKind::Past => "javax.validation.constraints.Past",
            ConstraintKind::Regexp => "javax.validation.constraints.Pattern",
            ConstraintKind::Size => "javax.validation.constraints.Size",
        }
    }

    /// Look up the kind expressed by an annotation type
    pub fn from_annotation_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.annotation_name() == name)
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A validation rule extracted from a declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum Constraint {
    /// Value must be null
    Null,
    /// Value is required
    NotNull,
    /// Value must be false
    False,
    /// Value must be true
    True,
    /// Upper decimal bound
    DecimalMax {
        /// Bound, as written in the annotation
        value: String,
        /// Whether the bound itself is allowed
        inclusive: bool,
    },
    /// Lower decimal bound
    DecimalMin {
        /// Bound, as written in the annotation
        value: String,
        /// Whether the bound itself is allowed
        inclusive: bool,
    },
    /// Digit counts
    Digits {
        /// Maximum integral digits
        integer: i32,
        /// Maximum fractional digits
        fraction: i32,
    },
    /// Date must lie in the future
    Future,
    /// Inclusive upper bound
    Max {
        /// Bound
        value: i64,
    },
    /// Inclusive lower bound
    Min {
        /// Bound
        value: i64,
    },
    /// Date must lie in the past
    Past,
    /// Value must match a regular expression
    Regexp {
        /// The expression, verbatim
        pattern: String,
    },
    /// Size bounds
    Size {
        /// Maximum size
        max: i32,
        /// Minimum size
        min: i32,
    },
}

impl Constraint {
    /// Kind of this constraint
    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::Null => ConstraintKind::Null,
            Constraint::NotNull => ConstraintKind::NotNull,
            Constraint::False => ConstraintKind::False,
            Constraint::True => ConstraintKind::True,
            Constraint::DecimalMax { .. } => ConstraintKind::DecimalMax,
            Constraint::DecimalMin { .. } => ConstraintKind::DecimalMin,
            Constraint::Digits { .. } => ConstraintKind::Digits,
            Constraint::Future => ConstraintKind::Future,
            Constraint::Max { .. } => ConstraintKind::Max,
            Constraint::Min { .. } => ConstraintKind::Min,
            Constraint::Past => ConstraintKind::Past,
            Constraint::Regexp { .. } => ConstraintKind::Regexp,
            Constraint::Size { .. } => ConstraintKind::Size,
        }
    }

    /// Ordered parameters, rendered as strings
    pub fn params(&self) -> Vec<String> {
        match self {
            Constraint::DecimalMax { value, inclusive }
            | Constraint::DecimalMin { value, inclusive } => {
                vec![value.clone(), inclusive.to_string()]
            }
            Constraint::Digits { integer, fraction } => {
                vec![integer.to_string(), fraction.to_string()]
            }
            Constraint::Max { value } | Constraint::Min { value } => vec![value.to_string()],
            Constraint::Regexp { pattern } => vec![pattern.clone()],
            Constraint::Size { max, min } => vec![max.to_string(), min.to_string()],
            Constraint::Null
            | Constraint::NotNull
            | Constraint::False
            | Constraint::True
            | Constraint::Future
            | Constraint::Past => Vec::new(),
        }
    }

    /// Human-readable description
    pub fn description(&self) -> String {
        match self {
            Constraint::Null => "must be null".to_string(),
            Constraint::NotNull => "required".to_string(),
            Constraint::False => "must be \"false\"".to_string(),
            Constraint::True => "must be \"true\"".to_string(),
            Constraint::DecimalMax { value, inclusive } => {
                format!("max: {}{}", value, exclusive_suffix(*inclusive))
            }
            Constraint::DecimalMin { value, inclusive } => {
                format!("min: {}{}", value, exclusive_suffix(*inclusive))
            }
            Constraint::Digits { integer, fraction } => {
                format!("max digits: {} (integer), {} (fraction)", integer, fraction)
            }
            Constraint::Future => "future date".to_string(),
            Constraint::Max { value } => format!("max: {}", value),
            Constraint::Min { value } => format!("min: {}", value),
            Constraint::Past => "past date".to_string(),
            Constraint::Regexp { pattern } => format!("regex: {}", pattern),
            Constraint::Size { max, min } => format!("max size: {}, min size: {}", max, min),
        }
    }
}

fn exclusive_suffix(inclusive: bool) -> &'static str {
    if inclusive {
        ""
    } else {
        " (exclusive)"
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
