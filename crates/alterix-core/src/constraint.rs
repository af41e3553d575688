//! Constraint values and drop-constraint resolution.

use crate::error::Result;
use crate::fragment::SqlFragment;
use crate::platform::Platform;

/// The structural kind of an authored constraint.
///
/// A closed set: dialects that need a keyword for a constraint resolve it
/// from here instead of inspecting the concrete value's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    /// A primary key constraint.
    PrimaryKey,
    /// A foreign key constraint.
    ForeignKey,
    /// A plain index.
    Index,
    /// Anything else (unique, check, ...).
    Generic,
}

/// A constraint value: a fragment plus a name and kind.
pub trait Constraint: SqlFragment {
    /// Returns the constraint's name.
    fn name(&self) -> &str;

    /// Returns the constraint's structural kind.
    fn kind(&self) -> ConstraintKind;
}

/// A constraint built from pre-rendered body text, e.g.
/// `CONSTRAINT fk_amt FOREIGN KEY ("amount") REFERENCES ...`.
#[derive(Debug, Clone)]
pub struct RawConstraint {
    name: String,
    kind: ConstraintKind,
    fragment: String,
}

impl RawConstraint {
    /// Creates a constraint from its name, kind and rendered body.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        kind: ConstraintKind,
        fragment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            fragment: fragment.into(),
        }
    }
}

impl SqlFragment for RawConstraint {
    fn build_fragment(&self, _platform: &dyn Platform) -> Result<String> {
        Ok(self.fragment.clone())
    }
}

impl Constraint for RawConstraint {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ConstraintKind {
        self.kind
    }
}

/// An entry in the drop-constraints category.
///
/// Either a freshly authored constraint (name + kind) or metadata from a
/// previous introspection run, which carries its SQL type string verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropConstraint {
    /// A constraint authored in this process.
    Authored {
        /// Constraint name.
        name: String,
        /// Structural kind, used to pick the dialect keyword.
        kind: ConstraintKind,
    },
    /// Pre-introspected constraint metadata.
    Introspected {
        /// Constraint name.
        name: String,
        /// Explicit SQL type string, emitted verbatim.
        type_name: String,
    },
}

impl DropConstraint {
    /// Creates an introspected entry with an explicit type string.
    #[must_use]
    pub fn introspected(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::Introspected {
            name: name.into(),
            type_name: type_name.into(),
        }
    }

    /// Returns the constraint's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Authored { name, .. } | Self::Introspected { name, .. } => name,
        }
    }

    /// Resolves the SQL keyword used by two-token drop syntax.
    ///
    /// Introspected metadata wins verbatim; authored constraints map by
    /// kind, with `KEY` as the permissive fallback. Never fails.
    #[must_use]
    pub fn keyword(&self) -> &str {
        match self {
            Self::Introspected { type_name, .. } => type_name,
            Self::Authored { kind, .. } => match kind {
                ConstraintKind::PrimaryKey => "PRIMARY KEY",
                ConstraintKind::ForeignKey => "FOREIGN KEY",
                ConstraintKind::Index => "INDEX",
                ConstraintKind::Generic => "KEY",
            },
        }
    }
}

impl<C: Constraint + ?Sized> From<&C> for DropConstraint {
    fn from(constraint: &C) -> Self {
        Self::Authored {
            name: constraint.name().to_string(),
            kind: constraint.kind(),
        }
    }
}
