//! Fragment-producing collaborators.
//!
//! Columns and constraints are opaque values that know how to render
//! themselves to a SQL fragment given a [`Platform`]. The core does not
//! own the textual representation of a column type or constraint body;
//! it only assembles fragments into a statement. [`RawColumn`] is the
//! bundled implementation for callers that already hold the rendered
//! definition text.

use crate::error::Result;
use crate::platform::Platform;

/// A value that renders to a scoped piece of SQL text.
pub trait SqlFragment {
    /// Renders this value to a SQL fragment using the given platform.
    fn build_fragment(&self, platform: &dyn Platform) -> Result<String>;
}

/// A column definition: a fragment plus an ordered options mapping.
///
/// Options drive dialect-specific decoration (e.g. `UNSIGNED`,
/// `AUTO_INCREMENT`); the dialect-neutral engine ignores them.
pub trait Column: SqlFragment {
    /// Returns the column's options in insertion order.
    fn options(&self) -> &[(String, OptionValue)];
}

/// The value attached to a column option.
///
/// `Flag(false)` and an empty `Text` mean "absent": the option is kept in
/// the model but emits nothing when rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A boolean switch, e.g. `unsigned`.
    Flag(bool),
    /// A textual argument, e.g. a comment string or a column name.
    Text(String),
}

impl OptionValue {
    /// Returns true if the option carries a usable value.
    #[must_use]
    pub fn is_set(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Text(text) => !text.is_empty(),
        }
    }

    /// Returns the textual payload, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Flag(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<&str> for OptionValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A column built from pre-rendered definition text.
///
/// The fragment is emitted verbatim, so any identifiers inside it must
/// already be quoted for the target platform.
///
/// # Examples
///
/// ```rust
/// use alterix_core::fragment::RawColumn;
///
/// let column = RawColumn::new("\"amount\" INT NOT NULL")
///     .option("unsigned", true)
///     .option("comment", "USD");
/// ```
#[derive(Debug, Clone)]
pub struct RawColumn {
    fragment: String,
    options: Vec<(String, OptionValue)>,
}

impl RawColumn {
    /// Creates a column from its rendered definition text.
    #[must_use]
    pub fn new(fragment: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            options: Vec::new(),
        }
    }

    /// Attaches an option. Order-insensitive; dialects apply their own
    /// priority when rendering.
    #[must_use]
    pub fn option(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.push((name.into(), value.into()));
        self
    }
}

impl SqlFragment for RawColumn {
    fn build_fragment(&self, _platform: &dyn Platform) -> Result<String> {
        Ok(self.fragment.clone())
    }
}

impl Column for RawColumn {
    fn options(&self) -> &[(String, OptionValue)] {
        &self.options
    }
}
