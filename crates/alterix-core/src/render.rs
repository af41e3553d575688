//! Declarative statement assembly.
//!
//! A statement is rendered category by category, in a fixed order, from a
//! per-category [`Specification`]: an item template with positional `{}`
//! slots and a separator joining multiple items. Where the processed items
//! come from is a strategy decision: the dialect-neutral model supplies
//! default processing, and a dialect decorator implements the same
//! [`CategorySource`] trait to override only the categories it customizes.

use tracing::{debug, trace};

use crate::error::Result;
use crate::platform::Platform;

/// The seven statement categories, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// The `ALTER TABLE <name>` head. Always exactly one item.
    Table,
    /// `ADD COLUMN` clauses.
    AddColumns,
    /// `CHANGE COLUMN` clauses.
    ChangeColumns,
    /// `DROP COLUMN` clauses.
    DropColumns,
    /// `ADD <constraint>` clauses.
    AddConstraints,
    /// `DROP CONSTRAINT` clauses.
    DropConstraints,
    /// `DROP INDEX` clauses.
    DropIndexes,
}

impl Category {
    /// Fixed render order.
    pub const ORDER: [Self; 7] = [
        Self::Table,
        Self::AddColumns,
        Self::ChangeColumns,
        Self::DropColumns,
        Self::AddConstraints,
        Self::DropConstraints,
        Self::DropIndexes,
    ];
}

/// A processed value ready for template substitution.
///
/// Most categories produce one fragment per item; change-columns produces
/// an (old name, new definition) pair and is the only two-slot category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessedItem {
    /// One positional value.
    Single(String),
    /// Two positional values.
    Pair(String, String),
}

/// An item template with one or two positional `{}` slots.
#[derive(Debug, Clone, Copy)]
pub enum ItemFormat {
    /// Template with one slot, e.g. `"ADD COLUMN {},\n"`.
    Single(&'static str),
    /// Template with two slots, e.g. `"CHANGE COLUMN {} {},\n"`.
    Pair(&'static str),
}

impl ItemFormat {
    /// Substitutes an item's values into the template's slots, in order.
    /// Surplus slots render empty; surplus values are dropped.
    #[must_use]
    pub fn apply(&self, item: &ProcessedItem) -> String {
        let template = match self {
            Self::Single(template) | Self::Pair(template) => template,
        };
        let values: [Option<&str>; 2] = match item {
            ProcessedItem::Single(first) => [Some(first.as_str()), None],
            ProcessedItem::Pair(first, second) => [Some(first.as_str()), Some(second.as_str())],
        };

        let mut out = String::with_capacity(template.len());
        let mut segments = template.split("{}");
        if let Some(head) = segments.next() {
            out.push_str(head);
        }
        let mut values = values.into_iter().flatten();
        for segment in segments {
            if let Some(value) = values.next() {
                out.push_str(value);
            }
            out.push_str(segment);
        }
        out
    }
}

/// How one category renders: its item template and item separator.
#[derive(Debug, Clone, Copy)]
pub struct Specification {
    /// Template applied to each processed item.
    pub item_format: ItemFormat,
    /// Separator joining multiple rendered items.
    pub combined_by: &'static str,
}

impl Specification {
    /// The dialect-neutral specification for a category.
    #[must_use]
    pub const fn standard(category: Category) -> Self {
        match category {
            Category::Table => Self {
                item_format: ItemFormat::Single("ALTER TABLE {}\n"),
                combined_by: "",
            },
            Category::AddColumns => Self {
                item_format: ItemFormat::Single("ADD COLUMN {},\n"),
                combined_by: "",
            },
            Category::ChangeColumns => Self {
                item_format: ItemFormat::Pair("CHANGE COLUMN {} {},\n"),
                combined_by: "",
            },
            Category::DropColumns => Self {
                item_format: ItemFormat::Single("DROP COLUMN {},\n"),
                combined_by: "",
            },
            Category::AddConstraints => Self {
                item_format: ItemFormat::Single("ADD {},\n"),
                combined_by: "",
            },
            Category::DropConstraints => Self {
                item_format: ItemFormat::Single("DROP CONSTRAINT {},\n"),
                combined_by: "\n ",
            },
            Category::DropIndexes => Self {
                item_format: ItemFormat::Single("DROP INDEX {},\n"),
                combined_by: "",
            },
        }
    }
}

/// Supplies processed items and specifications per category.
///
/// Implemented by the mutation model (default processing) and by dialect
/// decorators, which override a subset of categories and delegate the
/// rest. This replaces step-override inheritance with explicit strategy
/// dispatch.
pub trait CategorySource {
    /// Returns the specification used for a category.
    fn specification(&self, category: Category) -> Specification;

    /// Produces the processed item list for a category.
    fn process(&self, category: Category, platform: &dyn Platform) -> Result<Vec<ProcessedItem>>;
}

/// Assembles the full statement text from a source's categories.
///
/// Empty categories contribute nothing: no empty clause, no stray
/// separator. Trailing separators inside item templates are preserved;
/// statement termination is the caller's concern.
pub fn build_statement(source: &dyn CategorySource, platform: &dyn Platform) -> Result<String> {
    let mut sql = String::new();
    for category in Category::ORDER {
        let items = source.process(category, platform)?;
        if items.is_empty() {
            continue;
        }
        let specification = source.specification(category);
        let rendered: Vec<String> = items
            .iter()
            .map(|item| specification.item_format.apply(item))
            .collect();
        trace!(?category, items = items.len(), "rendered category");
        sql.push_str(&rendered.join(specification.combined_by));
    }
    debug!(bytes = sql.len(), "assembled statement");
    Ok(sql)
}
