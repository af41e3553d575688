//! The `ALTER TABLE` mutation model.
//!
//! An [`AlterTable`] accumulates pending schema changes through fluent
//! mutators and renders them to statement text on demand. It performs no
//! validation: empty names, unknown options and conflicting operations
//! flow through to the rendered SQL unchanged, and the executing database
//! is the final arbiter.

use crate::constraint::DropConstraint;
use crate::error::Result;
use crate::fragment::{Column, SqlFragment};
use crate::platform::Platform;
use crate::render::{build_statement, Category, CategorySource, ProcessedItem, Specification};

/// A table name, optionally schema-qualified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRef {
    /// A bare table name.
    Name(String),
    /// A schema-qualified table name.
    Qualified {
        /// Schema name.
        schema: String,
        /// Table name.
        name: String,
    },
}

impl TableRef {
    /// Quotes each part and joins with `.`.
    #[must_use]
    pub fn resolve(&self, platform: &dyn Platform) -> String {
        match self {
            Self::Name(name) => platform.quote_identifier(name),
            Self::Qualified { schema, name } => format!(
                "{}.{}",
                platform.quote_identifier(schema),
                platform.quote_identifier(name)
            ),
        }
    }
}

impl Default for TableRef {
    fn default() -> Self {
        Self::Name(String::new())
    }
}

impl From<&str> for TableRef {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for TableRef {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl<S: Into<String>, N: Into<String>> From<(S, N)> for TableRef {
    fn from((schema, name): (S, N)) -> Self {
        Self::Qualified {
            schema: schema.into(),
            name: name.into(),
        }
    }
}

/// A borrowed snapshot of a model's state, one field per category.
///
/// Sequences appear exactly as inserted: order preserved, duplicates
/// kept. Primarily for introspection and testing.
pub struct RawState<'a> {
    /// The target table.
    pub table: &'a TableRef,
    /// Columns to add.
    pub add_columns: &'a [Box<dyn Column>],
    /// Columns to change, keyed by old name.
    pub change_columns: &'a [(String, Box<dyn Column>)],
    /// Columns to drop.
    pub drop_columns: &'a [String],
    /// Constraints to add.
    pub add_constraints: &'a [Box<dyn SqlFragment>],
    /// Constraints to drop.
    pub drop_constraints: &'a [DropConstraint],
    /// Indexes to drop.
    pub drop_indexes: &'a [String],
}

/// An `ALTER TABLE` statement under construction.
///
/// # Examples
///
/// ```rust
/// use alterix_core::prelude::*;
///
/// let statement = AlterTable::new("orders")
///     .add_column(RawColumn::new("\"amount\" INT NOT NULL"))
///     .drop_column("legacy_total");
///
/// let sql = statement.render(&AnsiQuoting::new()).unwrap();
/// assert_eq!(
///     sql,
///     "ALTER TABLE \"orders\"\nADD COLUMN \"amount\" INT NOT NULL,\nDROP COLUMN \"legacy_total\",\n"
/// );
/// ```
#[derive(Default)]
pub struct AlterTable {
    table: TableRef,
    add_columns: Vec<Box<dyn Column>>,
    change_columns: Vec<(String, Box<dyn Column>)>,
    drop_columns: Vec<String>,
    add_constraints: Vec<Box<dyn SqlFragment>>,
    drop_constraints: Vec<DropConstraint>,
    drop_indexes: Vec<String>,
}

impl AlterTable {
    /// Creates a model targeting the given table.
    #[must_use]
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Replaces the target table.
    #[must_use]
    pub fn table(mut self, table: impl Into<TableRef>) -> Self {
        self.table = table.into();
        self
    }

    /// Appends a column to add.
    #[must_use]
    pub fn add_column(mut self, column: impl Column + 'static) -> Self {
        self.add_columns.push(Box::new(column));
        self
    }

    /// Appends a column change; `old_name` heads the `CHANGE COLUMN`
    /// clause and `column` supplies the new definition.
    #[must_use]
    pub fn change_column(mut self, old_name: impl Into<String>, column: impl Column + 'static) -> Self {
        self.change_columns.push((old_name.into(), Box::new(column)));
        self
    }

    /// Appends a column to drop.
    #[must_use]
    pub fn drop_column(mut self, name: impl Into<String>) -> Self {
        self.drop_columns.push(name.into());
        self
    }

    /// Appends a constraint to add.
    #[must_use]
    pub fn add_constraint(mut self, constraint: impl SqlFragment + 'static) -> Self {
        self.add_constraints.push(Box::new(constraint));
        self
    }

    /// Appends a constraint to drop.
    #[must_use]
    pub fn drop_constraint(mut self, constraint: impl Into<DropConstraint>) -> Self {
        self.drop_constraints.push(constraint.into());
        self
    }

    /// Appends an index to drop.
    #[must_use]
    pub fn drop_index(mut self, name: impl Into<String>) -> Self {
        self.drop_indexes.push(name.into());
        self
    }

    /// Returns a read-only snapshot of the accumulated state.
    #[must_use]
    pub fn raw_state(&self) -> RawState<'_> {
        RawState {
            table: &self.table,
            add_columns: &self.add_columns,
            change_columns: &self.change_columns,
            drop_columns: &self.drop_columns,
            add_constraints: &self.add_constraints,
            drop_constraints: &self.drop_constraints,
            drop_indexes: &self.drop_indexes,
        }
    }

    /// Renders the statement body with dialect-neutral processing.
    ///
    /// Pure with respect to the model: repeated renders of an unchanged
    /// model produce byte-identical output.
    pub fn render(&self, platform: &dyn Platform) -> Result<String> {
        build_statement(self, platform)
    }
}

impl CategorySource for AlterTable {
    fn specification(&self, category: Category) -> Specification {
        Specification::standard(category)
    }

    fn process(&self, category: Category, platform: &dyn Platform) -> Result<Vec<ProcessedItem>> {
        match category {
            Category::Table => Ok(vec![ProcessedItem::Single(self.table.resolve(platform))]),
            Category::AddColumns => self
                .add_columns
                .iter()
                .map(|column| Ok(ProcessedItem::Single(column.build_fragment(platform)?)))
                .collect(),
            Category::ChangeColumns => self
                .change_columns
                .iter()
                .map(|(old_name, column)| {
                    Ok(ProcessedItem::Pair(
                        platform.quote_identifier(old_name),
                        column.build_fragment(platform)?,
                    ))
                })
                .collect(),
            Category::DropColumns => Ok(self
                .drop_columns
                .iter()
                .map(|name| ProcessedItem::Single(platform.quote_identifier(name)))
                .collect()),
            Category::AddConstraints => self
                .add_constraints
                .iter()
                .map(|constraint| Ok(ProcessedItem::Single(constraint.build_fragment(platform)?)))
                .collect(),
            Category::DropConstraints => Ok(self
                .drop_constraints
                .iter()
                .map(|constraint| {
                    ProcessedItem::Single(platform.quote_identifier(constraint.name()))
                })
                .collect()),
            Category::DropIndexes => Ok(self
                .drop_indexes
                .iter()
                .map(|name| ProcessedItem::Single(platform.quote_identifier(name)))
                .collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{ConstraintKind, RawConstraint};
    use crate::fragment::RawColumn;
    use crate::platform::AnsiQuoting;

    fn platform() -> AnsiQuoting {
        AnsiQuoting::new()
    }

    #[test]
    fn test_table_only() {
        let sql = AlterTable::new("t").render(&platform()).unwrap();
        assert_eq!(sql, "ALTER TABLE \"t\"\n");
    }

    #[test]
    fn test_qualified_table() {
        let sql = AlterTable::new(("billing", "orders"))
            .render(&platform())
            .unwrap();
        assert_eq!(sql, "ALTER TABLE \"billing\".\"orders\"\n");
    }

    #[test]
    fn test_empty_table_name_flows_through() {
        let sql = AlterTable::default().render(&platform()).unwrap();
        assert_eq!(sql, "ALTER TABLE \"\"\n");
    }

    #[test]
    fn test_add_and_drop_columns() {
        let sql = AlterTable::new("t")
            .add_column(RawColumn::new("\"c\" INT NOT NULL"))
            .drop_column("d")
            .render(&platform())
            .unwrap();
        assert_eq!(
            sql,
            "ALTER TABLE \"t\"\nADD COLUMN \"c\" INT NOT NULL,\nDROP COLUMN \"d\",\n"
        );
    }

    #[test]
    fn test_change_column_uses_two_slots() {
        let sql = AlterTable::new("t")
            .change_column("old_total", RawColumn::new("\"total\" BIGINT"))
            .render(&platform())
            .unwrap();
        assert_eq!(
            sql,
            "ALTER TABLE \"t\"\nCHANGE COLUMN \"old_total\" \"total\" BIGINT,\n"
        );
    }

    #[test]
    fn test_drop_constraints_default_separator() {
        let sql = AlterTable::new("t")
            .drop_constraint(DropConstraint::introspected("uq_a", "UNIQUE"))
            .drop_constraint(DropConstraint::introspected("uq_b", "UNIQUE"))
            .render(&platform())
            .unwrap();
        assert_eq!(
            sql,
            "ALTER TABLE \"t\"\nDROP CONSTRAINT \"uq_a\",\n\n DROP CONSTRAINT \"uq_b\",\n"
        );
    }

    #[test]
    fn test_add_constraint_and_drop_index() {
        let fk = RawConstraint::new(
            "fk_user",
            ConstraintKind::ForeignKey,
            "CONSTRAINT \"fk_user\" FOREIGN KEY (\"user_id\") REFERENCES \"users\" (\"id\")",
        );
        let sql = AlterTable::new("t")
            .add_constraint(fk)
            .drop_index("ix_legacy")
            .render(&platform())
            .unwrap();
        assert_eq!(
            sql,
            "ALTER TABLE \"t\"\nADD CONSTRAINT \"fk_user\" FOREIGN KEY (\"user_id\") REFERENCES \"users\" (\"id\"),\nDROP INDEX \"ix_legacy\",\n"
        );
    }

    #[test]
    fn test_raw_state_preserves_insertion_order_and_duplicates() {
        let model = AlterTable::new("t")
            .drop_column("a")
            .drop_column("b")
            .drop_column("a")
            .drop_index("ix");
        let state = model.raw_state();
        assert_eq!(state.drop_columns, ["a", "b", "a"]);
        assert_eq!(state.drop_indexes, ["ix"]);
        assert!(state.add_columns.is_empty());
    }

    #[test]
    fn test_render_is_repeatable() {
        let model = AlterTable::new("t")
            .add_column(RawColumn::new("\"c\" INT"))
            .drop_index("ix");
        let first = model.render(&platform()).unwrap();
        let second = model.render(&platform()).unwrap();
        assert_eq!(first, second);
    }
}
