//! MySQL decoration of the `ALTER TABLE` model.

use alterix_core::alter_table::AlterTable;
use alterix_core::error::Result;
use alterix_core::platform::Platform;
use alterix_core::render::{
    build_statement, Category, CategorySource, ItemFormat, ProcessedItem, Specification,
};

use crate::options::inject_column_options;

/// Wraps an [`AlterTable`] and renders it with MySQL syntax.
///
/// All state stays in the wrapped model; the decorator overrides
/// processing for three categories and delegates the rest:
///
/// - **add-columns** / **change-columns**: column options are spliced
///   into the rendered definition (see [`crate::options`]);
/// - **drop-constraints**: MySQL drops constraints by kind, so items
///   render through the two-token `DROP <KEYWORD> <name>` template
///   instead of `DROP CONSTRAINT <name>`.
///
/// # Examples
///
/// ```rust
/// use alterix_core::prelude::*;
/// use alterix_mysql::AlterTableDecorator;
///
/// let statement = AlterTable::new("orders").add_column(
///     RawColumn::new("\"amount\" INT NOT NULL")
///         .option("unsigned", true)
///         .option("comment", "USD"),
/// );
///
/// let sql = AlterTableDecorator::new(&statement)
///     .render(&AnsiQuoting::new())
///     .unwrap();
/// assert_eq!(
///     sql,
///     "ALTER TABLE \"orders\"\nADD COLUMN \"amount\" INT UNSIGNED NOT NULL COMMENT 'USD',\n"
/// );
/// ```
pub struct AlterTableDecorator<'a> {
    subject: &'a AlterTable,
}

impl<'a> AlterTableDecorator<'a> {
    /// Wraps a model for MySQL rendering.
    #[must_use]
    pub fn new(subject: &'a AlterTable) -> Self {
        Self { subject }
    }

    /// Renders the statement body with MySQL processing.
    pub fn render(&self, platform: &dyn Platform) -> Result<String> {
        build_statement(self, platform)
    }
}

impl CategorySource for AlterTableDecorator<'_> {
    fn specification(&self, category: Category) -> Specification {
        match category {
            Category::DropConstraints => Specification {
                item_format: ItemFormat::Pair("DROP {} {},\n"),
                combined_by: " ",
            },
            _ => self.subject.specification(category),
        }
    }

    fn process(&self, category: Category, platform: &dyn Platform) -> Result<Vec<ProcessedItem>> {
        let state = self.subject.raw_state();
        match category {
            Category::AddColumns => state
                .add_columns
                .iter()
                .map(|column| {
                    let sql = column.build_fragment(platform)?;
                    Ok(ProcessedItem::Single(inject_column_options(
                        sql,
                        column.options(),
                        platform,
                        true,
                    )))
                })
                .collect(),
            Category::ChangeColumns => state
                .change_columns
                .iter()
                .map(|(old_name, column)| {
                    let sql = column.build_fragment(platform)?;
                    Ok(ProcessedItem::Pair(
                        platform.quote_identifier(old_name),
                        inject_column_options(sql, column.options(), platform, false),
                    ))
                })
                .collect(),
            Category::DropConstraints => Ok(state
                .drop_constraints
                .iter()
                .map(|constraint| {
                    ProcessedItem::Pair(
                        constraint.keyword().to_string(),
                        platform.quote_identifier(constraint.name()),
                    )
                })
                .collect()),
            _ => self.subject.process(category, platform),
        }
    }
}
