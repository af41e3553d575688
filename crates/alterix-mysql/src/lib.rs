//! # alterix-mysql
//!
//! MySQL-specific extensions for `alterix-core`.
//!
//! # How MySQL differs from the dialect-neutral engine
//!
//! - **Column attributes**: MySQL column definitions carry attributes
//!   (`UNSIGNED`, `ZEROFILL`, `AUTO_INCREMENT`, `COMMENT`,
//!   `COLUMN_FORMAT`, `STORAGE`, `AFTER`) at fixed syntactic positions
//!   relative to the standard clauses. This crate splices them into the
//!   rendered definition text at the correct offsets; see
//!   [MySQL CREATE TABLE].
//! - **Constraint drops**: MySQL has no general `DROP CONSTRAINT`
//!   clause. Constraints are dropped by kind, e.g. `DROP PRIMARY KEY` or
//!   `DROP FOREIGN KEY fk_name`; see [MySQL ALTER TABLE].
//! - **Column repositioning**: `ADD COLUMN ... AFTER other` is MySQL
//!   syntax; a changed column keeps its position, so `CHANGE COLUMN`
//!   never emits `AFTER` here.
//!
//! [MySQL CREATE TABLE]: https://dev.mysql.com/doc/refman/8.4/en/create-table.html
//! [MySQL ALTER TABLE]: https://dev.mysql.com/doc/refman/8.4/en/alter-table.html
//!
//! ## Example
//!
//! ```rust
//! use alterix_core::prelude::*;
//! use alterix_mysql::AlterTableDecorator;
//!
//! let statement = AlterTable::new("orders")
//!     .add_column(
//!         RawColumn::new("\"amount\" INT NOT NULL")
//!             .option("unsigned", true)
//!             .option("comment", "USD"),
//!     )
//!     .drop_constraint(DropConstraint::Authored {
//!         name: "fk_amt".into(),
//!         kind: ConstraintKind::ForeignKey,
//!     });
//!
//! let sql = AlterTableDecorator::new(&statement)
//!     .render(&AnsiQuoting::new())
//!     .unwrap();
//! assert!(sql.contains("\"amount\" INT UNSIGNED NOT NULL COMMENT 'USD'"));
//! assert!(sql.contains("DROP FOREIGN KEY \"fk_amt\""));
//! ```

mod decorator;
mod options;

pub use decorator::AlterTableDecorator;
