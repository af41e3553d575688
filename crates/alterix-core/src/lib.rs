//! # alterix-core
//!
//! Dialect-aware `ALTER TABLE` statement generation.
//!
//! This crate provides:
//! - A mutation model ([`AlterTable`](alter_table::AlterTable)) that
//!   accumulates pending schema changes through fluent mutators
//! - A declarative renderer assembling the model into statement text from
//!   per-category templates
//! - A [`CategorySource`](render::CategorySource) seam through which
//!   dialect crates override processing for the categories they customize
//!
//! The core is a pure text transformer: it never validates schema
//! semantics and never quotes identifiers or values itself — quoting goes
//! through the [`Platform`](platform::Platform) collaborator supplied at
//! render time.
//!
//! ## Example
//!
//! ```rust
//! use alterix_core::prelude::*;
//!
//! let statement = AlterTable::new("orders")
//!     .add_column(RawColumn::new("\"amount\" INT NOT NULL"))
//!     .drop_constraint(DropConstraint::introspected("ck_amount", "CHECK"));
//!
//! let sql = statement.render(&AnsiQuoting::new()).unwrap();
//! assert!(sql.starts_with("ALTER TABLE \"orders\"\n"));
//! ```
//!
//! Dialect-specific behavior (e.g. MySQL column option injection) lives
//! in companion crates such as `alterix-mysql`.

pub mod alter_table;
pub mod constraint;
pub mod error;
pub mod fragment;
pub mod platform;
pub mod render;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::alter_table::{AlterTable, RawState, TableRef};
    pub use crate::constraint::{Constraint, ConstraintKind, DropConstraint, RawConstraint};
    pub use crate::error::{RenderError, Result};
    pub use crate::fragment::{Column, OptionValue, RawColumn, SqlFragment};
    pub use crate::platform::{AnsiQuoting, Platform};
    pub use crate::render::{Category, CategorySource, ProcessedItem, Specification};
}
