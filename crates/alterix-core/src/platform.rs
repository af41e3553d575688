//! Platform abstraction for identifier and value quoting.
//!
//! The core never quotes text itself; every identifier and literal goes
//! through the [`Platform`] supplied at render time. Dialect crates
//! provide their own implementations; [`AnsiQuoting`] covers the SQL-92
//! defaults used by tests and examples.

/// A database platform's quoting rules.
///
/// Supplied to `render` by the caller. Implementations must return text
/// that is safe to embed directly into a statement.
pub trait Platform {
    /// Quotes an identifier (table, column, constraint or index name).
    fn quote_identifier(&self, name: &str) -> String;

    /// Quotes a literal value.
    fn quote_value(&self, value: &str) -> String;
}

/// SQL-92 quoting: double-quoted identifiers, single-quoted values,
/// embedded quote characters doubled.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiQuoting;

impl AnsiQuoting {
    /// Creates a new ANSI quoting platform.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Platform for AnsiQuoting {
    fn quote_identifier(&self, name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }

    fn quote_value(&self, value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_identifier_plain() {
        assert_eq!(AnsiQuoting::new().quote_identifier("users"), "\"users\"");
    }

    #[test]
    fn test_quote_identifier_embedded_quote() {
        assert_eq!(AnsiQuoting::new().quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn test_quote_value_embedded_quote() {
        assert_eq!(AnsiQuoting::new().quote_value("it's"), "'it''s'");
    }
}
