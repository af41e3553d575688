//! End-to-end MySQL rendering tests.

use alterix_core::prelude::*;
use alterix_mysql::AlterTableDecorator;

fn render(statement: &AlterTable) -> String {
    AlterTableDecorator::new(statement)
        .render(&AnsiQuoting::new())
        .unwrap()
}

#[test]
fn add_column_with_full_option_set() {
    let statement = AlterTable::new("orders").add_column(
        RawColumn::new("\"amount\" INT NOT NULL DEFAULT 0 UNIQUE")
            .option("comment", "USD amount")
            .option("unsigned", true)
            .option("zerofill", true)
            .option("autoincrement", true)
            .option("storage", "memory")
            .option("after", "id"),
    );
    assert_eq!(
        render(&statement),
        "ALTER TABLE \"orders\"\n\
         ADD COLUMN \"amount\" INT UNSIGNED ZEROFILL NOT NULL DEFAULT 0 AUTO_INCREMENT UNIQUE \
         COMMENT 'USD amount' STORAGE MEMORY AFTER \"id\",\n"
    );
}

#[test]
fn amount_column_scenario() {
    let statement = AlterTable::new("t").add_column(
        RawColumn::new("\"amount\" INT NOT NULL")
            .option("unsigned", true)
            .option("comment", "USD"),
    );
    assert_eq!(
        render(&statement),
        "ALTER TABLE \"t\"\nADD COLUMN \"amount\" INT UNSIGNED NOT NULL COMMENT 'USD',\n"
    );
}

#[test]
fn change_column_applies_options_but_never_after() {
    let statement = AlterTable::new("t").change_column(
        "amount",
        RawColumn::new("\"amount\" BIGINT NOT NULL")
            .option("unsigned", true)
            .option("after", "id"),
    );
    assert_eq!(
        render(&statement),
        "ALTER TABLE \"t\"\nCHANGE COLUMN \"amount\" \"amount\" BIGINT UNSIGNED NOT NULL,\n"
    );
}

#[test]
fn drop_foreign_key_scenario() {
    let fk = RawConstraint::new(
        "fk_amt",
        ConstraintKind::ForeignKey,
        "CONSTRAINT \"fk_amt\" FOREIGN KEY (\"amount\") REFERENCES \"amounts\" (\"id\")",
    );
    let statement = AlterTable::new("t").drop_constraint(DropConstraint::from(&fk));
    assert_eq!(
        render(&statement),
        "ALTER TABLE \"t\"\nDROP FOREIGN KEY \"fk_amt\",\n"
    );
}

#[test]
fn drop_primary_key_and_index_variants() {
    let statement = AlterTable::new("t")
        .drop_constraint(DropConstraint::Authored {
            name: "pk_t".into(),
            kind: ConstraintKind::PrimaryKey,
        })
        .drop_constraint(DropConstraint::Authored {
            name: "ix_name".into(),
            kind: ConstraintKind::Index,
        })
        .drop_constraint(DropConstraint::Authored {
            name: "mystery".into(),
            kind: ConstraintKind::Generic,
        });
    assert_eq!(
        render(&statement),
        "ALTER TABLE \"t\"\n\
         DROP PRIMARY KEY \"pk_t\",\n \
         DROP INDEX \"ix_name\",\n \
         DROP KEY \"mystery\",\n"
    );
}

#[test]
fn introspected_constraint_type_renders_verbatim() {
    let statement =
        AlterTable::new("t").drop_constraint(DropConstraint::introspected("uq_email", "UNIQUE"));
    assert_eq!(
        render(&statement),
        "ALTER TABLE \"t\"\nDROP UNIQUE \"uq_email\",\n"
    );
}

#[test]
fn mixed_statement_keeps_category_order() {
    let statement = AlterTable::new(("shop", "orders"))
        .add_column(RawColumn::new("\"qty\" INT NOT NULL").option("unsigned", true))
        .drop_column("legacy")
        .drop_constraint(DropConstraint::Authored {
            name: "fk_user".into(),
            kind: ConstraintKind::ForeignKey,
        })
        .drop_index("ix_old");
    assert_eq!(
        render(&statement),
        "ALTER TABLE \"shop\".\"orders\"\n\
         ADD COLUMN \"qty\" INT UNSIGNED NOT NULL,\n\
         DROP COLUMN \"legacy\",\n\
         DROP FOREIGN KEY \"fk_user\",\n\
         DROP INDEX \"ix_old\",\n"
    );
}

#[test]
fn comment_value_is_quoted_by_the_platform() {
    let statement = AlterTable::new("t").add_column(
        RawColumn::new("\"c\" VARCHAR(16)").option("comment", "it's quoted"),
    );
    assert_eq!(
        render(&statement),
        "ALTER TABLE \"t\"\nADD COLUMN \"c\" VARCHAR(16) COMMENT 'it''s quoted',\n"
    );
}

#[test]
fn rendering_same_model_plain_and_decorated() {
    let statement = AlterTable::new("t").add_column(
        RawColumn::new("\"c\" INT NOT NULL").option("unsigned", true),
    );
    let plain = statement.render(&AnsiQuoting::new()).unwrap();
    let decorated = render(&statement);
    assert_eq!(plain, "ALTER TABLE \"t\"\nADD COLUMN \"c\" INT NOT NULL,\n");
    assert_eq!(
        decorated,
        "ALTER TABLE \"t\"\nADD COLUMN \"c\" INT UNSIGNED NOT NULL,\n"
    );
}
