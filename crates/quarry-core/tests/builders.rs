use pretty_assertions::assert_eq;

use quarry_core::{builder, stmt};

#[test]
fn snapshots_are_independent_of_later_mutation() {
    let mut create = builder::Create::new("users");
    create.add_field(stmt::ColumnDef::new("id", "int").not_null());

    let first = create.build().unwrap();
    create.add_field(stmt::ColumnDef::new("name", "varchar"));
    let second = create.build().unwrap();

    assert_eq!(first.columns.len(), 1);
    assert_eq!(second.columns.len(), 2);
}

#[test]
fn create_requires_at_least_one_field() {
    let err = builder::Create::new("users").build().unwrap_err();
    assert!(err.is_empty_statement(), "got: {err:?}");
}

#[test]
fn create_rejects_duplicate_key_names() {
    let mut create = builder::Create::new("users");
    create
        .add_field(stmt::ColumnDef::new("email", "varchar"))
        .add_unique_key(stmt::Key::new("users_idx", ["email"]))
        .add_key(stmt::Key::new("users_idx", ["email"]));

    let err = create.build().unwrap_err();
    assert!(err.is_invalid_statement(), "got: {err:?}");
}

#[test]
fn create_rejects_key_name_shared_with_foreign_key() {
    let mut create = builder::Create::new("posts");
    create
        .add_field(stmt::ColumnDef::new("user_id", "int"))
        .add_key(stmt::Key::new("posts_user", ["user_id"]))
        .add_foreign_key(stmt::ForeignKey::new(
            "posts_user",
            ["user_id"],
            "users",
            ["id"],
        ));

    let err = create.build().unwrap_err();
    assert!(err.is_invalid_statement(), "got: {err:?}");
}

#[test]
fn alter_requires_at_least_one_change() {
    let err = builder::Alter::new("users").build().unwrap_err();
    assert!(err.is_empty_statement(), "got: {err:?}");
}

#[test]
fn alter_records_changes_by_kind() {
    let mut alter = builder::Alter::new("users");
    alter
        .drop_field("legacy")
        .add_field(stmt::ColumnDef::new("email", "varchar"))
        .change_field(stmt::ColumnDef::new("name", "varchar").length(100))
        .drop_primary_key()
        .add_primary_key(["id"]);
    let stmt = alter.build().unwrap();

    assert_eq!(stmt.drop_columns, vec!["legacy"]);
    assert_eq!(stmt.add_columns.len(), 1);
    assert_eq!(stmt.change_columns.len(), 1);
    assert!(stmt.drop_primary_key);
    assert_eq!(stmt.add_primary_key, Some(vec!["id".to_string()]));
}

#[test]
fn alter_rejects_duplicate_added_key_names() {
    let mut alter = builder::Alter::new("users");
    alter
        .add_unique_key(stmt::Key::new("users_idx", ["email"]))
        .add_key(stmt::Key::new("users_idx", ["name"]));

    let err = alter.build().unwrap_err();
    assert!(err.is_invalid_statement(), "got: {err:?}");
}

#[test]
fn insert_requires_at_least_one_row() {
    let err = builder::Insert::new("users").build().unwrap_err();
    assert!(err.is_empty_statement(), "got: {err:?}");
}

#[test]
fn update_requires_at_least_one_assignment() {
    let mut update = builder::Update::new("users");
    update.filter("id = ?", vec![1.into()]);

    let err = update.build().unwrap_err();
    assert!(err.is_empty_statement(), "got: {err:?}");
}

#[test]
fn delete_requires_at_least_one_filter() {
    let err = builder::Delete::new("users").build().unwrap_err();
    assert!(err.is_empty_statement(), "got: {err:?}");
}

#[test]
fn select_requires_a_table() {
    let err = builder::Select::new().build().unwrap_err();
    assert!(err.is_empty_statement(), "got: {err:?}");
}

#[test]
fn column_def_defaults() {
    let column = stmt::ColumnDef::new("name", "varchar");

    assert!(column.nullable);
    assert!(column.default.is_none());
    assert!(!column.auto_increment);
    assert!(!column.unsigned);
    assert!(column.length.is_none());
}

#[test]
fn column_def_chaining() {
    let column = stmt::ColumnDef::new("price", "decimal")
        .precision(10, 2)
        .not_null()
        .default_value(0);

    assert_eq!(column.length, Some(stmt::Length::Precision(10, 2)));
    assert!(!column.nullable);
    assert_eq!(column.default, Some(stmt::Value::I64(0)));
}

#[test]
fn value_conversions() {
    assert_eq!(stmt::Value::from(true), stmt::Value::Bool(true));
    assert_eq!(stmt::Value::from(5), stmt::Value::I64(5));
    assert_eq!(stmt::Value::from(2.5), stmt::Value::F64(2.5));
    assert_eq!(
        stmt::Value::from("abc"),
        stmt::Value::String("abc".to_string())
    );
    assert_eq!(stmt::Value::from(None::<i64>), stmt::Value::Null);
    assert_eq!(stmt::Value::from(Some(5)), stmt::Value::I64(5));
}

#[test]
fn filter_counts_placeholders() {
    let filter = stmt::Filter::new("a = ? AND b IN (?, ?)", vec![]);
    assert_eq!(filter.placeholders(), 3);

    let filter = stmt::Filter::new("active = TRUE", vec![]);
    assert_eq!(filter.placeholders(), 0);
}
