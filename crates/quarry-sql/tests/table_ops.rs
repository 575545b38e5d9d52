use pretty_assertions::assert_eq;

use quarry_core::stmt;
use quarry_sql::Serializer;

#[test]
fn drop_table() {
    let stmt = stmt::DropTable::new("users");

    assert_eq!(
        Serializer::mysql().drop(&stmt).unwrap().query,
        "DROP TABLE `users`"
    );
    assert_eq!(
        Serializer::postgresql().drop(&stmt).unwrap().query,
        "DROP TABLE \"users\""
    );
}

#[test]
fn drop_table_if_exists() {
    let stmt = stmt::DropTable::if_exists("users");

    assert_eq!(
        Serializer::sqlite().drop(&stmt).unwrap().query,
        "DROP TABLE IF EXISTS `users`"
    );
}

#[test]
fn rename_table() {
    let stmt = stmt::RenameTable::new("users", "accounts");

    assert_eq!(
        Serializer::mysql().rename(&stmt).unwrap().query,
        "ALTER TABLE `users` RENAME TO `accounts`"
    );
    assert_eq!(
        Serializer::postgresql().rename(&stmt).unwrap().query,
        "ALTER TABLE \"users\" RENAME TO \"accounts\""
    );
}

#[test]
fn truncate_per_dialect() {
    let stmt = stmt::Truncate::new("users");

    assert_eq!(
        Serializer::mysql().truncate(&stmt).unwrap().query,
        "TRUNCATE TABLE `users`"
    );
    assert_eq!(
        Serializer::postgresql().truncate(&stmt).unwrap().query,
        "TRUNCATE \"users\""
    );
    // SQLite has no TRUNCATE statement
    assert_eq!(
        Serializer::sqlite().truncate(&stmt).unwrap().query,
        "DELETE FROM `users`"
    );
}

#[test]
fn truncate_cascade_postgresql() {
    let stmt = stmt::Truncate::cascade("users");

    assert_eq!(
        Serializer::postgresql().truncate(&stmt).unwrap().query,
        "TRUNCATE \"users\" CASCADE"
    );
    // The flag is ignored where the dialect cannot express it
    assert_eq!(
        Serializer::mysql().truncate(&stmt).unwrap().query,
        "TRUNCATE TABLE `users`"
    );
}

#[test]
fn compile_dispatches_table_ops() {
    let queries = Serializer::mysql()
        .compile(&stmt::DropTable::new("users").into())
        .unwrap();

    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].query, "DROP TABLE `users`");
}
