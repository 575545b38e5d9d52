use pretty_assertions::assert_eq;

use quarry_core::{builder, stmt};
use quarry_sql::Serializer;

fn users() -> builder::Create {
    let mut create = builder::Create::new("users");
    create
        .add_field(stmt::ColumnDef::new("id", "int").not_null().auto_increment())
        .add_field(stmt::ColumnDef::new("name", "varchar").not_null())
        .add_primary_key(["id"]);
    create
}

fn compile_one(serializer: &Serializer, stmt: &stmt::CreateTable) -> String {
    let queries = serializer.create(stmt).unwrap();
    assert_eq!(queries.len(), 1, "expected a single query");
    queries.into_iter().next().unwrap().query
}

#[test]
fn auto_increment_primary_key_mysql() {
    let stmt = users().build().unwrap();
    let sql = compile_one(&Serializer::mysql(), &stmt);

    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS `users` (`id` INT NOT NULL AUTO_INCREMENT, `name` VARCHAR(255) NOT NULL, PRIMARY KEY (`id`))"
    );
}

#[test]
fn auto_increment_primary_key_postgresql() {
    let stmt = users().build().unwrap();
    let sql = compile_one(&Serializer::postgresql(), &stmt);

    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS \"users\" (\"id\" SERIAL, \"name\" VARCHAR(255) NOT NULL, PRIMARY KEY (\"id\"))"
    );
}

#[test]
fn auto_increment_bigint_postgresql() {
    let mut create = builder::Create::new("events");
    create
        .add_field(
            stmt::ColumnDef::new("id", "bigint")
                .not_null()
                .auto_increment(),
        )
        .add_primary_key(["id"]);
    let stmt = create.build().unwrap();

    let sql = compile_one(&Serializer::postgresql(), &stmt);
    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS \"events\" (\"id\" BIGSERIAL, PRIMARY KEY (\"id\"))"
    );
}

#[test]
fn auto_increment_subsumes_primary_key_sqlite() {
    let stmt = users().build().unwrap();
    let sql = compile_one(&Serializer::sqlite(), &stmt);

    // The PK rides on the column; no separate PRIMARY KEY clause
    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS `users` (`id` INTEGER PRIMARY KEY AUTOINCREMENT, `name` VARCHAR(255) NOT NULL)"
    );
}

#[test]
fn composite_primary_key_is_not_subsumed_sqlite() {
    let mut create = builder::Create::new("memberships");
    create
        .add_field(stmt::ColumnDef::new("user_id", "int").not_null())
        .add_field(stmt::ColumnDef::new("group_id", "int").not_null())
        .add_primary_key(["user_id", "group_id"]);
    let stmt = create.build().unwrap();

    let sql = compile_one(&Serializer::sqlite(), &stmt);
    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS `memberships` (`user_id` INTEGER NOT NULL, `group_id` INTEGER NOT NULL, PRIMARY KEY (`user_id`, `group_id`))"
    );
}

#[test]
fn keys_inline_mysql() {
    let mut create = users();
    create
        .add_field(stmt::ColumnDef::new("email", "varchar").not_null())
        .add_unique_key(stmt::Key::new("users_email_uniq", ["email"]))
        .add_key(stmt::Key::new("users_name_idx", ["name"]));
    let stmt = create.build().unwrap();

    let queries = Serializer::mysql().create(&stmt).unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(
        queries[0].query,
        "CREATE TABLE IF NOT EXISTS `users` (`id` INT NOT NULL AUTO_INCREMENT, `name` VARCHAR(255) NOT NULL, `email` VARCHAR(255) NOT NULL, PRIMARY KEY (`id`), UNIQUE KEY `users_email_uniq` (`email`), KEY `users_name_idx` (`name`))"
    );
}

#[test]
fn keys_as_separate_statements_postgresql() {
    let mut create = users();
    create
        .add_field(stmt::ColumnDef::new("email", "varchar").not_null())
        .add_unique_key(stmt::Key::new("users_email_uniq", ["email"]))
        .add_key(stmt::Key::new("users_name_idx", ["name"]));
    let stmt = create.build().unwrap();

    let queries = Serializer::postgresql().create(&stmt).unwrap();
    assert_eq!(queries.len(), 3);
    assert!(queries[0].query.starts_with("CREATE TABLE"));
    assert_eq!(
        queries[1].query,
        "CREATE UNIQUE INDEX \"users_email_uniq\" ON \"users\" (\"email\")"
    );
    assert_eq!(
        queries[2].query,
        "CREATE INDEX \"users_name_idx\" ON \"users\" (\"name\")"
    );
}

#[test]
fn keys_as_separate_statements_sqlite() {
    let mut create = users();
    create.add_key(stmt::Key::new("users_name_idx", ["name"]));
    let stmt = create.build().unwrap();

    let queries = Serializer::sqlite().create(&stmt).unwrap();
    assert_eq!(queries.len(), 2);
    assert_eq!(
        queries[1].query,
        "CREATE INDEX `users_name_idx` ON `users` (`name`)"
    );
}

#[test]
fn foreign_key_with_referential_actions() {
    let mut create = builder::Create::new("posts");
    create
        .add_field(stmt::ColumnDef::new("id", "int").not_null())
        .add_field(stmt::ColumnDef::new("user_id", "int").not_null())
        .add_foreign_key(
            stmt::ForeignKey::new("fk_posts_user", ["user_id"], "users", ["id"])
                .on_delete("CASCADE")
                .on_update("SET NULL"),
        );
    let stmt = create.build().unwrap();

    let sql = compile_one(&Serializer::mysql(), &stmt);
    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS `posts` (`id` INT NOT NULL, `user_id` INT NOT NULL, CONSTRAINT `fk_posts_user` FOREIGN KEY (`user_id`) REFERENCES `users` (`id`) ON DELETE CASCADE ON UPDATE SET NULL)"
    );
}

#[test]
fn boolean_default_literal_per_dialect() {
    let mut create = builder::Create::new("flags");
    create.add_field(
        stmt::ColumnDef::new("active", "bool")
            .not_null()
            .default_value(true),
    );
    let stmt = create.build().unwrap();

    assert_eq!(
        compile_one(&Serializer::mysql(), &stmt),
        "CREATE TABLE IF NOT EXISTS `flags` (`active` BOOLEAN NOT NULL DEFAULT TRUE)"
    );
    assert_eq!(
        compile_one(&Serializer::postgresql(), &stmt),
        "CREATE TABLE IF NOT EXISTS \"flags\" (\"active\" BOOLEAN NOT NULL DEFAULT TRUE)"
    );
    // SQLite has no boolean literals
    assert_eq!(
        compile_one(&Serializer::sqlite(), &stmt),
        "CREATE TABLE IF NOT EXISTS `flags` (`active` BOOLEAN NOT NULL DEFAULT 1)"
    );
}

#[test]
fn now_default_resolves_by_declared_type() {
    let mut create = builder::Create::new("audits");
    create
        .add_field(stmt::ColumnDef::new("created_at", "timestamp").default_value("now()"))
        .add_field(stmt::ColumnDef::new("created_on", "date").default_value("now()"))
        .add_field(stmt::ColumnDef::new("created_tod", "time").default_value("NOW()"));
    let stmt = create.build().unwrap();

    let sql = compile_one(&Serializer::mysql(), &stmt);
    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS `audits` (`created_at` TIMESTAMP DEFAULT CURRENT_TIMESTAMP, `created_on` DATE DEFAULT CURRENT_DATE, `created_tod` TIME DEFAULT CURRENT_TIME)"
    );
}

#[test]
fn string_and_numeric_defaults() {
    let mut create = builder::Create::new("settings");
    create
        .add_field(stmt::ColumnDef::new("role", "varchar").default_value("guest"))
        .add_field(stmt::ColumnDef::new("ratio", "varchar").default_value("3.14"))
        .add_field(stmt::ColumnDef::new("retries", "int").default_value(3));
    let stmt = create.build().unwrap();

    let sql = compile_one(&Serializer::mysql(), &stmt);
    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS `settings` (`role` VARCHAR(255) DEFAULT 'guest', `ratio` VARCHAR(255) DEFAULT 3.14, `retries` INT DEFAULT 3)"
    );
}

#[test]
fn string_default_escapes_embedded_quotes() {
    let mut create = builder::Create::new("settings");
    create.add_field(stmt::ColumnDef::new("greeting", "varchar").default_value("it's"));
    let stmt = create.build().unwrap();

    let sql = compile_one(&Serializer::mysql(), &stmt);
    assert_eq!(
        sql,
        "CREATE TABLE IF NOT EXISTS `settings` (`greeting` VARCHAR(255) DEFAULT 'it''s')"
    );
}

#[test]
fn json_default_serialized_and_quoted() {
    let mut create = builder::Create::new("settings");
    create.add_field(
        stmt::ColumnDef::new("prefs", "json").default_value(serde_json::json!({"beta": false})),
    );
    let stmt = create.build().unwrap();

    assert_eq!(
        compile_one(&Serializer::mysql(), &stmt),
        "CREATE TABLE IF NOT EXISTS `settings` (`prefs` JSON DEFAULT '{\"beta\":false}')"
    );
    assert_eq!(
        compile_one(&Serializer::postgresql(), &stmt),
        "CREATE TABLE IF NOT EXISTS \"settings\" (\"prefs\" JSONB DEFAULT '{\"beta\":false}')"
    );
}

#[test]
fn integer_width_selection() {
    let mut create = builder::Create::new("metrics");
    create
        .add_field(stmt::ColumnDef::new("flag", "int").length(1))
        .add_field(stmt::ColumnDef::new("count", "int"))
        .add_field(stmt::ColumnDef::new("total", "int").length(20));
    let stmt = create.build().unwrap();

    assert_eq!(
        compile_one(&Serializer::mysql(), &stmt),
        "CREATE TABLE IF NOT EXISTS `metrics` (`flag` TINYINT, `count` INT, `total` BIGINT)"
    );
    assert_eq!(
        compile_one(&Serializer::postgresql(), &stmt),
        "CREATE TABLE IF NOT EXISTS \"metrics\" (\"flag\" SMALLINT, \"count\" INTEGER, \"total\" BIGINT)"
    );
    assert_eq!(
        compile_one(&Serializer::sqlite(), &stmt),
        "CREATE TABLE IF NOT EXISTS `metrics` (`flag` SMALLINT, `count` INTEGER, `total` BIGINT)"
    );
}

#[test]
fn unsigned_only_rendered_on_mysql() {
    let mut create = builder::Create::new("metrics");
    create.add_field(stmt::ColumnDef::new("count", "int").not_null().unsigned());
    let stmt = create.build().unwrap();

    assert_eq!(
        compile_one(&Serializer::mysql(), &stmt),
        "CREATE TABLE IF NOT EXISTS `metrics` (`count` INT UNSIGNED NOT NULL)"
    );
    assert_eq!(
        compile_one(&Serializer::postgresql(), &stmt),
        "CREATE TABLE IF NOT EXISTS \"metrics\" (\"count\" INTEGER NOT NULL)"
    );
}

#[test]
fn precision_and_scale() {
    let mut create = builder::Create::new("orders");
    create.add_field(stmt::ColumnDef::new("price", "decimal").precision(10, 2));
    let stmt = create.build().unwrap();

    assert_eq!(
        compile_one(&Serializer::mysql(), &stmt),
        "CREATE TABLE IF NOT EXISTS `orders` (`price` DECIMAL(10, 2))"
    );
    assert_eq!(
        compile_one(&Serializer::postgresql(), &stmt),
        "CREATE TABLE IF NOT EXISTS \"orders\" (\"price\" NUMERIC(10, 2))"
    );
}

#[test]
fn unmapped_type_passes_through_uppercased() {
    let mut create = builder::Create::new("places");
    create.add_field(stmt::ColumnDef::new("location", "geometry"));
    let stmt = create.build().unwrap();

    assert_eq!(
        compile_one(&Serializer::postgresql(), &stmt),
        "CREATE TABLE IF NOT EXISTS \"places\" (\"location\" GEOMETRY)"
    );
}

#[test]
fn trailing_attribute_passes_through() {
    let mut create = builder::Create::new("audits");
    create.add_field(
        stmt::ColumnDef::new("updated_at", "timestamp")
            .not_null()
            .attribute("ON UPDATE CURRENT_TIMESTAMP"),
    );
    let stmt = create.build().unwrap();

    assert_eq!(
        compile_one(&Serializer::mysql(), &stmt),
        "CREATE TABLE IF NOT EXISTS `audits` (`updated_at` TIMESTAMP NOT NULL ON UPDATE CURRENT_TIMESTAMP)"
    );
}

#[test]
fn identifier_quotes_escaped_by_doubling() {
    let mut create = builder::Create::new("we`ird");
    create.add_field(stmt::ColumnDef::new("na\"me", "text"));
    let stmt = create.build().unwrap();

    assert_eq!(
        compile_one(&Serializer::mysql(), &stmt),
        "CREATE TABLE IF NOT EXISTS `we``ird` (`na\"me` TEXT)"
    );
    assert_eq!(
        compile_one(&Serializer::postgresql(), &stmt),
        "CREATE TABLE IF NOT EXISTS \"we`ird\" (\"na\"\"me\" TEXT)"
    );
}

#[test]
fn create_without_fields_is_refused() {
    let stmt = stmt::CreateTable::new("empty");

    let err = Serializer::mysql().create(&stmt).unwrap_err();
    assert!(err.is_empty_statement(), "got: {err:?}");
}

#[test]
fn compile_dispatches_create() {
    let stmt = users().build().unwrap();
    let queries = Serializer::mysql().compile(&stmt.into()).unwrap();

    assert_eq!(queries.len(), 1);
    assert!(queries[0].values.is_empty());
}
