//! End-to-end CREATE TABLE generation across dialects.

mod common;
use common::*;

use oxide_dialects::{builtin_generator, DdlOptions, DdlWarning, Dialect, DialectError, Table, Type};
use pretty_assertions::assert_eq;

#[test]
fn person_on_reference_dialects() {
    for dialect in [Dialect::H2, Dialect::MySql5, Dialect::PostgreSql95] {
        let expected = if dialect == Dialect::PostgreSql95 {
            "create table PERSON (id varchar(30),age int4 not null, primary key (id));"
        } else {
            "create table PERSON (id varchar(30),age integer not null, primary key (id));"
        };
        assert_eq!(ddl(&person(), dialect), vec![expected]);
    }
}

#[test]
fn person_renders_on_every_dialect() {
    for dialect in Dialect::all() {
        let statements = ddl(&person(), dialect);
        assert_eq!(statements.len(), 1, "{dialect}");
        let sql = &statements[0];
        assert!(
            sql.starts_with(dialect.features().create_table_string),
            "{dialect}: {sql}"
        );
        assert!(sql.contains(" primary key (id))"), "{dialect}: {sql}");
        assert!(sql.ends_with(';'), "{dialect}: {sql}");
    }
}

#[test]
fn unsupported_table_check_is_only_a_warning() {
    let mut table = person();
    table.check("age > 0");
    let generated = table.to_create_table_ddl(Dialect::MySql5).unwrap();
    assert_eq!(
        generated.statements,
        vec!["create table PERSON (id varchar(30),age integer not null, primary key (id));"]
    );
    assert_eq!(
        generated.warnings,
        vec![DdlWarning::TableCheckIgnored {
            dialect: Dialect::MySql5,
            table: "PERSON".into(),
            check: "age > 0".into(),
        }]
    );
}

#[test]
fn identity_without_support_fails_everywhere() {
    let mut table = Table::new("T");
    table.add_column("id").integer().identity();
    for dialect in Dialect::all() {
        let result = table.to_create_table_ddl(dialect);
        if dialect.features().supports_identity_columns {
            assert!(result.is_ok(), "{dialect}");
        } else {
            assert!(
                matches!(result, Err(DialectError::UnsupportedFeature { feature: "identity", .. })),
                "{dialect}"
            );
        }
    }
}

#[test]
fn identity_clause_shapes() {
    let mut table = Table::new("T");
    table.add_column("id").integer().identity().pkey();
    assert_eq!(
        ddl(&table, Dialect::Sqlite)[0],
        "create table T (id integer, primary key (id));"
    );
    assert_eq!(
        ddl(&table, Dialect::SqlServer2008)[0],
        "create table T (id int identity not null, primary key (id));"
    );
    assert_eq!(
        ddl(&table, Dialect::Informix)[0],
        "create table T (id serial not null, primary key (id));"
    );
    assert_eq!(
        ddl(&table, Dialect::MySql57)[0],
        "create table T (id integer not null auto_increment, primary key (id)) engine=InnoDB;"
    );
    assert_eq!(
        ddl(&table, Dialect::Oracle12c)[0],
        "create table T (id number(10,0) generated as identity, primary key (id));"
    );
}

#[test]
fn case_insensitive_columns_render_once() {
    let mut table = Table::new("T");
    table.add_column("Id").integer();
    table.add_column("ID").big_int();
    assert_eq!(table.column_count(), 1);
    assert_eq!(ddl(&table, Dialect::H2), vec!["create table T (ID bigint);"]);
}

#[test]
fn statement_order_is_create_unique_comment() {
    let mut table = Table::new("ACCOUNT");
    table.add_column("id").big_int().pkey().comment("key");
    table.add_column("login").string(40).unique().comment("login name");
    table.add_column("mail").string(80).unique();
    let statements = ddl(&table, Dialect::Oracle10g);
    assert_eq!(
        statements,
        vec![
            "create table ACCOUNT (id number(19,0),login varchar2(40),mail varchar2(80), primary key (id));",
            "alter table ACCOUNT add constraint UK_ACCOUNT_login unique (login);",
            "alter table ACCOUNT add constraint UK_ACCOUNT_mail unique (mail);",
            "comment on column ACCOUNT.id is 'key';",
            "comment on column ACCOUNT.login is 'login name';",
        ]
    );
}

#[test]
fn reserved_names_fail_before_output() {
    let mut table = Table::new("ORDER");
    table.add_column("id").integer();
    assert_eq!(
        ddl_err(&table, Dialect::H2),
        DialectError::ReservedWord {
            identifier: "ORDER".into(),
            dialect: Dialect::H2
        }
    );

    let mut table = Table::new("T");
    table.add_column("id").integer().unique_named("rownum");
    assert!(matches!(
        ddl_err(&table, Dialect::Oracle9i),
        DialectError::ReservedWord { .. }
    ));
    assert!(table.to_create_table_ddl(Dialect::H2).is_ok());

    let mut table = Table::new("T");
    table.add_column("id").integer().pkey().pkey_name("order");
    assert_eq!(
        table.to_create_table_ddl(Dialect::H2),
        Err(DialectError::ReservedWord {
            identifier: "order".into(),
            dialect: Dialect::H2
        })
    );

    let mut table = Table::new("\"ORDER\"");
    table.add_column("id").integer();
    assert_eq!(
        ddl(&table, Dialect::PostgreSql95),
        vec!["create table \"ORDER\" (id int4);"]
    );
}

#[test]
fn unspellable_type_is_fatal() {
    let mut table = Table::new("T");
    table.add_column("payload").of_type(Type::JavaObject);
    assert_eq!(
        ddl_err(&table, Dialect::MySql5),
        DialectError::UnsupportedType {
            dialect: Dialect::MySql5,
            ty: Type::JavaObject
        }
    );
    assert_eq!(ddl(&table, Dialect::H2), vec!["create table T (payload other);"]);
}

#[test]
fn strict_collects_every_warning() {
    let mut table = person();
    table.check("age > 0");
    table.comment("people");
    table.column_mut("age").unwrap().check("age < 200").comment("years");
    let options = DdlOptions {
        strict: true,
        ..DdlOptions::default()
    };
    let err = table
        .to_create_table_ddl_with(Dialect::TimesTen, options)
        .unwrap_err();
    let DialectError::Strict(warnings) = err else {
        panic!("expected a strict mode error");
    };
    assert_eq!(warnings.len(), 4);
}

#[test]
fn tables_load_from_json() {
    let json = r#"[
        {
            "name": "BOOK",
            "columns": [
                {"name": "isbn", "type": "CHAR", "lengths": {"length": 13}, "pkey": true},
                {"name": "title", "type": "VARCHAR", "lengths": {"length": 200}, "not_null": true},
                {"name": "price", "type": "DECIMAL", "lengths": {"precision": 8, "scale": 2}}
            ]
        }
    ]"#;
    let tables: Vec<Table> = serde_json::from_str(json).unwrap();
    assert_eq!(
        ddl(&tables[0], Dialect::PostgreSql95),
        vec!["create table BOOK (isbn char(13),title varchar(200) not null,price numeric(8,2), primary key (isbn));"]
    );
}

#[test]
fn id_generator_names_resolve_without_changing_ddl() {
    let mut table = Table::new("TOKEN");
    table.add_column("id").string(25).pkey().id_generator("UUID25");
    table.add_column("other").string(32).id_generator("sequence");

    let id = table.column("id").unwrap().builtin_id_generator().unwrap();
    assert_eq!(id.name(), "uuid25");
    assert_eq!(id.next_id(Dialect::MySql55).unwrap().len(), 25);
    assert!(table.column("other").unwrap().builtin_id_generator().is_none());
    assert_eq!(builtin_generator("uuid36").unwrap().name(), "uuid36");

    assert_eq!(
        ddl(&table, Dialect::H2),
        vec!["create table TOKEN (id varchar(25),other varchar(32), primary key (id));"]
    );
}
