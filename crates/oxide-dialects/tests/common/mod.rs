#![allow(dead_code)]

use oxide_dialects::{Dialect, DialectError, Table};

/// `PERSON (id varchar(30) primary key, age integer not null)`.
pub fn person() -> Table {
    let mut table = Table::new("PERSON");
    table.add_column("id").string(30).pkey();
    table.add_column("age").integer().not_null();
    table
}

pub fn ddl(table: &Table, dialect: Dialect) -> Vec<String> {
    table
        .to_create_table_ddl(dialect)
        .unwrap_or_else(|e| panic!("Failed to render {} for {dialect}: {e}", table.name()))
        .statements
}

pub fn ddl_err(table: &Table, dialect: Dialect) -> DialectError {
    table
        .to_create_table_ddl(dialect)
        .expect_err(&format!("Expected {} to fail on {dialect}", table.name()))
}

pub fn page(dialect: Dialect, page_number: u64, page_size: u64, sql: &str) -> String {
    dialect
        .paginate(page_number, page_size, sql)
        .unwrap_or_else(|e| panic!("Failed to paginate on {dialect}: {e}"))
}
