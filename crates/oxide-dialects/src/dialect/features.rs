//! Per-dialect DDL capability records.

use super::Dialect;

/// Everything the DDL generator needs to know about a dialect besides its
/// type spellings.
///
/// Records are `'static` and never change once the program is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DdlFeatures {
    /// Header used when the table has a primary key.
    pub create_table_string: &'static str,
    /// Header used when the table has no primary key.
    pub create_multiset_table_string: &'static str,
    /// Whether the engine can generate column values itself.
    pub supports_identity_columns: bool,
    /// Whether the column type precedes the identity keyword.
    pub has_data_type_in_identity_column: bool,
    /// Identity clause for non-BIGINT columns.
    pub identity_column_string: &'static str,
    /// Identity clause for BIGINT columns.
    pub identity_column_string_bigint: &'static str,
    /// Appended to nullable columns; empty or `" null"`.
    pub null_column_string: &'static str,
    /// Whether `check (...)` is accepted on a column.
    pub supports_column_check: bool,
    /// Whether `check (...)` is accepted on the table.
    pub supports_table_check: bool,
    /// Whether `comment on column ...` statements are accepted.
    pub supports_comment_on: bool,
    /// Inline column comment, `_COMMENT` is replaced by the text. Empty when
    /// the dialect has no inline form.
    pub column_comment: &'static str,
    /// Inline table comment appended after the engine suffix, same
    /// placeholder. Empty when the dialect has no inline form.
    pub table_comment: &'static str,
    /// Table type or engine clause appended after the closing parenthesis.
    pub engine_suffix: &'static str,
}

/// Placeholder replaced by comment text in comment templates.
pub const COMMENT_PLACEHOLDER: &str = "_COMMENT";

impl DdlFeatures {
    /// Returns true if a column comment can be written inside the
    /// CREATE TABLE statement.
    #[must_use]
    pub const fn supports_inline_column_comment(&self) -> bool {
        !self.column_comment.is_empty()
    }
}

static ANSI: DdlFeatures = DdlFeatures {
    create_table_string: "create table",
    create_multiset_table_string: "create table",
    supports_identity_columns: false,
    has_data_type_in_identity_column: true,
    identity_column_string: "",
    identity_column_string_bigint: "",
    null_column_string: "",
    supports_column_check: true,
    supports_table_check: true,
    supports_comment_on: false,
    column_comment: "",
    table_comment: "",
    engine_suffix: "",
};

static SQLITE: DdlFeatures = DdlFeatures {
    supports_identity_columns: true,
    has_data_type_in_identity_column: false,
    identity_column_string: "integer",
    identity_column_string_bigint: "integer",
    ..ANSI
};

static DESKTOP: DdlFeatures = DdlFeatures {
    supports_column_check: false,
    supports_table_check: false,
    ..ANSI
};

static ACCESS: DdlFeatures = DdlFeatures {
    supports_identity_columns: true,
    has_data_type_in_identity_column: false,
    identity_column_string: "counter not null",
    identity_column_string_bigint: "counter not null",
    ..DESKTOP
};

static CACHE: DdlFeatures = DdlFeatures {
    supports_identity_columns: true,
    identity_column_string: "identity",
    identity_column_string_bigint: "identity",
    ..ANSI
};

static CUBRID: DdlFeatures = DdlFeatures {
    supports_identity_columns: true,
    identity_column_string: "not null auto_increment",
    identity_column_string_bigint: "not null auto_increment",
    supports_column_check: false,
    supports_table_check: false,
    ..ANSI
};

static DB2: DdlFeatures = DdlFeatures {
    supports_identity_columns: true,
    identity_column_string: "generated by default as identity",
    identity_column_string_bigint: "generated by default as identity",
    supports_comment_on: true,
    ..ANSI
};

static DERBY: DdlFeatures = DdlFeatures {
    supports_comment_on: false,
    ..DB2
};

static H2: DdlFeatures = DdlFeatures {
    supports_identity_columns: true,
    identity_column_string: "generated by default as identity",
    identity_column_string_bigint: "generated by default as identity",
    supports_comment_on: true,
    ..ANSI
};

static HANA_COLUMN: DdlFeatures = DdlFeatures {
    create_table_string: "create column table",
    create_multiset_table_string: "create column table",
    supports_identity_columns: true,
    identity_column_string: "generated by default as identity",
    identity_column_string_bigint: "generated by default as identity",
    supports_column_check: false,
    supports_table_check: false,
    supports_comment_on: true,
    ..ANSI
};

static HANA_ROW: DdlFeatures = DdlFeatures {
    create_table_string: "create row table",
    create_multiset_table_string: "create row table",
    ..HANA_COLUMN
};

static HSQL: DdlFeatures = DdlFeatures {
    supports_identity_columns: true,
    identity_column_string: "generated by default as identity (start with 1)",
    identity_column_string_bigint: "generated by default as identity (start with 1)",
    supports_comment_on: true,
    ..ANSI
};

static INFORMIX: DdlFeatures = DdlFeatures {
    supports_identity_columns: true,
    has_data_type_in_identity_column: false,
    identity_column_string: "serial not null",
    identity_column_string_bigint: "serial8 not null",
    ..ANSI
};

static INGRES_IDENTITY: DdlFeatures = DdlFeatures {
    supports_identity_columns: true,
    identity_column_string: "not null generated by default as identity",
    identity_column_string_bigint: "not null generated by default as identity",
    ..ANSI
};

static JDATASTORE: DdlFeatures = DdlFeatures {
    supports_identity_columns: true,
    identity_column_string: "autoincrement",
    identity_column_string_bigint: "autoincrement",
    supports_column_check: false,
    supports_table_check: false,
    ..ANSI
};

static MYSQL: DdlFeatures = DdlFeatures {
    supports_identity_columns: true,
    identity_column_string: "not null auto_increment",
    identity_column_string_bigint: "not null auto_increment",
    supports_column_check: false,
    supports_table_check: false,
    column_comment: " comment '_COMMENT'",
    table_comment: " comment='_COMMENT'",
    ..ANSI
};

static MYSQL_OLD_INNODB: DdlFeatures = DdlFeatures {
    engine_suffix: " type=InnoDB",
    ..MYSQL
};

static MYSQL_OLD_MYISAM: DdlFeatures = DdlFeatures {
    engine_suffix: " type=MyISAM",
    ..MYSQL
};

static MYSQL_INNODB: DdlFeatures = DdlFeatures {
    engine_suffix: " engine=InnoDB",
    ..MYSQL
};

static MCKOI: DdlFeatures = DdlFeatures {
    supports_table_check: false,
    ..ANSI
};

static MIMER: DdlFeatures = DdlFeatures {
    supports_column_check: false,
    ..ANSI
};

static ORACLE: DdlFeatures = DdlFeatures {
    supports_comment_on: true,
    ..ANSI
};

static ORACLE_12C: DdlFeatures = DdlFeatures {
    supports_identity_columns: true,
    identity_column_string: "generated as identity",
    identity_column_string_bigint: "generated as identity",
    ..ORACLE
};

static POSTGRES: DdlFeatures = DdlFeatures {
    supports_identity_columns: true,
    has_data_type_in_identity_column: false,
    identity_column_string: "serial not null",
    identity_column_string_bigint: "bigserial not null",
    supports_comment_on: true,
    ..ANSI
};

static SQLSERVER: DdlFeatures = DdlFeatures {
    supports_identity_columns: true,
    identity_column_string: "identity not null",
    identity_column_string_bigint: "identity not null",
    null_column_string: " null",
    ..ANSI
};

static SYBASE_ANYWHERE: DdlFeatures = DdlFeatures {
    identity_column_string: "identity",
    identity_column_string_bigint: "identity",
    ..SQLSERVER
};

static TERADATA: DdlFeatures = DdlFeatures {
    create_multiset_table_string: "create multiset table",
    supports_comment_on: true,
    ..ANSI
};

static TERADATA_14: DdlFeatures = DdlFeatures {
    supports_identity_columns: true,
    identity_column_string: "generated by default as identity not null",
    identity_column_string_bigint: "generated by default as identity not null",
    ..TERADATA
};

static TIMESTEN: DdlFeatures = DdlFeatures {
    supports_column_check: false,
    supports_table_check: false,
    ..ANSI
};

/// Returns the feature record of `dialect`.
pub(super) fn of(dialect: Dialect) -> &'static DdlFeatures {
    match dialect {
        Dialect::Sqlite => &SQLITE,
        Dialect::Access => &ACCESS,
        Dialect::Excel
        | Dialect::Text
        | Dialect::Paradox
        | Dialect::Cobol
        | Dialect::Xml
        | Dialect::Dbf => &DESKTOP,
        Dialect::Cache71 => &CACHE,
        Dialect::Cubrid => &CUBRID,
        Dialect::Db2 | Dialect::Db2390 | Dialect::Db2400 => &DB2,
        Dialect::Derby | Dialect::DerbyTenFive | Dialect::DerbyTenSix | Dialect::DerbyTenSeven => {
            &DERBY
        }
        Dialect::Firebird
        | Dialect::Interbase
        | Dialect::Pointbase
        | Dialect::Progress
        | Dialect::RdmsOs2200
        | Dialect::SapDb
        | Dialect::FrontBase
        | Dialect::Ingres => &ANSI,
        Dialect::H2 => &H2,
        Dialect::HanaColumnStore => &HANA_COLUMN,
        Dialect::HanaRowStore => &HANA_ROW,
        Dialect::Hsql => &HSQL,
        Dialect::Informix | Dialect::Informix10 => &INFORMIX,
        Dialect::Ingres9 | Dialect::Ingres10 => &INGRES_IDENTITY,
        Dialect::JDataStore => &JDATASTORE,
        Dialect::MySql | Dialect::MySql5 => &MYSQL,
        Dialect::MySqlInnoDb => &MYSQL_OLD_INNODB,
        Dialect::MySqlMyIsam => &MYSQL_OLD_MYISAM,
        Dialect::MySql5InnoDb
        | Dialect::MySql55
        | Dialect::MySql57
        | Dialect::MySql57InnoDb
        | Dialect::MariaDb
        | Dialect::MariaDb53 => &MYSQL_INNODB,
        Dialect::Mckoi => &MCKOI,
        Dialect::MimerSql => &MIMER,
        Dialect::DataDirectOracle9
        | Dialect::Oracle
        | Dialect::Oracle8i
        | Dialect::Oracle9
        | Dialect::Oracle9i
        | Dialect::Oracle10g => &ORACLE,
        Dialect::Oracle12c => &ORACLE_12C,
        Dialect::PostgresPlus
        | Dialect::PostgreSql
        | Dialect::PostgreSql81
        | Dialect::PostgreSql82
        | Dialect::PostgreSql9
        | Dialect::PostgreSql91
        | Dialect::PostgreSql92
        | Dialect::PostgreSql93
        | Dialect::PostgreSql94
        | Dialect::PostgreSql95 => &POSTGRES,
        Dialect::SqlServer
        | Dialect::SqlServer2005
        | Dialect::SqlServer2008
        | Dialect::SqlServer2012
        | Dialect::Sybase
        | Dialect::Sybase11
        | Dialect::SybaseAse15
        | Dialect::SybaseAse157 => &SQLSERVER,
        Dialect::SybaseAnywhere => &SYBASE_ANYWHERE,
        Dialect::Teradata => &TERADATA,
        Dialect::Teradata14 => &TERADATA_14,
        Dialect::TimesTen => &TIMESTEN,
    }
}
