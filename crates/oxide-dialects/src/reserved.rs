//! Reserved word checks for table, column and constraint names.

use crate::dialect::{Dialect, DialectFamily};
use crate::error::{DialectError, Result};

/// Rejects identifiers a dialect can not use unquoted.
pub trait ReservedWordChecker {
    /// Returns an error if `identifier` is not usable on `dialect`.
    ///
    /// # Errors
    ///
    /// [`DialectError::ReservedWord`] on a collision,
    /// [`DialectError::EmptyIdentifier`] for an empty name.
    fn check(&self, identifier: &str, dialect: Dialect) -> Result<()>;
}

/// Built-in checker backed by the SQL standard keywords and per-family
/// extras.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqlKeywords;

impl SqlKeywords {
    /// Returns true if `word` is reserved on `dialect`, ignoring case.
    #[must_use]
    pub fn is_reserved(word: &str, dialect: Dialect) -> bool {
        let upper = word.to_ascii_uppercase();
        let upper = upper.as_str();
        ANSI.contains(&upper) || family_keywords(dialect.family()).contains(&upper)
    }
}

impl ReservedWordChecker for SqlKeywords {
    fn check(&self, identifier: &str, dialect: Dialect) -> Result<()> {
        let trimmed = identifier.trim();
        if trimmed.is_empty() {
            return Err(DialectError::EmptyIdentifier);
        }
        if is_quoted(trimmed) {
            return Ok(());
        }
        if Self::is_reserved(trimmed, dialect) {
            return Err(DialectError::ReservedWord {
                identifier: identifier.to_string(),
                dialect,
            });
        }
        Ok(())
    }
}

/// Accepts every non-empty identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoCheck;

impl ReservedWordChecker for NoCheck {
    fn check(&self, identifier: &str, _dialect: Dialect) -> Result<()> {
        if identifier.trim().is_empty() {
            Err(DialectError::EmptyIdentifier)
        } else {
            Ok(())
        }
    }
}

fn is_quoted(identifier: &str) -> bool {
    identifier.starts_with(['"', '`', '['])
}

const ANSI: &[&str] = &[
    "ADD", "ALL", "ALTER", "AND", "ANY", "AS", "ASC", "AUTHORIZATION", "BETWEEN", "BY",
    "CASCADE", "CASE", "CAST", "CHECK", "COLUMN", "COMMIT", "CONSTRAINT", "CREATE", "CROSS",
    "CURRENT", "CURRENT_DATE", "CURRENT_TIME", "CURRENT_TIMESTAMP", "CURRENT_USER", "CURSOR",
    "DEFAULT", "DELETE", "DESC", "DISTINCT", "DROP", "ELSE", "END", "ESCAPE", "EXCEPT",
    "EXISTS", "FALSE", "FETCH", "FOR", "FOREIGN", "FROM", "FULL", "GRANT", "GROUP", "HAVING",
    "IN", "INNER", "INSERT", "INTERSECT", "INTO", "IS", "JOIN", "LEFT", "LIKE", "NATURAL",
    "NOT", "NULL", "OF", "ON", "OR", "ORDER", "OUTER", "PRIMARY", "REFERENCES", "REVOKE",
    "RIGHT", "ROLLBACK", "SELECT", "SESSION_USER", "SET", "SOME", "TABLE", "THEN", "TO",
    "TRUE", "UNION", "UNIQUE", "UPDATE", "USER", "USING", "VALUES", "VIEW", "WHEN", "WHERE",
    "WITH",
];

const MYSQL: &[&str] = &[
    "DATABASE", "DATABASES", "DUAL", "INDEX", "KEY", "KEYS", "LIMIT", "LOCK", "REGEXP",
    "RLIKE", "SCHEMA", "SHOW", "UNSIGNED", "ZEROFILL",
];

const ORACLE: &[&str] = &[
    "ACCESS", "AUDIT", "CLUSTER", "COMMENT", "CONNECT", "FILE", "LEVEL", "LONG", "MINUS",
    "MODE", "NUMBER", "RAW", "RESOURCE", "ROWID", "ROWNUM", "SESSION", "SIZE", "SYSDATE",
    "UID", "VARCHAR2",
];

const POSTGRES: &[&str] = &[
    "ANALYSE", "ANALYZE", "ILIKE", "LIMIT", "OFFSET", "RETURNING", "VERBOSE",
];

const SQLSERVER: &[&str] = &[
    "BROWSE", "CLUSTERED", "DBCC", "IDENTITY", "NONCLUSTERED", "PERCENT", "PIVOT", "RULE",
    "TEXTSIZE", "TOP", "TRAN",
];

const DB2: &[&str] = &["LOCKSIZE", "NODENAME", "ROWNUMBER"];

const EMPTY: &[&str] = &[];

const fn family_keywords(family: DialectFamily) -> &'static [&'static str] {
    match family {
        DialectFamily::MySql | DialectFamily::Cubrid => MYSQL,
        DialectFamily::Oracle | DialectFamily::TimesTen => ORACLE,
        DialectFamily::Postgres | DialectFamily::Hana => POSTGRES,
        DialectFamily::SqlServer | DialectFamily::Sybase => SQLSERVER,
        DialectFamily::Db2 | DialectFamily::Derby => DB2,
        _ => EMPTY,
    }
}
