//! The closed set of supported SQL dialects.
//!
//! A [`Dialect`] is a plain identifier. Everything dialect specific hangs off
//! static tables keyed by it:
//!
//! - [`Dialect::features`] returns the [`DdlFeatures`] record driving DDL
//!   generation,
//! - [`Dialect::translate_to_ddl_type`] spells a canonical [`Type`] the way
//!   the dialect writes it in a column definition,
//! - [`Dialect::pagination_template`](crate::pagination) and
//!   [`Dialect::top_limit_template`](crate::pagination) return the paging
//!   templates.
//!
//! All of these are `'static` data, so a dialect can be shared freely across
//! threads and never needs initialization.

mod features;
mod type_names;

pub use features::{DdlFeatures, COMMENT_PLACEHOLDER};
pub use type_names::TypeRule;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::{DialectError, Result};
use crate::table::ColumnLengths;
use crate::types::Type;

/// Suffix carried by every canonical dialect name.
const NAME_SUFFIX: &str = "Dialect";

/// A named database product and version.
///
/// The canonical name is what [`Display`](std::fmt::Display) prints, e.g.
/// `MySQL55Dialect`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    IntoStaticStr,
    strum::Display,
)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Dialect {
    #[strum(to_string = "SQLiteDialect")]
    Sqlite,
    #[strum(to_string = "AccessDialect")]
    Access,
    #[strum(to_string = "ExcelDialect")]
    Excel,
    #[strum(to_string = "TextDialect")]
    Text,
    #[strum(to_string = "ParadoxDialect")]
    Paradox,
    #[strum(to_string = "CobolDialect")]
    Cobol,
    #[strum(to_string = "XMLDialect")]
    Xml,
    #[strum(to_string = "DbfDialect")]
    Dbf,
    #[strum(to_string = "Cache71Dialect")]
    Cache71,
    #[strum(to_string = "CUBRIDDialect")]
    Cubrid,
    #[strum(to_string = "DataDirectOracle9Dialect")]
    DataDirectOracle9,
    #[strum(to_string = "DB2Dialect")]
    Db2,
    #[strum(to_string = "DB2390Dialect")]
    Db2390,
    #[strum(to_string = "DB2400Dialect")]
    Db2400,
    #[strum(to_string = "DerbyDialect")]
    Derby,
    #[strum(to_string = "DerbyTenFiveDialect")]
    DerbyTenFive,
    #[strum(to_string = "DerbyTenSixDialect")]
    DerbyTenSix,
    #[strum(to_string = "DerbyTenSevenDialect")]
    DerbyTenSeven,
    #[strum(to_string = "FirebirdDialect")]
    Firebird,
    #[strum(to_string = "FrontBaseDialect")]
    FrontBase,
    #[strum(to_string = "H2Dialect")]
    H2,
    #[strum(to_string = "HANAColumnStoreDialect")]
    HanaColumnStore,
    #[strum(to_string = "HANARowStoreDialect")]
    HanaRowStore,
    #[strum(to_string = "HSQLDialect")]
    Hsql,
    #[strum(to_string = "InformixDialect")]
    Informix,
    #[strum(to_string = "Informix10Dialect")]
    Informix10,
    #[strum(to_string = "IngresDialect")]
    Ingres,
    #[strum(to_string = "Ingres9Dialect")]
    Ingres9,
    #[strum(to_string = "Ingres10Dialect")]
    Ingres10,
    #[strum(to_string = "InterbaseDialect")]
    Interbase,
    #[strum(to_string = "JDataStoreDialect")]
    JDataStore,
    #[strum(to_string = "MariaDBDialect")]
    MariaDb,
    #[strum(to_string = "MariaDB53Dialect")]
    MariaDb53,
    #[strum(to_string = "MckoiDialect")]
    Mckoi,
    #[strum(to_string = "MimerSQLDialect")]
    MimerSql,
    #[strum(to_string = "MySQLDialect")]
    MySql,
    #[strum(to_string = "MySQL5Dialect")]
    MySql5,
    #[strum(to_string = "MySQL5InnoDBDialect")]
    MySql5InnoDb,
    #[strum(to_string = "MySQL55Dialect")]
    MySql55,
    #[strum(to_string = "MySQL57Dialect")]
    MySql57,
    #[strum(to_string = "MySQL57InnoDBDialect")]
    MySql57InnoDb,
    #[strum(to_string = "MySQLInnoDBDialect")]
    MySqlInnoDb,
    #[strum(to_string = "MySQLMyISAMDialect")]
    MySqlMyIsam,
    #[strum(to_string = "OracleDialect")]
    Oracle,
    #[strum(to_string = "Oracle8iDialect")]
    Oracle8i,
    #[strum(to_string = "Oracle9Dialect")]
    Oracle9,
    #[strum(to_string = "Oracle9iDialect")]
    Oracle9i,
    #[strum(to_string = "Oracle10gDialect")]
    Oracle10g,
    #[strum(to_string = "Oracle12cDialect")]
    Oracle12c,
    #[strum(to_string = "PointbaseDialect")]
    Pointbase,
    #[strum(to_string = "PostgresPlusDialect")]
    PostgresPlus,
    #[strum(to_string = "PostgreSQLDialect")]
    PostgreSql,
    #[strum(to_string = "PostgreSQL81Dialect")]
    PostgreSql81,
    #[strum(to_string = "PostgreSQL82Dialect")]
    PostgreSql82,
    #[strum(to_string = "PostgreSQL9Dialect")]
    PostgreSql9,
    #[strum(to_string = "PostgreSQL91Dialect")]
    PostgreSql91,
    #[strum(to_string = "PostgreSQL92Dialect")]
    PostgreSql92,
    #[strum(to_string = "PostgreSQL93Dialect")]
    PostgreSql93,
    #[strum(to_string = "PostgreSQL94Dialect")]
    PostgreSql94,
    #[strum(to_string = "PostgreSQL95Dialect")]
    PostgreSql95,
    #[strum(to_string = "ProgressDialect")]
    Progress,
    #[strum(to_string = "RDMSOS2200Dialect")]
    RdmsOs2200,
    #[strum(to_string = "SAPDBDialect")]
    SapDb,
    #[strum(to_string = "SQLServerDialect")]
    SqlServer,
    #[strum(to_string = "SQLServer2005Dialect")]
    SqlServer2005,
    #[strum(to_string = "SQLServer2008Dialect")]
    SqlServer2008,
    #[strum(to_string = "SQLServer2012Dialect")]
    SqlServer2012,
    #[strum(to_string = "SybaseDialect")]
    Sybase,
    #[strum(to_string = "Sybase11Dialect")]
    Sybase11,
    #[strum(to_string = "SybaseAnywhereDialect")]
    SybaseAnywhere,
    #[strum(to_string = "SybaseASE15Dialect")]
    SybaseAse15,
    #[strum(to_string = "SybaseASE157Dialect")]
    SybaseAse157,
    #[strum(to_string = "TeradataDialect")]
    Teradata,
    #[strum(to_string = "Teradata14Dialect")]
    Teradata14,
    #[strum(to_string = "TimesTenDialect")]
    TimesTen,
}

/// Groups of dialects sharing syntax and type spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum DialectFamily {
    /// SQLite.
    Sqlite,
    /// ODBC/file based desktop databases (Access, Excel, dBase, ...).
    Desktop,
    /// InterSystems Caché.
    Cache,
    /// CUBRID.
    Cubrid,
    /// IBM DB2.
    Db2,
    /// Apache Derby.
    Derby,
    /// Firebird and Interbase.
    Firebird,
    /// FrontBase.
    FrontBase,
    /// H2.
    H2,
    /// SAP HANA.
    Hana,
    /// HyperSQL.
    Hsql,
    /// IBM Informix.
    Informix,
    /// Ingres.
    Ingres,
    /// Borland JDataStore.
    JDataStore,
    /// MySQL and MariaDB.
    MySql,
    /// Mckoi.
    Mckoi,
    /// Mimer SQL.
    Mimer,
    /// Oracle.
    Oracle,
    /// Pointbase.
    Pointbase,
    /// PostgreSQL and Postgres Plus.
    Postgres,
    /// Progress.
    Progress,
    /// Unisys RDMS.
    Rdms,
    /// SAP DB / MaxDB.
    SapDb,
    /// Microsoft SQL Server.
    SqlServer,
    /// Sybase ASE and Anywhere.
    Sybase,
    /// Teradata.
    Teradata,
    /// Oracle TimesTen.
    TimesTen,
}

impl Dialect {
    /// Returns the canonical name, e.g. `"MySQL55Dialect"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Iterates over every dialect.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Resolves a dialect by name, ignoring ASCII case.
    ///
    /// Accepts both the canonical name (`"MySQL55Dialect"`) and the name
    /// without its `Dialect` suffix (`"mysql55"`).
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnknownDialect`] if no dialect matches.
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = name.trim();
        if wanted.is_empty() {
            return Err(DialectError::UnknownDialect(name.to_string()));
        }
        Self::iter()
            .find(|d| {
                let full = d.name();
                let short = &full[..full.len() - NAME_SUFFIX.len()];
                full.eq_ignore_ascii_case(wanted) || short.eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| DialectError::UnknownDialect(name.to_string()))
    }

    /// Returns the family this dialect belongs to.
    #[must_use]
    pub const fn family(self) -> DialectFamily {
        match self {
            Self::Sqlite => DialectFamily::Sqlite,
            Self::Access
            | Self::Excel
            | Self::Text
            | Self::Paradox
            | Self::Cobol
            | Self::Xml
            | Self::Dbf => DialectFamily::Desktop,
            Self::Cache71 => DialectFamily::Cache,
            Self::Cubrid => DialectFamily::Cubrid,
            Self::Db2 | Self::Db2390 | Self::Db2400 => DialectFamily::Db2,
            Self::Derby | Self::DerbyTenFive | Self::DerbyTenSix | Self::DerbyTenSeven => {
                DialectFamily::Derby
            }
            Self::Firebird | Self::Interbase => DialectFamily::Firebird,
            Self::FrontBase => DialectFamily::FrontBase,
            Self::H2 => DialectFamily::H2,
            Self::HanaColumnStore | Self::HanaRowStore => DialectFamily::Hana,
            Self::Hsql => DialectFamily::Hsql,
            Self::Informix | Self::Informix10 => DialectFamily::Informix,
            Self::Ingres | Self::Ingres9 | Self::Ingres10 => DialectFamily::Ingres,
            Self::JDataStore => DialectFamily::JDataStore,
            Self::MariaDb
            | Self::MariaDb53
            | Self::MySql
            | Self::MySql5
            | Self::MySql5InnoDb
            | Self::MySql55
            | Self::MySql57
            | Self::MySql57InnoDb
            | Self::MySqlInnoDb
            | Self::MySqlMyIsam => DialectFamily::MySql,
            Self::Mckoi => DialectFamily::Mckoi,
            Self::MimerSql => DialectFamily::Mimer,
            Self::DataDirectOracle9
            | Self::Oracle
            | Self::Oracle8i
            | Self::Oracle9
            | Self::Oracle9i
            | Self::Oracle10g
            | Self::Oracle12c => DialectFamily::Oracle,
            Self::Pointbase => DialectFamily::Pointbase,
            Self::PostgresPlus
            | Self::PostgreSql
            | Self::PostgreSql81
            | Self::PostgreSql82
            | Self::PostgreSql9
            | Self::PostgreSql91
            | Self::PostgreSql92
            | Self::PostgreSql93
            | Self::PostgreSql94
            | Self::PostgreSql95 => DialectFamily::Postgres,
            Self::Progress => DialectFamily::Progress,
            Self::RdmsOs2200 => DialectFamily::Rdms,
            Self::SapDb => DialectFamily::SapDb,
            Self::SqlServer | Self::SqlServer2005 | Self::SqlServer2008 | Self::SqlServer2012 => {
                DialectFamily::SqlServer
            }
            Self::Sybase
            | Self::Sybase11
            | Self::SybaseAnywhere
            | Self::SybaseAse15
            | Self::SybaseAse157 => DialectFamily::Sybase,
            Self::Teradata | Self::Teradata14 => DialectFamily::Teradata,
            Self::TimesTen => DialectFamily::TimesTen,
        }
    }

    /// Returns the DDL capability record of this dialect.
    #[must_use]
    pub fn features(self) -> &'static DdlFeatures {
        features::of(self)
    }

    /// Returns the type rule used to spell `ty`, if the dialect has one.
    #[must_use]
    pub fn type_rule(self, ty: Type) -> Option<TypeRule> {
        type_names::rule(self, ty)
    }

    /// Spells a canonical type as a column type of this dialect.
    ///
    /// `$l`, `$p` and `$s` in the dialect's template are replaced by the
    /// length, precision and scale in `lengths`, falling back to
    /// [`ColumnLengths::DEFAULT_LENGTH`], [`ColumnLengths::DEFAULT_PRECISION`]
    /// and [`ColumnLengths::DEFAULT_SCALE`].
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnsupportedType`] if the dialect has no
    /// spelling for `ty`.
    pub fn translate_to_ddl_type(self, ty: Type, lengths: &ColumnLengths) -> Result<String> {
        self.type_rule(ty)
            .map(|rule| rule.render(lengths))
            .ok_or(DialectError::UnsupportedType { dialect: self, ty })
    }
}

impl FromStr for Dialect {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for Dialect {
    type Error = DialectError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_name(&value)
    }
}
