//! Dialect spellings of the canonical types.
//!
//! Every family starts from the ANSI spellings and overrides what differs.
//! Templates take `$l` (length), `$p` (precision) and `$s` (scale).

#![allow(clippy::match_same_arms)]

use super::{Dialect, DialectFamily};
use crate::table::ColumnLengths;
use crate::types::Type;

/// How one canonical type is written by one dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRule {
    /// Template with `$l`, `$p`, `$s` placeholders.
    pub template: &'static str,
    /// Longest length the template accepts and the spelling used beyond it.
    pub ceiling: Option<(u32, &'static str)>,
}

impl TypeRule {
    const fn plain(template: &'static str) -> Self {
        Self {
            template,
            ceiling: None,
        }
    }

    const fn capped(template: &'static str, max: u32, fallback: &'static str) -> Self {
        Self {
            template,
            ceiling: Some((max, fallback)),
        }
    }

    /// Renders the rule for the given column parameters.
    #[must_use]
    pub fn render(&self, lengths: &ColumnLengths) -> String {
        let length = lengths.length.unwrap_or(ColumnLengths::DEFAULT_LENGTH);
        let template = match self.ceiling {
            Some((max, fallback)) if length > max => fallback,
            _ => self.template,
        };
        if !template.contains('$') {
            return template.to_string();
        }
        let precision = lengths.precision.unwrap_or(ColumnLengths::DEFAULT_PRECISION);
        let scale = lengths.scale.unwrap_or(ColumnLengths::DEFAULT_SCALE);
        template
            .replace("$l", &length.to_string())
            .replace("$p", &precision.to_string())
            .replace("$s", &scale.to_string())
    }
}

use TypeRule as R;

pub(super) fn rule(dialect: Dialect, ty: Type) -> Option<TypeRule> {
    match dialect.family() {
        DialectFamily::Sqlite => sqlite(ty),
        DialectFamily::Desktop => desktop(ty),
        DialectFamily::Cache => cache(ty),
        DialectFamily::Cubrid => cubrid(ty),
        DialectFamily::Db2 => db2(ty),
        DialectFamily::Derby => derby(ty),
        DialectFamily::Firebird => firebird(dialect, ty),
        DialectFamily::FrontBase => frontbase(ty),
        DialectFamily::H2 | DialectFamily::Hsql => h2(dialect, ty),
        DialectFamily::Hana => hana(ty),
        DialectFamily::Informix => informix(ty),
        DialectFamily::Ingres => ingres(dialect, ty),
        DialectFamily::JDataStore => jdatastore(ty),
        DialectFamily::MySql => mysql(dialect, ty),
        DialectFamily::Mckoi => mckoi(ty),
        DialectFamily::Mimer => mimer(ty),
        DialectFamily::Oracle => oracle(dialect, ty),
        DialectFamily::Pointbase => pointbase(ty),
        DialectFamily::Postgres => postgres(ty),
        DialectFamily::Progress => progress(ty),
        DialectFamily::Rdms => rdms(ty),
        DialectFamily::SapDb => sapdb(ty),
        DialectFamily::SqlServer => sqlserver(dialect, ty),
        DialectFamily::Sybase => sybase(dialect, ty),
        DialectFamily::Teradata => teradata(dialect, ty),
        DialectFamily::TimesTen => timesten(ty),
    }
}

const fn ansi(ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Bigint => R::plain("bigint"),
        Type::Binary => R::plain("binary($l)"),
        Type::Bit => R::plain("bit"),
        Type::Blob => R::plain("blob"),
        Type::Boolean => R::plain("boolean"),
        Type::Char => R::plain("char($l)"),
        Type::Clob => R::plain("clob"),
        Type::Date => R::plain("date"),
        Type::Decimal => R::plain("decimal($p,$s)"),
        Type::Double => R::plain("double precision"),
        Type::Float => R::plain("float"),
        Type::Integer => R::plain("integer"),
        Type::Longnvarchar | Type::Nvarchar => R::plain("nvarchar($l)"),
        Type::Longvarbinary | Type::Varbinary => R::plain("varbinary($l)"),
        Type::Longvarchar | Type::Varchar => R::plain("varchar($l)"),
        Type::Nchar => R::plain("nchar($l)"),
        Type::Nclob => R::plain("nclob"),
        Type::Numeric => R::plain("numeric($p,$s)"),
        Type::Real => R::plain("real"),
        Type::Smallint => R::plain("smallint"),
        Type::Time => R::plain("time"),
        Type::Timestamp => R::plain("timestamp"),
        Type::Tinyint => R::plain("tinyint"),
        Type::JavaObject | Type::Other => return None,
    })
}

const fn sqlite(ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Binary | Type::Varbinary | Type::Longvarbinary => R::plain("blob"),
        Type::Bit | Type::Boolean => R::plain("integer"),
        Type::Char => R::plain("char"),
        Type::Decimal => R::plain("decimal"),
        Type::Double => R::plain("double"),
        Type::Longnvarchar => R::plain("longnvarchar"),
        Type::Longvarchar => R::plain("longvarchar"),
        Type::Nchar => R::plain("nchar"),
        Type::Numeric => R::plain("numeric"),
        Type::Nvarchar => R::plain("nvarchar"),
        _ => return ansi(ty),
    })
}

const fn desktop(ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Bigint => R::plain("integer"),
        Type::Blob | Type::Longvarbinary => R::plain("longbinary"),
        Type::Boolean => R::plain("bit"),
        Type::Clob | Type::Longvarchar | Type::Longnvarchar | Type::Nclob => R::plain("memo"),
        Type::Date | Type::Time | Type::Timestamp => R::plain("datetime"),
        Type::Double => R::plain("double"),
        Type::Nchar => R::plain("char($l)"),
        Type::Numeric => R::plain("decimal($p,$s)"),
        Type::Nvarchar => R::capped("varchar($l)", 255, "memo"),
        Type::Tinyint => R::plain("byte"),
        Type::Varchar => R::capped("varchar($l)", 255, "memo"),
        _ => return ansi(ty),
    })
}

const fn cache(ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Binary | Type::Varbinary => R::plain("varbinary($l)"),
        Type::Blob | Type::Longvarbinary => R::plain("longvarbinary"),
        Type::Boolean => R::plain("bit"),
        Type::Clob | Type::Longvarchar => R::plain("longvarchar"),
        Type::Double | Type::Float => R::plain("double"),
        Type::Numeric => R::plain("decimal($p,$s)"),
        _ => return ansi(ty),
    })
}

const fn cubrid(ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Binary => R::plain("bit($l)"),
        Type::Bit | Type::Boolean => R::plain("bit(8)"),
        Type::Double | Type::Real => R::plain("double"),
        Type::Integer => R::plain("int"),
        Type::Longvarchar => R::plain("string"),
        Type::Nvarchar | Type::Longnvarchar => R::plain("nchar varying($l)"),
        Type::Smallint | Type::Tinyint => R::plain("short"),
        Type::Varbinary | Type::Longvarbinary => R::plain("bit varying($l)"),
        _ => return ansi(ty),
    })
}

const fn db2(ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Binary | Type::Varbinary => R::plain("varchar($l) for bit data"),
        Type::Bit | Type::Boolean | Type::Tinyint => R::plain("smallint"),
        Type::Double => R::plain("double"),
        Type::Longnvarchar => R::plain("long vargraphic"),
        Type::Longvarbinary => R::plain("long varchar for bit data"),
        Type::Longvarchar => R::plain("long varchar"),
        Type::Nchar => R::plain("graphic($l)"),
        Type::Nclob => R::plain("dbclob"),
        Type::Nvarchar => R::plain("vargraphic($l)"),
        _ => return ansi(ty),
    })
}

const fn derby(ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Boolean => R::plain("boolean"),
        Type::Nchar => R::plain("char($l)"),
        Type::Nclob => R::plain("clob"),
        Type::Nvarchar => R::plain("varchar($l)"),
        Type::Longnvarchar => R::plain("long varchar"),
        _ => return db2(ty),
    })
}

const fn firebird(dialect: Dialect, ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Bigint if matches!(dialect, Dialect::Interbase) => R::plain("numeric(18,0)"),
        Type::Binary | Type::Blob | Type::Varbinary | Type::Longvarbinary => R::plain("blob"),
        Type::Bit | Type::Boolean | Type::Tinyint => R::plain("smallint"),
        Type::Clob | Type::Longvarchar | Type::Longnvarchar | Type::Nclob => {
            R::plain("blob sub_type 1")
        }
        Type::Decimal => R::plain("numeric($p,$s)"),
        Type::Nchar => R::plain("char($l)"),
        Type::Nvarchar => R::plain("varchar($l)"),
        Type::Real => R::plain("float"),
        _ => return ansi(ty),
    })
}

const fn frontbase(ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Bigint => R::plain("longint"),
        Type::Binary => R::plain("bit($l)"),
        Type::Tinyint => R::plain("smallint"),
        Type::Varbinary | Type::Longvarbinary => R::plain("bit varying($l)"),
        _ => return ansi(ty),
    })
}

const fn h2(dialect: Dialect, ty: Type) -> Option<TypeRule> {
    let hsql = matches!(dialect, Dialect::Hsql);
    Some(match ty {
        Type::Binary if !hsql => R::plain("binary"),
        Type::Bit if !hsql => R::plain("boolean"),
        Type::Double => R::plain("double"),
        Type::JavaObject | Type::Other => R::plain("other"),
        Type::Longvarbinary => R::plain("longvarbinary"),
        Type::Longvarchar => R::plain("longvarchar"),
        Type::Numeric => R::plain("decimal($p,$s)"),
        Type::Varbinary if !hsql => R::plain("binary($l)"),
        _ => return ansi(ty),
    })
}

const fn hana(ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Binary => R::plain("varbinary($l)"),
        Type::Bit => R::plain("tinyint"),
        Type::Double => R::plain("double"),
        Type::Longnvarchar => R::plain("nclob"),
        Type::Longvarbinary => R::plain("blob"),
        Type::Longvarchar => R::plain("clob"),
        Type::Numeric => R::plain("decimal($p,$s)"),
        Type::Varchar => R::capped("varchar($l)", 5000, "clob"),
        Type::Nvarchar => R::capped("nvarchar($l)", 5000, "nclob"),
        _ => return ansi(ty),
    })
}

const fn informix(ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Bigint => R::plain("int8"),
        Type::Binary | Type::Varbinary => R::plain("byte"),
        Type::Bit | Type::Tinyint => R::plain("smallint"),
        Type::Double => R::plain("float"),
        Type::Float | Type::Real => R::plain("smallfloat"),
        Type::Longnvarchar | Type::Longvarchar | Type::Nclob => R::plain("clob"),
        Type::Longvarbinary => R::plain("blob"),
        Type::Numeric => R::plain("decimal($p,$s)"),
        Type::Time => R::plain("datetime hour to second"),
        Type::Timestamp => R::plain("datetime year to fraction(5)"),
        Type::Varchar => R::capped("varchar($l)", 255, "lvarchar($l)"),
        _ => return ansi(ty),
    })
}

const fn ingres(dialect: Dialect, ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Bigint => R::plain("integer8"),
        Type::Binary => R::plain("byte($l)"),
        Type::Bit | Type::Boolean => R::plain("tinyint"),
        Type::Blob | Type::Longvarbinary => R::plain("long byte"),
        Type::Clob | Type::Longvarchar => R::plain("long varchar"),
        Type::Date if !matches!(dialect, Dialect::Ingres) => R::plain("ansidate"),
        Type::Double => R::plain("float"),
        Type::Longnvarchar | Type::Nclob => R::plain("long nvarchar"),
        Type::Numeric => R::plain("decimal($p,$s)"),
        Type::Varbinary => R::plain("varbyte($l)"),
        _ => return ansi(ty),
    })
}

const fn jdatastore(ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Bit => R::plain("tinyint"),
        Type::Blob | Type::Longvarbinary => R::plain("varbinary"),
        Type::Clob | Type::Longvarchar => R::plain("varchar"),
        Type::Double => R::plain("double"),
        _ => return ansi(ty),
    })
}

const fn mysql(dialect: Dialect, ty: Type) -> Option<TypeRule> {
    let max = match dialect {
        Dialect::MySql | Dialect::MySqlInnoDb | Dialect::MySqlMyIsam => 255,
        _ => 65535,
    };
    Some(match ty {
        Type::Blob | Type::Longvarbinary => R::plain("longblob"),
        Type::Boolean => R::plain("bit"),
        Type::Clob | Type::Longvarchar | Type::Longnvarchar | Type::Nclob => {
            R::plain("longtext")
        }
        Type::Nchar => R::plain("char($l)"),
        Type::Numeric => R::plain("decimal($p,$s)"),
        Type::Nvarchar | Type::Varchar => R::capped("varchar($l)", max, "longtext"),
        Type::Real => R::plain("float"),
        Type::Timestamp => R::plain("datetime"),
        Type::Varbinary => R::capped("varbinary($l)", max, "longblob"),
        _ => return ansi(ty),
    })
}

const fn mckoi(ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Boolean => R::plain("bit"),
        Type::Double => R::plain("double"),
        Type::Varbinary | Type::Longvarbinary => R::plain("varbinary"),
        _ => return ansi(ty),
    })
}

const fn mimer(ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Bit | Type::Boolean | Type::Tinyint => R::plain("smallint"),
        Type::Char => R::plain("nchar($l)"),
        Type::Clob | Type::Longvarchar => R::plain("nclob"),
        Type::Varbinary | Type::Longvarbinary => R::plain("binary varying($l)"),
        Type::Varchar => R::plain("national character varying($l)"),
        _ => return ansi(ty),
    })
}

const fn oracle(dialect: Dialect, ty: Type) -> Option<TypeRule> {
    let legacy = matches!(dialect, Dialect::Oracle | Dialect::Oracle8i);
    Some(match ty {
        Type::Bigint => R::plain("number(19,0)"),
        Type::Binary | Type::Varbinary => R::capped("raw($l)", 2000, "blob"),
        Type::Bit | Type::Boolean => R::plain("number(1,0)"),
        Type::Decimal | Type::Numeric => R::plain("number($p,$s)"),
        Type::Integer => R::plain("number(10,0)"),
        Type::Longnvarchar => R::plain("nclob"),
        Type::Longvarbinary => R::plain("long raw"),
        Type::Longvarchar => R::plain("long"),
        Type::Nvarchar => R::capped("nvarchar2($l)", 2000, "nclob"),
        Type::Smallint => R::plain("number(5,0)"),
        Type::Time => R::plain("date"),
        Type::Timestamp if legacy => R::plain("date"),
        Type::Tinyint => R::plain("number(3,0)"),
        Type::Varchar => R::capped("varchar2($l)", 4000, "clob"),
        _ => return ansi(ty),
    })
}

const fn pointbase(ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Binary | Type::Varbinary | Type::Longvarbinary => R::plain("blob($l)"),
        Type::Bit | Type::Boolean | Type::Tinyint => R::plain("smallint"),
        Type::Double => R::plain("float"),
        _ => return ansi(ty),
    })
}

const fn postgres(ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Bigint => R::plain("int8"),
        Type::Binary | Type::Blob | Type::Longvarbinary | Type::Varbinary => R::plain("bytea"),
        Type::Bit => R::plain("bool"),
        Type::Clob | Type::Longvarchar | Type::Longnvarchar | Type::Nclob => R::plain("text"),
        Type::Decimal | Type::Numeric => R::plain("numeric($p,$s)"),
        Type::Double => R::plain("float8"),
        Type::Float | Type::Real => R::plain("float4"),
        Type::Integer => R::plain("int4"),
        Type::Nchar => R::plain("char($l)"),
        Type::Nvarchar => R::plain("varchar($l)"),
        Type::Smallint | Type::Tinyint => R::plain("int2"),
        _ => return ansi(ty),
    })
}

const fn progress(ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Bigint => R::plain("numeric"),
        Type::Boolean => R::plain("bit"),
        Type::Blob | Type::Clob | Type::Nclob => return None,
        _ => return ansi(ty),
    })
}

const fn rdms(ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Bigint => R::plain("numeric(19,0)"),
        Type::Binary | Type::Varbinary | Type::Longvarbinary => R::plain("blob($l)"),
        Type::Bit | Type::Boolean | Type::Tinyint => R::plain("smallint"),
        Type::Float => R::plain("real"),
        _ => return ansi(ty),
    })
}

const fn sapdb(ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Bigint => R::plain("fixed(19,0)"),
        Type::Binary | Type::Blob | Type::Varbinary | Type::Longvarbinary => {
            R::plain("long byte")
        }
        Type::Bit => R::plain("boolean"),
        Type::Clob | Type::Longvarchar => R::plain("long varchar"),
        Type::Decimal | Type::Numeric => R::plain("fixed($p,$s)"),
        Type::Tinyint => R::plain("fixed(3,0)"),
        _ => return ansi(ty),
    })
}

const fn sqlserver(dialect: Dialect, ty: Type) -> Option<TypeRule> {
    let max_types = !matches!(dialect, Dialect::SqlServer);
    let date_types = matches!(dialect, Dialect::SqlServer2008 | Dialect::SqlServer2012);
    Some(match ty {
        Type::Blob | Type::Longvarbinary if max_types => R::plain("varbinary(MAX)"),
        Type::Blob | Type::Longvarbinary => R::plain("image"),
        Type::Boolean => R::plain("bit"),
        Type::Clob | Type::Longvarchar if max_types => R::plain("varchar(MAX)"),
        Type::Clob | Type::Longvarchar => R::plain("text"),
        Type::Date if date_types => R::plain("date"),
        Type::Date => R::plain("datetime"),
        Type::Integer => R::plain("int"),
        Type::Longnvarchar | Type::Nclob if max_types => R::plain("nvarchar(MAX)"),
        Type::Longnvarchar | Type::Nclob => R::plain("ntext"),
        Type::Time if date_types => R::plain("time"),
        Type::Time => R::plain("datetime"),
        Type::Timestamp if date_types => R::plain("datetime2"),
        Type::Timestamp => R::plain("datetime"),
        Type::Varbinary if max_types => R::capped("varbinary($l)", 8000, "varbinary(MAX)"),
        Type::Varbinary => R::capped("varbinary($l)", 8000, "image"),
        Type::Varchar if max_types => R::capped("varchar($l)", 8000, "varchar(MAX)"),
        Type::Varchar => R::capped("varchar($l)", 8000, "text"),
        _ => return ansi(ty),
    })
}

const fn sybase(dialect: Dialect, ty: Type) -> Option<TypeRule> {
    let ase15 = matches!(dialect, Dialect::SybaseAse15 | Dialect::SybaseAse157);
    Some(match ty {
        Type::Blob | Type::Longvarbinary => R::plain("image"),
        Type::Boolean => R::plain("bit"),
        Type::Clob | Type::Longvarchar => R::plain("text"),
        Type::Date if ase15 => R::plain("date"),
        Type::Date => R::plain("datetime"),
        Type::Integer => R::plain("int"),
        Type::Longnvarchar | Type::Nclob => R::plain("unitext"),
        Type::Time if ase15 => R::plain("time"),
        Type::Time | Type::Timestamp => R::plain("datetime"),
        Type::Varchar => R::capped("varchar($l)", 16384, "text"),
        _ => return ansi(ty),
    })
}

const fn teradata(dialect: Dialect, ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Bigint if matches!(dialect, Dialect::Teradata) => R::plain("numeric(18,0)"),
        Type::Binary => R::plain("byte($l)"),
        Type::Bit | Type::Boolean | Type::Tinyint => R::plain("byteint"),
        Type::Longnvarchar => R::plain("long varchar character set unicode"),
        Type::Longvarbinary | Type::Varbinary => R::plain("varbyte($l)"),
        Type::Longvarchar => R::plain("long varchar"),
        Type::Nchar => R::plain("char($l) character set unicode"),
        Type::Nclob => R::plain("clob character set unicode"),
        Type::Nvarchar => R::plain("varchar($l) character set unicode"),
        _ => return ansi(ty),
    })
}

const fn timesten(ty: Type) -> Option<TypeRule> {
    Some(match ty {
        Type::Bit | Type::Boolean => R::plain("tinyint"),
        Type::Blob | Type::Longvarbinary => R::plain("varbinary(4000000)"),
        Type::Clob | Type::Longvarchar => R::plain("varchar(4000000)"),
        Type::Double => R::plain("double"),
        Type::Numeric => R::plain("decimal($p,$s)"),
        Type::Varchar => R::plain("varchar2($l)"),
        _ => return ansi(ty),
    })
}
