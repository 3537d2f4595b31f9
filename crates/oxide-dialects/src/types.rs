//! Canonical SQL types and their mapping from host value types.
//!
//! Every column in a [`Table`](crate::table::Table) carries one of the 28
//! canonical [`Type`]s. Dialects translate a canonical type into their own
//! DDL spelling (see [`Dialect::translate_to_ddl_type`](crate::Dialect::translate_to_ddl_type)).

use std::any::{type_name, TypeId};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::{DialectError, Result};

/// Dialect-independent SQL column types.
///
/// The canonical name of each variant is its SCREAMING_SNAKE_CASE form
/// (`Bigint` is `BIGINT`, `JavaObject` is `JAVA_OBJECT`).
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Type {
    /// 64-bit integer.
    Bigint,
    /// Fixed-length binary.
    Binary,
    /// Single bit.
    Bit,
    /// Binary large object.
    Blob,
    /// Boolean.
    Boolean,
    /// Fixed-length character string.
    Char,
    /// Character large object.
    Clob,
    /// Date without time.
    Date,
    /// Exact decimal with precision and scale.
    Decimal,
    /// Double precision float.
    Double,
    /// Float with optional precision.
    Float,
    /// 32-bit integer.
    Integer,
    /// Serialized host object.
    JavaObject,
    /// Long national character string.
    Longnvarchar,
    /// Long variable-length binary.
    Longvarbinary,
    /// Long variable-length character string.
    Longvarchar,
    /// Fixed-length national character string.
    Nchar,
    /// National character large object.
    Nclob,
    /// Exact numeric with precision and scale.
    Numeric,
    /// Variable-length national character string.
    Nvarchar,
    /// Database specific type.
    Other,
    /// Single precision float.
    Real,
    /// 16-bit integer.
    Smallint,
    /// Time of day.
    Time,
    /// Date and time.
    Timestamp,
    /// 8-bit integer.
    Tinyint,
    /// Variable-length binary.
    Varbinary,
    /// Variable-length character string.
    Varchar,
}

impl Type {
    /// Returns the canonical type name, e.g. `"VARCHAR"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Iterates all canonical types in name order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Resolves a canonical type name, ignoring ASCII case.
    ///
    /// Only exact names match: `"VARCHAR2"` is rejected rather than read as
    /// `VARCHAR`.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnknownTypeName`] if no canonical name matches.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| DialectError::UnknownTypeName(name.to_string()))
    }

    /// Returns the canonical type of host value type `T`.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnmappableType`] if `T` is not one of the
    /// mapped host types.
    pub fn of<T: 'static>() -> Result<Self> {
        host_type_of(TypeId::of::<T>()).ok_or(DialectError::UnmappableType {
            type_name: type_name::<T>(),
        })
    }

    /// Returns true if host value type `T` has a canonical SQL type.
    #[must_use]
    pub fn can_map<T: 'static>() -> bool {
        host_type_of(TypeId::of::<T>()).is_some()
    }
}

impl FromStr for Type {
    type Err = DialectError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Marker for character large object values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clob(pub String);

/// Marker for binary large object values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blob(pub Vec<u8>);

fn host_type_of(id: TypeId) -> Option<Type> {
    let table = [
        (TypeId::of::<bool>(), Type::Boolean),
        (TypeId::of::<i8>(), Type::Tinyint),
        (TypeId::of::<i16>(), Type::Smallint),
        (TypeId::of::<i32>(), Type::Integer),
        (TypeId::of::<i64>(), Type::Bigint),
        (TypeId::of::<i128>(), Type::Numeric),
        (TypeId::of::<f32>(), Type::Float),
        (TypeId::of::<f64>(), Type::Double),
        (TypeId::of::<char>(), Type::Char),
        (TypeId::of::<String>(), Type::Varchar),
        (TypeId::of::<&'static str>(), Type::Varchar),
        (TypeId::of::<NaiveDate>(), Type::Date),
        (TypeId::of::<NaiveTime>(), Type::Time),
        (TypeId::of::<NaiveDateTime>(), Type::Timestamp),
        (TypeId::of::<DateTime<Utc>>(), Type::Timestamp),
        (TypeId::of::<Clob>(), Type::Clob),
        (TypeId::of::<Blob>(), Type::Blob),
    ];
    table
        .iter()
        .find(|(candidate, _)| *candidate == id)
        .map(|(_, ty)| *ty)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Invoice;

    #[test]
    fn test_canonical_names() {
        let names: Vec<&str> = Type::iter().map(Type::name).collect();
        assert_eq!(
            names,
            vec![
                "BIGINT",
                "BINARY",
                "BIT",
                "BLOB",
                "BOOLEAN",
                "CHAR",
                "CLOB",
                "DATE",
                "DECIMAL",
                "DOUBLE",
                "FLOAT",
                "INTEGER",
                "JAVA_OBJECT",
                "LONGNVARCHAR",
                "LONGVARBINARY",
                "LONGVARCHAR",
                "NCHAR",
                "NCLOB",
                "NUMERIC",
                "NVARCHAR",
                "OTHER",
                "REAL",
                "SMALLINT",
                "TIME",
                "TIMESTAMP",
                "TINYINT",
                "VARBINARY",
                "VARCHAR",
            ]
        );
        assert_eq!(Type::COUNT, 28);
    }

    #[test]
    fn test_from_name_round_trips_any_case() {
        for ty in Type::iter() {
            let lower = ty.name().to_lowercase();
            assert_eq!(Type::from_name(&lower).unwrap(), ty);
            assert_eq!(Type::from_name(ty.name()).unwrap().name(), ty.name());
        }
        assert_eq!("java_Object".parse::<Type>().unwrap(), Type::JavaObject);
    }

    #[test]
    fn test_from_name_rejects_partial_matches() {
        for name in ["VARCHAR2", "VARCHA", "INT", "", " BIGINT", "text"] {
            assert_eq!(
                Type::from_name(name),
                Err(DialectError::UnknownTypeName(name.to_string()))
            );
        }
    }

    #[test]
    fn test_host_types() {
        assert_eq!(Type::of::<i64>().unwrap(), Type::Bigint);
        assert_eq!(Type::of::<String>().unwrap(), Type::Varchar);
        assert_eq!(Type::of::<&'static str>().unwrap(), Type::Varchar);
        assert_eq!(Type::of::<NaiveDateTime>().unwrap(), Type::Timestamp);
        assert_eq!(Type::of::<Blob>().unwrap(), Type::Blob);
        assert!(Type::can_map::<bool>());
        assert!(Type::can_map::<Clob>());
    }

    #[test]
    fn test_unmapped_host_types() {
        assert!(!Type::can_map::<Invoice>());
        assert!(!Type::can_map::<Vec<u8>>());
        assert!(!Type::can_map::<Option<i32>>());
        assert!(matches!(
            Type::of::<Invoice>(),
            Err(DialectError::UnmappableType { type_name }) if type_name.ends_with("Invoice")
        ));
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&Type::JavaObject).unwrap();
        assert_eq!(json, "\"JAVA_OBJECT\"");
        let ty: Type = serde_json::from_str("\"LONGNVARCHAR\"").unwrap();
        assert_eq!(ty, Type::Longnvarchar);
    }
}
