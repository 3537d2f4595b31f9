//! Dialect-neutral table and column model.
//!
//! A [`Table`] owns its [`Column`]s keyed by upper-cased name, so `"Id"` and
//! `"ID"` name the same column. Columns keep the order in which each distinct
//! name was first added.
//!
//! ```
//! use oxide_dialects::{Dialect, Table};
//!
//! let mut person = Table::new("PERSON");
//! person.add_column("id").string(30).pkey();
//! person.add_column("age").integer().not_null();
//!
//! let ddl = person.to_create_table_ddl(Dialect::H2).unwrap();
//! assert_eq!(
//!     ddl.statements,
//!     vec!["create table PERSON (id varchar(30),age integer not null, primary key (id));"]
//! );
//! ```

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::id::{builtin_generator, IdGenerator};
use crate::types::Type;

/// Length, precision and scale of a column type.
///
/// Unset values fall back to the `DEFAULT_*` constants when a dialect
/// template needs them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLengths {
    /// Character or byte length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    /// Numeric precision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    /// Numeric scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
}

impl ColumnLengths {
    /// Length used when a template needs one and none is set.
    pub const DEFAULT_LENGTH: u32 = 255;
    /// Precision used when a template needs one and none is set.
    pub const DEFAULT_PRECISION: u32 = 19;
    /// Scale used when a template needs one and none is set.
    pub const DEFAULT_SCALE: u32 = 2;

    /// Lengths with only a length set.
    #[must_use]
    pub const fn length(length: u32) -> Self {
        Self {
            length: Some(length),
            precision: None,
            scale: None,
        }
    }

    /// Lengths with precision and scale set.
    #[must_use]
    pub const fn precision(precision: u32, scale: u32) -> Self {
        Self {
            length: None,
            precision: Some(precision),
            scale: Some(scale),
        }
    }
}

/// A column definition.
///
/// Builder methods take `&mut self` so they chain off [`Table::add_column`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    /// Canonical type.
    #[serde(rename = "type")]
    pub ty: Type,
    /// Type parameters.
    #[serde(default)]
    pub lengths: ColumnLengths,
    /// Part of the primary key.
    #[serde(default)]
    pub pkey: bool,
    /// Name of the primary key constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pkey_name: Option<String>,
    /// Generated by the database.
    #[serde(default)]
    pub identity: bool,
    /// Rejects NULL.
    #[serde(default)]
    pub not_null: bool,
    /// Carries a unique constraint.
    #[serde(default)]
    pub unique: bool,
    /// Name of the unique constraint, `UK_<table>_<column>` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_constraint_name: Option<String>,
    /// Raw SQL default expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Column check expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,
    /// Column comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Name of the id generator filling this column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_generator: Option<String>,
}

impl Column {
    /// Creates a nullable `VARCHAR` column.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: Type::Varchar,
            lengths: ColumnLengths::default(),
            pkey: false,
            pkey_name: None,
            identity: false,
            not_null: false,
            unique: false,
            unique_constraint_name: None,
            default_value: None,
            check: None,
            comment: None,
            id_generator: None,
        }
    }

    /// Returns the column name as given.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the canonical type.
    pub fn of_type(&mut self, ty: Type) -> &mut Self {
        self.ty = ty;
        self
    }

    /// Sets the type from a host value type.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnmappableType`](crate::DialectError::UnmappableType)
    /// if `T` has no canonical type.
    pub fn of_host_type<T: 'static>(&mut self) -> Result<&mut Self> {
        self.ty = Type::of::<T>()?;
        Ok(self)
    }

    /// Sets the type from a canonical type name such as `"BIGINT"`.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnknownTypeName`](crate::DialectError::UnknownTypeName)
    /// for names outside the canonical set.
    pub fn of_type_name(&mut self, name: &str) -> Result<&mut Self> {
        self.ty = Type::from_name(name)?;
        Ok(self)
    }

    /// `VARCHAR` of the given length.
    pub fn string(&mut self, length: u32) -> &mut Self {
        self.sized(Type::Varchar, length)
    }

    /// `CHAR` of the given length.
    pub fn char(&mut self, length: u32) -> &mut Self {
        self.sized(Type::Char, length)
    }

    /// `VARBINARY` of the given length.
    pub fn binary(&mut self, length: u32) -> &mut Self {
        self.sized(Type::Varbinary, length)
    }

    /// `INTEGER`.
    pub fn integer(&mut self) -> &mut Self {
        self.of_type(Type::Integer)
    }

    /// `BIGINT`.
    pub fn big_int(&mut self) -> &mut Self {
        self.of_type(Type::Bigint)
    }

    /// `SMALLINT`.
    pub fn small_int(&mut self) -> &mut Self {
        self.of_type(Type::Smallint)
    }

    /// `BOOLEAN`.
    pub fn boolean(&mut self) -> &mut Self {
        self.of_type(Type::Boolean)
    }

    /// `DOUBLE`.
    pub fn double(&mut self) -> &mut Self {
        self.of_type(Type::Double)
    }

    /// `DECIMAL` with precision and scale.
    pub fn decimal(&mut self, precision: u32, scale: u32) -> &mut Self {
        self.ty = Type::Decimal;
        self.lengths = ColumnLengths::precision(precision, scale);
        self
    }

    /// `DATE`.
    pub fn date(&mut self) -> &mut Self {
        self.of_type(Type::Date)
    }

    /// `TIME`.
    pub fn time(&mut self) -> &mut Self {
        self.of_type(Type::Time)
    }

    /// `TIMESTAMP`.
    pub fn timestamp(&mut self) -> &mut Self {
        self.of_type(Type::Timestamp)
    }

    /// `CLOB`.
    pub fn clob(&mut self) -> &mut Self {
        self.of_type(Type::Clob)
    }

    /// `BLOB`.
    pub fn blob(&mut self) -> &mut Self {
        self.of_type(Type::Blob)
    }

    fn sized(&mut self, ty: Type, length: u32) -> &mut Self {
        self.ty = ty;
        self.lengths = ColumnLengths::length(length);
        self
    }

    /// Sets the length without changing the type.
    pub fn length(&mut self, length: u32) -> &mut Self {
        self.lengths.length = Some(length);
        self
    }

    /// Marks the column as (part of) the primary key.
    pub fn pkey(&mut self) -> &mut Self {
        self.pkey = true;
        self
    }

    /// Names the primary key constraint.
    pub fn pkey_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.pkey_name = Some(name.into());
        self.pkey()
    }

    /// Marks the column as generated by the database.
    pub fn identity(&mut self) -> &mut Self {
        self.identity = true;
        self
    }

    /// Rejects NULL.
    pub fn not_null(&mut self) -> &mut Self {
        self.not_null = true;
        self
    }

    /// Adds a unique constraint with the default name.
    pub fn unique(&mut self) -> &mut Self {
        self.unique = true;
        self
    }

    /// Adds a unique constraint with an explicit name.
    pub fn unique_named(&mut self, name: impl Into<String>) -> &mut Self {
        self.unique_constraint_name = Some(name.into());
        self.unique()
    }

    /// Sets a raw SQL default, e.g. `"0"` or `"'N/A'"`.
    pub fn default_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.default_value = Some(value.into());
        self
    }

    /// Sets a column check expression.
    pub fn check(&mut self, expr: impl Into<String>) -> &mut Self {
        self.check = Some(expr.into());
        self
    }

    /// Sets the column comment.
    pub fn comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.comment = Some(comment.into());
        self
    }

    /// Names the id generator filling this column.
    pub fn id_generator(&mut self, name: impl Into<String>) -> &mut Self {
        self.id_generator = Some(name.into());
        self
    }

    /// The built-in generator named by [`Column::id_generator`], if any.
    #[must_use]
    pub fn builtin_id_generator(&self) -> Option<&'static dyn IdGenerator> {
        self.id_generator.as_deref().and_then(builtin_generator)
    }
}

/// A table definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TableRepr", into = "TableRepr")]
pub struct Table {
    name: String,
    columns: IndexMap<String, Column>,
    check: Option<String>,
    comment: Option<String>,
}

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: IndexMap::new(),
            check: None,
            comment: None,
        }
    }

    /// Returns the table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a column and returns it for configuration.
    ///
    /// Adding a name that already exists, ignoring case, replaces that column
    /// in place.
    pub fn add_column(&mut self, name: impl Into<String>) -> &mut Column {
        self.insert(Column::new(name))
    }

    /// Adds a fully built column, replacing any column of the same name.
    pub fn add(&mut self, column: Column) -> &mut Self {
        self.insert(column);
        self
    }

    fn insert(&mut self, column: Column) -> &mut Column {
        match self.columns.entry(column.name.to_uppercase()) {
            Entry::Occupied(mut entry) => {
                entry.insert(column);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(column),
        }
    }

    /// Removes a column, ignoring case. Remaining columns keep their order.
    pub fn remove_column(&mut self, name: &str) -> Option<Column> {
        self.columns.shift_remove(&name.to_uppercase())
    }

    /// Looks a column up, ignoring case.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(&name.to_uppercase())
    }

    /// Looks a column up for modification, ignoring case.
    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.get_mut(&name.to_uppercase())
    }

    /// Iterates columns in insertion order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values()
    }

    /// Number of distinct columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Sets the table check expression.
    pub fn check(&mut self, expr: impl Into<String>) -> &mut Self {
        self.check = Some(expr.into());
        self
    }

    /// Returns the table check expression.
    #[must_use]
    pub fn check_expr(&self) -> Option<&str> {
        self.check.as_deref()
    }

    /// Sets the table comment.
    pub fn comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.comment = Some(comment.into());
        self
    }

    /// Returns the table comment.
    #[must_use]
    pub fn comment_text(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

#[derive(Serialize, Deserialize)]
struct TableRepr {
    name: String,
    #[serde(default)]
    columns: Vec<Column>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    check: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl From<TableRepr> for Table {
    fn from(repr: TableRepr) -> Self {
        let mut table = Self::new(repr.name);
        for column in repr.columns {
            table.insert(column);
        }
        table.check = repr.check;
        table.comment = repr.comment;
        table
    }
}

impl From<Table> for TableRepr {
    fn from(table: Table) -> Self {
        Self {
            name: table.name,
            columns: table.columns.into_values().collect(),
            check: table.check,
            comment: table.comment,
        }
    }
}
