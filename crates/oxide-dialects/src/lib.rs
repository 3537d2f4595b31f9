//! # oxide-dialects
//!
//! Write a schema once, render it for whichever database a deployment targets.
//!
//! This crate provides:
//! - A closed set of 28 canonical SQL [`Type`]s with mappings from host types
//!   and type names
//! - 75 named [`Dialect`]s, each with a static capability record and type
//!   spellings
//! - Paging templates per dialect and a renderer for them
//! - A [`Table`] / [`Column`] model and a CREATE TABLE generator that honours
//!   each dialect's capabilities
//!
//! ## DDL
//!
//! ```rust
//! use oxide_dialects::{Dialect, Table};
//!
//! let mut users = Table::new("USERS");
//! users.add_column("id").big_int().identity();
//! users.add_column("email").string(120).not_null().unique();
//!
//! let ddl = users.to_create_table_ddl(Dialect::PostgreSql95).unwrap();
//! assert_eq!(
//!     ddl.statements,
//!     vec![
//!         "create table USERS (id bigserial not null,email varchar(120) not null);",
//!         "alter table USERS add constraint UK_USERS_email unique (email);",
//!     ]
//! );
//! ```
//!
//! Features a dialect lacks are either fatal (identity columns, reserved
//! names) or skipped with a [`DdlWarning`]. [`DdlOptions::strict`] turns the
//! warnings into an error.
//!
//! ## Paging
//!
//! ```rust
//! use oxide_dialects::Dialect;
//!
//! let sql = Dialect::MySql5.paginate(3, 10, "select * from users").unwrap();
//! assert_eq!(sql, "select * from users limit 20, 10");
//! ```

pub mod ddl;
pub mod dialect;
pub mod error;
pub mod format;
pub mod id;
pub mod pagination;
pub mod reserved;
pub mod table;
pub mod types;

pub use ddl::{DdlGenerator, DdlOptions, DdlWarning, GeneratedDdl};
pub use dialect::{DdlFeatures, Dialect, DialectFamily, TypeRule};
pub use error::{DialectError, Result};
pub use format::format_ddl;
pub use id::{builtin_generator, IdGenerator, Uuid25Generator, Uuid32Generator, Uuid36Generator};
pub use pagination::{render_template, PageValues, NOT_SUPPORT};
pub use reserved::{ReservedWordChecker, SqlKeywords};
pub use table::{Column, ColumnLengths, Table};
pub use types::{Blob, Clob, Type};

/// Commonly used items.
pub mod prelude {
    pub use crate::ddl::{DdlGenerator, DdlOptions, GeneratedDdl};
    pub use crate::dialect::Dialect;
    pub use crate::error::{DialectError, Result};
    pub use crate::table::{Column, Table};
    pub use crate::types::Type;
}
