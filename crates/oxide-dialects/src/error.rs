//! Error types for dialect resolution, type mapping and DDL generation.

use crate::ddl::DdlWarning;
use crate::dialect::Dialect;
use crate::types::Type;

/// Errors that abort type mapping, DDL generation or pagination.
///
/// Optional features a dialect lacks (check constraints, comments) are not
/// errors: they surface as [`DdlWarning`]s unless strict mode is on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DialectError {
    /// A host value type has no canonical SQL type.
    #[error("'{type_name}' can not map to a SQL type")]
    UnmappableType {
        /// Name of the host type.
        type_name: &'static str,
    },

    /// A textual type name is not one of the canonical type names.
    #[error("'{0}' is not a legal SQL column definition name")]
    UnknownTypeName(String),

    /// A dialect name does not match any known dialect.
    #[error("Unknown dialect: '{0}'")]
    UnknownDialect(String),

    /// An identifier collides with a reserved word of the dialect.
    #[error("'{identifier}' is a reserved word of {dialect}")]
    ReservedWord {
        /// The offending identifier.
        identifier: String,
        /// The dialect whose keyword list matched.
        dialect: Dialect,
    },

    /// A table or column name is empty.
    #[error("Identifier can not be empty")]
    EmptyIdentifier,

    /// A mandatory feature is requested on a dialect that lacks it.
    #[error("Unsupported {feature} setting for dialect \"{dialect}\" on column \"{column}\" in table \"{table}\"")]
    UnsupportedFeature {
        /// The dialect.
        dialect: Dialect,
        /// Human readable feature name.
        feature: &'static str,
        /// Table name.
        table: String,
        /// Column name.
        column: String,
    },

    /// A canonical type has no DDL rendering on the dialect.
    #[error("Type {ty} is not supported by {dialect}")]
    UnsupportedType {
        /// The dialect.
        dialect: Dialect,
        /// The canonical type.
        ty: Type,
    },

    /// The dialect has neither a pagination nor a top-N template.
    #[error("Dialect \"{dialect}\" does not support physical pagination")]
    PaginationNotSupported {
        /// The dialect.
        dialect: Dialect,
    },

    /// The dialect can only limit the first page.
    #[error("Dialect \"{dialect}\" only supports top limit SQL, for example: \"{template}\"")]
    TopLimitOnly {
        /// The dialect.
        dialect: Dialect,
        /// The top-N template the dialect does support.
        template: &'static str,
    },

    /// A page number or page size of zero, or a page past the row range.
    #[error("Invalid page {page_number} of size {page_size}")]
    InvalidPage {
        /// 1-based page number.
        page_number: u64,
        /// Rows per page.
        page_size: u64,
    },

    /// The SQL handed to a renderer is malformed.
    #[error("Invalid SQL: {0}")]
    InvalidSql(String),

    /// Warnings escalated to errors by strict mode.
    #[error("DDL generation produced warnings in strict mode:\n{}", bullet_list(.0))]
    Strict(Vec<DdlWarning>),
}

fn bullet_list(warnings: &[DdlWarning]) -> String {
    warnings
        .iter()
        .map(|w| format!("  - {w}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
