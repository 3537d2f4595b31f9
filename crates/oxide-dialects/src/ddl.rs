//! CREATE TABLE generation.
//!
//! [`DdlGenerator`] renders a [`Table`] for one [`Dialect`]. The result is
//! the CREATE TABLE statement, then one statement per unique column, then
//! COMMENT ON statements. Fatal problems (reserved names, identity columns
//! on dialects without them, types the dialect can not spell) return an
//! error and no statements. Optional features the dialect lacks are skipped
//! and reported as [`DdlWarning`]s.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::dialect::{Dialect, DialectFamily, COMMENT_PLACEHOLDER};
use crate::error::{DialectError, Result};
use crate::format::format_ddl;
use crate::reserved::{ReservedWordChecker, SqlKeywords};
use crate::table::{Column, Table};
use crate::types::Type;

/// Generation switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DdlOptions {
    /// Pass every statement through [`format_ddl`].
    #[serde(default)]
    pub format: bool,
    /// Turn warnings into [`DialectError::Strict`].
    #[serde(default)]
    pub strict: bool,
}

/// Statements for one or more tables, with the features that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedDdl {
    /// Statements in execution order.
    pub statements: Vec<String>,
    /// Optional features left out of `statements`.
    pub warnings: Vec<DdlWarning>,
}

impl GeneratedDdl {
    fn extend(&mut self, other: Self) {
        self.statements.extend(other.statements);
        self.warnings.extend(other.warnings);
    }
}

/// An optional feature left out because the dialect does not support it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DdlWarning {
    /// A column check expression was dropped.
    ColumnCheckIgnored {
        /// The dialect.
        dialect: Dialect,
        /// Table name.
        table: String,
        /// Column name.
        column: String,
        /// The dropped expression.
        check: String,
    },
    /// The table check expression was dropped.
    TableCheckIgnored {
        /// The dialect.
        dialect: Dialect,
        /// Table name.
        table: String,
        /// The dropped expression.
        check: String,
    },
    /// A column comment was dropped.
    CommentIgnored {
        /// The dialect.
        dialect: Dialect,
        /// Table name.
        table: String,
        /// Column name.
        column: String,
        /// The dropped comment.
        comment: String,
    },
    /// The table comment was dropped.
    TableCommentIgnored {
        /// The dialect.
        dialect: Dialect,
        /// Table name.
        table: String,
        /// The dropped comment.
        comment: String,
    },
}

impl fmt::Display for DdlWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColumnCheckIgnored {
                dialect,
                table,
                column,
                check,
            } => write!(
                f,
                "Ignored unsupported check setting for dialect \"{dialect}\" on column \"{column}\" in table \"{table}\" with value: {check}"
            ),
            Self::TableCheckIgnored {
                dialect,
                table,
                check,
            } => write!(
                f,
                "Ignored unsupported table check setting for dialect \"{dialect}\" on table \"{table}\" with value: {check}"
            ),
            Self::CommentIgnored {
                dialect,
                table,
                column,
                comment,
            } => write!(
                f,
                "Ignored unsupported comment setting for dialect \"{dialect}\" on column \"{column}\" in table \"{table}\" with value: {comment}"
            ),
            Self::TableCommentIgnored {
                dialect,
                table,
                comment,
            } => write!(
                f,
                "Ignored unsupported table comment setting for dialect \"{dialect}\" on table \"{table}\" with value: {comment}"
            ),
        }
    }
}

/// Renders tables for one dialect.
#[derive(Debug, Clone)]
pub struct DdlGenerator<C = SqlKeywords> {
    dialect: Dialect,
    options: DdlOptions,
    checker: C,
}

impl DdlGenerator {
    /// Creates a generator with default options and the built-in keyword
    /// checker.
    #[must_use]
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            options: DdlOptions::default(),
            checker: SqlKeywords,
        }
    }
}

impl<C: ReservedWordChecker> DdlGenerator<C> {
    /// Replaces the reserved word checker.
    #[must_use]
    pub fn with_checker<D: ReservedWordChecker>(self, checker: D) -> DdlGenerator<D> {
        DdlGenerator {
            dialect: self.dialect,
            options: self.options,
            checker,
        }
    }

    /// Sets the generation options.
    #[must_use]
    pub fn with_options(mut self, options: DdlOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the target dialect.
    #[must_use]
    pub const fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Renders every table in order.
    ///
    /// # Errors
    ///
    /// Fails on the first table [`DdlGenerator::generate`] fails on. In strict
    /// mode the warnings of all tables are collected before failing.
    pub fn generate_all<'a>(
        &self,
        tables: impl IntoIterator<Item = &'a Table>,
    ) -> Result<GeneratedDdl> {
        let mut all = GeneratedDdl::default();
        for table in tables {
            all.extend(self.render(table)?);
        }
        self.finish(all)
    }

    /// Renders one table.
    ///
    /// # Errors
    ///
    /// - [`DialectError::ReservedWord`] or [`DialectError::EmptyIdentifier`]
    ///   for a rejected table, column or constraint name.
    /// - [`DialectError::UnsupportedFeature`] for an identity column on a
    ///   dialect without identity columns.
    /// - [`DialectError::UnsupportedType`] for a type the dialect can not
    ///   spell.
    /// - [`DialectError::Strict`] if strict mode is on and any optional
    ///   feature was skipped.
    pub fn generate(&self, table: &Table) -> Result<GeneratedDdl> {
        let generated = self.render(table)?;
        self.finish(generated)
    }

    fn finish(&self, mut generated: GeneratedDdl) -> Result<GeneratedDdl> {
        if self.options.strict && !generated.warnings.is_empty() {
            return Err(DialectError::Strict(generated.warnings));
        }
        if self.options.format {
            generated.statements = generated
                .statements
                .iter()
                .map(|sql| format_ddl(sql))
                .collect();
        }
        Ok(generated)
    }

    fn check_names(&self, table: &Table) -> Result<()> {
        self.checker.check(table.name(), self.dialect)?;
        for column in table.columns() {
            self.checker.check(column.name(), self.dialect)?;
            if let Some(name) = &column.pkey_name {
                self.checker.check(name, self.dialect)?;
            }
            if let Some(name) = &column.unique_constraint_name {
                self.checker.check(name, self.dialect)?;
            }
        }
        Ok(())
    }

    fn render(&self, table: &Table) -> Result<GeneratedDdl> {
        let dialect = self.dialect;
        let features = dialect.features();
        let table_name = table.name();
        self.check_names(table)?;

        let mut warnings = Vec::new();
        let mut deferred_comments = Vec::new();

        let pkeys: Vec<&str> = table
            .columns()
            .filter(|column| column.pkey)
            .map(Column::name)
            .collect();
        let header = if pkeys.is_empty() {
            features.create_multiset_table_string
        } else {
            features.create_table_string
        };
        let mut sql = format!("{header} {table_name} (");

        for column in table.columns() {
            sql.push_str(&self.column_definition(table_name, column)?);

            if let Some(check) = non_empty(column.check.as_deref()) {
                if features.supports_column_check {
                    sql.push_str(&format!(" check ({check})"));
                } else {
                    let warning = DdlWarning::ColumnCheckIgnored {
                        dialect,
                        table: table_name.to_string(),
                        column: column.name().to_string(),
                        check: check.to_string(),
                    };
                    warn!(dialect = %dialect, table = table_name, column = column.name(), "{warning}");
                    warnings.push(warning);
                }
            }

            if let Some(comment) = &column.comment {
                if features.supports_inline_column_comment() {
                    sql.push_str(&inline_comment(features.column_comment, comment));
                } else if features.supports_comment_on {
                    deferred_comments.push(comment_on_column(table_name, column.name(), comment));
                } else {
                    let warning = DdlWarning::CommentIgnored {
                        dialect,
                        table: table_name.to_string(),
                        column: column.name().to_string(),
                        comment: comment.clone(),
                    };
                    warn!(dialect = %dialect, table = table_name, column = column.name(), "{warning}");
                    warnings.push(warning);
                }
            }
            sql.push(',');
        }

        if !pkeys.is_empty() {
            sql.push_str(&format!(" primary key ({}),", pkeys.join(",")));
        }

        if let Some(check) = non_empty(table.check_expr()) {
            if features.supports_table_check {
                sql.push_str(&format!(" check ({check}),"));
            } else {
                let warning = DdlWarning::TableCheckIgnored {
                    dialect,
                    table: table_name.to_string(),
                    check: check.to_string(),
                };
                warn!(dialect = %dialect, table = table_name, "{warning}");
                warnings.push(warning);
            }
        }

        if sql.ends_with(',') {
            sql.pop();
        }
        sql.push(')');
        sql.push_str(features.engine_suffix);

        let mut table_comment = None;
        if let Some(comment) = table.comment_text() {
            if features.supports_comment_on {
                table_comment = Some(comment_on_table(table_name, comment));
            } else if !features.table_comment.is_empty() {
                sql.push_str(&inline_comment(features.table_comment, comment));
            } else {
                let warning = DdlWarning::TableCommentIgnored {
                    dialect,
                    table: table_name.to_string(),
                    comment: comment.to_string(),
                };
                warn!(dialect = %dialect, table = table_name, "{warning}");
                warnings.push(warning);
            }
        }
        sql.push(';');

        let mut statements = vec![sql];
        statements.extend(
            table
                .columns()
                .filter_map(|column| unique_constraint(dialect, table_name, column)),
        );
        statements.extend(table_comment);
        statements.extend(deferred_comments);

        debug!(
            dialect = %dialect,
            table = table_name,
            statements = statements.len(),
            warnings = warnings.len(),
            "generated create table DDL"
        );
        Ok(GeneratedDdl {
            statements,
            warnings,
        })
    }

    /// `name type [default ..] [not null]` or `name [type] identity`.
    fn column_definition(&self, table_name: &str, column: &Column) -> Result<String> {
        let dialect = self.dialect;
        let features = dialect.features();
        let mut def = column.name().to_string();

        if column.identity {
            if !features.supports_identity_columns {
                return Err(DialectError::UnsupportedFeature {
                    dialect,
                    feature: "identity",
                    table: table_name.to_string(),
                    column: column.name().to_string(),
                });
            }
            if features.has_data_type_in_identity_column {
                def.push(' ');
                def.push_str(&dialect.translate_to_ddl_type(column.ty, &column.lengths)?);
            }
            def.push(' ');
            def.push_str(if column.ty == Type::Bigint {
                features.identity_column_string_bigint
            } else {
                features.identity_column_string
            });
            return Ok(def);
        }

        def.push(' ');
        def.push_str(&dialect.translate_to_ddl_type(column.ty, &column.lengths)?);
        if let Some(value) = &column.default_value {
            def.push_str(" default ");
            def.push_str(value);
        }
        if column.not_null {
            def.push_str(" not null");
        } else {
            def.push_str(features.null_column_string);
        }
        Ok(def)
    }
}

impl Table {
    /// Renders this table for `dialect` with default options.
    ///
    /// # Errors
    ///
    /// See [`DdlGenerator::generate`].
    pub fn to_create_table_ddl(&self, dialect: Dialect) -> Result<GeneratedDdl> {
        DdlGenerator::new(dialect).generate(self)
    }

    /// Renders this table for `dialect` with `options`.
    ///
    /// # Errors
    ///
    /// See [`DdlGenerator::generate`].
    pub fn to_create_table_ddl_with(
        &self,
        dialect: Dialect,
        options: DdlOptions,
    ) -> Result<GeneratedDdl> {
        DdlGenerator::new(dialect).with_options(options).generate(self)
    }
}

/// Builds the unique constraint statement for `column`, if it is unique.
///
/// The constraint is named by the column or `UK_<table>_<column>`.
#[must_use]
pub fn unique_constraint(dialect: Dialect, table: &str, column: &Column) -> Option<String> {
    if !column.unique {
        return None;
    }
    let col = column.name();
    let name = column
        .unique_constraint_name
        .clone()
        .unwrap_or_else(|| format!("UK_{table}_{col}"));
    Some(match dialect.family() {
        DialectFamily::Db2 | DialectFamily::Derby => {
            format!("create unique index {name} on {table} ({col});")
        }
        DialectFamily::Informix => {
            format!("alter table {table} add constraint unique ({col}) constraint {name};")
        }
        DialectFamily::MySql => format!("alter table {table} add unique index {name} ({col});"),
        _ => format!("alter table {table} add constraint {name} unique ({col});"),
    })
}

/// `comment on column <table>.<column> is '<comment>';`
#[must_use]
pub fn comment_on_column(table: &str, column: &str, comment: &str) -> String {
    format!("comment on column {table}.{column} is '{}';", escape(comment))
}

/// `comment on table <table> is '<comment>';`
#[must_use]
pub fn comment_on_table(table: &str, comment: &str) -> String {
    format!("comment on table {table} is '{}';", escape(comment))
}

fn inline_comment(template: &str, comment: &str) -> String {
    template.replace(COMMENT_PLACEHOLDER, &escape(comment))
}

fn escape(text: &str) -> String {
    text.replace('\'', "''")
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reserved::NoCheck;
    use pretty_assertions::assert_eq;

    fn person() -> Table {
        let mut table = Table::new("PERSON");
        table.add_column("id").string(30).pkey();
        table.add_column("age").integer().not_null();
        table
    }

    #[test]
    fn test_person_on_h2() {
        let ddl = person().to_create_table_ddl(Dialect::H2).unwrap();
        assert_eq!(
            ddl.statements,
            vec!["create table PERSON (id varchar(30),age integer not null, primary key (id));"]
        );
        assert!(ddl.warnings.is_empty());
    }

    #[test]
    fn test_engine_suffix_and_null_string() {
        let ddl = person().to_create_table_ddl(Dialect::MySql57InnoDb).unwrap();
        assert_eq!(
            ddl.statements[0],
            "create table PERSON (id varchar(30),age integer not null, primary key (id)) engine=InnoDB;"
        );
        let ddl = person().to_create_table_ddl(Dialect::SqlServer2012).unwrap();
        assert_eq!(
            ddl.statements[0],
            "create table PERSON (id varchar(30) null,age int not null, primary key (id));"
        );
    }

    #[test]
    fn test_multiset_header_without_pkey() {
        let mut table = Table::new("LOG");
        table.add_column("line").string(100);
        let ddl = table.to_create_table_ddl(Dialect::Teradata14).unwrap();
        assert_eq!(
            ddl.statements[0],
            "create multiset table LOG (line varchar(100));"
        );
    }

    #[test]
    fn test_identity_columns() {
        let mut table = Table::new("T");
        table.add_column("id").big_int().identity();
        table.add_column("n").integer().identity();
        let ddl = table.to_create_table_ddl(Dialect::PostgreSql95).unwrap();
        assert_eq!(
            ddl.statements[0],
            "create table T (id bigserial not null,n serial not null);"
        );
        let ddl = table.to_create_table_ddl(Dialect::H2).unwrap();
        assert_eq!(
            ddl.statements[0],
            "create table T (id bigint generated by default as identity,n integer generated by default as identity);"
        );
    }

    #[test]
    fn test_identity_unsupported_is_fatal() {
        let mut table = Table::new("T");
        table.add_column("id").integer().identity();
        let err = table.to_create_table_ddl(Dialect::Oracle10g).unwrap_err();
        assert_eq!(
            err,
            DialectError::UnsupportedFeature {
                dialect: Dialect::Oracle10g,
                feature: "identity",
                table: "T".into(),
                column: "id".into(),
            }
        );
    }

    #[test]
    fn test_default_and_column_check() {
        let mut table = Table::new("T");
        table
            .add_column("qty")
            .integer()
            .default_value("0")
            .check("qty >= 0");
        let ddl = table.to_create_table_ddl(Dialect::PostgreSql95).unwrap();
        assert_eq!(
            ddl.statements[0],
            "create table T (qty int4 default 0 check (qty >= 0));"
        );

        let ddl = table.to_create_table_ddl(Dialect::MySql5).unwrap();
        assert_eq!(ddl.statements[0], "create table T (qty integer default 0);");
        assert_eq!(ddl.warnings.len(), 1);
        assert!(matches!(
            &ddl.warnings[0],
            DdlWarning::ColumnCheckIgnored { column, .. } if column == "qty"
        ));
    }

    #[test]
    fn test_table_check() {
        let mut table = person();
        table.check("age > 0");
        let ddl = table.to_create_table_ddl(Dialect::Oracle12c).unwrap();
        assert_eq!(
            ddl.statements[0],
            "create table PERSON (id varchar2(30),age number(10,0) not null, primary key (id), check (age > 0));"
        );
    }

    #[test]
    fn test_unique_statements_by_family() {
        let mut table = Table::new("T");
        table.add_column("a").integer().unique();
        table.add_column("b").integer().unique_named("UQ_B");
        table.add_column("c").integer();

        let rendered = |dialect| table.to_create_table_ddl(dialect).unwrap().statements;
        assert_eq!(
            rendered(Dialect::H2),
            vec![
                "create table T (a integer,b integer,c integer);",
                "alter table T add constraint UK_T_a unique (a);",
                "alter table T add constraint UQ_B unique (b);",
            ]
        );
        assert_eq!(
            rendered(Dialect::MySql55)[1],
            "alter table T add unique index UK_T_a (a);"
        );
        assert_eq!(
            rendered(Dialect::Db2)[1],
            "create unique index UK_T_a on T (a);"
        );
        assert_eq!(
            rendered(Dialect::Informix10)[2],
            "alter table T add constraint unique (b) constraint UQ_B;"
        );
    }

    #[test]
    fn test_comments() {
        let mut table = Table::new("T");
        table.comment("all the t's");
        table.add_column("a").integer().unique().comment("first");
        table.add_column("b").integer().comment("it's b");

        let ddl = table.to_create_table_ddl(Dialect::PostgreSql95).unwrap();
        assert_eq!(
            ddl.statements,
            vec![
                "create table T (a int4,b int4);",
                "alter table T add constraint UK_T_a unique (a);",
                "comment on table T is 'all the t''s';",
                "comment on column T.a is 'first';",
                "comment on column T.b is 'it''s b';",
            ]
        );

        let ddl = table.to_create_table_ddl(Dialect::MySql5InnoDb).unwrap();
        assert_eq!(
            ddl.statements[0],
            "create table T (a integer comment 'first',b integer comment 'it''s b') engine=InnoDB comment='all the t''s';"
        );

        let ddl = table.to_create_table_ddl(Dialect::Sqlite).unwrap();
        assert_eq!(ddl.statements[0], "create table T (a integer,b integer);");
        assert_eq!(ddl.warnings.len(), 3);
    }

    #[test]
    fn test_reserved_words_are_fatal() {
        let mut table = Table::new("T");
        table.add_column("select").integer();
        assert!(matches!(
            table.to_create_table_ddl(Dialect::H2),
            Err(DialectError::ReservedWord { identifier, .. }) if identifier == "select"
        ));

        let generated = DdlGenerator::new(Dialect::H2)
            .with_checker(NoCheck)
            .generate(&table)
            .unwrap();
        assert_eq!(generated.statements[0], "create table T (select integer);");
    }

    #[test]
    fn test_strict_mode() {
        let mut table = person();
        table.check("age > 0");
        let options = DdlOptions {
            strict: true,
            ..DdlOptions::default()
        };
        let err = table
            .to_create_table_ddl_with(Dialect::MySql5, options)
            .unwrap_err();
        assert!(matches!(err, DialectError::Strict(ref w) if w.len() == 1));
        assert!(table.to_create_table_ddl_with(Dialect::H2, options).is_ok());
    }

    #[test]
    fn test_format_option() {
        let options = DdlOptions {
            format: true,
            ..DdlOptions::default()
        };
        let ddl = person()
            .to_create_table_ddl_with(Dialect::H2, options)
            .unwrap();
        assert_eq!(
            ddl.statements[0],
            "create table PERSON (\n    id varchar(30),\n    age integer not null,\n    primary key (id)\n);"
        );
    }

    #[test]
    fn test_generate_all_keeps_table_order() {
        let mut other = Table::new("OTHER");
        other.add_column("x").integer();
        let tables = [person(), other];
        let ddl = DdlGenerator::new(Dialect::H2).generate_all(&tables).unwrap();
        assert_eq!(ddl.statements.len(), 2);
        assert!(ddl.statements[1].starts_with("create table OTHER"));
    }
}
