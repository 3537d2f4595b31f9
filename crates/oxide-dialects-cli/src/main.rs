//! oxide-ddl CLI
//!
//! Renders DDL and paged queries for any supported dialect.

mod schema_file;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use oxide_dialects::prelude::*;
use oxide_dialects::NOT_SUPPORT;

/// Schema-once DDL and pagination for many SQL dialects.
#[derive(Parser)]
#[command(name = "oxide-ddl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target dialect, e.g. `MySQL55Dialect` or `postgresql95`.
    #[arg(short, long, env = "OXIDE_DIALECT", global = true)]
    dialect: Option<Dialect>,

    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every dialect with its family and paging support.
    Dialects,

    /// Print CREATE TABLE statements for a JSON schema file.
    Ddl {
        /// Schema file holding one table or an array of tables.
        schema: PathBuf,

        /// Lay statements out one definition per line.
        #[arg(long)]
        format: bool,

        /// Fail instead of skipping unsupported optional features.
        #[arg(long)]
        strict: bool,
    },

    /// Rewrite a select statement to return one page.
    Paginate {
        /// 1-based page number.
        #[arg(short, long, default_value_t = 1)]
        page: u64,

        /// Rows per page.
        #[arg(short, long, default_value_t = 10)]
        size: u64,

        /// The select statement.
        sql: String,
    },

    /// Print how the dialect spells every canonical type.
    Types,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Dialects => {
            for dialect in Dialect::all() {
                let paging = if dialect.supports_pagination() {
                    "paged"
                } else if dialect.top_limit_template() != NOT_SUPPORT {
                    "top-n"
                } else {
                    "-"
                };
                println!("{:<28} {:<10} {paging}", dialect.name(), dialect.family());
            }
        }

        Commands::Ddl {
            schema,
            format,
            strict,
        } => {
            let dialect = require_dialect(cli.dialect)?;
            let tables = schema_file::load_tables(&schema)?;
            let generated = DdlGenerator::new(dialect)
                .with_options(DdlOptions { format, strict })
                .generate_all(&tables)?;
            let separator = if format { "\n\n" } else { "\n" };
            println!("{}", generated.statements.join(separator));
            info!(
                "{} statement(s) for {} table(s), {} warning(s)",
                generated.statements.len(),
                tables.len(),
                generated.warnings.len()
            );
        }

        Commands::Paginate { page, size, sql } => {
            let dialect = require_dialect(cli.dialect)?;
            println!("{}", dialect.paginate(page, size, &sql)?);
        }

        Commands::Types => {
            let dialect = require_dialect(cli.dialect)?;
            let lengths = oxide_dialects::ColumnLengths::default();
            for ty in Type::all() {
                let spelled = dialect
                    .translate_to_ddl_type(ty, &lengths)
                    .unwrap_or_else(|_| "-".to_string());
                println!("{:<14} {spelled}", ty.name());
            }
        }
    }

    Ok(())
}

fn require_dialect(dialect: Option<Dialect>) -> anyhow::Result<Dialect> {
    dialect.context("no dialect given, pass --dialect or set OXIDE_DIALECT")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_dialect_names() {
        let cli = Cli::try_parse_from([
            "oxide-ddl",
            "paginate",
            "--dialect",
            "mysql55",
            "--page",
            "2",
            "select * from t",
        ])
        .unwrap();
        assert_eq!(cli.dialect, Some(Dialect::MySql55));
        assert!(matches!(cli.command, Commands::Paginate { page: 2, size: 10, .. }));

        assert!(Cli::try_parse_from(["oxide-ddl", "types", "-d", "nosql"]).is_err());
    }
}
