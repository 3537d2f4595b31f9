//! JSON schema files.
//!
//! A schema file holds either one table or an array of tables, in the serde
//! form of [`Table`].

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

use oxide_dialects::Table;

#[derive(Deserialize)]
#[serde(untagged)]
enum SchemaFile {
    Many(Vec<Table>),
    One(Table),
}

/// Reads the tables of a schema file, in file order.
pub fn load_tables(path: &Path) -> anyhow::Result<Vec<Table>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let tables = match serde_json::from_str(&text)
        .with_context(|| format!("parsing {}", path.display()))?
    {
        SchemaFile::Many(tables) => tables,
        SchemaFile::One(table) => vec![table],
    };
    debug!(path = %path.display(), tables = tables.len(), "loaded schema");
    Ok(tables)
}
