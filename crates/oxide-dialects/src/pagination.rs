//! Paging templates and their renderer.
//!
//! Every dialect has two templates: a skip+limit template for arbitrary pages
//! and a top-N template for the first `N` rows. A dialect without a strategy
//! returns [`NOT_SUPPORT`] instead of a template.
//!
//! Placeholders are always upper case. They are replaced by exact substring
//! substitution, longest name first, and `$BODY` last so text inside the
//! caller's query is never rewritten.

use tracing::debug;

use crate::dialect::Dialect;
use crate::error::{DialectError, Result};

/// Returned in place of a template by dialects without a paging strategy.
pub const NOT_SUPPORT: &str = "NOT_SUPPORT";

/// The query after its leading `select `.
pub const BODY: &str = "$BODY";
/// Rows per page.
pub const PAGESIZE: &str = "$PAGESIZE";
/// Rows before the page.
pub const SKIP_ROWS: &str = "$SKIP_ROWS";
/// Rows up to and including the page.
pub const TOTAL_ROWS: &str = "$TOTAL_ROWS";
/// `$SKIP_ROWS + 1`.
pub const SKIP_ROWS_PLUS1: &str = "$SKIP_ROWS_PLUS1";
/// `$TOTAL_ROWS + 1`.
pub const TOTAL_ROWS_PLUS1: &str = "$TOTAL_ROWS_PLUS1";
/// `distinct` or nothing, written as `($DISTINCT)` in templates.
pub const DISTINCT: &str = "$DISTINCT";
/// Output column names of the select list.
pub const FIELDS_OR_ALIAS: &str = "$FIELDS_OR_ALIAS";

const DISTINCT_TAG: &str = "($DISTINCT)";

const LIMIT_OFFSET: &str = "select $BODY limit $PAGESIZE offset $SKIP_ROWS";
const LIMIT_SKIP: &str = "select $BODY limit $SKIP_ROWS, $PAGESIZE";
const OFFSET_FETCH_NEXT: &str = "select $BODY offset $SKIP_ROWS rows fetch next $PAGESIZE rows only";
const OFFSET_FETCH_FIRST: &str = "select $BODY offset $SKIP_ROWS fetch first $PAGESIZE rows only";
const ROWS_TO: &str = "select $BODY rows $SKIP_ROWS to $PAGESIZE";
const FIRST_SKIP: &str = "select first $PAGESIZE skip $SKIP_ROWS $BODY";
const SKIP_FIRST: &str = "select SKIP $SKIP_ROWS first $PAGESIZE $BODY";
const LIMIT_PREFIX: &str = "select limit $SKIP_ROWS $PAGESIZE $BODY";
const ROW_NUMBER: &str = "WITH query AS (SELECT TMP_.*, ROW_NUMBER() OVER (ORDER BY CURRENT_TIMESTAMP) as ROW_NUM_ FROM ( select ($DISTINCT) TOP($TOTAL_ROWS) $BODY ) TMP_ ) SELECT $FIELDS_OR_ALIAS FROM query WHERE ROW_NUM_ >= $SKIP_ROWS_PLUS1 AND ROW_NUM_ < $TOTAL_ROWS_PLUS1";
const DB2_ROWNUMBER: &str = "select * from ( select inner2_.*, rownumber() over(order by order of inner2_) as rownumber_ from ( select $BODY fetch first $TOTAL_ROWS rows only ) as inner2_ ) as inner1_ where rownumber_ > $SKIP_ROWS order by rownumber_";
const ORACLE_ROWNUM: &str = "select * from ( select row_.*, rownum rownum_ from ( select $BODY ) row_ where rownum <= $TOTAL_ROWS) where rownum_ > $SKIP_ROWS";
const ORACLE_LEGACY_ROWNUM: &str = "select * from ( select row_.*, rownum rownum_ from ( select $BODY ) row_ ) where rownum_ <= $TOTAL_ROWS and rownum_ > $SKIP_ROWS";

const TOP_FETCH_FIRST: &str = "select $BODY fetch first $PAGESIZE rows only";
const TOP_LIMIT: &str = "select $BODY limit $PAGESIZE";
const TOP_OFFSET_ZERO: &str = "select $BODY offset 0 rows fetch next $PAGESIZE rows only";
const TOP_ROWS: &str = "select $BODY rows $PAGESIZE";
const TOP_PAREN: &str = "select ($DISTINCT) TOP($PAGESIZE) $BODY";
const TOP_DISTINCT: &str = "select ($DISTINCT) top $PAGESIZE $BODY";
const TOP_FIRST: &str = "select first $PAGESIZE $BODY";
const TOP_PLAIN: &str = "select top $PAGESIZE $BODY";
const TOP_ROWNUM: &str = "select * from ( select $BODY ) where rownum <= $PAGESIZE";

impl Dialect {
    /// Returns the skip+limit template, or [`NOT_SUPPORT`].
    #[must_use]
    pub const fn pagination_template(self) -> &'static str {
        match self {
            Self::SqlServer2005 | Self::SqlServer2008 => ROW_NUMBER,
            Self::H2
            | Self::HanaColumnStore
            | Self::HanaRowStore
            | Self::PostgresPlus
            | Self::PostgreSql
            | Self::PostgreSql81
            | Self::PostgreSql82
            | Self::PostgreSql9
            | Self::PostgreSql91
            | Self::PostgreSql92
            | Self::PostgreSql93
            | Self::PostgreSql94
            | Self::PostgreSql95
            | Self::Sqlite => LIMIT_OFFSET,
            Self::Access
            | Self::Cobol
            | Self::Cubrid
            | Self::Dbf
            | Self::Excel
            | Self::MariaDb
            | Self::MariaDb53
            | Self::MySql
            | Self::MySql5
            | Self::MySql5InnoDb
            | Self::MySql55
            | Self::MySql57
            | Self::MySql57InnoDb
            | Self::MySqlInnoDb
            | Self::MySqlMyIsam
            | Self::Paradox
            | Self::Text
            | Self::Xml => LIMIT_SKIP,
            Self::Oracle12c
            | Self::SqlServer2012
            | Self::Derby
            | Self::DerbyTenFive
            | Self::DerbyTenSix
            | Self::DerbyTenSeven => OFFSET_FETCH_NEXT,
            Self::Ingres9 | Self::Ingres10 => OFFSET_FETCH_FIRST,
            Self::Interbase => ROWS_TO,
            Self::Db2 | Self::Db2400 => DB2_ROWNUMBER,
            Self::Oracle | Self::Oracle8i => ORACLE_LEGACY_ROWNUM,
            Self::DataDirectOracle9 | Self::Oracle9 | Self::Oracle9i | Self::Oracle10g => {
                ORACLE_ROWNUM
            }
            Self::Informix10 => SKIP_FIRST,
            Self::Firebird => FIRST_SKIP,
            Self::Hsql => LIMIT_PREFIX,
            Self::Cache71
            | Self::Db2390
            | Self::FrontBase
            | Self::Informix
            | Self::Ingres
            | Self::JDataStore
            | Self::Mckoi
            | Self::MimerSql
            | Self::Pointbase
            | Self::Progress
            | Self::RdmsOs2200
            | Self::SapDb
            | Self::SqlServer
            | Self::Sybase
            | Self::Sybase11
            | Self::SybaseAnywhere
            | Self::SybaseAse15
            | Self::SybaseAse157
            | Self::Teradata
            | Self::Teradata14
            | Self::TimesTen => NOT_SUPPORT,
        }
    }

    /// Returns the top-N template, or [`NOT_SUPPORT`].
    #[must_use]
    pub const fn top_limit_template(self) -> &'static str {
        match self {
            Self::Oracle12c
            | Self::Db2
            | Self::Db2390
            | Self::Db2400
            | Self::Derby
            | Self::DerbyTenFive
            | Self::DerbyTenSix
            | Self::DerbyTenSeven
            | Self::Ingres9
            | Self::Ingres10
            | Self::RdmsOs2200 => TOP_FETCH_FIRST,
            Self::Access
            | Self::Cobol
            | Self::Cubrid
            | Self::Dbf
            | Self::Excel
            | Self::H2
            | Self::HanaColumnStore
            | Self::HanaRowStore
            | Self::MariaDb
            | Self::MariaDb53
            | Self::MySql
            | Self::MySql5
            | Self::MySql5InnoDb
            | Self::MySql55
            | Self::MySql57
            | Self::MySql57InnoDb
            | Self::MySqlInnoDb
            | Self::MySqlMyIsam
            | Self::Paradox
            | Self::PostgresPlus
            | Self::PostgreSql
            | Self::PostgreSql81
            | Self::PostgreSql82
            | Self::PostgreSql9
            | Self::PostgreSql91
            | Self::PostgreSql92
            | Self::PostgreSql93
            | Self::PostgreSql94
            | Self::PostgreSql95
            | Self::Sqlite
            | Self::Text
            | Self::Xml => TOP_LIMIT,
            Self::SqlServer2012 => TOP_OFFSET_ZERO,
            Self::Interbase => TOP_ROWS,
            Self::SqlServer2005 | Self::SqlServer2008 => TOP_PAREN,
            Self::Cache71 | Self::SqlServer => TOP_DISTINCT,
            Self::Oracle
            | Self::Oracle8i
            | Self::Oracle9
            | Self::Oracle9i
            | Self::Oracle10g
            | Self::DataDirectOracle9 => TOP_ROWNUM,
            Self::Firebird | Self::Informix | Self::Informix10 | Self::Ingres | Self::TimesTen => {
                TOP_FIRST
            }
            Self::Hsql => TOP_PLAIN,
            Self::FrontBase
            | Self::JDataStore
            | Self::Mckoi
            | Self::MimerSql
            | Self::Pointbase
            | Self::Progress
            | Self::SapDb
            | Self::Sybase
            | Self::Sybase11
            | Self::SybaseAnywhere
            | Self::SybaseAse15
            | Self::SybaseAse157
            | Self::Teradata
            | Self::Teradata14 => NOT_SUPPORT,
        }
    }

    /// Returns true if any page, not only the first, can be rendered.
    #[must_use]
    pub fn supports_pagination(self) -> bool {
        self.pagination_template() != NOT_SUPPORT
    }

    /// Rewrites `sql` to return page `page_number` (1-based) of `page_size`
    /// rows.
    ///
    /// The first page uses the top-N template when the dialect has one.
    ///
    /// # Errors
    ///
    /// - [`DialectError::InvalidSql`] if `sql` does not start with `select `.
    /// - [`DialectError::InvalidPage`] for a zero page number or size.
    /// - [`DialectError::PaginationNotSupported`] if the dialect has no
    ///   template at all.
    /// - [`DialectError::TopLimitOnly`] for pages after the first on dialects
    ///   that can only limit.
    pub fn paginate(self, page_number: u64, page_size: u64, sql: &str) -> Result<String> {
        let body = strip_select(sql)?;
        if page_number == 0 || page_size == 0 {
            return Err(DialectError::InvalidPage {
                page_number,
                page_size,
            });
        }
        let top = self.top_limit_template();
        let paged = self.pagination_template();
        if top == NOT_SUPPORT && paged == NOT_SUPPORT {
            return Err(DialectError::PaginationNotSupported { dialect: self });
        }
        let template = if page_number == 1 && top != NOT_SUPPORT {
            top
        } else if paged == NOT_SUPPORT {
            return Err(DialectError::TopLimitOnly {
                dialect: self,
                template: top,
            });
        } else {
            paged
        };
        let skip_rows = (page_number - 1)
            .checked_mul(page_size)
            .filter(|skip| skip.checked_add(page_size).is_some())
            .ok_or(DialectError::InvalidPage {
                page_number,
                page_size,
            })?;
        let sql = render_query(template, body, page_size, skip_rows)?;
        debug!(dialect = %self, page_number, page_size, "rendered page");
        Ok(sql)
    }

    /// Rewrites `sql` to return at most `limit` rows.
    ///
    /// # Errors
    ///
    /// Same as [`Dialect::paginate`] for the first page.
    pub fn top_limit(self, limit: u64, sql: &str) -> Result<String> {
        let body = strip_select(sql)?;
        if limit == 0 {
            return Err(DialectError::InvalidPage {
                page_number: 1,
                page_size: 0,
            });
        }
        let template = self.top_limit_template();
        if template == NOT_SUPPORT {
            return Err(DialectError::PaginationNotSupported { dialect: self });
        }
        render_query(template, body, limit, 0)
    }
}

/// Concrete values substituted into a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageValues<'a> {
    /// Replaces `$BODY`.
    pub body: &'a str,
    /// Replaces `($DISTINCT)` with `distinct` when set.
    pub distinct: bool,
    /// Replaces `$FIELDS_OR_ALIAS`.
    pub fields_or_alias: &'a str,
    /// Replaces `$PAGESIZE`.
    pub page_size: u64,
    /// Replaces `$SKIP_ROWS`; `$TOTAL_ROWS` is `skip_rows + page_size`.
    pub skip_rows: u64,
}

/// Substitutes every placeholder of `template` with `values`.
///
/// Longer placeholders are replaced before the placeholders they start with,
/// and `$BODY` is replaced last.
#[must_use]
pub fn render_template(template: &str, values: &PageValues<'_>) -> String {
    let total_rows = values.skip_rows.saturating_add(values.page_size);
    let distinct = if values.distinct { "distinct " } else { "" };
    template
        .replace(SKIP_ROWS_PLUS1, &values.skip_rows.saturating_add(1).to_string())
        .replace(TOTAL_ROWS_PLUS1, &total_rows.saturating_add(1).to_string())
        .replace(SKIP_ROWS, &values.skip_rows.to_string())
        .replace(TOTAL_ROWS, &total_rows.to_string())
        .replace(PAGESIZE, &values.page_size.to_string())
        .replace(FIELDS_OR_ALIAS, values.fields_or_alias)
        .replace(&format!("{DISTINCT_TAG} "), distinct)
        .replace(DISTINCT_TAG, distinct.trim_end())
        .replace(BODY, values.body)
}

fn render_query(
    template: &'static str,
    body: &str,
    page_size: u64,
    skip_rows: u64,
) -> Result<String> {
    let (body, distinct) = match strip_keyword(body, "distinct") {
        Some(rest) if template.contains(DISTINCT_TAG) => (rest, true),
        _ => (body, false),
    };
    let fields = if template.contains(FIELDS_OR_ALIAS) {
        fields_or_alias(body)?
    } else {
        String::new()
    };
    let values = PageValues {
        body,
        distinct,
        fields_or_alias: &fields,
        page_size,
        skip_rows,
    };
    Ok(render_template(template, &values))
}

/// Returns the query after its leading `select` keyword.
fn strip_select(sql: &str) -> Result<&str> {
    strip_keyword(sql.trim(), "select")
        .filter(|body| !body.is_empty())
        .ok_or_else(|| DialectError::InvalidSql(format!("expected a select statement: {sql}")))
}

/// Strips `keyword` and the whitespace after it, ignoring case.
fn strip_keyword<'a>(text: &'a str, keyword: &str) -> Option<&'a str> {
    let head = text.get(..keyword.len())?;
    let rest = &text[keyword.len()..];
    if head.eq_ignore_ascii_case(keyword) && rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

/// Comma-joined output names of the select list at the start of `body`.
///
/// Aliases win over expressions, qualified names lose their qualifier and
/// any wildcard makes the whole list `*`.
fn fields_or_alias(body: &str) -> Result<String> {
    let list = select_list(body)
        .ok_or_else(|| DialectError::InvalidSql(format!("no top level from clause: {body}")))?;
    let mut names = Vec::new();
    for item in split_top_level(list) {
        let item = item.trim();
        if item == "*" || item.ends_with(".*") {
            return Ok("*".to_string());
        }
        names.push(output_name(item));
    }
    Ok(names.join(", "))
}

fn output_name(item: &str) -> &str {
    if let Some(quoted) = trailing_quoted(item) {
        let before = item[..item.len() - quoted.len()].trim_end();
        return if before.ends_with(OPERATORS) { item } else { quoted };
    }
    let words: Vec<&str> = item.split_whitespace().collect();
    if let [.., expr, alias] = words.as_slice() {
        let bare = !expr.ends_with(OPERATORS) && !alias.contains(['(', ')', '.', '\'']);
        if bare {
            return *alias;
        }
    }
    match item.rfind('.') {
        Some(dot) if !item.contains(['(', ' ', '\'']) => &item[dot + 1..],
        _ => item,
    }
}

const OPERATORS: [char; 7] = ['(', ',', '+', '-', '*', '/', '|'];

/// The quoted identifier `item` ends with, quotes included.
///
/// String literals do not count. A doubled closing quote stays inside the
/// quoted text.
fn trailing_quoted(item: &str) -> Option<&str> {
    let mut chars = item.char_indices().peekable();
    let mut last = None;
    while let Some((start, open)) = chars.next() {
        let Some(close) = closing_quote(open) else {
            continue;
        };
        let mut end = None;
        while let Some((index, ch)) = chars.next() {
            if ch == close {
                if chars.peek().is_some_and(|&(_, next)| next == close) {
                    chars.next();
                    continue;
                }
                end = Some(index + ch.len_utf8());
                break;
            }
        }
        last = end.map(|end| (start, end, open));
    }
    match last {
        Some((start, end, open)) if end == item.len() && open != '\'' => Some(&item[start..]),
        _ => None,
    }
}

/// The character closing a quoted span opened by `open`.
const fn closing_quote(open: char) -> Option<char> {
    match open {
        '\'' | '"' | '`' => Some(open),
        '[' => Some(']'),
        _ => None,
    }
}

/// The text between the start of `body` and its first top level `from`.
fn select_list(body: &str) -> Option<&str> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut prev = ' ';
    for (index, ch) in body.char_indices() {
        match quote {
            Some(close) if ch == close => quote = None,
            Some(_) => {}
            None => match ch {
                '\'' | '"' | '`' | '[' => quote = closing_quote(ch),
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                'f' | 'F' if depth == 0 && prev.is_whitespace() => {
                    let rest = &body[index..];
                    let is_from = rest.get(..4).is_some_and(|w| w.eq_ignore_ascii_case("from"))
                        && rest[4..].starts_with(char::is_whitespace);
                    if is_from {
                        return Some(&body[..index]);
                    }
                }
                _ => {}
            },
        }
        prev = ch;
    }
    None
}

/// Splits on commas outside parentheses and quotes.
fn split_top_level(list: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (index, ch) in list.char_indices() {
        match quote {
            Some(close) if ch == close => quote = None,
            Some(_) => {}
            None => match ch {
                '\'' | '"' | '`' | '[' => quote = closing_quote(ch),
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    parts.push(&list[start..index]);
                    start = index + 1;
                }
                _ => {}
            },
        }
    }
    parts.push(&list[start..]);
    parts
}
