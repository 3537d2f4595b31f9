//! Cosmetic layout of generated DDL.
//!
//! [`format_ddl`] only moves whitespace that sits outside quoted text, so the
//! formatted statement is equivalent to its input. Formatting an already
//! formatted statement returns it unchanged.

const INDENT: &str = "    ";

/// Lays out one DDL statement for reading.
///
/// ```
/// use oxide_dialects::format_ddl;
///
/// assert_eq!(
///     format_ddl("create table T (a integer,b integer, primary key (a));"),
///     "create table T (\n    a integer,\n    b integer,\n    primary key (a)\n);"
/// );
/// ```
#[must_use]
pub fn format_ddl(sql: &str) -> String {
    let sql = collapse_whitespace(sql);
    let lower = sql.to_ascii_lowercase();
    if lower.starts_with("create ") {
        if let Some(formatted) = format_create(&sql) {
            return formatted;
        }
    } else if lower.starts_with("alter table ") {
        return break_before(&sql, " add ");
    } else if lower.starts_with("comment on ") {
        return break_before(&sql, " is '");
    }
    sql
}

/// Replaces each run of unquoted whitespace with one space and trims.
fn collapse_whitespace(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    let mut pending_space = false;
    for (ch, quoted) in Scanner::new(sql.trim()) {
        if !quoted && ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(ch);
    }
    out
}

fn format_create(sql: &str) -> Option<String> {
    let (open, close) = outer_parens(sql)?;
    let head = sql[..open].trim_end();
    if !head.to_ascii_lowercase().contains(" table ") {
        return None;
    }
    let inner = &sql[open + 1..close];
    let tail = sql[close + 1..].trim_start();
    let definitions: Vec<String> = split_top_level(inner)
        .into_iter()
        .map(|def| format!("{INDENT}{}", def.trim()))
        .collect();
    let mut out = format!("{head} (\n{}\n)", definitions.join(",\n"));
    if !tail.is_empty() {
        if !tail.starts_with(';') {
            out.push(' ');
        }
        out.push_str(tail);
    }
    Some(out)
}

fn break_before(sql: &str, marker: &str) -> String {
    let lower = sql.to_ascii_lowercase();
    let position = Scanner::new(&lower)
        .positions()
        .find(|&(index, quoted)| !quoted && lower[index..].starts_with(marker));
    match position {
        Some((index, _)) => format!("{}\n{INDENT}{}", &sql[..index], &sql[index + 1..]),
        None => sql.to_string(),
    }
}

/// Byte offsets of the first unquoted `(` and its matching `)`.
fn outer_parens(sql: &str) -> Option<(usize, usize)> {
    let mut open = None;
    let mut depth = 0usize;
    for (index, quoted) in Scanner::new(sql).positions() {
        if quoted {
            continue;
        }
        match sql.as_bytes()[index] {
            b'(' => {
                if open.is_none() {
                    open = Some(index);
                }
                depth += 1;
            }
            b')' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    return open.map(|open| (open, index));
                }
            }
            _ => {}
        }
    }
    None
}

fn split_top_level(inner: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, quoted) in Scanner::new(inner).positions() {
        if quoted {
            continue;
        }
        match inner.as_bytes()[index] {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                parts.push(&inner[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&inner[start..]);
    parts
}

/// Walks characters and reports whether each one is inside quotes.
///
/// Quote characters themselves count as quoted. A doubled quote inside a
/// literal closes and reopens it, which keeps it quoted.
struct Scanner<'a> {
    chars: std::str::CharIndices<'a>,
    quote: Option<char>,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices(),
            quote: None,
        }
    }

    fn positions(mut self) -> impl Iterator<Item = (usize, bool)> + 'a {
        std::iter::from_fn(move || self.step().map(|(index, _, quoted)| (index, quoted)))
    }

    fn step(&mut self) -> Option<(usize, char, bool)> {
        let (index, ch) = self.chars.next()?;
        let quoted = match self.quote {
            Some(open) => {
                if ch == open {
                    self.quote = None;
                }
                true
            }
            None if matches!(ch, '\'' | '"' | '`') => {
                self.quote = Some(ch);
                true
            }
            None => false,
        };
        Some((index, ch, quoted))
    }
}

impl Iterator for Scanner<'_> {
    type Item = (char, bool);

    fn next(&mut self) -> Option<Self::Item> {
        self.step().map(|(_, ch, quoted)| (ch, quoted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_table_layout() {
        let sql = "create table ORDERS (id bigint not null,total decimal(10,2) default 0 check (total >= 0), primary key (id)) engine=InnoDB comment='a, b';";
        assert_eq!(
            format_ddl(sql),
            "create table ORDERS (\n    id bigint not null,\n    total decimal(10,2) default 0 check (total >= 0),\n    primary key (id)\n) engine=InnoDB comment='a, b';"
        );
    }

    #[test]
    fn test_alter_and_comment_layout() {
        assert_eq!(
            format_ddl("alter table T add constraint UK_T_A unique (a);"),
            "alter table T\n    add constraint UK_T_A unique (a);"
        );
        assert_eq!(
            format_ddl("comment on column T.a is 'is '' here';"),
            "comment on column T.a\n    is 'is '' here';"
        );
        assert_eq!(
            format_ddl("create unique index UK_T_A on T (a);"),
            "create unique index UK_T_A on T (a);"
        );
    }

    #[test]
    fn test_quoted_text_is_untouched() {
        let sql = "create table T (a varchar(10) default 'x,  (y' not null);";
        assert_eq!(
            format_ddl(sql),
            "create table T (\n    a varchar(10) default 'x,  (y' not null\n);"
        );
    }

    #[test]
    fn test_idempotent() {
        for sql in [
            "create table T (a integer,b integer, primary key (a));",
            "create table T (a integer) engine=InnoDB;",
            "alter table T add unique index UK (a);",
            "comment on table T is 'hello   world';",
            "drop table T;",
        ] {
            let once = format_ddl(sql);
            assert_eq!(format_ddl(&once), once, "{sql}");
        }
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \n\t b  'c   d' "), "a b 'c   d'");
    }
}
