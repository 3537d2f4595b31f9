//! Paged and top-N query rendering across dialect families.

mod common;
use common::*;

use oxide_dialects::pagination::{BODY, NOT_SUPPORT};
use oxide_dialects::{Dialect, DialectError};
use pretty_assertions::assert_eq;

const SQL: &str = "select * from t";

#[test]
fn templates_are_total_and_carry_body() {
    for dialect in Dialect::all() {
        for template in [dialect.pagination_template(), dialect.top_limit_template()] {
            assert!(!template.is_empty(), "{dialect}");
            assert!(template == NOT_SUPPORT || template.contains(BODY), "{dialect}");
        }
    }
}

#[test]
fn limit_offset_family() {
    assert_eq!(
        page(Dialect::PostgreSql95, 3, 5, SQL),
        "select * from t limit 5 offset 10"
    );
    assert_eq!(page(Dialect::Sqlite, 1, 5, SQL), "select * from t limit 5");
    assert_eq!(page(Dialect::MariaDb, 2, 25, SQL), "select * from t limit 25, 25");
}

#[test]
fn fetch_family() {
    assert_eq!(
        page(Dialect::Oracle12c, 2, 10, SQL),
        "select * from t offset 10 rows fetch next 10 rows only"
    );
    assert_eq!(
        page(Dialect::Oracle12c, 1, 10, SQL),
        "select * from t fetch first 10 rows only"
    );
    assert_eq!(
        page(Dialect::Ingres10, 4, 10, SQL),
        "select * from t offset 30 fetch first 10 rows only"
    );
    assert_eq!(
        page(Dialect::SqlServer2012, 1, 10, SQL),
        "select * from t offset 0 rows fetch next 10 rows only"
    );
}

#[test]
fn rownum_family() {
    assert_eq!(
        page(Dialect::Oracle10g, 2, 10, SQL),
        "select * from ( select row_.*, rownum rownum_ from ( select * from t ) row_ where rownum <= 20) where rownum_ > 10"
    );
    assert_eq!(
        page(Dialect::Oracle8i, 2, 10, SQL),
        "select * from ( select row_.*, rownum rownum_ from ( select * from t ) row_ ) where rownum_ <= 20 and rownum_ > 10"
    );
    assert_eq!(
        page(Dialect::Oracle9i, 1, 10, SQL),
        "select * from ( select * from t ) where rownum <= 10"
    );
    assert_eq!(
        page(Dialect::Db2, 2, 10, SQL),
        "select * from ( select inner2_.*, rownumber() over(order by order of inner2_) as rownumber_ from ( select * from t fetch first 20 rows only ) as inner2_ ) as inner1_ where rownumber_ > 10 order by rownumber_"
    );
}

#[test]
fn prefix_family() {
    assert_eq!(page(Dialect::Firebird, 2, 10, SQL), "select first 10 skip 10 * from t");
    assert_eq!(page(Dialect::Informix10, 2, 10, SQL), "select SKIP 10 first 10 * from t");
    assert_eq!(page(Dialect::Hsql, 2, 10, SQL), "select limit 10 10 * from t");
    assert_eq!(page(Dialect::Hsql, 1, 10, SQL), "select top 10 * from t");
    assert_eq!(page(Dialect::Interbase, 2, 10, SQL), "select * from t rows 10 to 10");
}

#[test]
fn sqlserver_row_number_with_distinct() {
    let sql = "select distinct a, b from t order by a";
    assert_eq!(
        page(Dialect::SqlServer2005, 2, 10, sql),
        "WITH query AS (SELECT TMP_.*, ROW_NUMBER() OVER (ORDER BY CURRENT_TIMESTAMP) as ROW_NUM_ FROM ( select distinct TOP(20) a, b from t order by a ) TMP_ ) SELECT a, b FROM query WHERE ROW_NUM_ >= 11 AND ROW_NUM_ < 21"
    );
    assert_eq!(
        page(Dialect::SqlServer2008, 1, 10, sql),
        "select distinct TOP(10) a, b from t order by a"
    );
    assert_eq!(
        page(Dialect::SqlServer2008, 1, 10, "select a from t"),
        "select TOP(10) a from t"
    );
}

#[test]
fn sqlserver_row_number_with_quoted_aliases() {
    assert_eq!(
        page(Dialect::SqlServer2005, 2, 10, "select name as [Full Name], id from users"),
        "WITH query AS (SELECT TMP_.*, ROW_NUMBER() OVER (ORDER BY CURRENT_TIMESTAMP) as ROW_NUM_ FROM ( select TOP(20) name as [Full Name], id from users ) TMP_ ) SELECT [Full Name], id FROM query WHERE ROW_NUM_ >= 11 AND ROW_NUM_ < 21"
    );
    let sql = page(Dialect::SqlServer2008, 2, 10, "select a as \"Total Sum\" from t");
    assert!(sql.contains(") TMP_ ) SELECT \"Total Sum\" FROM query WHERE"), "{sql}");
}

#[test]
fn distinct_stays_in_body_without_tag() {
    assert_eq!(
        page(Dialect::MySql5, 1, 3, "SELECT DISTINCT a FROM t"),
        "select DISTINCT a FROM t limit 3"
    );
}

#[test]
fn top_limit_only_dialects() {
    assert_eq!(page(Dialect::Cache71, 1, 10, SQL), "select top 10 * from t");
    assert_eq!(
        Dialect::Cache71.paginate(2, 10, SQL),
        Err(DialectError::TopLimitOnly {
            dialect: Dialect::Cache71,
            template: "select ($DISTINCT) top $PAGESIZE $BODY",
        })
    );
    assert!(!Dialect::Cache71.supports_pagination());
    assert_eq!(
        Dialect::TimesTen.top_limit(7, SQL).unwrap(),
        "select first 7 * from t"
    );
}

#[test]
fn unsupported_dialects() {
    for dialect in [Dialect::Sybase, Dialect::Teradata14, Dialect::Progress] {
        assert_eq!(dialect.pagination_template(), NOT_SUPPORT);
        assert_eq!(dialect.top_limit_template(), NOT_SUPPORT);
        assert_eq!(
            dialect.paginate(1, 10, SQL),
            Err(DialectError::PaginationNotSupported { dialect })
        );
    }
}

#[test]
fn invalid_input() {
    assert!(matches!(
        Dialect::H2.paginate(1, 10, "delete from t"),
        Err(DialectError::InvalidSql(_))
    ));
    assert_eq!(
        Dialect::H2.paginate(0, 10, SQL),
        Err(DialectError::InvalidPage {
            page_number: 0,
            page_size: 10
        })
    );
    assert!(Dialect::H2.paginate(u64::MAX, 2, SQL).is_err());
    assert!(Dialect::H2.top_limit(0, SQL).is_err());
}
