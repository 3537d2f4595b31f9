//! Dialect names, families and capability records.

use oxide_dialects::{Dialect, DialectError, DialectFamily};

#[test]
fn names_resolve_with_or_without_suffix() {
    for dialect in Dialect::all() {
        let name = dialect.name();
        let short = name.trim_end_matches("Dialect");
        assert_eq!(Dialect::from_name(name).unwrap(), dialect);
        assert_eq!(Dialect::from_name(short).unwrap(), dialect);
        assert_eq!(Dialect::from_name(&short.to_uppercase()).unwrap(), dialect);
    }
}

#[test]
fn unknown_names() {
    for name in ["", "Oracle13", "MongoDialect", "sql server"] {
        assert!(matches!(
            Dialect::from_name(name),
            Err(DialectError::UnknownDialect(_))
        ));
    }
}

#[test]
fn records_are_shared_and_stable() {
    let first = Dialect::MySql55.features();
    let second = Dialect::MySql55.features();
    assert!(std::ptr::eq(first, second));
    assert!(std::ptr::eq(first, Dialect::MariaDb53.features()));
    assert!(!std::ptr::eq(first, Dialect::MySql5.features()));
}

#[test]
fn records_resolve_from_many_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                Dialect::all()
                    .map(|d| (d.features().create_table_string, d.pagination_template()))
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn families() {
    let mysql: Vec<Dialect> = Dialect::all()
        .filter(|d| d.family() == DialectFamily::MySql)
        .collect();
    assert_eq!(mysql.len(), 10);
    assert!(Dialect::all()
        .filter(|d| d.family() == DialectFamily::Postgres)
        .all(|d| d.features().supports_comment_on));
}
