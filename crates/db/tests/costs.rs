mod support;

use chrono::{DateTime, Datelike, Local, Utc};
use cost_core::{CostInput, Currency};
use rusqlite::Connection;
use support::{local_time, make_cost, setup_db};

#[test]
fn insert_assigns_increasing_ids_and_echoes_fields() {
    let test_db = setup_db();
    let db = &test_db.db;
    let input = CostInput {
        sum: 12.5,
        currency: Currency::Gbp,
        category: "Food".to_string(),
        description: Some("lunch".to_string()),
    };
    let first = db
        .insert_cost(&input, local_time(2025, 3, 4))
        .expect("insert first");
    let second = db
        .insert_cost(&make_cost(3.0, Currency::Usd, "Bus"), local_time(2025, 3, 5))
        .expect("insert second");

    assert!(second.id > first.id);
    assert_eq!(first.summary(), input);
    assert_eq!((first.year, first.month, first.day), (2025, 3, 4));
}

#[test]
fn calendar_fields_match_local_date_of_timestamp() {
    let test_db = setup_db();
    let added_at = local_time(2024, 12, 31);
    let record = test_db
        .db
        .insert_cost(&make_cost(1.0, Currency::Ils, "Misc"), added_at)
        .expect("insert");

    let stored = DateTime::parse_from_rfc3339(&record.date_added).expect("rfc3339");
    assert_eq!(stored.with_timezone(&Utc), added_at.with_timezone(&Utc));
    let local = stored.with_timezone(&Local);
    assert_eq!(
        (local.year(), local.month(), local.day()),
        (record.year, record.month, record.day)
    );
    assert!(record.date_added.ends_with('Z'));
}

#[test]
fn costs_for_month_matches_year_and_month_in_insert_order() {
    let test_db = setup_db();
    let db = &test_db.db;
    db.insert_cost(&make_cost(1.0, Currency::Usd, "A"), local_time(2025, 3, 20))
        .expect("insert");
    db.insert_cost(&make_cost(2.0, Currency::Usd, "B"), local_time(2025, 4, 1))
        .expect("insert");
    db.insert_cost(&make_cost(3.0, Currency::Usd, "C"), local_time(2025, 3, 2))
        .expect("insert");
    db.insert_cost(&make_cost(4.0, Currency::Usd, "D"), local_time(2024, 3, 2))
        .expect("insert");

    let march = db.costs_for_month(2025, 3).expect("query");
    let categories: Vec<&str> = march.iter().map(|cost| cost.category.as_str()).collect();
    assert_eq!(categories, vec!["A", "C"]);
    assert!(march[0].id < march[1].id);
    assert!(db.costs_for_month(2025, 5).expect("query").is_empty());
}

#[test]
fn costs_for_year_spans_all_months() {
    let test_db = setup_db();
    let db = &test_db.db;
    for month in [1, 6, 12] {
        db.insert_cost(
            &make_cost(month as f64, Currency::Euro, "Gym"),
            local_time(2025, month, 1),
        )
        .expect("insert");
    }
    db.insert_cost(&make_cost(9.0, Currency::Euro, "Gym"), local_time(2026, 1, 1))
        .expect("insert");

    let year = db.costs_for_year(2025).expect("query");
    let months: Vec<u32> = year.iter().map(|cost| cost.month).collect();
    assert_eq!(months, vec![1, 6, 12]);
}

#[test]
fn unknown_stored_currency_is_reported() {
    let test_db = setup_db();
    {
        let conn = Connection::open(&test_db.path).expect("open conn");
        conn.execute(
            r#"
            INSERT INTO costs (sum, currency, category, description, date_added, year, month, day)
            VALUES (1.0, 'YEN', 'Food', NULL, '2025-03-01T00:00:00.000Z', 2025, 3, 1)
            "#,
            [],
        )
        .expect("insert raw");
    }
    let err = test_db.db.costs_for_month(2025, 3).expect_err("bad currency");
    assert!(err.to_string().contains("YEN"));
}
