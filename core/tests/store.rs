//! Query contract tests against an in-memory sales database.

use chrono::{Duration, Utc};
use salesreport_core::store::{RankedSales, SalesStore, CASH_BOOK_CODE, CREDIT_BOOK_CODE};

/// The database's CURRENT_DATE is UTC; fixtures must match it.
fn today() -> String {
    Utc::now().date_naive().to_string()
}

fn yesterday() -> String {
    (Utc::now().date_naive() - Duration::days(1)).to_string()
}

fn fresh_store() -> SalesStore {
    let store = SalesStore::in_memory().unwrap();
    store.migrate().unwrap();
    store
}

#[test]
fn sales_totals_are_none_on_an_empty_day() {
    let store = fresh_store();
    store.add_book(CASH_BOOK_CODE).unwrap();
    store.add_book(CREDIT_BOOK_CODE).unwrap();

    assert_eq!(store.cash_sales().unwrap(), None);
    assert_eq!(store.credit_sales().unwrap(), None);
}

#[test]
fn sales_totals_are_restricted_to_book_code_and_today() {
    let store = fresh_store();
    let cash = store.add_book(CASH_BOOK_CODE).unwrap();
    let credit = store.add_book(CREDIT_BOOK_CODE).unwrap();

    store.add_bill(cash, None, &today(), 150.0).unwrap();
    store.add_bill(cash, None, &today(), 50.0).unwrap();
    store.add_bill(credit, None, &today(), 900.0).unwrap();
    // Yesterday's cash bill must not count.
    store.add_bill(cash, None, &yesterday(), 9999.0).unwrap();

    assert_eq!(store.cash_sales().unwrap(), Some(200.0));
    assert_eq!(store.credit_sales().unwrap(), Some(900.0));
}

#[test]
fn top_customers_span_both_channels_and_cap_at_three() {
    let store = fresh_store();
    let cash = store.add_book(CASH_BOOK_CODE).unwrap();
    let credit = store.add_book(CREDIT_BOOK_CODE).unwrap();

    let names = ["Asha", "Bilal", "Chitra", "Devan"];
    let amounts = [100.0, 400.0, 300.0, 200.0];
    let mut ids = Vec::new();
    for (name, amount) in names.iter().zip(amounts) {
        let id = store.add_customer(name).unwrap();
        store.add_bill(cash, Some(id), &today(), amount).unwrap();
        ids.push(id);
    }
    // Split purchase across channels for one customer.
    store.add_bill(credit, Some(ids[0]), &today(), 250.0).unwrap();

    let top = store.top_customers().unwrap();
    assert_eq!(top.len(), 3, "ranking must cap at 3 rows");
    assert_eq!(
        top,
        vec![
            RankedSales {
                name: "Bilal".into(),
                amount: 400.0
            },
            RankedSales {
                name: "Asha".into(),
                amount: 350.0
            },
            RankedSales {
                name: "Chitra".into(),
                amount: 300.0
            },
        ]
    );
}

#[test]
fn ranking_amounts_are_non_increasing() {
    let store = fresh_store();
    let cash = store.add_book(CASH_BOOK_CODE).unwrap();
    store.add_book(CREDIT_BOOK_CODE).unwrap();

    for (name, amount) in [("P", 10.0), ("Q", 90.0), ("R", 40.0)] {
        let id = store.add_customer(name).unwrap();
        store.add_bill(cash, Some(id), &today(), amount).unwrap();
    }

    let top = store.top_customers().unwrap();
    for pair in top.windows(2) {
        assert!(
            pair[0].amount >= pair[1].amount,
            "expected non-increasing amounts, got {} then {}",
            pair[0].amount,
            pair[1].amount
        );
    }
}

/// Equal aggregates rank by ascending name, not by insertion order.
#[test]
fn ties_break_by_customer_name() {
    let store = fresh_store();
    let cash = store.add_book(CASH_BOOK_CODE).unwrap();
    store.add_book(CREDIT_BOOK_CODE).unwrap();

    for name in ["Zoya", "Amar", "Mira"] {
        let id = store.add_customer(name).unwrap();
        store.add_bill(cash, Some(id), &today(), 500.0).unwrap();
    }

    let names: Vec<String> = store
        .top_customers()
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["Amar", "Mira", "Zoya"]);
}

#[test]
fn top_products_aggregate_line_items_across_bills() {
    let store = fresh_store();
    let cash = store.add_book(CASH_BOOK_CODE).unwrap();
    let credit = store.add_book(CREDIT_BOOK_CODE).unwrap();

    let tea = store.add_product("Tea").unwrap();
    let rice = store.add_product("Rice").unwrap();

    let b1 = store.add_bill(cash, None, &today(), 300.0).unwrap();
    let b2 = store.add_bill(credit, None, &today(), 450.0).unwrap();
    store.add_bill_line(b1, tea, 120.0).unwrap();
    store.add_bill_line(b1, rice, 180.0).unwrap();
    store.add_bill_line(b2, tea, 450.0).unwrap();

    // Line items on an old bill must not count.
    let old = store.add_bill(cash, None, &yesterday(), 75.0).unwrap();
    store.add_bill_line(old, rice, 75.0).unwrap();

    let top = store.top_products().unwrap();
    assert_eq!(
        top,
        vec![
            RankedSales {
                name: "Tea".into(),
                amount: 570.0
            },
            RankedSales {
                name: "Rice".into(),
                amount: 180.0
            },
        ]
    );
}
