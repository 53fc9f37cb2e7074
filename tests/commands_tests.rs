// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde_json::json;
use spendwise::access::GateState;
use spendwise::commands::{Session, backup, goals, reports, settings};
use spendwise::config::{AppPaths, Settings};
use spendwise::currency::CurrencyTable;
use spendwise::goals::Goals;
use spendwise::models::TxKind;
use spendwise::{cli, db};

fn setup() -> Session {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    Session::from_connection(
        AppPaths::with_base_dir("unused".into()),
        conn,
        CurrencyTable::default(),
    )
    .unwrap()
}

fn seed(s: &Session, amount: i64, category: &str, kind: TxKind, day: u32) {
    let at = NaiveDate::from_ymd_opt(2025, 8, day)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    db::insert_transaction(&s.conn, Decimal::from(amount), category, kind, at).unwrap();
}

/// Matches of the first-level subcommand, as `main` hands them to a handler.
fn sub_matches(argv: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(argv.iter().copied());
    let Some((_, sub)) = matches.subcommand() else {
        panic!("no subcommand in {:?}", argv);
    };
    sub.clone()
}

#[test]
fn reset_requires_confirmation() {
    let mut s = setup();
    seed(&s, 100, "Food", TxKind::Expense, 1);

    let m = sub_matches(&["spendwise", "reset"]);
    assert!(backup::reset(&mut s, &m).is_err());
    assert_eq!(db::list_transactions(&s.conn).unwrap().len(), 1);
}

#[test]
fn reset_clears_data_pin_and_settings() {
    let mut s = setup();
    seed(&s, 100, "Food", TxKind::Expense, 1);
    Goals::new(&s.conn).create("Trip", Decimal::from(10)).unwrap();
    s.gate().set_pin("1234").unwrap();
    s.settings = Settings::load(&s.conn).unwrap();
    s.settings
        .set_currency(&s.conn, &s.currencies, "$")
        .unwrap();
    s.settings.set_theme(&s.conn, "darkly").unwrap();
    assert!(s.settings.pin_hash.is_some());

    let m = sub_matches(&["spendwise", "reset", "--yes"]);
    backup::reset(&mut s, &m).unwrap();

    assert_eq!(s.settings, Settings::default());
    assert_eq!(s.gate().state(), GateState::NoPinSet);
    assert!(db::list_transactions(&s.conn).unwrap().is_empty());
    assert!(Goals::new(&s.conn).list().unwrap().is_empty());
    assert_eq!(db::get_setting(&s.conn, "pin").unwrap(), None);
}

#[test]
fn theme_is_persisted() {
    let mut s = setup();
    let m = sub_matches(&["spendwise", "settings", "theme", "darkly"]);
    settings::handle(&mut s, &m).unwrap();

    assert_eq!(s.settings.theme, "darkly");
    assert_eq!(Settings::load(&s.conn).unwrap().theme, "darkly");
}

#[test]
fn empty_theme_is_rejected() {
    let mut s = setup();
    assert!(s.settings.set_theme(&s.conn, "   ").is_err());
    assert_eq!(s.settings.theme, "cosmo");
    assert_eq!(db::get_setting(&s.conn, "theme").unwrap(), None);
}

#[test]
fn goal_amounts_typed_in_display_currency_are_stored_canonical() {
    let mut s = setup();
    s.settings
        .set_currency(&s.conn, &s.currencies, "$")
        .unwrap();

    let m = sub_matches(&["spendwise", "goal", "add", "--name", "Trip", "--target", "2"]);
    goals::handle(&s, &m).unwrap();
    let stored = Goals::new(&s.conn).list().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].target, Decimal::from(166));

    let id = stored[0].id.to_string();
    let m = sub_matches(&[
        "spendwise",
        "goal",
        "contribute",
        "--id",
        &id,
        "--amount",
        "1.5",
    ]);
    goals::handle(&s, &m).unwrap();
    let stored = Goals::new(&s.conn).list().unwrap();
    assert_eq!(stored[0].progress, Decimal::new(1245, 1));
}

#[test]
fn category_report_rows_are_structured() {
    let s = setup();
    seed(&s, 60, "Food", TxKind::Expense, 2);
    seed(&s, 40, "Fuel", TxKind::Expense, 3);
    seed(&s, 500, "Salary", TxKind::Income, 1);

    let rows = reports::category_rows(&s).unwrap();
    assert_eq!(
        serde_json::to_value(&rows).unwrap(),
        json!([
            {"category": "Food", "amount": "60.00", "share": "60.0", "currency": "₹"},
            {"category": "Fuel", "amount": "40.00", "share": "40.0", "currency": "₹"}
        ])
    );
}

#[test]
fn monthly_report_rows_use_display_currency() {
    let mut s = setup();
    seed(&s, 830, "Salary", TxKind::Income, 1);
    seed(&s, 166, "Food", TxKind::Expense, 2);
    s.settings
        .set_currency(&s.conn, &s.currencies, "$")
        .unwrap();

    let rows = reports::monthly_rows(&s).unwrap();
    assert_eq!(
        serde_json::to_value(&rows).unwrap(),
        json!([
            {"month": "2025-08", "income": "10.00", "expense": "2.00", "net": "8.00", "currency": "$"}
        ])
    );
}
