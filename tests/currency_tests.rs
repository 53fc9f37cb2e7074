// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use spendwise::currency::CurrencyTable;
use spendwise::error::LedgerError;

#[test]
fn display_divides_and_rounds() {
    let table = CurrencyTable::default();
    // 1000 ₹ / 83 = 12.048...
    let v = table.to_display(Decimal::from(1000), "$").unwrap();
    assert_eq!(format!("{:.2}", v), "12.05");
    assert_eq!(
        table.to_display(Decimal::new(12345, 2), "₹").unwrap(),
        Decimal::new(12345, 2)
    );
    assert_eq!(table.format(Decimal::from(166), "$").unwrap(), "$ 2.00");
}

#[test]
fn canonical_is_never_rounded() {
    let table = CurrencyTable::default();
    let v = table.to_canonical(Decimal::new(1, 3), "$").unwrap();
    assert_eq!(v, Decimal::new(83, 3));
}

#[test]
fn round_trip_within_a_cent() {
    let table = CurrencyTable::default();
    let tol = Decimal::new(1, 2);
    let samples = [
        Decimal::new(1, 2),
        Decimal::new(999, 2),
        Decimal::new(12345678, 3),
        Decimal::from(83),
        Decimal::new(5, 1),
    ];
    for sym in ["₹", "$"] {
        for x in samples {
            let back = table
                .to_display(table.to_canonical(x, sym).unwrap(), sym)
                .unwrap();
            assert!((back - x).abs() <= tol, "{} {} -> {}", sym, x, back);
        }
    }
}

#[test]
fn unknown_symbol() {
    let table = CurrencyTable::default();
    assert!(matches!(
        table.to_display(Decimal::ONE, "€").unwrap_err(),
        LedgerError::UnknownCurrency(_)
    ));
    assert!(matches!(
        table.to_canonical(Decimal::ONE, "£").unwrap_err(),
        LedgerError::UnknownCurrency(_)
    ));
}

#[test]
fn injected_table() {
    let table = CurrencyTable::new([
        ("₹", Decimal::ONE),
        ("€", Decimal::from(90)),
        ("$", Decimal::from(83)),
    ])
    .unwrap();
    assert_eq!(
        table.to_canonical(Decimal::from(2), "€").unwrap(),
        Decimal::from(180)
    );
    let syms: Vec<&str> = table.symbols().map(|(s, _)| s).collect();
    assert_eq!(syms.len(), 3);

    assert!(CurrencyTable::new([("X", Decimal::ZERO)]).is_err());
    assert!(CurrencyTable::new([("", Decimal::ONE)]).is_err());
}
