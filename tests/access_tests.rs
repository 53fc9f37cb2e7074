// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use spendwise::access::{AccessGate, GateState, hash_pin};
use spendwise::config::Settings;
use spendwise::error::LedgerError;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    spendwise::db::init_schema(&conn).unwrap();
    conn
}

#[test]
fn pin_flow() {
    let conn = setup();
    let mut gate = AccessGate::new(&conn, None);
    assert_eq!(gate.state(), GateState::NoPinSet);

    gate.set_pin("1234").unwrap();
    assert_eq!(gate.state(), GateState::Locked);

    let err = gate.check_pin("0000").unwrap_err();
    assert!(matches!(err, LedgerError::Auth(_)));
    assert_eq!(gate.state(), GateState::Locked);

    gate.check_pin("1234").unwrap();
    assert!(gate.is_unlocked());

    gate.lock();
    assert_eq!(gate.state(), GateState::Locked);
}

#[test]
fn short_pin_rejected() {
    let conn = setup();
    let mut gate = AccessGate::new(&conn, None);
    let err = gate.set_pin("12").unwrap_err();
    assert!(matches!(err, LedgerError::Validation(_)));
    assert_eq!(gate.state(), GateState::NoPinSet);
    assert_eq!(spendwise::db::get_setting(&conn, "pin").unwrap(), None);
}

#[test]
fn only_hash_is_stored() {
    let conn = setup();
    AccessGate::new(&conn, None).set_pin("4321").unwrap();
    let stored = spendwise::db::get_setting(&conn, "pin").unwrap().unwrap();
    assert_ne!(stored, "4321");
    assert_eq!(stored, hash_pin("4321"));
    assert_eq!(
        hash_pin("1234"),
        "03ac674216f3e15c761ee1a5e255f067953623c8b388b4459e13f978d7c846f4"
    );

    // a fresh gate built from reloaded settings starts locked
    let settings = Settings::load(&conn).unwrap();
    let mut gate = AccessGate::new(&conn, settings.pin_hash);
    assert_eq!(gate.state(), GateState::Locked);
    gate.check_pin("4321").unwrap();
}

#[test]
fn check_without_pin_is_auth_error() {
    let conn = setup();
    let mut gate = AccessGate::new(&conn, None);
    assert!(matches!(
        gate.check_pin("1234").unwrap_err(),
        LedgerError::Auth(_)
    ));
}

#[test]
fn repeated_failures_are_not_limited() {
    let conn = setup();
    let mut gate = AccessGate::new(&conn, None);
    gate.set_pin("secret").unwrap();
    for _ in 0..50 {
        assert!(gate.check_pin("wrong").is_err());
    }
    gate.check_pin("secret").unwrap();
}

#[test]
fn pin_cannot_be_set_twice() {
    let conn = setup();
    let mut gate = AccessGate::new(&conn, None);
    gate.set_pin("1111").unwrap();
    assert!(matches!(
        gate.set_pin("2222").unwrap_err(),
        LedgerError::Validation(_)
    ));
    gate.check_pin("1111").unwrap();
}
