// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use spendwise::backup::BackupManager;
use spendwise::config::AppPaths;
use spendwise::currency::CurrencyTable;
use spendwise::db;
use spendwise::error::LedgerError;
use spendwise::goals::Goals;
use spendwise::ledger::Ledger;
use spendwise::models::TxKind;
use tempfile::tempdir;

#[test]
fn snapshot_then_restore_rolls_back() {
    let dir = tempdir().unwrap();
    let paths = AppPaths::with_base_dir(dir.path().to_path_buf());
    paths.ensure().unwrap();
    let table = CurrencyTable::default();
    let manager = BackupManager::new(&paths);

    let conn = db::open_or_init(&paths.db_file()).unwrap();
    let ledger = Ledger::new(&conn, &table, "₹");
    ledger
        .record(Decimal::from(100), "Food", TxKind::Expense)
        .unwrap();
    let goal = Goals::new(&conn).create("Trip", Decimal::from(1000)).unwrap();
    Goals::new(&conn)
        .contribute(goal.id, Decimal::from(50))
        .unwrap();
    let tx_before = ledger.list_transactions().unwrap();
    let goals_before = Goals::new(&conn).list().unwrap();

    let snap = manager.snapshot().unwrap();
    assert!(snap.starts_with(paths.backup_dir()));
    let name = snap.file_name().unwrap().to_string_lossy().to_string();
    assert!(name.starts_with("backup_") && name.ends_with(".db"));

    // diverge after the snapshot
    ledger
        .record(Decimal::from(500), "Salary", TxKind::Income)
        .unwrap();
    Goals::new(&conn)
        .contribute(goal.id, Decimal::from(25))
        .unwrap();
    Goals::new(&conn).create("Car", Decimal::from(9000)).unwrap();
    drop(conn);

    manager.restore(&snap).unwrap();

    let conn = db::open_or_init(&paths.db_file()).unwrap();
    let ledger = Ledger::new(&conn, &table, "₹");
    assert_eq!(ledger.list_transactions().unwrap(), tx_before);
    assert_eq!(Goals::new(&conn).list().unwrap(), goals_before);
    let sum = ledger.summary().unwrap();
    assert_eq!(sum.balance, Decimal::from(-100));
}

#[test]
fn snapshots_get_unique_names() {
    let dir = tempdir().unwrap();
    let paths = AppPaths::with_base_dir(dir.path().to_path_buf());
    paths.ensure().unwrap();
    let _conn = db::open_or_init(&paths.db_file()).unwrap();
    let manager = BackupManager::new(&paths);

    let a = manager.snapshot().unwrap();
    let b = manager.snapshot().unwrap();
    assert_ne!(a, b);
    assert!(a.exists() && b.exists());

    let listed = manager.list().unwrap();
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|i| i.size_bytes > 0));
}

#[test]
fn restore_from_missing_file_is_storage_error() {
    let dir = tempdir().unwrap();
    let paths = AppPaths::with_base_dir(dir.path().to_path_buf());
    paths.ensure().unwrap();
    let manager = BackupManager::new(&paths);
    let err = manager
        .restore(&dir.path().join("nope.db"))
        .unwrap_err();
    assert!(matches!(err, LedgerError::Storage(_)));
}

#[test]
fn snapshot_without_store_is_storage_error() {
    let dir = tempdir().unwrap();
    let paths = AppPaths::with_base_dir(dir.path().join("empty"));
    let manager = BackupManager::new(&paths);
    assert!(matches!(
        manager.snapshot().unwrap_err(),
        LedgerError::Storage(_)
    ));
}

#[test]
fn list_without_backup_dir_is_empty() {
    let dir = tempdir().unwrap();
    let paths = AppPaths::with_base_dir(dir.path().join("fresh"));
    assert!(BackupManager::new(&paths).list().unwrap().is_empty());
}

#[test]
fn list_orders_by_stamp_then_counter() {
    let dir = tempdir().unwrap();
    let paths = AppPaths::with_base_dir(dir.path().to_path_buf());
    paths.ensure().unwrap();
    for name in [
        "backup_20250101_120000_2.db",
        "backup_20250101_120000.db",
        "backup_20250102_080000.db",
        "backup_20250101_120000_10.db",
        "notes.txt",
    ] {
        std::fs::write(paths.backup_dir().join(name), b"x").unwrap();
    }
    let names: Vec<String> = BackupManager::new(&paths)
        .list()
        .unwrap()
        .into_iter()
        .map(|b| b.filename)
        .collect();
    assert_eq!(
        names,
        vec![
            "backup_20250102_080000.db",
            "backup_20250101_120000_10.db",
            "backup_20250101_120000_2.db",
            "backup_20250101_120000.db",
        ]
    );
}
