// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use rusqlite::Connection;

use crate::access::{AccessGate, GateState};
use crate::config::{AppPaths, Settings};
use crate::currency::CurrencyTable;
use crate::db;
use crate::ledger::Ledger;

pub mod backup;
pub mod goals;
pub mod pin;
pub mod reports;
pub mod settings;
pub mod transactions;

/// Everything a command needs, opened once per process.
pub struct Session {
    pub paths: AppPaths,
    pub conn: Connection,
    pub currencies: CurrencyTable,
    pub settings: Settings,
}

impl Session {
    pub fn open(paths: AppPaths, currencies: CurrencyTable) -> Result<Self> {
        paths.ensure()?;
        let db_file = paths.db_file();
        let conn = db::open_or_init(&db_file)
            .with_context(|| format!("Open DB at {}", db_file.display()))?;
        Self::from_connection(paths, conn, currencies)
    }

    pub fn from_connection(
        paths: AppPaths,
        conn: Connection,
        currencies: CurrencyTable,
    ) -> Result<Self> {
        let settings = Settings::load(&conn)?;
        if !currencies.contains(&settings.currency) {
            bail!(
                "Stored display currency '{}' is not in the rate table",
                settings.currency
            );
        }
        Ok(Self {
            paths,
            conn,
            currencies,
            settings,
        })
    }

    pub fn ledger(&self) -> Ledger<'_> {
        Ledger::new(&self.conn, &self.currencies, &self.settings.currency)
    }

    pub fn gate(&self) -> AccessGate<'_> {
        AccessGate::new(&self.conn, self.settings.pin_hash.clone())
    }

    pub fn money(&self, canonical: rust_decimal::Decimal) -> Result<String> {
        crate::utils::fmt_money(&self.currencies, canonical, &self.settings.currency)
    }

    /// Fails unless `pin` opens the gate.
    pub fn unlock(&self, pin: Option<&String>) -> Result<()> {
        let mut gate = self.gate();
        if gate.state() == GateState::NoPinSet {
            bail!("No PIN set. Create one with `spendwise pin set <PIN>`.");
        }
        let Some(pin) = pin else {
            bail!("This ledger is locked; pass --pin <PIN>");
        };
        gate.check_pin(pin)?;
        Ok(())
    }
}
