// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! PIN gate in front of the ledger.
//!
//! The PIN is kept only as an unsalted SHA-256 hex digest under the `pin`
//! setting. Attempts are not rate limited.

use rusqlite::Connection;
use sha2::{Digest, Sha256};
use tracing::{info, warn};

use crate::config::KEY_PIN;
use crate::db;
use crate::error::{LedgerError, LedgerResult};

pub const MIN_PIN_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    NoPinSet,
    Locked,
    Unlocked,
}

pub fn hash_pin(pin: &str) -> String {
    hex::encode(Sha256::digest(pin.as_bytes()))
}

pub struct AccessGate<'a> {
    conn: &'a Connection,
    pin_hash: Option<String>,
    state: GateState,
}

impl<'a> AccessGate<'a> {
    /// `pin_hash` comes from the startup settings snapshot.
    pub fn new(conn: &'a Connection, pin_hash: Option<String>) -> Self {
        let state = if pin_hash.is_some() {
            GateState::Locked
        } else {
            GateState::NoPinSet
        };
        Self {
            conn,
            pin_hash,
            state,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    pub fn set_pin(&mut self, pin: &str) -> LedgerResult<()> {
        if self.state != GateState::NoPinSet {
            return Err(LedgerError::Validation("a PIN is already set".into()));
        }
        if pin.chars().count() < MIN_PIN_LEN {
            return Err(LedgerError::Validation(format!(
                "PIN must be at least {} characters",
                MIN_PIN_LEN
            )));
        }
        let digest = hash_pin(pin);
        db::set_setting(self.conn, KEY_PIN, &digest)?;
        self.pin_hash = Some(digest);
        self.state = GateState::Locked;
        info!("PIN set");
        Ok(())
    }

    pub fn check_pin(&mut self, pin: &str) -> LedgerResult<()> {
        let Some(expected) = self.pin_hash.as_deref() else {
            return Err(LedgerError::Auth("no PIN set, please set one first".into()));
        };
        if hash_pin(pin) == expected {
            self.state = GateState::Unlocked;
            Ok(())
        } else {
            warn!("incorrect PIN attempt");
            self.state = GateState::Locked;
            Err(LedgerError::Auth("incorrect PIN".into()))
        }
    }

    pub fn lock(&mut self) {
        if self.state == GateState::Unlocked {
            self.state = GateState::Locked;
        }
    }
}
