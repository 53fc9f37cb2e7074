// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::Session;
use anyhow::{Context, Result};

pub fn handle(s: &mut Session, m: &clap::ArgMatches, pin: Option<&String>) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let new_pin = sub.get_one::<String>("new-pin").context("PIN is required")?;
            let mut gate = s.gate();
            gate.set_pin(new_pin)?;
            drop(gate);
            s.settings.pin_hash = Some(crate::access::hash_pin(new_pin));
            println!("PIN set successfully. Pass it with --pin to unlock.");
        }
        Some(("check", _)) => {
            s.unlock(pin)?;
            println!("PIN accepted.");
        }
        _ => {}
    }
    Ok(())
}
