// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use spendwise::commands::{self, Session};
use spendwise::{cli, config::AppPaths, currency::CurrencyTable};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let paths = AppPaths::resolve(matches.get_one::<PathBuf>("data-dir").map(PathBuf::as_path))?;
    let mut session = Session::open(paths, CurrencyTable::default())?;
    let pin = matches.get_one::<String>("pin");

    match matches.subcommand() {
        Some(("init", _)) => {
            println!(
                "Database initialized at {}",
                session.paths.db_file().display()
            );
        }
        Some(("pin", sub)) => commands::pin::handle(&mut session, sub, pin)?,
        Some((name, sub)) => {
            session.unlock(pin)?;
            match name {
                "tx" => commands::transactions::handle(&session, sub)?,
                "summary" => commands::reports::summary(&session, sub)?,
                "report" => commands::reports::handle(&session, sub)?,
                "goal" => commands::goals::handle(&session, sub)?,
                "settings" => commands::settings::handle(&mut session, sub)?,
                "currency" => commands::settings::handle_currency(&session, sub)?,
                "backup" => commands::backup::handle(session, sub)?,
                "reset" => commands::backup::reset(&mut session, sub)?,
                _ => {}
            }
        }
        None => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
