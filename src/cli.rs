// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("spendwise")
        .about("PIN-gated expense ledger with savings goals")
        .version(clap::crate_version!())
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Directory holding the database and backups"),
        )
        .arg(
            Arg::new("pin")
                .long("pin")
                .global(true)
                .help("PIN used to unlock the ledger"),
        )
        .subcommand(Command::new("init").about("Create the database and backup directory"))
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record income or an expense (amount in display currency)")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_parser(["income", "expense"])
                                .default_value("expense"),
                        ),
                )
                .subcommand(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_parser(["income", "expense"]),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        )
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("summary")
                .about("Income, expense and balance")
                .args(json_args()),
        )
        .subcommand(
            Command::new("report")
                .about("Chart data")
                .subcommand(
                    Command::new("by-category")
                        .about("Expenses grouped by category")
                        .args(json_args()),
                )
                .subcommand(
                    Command::new("monthly")
                        .about("Monthly income vs expense")
                        .args(json_args()),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Savings goals")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("target").long("target").required(true)),
                )
                .subcommand(
                    Command::new("contribute")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(Command::new("list").args(json_args())),
        )
        .subcommand(
            Command::new("settings")
                .about("Display currency and theme")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("currency").arg(Arg::new("symbol").required(true)),
                )
                .subcommand(Command::new("theme").arg(Arg::new("name").required(true))),
        )
        .subcommand(
            Command::new("currency")
                .about("Fixed exchange-rate table")
                .subcommand(Command::new("list")),
        )
        .subcommand(
            Command::new("pin")
                .about("Access PIN")
                .subcommand(
                    Command::new("set")
                        .about("Set the PIN (only when none exists)")
                        .arg(Arg::new("new-pin").required(true)),
                )
                .subcommand(Command::new("check").about("Verify the --pin value")),
        )
        .subcommand(
            Command::new("backup")
                .about("Snapshot and restore the database file")
                .subcommand(Command::new("create"))
                .subcommand(Command::new("list").args(json_args()))
                .subcommand(
                    Command::new("restore")
                        .about("Overwrite the database with a backup file")
                        .arg(
                            Arg::new("path")
                                .required(true)
                                .value_parser(value_parser!(PathBuf)),
                        ),
                ),
        )
        .subcommand(
            Command::new("reset")
                .about("Erase all data, PIN included")
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .action(ArgAction::SetTrue)
                        .help("Confirm erasing everything"),
                ),
        )
}
