// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use paydown::store::Snapshot;
use paydown::{cli, commands};

fn snapshot_with_debts() -> Snapshot {
    let mut snap = Snapshot::new();
    for (name, balance, min) in [("Visa", "500", "50"), ("Car loan", "1500", "80")] {
        let matches = cli::build_cli().get_matches_from([
            "paydown", "debt", "add", "--name", name, "--balance", balance, "--min-payment", min,
        ]);
        if let Some(("debt", m)) = matches.subcommand() {
            commands::debts::handle(&mut snap, m).unwrap();
        }
    }
    snap
}

#[test]
fn payoff_runs_with_explicit_and_default_budget() {
    let snap = snapshot_with_debts();
    for argv in [
        vec!["paydown", "payoff", "--strategy", "snowball", "--budget", "200"],
        vec!["paydown", "payoff", "--strategy", "avalanche"],
        vec!["paydown", "payoff", "--strategy", "snowball", "--json"],
    ] {
        let matches = cli::build_cli().get_matches_from(argv);
        if let Some(("payoff", m)) = matches.subcommand() {
            commands::payoff::handle(&snap, m).unwrap();
        } else {
            panic!("payoff command not parsed");
        }
    }
}

#[test]
fn unknown_strategy_is_rejected() {
    let snap = snapshot_with_debts();
    let matches =
        cli::build_cli().get_matches_from(["paydown", "payoff", "--strategy", "blizzard"]);
    if let Some(("payoff", m)) = matches.subcommand() {
        let err = commands::payoff::handle(&snap, m).unwrap_err();
        assert!(format!("{}", err).contains("Unknown strategy"));
    } else {
        panic!("payoff command not parsed");
    }
}

#[test]
fn dashboard_renders_tables_and_json() {
    let snap = snapshot_with_debts();
    for argv in [
        vec!["paydown", "dashboard"],
        vec!["paydown", "dashboard", "--json"],
        vec!["paydown", "dashboard", "--jsonl"],
    ] {
        let matches = cli::build_cli().get_matches_from(argv);
        if let Some(("dashboard", m)) = matches.subcommand() {
            commands::dashboard::handle(&snap, m).unwrap();
        } else {
            panic!("dashboard command not parsed");
        }
    }
}
