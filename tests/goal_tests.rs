// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use paydown::models::GoalType;
use paydown::store::Snapshot;
use paydown::{cli, commands::goals};
use rust_decimal::Decimal;

fn run(snap: &mut Snapshot, argv: &[&str]) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from(argv.to_vec());
    if let Some(("goal", m)) = matches.subcommand() {
        goals::handle(snap, m)
    } else {
        panic!("goal command not parsed");
    }
}

#[test]
fn add_parses_type_and_deadline() {
    let mut snap = Snapshot::new();
    run(
        &mut snap,
        &[
            "paydown", "goal", "add", "--name", "Rainy day", "--target", "10000",
            "--current", "2500", "--monthly-contribution", "400",
            "--type", "emergency_fund", "--deadline", "2026-12-31",
        ],
    )
    .unwrap();

    let g = &snap.data.goals[0];
    assert_eq!(g.id, 1);
    assert_eq!(g.r#type, GoalType::EmergencyFund);
    assert_eq!(g.deadline, NaiveDate::from_ymd_opt(2026, 12, 31));
    assert_eq!(g.monthly_contribution, "400".parse::<Decimal>().unwrap());
    // no planned contribution: the monthly figure is the effective one
    assert_eq!(g.effective_contribution(), "400".parse::<Decimal>().unwrap());
}

#[test]
fn contribute_moves_progress_and_period_actuals() {
    let mut snap = Snapshot::new();
    run(
        &mut snap,
        &["paydown", "goal", "add", "--name", "Trip", "--target", "3000", "--type", "vacation"],
    )
    .unwrap();
    run(
        &mut snap,
        &["paydown", "goal", "contribute", "--id", "1", "--amount", "150.25"],
    )
    .unwrap();

    let g = &snap.data.goals[0];
    assert_eq!(g.current, "150.25".parse::<Decimal>().unwrap());
    assert_eq!(g.monthly_contribution, "150.25".parse::<Decimal>().unwrap());
}

#[test]
fn update_sets_planned_contribution() {
    let mut snap = Snapshot::new();
    run(
        &mut snap,
        &["paydown", "goal", "add", "--name", "Trip", "--target", "3000",
          "--monthly-contribution", "100"],
    )
    .unwrap();
    run(
        &mut snap,
        &["paydown", "goal", "update", "--id", "1", "--planned-contribution", "250"],
    )
    .unwrap();
    let g = &snap.data.goals[0];
    assert_eq!(g.effective_contribution(), "250".parse::<Decimal>().unwrap());
    assert_eq!(g.monthly_contribution, "100".parse::<Decimal>().unwrap());
}

#[test]
fn malformed_deadline_is_rejected() {
    let mut snap = Snapshot::new();
    let err = run(
        &mut snap,
        &["paydown", "goal", "add", "--name", "Trip", "--target", "3000",
          "--deadline", "soon"],
    )
    .unwrap_err();
    assert!(format!("{}", err).contains("Invalid date"));
    assert!(snap.data.goals.is_empty());
}

#[test]
fn rm_rejects_unknown_ids() {
    let mut snap = Snapshot::new();
    let err = run(&mut snap, &["paydown", "goal", "rm", "--id", "3"]).unwrap_err();
    assert!(format!("{}", err).contains("not found"));
}
