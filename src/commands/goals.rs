// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::GoalItem;
use crate::store::Snapshot;
use crate::utils::{
    fmt_money, maybe_print_json, parse_date, parse_decimal, parse_goal_type, pretty_table,
};
use anyhow::{Context, Result, bail};

pub fn handle(snap: &mut Snapshot, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(snap, sub)?,
        Some(("list", sub)) => list(snap, sub)?,
        Some(("update", sub)) => update(snap, sub)?,
        Some(("rm", sub)) => rm(snap, sub)?,
        Some(("contribute", sub)) => contribute(snap, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(snap: &mut Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let target = parse_decimal(sub.get_one::<String>("target").unwrap().trim())?;
    let current = parse_decimal(sub.get_one::<String>("current").unwrap().trim())?;
    let monthly_contribution =
        parse_decimal(sub.get_one::<String>("monthly-contribution").unwrap().trim())?;
    let planned_contribution = sub
        .get_one::<String>("planned-contribution")
        .map(|s| parse_decimal(s.trim()))
        .transpose()?;
    let r#type = parse_goal_type(sub.get_one::<String>("type").unwrap())?;
    let deadline = sub
        .get_one::<String>("deadline")
        .map(|s| parse_date(s.trim()))
        .transpose()?;

    let id = snap.add_goal(GoalItem {
        id: 0, // assigned by the store
        name: name.clone(),
        target,
        current,
        monthly_contribution,
        planned_contribution,
        r#type,
        deadline,
    });
    println!("Added goal '{}' (id {})", name, id);
    Ok(())
}

fn list(snap: &Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    if !maybe_print_json(json_flag, jsonl_flag, &snap.data.goals)? {
        let rows = snap
            .data
            .goals
            .iter()
            .map(|g| {
                vec![
                    g.id.to_string(),
                    g.name.clone(),
                    g.r#type.to_string(),
                    fmt_money(&g.current),
                    fmt_money(&g.target),
                    fmt_money(&g.monthly_contribution),
                    fmt_money(&g.effective_contribution()),
                    g.deadline.map(|d| d.to_string()).unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Goal", "Type", "Current", "Target", "Monthly", "Planned", "Deadline"],
                rows
            )
        );
    }
    Ok(())
}

fn update(snap: &mut Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let name = sub.get_one::<String>("name").map(|s| s.trim().to_string());
    let target = sub
        .get_one::<String>("target")
        .map(|s| parse_decimal(s.trim()))
        .transpose()?;
    let current = sub
        .get_one::<String>("current")
        .map(|s| parse_decimal(s.trim()))
        .transpose()?;
    let monthly_contribution = sub
        .get_one::<String>("monthly-contribution")
        .map(|s| parse_decimal(s.trim()))
        .transpose()?;
    let planned_contribution = sub
        .get_one::<String>("planned-contribution")
        .map(|s| parse_decimal(s.trim()))
        .transpose()?;
    let r#type = sub
        .get_one::<String>("type")
        .map(|s| parse_goal_type(s))
        .transpose()?;
    let deadline = sub
        .get_one::<String>("deadline")
        .map(|s| parse_date(s.trim()))
        .transpose()?;

    let goal = snap
        .goal_mut(id)
        .with_context(|| format!("Goal id {} not found", id))?;
    if let Some(v) = name {
        goal.name = v;
    }
    if let Some(v) = target {
        goal.target = v;
    }
    if let Some(v) = current {
        goal.current = v;
    }
    if let Some(v) = monthly_contribution {
        goal.monthly_contribution = v;
    }
    if let Some(v) = planned_contribution {
        goal.planned_contribution = Some(v);
    }
    if let Some(v) = r#type {
        goal.r#type = v;
    }
    if let Some(v) = deadline {
        goal.deadline = Some(v);
    }
    println!("Updated goal '{}' (id {})", goal.name, id);
    Ok(())
}

fn rm(snap: &mut Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if !snap.remove_goal(id) {
        bail!("Goal id {} not found", id);
    }
    println!("Removed goal id {}", id);
    Ok(())
}

// A recorded contribution counts toward both overall progress and the
// current period's actual contribution.
fn contribute(snap: &mut Snapshot, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?;
    let goal = snap
        .goal_mut(id)
        .with_context(|| format!("Goal id {} not found", id))?;
    goal.current += amount;
    goal.monthly_contribution += amount;
    println!(
        "Recorded contribution of {} toward '{}' ({} of {})",
        fmt_money(&amount),
        goal.name,
        fmt_money(&goal.current),
        fmt_money(&goal.target)
    );
    Ok(())
}
