// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{CategoryName, DebtType, GoalType};
use crate::strategy::Strategy;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

pub fn parse_category(s: &str) -> Result<CategoryName> {
    match s.trim().to_uppercase().as_str() {
        "NEEDS" => Ok(CategoryName::Needs),
        "WANTS" => Ok(CategoryName::Wants),
        "DEBT" => Ok(CategoryName::Debt),
        "GOALS" => Ok(CategoryName::Goals),
        other => Err(anyhow::anyhow!(
            "Unknown category '{}', expected NEEDS, WANTS, DEBT or GOALS",
            other
        )),
    }
}

pub fn parse_strategy(s: &str) -> Result<Strategy> {
    match s.trim().to_lowercase().as_str() {
        "snowball" => Ok(Strategy::Snowball),
        "avalanche" => Ok(Strategy::Avalanche),
        other => Err(anyhow::anyhow!(
            "Unknown strategy '{}', expected snowball or avalanche",
            other
        )),
    }
}

pub fn parse_debt_type(s: &str) -> Result<DebtType> {
    match s.trim().to_lowercase().as_str() {
        "credit_card" => Ok(DebtType::CreditCard),
        "loan" => Ok(DebtType::Loan),
        "mortgage" => Ok(DebtType::Mortgage),
        "other" => Ok(DebtType::Other),
        unknown => Err(anyhow::anyhow!(
            "Unknown debt type '{}', expected credit_card, loan, mortgage or other",
            unknown
        )),
    }
}

pub fn parse_goal_type(s: &str) -> Result<GoalType> {
    match s.trim().to_lowercase().as_str() {
        "emergency_fund" => Ok(GoalType::EmergencyFund),
        "retirement" => Ok(GoalType::Retirement),
        "investment" => Ok(GoalType::Investment),
        "vacation" => Ok(GoalType::Vacation),
        "other" => Ok(GoalType::Other),
        unknown => Err(anyhow::anyhow!(
            "Unknown goal type '{}', expected emergency_fund, retirement, investment, vacation or other",
            unknown
        )),
    }
}

pub fn fmt_money(d: &Decimal) -> String {
    format!("{:.2}", d.round_dp(2))
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
