// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use paydown::models::{DebtItem, DebtType};
use paydown::strategy::{Strategy, compute_strategy};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn debt(id: i64, name: &str, balance: &str, min_payment: &str, rate: &str) -> DebtItem {
    DebtItem {
        id,
        name: name.to_string(),
        balance: dec(balance),
        min_payment: dec(min_payment),
        planned_payment: None,
        total_paid: Decimal::ZERO,
        interest_rate: dec(rate),
        r#type: DebtType::CreditCard,
    }
}

#[test]
fn priorities_are_unique_and_contiguous() {
    let debts = vec![
        debt(1, "a", "900", "10", "5"),
        debt(2, "b", "100", "10", "15"),
        debt(3, "c", "400", "10", "25"),
        debt(4, "d", "700", "10", "10"),
    ];
    for strategy in [Strategy::Snowball, Strategy::Avalanche] {
        let plan = compute_strategy(&debts, strategy, dec("100"));
        let priorities: Vec<usize> = plan.iter().map(|p| p.priority).collect();
        assert_eq!(priorities, vec![1, 2, 3, 4]);
    }
}

#[test]
fn snowball_allocates_extra_to_smallest_balance() {
    let debts = vec![
        debt(1, "card", "500", "50", "10"),
        debt(2, "loan", "1500", "80", "22"),
    ];
    // extra = 200 - 130 = 70, all of it on the smallest balance
    let plan = compute_strategy(&debts, Strategy::Snowball, dec("200"));
    assert_eq!(plan[0].debt.name, "card");
    assert_eq!(plan[0].priority, 1);
    assert_eq!(plan[0].recommended_payment, dec("120"));
    assert_eq!(plan[1].debt.name, "loan");
    assert_eq!(plan[1].recommended_payment, dec("80"));
}

#[test]
fn avalanche_prioritizes_highest_rate_regardless_of_balance() {
    let debts = vec![
        debt(1, "card", "500", "50", "10"),
        debt(2, "loan", "1500", "80", "22"),
    ];
    let plan = compute_strategy(&debts, Strategy::Avalanche, dec("200"));
    assert_eq!(plan[0].debt.name, "loan");
    assert_eq!(plan[0].priority, 1);
    assert_eq!(plan[0].recommended_payment, dec("150"));
    assert_eq!(plan[1].debt.name, "card");
    assert_eq!(plan[1].recommended_payment, dec("50"));
}

#[test]
fn no_extra_when_budget_at_or_below_minimums() {
    let debts = vec![
        debt(1, "card", "500", "50", "10"),
        debt(2, "loan", "1500", "80", "22"),
    ];
    for budget in ["130", "100", "0", "-25"] {
        let plan = compute_strategy(&debts, Strategy::Snowball, dec(budget));
        for p in &plan {
            assert_eq!(p.recommended_payment, p.debt.min_payment);
        }
    }
}

#[test]
fn extra_is_not_rolled_past_the_top_debt() {
    // extra (940) exceeds the top balance (100); it still lands on that
    // debt alone rather than spilling over to the next one
    let debts = vec![
        debt(1, "small", "100", "30", "5"),
        debt(2, "big", "5000", "30", "15"),
    ];
    let plan = compute_strategy(&debts, Strategy::Snowball, dec("1000"));
    assert_eq!(plan[0].recommended_payment, dec("970"));
    assert_eq!(plan[1].recommended_payment, dec("30"));
}

#[test]
fn ties_keep_insertion_order() {
    let debts = vec![
        debt(1, "first", "300", "20", "12"),
        debt(2, "second", "300", "25", "12"),
    ];
    let snowball = compute_strategy(&debts, Strategy::Snowball, dec("0"));
    assert_eq!(snowball[0].debt.name, "first");
    assert_eq!(snowball[1].debt.name, "second");
    let avalanche = compute_strategy(&debts, Strategy::Avalanche, dec("0"));
    assert_eq!(avalanche[0].debt.name, "first");
    assert_eq!(avalanche[1].debt.name, "second");
}

#[test]
fn empty_debts_yield_empty_plan() {
    let plan = compute_strategy(&[], Strategy::Avalanche, dec("500"));
    assert!(plan.is_empty());
}

#[test]
fn pure_and_idempotent() {
    let debts = vec![
        debt(1, "card", "500", "50", "10"),
        debt(2, "loan", "1500", "80", "22"),
    ];
    let before = debts.clone();
    let first = compute_strategy(&debts, Strategy::Snowball, dec("200"));
    let second = compute_strategy(&debts, Strategy::Snowball, dec("200"));
    assert_eq!(first, second);
    assert_eq!(debts, before);
}
