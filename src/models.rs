// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four fixed spending buckets. DEBT and GOALS carry derived figures
/// (see `metrics`); only NEEDS and WANTS are edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryName {
    Needs,
    Wants,
    Debt,
    Goals,
}

impl CategoryName {
    pub const ALL: [CategoryName; 4] = [
        CategoryName::Needs,
        CategoryName::Wants,
        CategoryName::Debt,
        CategoryName::Goals,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryName::Needs => "NEEDS",
            CategoryName::Wants => "WANTS",
            CategoryName::Debt => "DEBT",
            CategoryName::Goals => "GOALS",
        }
    }

    pub fn default_color(self) -> &'static str {
        match self {
            CategoryName::Needs => "#4ade80",
            CategoryName::Wants => "#60a5fa",
            CategoryName::Debt => "#f87171",
            CategoryName::Goals => "#c084fc",
        }
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: CategoryName,
    pub amount: Decimal,
    pub budget: Decimal,
    pub color: String,
}

impl Category {
    pub fn empty(name: CategoryName) -> Self {
        Category {
            name,
            amount: Decimal::ZERO,
            budget: Decimal::ZERO,
            color: name.default_color().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtType {
    CreditCard,
    Loan,
    Mortgage,
    Other,
}

impl DebtType {
    pub fn as_str(self) -> &'static str {
        match self {
            DebtType::CreditCard => "credit_card",
            DebtType::Loan => "loan",
            DebtType::Mortgage => "mortgage",
            DebtType::Other => "other",
        }
    }
}

impl fmt::Display for DebtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtItem {
    pub id: i64,
    pub name: String,
    pub balance: Decimal,
    pub min_payment: Decimal,
    #[serde(default)]
    pub planned_payment: Option<Decimal>,
    #[serde(default)]
    pub total_paid: Decimal,
    pub interest_rate: Decimal, // annual percentage
    pub r#type: DebtType,
}

impl DebtItem {
    /// The payment the user intends to make this period, falling back to the
    /// contractual minimum when none was chosen.
    pub fn effective_payment(&self) -> Decimal {
        self.planned_payment.unwrap_or(self.min_payment)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    EmergencyFund,
    Retirement,
    Investment,
    Vacation,
    Other,
}

impl GoalType {
    pub fn as_str(self) -> &'static str {
        match self {
            GoalType::EmergencyFund => "emergency_fund",
            GoalType::Retirement => "retirement",
            GoalType::Investment => "investment",
            GoalType::Vacation => "vacation",
            GoalType::Other => "other",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalItem {
    pub id: i64,
    pub name: String,
    pub target: Decimal,
    pub current: Decimal,
    pub monthly_contribution: Decimal,
    #[serde(default)]
    pub planned_contribution: Option<Decimal>,
    pub r#type: GoalType,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
}

impl GoalItem {
    /// The contribution planned for this period, falling back to the actual
    /// monthly contribution when none was chosen.
    pub fn effective_contribution(&self) -> Decimal {
        self.planned_contribution.unwrap_or(self.monthly_contribution)
    }
}

/// Whole-state aggregate the dashboard derives from. Insertion order of
/// debts/goals is preserved and is not priority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseData {
    pub income: Decimal,
    pub categories: Vec<Category>,
    pub debts: Vec<DebtItem>,
    pub goals: Vec<GoalItem>,
}

impl Default for BaseData {
    fn default() -> Self {
        BaseData {
            income: Decimal::ZERO,
            categories: CategoryName::ALL
                .iter()
                .map(|n| Category::empty(*n))
                .collect(),
            debts: Vec::new(),
            goals: Vec::new(),
        }
    }
}
