// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Snapshot;
use crate::utils::{fmt_money, parse_decimal};
use anyhow::Result;

pub fn handle(snap: &mut Snapshot, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let amount = parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?;
            snap.data.income = amount;
            println!("Monthly income set to {}", fmt_money(&amount));
        }
        Some(("show", _)) => {
            println!("Monthly income: {}", fmt_money(&snap.data.income));
        }
        _ => {}
    }
    Ok(())
}
