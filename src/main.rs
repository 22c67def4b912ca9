// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use paydown::{cli, commands, store};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut snap = store::load_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            store::save(&mut snap)?;
            println!("Snapshot initialized at {}", store::snapshot_path()?.display());
        }
        Some(("income", sub)) => {
            commands::income::handle(&mut snap, sub)?;
            store::save(&mut snap)?;
        }
        Some(("category", sub)) => {
            commands::categories::handle(&mut snap, sub)?;
            store::save(&mut snap)?;
        }
        Some(("debt", sub)) => {
            commands::debts::handle(&mut snap, sub)?;
            store::save(&mut snap)?;
        }
        Some(("goal", sub)) => {
            commands::goals::handle(&mut snap, sub)?;
            store::save(&mut snap)?;
        }
        Some(("payoff", sub)) => commands::payoff::handle(&snap, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&snap, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&snap)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
