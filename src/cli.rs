// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn with_json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON Lines"),
    )
}

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .value_name("ID")
        .value_parser(value_parser!(i64))
        .required(true)
}

fn amount_arg() -> Arg {
    Arg::new("amount")
        .long("amount")
        .value_name("AMOUNT")
        .required(true)
}

pub fn build_cli() -> Command {
    Command::new("paydown")
        .about("Paydown: personal budgeting, debt payoff strategy, and savings goal CLI")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(Command::new("init").about("Create the snapshot file and print its location"))
        .subcommand(
            Command::new("income")
                .about("Set or show monthly income")
                .subcommand(Command::new("set").about("Set monthly income").arg(amount_arg()))
                .subcommand(Command::new("show").about("Show monthly income")),
        )
        .subcommand(
            Command::new("category")
                .about("Manage the NEEDS/WANTS spending buckets")
                .subcommand(
                    Command::new("set-budget")
                        .about("Set the planned allocation for a category")
                        .arg(Arg::new("name").long("name").value_name("NAME").required(true))
                        .arg(amount_arg()),
                )
                .subcommand(
                    Command::new("set-spent")
                        .about("Set the actual spend for a category")
                        .arg(Arg::new("name").long("name").value_name("NAME").required(true))
                        .arg(amount_arg()),
                )
                .subcommand(with_json_flags(
                    Command::new("list").about("List categories with derived DEBT/GOALS figures"),
                )),
        )
        .subcommand(
            Command::new("debt")
                .about("Manage debts")
                .subcommand(
                    Command::new("add")
                        .about("Add a debt")
                        .arg(Arg::new("name").long("name").value_name("NAME").required(true))
                        .arg(
                            Arg::new("balance")
                                .long("balance")
                                .value_name("AMOUNT")
                                .required(true),
                        )
                        .arg(
                            Arg::new("min-payment")
                                .long("min-payment")
                                .value_name("AMOUNT")
                                .required(true),
                        )
                        .arg(
                            Arg::new("interest-rate")
                                .long("interest-rate")
                                .value_name("PERCENT")
                                .default_value("0"),
                        )
                        .arg(
                            Arg::new("planned-payment")
                                .long("planned-payment")
                                .value_name("AMOUNT"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_name("TYPE")
                                .default_value("other")
                                .help("credit_card, loan, mortgage or other"),
                        ),
                )
                .subcommand(with_json_flags(Command::new("list").about("List debts")))
                .subcommand(
                    Command::new("update")
                        .about("Update fields of a debt")
                        .arg(id_arg())
                        .arg(Arg::new("name").long("name").value_name("NAME"))
                        .arg(Arg::new("balance").long("balance").value_name("AMOUNT"))
                        .arg(
                            Arg::new("min-payment")
                                .long("min-payment")
                                .value_name("AMOUNT"),
                        )
                        .arg(
                            Arg::new("interest-rate")
                                .long("interest-rate")
                                .value_name("PERCENT"),
                        )
                        .arg(
                            Arg::new("planned-payment")
                                .long("planned-payment")
                                .value_name("AMOUNT"),
                        )
                        .arg(Arg::new("type").long("type").value_name("TYPE")),
                )
                .subcommand(Command::new("rm").about("Remove a debt").arg(id_arg()))
                .subcommand(
                    Command::new("pay")
                        .about("Record a payment against a debt")
                        .arg(id_arg())
                        .arg(amount_arg()),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Manage savings goals")
                .subcommand(
                    Command::new("add")
                        .about("Add a savings goal")
                        .arg(Arg::new("name").long("name").value_name("NAME").required(true))
                        .arg(
                            Arg::new("target")
                                .long("target")
                                .value_name("AMOUNT")
                                .required(true),
                        )
                        .arg(
                            Arg::new("current")
                                .long("current")
                                .value_name("AMOUNT")
                                .default_value("0"),
                        )
                        .arg(
                            Arg::new("monthly-contribution")
                                .long("monthly-contribution")
                                .value_name("AMOUNT")
                                .default_value("0"),
                        )
                        .arg(
                            Arg::new("planned-contribution")
                                .long("planned-contribution")
                                .value_name("AMOUNT"),
                        )
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_name("TYPE")
                                .default_value("other")
                                .help("emergency_fund, retirement, investment, vacation or other"),
                        )
                        .arg(
                            Arg::new("deadline")
                                .long("deadline")
                                .value_name("YYYY-MM-DD"),
                        ),
                )
                .subcommand(with_json_flags(Command::new("list").about("List savings goals")))
                .subcommand(
                    Command::new("update")
                        .about("Update fields of a goal")
                        .arg(id_arg())
                        .arg(Arg::new("name").long("name").value_name("NAME"))
                        .arg(Arg::new("target").long("target").value_name("AMOUNT"))
                        .arg(Arg::new("current").long("current").value_name("AMOUNT"))
                        .arg(
                            Arg::new("monthly-contribution")
                                .long("monthly-contribution")
                                .value_name("AMOUNT"),
                        )
                        .arg(
                            Arg::new("planned-contribution")
                                .long("planned-contribution")
                                .value_name("AMOUNT"),
                        )
                        .arg(Arg::new("type").long("type").value_name("TYPE"))
                        .arg(
                            Arg::new("deadline")
                                .long("deadline")
                                .value_name("YYYY-MM-DD"),
                        ),
                )
                .subcommand(Command::new("rm").about("Remove a goal").arg(id_arg()))
                .subcommand(
                    Command::new("contribute")
                        .about("Record a contribution toward a goal")
                        .arg(id_arg())
                        .arg(amount_arg()),
                ),
        )
        .subcommand(with_json_flags(
            Command::new("payoff")
                .about("Rank debts under a payoff strategy and split the monthly debt budget")
                .arg(
                    Arg::new("strategy")
                        .long("strategy")
                        .value_name("STRATEGY")
                        .required(true)
                        .help("snowball (smallest balance first) or avalanche (highest rate first)"),
                )
                .arg(
                    Arg::new("budget")
                        .long("budget")
                        .value_name("AMOUNT")
                        .help("Total monthly debt budget; defaults to the sum of planned payments"),
                ),
        ))
        .subcommand(with_json_flags(
            Command::new("dashboard").about("Show derived monthly figures and validation flags"),
        ))
        .subcommand(Command::new("doctor").about("Check the snapshot for inconsistencies"))
}
