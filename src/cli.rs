// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flag() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print as pretty JSON")
}

fn jsonl_flag() -> Arg {
    Arg::new("jsonl")
        .long("jsonl")
        .action(ArgAction::SetTrue)
        .help("Print as JSON Lines")
}

fn data_arg() -> Arg {
    Arg::new("data")
        .long("data")
        .value_name("PATH")
        .help("Price-paid CSV to query (defaults to the platform data dir)")
}

/// Investment parameters shared by `metrics` and `analyze`. All are
/// optional with the documented defaults; stamp duty is fixed at 5% and
/// deliberately has no flag.
fn investment_args() -> Vec<Arg> {
    vec![
        Arg::new("deposit-percent")
            .long("deposit-percent")
            .value_name("PCT")
            .default_value("25")
            .help("Deposit as a percentage of price [0-100]"),
        Arg::new("mortgage-interest")
            .long("mortgage-interest")
            .value_name("PCT")
            .default_value("5.5")
            .help("Mortgage interest rate [0-10]"),
        Arg::new("legal-fees")
            .long("legal-fees")
            .value_name("GBP")
            .default_value("2000")
            .help("Legal fees [0-5000]"),
        Arg::new("refurb")
            .long("refurb")
            .value_name("GBP")
            .default_value("5000")
            .help("Refurbishment cost [0-50000]"),
        Arg::new("rent")
            .long("rent")
            .value_name("GBP")
            .default_value("600")
            .help("Expected monthly rent [0-5000]"),
        Arg::new("maintenance")
            .long("maintenance")
            .value_name("GBP")
            .default_value("800")
            .help("Yearly maintenance [0-5000]"),
        Arg::new("insurance")
            .long("insurance")
            .value_name("GBP")
            .default_value("170")
            .help("Yearly insurance [0-5000]"),
    ]
}

pub fn build_cli() -> Command {
    Command::new("propclip")
        .about("Buy-to-let property analysis with HM Land Registry comparables")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(
            Command::new("fetch")
                .about("Fetch a listing page and show the extracted fields")
                .arg(
                    Arg::new("url")
                        .long("url")
                        .value_name("URL")
                        .required(true)
                        .help("Rightmove listing URL"),
                )
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("comparables")
                .about("List sold comparables for a street and property type")
                .arg(
                    Arg::new("street")
                        .long("street")
                        .value_name("NAME")
                        .required(true)
                        .help("Street name to match (case-insensitive substring)"),
                )
                .arg(
                    Arg::new("type")
                        .long("type")
                        .value_name("TYPE")
                        .required(true)
                        .help("Property type label or Land Registry letter (F/D/S/T/E/B)"),
                )
                .arg(data_arg())
                .arg(json_flag())
                .arg(jsonl_flag()),
        )
        .subcommand(
            Command::new("metrics")
                .about("Compute the investment breakdown for a purchase price")
                .arg(
                    Arg::new("price")
                        .long("price")
                        .value_name("GBP")
                        .required(true)
                        .help("Purchase price in whole pounds"),
                )
                .args(investment_args())
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("analyze")
                .about("Full pipeline: listing, comparables, metrics, decision")
                .arg(
                    Arg::new("url")
                        .long("url")
                        .value_name("URL")
                        .help("Rightmove listing URL to fetch"),
                )
                .arg(
                    Arg::new("street")
                        .long("street")
                        .value_name("NAME")
                        .help("Street name (instead of, or overriding, the fetched one)"),
                )
                .arg(
                    Arg::new("type")
                        .long("type")
                        .value_name("TYPE")
                        .help("Property type label or letter (instead of the fetched one)"),
                )
                .arg(
                    Arg::new("price")
                        .long("price")
                        .value_name("GBP")
                        .help("Purchase price override in whole pounds"),
                )
                .args(investment_args())
                .arg(data_arg())
                .arg(json_flag()),
        )
        .subcommand(
            Command::new("doctor")
                .about("Check the sales dataset and report its shape")
                .arg(data_arg())
                .arg(json_flag()),
        )
}
