// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};

use crate::invest::compute_metrics;
use crate::models::{InvestmentConfig, InvestmentMetrics, STAMP_DUTY_PERCENT, Thresholds};
use crate::utils::{fmt_delta, fmt_money, fmt_percent, maybe_print_json, parse_price, parse_ranged, pretty_table};

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let price = price_from_matches(sub)?
        .ok_or_else(|| anyhow!("Missing purchase price"))?;
    let cfg = config_from_matches(sub)?;

    let metrics = compute_metrics(price as f64, &cfg);
    if !maybe_print_json(json_flag, false, &metrics)? {
        print_breakdown(&cfg, &metrics, &Thresholds::default());
    }
    Ok(())
}

/// Read the investment flags into a config. Stamp duty is fixed; everything
/// else is validated against its documented range.
pub fn config_from_matches(sub: &clap::ArgMatches) -> Result<InvestmentConfig> {
    let arg = |name: &str| sub.get_one::<String>(name).unwrap().as_str();
    Ok(InvestmentConfig {
        deposit_percent: parse_ranged(arg("deposit-percent"), "deposit percent", 0.0, 100.0)?,
        mortgage_interest_percent: parse_ranged(arg("mortgage-interest"), "mortgage interest", 0.0, 10.0)?,
        stamp_duty_percent: STAMP_DUTY_PERCENT,
        legal_fees: parse_ranged(arg("legal-fees"), "legal fees", 0.0, 5000.0)?,
        refurbishment_cost: parse_ranged(arg("refurb"), "refurbishment cost", 0.0, 50000.0)?,
        monthly_rent: parse_ranged(arg("rent"), "monthly rent", 0.0, 5000.0)?,
        yearly_maintenance: parse_ranged(arg("maintenance"), "yearly maintenance", 0.0, 5000.0)?,
        insurance: parse_ranged(arg("insurance"), "insurance", 0.0, 5000.0)?,
    })
}

/// Parse a --price flag if present. Accepts plain digits or currency text
/// ("£150,000"); rejects negatives.
pub fn price_from_matches(sub: &clap::ArgMatches) -> Result<Option<i64>> {
    let Some(raw) = sub.get_one::<String>("price") else {
        return Ok(None);
    };
    let price = parse_price(raw).ok_or_else(|| anyhow!("Invalid price '{}'", raw))?;
    if price < 0 {
        return Err(anyhow!("Price must not be negative, got '{}'", raw));
    }
    Ok(Some(price))
}

pub fn print_breakdown(cfg: &InvestmentConfig, metrics: &InvestmentMetrics, thresholds: &Thresholds) {
    println!("Upfront costs");
    println!(
        "{}",
        pretty_table(
            &["Deposit", "Stamp Duty", "Legal Fees", "Refurbishment", "Total Upfront"],
            vec![vec![
                fmt_money(metrics.deposit),
                fmt_money(metrics.stamp_duty),
                fmt_money(cfg.legal_fees),
                fmt_money(cfg.refurbishment_cost),
                fmt_money(metrics.total_upfront),
            ]],
        )
    );
    println!("Returns");
    println!(
        "{}",
        pretty_table(
            &["Metric", "Value", "Delta vs threshold"],
            vec![
                vec![
                    "Yearly Mortgage Cost".to_string(),
                    fmt_money(metrics.yearly_mortgage_cost),
                    String::new(),
                ],
                vec![
                    "Gross Yield".to_string(),
                    fmt_percent(metrics.gross_yield_percent),
                    fmt_delta(metrics.gross_yield_percent, thresholds.gross_yield),
                ],
                vec![
                    "Net Yield".to_string(),
                    fmt_percent(metrics.net_yield_percent),
                    fmt_delta(metrics.net_yield_percent, thresholds.net_yield),
                ],
                vec![
                    "Cash-on-Cash Return".to_string(),
                    fmt_percent(metrics.cash_on_cash_return_percent),
                    fmt_delta(metrics.cash_on_cash_return_percent, thresholds.cash_on_cash),
                ],
            ],
        )
    );
}
