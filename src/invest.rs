// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Decision, InvestmentConfig, InvestmentMetrics, Thresholds};

/// Derive the full metric set for a purchase price. Pure: identical inputs
/// give identical outputs. Yields are `None` for a zero price and
/// cash-on-cash is `None` for zero cash invested; nothing here divides by
/// zero or emits NaN.
pub fn compute_metrics(price: f64, cfg: &InvestmentConfig) -> InvestmentMetrics {
    let deposit = price * cfg.deposit_percent / 100.0;
    let stamp_duty = price * cfg.stamp_duty_percent / 100.0;
    let total_upfront = deposit + stamp_duty + cfg.legal_fees + cfg.refurbishment_cost;

    // Yearly interest on the financed amount.
    let yearly_mortgage_cost = (price - deposit) / 100.0 * cfg.mortgage_interest_percent;

    let annual_rent = cfg.monthly_rent * 12.0;
    let annual_operating_costs = yearly_mortgage_cost + cfg.yearly_maintenance + cfg.insurance;
    let annual_cash_flow = annual_rent - annual_operating_costs;
    let cash_invested = total_upfront;

    let (gross_yield_percent, net_yield_percent) = if price == 0.0 {
        (None, None)
    } else {
        (
            Some(annual_rent / price * 100.0),
            Some((annual_rent - annual_operating_costs) / price * 100.0),
        )
    };
    let cash_on_cash_return_percent = if cash_invested == 0.0 {
        None
    } else {
        Some(annual_cash_flow / cash_invested * 100.0)
    };

    InvestmentMetrics {
        deposit,
        stamp_duty,
        total_upfront,
        yearly_mortgage_cost,
        gross_yield_percent,
        net_yield_percent,
        cash_on_cash_return_percent,
    }
}

/// Three-way buy classification, first matching rule wins. `None` means no
/// median was available, so there is nothing to classify against: callers
/// report insufficient comparable data. An unavailable yield satisfies
/// neither a `>=` nor a `<` threshold test.
pub fn classify(
    price: f64,
    median_price: Option<f64>,
    metrics: &InvestmentMetrics,
    thresholds: &Thresholds,
) -> Option<Decision> {
    let median = median_price?;
    let gross = metrics.gross_yield_percent;
    let net = metrics.net_yield_percent;

    let decision = if price <= median
        && gross.is_some_and(|g| g >= thresholds.gross_yield)
        && net.is_some_and(|n| n >= thresholds.net_yield)
    {
        Decision::GoodBuy
    } else if price > median
        && gross.is_some_and(|g| g < thresholds.gross_yield)
        && net.is_some_and(|n| n < thresholds.net_yield)
    {
        Decision::NotRecommended
    } else {
        Decision::ProceedWithCaution
    };
    Some(decision)
}
