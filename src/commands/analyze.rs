// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use serde::Serialize;

use crate::commands::{comparables::print_comparables, fetch::print_listing, metrics};
use crate::comparables::{ComparableSet, find_comparables};
use crate::dataset::{self, SalesDataset};
use crate::fetcher::{ListingFetcher, RightmoveFetcher};
use crate::invest::{classify, compute_metrics};
use crate::models::{Decision, InvestmentMetrics, ListingRecord, PropertyType, Thresholds};
use crate::utils::{maybe_print_json, parse_price};

#[derive(Debug, Serialize)]
struct AnalysisReport {
    listing: ListingRecord,
    price: Option<i64>,
    comparables: ComparableSet,
    metrics: Option<InvestmentMetrics>,
    thresholds: Thresholds,
    decision: Option<Decision>,
}

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let cfg = metrics::config_from_matches(sub)?;

    // Start from the fetched record when a URL is given; manual flags fill
    // in or override individual fields.
    let mut listing = match sub.get_one::<String>("url") {
        Some(url) => {
            let fetcher = RightmoveFetcher::new()?;
            fetcher.fetch(url.trim()).context("Fetch listing page")?
        }
        None => ListingRecord::default(),
    };
    if let Some(s) = sub.get_one::<String>("street") {
        listing.street = Some(s.trim().to_string());
    }
    if let Some(t) = sub.get_one::<String>("type") {
        listing.property_type = Some(PropertyType::from_arg(t));
    }
    if listing == ListingRecord::default() && sub.get_one::<String>("price").is_none() {
        return Err(anyhow!(
            "Nothing to analyze: pass --url, or --street/--type/--price"
        ));
    }

    // Explicit --price beats the price scraped off the page.
    let price = match metrics::price_from_matches(sub)? {
        Some(p) => Some(p),
        None => listing.price.as_deref().and_then(parse_price),
    };

    let path = dataset::resolve_path(sub.get_one::<String>("data").map(String::as_str))?;
    let sales = SalesDataset::load(&path)?;
    let comps = find_comparables(&listing, &sales);

    let computed = price.map(|p| compute_metrics(p as f64, &cfg));
    let thresholds = Thresholds::default();
    let decision = match (price, &computed) {
        (Some(p), Some(m)) => classify(p as f64, comps.median_price, m, &thresholds),
        _ => None,
    };

    let report = AnalysisReport {
        listing,
        price,
        comparables: comps,
        metrics: computed,
        thresholds,
        decision,
    };
    if maybe_print_json(json_flag, false, &report)? {
        return Ok(());
    }

    println!("Listing");
    print_listing(&report.listing);
    println!();
    print_comparables(&report.comparables);
    println!();

    match report.decision {
        Some(d) => println!("Decision: {}", d.label()),
        None if report.price.is_none() => {
            println!("Decision: unavailable (no purchase price; pass --price)")
        }
        None => println!("Decision: insufficient comparable data"),
    }
    println!();

    match (report.price, &report.metrics) {
        (Some(_), Some(m)) => metrics::print_breakdown(&cfg, m, &report.thresholds),
        _ => println!("Investment breakdown unavailable without a purchase price."),
    }
    Ok(())
}
