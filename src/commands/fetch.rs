// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};

use crate::fetcher::{ListingFetcher, RightmoveFetcher};
use crate::models::ListingRecord;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let url = sub.get_one::<String>("url").unwrap().trim();

    let fetcher = RightmoveFetcher::new()?;
    let listing = fetcher.fetch(url).context("Fetch listing page")?;

    if !maybe_print_json(json_flag, false, &listing)? {
        print_listing(&listing);
    }
    Ok(())
}

pub fn print_listing(listing: &ListingRecord) {
    let na = || "n/a".to_string();
    println!(
        "{}",
        pretty_table(
            &["Price", "Street", "Postcode", "Property Type"],
            vec![vec![
                listing.price.clone().unwrap_or_else(na),
                listing.street.clone().unwrap_or_else(na),
                listing.postcode.clone().unwrap_or_else(na),
                listing
                    .property_type
                    .as_ref()
                    .map(|t| t.label().to_string())
                    .unwrap_or_else(na),
            ]],
        )
    );
}
