// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::comparables::{ComparableSet, find_comparables};
use crate::dataset::{self, SalesDataset};
use crate::models::{ListingRecord, PropertyType, SaleTransaction};
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let street = sub.get_one::<String>("street").unwrap().trim().to_string();
    let ptype = PropertyType::from_arg(sub.get_one::<String>("type").unwrap());

    if let PropertyType::Unknown(label) = &ptype {
        eprintln!(
            "Warning: '{}' is not a recognised property type; no sales will match it.",
            label
        );
    }

    let path = dataset::resolve_path(sub.get_one::<String>("data").map(String::as_str))?;
    let dataset = SalesDataset::load(&path)?;

    let listing = ListingRecord {
        street: Some(street),
        property_type: Some(ptype),
        ..Default::default()
    };
    let set = find_comparables(&listing, &dataset);

    if maybe_print_json(json_flag, false, &set)? {
        return Ok(());
    }
    if jsonl_flag {
        maybe_print_json(false, true, &set.sales)?;
        return Ok(());
    }
    print_comparables(&set);
    Ok(())
}

pub fn print_comparables(set: &ComparableSet) {
    if set.is_empty() {
        println!("No comparable sold properties found for this street and type.");
        return;
    }
    let rows = set.sales.iter().map(sale_row).collect();
    println!(
        "{}",
        pretty_table(
            &["Price Paid", "Deed Date", "PAON", "Street", "Town", "Postcode", "Type"],
            rows,
        )
    );
    if let Some(median) = set.median_price {
        println!("Median sold price: {}", fmt_money(median));
    }
}

fn sale_row(s: &SaleTransaction) -> Vec<String> {
    vec![
        fmt_money(s.price_paid as f64),
        s.deed_date.to_string(),
        s.paon.clone(),
        s.street.clone(),
        s.town.clone(),
        s.postcode.clone(),
        s.property_type.to_string(),
    ]
}
