// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;

use crate::dataset::SalesDataset;
use crate::models::{ListingRecord, SaleTransaction};

/// Historical sales matching a listing's street and type, oldest first,
/// with the median sold price over the set. An empty set is a valid,
/// reportable outcome, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct ComparableSet {
    pub sales: Vec<SaleTransaction>,
    pub median_price: Option<f64>,
}

impl ComparableSet {
    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}

/// Filter the dataset to sales whose street contains the listing's street
/// (case-insensitive) and whose type code equals the listing's resolved
/// code. A listing with no street, no type, or an unmapped type label
/// matches nothing.
pub fn find_comparables(listing: &ListingRecord, dataset: &SalesDataset) -> ComparableSet {
    let code = listing.property_type.as_ref().and_then(|t| t.code());
    let street = listing
        .street
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let (Some(code), Some(street)) = (code, street) else {
        return ComparableSet {
            sales: Vec::new(),
            median_price: None,
        };
    };

    let needle = street.to_lowercase();
    let letter = code.letter();
    let mut sales: Vec<SaleTransaction> = dataset
        .sales()
        .iter()
        .filter(|s| s.property_type == letter && s.street.to_lowercase().contains(&needle))
        .cloned()
        .collect();
    sales.sort_by(|a, b| a.deed_date.cmp(&b.deed_date));

    let median_price = median(sales.iter().map(|s| s.price_paid));
    ComparableSet { sales, median_price }
}

/// Statistical median; the mean of the two middle values for even counts.
/// Independent of input order.
fn median(values: impl Iterator<Item = i64>) -> Option<f64> {
    let mut sorted: Vec<i64> = values.collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_unstable();
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid] as f64)
    } else {
        Some((sorted[mid - 1] + sorted[mid]) as f64 / 2.0)
    }
}
