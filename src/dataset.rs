// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use csv::ReaderBuilder;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::SaleTransaction;
use crate::utils::parse_date;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Propclip", "propclip"));

const REQUIRED_COLUMNS: [&str; 7] = [
    "price_paid",
    "deed_date",
    "paon",
    "street",
    "town",
    "postcode",
    "property_type",
];

/// Where the price-paid CSV lives when no --data override is given.
pub fn default_data_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("ppd_data.csv"))
}

/// Resolve the dataset location: an explicit --data path wins, otherwise
/// the platform default.
pub fn resolve_path(flag: Option<&str>) -> Result<PathBuf> {
    match flag {
        Some(p) => Ok(PathBuf::from(p)),
        None => default_data_path(),
    }
}

/// The full price-paid transaction set, loaded wholesale up front and
/// read-only from then on. Column order in the CSV does not matter; columns
/// are resolved by header name.
#[derive(Debug, Clone)]
pub struct SalesDataset {
    sales: Vec<SaleTransaction>,
}

impl SalesDataset {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(anyhow!(
                "Sales dataset not found at {} (place a price-paid CSV there or pass --data)",
                path.display()
            ));
        }
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .with_context(|| format!("Open CSV {}", path.display()))?;

        let headers = rdr.headers().context("Read CSV header row")?.clone();
        let mut idx = [0usize; REQUIRED_COLUMNS.len()];
        for (slot, name) in idx.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| anyhow!("Dataset is missing required column '{}'", name))?;
        }
        let [price_i, date_i, paon_i, street_i, town_i, postcode_i, type_i] = idx;

        let mut sales = Vec::new();
        for (n, result) in rdr.records().enumerate() {
            let rec = result.with_context(|| format!("Read dataset row {}", n + 2))?;
            let get = |i: usize| rec.get(i).unwrap_or("").trim();

            let price_raw = get(price_i);
            let price_paid = price_raw
                .parse::<i64>()
                .with_context(|| format!("Invalid price_paid '{}' on row {}", price_raw, n + 2))?;
            let date_raw = get(date_i);
            let deed_date = parse_date(date_raw)
                .with_context(|| format!("Invalid deed_date on row {}", n + 2))?;
            let type_raw = get(type_i);
            let mut chars = type_raw.chars();
            let property_type = match (chars.next(), chars.next()) {
                (Some(c), None) => c.to_ascii_uppercase(),
                _ => {
                    return Err(anyhow!(
                        "Invalid property_type '{}' on row {}, expected a single letter",
                        type_raw,
                        n + 2
                    ));
                }
            };

            sales.push(SaleTransaction {
                price_paid,
                deed_date,
                paon: get(paon_i).to_string(),
                street: get(street_i).to_string(),
                town: get(town_i).to_string(),
                postcode: get(postcode_i).to_string(),
                property_type,
            });
        }
        Ok(SalesDataset { sales })
    }

    pub fn from_sales(sales: Vec<SaleTransaction>) -> Self {
        SalesDataset { sales }
    }

    pub fn sales(&self) -> &[SaleTransaction] {
        &self.sales
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}
