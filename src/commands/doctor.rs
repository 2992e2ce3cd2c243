// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::dataset::{self, SalesDataset};
use crate::models::PropertyTypeCode;
use crate::utils::{maybe_print_json, pretty_table};

#[derive(Debug, Serialize)]
struct DatasetReport {
    path: String,
    rows: usize,
    earliest_deed_date: Option<NaiveDate>,
    latest_deed_date: Option<NaiveDate>,
    sales_by_type: Vec<(String, usize)>,
    unmapped_type_rows: usize,
}

pub fn handle(sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let path = dataset::resolve_path(sub.get_one::<String>("data").map(String::as_str))?;
    let sales = SalesDataset::load(&path)?;

    let mut by_type = Vec::with_capacity(PropertyTypeCode::ALL.len());
    let mut mapped = 0usize;
    for code in PropertyTypeCode::ALL {
        let n = sales
            .sales()
            .iter()
            .filter(|s| s.property_type == code.letter())
            .count();
        mapped += n;
        by_type.push((code.label().to_string(), n));
    }

    let report = DatasetReport {
        path: path.display().to_string(),
        rows: sales.len(),
        earliest_deed_date: sales.sales().iter().map(|s| s.deed_date).min(),
        latest_deed_date: sales.sales().iter().map(|s| s.deed_date).max(),
        sales_by_type: by_type,
        unmapped_type_rows: sales.len() - mapped,
    };

    if maybe_print_json(json_flag, false, &report)? {
        return Ok(());
    }

    println!("Dataset: {}", report.path);
    println!("Rows: {}", report.rows);
    if let (Some(a), Some(b)) = (report.earliest_deed_date, report.latest_deed_date) {
        println!("Deed dates: {} to {}", a, b);
    }
    let mut rows: Vec<Vec<String>> = report
        .sales_by_type
        .iter()
        .map(|(label, n)| vec![label.clone(), n.to_string()])
        .collect();
    rows.push(vec![
        "(unmapped codes)".to_string(),
        report.unmapped_type_rows.to_string(),
    ]);
    println!("{}", pretty_table(&["Type", "Sales"], rows));
    Ok(())
}
