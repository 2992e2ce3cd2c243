// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use propclip::comparables::find_comparables;
use propclip::dataset::SalesDataset;
use propclip::models::{ListingRecord, PropertyType, PropertyTypeCode, SaleTransaction};

fn sale(street: &str, code: char, price: i64, date: &str) -> SaleTransaction {
    SaleTransaction {
        price_paid: price,
        deed_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        paon: "12".to_string(),
        street: street.to_string(),
        town: "HULL".to_string(),
        postcode: "HU5 1AA".to_string(),
        property_type: code,
    }
}

fn listing(street: &str, ptype: PropertyType) -> ListingRecord {
    ListingRecord {
        street: Some(street.to_string()),
        property_type: Some(ptype),
        ..Default::default()
    }
}

#[test]
fn matches_street_substring_case_insensitively() {
    let ds = SalesDataset::from_sales(vec![
        sale("BEVERLEY ROAD", 'T', 95_000, "2021-03-01"),
        sale("Beverley Road West", 'T', 105_000, "2022-06-15"),
        sale("HESSLE ROAD", 'T', 80_000, "2021-08-10"),
    ]);
    let set = find_comparables(
        &listing("beverley road", PropertyType::Known(PropertyTypeCode::Terraced)),
        &ds,
    );
    assert_eq!(set.sales.len(), 2);
    assert!(set.sales.iter().all(|s| s.street.to_lowercase().contains("beverley road")));
}

#[test]
fn filters_on_exact_type_code() {
    let ds = SalesDataset::from_sales(vec![
        sale("BEVERLEY ROAD", 'T', 95_000, "2021-03-01"),
        sale("BEVERLEY ROAD", 'S', 140_000, "2021-04-01"),
        sale("BEVERLEY ROAD", 'O', 200_000, "2021-05-01"),
    ]);
    let set = find_comparables(
        &listing("Beverley Road", PropertyType::Known(PropertyTypeCode::SemiDetached)),
        &ds,
    );
    assert_eq!(set.sales.len(), 1);
    assert_eq!(set.sales[0].price_paid, 140_000);
}

#[test]
fn sorts_ascending_by_deed_date() {
    let ds = SalesDataset::from_sales(vec![
        sale("NEWLAND AVENUE", 'F', 90_000, "2023-01-05"),
        sale("NEWLAND AVENUE", 'F', 70_000, "2019-11-20"),
        sale("NEWLAND AVENUE", 'F', 82_000, "2021-07-02"),
    ]);
    let set = find_comparables(
        &listing("Newland Avenue", PropertyType::Known(PropertyTypeCode::Flat)),
        &ds,
    );
    let dates: Vec<_> = set.sales.iter().map(|s| s.deed_date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
    assert_eq!(set.sales[0].price_paid, 70_000);
}

#[test]
fn median_of_odd_count_is_middle_value() {
    let ds = SalesDataset::from_sales(vec![
        sale("PRINCES AVENUE", 'T', 100_000, "2020-01-01"),
        sale("PRINCES AVENUE", 'T', 140_000, "2021-01-01"),
        sale("PRINCES AVENUE", 'T', 120_000, "2022-01-01"),
    ]);
    let set = find_comparables(
        &listing("Princes Avenue", PropertyType::Known(PropertyTypeCode::Terraced)),
        &ds,
    );
    assert_eq!(set.median_price, Some(120_000.0));
}

#[test]
fn median_of_even_count_averages_middle_pair() {
    let ds = SalesDataset::from_sales(vec![
        sale("PRINCES AVENUE", 'T', 100_000, "2020-01-01"),
        sale("PRINCES AVENUE", 'T', 110_000, "2021-01-01"),
        sale("PRINCES AVENUE", 'T', 150_000, "2022-01-01"),
        sale("PRINCES AVENUE", 'T', 200_000, "2023-01-01"),
    ]);
    let set = find_comparables(
        &listing("Princes Avenue", PropertyType::Known(PropertyTypeCode::Terraced)),
        &ds,
    );
    assert_eq!(set.median_price, Some(130_000.0));
}

#[test]
fn median_does_not_depend_on_row_order() {
    let rows = vec![
        sale("COTTINGHAM ROAD", 'D', 250_000, "2020-05-01"),
        sale("COTTINGHAM ROAD", 'D', 180_000, "2022-02-01"),
        sale("COTTINGHAM ROAD", 'D', 310_000, "2018-09-01"),
    ];
    let mut reversed = rows.clone();
    reversed.reverse();
    let subject = listing("Cottingham Road", PropertyType::Known(PropertyTypeCode::Detached));

    let a = find_comparables(&subject, &SalesDataset::from_sales(rows));
    let b = find_comparables(&subject, &SalesDataset::from_sales(reversed));
    assert_eq!(a.median_price, b.median_price);
    assert_eq!(a.sales, b.sales);
}

#[test]
fn empty_match_set_has_no_median() {
    let ds = SalesDataset::from_sales(vec![sale("HESSLE ROAD", 'T', 80_000, "2021-08-10")]);
    let set = find_comparables(
        &listing("Beverley Road", PropertyType::Known(PropertyTypeCode::Terraced)),
        &ds,
    );
    assert!(set.is_empty());
    assert_eq!(set.median_price, None);
}

#[test]
fn unknown_type_label_matches_nothing() {
    let ds = SalesDataset::from_sales(vec![sale("BEVERLEY ROAD", 'T', 95_000, "2021-03-01")]);
    let set = find_comparables(
        &listing("Beverley Road", PropertyType::Unknown("Park Home".to_string())),
        &ds,
    );
    assert!(set.is_empty());
}

#[test]
fn missing_street_or_type_matches_nothing() {
    let ds = SalesDataset::from_sales(vec![sale("BEVERLEY ROAD", 'T', 95_000, "2021-03-01")]);

    let no_street = ListingRecord {
        property_type: Some(PropertyType::Known(PropertyTypeCode::Terraced)),
        ..Default::default()
    };
    assert!(find_comparables(&no_street, &ds).is_empty());

    let no_type = ListingRecord {
        street: Some("Beverley Road".to_string()),
        ..Default::default()
    };
    assert!(find_comparables(&no_type, &ds).is_empty());

    let blank_street = ListingRecord {
        street: Some("   ".to_string()),
        property_type: Some(PropertyType::Known(PropertyTypeCode::Terraced)),
        ..Default::default()
    };
    assert!(find_comparables(&blank_street, &ds).is_empty());
}

#[test]
fn label_resolution_is_total_over_known_labels() {
    for code in PropertyTypeCode::ALL {
        assert_eq!(PropertyTypeCode::from_label(code.label()), Some(code));
        assert_eq!(PropertyTypeCode::from_letter(code.letter()), Some(code));
    }
}

#[test]
fn semi_detached_label_does_not_resolve_as_detached() {
    assert_eq!(
        PropertyTypeCode::from_label("Semi-Detached House"),
        Some(PropertyTypeCode::SemiDetached)
    );
    assert_eq!(
        PropertyTypeCode::from_label("end of terrace house"),
        Some(PropertyTypeCode::EndOfTerrace)
    );
}
