// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use propclip::fetcher::parse_listing;
use propclip::models::{PropertyType, PropertyTypeCode};

fn page(price_block: &str, address_block: &str, type_block: &str) -> String {
    format!(
        r#"<html><body>
        <div class="_1gfnqJ3Vtd1z40MlC0MzXu">{price_block}</div>
        <div class="_2uQQ3SV0eMHL1P6t5ZDo2q">{address_block}</div>
        <article>
          <dl>
            <div><dt>PROPERTY TYPE</dt><dd><span><p>{type_block}</p></span></dd></div>
            <div><dt>BEDROOMS</dt><dd><span><p>3</p></span></dd></div>
          </dl>
        </article>
        </body></html>"#
    )
}

#[test]
fn extracts_price_street_postcode_and_type() {
    let html = page("Guide Price £210,000", "Beverley Road, Hull, HU5 1AA", "Semi-Detached");
    let listing = parse_listing(&html).unwrap();
    assert_eq!(listing.price.as_deref(), Some("£210,000"));
    assert_eq!(listing.street.as_deref(), Some("Beverley Road"));
    assert_eq!(listing.postcode.as_deref(), Some("HU5 1AA"));
    assert_eq!(
        listing.property_type,
        Some(PropertyType::Known(PropertyTypeCode::SemiDetached))
    );
}

#[test]
fn price_with_pence_is_captured_verbatim() {
    let html = page("£210,000.00", "Beverley Road, Hull, HU5 1AA", "Flat");
    let listing = parse_listing(&html).unwrap();
    assert_eq!(listing.price.as_deref(), Some("£210,000.00"));
}

#[test]
fn address_without_commas_is_all_street() {
    let html = page("£95,000", "Beverley Road", "Terraced");
    let listing = parse_listing(&html).unwrap();
    assert_eq!(listing.street.as_deref(), Some("Beverley Road"));
    assert_eq!(listing.postcode, None);
}

#[test]
fn unmapped_type_becomes_title_cased_unknown() {
    let html = page("£55,000", "Marina Way, Hull, HU1 2AB", "park home");
    let listing = parse_listing(&html).unwrap();
    assert_eq!(
        listing.property_type,
        Some(PropertyType::Unknown("Park Home".to_string()))
    );
}

#[test]
fn apartment_maps_to_flat() {
    let html = page("£120,000", "High Street, Hull, HU1 1AA", "Luxury Apartment");
    let listing = parse_listing(&html).unwrap();
    assert_eq!(
        listing.property_type,
        Some(PropertyType::Known(PropertyTypeCode::Flat))
    );
}

#[test]
fn missing_blocks_leave_fields_none() {
    let listing = parse_listing("<html><body><p>nothing here</p></body></html>").unwrap();
    assert_eq!(listing.price, None);
    assert_eq!(listing.street, None);
    assert_eq!(listing.postcode, None);
    assert_eq!(listing.property_type, None);
}

#[test]
fn price_block_without_amount_is_none() {
    let html = page("POA", "Beverley Road, Hull, HU5 1AA", "Detached");
    let listing = parse_listing(&html).unwrap();
    assert_eq!(listing.price, None);
    assert_eq!(
        listing.property_type,
        Some(PropertyType::Known(PropertyTypeCode::Detached))
    );
}
