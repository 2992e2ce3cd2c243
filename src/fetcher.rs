// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use thiserror::Error;

use crate::models::{ListingRecord, PropertyType};
use crate::utils::http_client;

// Rightmove's obfuscated class names. They churn when the site redeploys;
// markup knowledge must not leak past this module.
const PRICE_SELECTOR: &str = "._1gfnqJ3Vtd1z40MlC0MzXu";
const ADDRESS_SELECTOR: &str = "._2uQQ3SV0eMHL1P6t5ZDo2q";
const TYPE_SELECTOR: &str = "article dl > div:first-of-type dd span p";

static PRICE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"£[\d,]+(?:\.\d{2})?").expect("price pattern"));

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("listing request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid selector '{0}'")]
    Selector(String),
}

/// Anything that can turn a listing URL into a ListingRecord. The pipeline
/// depends on this trait only, so page markup never leaks past the fetcher.
pub trait ListingFetcher {
    fn fetch(&self, url: &str) -> Result<ListingRecord, FetchError>;
}

pub struct RightmoveFetcher {
    client: reqwest::blocking::Client,
}

impl RightmoveFetcher {
    pub fn new() -> anyhow::Result<Self> {
        Ok(RightmoveFetcher {
            client: http_client()?,
        })
    }
}

impl ListingFetcher for RightmoveFetcher {
    fn fetch(&self, url: &str) -> Result<ListingRecord, FetchError> {
        let body = self.client.get(url).send()?.error_for_status()?.text()?;
        parse_listing(&body)
    }
}

/// Extract price, street, postcode, and property type from a listing page.
/// Each block the page lacks leaves its field `None`; downstream stages
/// degrade per field rather than failing the whole record.
pub fn parse_listing(html: &str) -> Result<ListingRecord, FetchError> {
    let doc = Html::parse_document(html);
    let mut record = ListingRecord::default();

    if let Some(el) = doc.select(&selector(PRICE_SELECTOR)?).next() {
        let text = element_text(&el);
        record.price = PRICE_RE.find(&text).map(|m| m.as_str().to_string());
    }

    if let Some(el) = doc.select(&selector(ADDRESS_SELECTOR)?).next() {
        let full = element_text(&el);
        let parts: Vec<&str> = full.split(',').collect();
        if parts.len() >= 2 {
            record.street = Some(parts[0].trim().to_string());
            record.postcode = parts.last().map(|p| p.trim().to_string());
        } else if !full.trim().is_empty() {
            record.street = Some(full.trim().to_string());
        }
    }

    if let Some(el) = doc.select(&selector(TYPE_SELECTOR)?).next() {
        let raw = element_text(&el);
        if !raw.trim().is_empty() {
            record.property_type = Some(PropertyType::from_raw(raw.trim()));
        }
    }

    Ok(record)
}

fn selector(css: &str) -> Result<Selector, FetchError> {
    Selector::parse(css).map_err(|e| FetchError::Selector(e.to_string()))
}

fn element_text(el: &scraper::ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}
