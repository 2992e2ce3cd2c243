// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The six property classifications carried by HM Land Registry
/// price-paid data, keyed by their single-letter codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyTypeCode {
    Flat,
    Detached,
    SemiDetached,
    Terraced,
    EndOfTerrace,
    Bungalow,
}

impl PropertyTypeCode {
    pub const ALL: [PropertyTypeCode; 6] = [
        PropertyTypeCode::Flat,
        PropertyTypeCode::Detached,
        PropertyTypeCode::SemiDetached,
        PropertyTypeCode::Terraced,
        PropertyTypeCode::EndOfTerrace,
        PropertyTypeCode::Bungalow,
    ];

    pub fn letter(self) -> char {
        match self {
            PropertyTypeCode::Flat => 'F',
            PropertyTypeCode::Detached => 'D',
            PropertyTypeCode::SemiDetached => 'S',
            PropertyTypeCode::Terraced => 'T',
            PropertyTypeCode::EndOfTerrace => 'E',
            PropertyTypeCode::Bungalow => 'B',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'F' => Some(PropertyTypeCode::Flat),
            'D' => Some(PropertyTypeCode::Detached),
            'S' => Some(PropertyTypeCode::SemiDetached),
            'T' => Some(PropertyTypeCode::Terraced),
            'E' => Some(PropertyTypeCode::EndOfTerrace),
            'B' => Some(PropertyTypeCode::Bungalow),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PropertyTypeCode::Flat => "Flat",
            PropertyTypeCode::Detached => "Detached House",
            PropertyTypeCode::SemiDetached => "Semi-Detached House",
            PropertyTypeCode::Terraced => "Terraced House",
            PropertyTypeCode::EndOfTerrace => "End of Terrace House",
            PropertyTypeCode::Bungalow => "Bungalow",
        }
    }

    /// Resolve a free-text label by case-insensitive substring. More
    /// specific patterns are tried first so "semi-detached house" never
    /// resolves as Detached, and "end of terrace" never as Terraced.
    pub fn from_label(raw: &str) -> Option<Self> {
        const PATTERNS: [(&str, PropertyTypeCode); 8] = [
            ("end of terrace", PropertyTypeCode::EndOfTerrace),
            ("semi-detached", PropertyTypeCode::SemiDetached),
            ("terraced", PropertyTypeCode::Terraced),
            ("detached", PropertyTypeCode::Detached),
            ("apartment", PropertyTypeCode::Flat),
            ("maisonette", PropertyTypeCode::Flat),
            ("flat", PropertyTypeCode::Flat),
            ("bungalow", PropertyTypeCode::Bungalow),
        ];
        let lower = raw.to_lowercase();
        PATTERNS
            .iter()
            .find(|(pat, _)| lower.contains(pat))
            .map(|&(_, code)| code)
    }
}

/// A listing's property type: one of the six mapped codes, or the
/// title-cased raw label from the page. An `Unknown` label is display-only
/// and never matches a sale transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyType {
    Known(PropertyTypeCode),
    Unknown(String),
}

impl PropertyType {
    /// Resolve a CLI argument: a bare Land Registry letter or a free-text
    /// label.
    pub fn from_arg(s: &str) -> Self {
        let t = s.trim();
        let mut chars = t.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(code) = PropertyTypeCode::from_letter(c) {
                return PropertyType::Known(code);
            }
        }
        PropertyType::from_raw(t)
    }

    pub fn from_raw(raw: &str) -> Self {
        match PropertyTypeCode::from_label(raw) {
            Some(code) => PropertyType::Known(code),
            None => PropertyType::Unknown(crate::utils::title_case(raw)),
        }
    }

    pub fn code(&self) -> Option<PropertyTypeCode> {
        match self {
            PropertyType::Known(code) => Some(*code),
            PropertyType::Unknown(_) => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PropertyType::Known(code) => code.label(),
            PropertyType::Unknown(raw) => raw,
        }
    }
}

/// What a fetcher managed to extract from a listing page. Any field can be
/// absent; downstream stages handle each gap independently. The price is
/// kept as the raw currency text from the page and parsed at the point of
/// use.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub price: Option<String>,
    pub street: Option<String>,
    pub postcode: Option<String>,
    pub property_type: Option<PropertyType>,
}

/// One historical sale from the price-paid dataset. The type code is kept
/// as the raw letter so codes outside the six mapped ones (e.g. 'O') load
/// fine and simply never match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleTransaction {
    pub price_paid: i64,
    pub deed_date: NaiveDate,
    pub paon: String,
    pub street: String,
    pub town: String,
    pub postcode: String,
    pub property_type: char,
}

pub const STAMP_DUTY_PERCENT: f64 = 5.0;

/// User-supplied investment parameters. Percentages are 0-100; money is in
/// whole pounds. Stamp duty is fixed at 5%.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentConfig {
    pub deposit_percent: f64,
    pub mortgage_interest_percent: f64,
    pub stamp_duty_percent: f64,
    pub legal_fees: f64,
    pub refurbishment_cost: f64,
    pub monthly_rent: f64,
    pub yearly_maintenance: f64,
    pub insurance: f64,
}

impl Default for InvestmentConfig {
    fn default() -> Self {
        InvestmentConfig {
            deposit_percent: 25.0,
            mortgage_interest_percent: 5.5,
            stamp_duty_percent: STAMP_DUTY_PERCENT,
            legal_fees: 2000.0,
            refurbishment_cost: 5000.0,
            monthly_rent: 600.0,
            yearly_maintenance: 800.0,
            insurance: 170.0,
        }
    }
}

/// Derived figures, recomputed on every input change and never persisted.
/// Yield fields are `None` where the division is undefined (zero price or
/// zero cash invested); presentation renders those as "n/a".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentMetrics {
    pub deposit: f64,
    pub stamp_duty: f64,
    pub total_upfront: f64,
    pub yearly_mortgage_cost: f64,
    pub gross_yield_percent: Option<f64>,
    pub net_yield_percent: Option<f64>,
    pub cash_on_cash_return_percent: Option<f64>,
}

/// Yield thresholds the decision rule and report deltas are measured
/// against. Cash-on-cash is display-only: it gets a delta on the report
/// but takes no part in classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub gross_yield: f64,
    pub net_yield: f64,
    pub cash_on_cash: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            gross_yield: 6.0,
            net_yield: 5.0,
            cash_on_cash: 9.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    GoodBuy,
    NotRecommended,
    ProceedWithCaution,
}

impl Decision {
    pub fn label(self) -> &'static str {
        match self {
            Decision::GoodBuy => "Good Buy",
            Decision::NotRecommended => "Not Recommended",
            Decision::ProceedWithCaution => "Proceed with Caution",
        }
    }
}
