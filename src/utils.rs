// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};

const UA: &str = concat!(
    "propclip/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/propclip)"
);

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

/// Normalize a currency-formatted string ("£200,000", "£1,250,000.00") to
/// whole pounds. Fails soft: empty or non-numeric input is `None`, never an
/// error. Fractional pence are truncated; prices are whole-pound throughout.
pub fn parse_price(text: &str) -> Option<i64> {
    let cleaned = text.trim().replace(['£', ','], "");
    if cleaned.is_empty() {
        return None;
    }
    let integral = cleaned.split('.').next().unwrap_or("");
    integral.parse::<i64>().ok()
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// Parse a numeric CLI input and enforce its documented range.
pub fn parse_ranged(s: &str, what: &str, min: f64, max: f64) -> Result<f64> {
    let v = s
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid {} '{}'", what, s))?;
    if !v.is_finite() || v < min || v > max {
        return Err(anyhow!("{} must be between {} and {}, got {}", what, min, max, s.trim()));
    }
    Ok(v)
}

/// Whole-pound display with thousands grouping: 1234567 -> "£1,234,567".
pub fn fmt_money(v: f64) -> String {
    let neg = v < 0.0;
    let whole = v.abs().round() as i64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if neg {
        format!("-£{}", grouped)
    } else {
        format!("£{}", grouped)
    }
}

/// Percentage display rounded to 2 dp, "n/a" when undefined.
pub fn fmt_percent(v: Option<f64>) -> String {
    match v {
        Some(p) => format!("{:.2}%", p),
        None => "n/a".to_string(),
    }
}

/// Signed delta against a threshold, e.g. "+1.20%"; "n/a" when the metric
/// itself is undefined.
pub fn fmt_delta(v: Option<f64>, threshold: f64) -> String {
    match v {
        Some(p) => format!("{:+.2}%", p - threshold),
        None => "n/a".to_string(),
    }
}

/// Title-case a free-text label word by word ("end of terrace cottage" ->
/// "End Of Terrace Cottage").
pub fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
