// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use serde::{Deserialize, Serialize};

/// One catalog entry. A product has no intrinsic id; its identity for
/// display and editing is its position in the catalog sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: 0.0,
        }
    }
}

impl Product {
    pub fn new(name: &str, description: &str, price: f64) -> Self {
        Self {
            name: name.to_owned(),
            description: description.to_owned(),
            price,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackKind {
    Success,
    Error,
    Info,
}

/// A user-facing message for the single shared feedback sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub message: String,
    pub kind: FeedbackKind,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: FeedbackKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: FeedbackKind::Error,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: FeedbackKind::Info,
        }
    }
}

// Prices round half away from zero to cents so that shelf labels and edit
// fields agree on the same rendering.
fn round_to_cents(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

/// Shelf label rendering: leading dollar sign, two decimals.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", round_to_cents(price))
}

/// Edit-field rendering: two decimals, no currency symbol.
pub fn format_price_input(price: f64) -> String {
    format!("{:.2}", round_to_cents(price))
}

/// Parses user-entered price text as a non-localized float. Returns `None`
/// for unparsable or non-finite input.
pub fn parse_price(raw: &str) -> Option<f64> {
    let price: f64 = raw.trim().parse().ok()?;
    price.is_finite().then_some(price)
}
