// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;

use crate::model::{Product, format_price};

/// Price value handed to a projector: either a raw amount formatted to the
/// shelf convention, or text already rendered by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceLabel {
    Amount(f64),
    Text(String),
}

impl PriceLabel {
    pub fn render(&self) -> String {
        match self {
            Self::Amount(price) => format_price(*price),
            Self::Text(text) => format!("${text}"),
        }
    }
}

/// Boundary to whatever renders the shelf. Units are keyed by catalog index
/// and receive copies of display values, never references into the catalog.
pub trait ShelfProjector {
    /// Creates the visual unit for `index`. Called once per record, in
    /// sequence order, when the catalog loads.
    fn materialize(&mut self, index: usize, product: &Product) -> Result<()>;

    fn set_name(&mut self, index: usize, name: &str);

    fn set_price(&mut self, index: usize, price: PriceLabel);

    fn set_description(&mut self, index: usize, description: &str);
}

#[cfg(test)]
mod tests {
    use super::PriceLabel;

    #[test]
    fn amount_label_formats_to_two_decimals() {
        assert_eq!(PriceLabel::Amount(9.5).render(), "$9.50");
        assert_eq!(PriceLabel::Amount(19.999).render(), "$20.00");
    }

    #[test]
    fn text_label_gains_currency_prefix() {
        assert_eq!(PriceLabel::Text("12.00".to_owned()).render(), "$12.00");
    }
}
