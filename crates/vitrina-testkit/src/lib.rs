// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use vitrina_app::{PriceLabel, Product, ShelfProjector};

pub fn product(name: &str, description: &str, price: f64) -> Product {
    Product::new(name, description, price)
}

pub fn sample_catalog() -> Vec<Product> {
    vec![
        product("Mug", "Ceramic", 9.5),
        product("Lamp", "Desk lamp", 24.0),
        product("Notebook", "Dotted, A5", 6.25),
    ]
}

/// One materialized unit as a projector saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedUnit {
    pub name: String,
    pub price_label: String,
    pub description: String,
}

/// A projector call performed after materialization.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    SetName { index: usize, name: String },
    SetPrice { index: usize, label: String },
    SetDescription { index: usize, description: String },
}

/// Projector double that records materialized units and every label write,
/// so tests can assert on refresh traffic per index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingProjector {
    pub units: Vec<RecordedUnit>,
    pub calls: Vec<RecordedCall>,
}

impl RecordingProjector {
    pub fn refresh_count_for(&self, index: usize) -> usize {
        self.calls
            .iter()
            .filter(|call| match call {
                RecordedCall::SetName { index: i, .. }
                | RecordedCall::SetPrice { index: i, .. }
                | RecordedCall::SetDescription { index: i, .. } => *i == index,
            })
            .count()
    }
}

impl ShelfProjector for RecordingProjector {
    fn materialize(&mut self, index: usize, product: &Product) -> Result<()> {
        if index != self.units.len() {
            bail!(
                "units must materialize in sequence order; got index {index} with {} units",
                self.units.len()
            );
        }
        self.units.push(RecordedUnit {
            name: product.name.clone(),
            price_label: PriceLabel::Amount(product.price).render(),
            description: product.description.clone(),
        });
        Ok(())
    }

    fn set_name(&mut self, index: usize, name: &str) {
        if let Some(unit) = self.units.get_mut(index) {
            unit.name = name.to_owned();
        }
        self.calls.push(RecordedCall::SetName {
            index,
            name: name.to_owned(),
        });
    }

    fn set_price(&mut self, index: usize, price: PriceLabel) {
        let label = price.render();
        if let Some(unit) = self.units.get_mut(index) {
            unit.price_label = label.clone();
        }
        self.calls.push(RecordedCall::SetPrice { index, label });
    }

    fn set_description(&mut self, index: usize, description: &str) {
        if let Some(unit) = self.units.get_mut(index) {
            unit.description = description.to_owned();
        }
        self.calls.push(RecordedCall::SetDescription {
            index,
            description: description.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{RecordedCall, RecordingProjector, sample_catalog};
    use vitrina_app::{PriceLabel, ShelfProjector};

    #[test]
    fn materialize_enforces_sequence_order() {
        let mut projector = RecordingProjector::default();
        let catalog = sample_catalog();

        projector
            .materialize(0, &catalog[0])
            .expect("first unit materializes");
        let error = projector
            .materialize(2, &catalog[1])
            .expect_err("gap in sequence should fail");
        assert!(error.to_string().contains("sequence order"));
    }

    #[test]
    fn label_writes_are_recorded_per_index() {
        let mut projector = RecordingProjector::default();
        let catalog = sample_catalog();
        projector
            .materialize(0, &catalog[0])
            .expect("unit materializes");

        projector.set_name(0, "Mug XL");
        projector.set_price(0, PriceLabel::Amount(12.0));

        assert_eq!(projector.units[0].name, "Mug XL");
        assert_eq!(projector.units[0].price_label, "$12.00");
        assert_eq!(projector.refresh_count_for(0), 2);
        assert_eq!(projector.refresh_count_for(1), 0);
        assert_eq!(
            projector.calls[1],
            RecordedCall::SetPrice {
                index: 0,
                label: "$12.00".to_owned(),
            }
        );
    }
}
