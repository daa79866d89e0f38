// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Result, bail};
use tracing::{info, warn};
use vitrina_app::{PriceLabel, Product, ShelfProjector};

/// Result of loading fetched records into the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(usize),
    Empty,
}

/// Result of an indexed update. `Stale` means the index fell outside the
/// catalog and the operation was dropped; stale UI references are a policy
/// no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Applied,
    Stale,
}

/// The two update modes: mutate name and price in place, or replace the
/// whole record.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductUpdate {
    Fields { name: String, price: f64 },
    Full(Product),
}

/// The authoritative in-memory catalog for the session. Created empty,
/// populated at most once, entries mutated in place by edits, never resized
/// after load. All index bounds checks live here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStore {
    records: Vec<Product>,
}

impl CatalogStore {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Replaces the catalog. An empty input leaves the store empty and is
    /// reported so the caller creates no visual units.
    pub fn load(&mut self, records: Vec<Product>) -> LoadOutcome {
        if records.is_empty() {
            warn!("no products were parsed from the catalog response");
            return LoadOutcome::Empty;
        }

        let count = records.len();
        self.records = records;
        LoadOutcome::Loaded(count)
    }

    pub fn get(&self, index: usize) -> Result<&Product> {
        let len = self.records.len();
        match self.records.get(index) {
            Some(product) => Ok(product),
            None => bail!("catalog index {index} out of range; catalog holds {len} products"),
        }
    }

    /// Applies an update at `index`. Out-of-range updates are dropped and
    /// the catalog is left untouched.
    pub fn update(&mut self, index: usize, update: ProductUpdate) -> UpdateOutcome {
        let len = self.records.len();
        let Some(record) = self.records.get_mut(index) else {
            warn!("update for catalog index {index} ignored; catalog holds {len} products");
            return UpdateOutcome::Stale;
        };

        match update {
            ProductUpdate::Fields { name, price } => {
                record.name = name;
                record.price = price;
            }
            ProductUpdate::Full(product) => *record = product,
        }
        UpdateOutcome::Applied
    }

    /// Full catalog copy for read-only display.
    pub fn snapshot(&self) -> Vec<Product> {
        self.records.clone()
    }
}

/// The store plus its display binding: one projector unit per catalog
/// index, established at load time and fixed thereafter.
#[derive(Debug)]
pub struct Shelf<P: ShelfProjector> {
    store: CatalogStore,
    projector: P,
    bound_units: usize,
}

impl<P: ShelfProjector> Shelf<P> {
    pub fn new(projector: P) -> Self {
        Self {
            store: CatalogStore::default(),
            projector,
            bound_units: 0,
        }
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn projector(&self) -> &P {
        &self.projector
    }

    /// Length of the display binding: how many visual units were
    /// materialized at load time. Fixed for the rest of the session.
    pub fn bound_units(&self) -> usize {
        self.bound_units
    }

    pub fn snapshot(&self) -> Vec<Product> {
        self.store.snapshot()
    }

    /// One-time entry point invoked by the host once collaborators are
    /// wired: loads the store and materializes one visual unit per record,
    /// in sequence order. An empty load creates no units.
    pub fn initialize(&mut self, records: Vec<Product>) -> Result<LoadOutcome> {
        let outcome = self.store.load(records);
        if let LoadOutcome::Loaded(count) = outcome {
            for index in 0..count {
                let product = self.store.get(index)?;
                self.projector.materialize(index, product)?;
            }
            self.bound_units = count;
            info!(products = count, "catalog loaded");
        }
        Ok(outcome)
    }

    /// Applies an update; when it lands, refreshes exactly the affected
    /// unit's name and price labels. The description label is never touched
    /// by an edit, and other units are never refreshed.
    pub fn update(&mut self, index: usize, update: ProductUpdate) -> UpdateOutcome {
        let outcome = self.store.update(index, update);
        if outcome == UpdateOutcome::Applied
            && let Ok(record) = self.store.get(index)
        {
            self.projector.set_name(index, &record.name);
            self.projector
                .set_price(index, PriceLabel::Amount(record.price));
            info!(index, name = %record.name, price = record.price, "product updated");
        }
        outcome
    }
}

/// Seed catalog for offline demo runs.
pub fn demo_catalog() -> Vec<Product> {
    vec![
        Product::new("Mug", "Ceramic, 350 ml", 9.5),
        Product::new("Desk Lamp", "Matte black, USB-C", 24.0),
        Product::new("Notebook", "Dotted, A5", 6.25),
    ]
}

#[cfg(test)]
mod tests {
    use super::{CatalogStore, LoadOutcome, ProductUpdate, UpdateOutcome, demo_catalog};
    use vitrina_app::Product;

    #[test]
    fn load_empty_input_leaves_store_empty() {
        let mut store = CatalogStore::default();
        assert_eq!(store.load(Vec::new()), LoadOutcome::Empty);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn load_replaces_catalog_and_reports_count() {
        let mut store = CatalogStore::default();
        assert_eq!(store.load(demo_catalog()), LoadOutcome::Loaded(3));
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(0).expect("product 0").name, "Mug");
    }

    #[test]
    fn get_out_of_range_names_the_bounds() {
        let mut store = CatalogStore::default();
        store.load(demo_catalog());

        let error = store.get(3).expect_err("index 3 should be out of range");
        let message = error.to_string();
        assert!(message.contains("index 3"));
        assert!(message.contains("3 products"));
    }

    #[test]
    fn field_update_leaves_description_untouched() {
        let mut store = CatalogStore::default();
        store.load(demo_catalog());

        let outcome = store.update(
            0,
            ProductUpdate::Fields {
                name: "Mug XL".to_owned(),
                price: 12.0,
            },
        );
        assert_eq!(outcome, UpdateOutcome::Applied);

        let product = store.get(0).expect("product 0");
        assert_eq!(product.name, "Mug XL");
        assert_eq!(product.price, 12.0);
        assert_eq!(product.description, "Ceramic, 350 ml");
    }

    #[test]
    fn full_update_replaces_the_record() {
        let mut store = CatalogStore::default();
        store.load(demo_catalog());

        let replacement = Product::new("Tumbler", "Steel, 500 ml", 18.75);
        store.update(1, ProductUpdate::Full(replacement.clone()));
        assert_eq!(store.get(1).expect("product 1"), &replacement);
    }

    #[test]
    fn out_of_range_update_is_a_no_op() {
        let mut store = CatalogStore::default();
        store.load(demo_catalog());
        let before = store.snapshot();

        let outcome = store.update(
            9,
            ProductUpdate::Fields {
                name: "ghost".to_owned(),
                price: 1.0,
            },
        );
        assert_eq!(outcome, UpdateOutcome::Stale);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn snapshot_is_a_copy() {
        let mut store = CatalogStore::default();
        store.load(demo_catalog());

        let mut snapshot = store.snapshot();
        snapshot[0].name = "scribbled".to_owned();
        assert_eq!(store.get(0).expect("product 0").name, "Mug");
    }
}
