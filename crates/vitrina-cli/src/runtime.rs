// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use vitrina_app::Product;
use vitrina_catalog::{ProductUpdate, Shelf, UpdateOutcome};
use vitrina_tui::{AppRuntime, ShelfUnit, TerminalShelf};

/// Bridges the TUI event loop onto the shelf: edits flow into the catalog
/// store, refreshed labels flow back out through the terminal projector.
pub struct ShelfRuntime {
    shelf: Shelf<TerminalShelf>,
}

impl ShelfRuntime {
    pub fn new(shelf: Shelf<TerminalShelf>) -> Self {
        Self { shelf }
    }
}

impl AppRuntime for ShelfRuntime {
    fn catalog_snapshot(&mut self) -> Vec<Product> {
        self.shelf.snapshot()
    }

    fn shelf_units(&mut self) -> Vec<ShelfUnit> {
        self.shelf.projector().units().to_vec()
    }

    fn apply_edit(&mut self, index: usize, name: &str, price: f64) -> Result<UpdateOutcome> {
        Ok(self.shelf.update(
            index,
            ProductUpdate::Fields {
                name: name.to_owned(),
                price,
            },
        ))
    }
}
