// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::model::{Feedback, Product, format_price, format_price_input, parse_price};

/// Lifecycle of one editable slot. Dirty states are entered on submit, not
/// while typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotPhase {
    Hidden,
    Clean,
    DirtyValid,
    DirtyInvalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Price,
}

/// One edit-form position, 1:1 with a catalog index. Display fields mirror
/// the catalog; input fields hold whatever the user typed last.
#[derive(Debug, Clone, PartialEq)]
pub struct EditSlot {
    pub phase: SlotPhase,
    pub name_label: String,
    pub price_label: String,
    pub name_input: String,
    pub price_input: String,
}

/// What the host should do with a submit.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    Apply {
        index: usize,
        name: String,
        price: f64,
    },
    Rejected,
}

/// The product modification panel: a fixed set of slots plus the shared
/// feedback sink. Pure state; the host applies `Apply` actions against the
/// catalog and reports back via [`EditPanel::confirm_applied`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditPanel {
    visible: bool,
    slots: Vec<EditSlot>,
    feedback: Option<Feedback>,
}

impl EditPanel {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn slots(&self) -> &[EditSlot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&EditSlot> {
        self.slots.get(index)
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    pub fn set_feedback(&mut self, feedback: Feedback) {
        self.feedback = Some(feedback);
    }

    /// Shows or hides the panel. Opening re-reads the full catalog snapshot
    /// and repopulates every slot from it.
    pub fn toggle(&mut self, snapshot: &[Product]) {
        self.visible = !self.visible;
        if self.visible {
            self.populate(snapshot);
            self.feedback = Some(Feedback::info("Modify products shown on the shelf."));
        } else {
            for slot in &mut self.slots {
                slot.phase = SlotPhase::Hidden;
            }
        }
    }

    /// Rebuilds every slot's display and input fields from the snapshot.
    /// This is a full refresh, never incremental.
    pub fn populate(&mut self, snapshot: &[Product]) {
        if snapshot.is_empty() {
            self.slots.clear();
            self.feedback = Some(Feedback::error("No products available."));
            return;
        }

        let phase = if self.visible {
            SlotPhase::Clean
        } else {
            SlotPhase::Hidden
        };
        self.slots = snapshot
            .iter()
            .map(|product| EditSlot {
                phase,
                name_label: product.name.clone(),
                price_label: format_price(product.price),
                name_input: product.name.clone(),
                price_input: format_price_input(product.price),
            })
            .collect();
    }

    pub fn push_input(&mut self, index: usize, field: EditField, ch: char) {
        if let Some(slot) = self.slots.get_mut(index) {
            match field {
                EditField::Name => slot.name_input.push(ch),
                EditField::Price => slot.price_input.push(ch),
            }
        }
    }

    pub fn pop_input(&mut self, index: usize, field: EditField) {
        if let Some(slot) = self.slots.get_mut(index) {
            match field {
                EditField::Name => slot.name_input.pop(),
                EditField::Price => slot.price_input.pop(),
            };
        }
    }

    /// Reads the slot's inputs: name text verbatim, price text parsed as a
    /// non-localized float. A parse failure surfaces feedback and mutates
    /// nothing; a submit for a slot that no longer exists is dropped.
    pub fn submit(&mut self, index: usize) -> SubmitAction {
        let Some(slot) = self.slots.get_mut(index) else {
            return SubmitAction::Rejected;
        };

        match parse_price(&slot.price_input) {
            Some(price) => {
                slot.phase = SlotPhase::DirtyValid;
                SubmitAction::Apply {
                    index,
                    name: slot.name_input.clone(),
                    price,
                }
            }
            None => {
                slot.phase = SlotPhase::DirtyInvalid;
                self.feedback = Some(Feedback::error("Invalid price entered."));
                SubmitAction::Rejected
            }
        }
    }

    /// Called after the host applied an edit. Every slot re-renders from the
    /// post-update snapshot, not just the one that was submitted.
    pub fn confirm_applied(&mut self, snapshot: &[Product]) {
        self.populate(snapshot);
        self.feedback = Some(Feedback::success("Product updated!"));
    }
}
