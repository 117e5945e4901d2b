//! # Shopping List
//!
//! Shopping items are created by manual entry, by applying a template, or by the
//! meal-plan aggregator. Items are identified by id only; adding the same grocery twice
//! by hand produces two entries.

use chrono::Utc;
use log::{debug, warn};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

use crate::categories::OTHER;
use crate::catalog::TemplateItem;

/// Quantity text used when a manual entry leaves the quantity blank
pub const DEFAULT_MANUAL_QUANTITY: &str = "1 unit";

/// One line of the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    /// Older lists stored fractional ids; those are truncated on read
    #[serde(deserialize_with = "deserialize_id")]
    pub id: u64,
    pub name: String,
    /// Free text such as "2 kg" or "600g"
    pub quantity: String,
    pub category: String,
    pub checked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgent: Option<bool>,
}

/// An item before it has been given an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewShoppingItem {
    pub name: String,
    pub quantity: String,
    pub category: String,
    pub checked: bool,
    pub price: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredId {
    Whole(u64),
    Fractional(f64),
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(match StoredId::deserialize(deserializer)? {
        StoredId::Whole(id) => id,
        // `as` saturates, so negative values become 0
        StoredId::Fractional(id) => id.trunc() as u64,
    })
}

/// Millisecond-timestamp ids that never repeat within one generator
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

/// Progress and cost figures for the list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShoppingStats {
    pub total_items: usize,
    pub checked_items: usize,
    /// 0 to 100
    pub progress_percent: f64,
    pub total_cost: f64,
    pub checked_cost: f64,
}

/// The user's shopping list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl NewShoppingItem {
    pub fn new(name: &str, quantity: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: quantity.to_string(),
            category: category.to_string(),
            checked: false,
            price: None,
        }
    }

    /// Build an item from the manual entry form.
    ///
    /// Returns `None` for a blank name. A blank quantity becomes
    /// [`DEFAULT_MANUAL_QUANTITY`] and a missing category becomes "Other".
    pub fn manual(name: &str, quantity: Option<&str>, category: Option<&str>) -> Option<Self> {
        if name.trim().is_empty() {
            return None;
        }
        let quantity = quantity
            .filter(|q| !q.is_empty())
            .unwrap_or(DEFAULT_MANUAL_QUANTITY);
        Some(Self::new(name, quantity, category.unwrap_or(OTHER)))
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn into_item(self, id: u64) -> ShoppingItem {
        ShoppingItem {
            id,
            name: self.name,
            quantity: self.quantity,
            category: self.category,
            checked: self.checked,
            price: self.price,
            urgent: None,
        }
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current millisecond timestamp, bumped past any id handed out before
    ///
    /// After `u64::MAX` has been handed out the sequence restarts at the current time.
    pub fn next_id(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last = match self.last.checked_add(1) {
            Some(next) => now.max(next),
            None => {
                warn!("Shopping item ids exhausted, restarting from the current time");
                now
            }
        };
        self.last
    }

    /// Make sure future ids stay above an id created elsewhere
    pub fn observe(&mut self, id: u64) {
        self.last = self.last.max(id);
    }
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<ShoppingItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&ShoppingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Append an item, returning its id
    pub fn add(&mut self, item: NewShoppingItem, ids: &mut IdGenerator) -> u64 {
        let mut id = ids.next_id();
        while self.get(id).is_some() {
            id = ids.next_id();
        }
        debug!("Adding shopping item {:?} with id {}", item.name, id);
        self.items.push(item.into_item(id));
        id
    }

    /// Flip the checked flag. Returns `false` when no item has that id.
    pub fn toggle(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.checked = !item.checked;
                true
            }
            None => false,
        }
    }

    /// Remove an item. Returns `false` when no item has that id.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Remove checked items, returning how many were removed
    pub fn clear_checked(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.checked);
        before - self.items.len()
    }

    /// Give fresh ids to items whose id is already taken by an earlier item.
    /// Returns how many items were renumbered.
    pub fn reassign_duplicate_ids(&mut self, ids: &mut IdGenerator) -> usize {
        let mut seen: HashSet<u64> = self.items.iter().map(|item| item.id).collect();
        if seen.len() == self.items.len() {
            return 0;
        }

        seen.clear();
        let mut reassigned = 0;
        for i in 0..self.items.len() {
            if seen.insert(self.items[i].id) {
                continue;
            }
            let mut id = ids.next_id();
            while self.items.iter().any(|item| item.id == id) {
                id = ids.next_id();
            }
            debug!("Renumbering shopping item {} to {}", self.items[i].id, id);
            self.items[i].id = id;
            seen.insert(id);
            reassigned += 1;
        }
        reassigned
    }

    /// Swap in a whole new list. Nothing from the old list is kept.
    pub fn replace(&mut self, items: Vec<ShoppingItem>) {
        self.items = items;
    }

    /// Replace the list with a template's items
    pub fn apply_template(&mut self, template: &[TemplateItem], ids: &mut IdGenerator) {
        let items = template
            .iter()
            .map(|t| NewShoppingItem::new(t.name, t.quantity, t.category).into_item(ids.next_id()))
            .collect();
        self.replace(items);
    }

    /// Items matching a category ("All" matches every category) and a name search
    pub fn filtered(&self, category: &str, query: &str) -> Vec<&ShoppingItem> {
        let query = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| category == "All" || item.category == category)
            .filter(|item| query.is_empty() || item.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Items grouped by category, groups in order of first appearance
    pub fn grouped_by_category(&self) -> Vec<(&str, Vec<&ShoppingItem>)> {
        let mut groups: Vec<(&str, Vec<&ShoppingItem>)> = Vec::new();
        for item in &self.items {
            match groups.iter().position(|(c, _)| *c == item.category) {
                Some(index) => groups[index].1.push(item),
                None => groups.push((item.category.as_str(), vec![item])),
            }
        }
        groups
    }

    pub fn stats(&self) -> ShoppingStats {
        let total_items = self.items.len();
        let checked_items = self.items.iter().filter(|i| i.checked).count();
        let progress_percent = if total_items > 0 {
            checked_items as f64 / total_items as f64 * 100.0
        } else {
            0.0
        };
        let total_cost = self.items.iter().filter_map(|i| i.price).sum();
        let checked_cost = self
            .items
            .iter()
            .filter(|i| i.checked)
            .filter_map(|i| i.price)
            .sum();

        ShoppingStats {
            total_items,
            checked_items,
            progress_percent,
            total_cost,
            checked_cost,
        }
    }
}
