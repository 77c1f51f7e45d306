//! List State
//!
//! `BucketList` is the single source of truth for the view. It only changes
//! through a `Change`, and a `Change` only comes out of a successful gateway
//! call (see `actions`). There are no optimistic updates.

pub mod actions;

use crate::domain::{Item, ItemId};

/// A server-confirmed mutation of the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// The server's collection replaces the local one
    Replaced(Vec<Item>),
    /// A newly created item goes to the end
    Appended(Item),
    CompletedSet { id: ItemId, completed: bool },
    Removed(ItemId),
}

/// Ordered collection of bucket-list items
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketList {
    items: Vec<Item>,
}

impl BucketList {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    pub fn apply(&mut self, change: Change) {
        match change {
            Change::Replaced(items) => self.items = items,
            Change::Appended(item) => self.items.push(item),
            Change::CompletedSet { id, completed } => {
                // Ids are not de-duplicated, so every match is updated
                self.items
                    .iter_mut()
                    .filter(|item| item.id == id)
                    .for_each(|item| item.completed = completed);
            }
            Change::Removed(id) => self.items.retain(|item| item.id != id),
        }
    }
}
