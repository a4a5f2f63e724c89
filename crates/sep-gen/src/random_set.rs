use std::collections::HashMap;
use std::hash::Hash;

use rand::seq::SliceRandom;
use sep_core::rng::RngHandle;

/// Set with O(1) insert, remove and uniform choice.
///
/// Elements live in a dense vector; the map stores each element's slot so
/// removal can swap the last element into the hole.
#[derive(Debug, Clone)]
pub struct RandomSet<T> {
    items: Vec<T>,
    slots: HashMap<T, usize>,
}

impl<T> Default for RandomSet<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            slots: HashMap::new(),
        }
    }
}

impl<T> RandomSet<T>
where
    T: Eq + Hash + Clone,
{
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `item`; returns false if it was already present.
    pub fn insert(&mut self, item: T) -> bool {
        if self.slots.contains_key(&item) {
            return false;
        }
        self.slots.insert(item.clone(), self.items.len());
        self.items.push(item);
        true
    }

    /// Removes `item`; returns false if it was absent.
    pub fn remove(&mut self, item: &T) -> bool {
        let Some(slot) = self.slots.remove(item) else {
            return false;
        };
        self.items.swap_remove(slot);
        if let Some(moved) = self.items.get(slot) {
            self.slots.insert(moved.clone(), slot);
        }
        true
    }

    /// Whether `item` is present.
    pub fn contains(&self, item: &T) -> bool {
        self.slots.contains_key(item)
    }

    /// Uniformly random element, or `None` when empty.
    pub fn choose(&self, rng: &mut RngHandle) -> Option<&T> {
        self.items.choose(rng)
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Elements in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
