//! Container capabilities required by the item commands.
//!
//! [`AppendItem`](super::AppendItem) needs a sequence whose inverse of
//! "append" is "remove the last element"; [`AddItem`](super::AddItem) needs a
//! collection that can remove one specific item wherever it sits. Concrete
//! document containers either use the implementations below or provide a
//! small adapter (for instance a list that identifies items by id).

use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::Hash;

/// A sequence with `append` and its structural inverse `pop_last`.
pub trait Appendable<V> {
    /// Adds `item` at the end.
    fn append(&mut self, item: V);

    /// Removes and returns the last element, or `None` if empty.
    fn pop_last(&mut self) -> Option<V>;
}

impl<V> Appendable<V> for Vec<V> {
    fn append(&mut self, item: V) {
        self.push(item);
    }

    fn pop_last(&mut self) -> Option<V> {
        self.pop()
    }
}

impl<V> Appendable<V> for VecDeque<V> {
    fn append(&mut self, item: V) {
        self.push_back(item);
    }

    fn pop_last(&mut self) -> Option<V> {
        self.pop_back()
    }
}

/// A collection that can add an item and later remove that same item,
/// independent of its position.
pub trait ItemContainer<V> {
    /// Adds `item` to the collection.
    fn add_item(&mut self, item: V);

    /// Removes `item`. Returns `false` if it was not present.
    fn remove_item(&mut self, item: &V) -> bool;

    /// Returns `true` if `item` is present.
    fn contains_item(&self, item: &V) -> bool;
}

/// Removes the last element equal to the item, undoing the matching push.
impl<V: PartialEq> ItemContainer<V> for Vec<V> {
    fn add_item(&mut self, item: V) {
        self.push(item);
    }

    fn remove_item(&mut self, item: &V) -> bool {
        match self.iter().rposition(|existing| existing == item) {
            Some(index) => {
                self.remove(index);
                true
            }
            None => false,
        }
    }

    fn contains_item(&self, item: &V) -> bool {
        self.contains(item)
    }
}

impl<V: Eq + Hash> ItemContainer<V> for HashSet<V> {
    fn add_item(&mut self, item: V) {
        self.insert(item);
    }

    fn remove_item(&mut self, item: &V) -> bool {
        self.remove(item)
    }

    fn contains_item(&self, item: &V) -> bool {
        self.contains(item)
    }
}

impl<V: Ord> ItemContainer<V> for BTreeSet<V> {
    fn add_item(&mut self, item: V) {
        self.insert(item);
    }

    fn remove_item(&mut self, item: &V) -> bool {
        self.remove(item)
    }

    fn contains_item(&self, item: &V) -> bool {
        self.contains(item)
    }
}
