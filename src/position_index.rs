//! Value-to-slot index for the indexed heap
//!
//! [`PositionIndex`] maps each distinct value to the sorted set of array slots
//! currently holding an equal value. The heap keeps it in lockstep with its
//! array so that a value can be found in O(1) expected time.
//!
//! Slot sets are stored as sorted [`SmallVec`]s. Almost every value lives in
//! one or two slots, so the common case needs no allocation beyond the map
//! entry itself.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use smallvec::SmallVec;

/// Sorted set of heap slots, smallest first
pub(crate) type PositionSet = SmallVec<[usize; 2]>;

/// Multimap from value to the slots holding it
#[derive(Debug, Clone)]
pub(crate) struct PositionIndex<T, S> {
    slots: HashMap<T, PositionSet, S>,
}

impl<T, S> PositionIndex<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    pub(crate) fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            slots: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    pub(crate) fn hasher(&self) -> &S {
        self.slots.hasher()
    }

    /// Records that `slot` now holds `value`
    pub(crate) fn insert(&mut self, value: T, slot: usize) {
        let set = self.slots.entry(value).or_default();
        if let Err(at) = set.binary_search(&slot) {
            set.insert(at, slot);
        }
    }

    /// Forgets that `slot` holds `value`, dropping the entry once no slot is left
    pub(crate) fn remove<Q>(&mut self, value: &Q, slot: usize)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(set) = self.slots.get_mut(value) else {
            return;
        };
        if let Ok(at) = set.binary_search(&slot) {
            set.remove(at);
        }
        if set.is_empty() {
            self.slots.remove(value);
        }
    }

    /// Moves one occurrence of `value` from slot `from` to slot `to`
    pub(crate) fn relocate<Q>(&mut self, value: &Q, from: usize, to: usize)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if from == to {
            return;
        }
        if let Some(set) = self.slots.get_mut(value) {
            if let Ok(at) = set.binary_search(&from) {
                set.remove(at);
            }
            if let Err(at) = set.binary_search(&to) {
                set.insert(at, to);
            }
        }
    }

    /// Smallest slot holding `value`
    pub(crate) fn first<Q>(&self, value: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.get(value).and_then(|set| set.first().copied())
    }

    pub(crate) fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.get(value).map_or(0, |set| set.len())
    }

    pub(crate) fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.contains_key(value)
    }

    /// Slots recorded for `value`, in ascending order
    pub(crate) fn slots_of<Q>(&self, value: &Q) -> &[usize]
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.get(value).map_or(&[], |set| set.as_slice())
    }

    /// Total number of slots recorded across all values
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.values().map(|set| set.len()).sum()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.slots.shrink_to_fit();
    }
}
