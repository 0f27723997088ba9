use std::mem;

use derive_more::IsVariant;

use super::Vector;

/// Index-addressed storage for linked nodes. Released slots are chained into a free list and
/// reused by later allocations, so an index is only meaningful while its slot stays occupied.
#[derive(Debug, Clone)]
pub(crate) struct Arena<N> {
    pub slots: Vector<Slot<N>>,
    pub free: Option<usize>,
    pub len: usize,
}

#[derive(Debug, Clone, IsVariant)]
pub(crate) enum Slot<N> {
    Occupied(N),
    Vacant { next_free: Option<usize> },
}

impl<N> Arena<N> {
    pub fn new() -> Arena<N> {
        Arena {
            slots: Vector::new(),
            free: None,
            len: 0,
        }
    }

    pub fn get(&self, index: usize) -> Option<&N> {
        match self.slots.try_get(index).ok()? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut N> {
        match self.slots.try_get_mut(index).ok()? {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    /// Stores `node`, reusing the most recently released slot if there is one.
    pub fn alloc(&mut self, node: N) -> usize {
        self.len += 1;

        match self.free {
            Some(index) => {
                let slot = self.slots.get_mut(index);
                if let Slot::Vacant { next_free } = *slot {
                    self.free = next_free;
                }
                *slot = Slot::Occupied(node);
                index
            },
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            },
        }
    }

    /// Vacates the slot at `index`, returning the node it held. Returns [`None`] if the slot is
    /// already vacant or doesn't exist.
    pub fn release(&mut self, index: usize) -> Option<N> {
        let slot = self.slots.try_get_mut(index).ok()?;
        if slot.is_vacant() {
            return None;
        }

        let old = mem::replace(slot, Slot::Vacant { next_free: self.free });
        self.free = Some(index);
        self.len -= 1;

        match old {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        }
    }

    /// Drops every node and forgets the free list, so the next allocations are numbered from 0.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }

    pub fn iter(&self) -> impl Iterator<Item = &N> {
        self.slots.iter().filter_map(|slot| match slot {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut N> {
        self.slots.iter_mut().filter_map(|slot| match slot {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        })
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Arena::new()
    }
}
