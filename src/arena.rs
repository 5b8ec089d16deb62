//! Index-addressed node storage shared by the [`Tree`][crate::tree::Tree] and the
//! [`SinglyLinkedList`][crate::list::SinglyLinkedList].
//!
//! Nodes live in a `Vec` of slots and refer to each other by [`NodeId`]. A link held in a node is
//! "owning" in the sense that the structure frees the slot when it unlinks the node, while a copy
//! of the same id (e.g. a tree node's parent) is only used for navigation. Freed slots go on a
//! LIFO free list and are handed out again by the next [`Arena::alloc`].

use std::fmt;
use std::ops::{Index, IndexMut};

/// The position of a node inside an [`Arena`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

enum Slot<N> {
    Occupied(N),
    Vacant,
}

pub(crate) struct Arena<N> {
    slots: Vec<Slot<N>>,
    /// Vacant slot indices. The last one is reused first.
    free: Vec<usize>,
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Clone> Clone for Arena<N> {
    fn clone(&self) -> Self {
        let slots = self
            .slots
            .iter()
            .map(|slot| match slot {
                Slot::Occupied(node) => Slot::Occupied(node.clone()),
                Slot::Vacant => Slot::Vacant,
            })
            .collect();
        Self {
            slots,
            free: self.free.clone(),
        }
    }
}

impl<N> Arena<N> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Stores `node` and returns the id it can be reached by.
    pub(crate) fn alloc(&mut self, node: N) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                self.slots[index] = Slot::Occupied(node);
                NodeId(index)
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Removes the node stored at `id` and returns it. The slot will be reused.
    ///
    /// ## Panics
    ///
    /// When `id` doesn't name a live node.
    pub(crate) fn free(&mut self, id: NodeId) -> N {
        match std::mem::replace(&mut self.slots[id.0], Slot::Vacant) {
            Slot::Occupied(node) => {
                self.free.push(id.0);
                node
            }
            Slot::Vacant => panic!("Freeing vacant slot {id:?}."),
        }
    }

    /// Number of live nodes.
    pub(crate) fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
    }
}

impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &N {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant => panic!("Dangling node id {id:?}."),
        }
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant => panic!("Dangling node id {id:?}."),
        }
    }
}
