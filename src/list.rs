//! A singly linked list that keeps track of both ends, so values can be added at either end in
//! constant time. Removing from the tail still has to walk the whole list since nodes only know
//! their successor.
//!
//! # Examples
//!
//! ```
//! use data_structures::list::SinglyLinkedList;
//!
//! let mut list = SinglyLinkedList::new();
//!
//! list.insert_tail(1);
//! list.insert_tail(2);
//! list.insert_tail(3);
//! assert_eq!(list.search(&2), Some(1));
//!
//! assert_eq!(list.delete_head(), Ok(1));
//! assert_eq!(list.search(&1), None);
//! assert_eq!(list.len(), 2);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::arena::{Arena, NodeId};
use crate::error::{Error, Result};

/// A singly linked list with O(1) access to its head and tail.
#[derive(Clone)]
pub struct SinglyLinkedList<T> {
    nodes: Arena<Node<T>>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    size: usize,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for SinglyLinkedList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> SinglyLinkedList<T> {
    /// Generate a new, empty list.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
            size: 0,
        }
    }

    /// The number of values in the list.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The first value, if any.
    pub fn head(&self) -> Option<&T> {
        self.head.map(|id| &self.nodes[id].value)
    }

    /// The last value, if any.
    pub fn tail(&self) -> Option<&T> {
        self.tail.map(|id| &self.nodes[id].value)
    }

    /// Drops every value in the list.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.size = 0;
    }

    /// Adds a value in front of the current head.
    pub fn insert_head(&mut self, value: T) {
        let id = self.nodes.alloc(Node {
            value,
            next: self.head,
        });
        self.head = Some(id);
        if self.tail.is_none() {
            self.tail = Some(id);
        }
        self.size += 1;
        log::trace!("inserted head {id:?}, size is now {}", self.size);
    }

    /// Adds a value after the current tail.
    pub fn insert_tail(&mut self, value: T) {
        let id = self.nodes.alloc(Node { value, next: None });
        match self.tail {
            Some(old_tail) => self.nodes[old_tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.size += 1;
        log::trace!("inserted tail {id:?}, size is now {}", self.size);
    }

    /// Inserts a value so that it ends up at position `index`. Any index from `0` (the head) to
    /// [`len`][SinglyLinkedList::len] (after the tail) is valid.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] when `index` is greater than the length of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use data_structures::{list::SinglyLinkedList, Error};
    ///
    /// let mut list: SinglyLinkedList<_> = [1, 3].into_iter().collect();
    ///
    /// list.insert_at(1, 2).unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    ///
    /// assert_eq!(list.insert_at(4, 4), Err(Error::OutOfRange { index: 4, len: 3 }));
    /// ```
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.size {
            log::debug!("insert at {index} past length {}", self.size);
            return Err(Error::OutOfRange {
                index,
                len: self.size,
            });
        }
        if index == 0 {
            self.insert_head(value);
            return Ok(());
        }
        if index == self.size {
            self.insert_tail(value);
            return Ok(());
        }

        let prev = self.node_at(index - 1);
        let id = self.nodes.alloc(Node {
            value,
            next: self.nodes[prev].next,
        });
        self.nodes[prev].next = Some(id);
        self.size += 1;
        log::trace!("inserted {id:?} at {index}, size is now {}", self.size);
        Ok(())
    }

    /// Removes the head and returns its value.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] when there's nothing to remove.
    pub fn delete_head(&mut self) -> Result<T> {
        let Some(head) = self.head else {
            log::debug!("delete head on empty list");
            return Err(Error::Empty);
        };

        let node = self.nodes.free(head);
        self.head = node.next;
        // Removing from the front only moves the tail when nothing is left.
        if self.head.is_none() {
            self.tail = None;
        }
        self.size -= 1;
        debug_assert_eq!(self.nodes.len(), self.size);
        log::trace!("removed head {head:?}, size is now {}", self.size);
        Ok(node.value)
    }

    /// Removes the tail and returns its value. This walks the list to find the new tail.
    ///
    /// # Errors
    ///
    /// [`Error::Empty`] when there's nothing to remove.
    pub fn delete_tail(&mut self) -> Result<T> {
        let Some(tail) = self.tail else {
            log::debug!("delete tail on empty list");
            return Err(Error::Empty);
        };
        if self.head == Some(tail) {
            return self.delete_head();
        }

        let mut prev = self.head;
        while let Some(id) = prev {
            if self.nodes[id].next == Some(tail) {
                return Ok(self.remove_after(id));
            }
            prev = self.nodes[id].next;
        }
        unreachable!("Tail {tail:?} is not linked from the head.");
    }

    /// Removes the first value equal to `value` and returns it.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when no value in the list is equal to `value`. The list is left as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use data_structures::{list::SinglyLinkedList, Error};
    ///
    /// let mut list: SinglyLinkedList<_> = [1, 2, 1].into_iter().collect();
    ///
    /// assert_eq!(list.delete(&1), Ok(1));
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [2, 1]);
    /// assert_eq!(list.delete(&3), Err(Error::NotFound));
    /// ```
    pub fn delete(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq,
    {
        let Some(head) = self.head else {
            log::debug!("delete on empty list");
            return Err(Error::NotFound);
        };
        if self.nodes[head].value == *value {
            return self.delete_head();
        }

        let mut prev = head;
        while let Some(current) = self.nodes[prev].next {
            if self.nodes[current].value == *value {
                return Ok(self.remove_after(prev));
            }
            prev = current;
        }

        log::debug!("delete missed, size stays {}", self.size);
        Err(Error::NotFound)
    }

    /// The position of the first value equal to `value`, counting from the head at `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use data_structures::list::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<_> = ["a", "b", "a"].into_iter().collect();
    ///
    /// assert_eq!(list.search(&"a"), Some(0));
    /// assert_eq!(list.search(&"b"), Some(1));
    /// assert_eq!(list.search(&"c"), None);
    /// ```
    pub fn search(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|v| v == value)
    }

    /// A front to back iterator over the values of the list.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.size,
        }
    }

    /// Walks `index` links from the head. The caller guarantees `index < len`.
    fn node_at(&self, index: usize) -> NodeId {
        let mut id = self.head.expect("Walking an empty list.");
        for _ in 0..index {
            id = self.nodes[id].next.expect("Walking past the tail.");
        }
        id
    }

    /// Unlinks and frees the node following `prev`, which must exist. If that node was the tail,
    /// `prev` becomes the tail.
    fn remove_after(&mut self, prev: NodeId) -> T {
        let Some(removed) = self.nodes[prev].next else {
            unreachable!("Node {prev:?} has no successor to remove.");
        };

        let node = self.nodes.free(removed);
        self.nodes[prev].next = node.next;
        if self.tail == Some(removed) {
            self.tail = Some(prev);
        }
        self.size -= 1;
        debug_assert_eq!(self.nodes.len(), self.size);
        log::trace!("removed {removed:?} after {prev:?}, size is now {}", self.size);
        node.value
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_tail(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front to back iterator over a [`SinglyLinkedList`], created by [`SinglyLinkedList::iter`].
pub struct Iter<'a, T> {
    list: &'a SinglyLinkedList<T>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.list.nodes[self.next?];
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[derive(Clone)]
struct Node<T> {
    value: T,
    next: Option<NodeId>,
}

#[cfg(test)]
impl<T> SinglyLinkedList<T> {
    /// Panics unless walking from the head ends at the tail after exactly `len` nodes.
    pub(crate) fn assert_invariants(&self) {
        let mut steps = 0;
        let mut last = None;
        let mut current = self.head;
        while let Some(id) = current {
            steps += 1;
            last = Some(id);
            current = self.nodes[id].next;
        }
        assert_eq!(steps, self.size, "chain length differs from size");
        assert_eq!(last, self.tail, "chain doesn't end at the tail");
        assert_eq!(self.nodes.len(), self.size, "arena holds unlinked nodes");
    }
}
