//! A plain, unbalanced Binary Search Tree. Nodes are kept in an [`Arena`] and link to their
//! children by id. Every node also remembers its parent, which is what lets [`Tree::iter`] walk
//! the tree in order without a stack.
//!
//! Values that compare equal are all kept: an equal value is always routed into the right
//! subtree of the node it ties with.
//!
//! # Examples
//!
//! ```
//! use data_structures::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! for value in [5, 3, 8, 1, 4] {
//!     tree.insert(value);
//! }
//! assert_eq!(tree.traverse(), [&1, &3, &4, &5, &8]);
//!
//! // Deleting a value returns it.
//! assert_eq!(tree.delete(&3), Some(3));
//! assert_eq!(tree.traverse(), [&1, &4, &5, &8]);
//! assert!(!tree.search(&3));
//! assert_eq!(tree.len(), 4);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use crate::arena::{Arena, NodeId};

/// An unbalanced Binary Search Tree of values. This can be used for inserting, searching and
/// deleting values as well as reading them back in sorted order.
#[derive(Clone)]
pub struct Tree<T> {
    nodes: Arena<Node<T>>,
    root: Option<NodeId>,
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            size: 0,
        }
    }

    /// Generate a `Tree` holding a single value at its root.
    ///
    /// # Examples
    ///
    /// ```
    /// use data_structures::tree::Tree;
    ///
    /// let tree = Tree::with_root(7);
    ///
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.find_minimum(), Some(&7));
    /// ```
    pub fn with_root(value: T) -> Self
    where
        T: Ord,
    {
        let mut tree = Self::new();
        tree.insert(value);
        tree
    }

    /// The number of values in the tree. Duplicates count once per insert.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Drops every value in the tree.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.size = 0;
    }

    /// Returns whether a value equal to `value` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use data_structures::tree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(tree.search(&1));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.search_from(self.root, value)
    }

    fn search_from(&self, node: Option<NodeId>, value: &T) -> bool
    where
        T: Ord,
    {
        let Some(id) = node else {
            return false;
        };
        let node = &self.nodes[id];
        match value.cmp(&node.value) {
            Ordering::Less => self.search_from(node.left, value),
            Ordering::Equal => true,
            Ordering::Greater => self.search_from(node.right, value),
        }
    }

    /// The smallest value in the tree, or `None` if it is empty.
    pub fn find_minimum(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[self.leftmost(root)].value)
    }

    /// The largest value in the tree, or `None` if it is empty. With duplicates of the largest
    /// value this is the one inserted last.
    pub fn find_maximum(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[self.rightmost(root)].value)
    }

    fn leftmost(&self, id: NodeId) -> NodeId {
        match self.nodes[id].left {
            Some(left) => self.leftmost(left),
            None => id,
        }
    }

    fn rightmost(&self, id: NodeId) -> NodeId {
        match self.nodes[id].right {
            Some(right) => self.rightmost(right),
            None => id,
        }
    }

    /// Collects every value in the tree in ascending order. A fresh `Vec` is built on each call;
    /// see [`Tree::iter`] for a lazy alternative.
    pub fn traverse(&self) -> Vec<&T> {
        let mut order = Vec::with_capacity(self.size);
        self.traverse_from(self.root, &mut order);
        order
    }

    fn traverse_from<'a>(&'a self, node: Option<NodeId>, order: &mut Vec<&'a T>) {
        if let Some(id) = node {
            let node = &self.nodes[id];
            self.traverse_from(node.left, order);
            order.push(&node.value);
            self.traverse_from(node.right, order);
        }
    }

    /// An in-order iterator over the values of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use data_structures::tree::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            tree: self,
            next: self.root.map(|root| self.leftmost(root)),
            remaining: self.size,
        }
    }

    /// The node visited right after `id` in order, found through the right subtree or, failing
    /// that, the first ancestor reached from its left side.
    fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self.nodes[id].right {
            return Some(self.leftmost(right));
        }

        let mut child = id;
        let mut parent = self.nodes[id].parent;
        while let Some(p) = parent {
            if self.nodes[p].left == Some(child) {
                return Some(p);
            }
            child = p;
            parent = self.nodes[p].parent;
        }
        None
    }

    /// Inserts the value into the tree. The size of the tree always grows by one, even when an
    /// equal value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use data_structures::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.traverse(), [&1, &1]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let root = self.insert_from(self.root, None, value);
        self.root = Some(root);
    }

    /// Inserts into the subtree rooted at `node` and returns the subtree's (possibly new) root.
    fn insert_from(&mut self, node: Option<NodeId>, parent: Option<NodeId>, value: T) -> NodeId
    where
        T: Ord,
    {
        let Some(id) = node else {
            let id = self.nodes.alloc(Node::new(value, parent));
            self.size += 1;
            log::trace!("inserted node {id:?} under {parent:?}, size is now {}", self.size);
            return id;
        };

        match value.cmp(&self.nodes[id].value) {
            Ordering::Less => {
                let left = self.insert_from(self.nodes[id].left, Some(id), value);
                self.nodes[id].left = Some(left);
            }
            Ordering::Equal | Ordering::Greater => {
                let right = self.insert_from(self.nodes[id].right, Some(id), value);
                self.nodes[id].right = Some(right);
            }
        }
        id
    }

    /// Deletes a value equal to `value` from the tree and returns it. If the tree does not
    /// contain such a value, nothing happens and `None` is returned.
    ///
    /// When equal values were inserted more than once, only the one closest to the root is
    /// removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use data_structures::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.delete(&2), None);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let result = match self.root {
            Some(root) => self.delete_from(root, value),
            None => DeleteResult::NotFound,
        };

        match result {
            DeleteResult::NotFound => {
                log::debug!("delete missed, size stays {}", self.size);
                None
            }
            DeleteResult::DeleteSelf { replacement, value } => {
                self.root = replacement;
                if let Some(new_root) = replacement {
                    self.nodes[new_root].parent = None;
                }
                Some(value)
            }
            DeleteResult::DeletedChild(value) => Some(value),
        }
    }

    fn delete_from(&mut self, id: NodeId, value: &T) -> DeleteResult<T>
    where
        T: Ord,
    {
        let node = &self.nodes[id];
        match value.cmp(&node.value) {
            Ordering::Less => match node.left {
                Some(left) => {
                    let result = self.delete_from(left, value);
                    self.relink(id, Side::Left, result)
                }
                None => DeleteResult::NotFound,
            },
            Ordering::Greater => match node.right {
                Some(right) => {
                    let result = self.delete_from(right, value);
                    self.relink(id, Side::Right, result)
                }
                None => DeleteResult::NotFound,
            },
            Ordering::Equal => match (node.left, node.right) {
                // With two children the in-order successor (the smallest value on the right)
                // takes this node's place. Removing the successor is what shrinks the tree.
                (Some(_), Some(right)) => {
                    let result = self.delete_leftmost(right);
                    let DeleteResult::DeletedChild(successor) =
                        self.relink(id, Side::Right, result)
                    else {
                        unreachable!("Non-empty subtree always has a leftmost node.");
                    };
                    DeleteResult::DeletedChild(mem::replace(&mut self.nodes[id].value, successor))
                }
                (child, None) | (None, child) => self.unlink(id, child),
            },
        }
    }

    /// Deletes the smallest node of the subtree rooted at `id`. That node never has a left child.
    fn delete_leftmost(&mut self, id: NodeId) -> DeleteResult<T> {
        match self.nodes[id].left {
            Some(left) => {
                let result = self.delete_leftmost(left);
                self.relink(id, Side::Left, result)
            }
            None => self.unlink(id, self.nodes[id].right),
        }
    }

    /// Frees a node with at most one child. `replacement` is that child and must be linked into
    /// the freed node's place by whoever receives the result.
    fn unlink(&mut self, id: NodeId, replacement: Option<NodeId>) -> DeleteResult<T> {
        let node = self.nodes.free(id);
        self.size -= 1;
        debug_assert_eq!(self.nodes.len(), self.size);
        log::trace!(
            "removed node {id:?}, promoted {replacement:?}, size is now {}",
            self.size
        );
        DeleteResult::DeleteSelf {
            replacement,
            value: node.value,
        }
    }

    /// Links the replacement carried by a `DeleteSelf` from the child on `side` of `parent`.
    fn relink(&mut self, parent: NodeId, side: Side, result: DeleteResult<T>) -> DeleteResult<T> {
        match result {
            DeleteResult::DeleteSelf { replacement, value } => {
                *self.nodes[parent].child_mut(side) = replacement;
                if let Some(child) = replacement {
                    self.nodes[child].parent = Some(parent);
                }
                DeleteResult::DeletedChild(value)
            }
            other => other,
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`Tree`], created by [`Tree::iter`].
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.tree.successor(id);
        self.remaining -= 1;
        Some(&self.tree.nodes[id].value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Outcome of deleting from a subtree, reported to the node one level up.
enum DeleteResult<T> {
    /// The value wasn't found so nothing was deleted.
    NotFound,
    /// The node returning this was removed. Its parent must adopt `replacement` (the removed
    /// node's only child, if any) in its place.
    DeleteSelf {
        replacement: Option<NodeId>,
        value: T,
    },
    /// A node further down was removed yielding `T`. Links above it are untouched.
    DeletedChild(T),
}

#[derive(Clone, Copy)]
enum Side {
    Left,
    Right,
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
    /// Never owns: only used to walk back up the tree.
    parent: Option<NodeId>,
}

impl<T> Node<T> {
    fn new(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
impl<T> Tree<T>
where
    T: Ord + fmt::Debug,
{
    /// Panics unless the ordering, parent links and size all agree.
    pub(crate) fn assert_invariants(&self) {
        let mut count = 0;
        if let Some(root) = self.root {
            assert_eq!(self.nodes[root].parent, None, "root has a parent");
            self.assert_subtree(root, None, None, &mut count);
        }
        assert_eq!(count, self.size, "reachable nodes differ from size");
        assert_eq!(self.nodes.len(), self.size, "arena holds unreachable nodes");
    }

    /// Values in the subtree must be `>= low` and `< high`.
    fn assert_subtree(&self, id: NodeId, low: Option<&T>, high: Option<&T>, count: &mut usize) {
        let node = &self.nodes[id];
        *count += 1;
        if let Some(low) = low {
            assert!(&node.value >= low, "{:?} is left of {low:?}", node.value);
        }
        if let Some(high) = high {
            assert!(&node.value < high, "{:?} is right of {high:?}", node.value);
        }
        if let Some(left) = node.left {
            assert_eq!(self.nodes[left].parent, Some(id));
            self.assert_subtree(left, low, Some(&node.value), count);
        }
        if let Some(right) = node.right {
            assert_eq!(self.nodes[right].parent, Some(id));
            self.assert_subtree(right, Some(&node.value), high, count);
        }
    }
}
