//! This crate exposes two classic data structures, mostly for
//! educational purposes: a Binary Search Tree and a singly linked list.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is the
//! longest path from the root `Node` to a leaf `Node`). The [`tree::Tree`] here
//! doesn't rebalance itself so inserting already sorted values makes its height
//! grow linearly. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! ## Singly Linked List
//!
//! A chain of `Node`s each pointing at the next one. [`list::SinglyLinkedList`]
//! remembers both its first and last `Node` so adding at either end is `O(1)`,
//! while anything positional walks from the head.
//!
//! Both structures keep their nodes in an arena and link them by index, so
//! there is no `unsafe` code and dropping a long list doesn't recurse.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
mod error;
pub mod list;
pub mod tree;


pub use error::{Error, Result};
