//! This crate exposes an ordered set backed by a Binary Search Tree (BST)
//! with a pluggable comparison strategy.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.
//!
//! The set in this crate stores each value at most once: inserting a value
//! that compares equal to a stored one leaves the tree untouched. "Equal" is
//! decided by the comparator the tree was built with, which is the natural
//! [`Ord`] order by default or any total order injected at construction
//! through [`compare::Comparator`]. The tree performs no rebalancing, so its height
//! ranges from `O(lg N)` for well-shuffled input down to `N - 1` when values
//! arrive already sorted.

#![deny(missing_docs)]

pub mod compare;
pub mod set;
