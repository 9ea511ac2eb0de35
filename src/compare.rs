//! Total-order comparison strategies for [`TreeSet`][crate::set::TreeSet].
//!
//! A tree decides where values live by asking a [`Comparator`] rather than
//! calling [`Ord::cmp`] directly. [`Natural`] is the default strategy and
//! simply delegates to [`Ord`]; [`FnComparator`] adapts any comparison
//! closure, so element types can be ordered differently per tree (or ordered
//! at all, when they have no [`Ord`] impl).
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//!
//! use ordset::compare::{Comparator, FnComparator, Natural};
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//!
//! let by_length = FnComparator(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! assert_eq!(by_length.compare(&"tree", &"set"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over values of type `T`.
///
/// Implementations must be consistent: for any `a` and `b`, exactly one of
/// `Less`, `Equal`, and `Greater` is returned, and the relation is
/// transitive. A comparator that violates this produces a tree with an
/// unspecified shape and unspecified query results (but never memory
/// unsafety); the contract is not checked at runtime.
pub trait Comparator<T> {
    /// Compares two values, returning where `a` sits relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The natural ordering of the element type, via its [`Ord`] impl.
///
/// This is the strategy used by [`TreeSet::new`][crate::set::TreeSet::new].
#[derive(Clone, Copy, Debug, Default)]
pub struct Natural;

impl<T: Ord> Comparator<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Adapts a plain comparison function into a [`Comparator`].
///
/// # Examples
///
/// ```
/// use ordset::compare::FnComparator;
/// use ordset::set::TreeSet;
///
/// let mut tree = TreeSet::with_comparator(FnComparator(|a: &i32, b: &i32| b.cmp(a)));
/// tree.insert(1);
/// tree.insert(3);
/// tree.insert(2);
///
/// // The traversal follows the injected order, so it runs high to low.
/// assert_eq!(tree.in_order(), vec![&3, &2, &1]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnComparator<F>(
    /// The comparison function to delegate to.
    pub F,
);

impl<T, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}
