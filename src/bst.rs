//! An unbalanced binary search tree storing one value per comparator
//! equivalence class.
//!
//! The tree keeps values in the order induced by its [`Comparator`];
//! equal-comparing values occupy a single slot, so this is a set, not a
//! multiset. Operations cost `O(height)`, which degenerates to `O(n)`
//! for adversarial insertion orders; use [`crate::rbt::Tree`] when a
//! logarithmic worst case matters.
//!
//! # Examples
//!
//! ```
//! use ordset::bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // A second insert of an equal value is rejected.
//! assert!(!tree.insert(1));
//!
//! assert!(tree.remove(&1));
//! assert_eq!(tree.find(&1), None);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::cmp::{Ascend, Comparator};
use crate::iter as engines;
use crate::node::RawTree;

/// A binary search tree ordered by a caller-supplied comparator.
///
/// `C` defaults to [`Ascend`], the natural order of `T`.
pub struct Tree<T, C = Ascend> {
    raw: RawTree<T, ()>,
    cmp: C,
}

// SAFETY: the node graph is exclusively owned by the tree, so the usual
// collection bounds apply.
unsafe impl<T: Send, C: Send> Send for Tree<T, C> {}
// SAFETY: shared access only ever reads the node graph.
unsafe impl<T: Sync, C: Sync> Sync for Tree<T, C> {}

impl<T, C> Tree<T, C>
where
    C: Comparator<T>,
{
    /// Generates a new, empty tree ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordset::bst::Tree;
    ///
    /// let mut by_len = Tree::with_cmp(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// by_len.insert("toad");
    /// assert!(!by_len.insert("newt")); // same length: equal under this order
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        Tree {
            raw: RawTree::new(),
            cmp,
        }
    }

    /// Builds a tree ordered by `cmp` by inserting each element of
    /// `iter` in iteration order. Equal-comparing elements after the
    /// first are dropped.
    ///
    /// Feeding another tree's iterator through this reorders its values
    /// under a new comparator:
    ///
    /// ```
    /// use ordset::bst::Tree;
    ///
    /// let ascending: Tree<i32> = [2, 1, 3].into_iter().collect();
    /// let descending = Tree::from_iter_with(|a: &i32, b: &i32| b.cmp(a), ascending);
    /// assert_eq!(descending.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn from_iter_with<I>(cmp: C, iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = Tree::with_cmp(cmp);
        tree.extend(iter);
        tree
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.raw.len
    }

    /// Whether the tree stores nothing.
    pub fn is_empty(&self) -> bool {
        self.raw.len == 0
    }

    /// Potentially finds the stored value comparing equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordset::bst::Tree;
    ///
    /// let tree: Tree<i32> = [1, 2].into_iter().collect();
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&T> {
        self.raw
            .find(&self.cmp, value)
            // SAFETY: the node lives as long as this borrow of the tree.
            .map(|ptr| unsafe { &(*ptr.as_ptr()).value })
    }

    /// Whether a value comparing equal to `value` is stored.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Inserts `value`, returning whether the tree changed. An insert of
    /// a value equal to one already stored returns `false` and leaves
    /// the stored value in place.
    pub fn insert(&mut self, value: T) -> bool {
        self.raw.insert(&self.cmp, value, ()).is_some()
    }

    /// Removes the value comparing equal to `value`, returning whether
    /// the tree changed.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.raw.find(&self.cmp, value) {
            Some(node) => {
                self.raw.splice(node);
                true
            }
            None => false,
        }
    }

    /// The least stored value under the comparator.
    pub fn min(&self) -> Option<&T> {
        // SAFETY: the node lives as long as this borrow of the tree.
        self.raw.min().map(|ptr| unsafe { &(*ptr.as_ptr()).value })
    }

    /// The greatest stored value under the comparator.
    pub fn max(&self) -> Option<&T> {
        // SAFETY: the node lives as long as this borrow of the tree.
        self.raw.max().map(|ptr| unsafe { &(*ptr.as_ptr()).value })
    }

    /// Drops every stored value.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Visits values in comparator order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(engines::InOrder::new(&self.raw))
    }

    /// Visits values in reverse comparator order.
    pub fn iter_rev(&self) -> RevIter<'_, T> {
        RevIter(engines::RevOrder::new(&self.raw))
    }

    /// Visits each node before either of its subtrees.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder(engines::PreOrder::new(&self.raw))
    }

    /// Visits each node after both of its subtrees.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder(engines::PostOrder::new(&self.raw))
    }

    /// Visits values breadth first, shallower nodes before deeper ones.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder(engines::LevelOrder::new(&self.raw))
    }
}

impl<T: Ord> Tree<T, Ascend> {
    /// Generates a new, empty tree in natural ascending order.
    pub fn new() -> Self {
        Tree::with_cmp(Ascend)
    }
}

impl<T, C> Default for Tree<T, C>
where
    C: Comparator<T> + Default,
{
    fn default() -> Self {
        Tree::with_cmp(C::default())
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Comparator<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C> FromIterator<T> for Tree<T, C>
where
    C: Comparator<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Tree::from_iter_with(C::default(), iter)
    }
}

impl<T, C> Clone for Tree<T, C>
where
    T: Clone,
    C: Clone,
{
    /// Deep structural copy: same shape, same values, same comparator.
    fn clone(&self) -> Self {
        Tree {
            raw: self.raw.clone(),
            cmp: self.cmp.clone(),
        }
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
    C: Comparator<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C>
where
    C: Comparator<T>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, C> IntoIterator for Tree<T, C>
where
    C: Comparator<T>,
{
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding owned values in comparator order.
    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter(engines::IntoInOrder::new(self.raw.take()))
    }
}

macro_rules! borrowing_iterator {
    ($(#[$doc:meta])* $name:ident, $engine:ident) => {
        $(#[$doc])*
        pub struct $name<'a, T>(engines::$engine<'a, T, ()>);

        impl<'a, T> Iterator for $name<'a, T> {
            type Item = &'a T;

            fn next(&mut self) -> Option<&'a T> {
                self.0.next()
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.0.size_hint()
            }
        }

        impl<T> ExactSizeIterator for $name<'_, T> {}
        impl<T> FusedIterator for $name<'_, T> {}
    };
}

borrowing_iterator! {
    /// In-order iterator over a tree, created by [`Tree::iter`].
    Iter, InOrder
}
borrowing_iterator! {
    /// Reverse in-order iterator, created by [`Tree::iter_rev`].
    RevIter, RevOrder
}
borrowing_iterator! {
    /// Preorder iterator, created by [`Tree::pre_order`].
    PreOrder, PreOrder
}
borrowing_iterator! {
    /// Postorder iterator, created by [`Tree::post_order`].
    PostOrder, PostOrder
}
borrowing_iterator! {
    /// Level-order iterator, created by [`Tree::level_order`].
    LevelOrder, LevelOrder
}

/// Consuming in-order iterator, created by [`Tree::into_iter`].
pub struct IntoIter<T>(engines::IntoInOrder<T, ()>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
