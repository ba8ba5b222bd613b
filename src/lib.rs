//! Ordered containers that sort by a caller-supplied comparator
//! instead of an [`Ord`] bound.
//!
//! ## Containers
//!
//! Three containers share one [`Comparator`] contract:
//!
//! * [`bst::Tree`]: a plain binary search tree. Simple, `O(height)`
//!   operations, no rebalancing: the insertion order decides the shape.
//! * [`rbt::Tree`]: a red-black tree with the same surface and a
//!   guaranteed `O(log n)` worst case. It runs on the same descent,
//!   splice, and rotation machinery as the plain tree and adds the
//!   classical recolor-and-rotate repair after each mutation.
//! * [`heap::Heap`]: an array-backed priority queue. Its top is the
//!   element ordering first under the comparator; the default
//!   [`Descend`] order makes it a max-heap.
//!
//! The trees are sets: one stored value per comparator equivalence
//! class, with `insert` reporting a duplicate via `false` rather than
//! replacing. Absence (`find`, `min`, `pop`, ...) is an `Option`, never
//! an error.
//!
//! ## Comparators
//!
//! A comparator is any `Fn(&T, &T) -> Ordering` closure or a type
//! implementing [`Comparator`]. Because the order is a runtime value,
//! one element type can live in differently ordered containers, and
//! orders can depend on state no `Ord` impl could see:
//!
//! ```
//! use ordset::rbt::Tree;
//!
//! let mut by_len = Tree::with_cmp(|a: &&str, b: &&str| {
//!     a.len().cmp(&b.len()).then_with(|| a.cmp(b))
//! });
//! by_len.extend(["truck", "car", "helicopter", "van"]);
//! assert_eq!(
//!     by_len.iter().copied().collect::<Vec<_>>(),
//!     ["car", "van", "truck", "helicopter"],
//! );
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bst;
pub mod cmp;
pub mod heap;
pub mod rbt;

mod iter;
mod node;

#[cfg(test)]
mod test;

pub use cmp::{Ascend, Comparator, Descend};
