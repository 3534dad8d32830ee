//! An ordered map and set backed by an AVL tree.
//!
//! The tree keeps itself height-balanced: after every insertion or removal the heights of the two
//! child subtrees of any node differ by at most one, so lookups, insertions, and removals are all
//! logarithmic in the number of entries.
//!
//! Ordering is supplied by the caller. Any [`Compare`](compare::Compare) implementation works,
//! including plain `Fn(&T, &T) -> Ordering` closures; `AvlMap::new` defaults to the key type's
//! intrinsic `Ord`.
//!
//! # Examples
//! ```
//! use avl_collections::avl_tree::AvlMap;
//!
//! let mut map = AvlMap::new();
//! map.insert(1, "one");
//! map.insert(2, "two");
//!
//! assert_eq!(map.get(&1), Some(&"one"));
//! assert_eq!(map.remove(&2), Some((2, "two")));
//! assert_eq!(map.get(&2), None);
//! ```

#[macro_use]
extern crate serde_derive;

mod entry;
pub mod avl_tree;
pub mod compare;
