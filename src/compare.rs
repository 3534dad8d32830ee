//! Comparators that define the ordering of keys in a tree.

use std::cmp::Ordering;

/// A total order over values of type `T`.
///
/// A tree's comparator is fixed at construction and consulted for every descent, so keys do not
/// need an intrinsic `Ord` implementation. Any `Fn(&T, &T) -> Ordering` closure implements this
/// trait through the blanket impl below.
///
/// # Examples
/// ```
/// use avl_collections::avl_tree::AvlMap;
///
/// let mut map = AvlMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
/// map.insert(1, "one");
/// map.insert(2, "two");
///
/// assert_eq!(map.get(&2), Some(&"two"));
/// ```
pub trait Compare<T> {
    /// Compares two values, returning their ordering under this comparator.
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        self(lhs, rhs)
    }
}

/// The intrinsic ordering of a key type.
///
/// This is the default comparator, making `AvlMap<T, U>` behave like an ordinary ordered map for
/// `T: Ord`.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrd;

impl<T> Compare<T> for NaturalOrd
where
    T: Ord,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}
