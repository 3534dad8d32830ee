use crate::avl_tree::node::Node;
use crate::avl_tree::tree;
use crate::compare::{Compare, NaturalOrd};
use crate::entry::Entry;
use log::warn;
use std::fmt;
use std::ops::{Index, IndexMut};

/// An ordered map implemented using an AVL tree.
///
/// An AVL tree is a self-balancing binary search tree that maintains the invariant that the
/// heights of the two child subtrees of any node differ by at most one, so every operation is
/// logarithmic in the number of entries. Keys are ordered by a comparator fixed at construction;
/// the default comparator is the key type's intrinsic ordering.
///
/// # Examples
/// ```
/// use avl_collections::avl_tree::AvlMap;
///
/// let mut map = AvlMap::new();
/// map.insert(0, 1);
/// map.insert(3, 4);
///
/// assert_eq!(map[&0], 1);
/// assert_eq!(map.get(&1), None);
/// assert_eq!(map.len(), 2);
///
/// map[&0] = 2;
/// assert_eq!(map.remove(&0), Some((0, 2)));
/// assert_eq!(map.remove(&1), None);
/// ```
pub struct AvlMap<T, U, C = NaturalOrd> {
    tree: tree::Tree<T, U>,
    cmp: C,
    len: usize,
}

impl<T, U> AvlMap<T, U>
where
    T: Ord,
{
    /// Constructs a new, empty `AvlMap<T, U>` ordered by the key type's intrinsic ordering.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// ```
    pub fn new() -> Self {
        AvlMap {
            tree: None,
            cmp: NaturalOrd,
            len: 0,
        }
    }
}

impl<T, U, C> AvlMap<T, U, C>
where
    C: Compare<T>,
{
    /// Constructs a new, empty `AvlMap<T, U, C>` ordered by `cmp`. The comparator must define a
    /// total order over the key type, and keys are unique under that order.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    ///
    /// assert_eq!(map.get(&2), Some(&2));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        AvlMap {
            tree: None,
            cmp,
            len: 0,
        }
    }

    /// Inserts a key-value pair into the map. If the key already exists in the map, it will
    /// return and replace the old key-value pair.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.insert(1, 1), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// assert_eq!(map.insert(1, 2), Some((1, 1)));
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, key: T, value: U) -> Option<(T, U)> {
        let AvlMap {
            ref mut tree,
            ref cmp,
            ref mut len,
        } = self;
        let new_node = Node::new(key, value);
        *len += 1;
        tree::insert(tree, new_node, cmp).and_then(|entry| {
            let Entry { key, value } = entry;
            *len -= 1;
            Some((key, value))
        })
    }

    /// Removes a key-value pair from the map. If the key exists in the map, it will return the
    /// associated key-value pair. Otherwise it will return `None` and leave the map unchanged,
    /// emitting a warning through the `log` facade.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.remove(&1), Some((1, 1)));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &T) -> Option<(T, U)> {
        let AvlMap {
            ref mut tree,
            ref cmp,
            ref mut len,
        } = self;
        let ret = tree::remove(tree, key, cmp).and_then(|entry| {
            let Entry { key, value } = entry;
            *len -= 1;
            Some((key, value))
        });
        if ret.is_none() {
            warn!("remove: key does not exist, map is unchanged");
        }
        ret
    }

    /// Checks if a key exists in the map.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert!(!map.contains_key(&0));
    /// assert!(map.contains_key(&1));
    /// ```
    pub fn contains_key(&self, key: &T) -> bool {
        self.get(key).is_some()
    }

    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the map.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.get(&0), None);
    /// assert_eq!(map.get(&1), Some(&1));
    /// ```
    pub fn get(&self, key: &T) -> Option<&U> {
        tree::get(&self.tree, key, &self.cmp).map(|entry| &entry.value)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// *map.get_mut(&1).unwrap() = 2;
    /// assert_eq!(map.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &T) -> Option<&mut U> {
        let AvlMap { ref mut tree, ref cmp, .. } = self;
        tree::get_mut(tree, key, cmp).map(|entry| &mut entry.value)
    }

    /// Returns the number of elements in the map.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let map: AvlMap<u32, u32> = AvlMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the map, removing all values.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.clear();
    /// assert_eq!(map.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.tree = None;
        self.len = 0;
    }

    /// Returns the height of the tree: the length of the longest path from the root to a leaf.
    /// An empty map has height -1 and a single-entry map has height 0.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// assert_eq!(map.height(), -1);
    /// map.insert(1, 1);
    /// assert_eq!(map.height(), 0);
    /// ```
    pub fn height(&self) -> i32 {
        tree::height(&self.tree)
    }

    /// Returns the keys of the map in pre-order (root, left, right). This exposes the shape of
    /// the tree and is intended for diagnostics; it is also the map's `Debug` representation.
    ///
    /// # Examples
    /// ```
    /// use avl_collections::avl_tree::AvlMap;
    ///
    /// let mut map = AvlMap::new();
    /// map.insert(1, 1);
    /// map.insert(2, 2);
    /// map.insert(3, 3);
    ///
    /// assert_eq!(map.pre_order_keys(), vec![&2, &1, &3]);
    /// ```
    pub fn pre_order_keys(&self) -> Vec<&T> {
        let mut keys = Vec::new();
        tree::pre_order(&self.tree, &mut keys);
        keys
    }
}

impl<T, U> Default for AvlMap<T, U>
where
    T: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U, C> fmt::Debug for AvlMap<T, U, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut keys = Vec::new();
        tree::pre_order(&self.tree, &mut keys);
        f.debug_list().entries(keys).finish()
    }
}

impl<'a, T, U, C> Index<&'a T> for AvlMap<T, U, C>
where
    C: Compare<T>,
{
    type Output = U;

    fn index(&self, key: &T) -> &Self::Output {
        self.get(key).expect("Error: key does not exist.")
    }
}

impl<'a, T, U, C> IndexMut<&'a T> for AvlMap<T, U, C>
where
    C: Compare<T>,
{
    fn index_mut(&mut self, key: &T) -> &mut Self::Output {
        self.get_mut(key).expect("Error: key does not exist.")
    }
}

#[cfg(test)]
mod tests {
    use super::AvlMap;
    use crate::avl_tree::tree::test_util::{check_consistency, in_order_keys};
    use crate::compare::NaturalOrd;

    #[test]
    fn test_len_empty() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_is_empty() {
        let map: AvlMap<u32, u32> = AvlMap::new();
        assert!(map.is_empty());
    }

    #[test]
    fn test_insert() {
        let mut map = AvlMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert!(map.contains_key(&1));
        assert_eq!(map.get(&1), Some(&1));
    }

    #[test]
    fn test_insert_replace() {
        let mut map = AvlMap::new();
        assert_eq!(map.insert(1, 1), None);
        assert_eq!(map.insert(1, 3), Some((1, 1)));
        assert_eq!(map.get(&1), Some(&3));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        assert_eq!(map.remove(&1), Some((1, 1)));
        assert!(!map.contains_key(&1));
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_remove_missing() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        map.insert(2, 2);

        assert_eq!(map.remove(&100), None);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&1), Some(&1));
        assert_eq!(map.get(&2), Some(&2));
    }

    #[test]
    fn test_get_mut() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        {
            let value = map.get_mut(&1);
            *value.unwrap() = 3;
        }
        assert_eq!(map.get(&1), Some(&3));
    }

    #[test]
    fn test_index() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        map[&1] = 3;
        assert_eq!(map[&1], 3);
    }

    #[test]
    fn test_clear() {
        let mut map = AvlMap::new();
        map.insert(1, 1);
        map.insert(2, 2);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.get(&1), None);
        assert_eq!(map.height(), -1);
    }

    #[test]
    fn test_insert_rebalances_shape() {
        let mut map = AvlMap::new();
        for key in &[3, 2, 1, 4, 5, 6, 7] {
            map.insert(*key, *key);
        }

        check_consistency(&map.tree, &map.cmp);
        assert_eq!(map.pre_order_keys(), vec![&4, &2, &1, &3, &6, &5, &7]);
        assert!(map.height() <= 3);

        let mut keys = Vec::new();
        in_order_keys(&map.tree, &mut keys);
        assert_eq!(keys, vec![&1, &2, &3, &4, &5, &6, &7]);
    }

    #[test]
    fn test_remove_keeps_balance() {
        let mut map = AvlMap::new();
        for key in 1..=16 {
            map.insert(key, key * 10);
        }

        map.remove(&7);
        map.remove(&13);
        map.remove(&15);

        check_consistency(&map.tree, &map.cmp);
        assert_eq!(map.get(&8), Some(&80));
        assert_eq!(map.get(&7), None);
        assert_eq!(map.get(&13), None);
        assert_eq!(map.len(), 13);
    }

    #[test]
    fn test_remove_each_direction() {
        // drain a tree from both ends so the rebalance triggers on both branches
        let mut map = AvlMap::new();
        for key in 1..=64 {
            map.insert(key, key);
        }
        for key in 1..=32 {
            assert_eq!(map.remove(&key), Some((key, key)));
            check_consistency(&map.tree, &map.cmp);
        }
        for key in (33..=64).rev() {
            assert_eq!(map.remove(&key), Some((key, key)));
            check_consistency(&map.tree, &map.cmp);
        }
        assert!(map.is_empty());
    }

    #[test]
    fn test_ascending_insert_height_bound() {
        let n = 1024;
        let mut map = AvlMap::new();
        for key in 1..=n {
            map.insert(key, key);
        }

        check_consistency(&map.tree, &map.cmp);
        // AVL worst case: height <= 1.44 * log2(n + 2) - 1
        let bound = (1.44 * ((n as f64) + 2.0).log2() - 1.0).floor() as i32;
        assert!(map.height() <= bound);
    }

    #[test]
    fn test_comparator_ordering() {
        let mut map = AvlMap::with_comparator(|a: &u32, b: &u32| b.cmp(a));
        for key in &[1, 2, 3, 4, 5] {
            map.insert(*key, *key);
        }

        check_consistency(&map.tree, &map.cmp);

        let mut keys = Vec::new();
        in_order_keys(&map.tree, &mut keys);
        assert_eq!(keys, vec![&5, &4, &3, &2, &1]);
    }

    #[test]
    fn test_debug_is_pre_order() {
        let mut map = AvlMap::new();
        map.insert(2, 2);
        map.insert(1, 1);
        map.insert(3, 3);

        assert_eq!(format!("{:?}", map), "[2, 1, 3]");
    }

    #[test]
    fn test_natural_ord_matches_default() {
        let mut explicit: AvlMap<u32, u32> = AvlMap::with_comparator(NaturalOrd);
        let mut default: AvlMap<u32, u32> = AvlMap::new();
        for key in &[2, 1, 3] {
            explicit.insert(*key, *key);
            default.insert(*key, *key);
        }
        assert_eq!(explicit.pre_order_keys(), default.pre_order_keys());
    }
}
