use crate::avl_tree::tree;
use crate::entry::Entry;
use std::cmp;

/// A struct representing an internal node of an AVL tree.
///
/// The height of a missing subtree is -1, so a freshly created leaf has height 0.
pub struct Node<T, U> {
    pub entry: Entry<T, U>,
    pub height: i32,
    pub left: tree::Tree<T, U>,
    pub right: tree::Tree<T, U>,
}

impl<T, U> Node<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Node {
            entry: Entry { key, value },
            height: 0,
            left: None,
            right: None,
        }
    }

    /// Recomputes the stored height from the children. Must run after any structural change
    /// below this node.
    pub fn update(&mut self) {
        let Node { ref mut height, ref left, ref right, .. } = self;
        *height = cmp::max(tree::height(left), tree::height(right)) + 1;
    }

    /// Height of the left subtree minus height of the right subtree.
    pub fn balance_factor(&self) -> i32 {
        tree::height(&self.left) - tree::height(&self.right)
    }
}
