use crate::avl_tree::node::Node;
use crate::compare::Compare;
use crate::entry::Entry;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

pub fn height<T, U>(tree: &Tree<T, U>) -> i32 {
    match tree {
        None => -1,
        Some(ref node) => node.height,
    }
}

// Every rotation takes the subtree root by value and returns the new owning root. The demoted
// node's height is recomputed before the promoted node's, since it becomes a child.

fn rotate_left<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

fn rotate_right<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

fn rotate_left_right<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    match node.left.take() {
        Some(child) => node.left = Some(rotate_left(child)),
        None => unreachable!(),
    }
    rotate_right(node)
}

fn rotate_right_left<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    match node.right.take() {
        Some(child) => node.right = Some(rotate_right(child)),
        None => unreachable!(),
    }
    rotate_left(node)
}

// Restores the AVL invariant at the root of `tree` after one of its subtrees changed height by
// at most one. Ties on the child's balance factor, which only occur after a removal, take the
// single rotation.
fn balance<T, U>(tree: &mut Tree<T, U>) {
    let mut node = match tree.take() {
        Some(node) => node,
        None => return,
    };

    node.update();

    if node.balance_factor() > 1 {
        let single = match node.left {
            Some(ref child) => child.balance_factor() >= 0,
            None => unreachable!(),
        };
        node = if single {
            rotate_right(node)
        } else {
            rotate_left_right(node)
        };
    } else if node.balance_factor() < -1 {
        let single = match node.right {
            Some(ref child) => child.balance_factor() <= 0,
            None => unreachable!(),
        };
        node = if single {
            rotate_left(node)
        } else {
            rotate_right_left(node)
        };
    }

    *tree = Some(node);
}

// Detaches the in-order minimum of `tree` and rebalances every frame on the way back up.
//
// precondition: there exists a minimum node in the tree
fn remove_min<T, U>(tree: &mut Tree<T, U>) -> Box<Node<T, U>> {
    let mut node = match tree.take() {
        Some(node) => node,
        None => unreachable!(),
    };

    if node.left.is_some() {
        let min = remove_min(&mut node.left);
        *tree = Some(node);
        balance(tree);
        min
    } else {
        *tree = node.right.take();
        node
    }
}

// Splices the in-order successor into the position of a removed two-child node.
fn combine_subtrees<T, U>(left_tree: Tree<T, U>, mut right_tree: Tree<T, U>) -> Tree<T, U> {
    let mut new_root = remove_min(&mut right_tree);
    new_root.left = left_tree;
    new_root.right = right_tree;
    Some(new_root)
}

pub fn insert<T, U, C>(tree: &mut Tree<T, U>, new_node: Node<T, U>, cmp: &C) -> Option<Entry<T, U>>
where
    C: Compare<T>,
{
    let ret = match tree {
        Some(ref mut node) => match cmp.compare(&new_node.entry.key, &node.entry.key) {
            Ordering::Less => insert(&mut node.left, new_node, cmp),
            Ordering::Greater => insert(&mut node.right, new_node, cmp),
            Ordering::Equal => {
                let Node { ref mut entry, .. } = &mut **node;
                return Some(mem::replace(entry, new_node.entry));
            },
        },
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    balance(tree);
    ret
}

pub fn remove<T, U, C>(tree: &mut Tree<T, U>, key: &T, cmp: &C) -> Option<Entry<T, U>>
where
    C: Compare<T>,
{
    let ret = match tree.take() {
        Some(mut node) => match cmp.compare(key, &node.entry.key) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key, cmp);
                *tree = Some(node);
                ret
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key, cmp);
                *tree = Some(node);
                ret
            },
            Ordering::Equal => {
                let unboxed_node = *node;
                let Node { entry, left, right, .. } = unboxed_node;
                match (left, right) {
                    (None, right) => *tree = right,
                    (left, None) => *tree = left,
                    (left, right) => *tree = combine_subtrees(left, right),
                }
                Some(entry)
            },
        },
        None => return None,
    };

    balance(tree);
    ret
}

pub fn get<'a, T, U, C>(tree: &'a Tree<T, U>, key: &T, cmp: &C) -> Option<&'a Entry<T, U>>
where
    C: Compare<T>,
{
    tree.as_ref().and_then(|node| {
        match cmp.compare(key, &node.entry.key) {
            Ordering::Less => get(&node.left, key, cmp),
            Ordering::Greater => get(&node.right, key, cmp),
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn get_mut<'a, T, U, C>(tree: &'a mut Tree<T, U>, key: &T, cmp: &C) -> Option<&'a mut Entry<T, U>>
where
    C: Compare<T>,
{
    tree.as_mut().and_then(|node| {
        match cmp.compare(key, &node.entry.key) {
            Ordering::Less => get_mut(&mut node.left, key, cmp),
            Ordering::Greater => get_mut(&mut node.right, key, cmp),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

/// Collects the keys of `tree` in pre-order (root, left, right) for diagnostic dumps.
pub fn pre_order<'a, T, U>(tree: &'a Tree<T, U>, keys: &mut Vec<&'a T>) {
    if let Some(ref node) = tree {
        keys.push(&node.entry.key);
        pre_order(&node.left, keys);
        pre_order(&node.right, keys);
    }
}
