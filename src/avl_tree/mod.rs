//! Self-balancing binary search tree where the heights of the two child subtrees of any node
//! differ by at most one.

mod map;
mod node;
mod set;
mod tree;

pub use self::map::AvlMap;
pub use self::set::AvlSet;
