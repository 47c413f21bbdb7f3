//! An ordered map implemented with an AVL tree that keeps a signed balance
//! factor per node, plus a leaf-depth query for plain binary trees.
//!
//! [`AvlTreeMap`] stores key-value pairs in a binary search tree whose
//! height difference between sibling subtrees never exceeds one, giving
//! O(log n) insert, remove and lookup. [`equal_paths`] answers whether all
//! leaves of an arbitrary [`BinaryNode`] tree lie at the same depth.
//!
//! ```
//! use avlbst::AvlTreeMap;
//!
//! let mut map = AvlTreeMap::new();
//! map.insert(2, "two");
//! map.insert(1, "one");
//! map.insert(3, "three");
//! assert_eq!(map.get(&2), Some(&"two"));
//!
//! let keys: Vec<i32> = map.iter().map(|(&k, _)| k).collect();
//! assert_eq!(keys, [1, 2, 3]);
//! ```

mod bintree;
mod map;

pub use bintree::{equal_paths, BinaryNode};
pub use map::{AvlTreeMap, Iter};
