//! A plain binary tree without ordering or balance invariants, and a query
//! over the depths of its leaves.

/// A node of a plain binary tree.
///
/// Carries no balance information and enforces no ordering; children are
/// owned directly through boxes.
pub struct BinaryNode<T> {
    pub value: T,
    pub left: Option<Box<BinaryNode<T>>>,
    pub right: Option<Box<BinaryNode<T>>>,
}

impl<T> BinaryNode<T> {
    /// Creates a node with no children.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// Returns true if every leaf of the tree lies at the same depth below the
/// root, i.e. all root-to-leaf paths have equal length.
///
/// An empty tree and a single-node tree satisfy the check trivially.
///
/// ```
/// use avlbst::{equal_paths, BinaryNode};
///
/// let mut root = BinaryNode::new(1);
/// root.left = Some(Box::new(BinaryNode::new(2)));
/// root.right = Some(Box::new(BinaryNode::new(3)));
/// assert!(equal_paths(Some(&root)));
///
/// root.left.as_mut().unwrap().left = Some(Box::new(BinaryNode::new(4)));
/// assert!(!equal_paths(Some(&root)));
/// ```
pub fn equal_paths<T>(root: Option<&BinaryNode<T>>) -> bool {
    let mut first_leaf_depth = None;
    check_leaf_depths(root, 0, &mut first_leaf_depth)
}

// Depth-first walk, right subtree before left. The first leaf encountered
// records its depth; every later leaf must match it.
fn check_leaf_depths<T>(
    node: Option<&BinaryNode<T>>,
    depth: usize,
    first_leaf_depth: &mut Option<usize>,
) -> bool {
    let node = match node {
        None => return true,
        Some(node) => node,
    };

    if node.left.is_none() && node.right.is_none() {
        return match *first_leaf_depth {
            None => {
                *first_leaf_depth = Some(depth);
                true
            }
            Some(first) => depth == first,
        };
    }

    check_leaf_depths(node.right.as_deref(), depth + 1, first_leaf_depth)
        && check_leaf_depths(node.left.as_deref(), depth + 1, first_leaf_depth)
}
