//! Fixed four-node binary tree and its recursive sum.

/// Iterations the tree-sum driver runs when no override is given.
pub const DEFAULT_ITERATIONS: u64 = 10_000_000;

/// Sum of the test tree values (5 + 4 + 1 + 7).
pub const TEST_TREE_SUM: i32 = 17;

/// Binary tree node. Children are owned exclusively by their parent; the
/// structure is acyclic by construction.
#[derive(Debug, PartialEq, Eq)]
pub struct Node {
    pub value: i32,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    pub fn new(value: i32) -> Box<Node> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

/// Builds the fixed test tree: root(5) with left(4), right(1), and a single
/// grandchild left.left(7). Deterministic, no inputs.
pub fn build_test_tree() -> Box<Node> {
    let mut root = Node::new(5);
    root.left = Some(Node::new(4));
    root.right = Some(Node::new(1));
    if let Some(left) = root.left.as_mut() {
        left.left = Some(Node::new(7));
    }
    root
}

/// Recursive sum of all node values; an absent node contributes 0. Read-only,
/// safe to call any number of times over the same tree.
pub fn tree_sum(node: Option<&Node>) -> i32 {
    match node {
        None => 0,
        Some(n) => n.value + tree_sum(n.left.as_deref()) + tree_sum(n.right.as_deref()),
    }
}
