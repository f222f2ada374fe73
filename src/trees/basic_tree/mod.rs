//! The basic tree module
//! This module implements plain, unbalanced binary trees. The splay tree
//! is built by wrapping around the [`BasicTree`] type, and restructuring it
//! on every access.

mod iterative_deallocator;
pub mod iterators;

pub use iterative_deallocator::*;

use super::Side;

/// A basic tree. might be empty.
pub enum BasicTree<V> {
    Empty,
    Root(Box<BasicNode<V>>),
}
use BasicTree::*;

/// A basic node. can be viewed as a non-empty basic tree: it always has a value.
/// Values in the left subtree are never greater than `value`, and values
/// in the right subtree are never smaller.
pub struct BasicNode<V> {
    pub value: V,
    pub left: BasicTree<V>,
    pub right: BasicTree<V>,
}

impl<V> BasicNode<V> {
    pub fn new(value: V) -> BasicNode<V> {
        BasicNode {
            value,
            left: Empty,
            right: Empty,
        }
    }

    /// Returns the son on the given side.
    pub fn son(&self, side: Side) -> &BasicTree<V> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Returns the son on the given side, mutably.
    pub fn son_mut(&mut self, side: Side) -> &mut BasicTree<V> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl<V> BasicTree<V> {
    pub fn new() -> Self {
        Empty
    }

    pub fn from_node(node: BasicNode<V>) -> Self {
        Root(Box::new(node))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Empty)
    }

    pub fn node(&self) -> Option<&BasicNode<V>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    pub fn node_mut(&mut self) -> Option<&mut BasicNode<V>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    pub fn into_node(self) -> Option<BasicNode<V>> {
        Some(*self.into_node_boxed()?)
    }

    pub fn into_node_boxed(self) -> Option<Box<BasicNode<V>>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    /// Takes the current subtree out, and writes `Empty` instead.
    pub fn take(&mut self) -> BasicTree<V> {
        std::mem::replace(self, Empty)
    }

    /// Returns the value at the root, if any.
    pub fn value(&self) -> Option<&V> {
        Some(&self.node()?.value)
    }

    /// Follows the sons on the given side as far as possible, and returns
    /// the value found there. For [`Side::Left`] this is the minimum.
    pub fn far_value(&self, side: Side) -> Option<&V> {
        let mut node = self.node()?;
        while let Some(son) = node.son(side).node() {
            node = son;
        }
        Some(&node.value)
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// The height of the tree. The empty tree has height `0`.
    pub fn height(&self) -> usize {
        // explicit stack instead of recursion: splay trees may be arbitrarily deep
        let mut stack: Vec<(&BasicNode<V>, usize)> = vec![];
        if let Some(node) = self.node() {
            stack.push((node, 1));
        }
        let mut res = 0;
        while let Some((node, depth)) = stack.pop() {
            res = res.max(depth);
            for son in [&node.left, &node.right].iter() {
                if let Some(son) = son.node() {
                    stack.push((son, depth + 1));
                }
            }
        }
        res
    }

    /// Iterates over the values in order.
    pub fn iter(&self) -> iterators::Iter<'_, V> {
        iterators::Iter::new(self)
    }
}

impl<V: Ord> BasicTree<V> {
    /// Walks down the search path of `value` without changing the tree,
    /// and returns the first equal value on it.
    pub fn find(&self, value: &V) -> Option<&V> {
        let mut tree = self;
        while let Some(node) = tree.node() {
            tree = match value.cmp(&node.value) {
                std::cmp::Ordering::Less => &node.left,
                std::cmp::Ordering::Greater => &node.right,
                std::cmp::Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Builds a balanced [`BasicTree`] from values that are already sorted,
    /// in the sense that is has logarithmic depth.
    /// We don't know the size of the tree in advance, so the result
    /// isn't perfectly balanced.
    pub fn from_sorted<I: IntoIterator<Item = V>>(values: I) -> Self {
        // The stack holds nodes, each of which has no right son, and a left son which is
        // a perfect binary tree. The trees correspond to the binary digits of `count`:
        // the i'th digit of `count` is `1` iff there is a tree in the stack of size `2^i`.
        let mut stack: Vec<BasicNode<V>> = vec![];
        for (count, val) in values.into_iter().enumerate() {
            let mut tree = Empty;
            let mut i = 0;
            while (count >> i) & 1 == 1 {
                if let Some(mut prev_node) = stack.pop() {
                    prev_node.right = tree;
                    tree = BasicTree::from_node(prev_node);
                }
                i += 1;
            }
            let mut node = BasicNode::new(val);
            node.left = tree;
            stack.push(node);
        }

        let mut tree = Empty;
        for mut prev_node in stack.into_iter().rev() {
            prev_node.right = tree;
            tree = BasicTree::from_node(prev_node);
        }
        tree
    }

    /// Checks that the ordering invariant holds: every left son is not greater
    /// than its parent, and every right son is not smaller.
    /// If it does not hold, panics.
    pub fn assert_correctness(&self) {
        let mut stack: Vec<&BasicNode<V>> = self.node().into_iter().collect();
        while let Some(node) = stack.pop() {
            if let Some(left) = node.left.node() {
                assert!(left.value <= node.value, "left son is greater than its parent");
                stack.push(left);
            }
            if let Some(right) = node.right.node() {
                assert!(right.value >= node.value, "right son is smaller than its parent");
                stack.push(right);
            }
        }
        assert!(
            self.iter().zip(self.iter().skip(1)).all(|(a, b)| a <= b),
            "in-order traversal is not sorted"
        );
    }
}

impl<V> Default for BasicTree<V> {
    fn default() -> Self {
        Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_sorted_is_shallow() {
        for n in 0..200usize {
            let tree = BasicTree::from_sorted(0..n);
            tree.assert_correctness();
            assert_eq!(tree.len(), n);
            assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), (0..n).collect::<Vec<_>>());
            // at most one extra level over a perfect tree per binary digit
            let bound = 2 * (usize::BITS - n.leading_zeros()) as usize;
            assert!(tree.height() <= bound, "n = {}, height = {}", n, tree.height());
        }
    }

    #[test]
    fn far_values() {
        let tree = BasicTree::from_sorted(vec![2, 3, 3, 7, 11]);
        assert_eq!(tree.far_value(Side::Left), Some(&2));
        assert_eq!(tree.far_value(Side::Right), Some(&11));
        let empty: BasicTree<i32> = BasicTree::new();
        assert_eq!(empty.far_value(Side::Left), None);
        assert_eq!(empty.height(), 0);
        assert_eq!(empty.len(), 0);
    }

    #[test]
    #[should_panic]
    fn detects_broken_order() {
        let mut node = BasicNode::new(5);
        node.left = BasicTree::from_node(BasicNode::new(9));
        BasicTree::from_node(node).assert_correctness();
    }
}
