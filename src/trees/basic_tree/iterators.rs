//! In-order iterators over a [`BasicTree`].
//! Both keep an explicit stack of the nodes whose value has not been
//! yielded yet, so iterating never recurses.

use super::*;

/// Immutable in-order iterator.
pub struct Iter<'a, V> {
    // the left spine of the part of the tree not yet visited
    stack: Vec<&'a BasicNode<V>>,
}

impl<'a, V> Iter<'a, V> {
    pub fn new(tree: &'a BasicTree<V>) -> Self {
        let mut res = Iter { stack: vec![] };
        res.push_left_spine(tree);
        res
    }

    fn push_left_spine(&mut self, mut tree: &'a BasicTree<V>) {
        while let Root(node) = tree {
            self.stack.push(node);
            tree = &node.left;
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.value)
    }
}

impl<'a, V> Clone for Iter<'a, V> {
    fn clone(&self) -> Self {
        Iter {
            stack: self.stack.clone(),
        }
    }
}

/// Owning in-order iterator. Nodes are freed as their values are yielded.
pub struct IntoIter<V> {
    stack: Vec<Box<BasicNode<V>>>,
}

impl<V> IntoIter<V> {
    pub fn new(tree: BasicTree<V>) -> Self {
        let mut res = IntoIter { stack: vec![] };
        res.push_left_spine(tree);
        res
    }

    fn push_left_spine(&mut self, mut tree: BasicTree<V>) {
        while let Some(mut node) = tree.into_node_boxed() {
            tree = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let BasicNode { value, right, .. } = *node;
        self.push_left_spine(right);
        Some(value)
    }
}

/// The right subtrees still hanging from the stack could be arbitrarily deep.
impl<V> Drop for IntoIter<V> {
    fn drop(&mut self) {
        while let Some(node) = self.stack.pop() {
            deallocate_iteratively(&mut Root(node));
        }
    }
}
