use super::*;

/// The auto-generated deallocation code for [`BasicTree`] is recursive.
/// Since splay trees can have arbitrary depth, deallocating a large
/// splay tree could cause a stack overflow.
///
/// Therefore, we have this tiny struct in order to deallocate a [`BasicTree`] in an iterative way.
/// From the user's perspective this is a function from the `basic_tree` module.
struct IterativeDeallocator<V> {
    stack: Vec<Box<BasicNode<V>>>,
}

impl<V> IterativeDeallocator<V> {
    fn step(&mut self) -> Option<()> {
        let mut node = self.stack.pop()?;
        self.push(node.left.take());
        self.push(node.right.take());
        Some(())
    }

    fn push(&mut self, tree: BasicTree<V>) {
        if let Some(node) = tree.into_node_boxed() {
            self.stack.push(node);
        }
    }
}

/// Replaces the tree with an empty tree, and deallocates the tree iteratively.
/// Input is a reference and not an owned value so that this function can get
/// called in `Drop` implementations.
pub fn deallocate_iteratively<V>(tree: &mut BasicTree<V>) {
    let my_tree = tree.take();
    let mut deallocator = IterativeDeallocator { stack: vec![] };
    deallocator.push(my_tree);
    while deallocator.step().is_some() {}
}

#[test]
fn deep_tree_deallocation() {
    let mut tree = BasicTree::new();
    for i in 0..200_000 {
        let mut node = BasicNode::new(i);
        node.left = tree;
        tree = BasicTree::from_node(node);
    }
    deallocate_iteratively(&mut tree);
    assert!(tree.is_empty());
}
