//! Text rendering of trees, for debugging.
//!
//! The rendering is in preorder: every value on its own line, with each level
//! indented two spaces further than its parent, and empty subtrees written as `nil`.

use super::basic_tree::BasicTree;
use super::splay::SplayTree;
use std::fmt;

const INDENT: usize = 2;

impl<V: fmt::Display> fmt::Display for BasicTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(self, 0)];
        let mut first = true;
        while let Some((tree, depth)) = stack.pop() {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{:width$}", "", width = depth * INDENT)?;
            match tree.node() {
                None => write!(f, "nil")?,
                Some(node) => {
                    write!(f, "{}", node.value)?;
                    stack.push((&node.right, depth + 1));
                    stack.push((&node.left, depth + 1));
                }
            }
        }
        Ok(())
    }
}

impl<V: fmt::Display> fmt::Display for SplayTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.inner(), f)
    }
}
