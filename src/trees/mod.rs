//! This module contains the tree types: the plain [`basic_tree::BasicTree`],
//! and the [`splay::SplayTree`] built on top of it.

pub mod basic_tree;
pub mod print;
pub mod splay;

/// Which son of a node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the opposite side.
    pub fn flip(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl std::ops::Not for Side {
    type Output = Self;

    fn not(self) -> Self {
        self.flip()
    }
}
