//! A splay tree multiset.
//!
//! [`SplayTree`] stores values ordered by `Ord`, allowing repetitions, and
//! restructures itself on every access so that recently accessed values are near the root.
//! Insertion, deletion and search take `O(log n)` amortized time.
//!
//! The lower level [`trees::basic_tree`] and [`trees::splay::splay`] are public too,
//! for building other structures on top of the splaying primitive.

pub mod trees;

pub use trees::splay::SplayTree;
pub use trees::Side;
