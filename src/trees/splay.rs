//! Implementation of splay trees.
//!
//! Every access restructures the tree so that the accessed node becomes the root,
//! using the classical zig, zig-zig and zig-zag steps (each in two mirror images).
//! Recently accessed values therefore stay near the root.
//!
//! Operations take `O(log n)` amortized time. A single operation may take linear time,
//! and the tree has no height bound whatsoever: inserting values in increasing order
//! produces a path. For this reason nothing in this module recurses on the tree's depth.
//!
//! The tree is a multiset: equal values may be inserted any number of times.

use super::basic_tree::*;
use super::Side;
use log::{debug, trace};
use recursive_reference::RecRef;
use std::cmp::Ordering;

const SHAPE_ERROR: &str = "invariant violated: splay step is missing a node";

/// The key to splay toward.
/// [`SearchKey::Greatest`] and [`SearchKey::Least`] compare greater (respectively smaller)
/// than every value, and are used to bring the maximum (respectively minimum) to the root.
#[derive(Debug)]
pub enum SearchKey<'a, V> {
    Exact(&'a V),
    Greatest,
    Least,
}

// the derived implementations would require `V: Clone`
impl<'a, V> Clone for SearchKey<'a, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, V> Copy for SearchKey<'a, V> {}

impl<'a, V: Ord> SearchKey<'a, V> {
    /// Compares the key against a value in the tree.
    pub fn compare(&self, value: &V) -> Ordering {
        match self {
            SearchKey::Exact(key) => (*key).cmp(value),
            SearchKey::Greatest => Ordering::Greater,
            SearchKey::Least => Ordering::Less,
        }
    }

    /// The side in which the key should be looked for, relative to `value`.
    /// [`None`] if the key is equal to the value.
    fn side(&self, value: &V) -> Option<Side> {
        match self.compare(value) {
            Ordering::Less => Some(Side::Left),
            Ordering::Greater => Some(Side::Right),
            Ordering::Equal => None,
        }
    }
}

/// A splay step spanning two levels.
/// The side is the side of the root's son that is on the search path.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Step {
    ZigZig(Side),
    ZigZag(Side),
}

impl Step {
    /// The two sides taken from the root to reach the grandson.
    fn path(self) -> (Side, Side) {
        match self {
            Step::ZigZig(side) => (side, side),
            Step::ZigZag(side) => (side, side.flip()),
        }
    }
}

/// What to do at the current position of the search.
enum Descent {
    /// The search ends here, no rotation.
    Stop,
    /// The search ends with a single rotation at this position.
    Zig(Side),
    /// Splay the grandson first, then perform the step at this position.
    Deeper(Step),
}

fn next_descent<V: Ord>(tree: &BasicTree<V>, key: &SearchKey<V>) -> Descent {
    let node = match tree.node() {
        Some(node) => node,
        None => return Descent::Stop,
    };
    let side = match key.side(&node.value) {
        Some(side) => side,
        None => return Descent::Stop,
    };
    let son = match node.son(side).node() {
        Some(son) => son,
        None => return Descent::Stop,
    };
    match key.side(&son.value) {
        Some(next) if !son.son(next).is_empty() => {
            if next == side {
                Descent::Deeper(Step::ZigZig(side))
            } else {
                Descent::Deeper(Step::ZigZag(side))
            }
        }
        _ => Descent::Zig(side),
    }
}

/// Single rotation: the son on `side` becomes the root.
/// Returns [`None`] if there is no such son.
pub(crate) fn zig<V>(slot: &mut BasicTree<V>, side: Side) -> Option<()> {
    slot.node()?.son(side).node()?;

    let mut root = slot.take().into_node_boxed().expect(SHAPE_ERROR);
    let mut n1 = root.son_mut(side).take().into_node_boxed().expect(SHAPE_ERROR);

    *root.son_mut(side) = n1.son_mut(!side).take();
    *n1.son_mut(!side) = BasicTree::Root(root);
    *slot = BasicTree::Root(n1);
    Some(())
}

/// Two rotations in the same direction: the grandson `side`-`side` becomes the root.
/// Returns [`None`] if there is no such grandson.
pub(crate) fn zig_zig<V>(slot: &mut BasicTree<V>, side: Side) -> Option<()> {
    slot.node()?.son(side).node()?.son(side).node()?;

    let mut root = slot.take().into_node_boxed().expect(SHAPE_ERROR);
    let mut n1 = root.son_mut(side).take().into_node_boxed().expect(SHAPE_ERROR);
    let mut n2 = n1.son_mut(side).take().into_node_boxed().expect(SHAPE_ERROR);

    *root.son_mut(side) = n1.son_mut(!side).take();
    *n1.son_mut(!side) = BasicTree::Root(root);
    *n1.son_mut(side) = n2.son_mut(!side).take();
    *n2.son_mut(!side) = BasicTree::Root(n1);
    *slot = BasicTree::Root(n2);
    Some(())
}

/// Two rotations in opposite directions: the grandson `side`-`!side` becomes the root.
/// Returns [`None`] if there is no such grandson.
pub(crate) fn zig_zag<V>(slot: &mut BasicTree<V>, side: Side) -> Option<()> {
    slot.node()?.son(side).node()?.son(!side).node()?;

    let mut root = slot.take().into_node_boxed().expect(SHAPE_ERROR);
    let mut n1 = root.son_mut(side).take().into_node_boxed().expect(SHAPE_ERROR);
    let mut n2 = n1.son_mut(!side).take().into_node_boxed().expect(SHAPE_ERROR);

    *root.son_mut(side) = n2.son_mut(!side).take();
    *n1.son_mut(!side) = n2.son_mut(side).take();
    *n2.son_mut(!side) = BasicTree::Root(root);
    *n2.son_mut(side) = BasicTree::Root(n1);
    *slot = BasicTree::Root(n2);
    Some(())
}

/// Splays the tree toward `key`: the node holding a value equal to the key,
/// or else the last node on the search path, becomes the root.
/// Does nothing to an empty tree.
///
/// This is the recursive top-down splay with one level of lookahead:
/// at every position it either stops, performs a zig, or first splays the grandson
/// on the search path and then performs a zig-zig or a zig-zag.
/// The recursion is unrolled onto the heap: the [`RecRef`] holds the chain
/// of subtrees visited, and `steps` the rotations still to be performed on them.
pub fn splay<V: Ord>(tree: &mut BasicTree<V>, key: SearchKey<'_, V>) {
    let mut rec_ref = RecRef::new(tree);
    let mut steps: Vec<Step> = vec![];

    loop {
        match next_descent(&*rec_ref, &key) {
            Descent::Stop => break,
            Descent::Zig(side) => {
                zig(&mut *rec_ref, side).expect(SHAPE_ERROR);
                break;
            }
            Descent::Deeper(step) => {
                let (first, second) = step.path();
                RecRef::extend_result(&mut rec_ref, |tree| {
                    match tree.node_mut().and_then(|node| node.son_mut(first).node_mut()) {
                        Some(son) => Ok(son.son_mut(second)),
                        None => Err(()),
                    }
                })
                .expect(SHAPE_ERROR);
                steps.push(step);
            }
        }
    }

    trace!("splaying with {} double rotations", steps.len());
    while let Some(step) = steps.pop() {
        RecRef::pop(&mut rec_ref).expect(SHAPE_ERROR);
        match step {
            Step::ZigZig(side) => zig_zig(&mut *rec_ref, side),
            Step::ZigZag(side) => zig_zag(&mut *rec_ref, side),
        }
        .expect(SHAPE_ERROR);
    }
}

/// A splay tree: a self adjusting binary search tree, holding a multiset of values.
///
/// The ordering is given by `V: Ord`, which must be a consistent total order.
/// If it isn't, the tree will not panic, but its contents will be in an unspecified order.
///```
/// use splaytree::SplayTree;
///
/// let mut tree = SplayTree::new();
/// for x in [5, 3, 8, 3].iter() {
///     tree.insert(*x);
/// }
/// assert_eq!(tree.len(), 4);
/// assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), vec![3, 3, 5, 8]);
/// # tree.assert_correctness();
///```
pub struct SplayTree<V> {
    tree: BasicTree<V>,
}

impl<V> SplayTree<V> {
    pub fn new() -> Self {
        SplayTree {
            tree: BasicTree::Empty,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The number of values stored in the tree, counting repetitions.
    /// Takes linear time.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// The height of the tree. The empty tree has height `0`.
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns the minimum value, or [`None`] if the tree is empty.
    /// Walks down the tree without splaying.
    pub fn min(&self) -> Option<&V> {
        self.tree.far_value(Side::Left)
    }

    /// Returns the maximum value, or [`None`] if the tree is empty.
    /// Walks down the tree without splaying.
    pub fn max(&self) -> Option<&V> {
        self.tree.far_value(Side::Right)
    }

    /// Returns the value at the root: the most recently accessed one.
    pub fn root(&self) -> Option<&V> {
        self.tree.value()
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> iterators::Iter<'_, V> {
        self.tree.iter()
    }

    /// Calls `f` on the values in ascending order, stopping as soon as it returns `false`.
    /// Returns `true` if all of the values were visited.
    ///```
    /// use splaytree::SplayTree;
    ///
    /// let tree: SplayTree<i32> = (0..100).collect();
    /// let mut visited = vec![];
    /// let finished = tree.iterate(|x| {
    ///     visited.push(*x);
    ///     *x < 4
    /// });
    /// assert!(!finished);
    /// assert_eq!(visited, vec![0, 1, 2, 3, 4]);
    ///```
    pub fn iterate<F: FnMut(&V) -> bool>(&self, f: F) -> bool {
        self.iter().all(f)
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        deallocate_iteratively(&mut self.tree);
    }

    pub fn inner(&self) -> &BasicTree<V> {
        &self.tree
    }
}

impl<V: Ord> SplayTree<V> {
    /// Inserts the value into the tree. Never fails: an equal value already in the tree
    /// is kept, and the new value is placed just before it.
    /// The new value becomes the root.
    pub fn insert(&mut self, value: V) {
        splay(&mut self.tree, SearchKey::Exact(&value));

        let mut new = BasicNode::new(value);
        if let Some(mut root) = self.tree.take().into_node_boxed() {
            if new.value.cmp(&root.value) == Ordering::Greater {
                new.right = root.right.take();
                new.left = BasicTree::Root(root);
            } else {
                new.left = root.left.take();
                new.right = BasicTree::Root(root);
            }
        }
        self.tree = BasicTree::from_node(new);
    }

    /// Removes one occurrence of `value` from the tree, and returns it.
    /// If there is no equal value in the tree, nothing is removed and [`None`] is returned.
    ///```
    /// use splaytree::SplayTree;
    ///
    /// let mut tree = SplayTree::new();
    /// tree.insert(87);
    /// tree.insert(800);
    /// tree.insert(900);
    /// assert_eq!(tree.delete(&87), Some(87));
    /// assert_eq!(tree.delete(&87), None);
    /// assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), vec![800, 900]);
    ///```
    ///
    /// The tree is splayed toward `value` even when it is missing, so an unsuccessful
    /// delete may change the shape of the tree, but never its values.
    pub fn delete(&mut self, value: &V) -> Option<V> {
        if self.search(value).is_none() {
            debug!("nothing to delete");
            return None;
        }

        let BasicNode {
            value: removed,
            left,
            right,
        } = self.tree.take().into_node().expect(SHAPE_ERROR);

        self.tree = if left.is_empty() {
            right
        } else {
            // the maximum of the left subtree has no right son once it is at the top
            let mut left = left;
            splay(&mut left, SearchKey::Greatest);
            if let Some(max) = left.node_mut() {
                max.right = right;
            }
            left
        };
        Some(removed)
    }

    /// Splays the tree toward `value`, and returns the root's value if it is equal to `value`.
    /// Either way, the tree is restructured, and the last node on the search path is now
    /// the root.
    pub fn search(&mut self, value: &V) -> Option<&V> {
        splay(&mut self.tree, SearchKey::Exact(value));
        let root = self.tree.value()?;
        if value.cmp(root) == Ordering::Equal {
            Some(root)
        } else {
            None
        }
    }

    /// Returns an equal value in the tree, without splaying.
    pub fn find(&self, value: &V) -> Option<&V> {
        self.tree.find(value)
    }

    /// Returns whether an equal value is in the tree. Splays the tree like [`SplayTree::search`].
    pub fn contains(&mut self, value: &V) -> bool {
        self.search(value).is_some()
    }

    /// Removes the minimum value and returns it.
    pub fn pop_min(&mut self) -> Option<V> {
        self.pop_far(Side::Left)
    }

    /// Removes the maximum value and returns it.
    pub fn pop_max(&mut self) -> Option<V> {
        self.pop_far(Side::Right)
    }

    fn pop_far(&mut self, side: Side) -> Option<V> {
        let key = match side {
            Side::Left => SearchKey::Least,
            Side::Right => SearchKey::Greatest,
        };
        splay(&mut self.tree, key);

        // after splaying, the extremal node is the root, and has no son on `side`
        let mut node = self.tree.take().into_node()?;
        self.tree = node.son_mut(!side).take();
        Some(node.value)
    }

    /// Checks that the values are in order.
    /// If they are not, panics.
    pub fn assert_correctness(&self) {
        self.tree.assert_correctness();
    }
}

impl<V> Default for SplayTree<V> {
    fn default() -> Self {
        SplayTree::new()
    }
}

impl<V> Drop for SplayTree<V> {
    fn drop(&mut self) {
        deallocate_iteratively(&mut self.tree);
    }
}

impl<V: Ord> std::iter::FromIterator<V> for SplayTree<V> {
    /// Sorts the values, and builds a tree of logarithmic depth out of them.
    /// Takes `O(n log n)` time.
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        let mut values: Vec<V> = iter.into_iter().collect();
        values.sort();
        debug!("building a splay tree of {} values", values.len());
        SplayTree {
            tree: BasicTree::from_sorted(values),
        }
    }
}

impl<V: Ord> Extend<V> for SplayTree<V> {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<V> IntoIterator for SplayTree<V> {
    type Item = V;
    type IntoIter = iterators::IntoIter<V>;

    fn into_iter(mut self) -> Self::IntoIter {
        iterators::IntoIter::new(self.tree.take())
    }
}

impl<'a, V> IntoIterator for &'a SplayTree<V> {
    type Item = &'a V;
    type IntoIter = iterators::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: std::fmt::Debug> std::fmt::Debug for SplayTree<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
