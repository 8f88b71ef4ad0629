//! An ordered set stored in an unbalanced BST. Nodes live in a generational arena and refer to
//! their children and their parent by arena index, so the parent links never own anything.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting an equal element leaves the tree alone.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing an element reports whether anything was removed.
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use generational_arena::{Arena, Index};
use tracing::trace;

use crate::error::{TreeError, TreeResult};
use crate::util::Side;

mod dot;

pub use dot::Dot;

/// A set of elements kept in ascending order by a Binary Search Tree. The tree is not
/// self-balancing: inserting sorted elements produces a tree as deep as it is long.
///
/// Elements must have an [`Ord`] implementation that agrees with their [`Eq`]
/// implementation. The tree doesn't check this; a type that breaks it gets an arbitrary (but
/// memory safe) ordering.
#[derive(Clone)]
pub struct OrderedTree<T> {
    nodes: Arena<Node<T>>,
    root: Option<Index>,
    len: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> OrderedTree<T> {
    /// Generate a new, empty `OrderedTree`.
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Generate a new, empty `OrderedTree` with room for `capacity` elements before it
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    /// The number of elements in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every element from the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert_all([3, 1, 2]);
    /// tree.clear();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.len(), 0);
    /// ```
    pub fn clear(&mut self) {
        trace!(len = self.len, "clearing tree");
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Returns the smallest element in the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyCollection`] if the tree has no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, TreeError};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.first(), Err(TreeError::EmptyCollection));
    ///
    /// tree.insert_all([5, 3, 8]);
    /// assert_eq!(tree.first(), Ok(&3));
    /// ```
    pub fn first(&self) -> TreeResult<&T> {
        self.extreme(Side::Left)
    }

    /// Returns the largest element in the tree.
    ///
    /// # Errors
    ///
    /// [`TreeError::EmptyCollection`] if the tree has no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, TreeError};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.last(), Err(TreeError::EmptyCollection));
    ///
    /// tree.insert_all([5, 3, 8]);
    /// assert_eq!(tree.last(), Ok(&8));
    /// ```
    pub fn last(&self) -> TreeResult<&T> {
        self.extreme(Side::Right)
    }

    /// An iterator over the elements of the tree in ascending order. The tree is left
    /// untouched so this can be called as often as needed.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Copies the elements of the tree into a `Vec` in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert_all([5, 3, 8, 1, 4, 7, 9]);
    ///
    /// assert_eq!(tree.to_vec(), vec![1, 3, 4, 5, 7, 8, 9]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Inserts `item` into the tree. Returns `true` if the tree changed, or `false` if an equal
    /// element was already present (in which case `item` is dropped and the stored element is
    /// kept).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> bool
    where
        T: Ord,
    {
        let Some(mut current) = self.root else {
            trace!("inserting root");
            self.root = Some(self.nodes.insert(Node::new(item, None)));
            self.len += 1;
            return true;
        };

        loop {
            let node = &self.nodes[current];
            let side = match item.cmp(&node.value) {
                Ordering::Less => Side::Left,
                Ordering::Equal => {
                    trace!("element already present");
                    return false;
                }
                Ordering::Greater => Side::Right,
            };

            match node.child(side) {
                Some(next) => current = next,
                None => {
                    let inserted = self.nodes.insert(Node::new(item, Some(current)));
                    *self.nodes[current].child_mut(side) = Some(inserted);
                    self.len += 1;
                    return true;
                }
            }
        }
    }

    /// Inserts every item, in iteration order. Returns `true` only if *every* item was
    /// inserted, so a single duplicate makes this `false` even though the other items went in.
    ///
    /// Note that this is the opposite convention from [`remove_all`][Self::remove_all], which
    /// returns `true` if *any* item was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// // 1 is a duplicate, but 2 is still inserted.
    /// assert!(!tree.insert_all([1, 2]));
    /// assert!(tree.contains(&2));
    /// ```
    pub fn insert_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        items
            .into_iter()
            .fold(true, |all_inserted, item| self.insert(item) && all_inserted)
    }

    /// Whether the tree holds an element equal to `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.find(item).is_some()
    }

    /// Whether the tree holds an element equal to each of `items`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert_all([1, 2, 3]);
    ///
    /// assert!(tree.contains_all(&[1, 3]));
    /// assert!(!tree.contains_all(&[1, 4]));
    /// ```
    pub fn contains_all<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: Ord + 'a,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    /// Removes the element equal to `item` from the tree. Returns `true` if an element was
    /// removed and `false` if there was nothing to remove.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert_all([5, 3, 8]);
    ///
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&5));
    /// assert_eq!(tree.to_vec(), vec![3, 8]);
    /// ```
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: Ord,
    {
        self.take(item).is_some()
    }

    /// Removes every item. Returns `true` if *any* item was removed.
    ///
    /// Note that this is the opposite convention from [`insert_all`][Self::insert_all], which
    /// returns `true` only if *every* item was inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert_all([1, 2]);
    ///
    /// // 3 was never there, but 1 was removed.
    /// assert!(tree.remove_all(&[1, 3]));
    /// assert_eq!(tree.to_vec(), vec![2]);
    /// ```
    pub fn remove_all<'a, I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: Ord + 'a,
    {
        items
            .into_iter()
            .fold(false, |any_removed, item| self.remove(item) || any_removed)
    }

    /// Removes the element equal to `item` from the tree and returns it. If the tree does not
    /// contain such an element, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(String::from("a"));
    ///
    /// assert_eq!(tree.take(&String::from("a")), Some(String::from("a")));
    /// assert_eq!(tree.take(&String::from("a")), None);
    /// ```
    pub fn take(&mut self, item: &T) -> Option<T>
    where
        T: Ord,
    {
        let target = self.find(item)?;
        Some(self.remove_node(target))
    }

    /// Finds the index of the node holding an element equal to `item`.
    fn find(&self, item: &T) -> Option<Index>
    where
        T: Ord,
    {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = &self.nodes[idx];
            current = match item.cmp(&node.value) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(idx),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    fn extreme(&self, side: Side) -> TreeResult<&T> {
        let root = self.root.ok_or(TreeError::EmptyCollection)?;
        Ok(&self.nodes[self.descend(root, side)].value)
    }

    /// Follows `side` links from `idx` until there are none left.
    fn descend(&self, mut idx: Index, side: Side) -> Index {
        while let Some(next) = self.nodes[idx].child(side) {
            idx = next;
        }
        idx
    }

    /// Structurally removes the node at `target` and returns the element it held.
    ///
    /// A node with two children swaps its element with its in-order successor (the leftmost
    /// node of its right subtree). The successor has no left child, so the second pass through
    /// the loop always unlinks a node with at most one child.
    fn remove_node(&mut self, mut target: Index) -> T {
        loop {
            let node = &self.nodes[target];
            match (node.left, node.right) {
                (Some(_), Some(right)) => {
                    let successor = self.descend(right, Side::Left);
                    trace!(node = ?target, ?successor, "promoting in-order successor");

                    let (held, promoted) = self.nodes.get2_mut(target, successor);
                    let held = held.expect("Two children => target is live");
                    let promoted = promoted.expect("Two children => successor is live");
                    mem::swap(&mut held.value, &mut promoted.value);

                    target = successor;
                }
                (child, None) | (None, child) => return self.unlink(target, child),
            }
        }
    }

    /// Replaces the node at `target` with `child` in its parent's slot (or as the root) and
    /// frees it. `target` must have no children other than `child`.
    fn unlink(&mut self, target: Index, child: Option<Index>) -> T {
        let removed = self.nodes.remove(target).expect("Unlinking => target is live");
        debug_assert!(removed.left.is_none() || removed.right.is_none());

        if let Some(child) = child {
            self.nodes[child].parent = removed.parent;
        }
        match removed.parent {
            Some(parent) => {
                let parent = &mut self.nodes[parent];
                let side = parent.side_of(target);
                *parent.child_mut(side) = child;
            }
            None => self.root = child,
        }

        // The count only ever shrinks here.
        self.len -= 1;
        trace!(node = ?target, ?child, len = self.len, "unlinked node");

        removed.value
    }
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Option<Index>,
    right: Option<Index>,
    parent: Option<Index>,
}

impl<T> Node<T> {
    fn new(value: T, parent: Option<Index>) -> Self {
        Self {
            value,
            left: None,
            right: None,
            parent,
        }
    }

    fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Option<Index> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Which slot `child` occupies. `child` must be one of this node's children.
    fn side_of(&self, child: Index) -> Side {
        if self.left == Some(child) {
            Side::Left
        } else {
            debug_assert_eq!(self.right, Some(child));
            Side::Right
        }
    }
}

/// An iterator over the elements of an [`OrderedTree`] in ascending order.
///
/// This struct is created by [`OrderedTree::iter`].
pub struct Iter<'a, T> {
    tree: &'a OrderedTree<T>,
    // Nodes whose left subtree has been visited but which haven't been yielded yet. The top of
    // the stack is always the next node in order.
    stack: Vec<Index>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(tree: &'a OrderedTree<T>) -> Self {
        let mut iter = Self {
            tree,
            stack: Vec::new(),
            remaining: tree.len,
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<Index>) {
        let tree = self.tree;
        while let Some(idx) = current {
            self.stack.push(idx);
            current = tree.nodes[idx].left;
        }
    }

    fn next_node(&mut self) -> Option<&'a Node<T>> {
        let tree = self.tree;
        let node = &tree.nodes[self.stack.pop()?];
        self.push_left_spine(node.right);
        self.remaining -= 1;
        Some(node)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(|node| &node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
