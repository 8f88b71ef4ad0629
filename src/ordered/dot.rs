use std::fmt;

use super::OrderedTree;

/// Renders the parent/child structure of an [`OrderedTree`] in the DOT graph language, for
/// pasting into Graphviz when debugging the shape of a tree.
///
/// This struct is created by [`OrderedTree::dot`].
pub struct Dot<'a, T> {
    tree: &'a OrderedTree<T>,
}

impl<T> OrderedTree<T> {
    /// Returns a value that [`Display`][fmt::Display]s the tree as an undirected DOT graph with
    /// one edge per parent/child link. Nodes are visited in order and each node's left edge is
    /// written before its right edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert_all([5, 3, 8]);
    ///
    /// assert_eq!(
    ///     tree.dot().to_string(),
    ///     "graph d {\n\t\"5\" -- \"3\"\n\t\"5\" -- \"8\"\n}"
    /// );
    /// ```
    pub fn dot(&self) -> Dot<'_, T> {
        Dot { tree: self }
    }

    /// Shorthand for `self.dot().to_string()`.
    pub fn to_dot(&self) -> String
    where
        T: fmt::Display,
    {
        self.dot().to_string()
    }
}

impl<T> fmt::Display for Dot<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "graph d {{")?;

        let mut nodes = self.tree.iter();
        while let Some(node) = nodes.next_node() {
            for child in [node.left, node.right].into_iter().flatten() {
                let child = &self.tree.nodes[child];
                writeln!(f, "\t\"{}\" -- \"{}\"", node.value, child.value)?;
            }
        }

        write!(f, "}}")
    }
}
