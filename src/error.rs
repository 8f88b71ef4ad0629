use thiserror::Error;

/// Errors returned by [`OrderedTree`](crate::OrderedTree) queries.
///
/// Everything else on the tree reports "nothing happened" with `false` or `None`
/// instead of an error. Only asking for an extremum of an empty tree fails.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// `first` or `last` was called on a tree with no elements.
    #[error("the tree contains no elements")]
    EmptyCollection,
}

/// Shorthand for results whose error is a [`TreeError`].
pub type TreeResult<T> = Result<T, TreeError>;
