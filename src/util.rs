/// Which child slot of a node a link lives in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    /// The slot holding elements less than the node's element.
    Left,
    /// The slot holding elements greater than the node's element.
    Right,
}
