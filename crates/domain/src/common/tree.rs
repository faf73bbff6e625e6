//! Depth-first tree walking.
//!
//! Scene graphs nest arbitrarily deep, so the walk keeps its own stack instead
//! of recursing. The "has children" capability is either a closure or the
//! [`TreeNode`] trait.

/// A value that can list its own children
pub trait TreeNode: Sized {
    fn child_nodes(&self) -> Vec<Self>;
}

/// Pre-order depth-first iterator over a tree.
///
/// Children are produced lazily by `children` when their parent is visited
/// and are yielded in the order the closure returns them.
pub struct DepthFirst<N, C> {
    stack: Vec<N>,
    children: C,
}

impl<N, C, I> Iterator for DepthFirst<N, C>
where
    C: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    type Item = N;

    fn next(&mut self) -> Option<N> {
        let node = self.stack.pop()?;
        let mut children: Vec<N> = (self.children)(&node).into_iter().collect();
        children.reverse();
        self.stack.extend(children);
        Some(node)
    }
}

/// Walk `root` and its descendants, asking `children` for each node's children.
///
/// # Examples
///
/// ```
/// use modegrid_domain::common::walk_depth_first;
///
/// // Binary tree over integers: n -> 2n, 2n + 1 while below 8
/// let order: Vec<u32> = walk_depth_first(1, |n: &u32| {
///     [2 * n, 2 * n + 1].into_iter().filter(|c| *c < 8).collect::<Vec<_>>()
/// })
/// .collect();
/// assert_eq!(order, vec![1, 2, 4, 5, 3, 6, 7]);
/// ```
pub fn walk_depth_first<N, C, I>(root: N, children: C) -> DepthFirst<N, C>
where
    C: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
{
    DepthFirst {
        stack: vec![root],
        children,
    }
}

/// Walk a [`TreeNode`] and all its descendants in pre-order
pub fn descendants<N: TreeNode>(root: N) -> impl Iterator<Item = N> {
    walk_depth_first(root, N::child_nodes)
}
