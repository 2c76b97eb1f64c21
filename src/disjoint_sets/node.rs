use std::cell::Cell;

/// The state of a single node in the forest.
#[cfg(not(feature = "compact"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    /// The node is the root of its tree.
    /// The rank is an upper bound to the height of the tree.
    Root { rank: usize },
    /// The node has a parent in its tree, which is not necessarily the root.
    Child { parent: usize },
}

/// The forest slot of a single element of a `DisjointSet`.
///
/// For each element in the `DisjointSet` we store a `Node` at the index of its node id.
/// The value sits in a `Cell` so the tree can be compressed while finding the root.
#[cfg(not(feature = "compact"))]
#[derive(Clone, Debug)]
pub(crate) struct Node {
    slot: Cell<Slot>,
}

#[cfg(not(feature = "compact"))]
impl Node {
    /// Create a new `Node` for the element with the given index.
    ///
    /// The node starts out as a root of rank 0.
    pub(crate) fn new(_index: usize) -> Self {
        Self {
            slot: Cell::new(Slot::Root { rank: 0 }),
        }
    }

    /// Return the parent of this node, or `None` if it is a root.
    pub(crate) fn parent(&self) -> Option<usize> {
        match self.slot.get() {
            Slot::Root { .. } => None,
            Slot::Child { parent } => Some(parent),
        }
    }

    /// Make this node a child of `value`.
    pub(crate) fn set_parent(&self, value: usize) {
        self.slot.set(Slot::Child { parent: value });
    }

    /// Return the rank of this node.
    ///
    /// This should only be called on a root.
    pub(crate) fn rank(&self) -> usize {
        match self.slot.get() {
            Slot::Root { rank } => rank,
            Slot::Child { .. } => 0,
        }
    }

    /// Set the rank of this node, which becomes a root.
    pub(crate) fn set_rank(&self, value: usize) {
        self.slot.set(Slot::Root { rank: value });
    }
}

// Roots store their rank as `-(rank + 1)` and children store the index of their parent.
// The sign tells the two apart so the node ids have to fit in an `isize`.
#[cfg(feature = "compact")]
const MAX: usize = isize::max_value() as usize;

/// The forest slot of a single element of a `DisjointSet`.
///
/// For each element in the `DisjointSet` we store a `Node` at the index of its node id.
/// A non-negative value is the parent and a negative value is a root holding its rank.
#[cfg(feature = "compact")]
#[derive(Clone, Debug)]
pub(crate) struct Node {
    value: Cell<isize>,
}

#[cfg(feature = "compact")]
impl Node {
    /// Create a new `Node` for the element with the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index is above the maximum amount of elements a `DisjointSet` can store
    /// with the compact representation.
    pub(crate) fn new(index: usize) -> Self {
        if index > MAX {
            panic!("A DisjointSet can only hold {} elements.", MAX)
        }

        Self {
            value: Cell::new(-1),
        }
    }

    /// Return the parent of this node, or `None` if it is a root.
    pub(crate) fn parent(&self) -> Option<usize> {
        let value = self.value.get();

        if value < 0 {
            None
        } else {
            Some(value as usize)
        }
    }

    /// Make this node a child of `value`.
    pub(crate) fn set_parent(&self, value: usize) {
        self.value.set(value as isize);
    }

    /// Return the rank of this node.
    ///
    /// This should only be called on a root.
    pub(crate) fn rank(&self) -> usize {
        let value = self.value.get();

        if value < 0 {
            (-(value + 1)) as usize
        } else {
            0
        }
    }

    /// Set the rank of this node, which becomes a root.
    pub(crate) fn set_rank(&self, value: usize) {
        self.value.set(-(value as isize) - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn new_node_is_root_of_rank_zero() {
        let node = Node::new(7);

        assert_eq!(node.parent(), None);
        assert_eq!(node.rank(), 0);
    }

    #[test]
    fn parent_and_rank_replace_each_other() {
        let node = Node::new(0);

        node.set_rank(3);
        assert_eq!(node.parent(), None);
        assert_eq!(node.rank(), 3);

        node.set_parent(0);
        assert_eq!(node.parent(), Some(0));

        node.set_parent(12);
        assert_eq!(node.parent(), Some(12));

        node.set_rank(1);
        assert_eq!(node.parent(), None);
        assert_eq!(node.rank(), 1);
    }
}
