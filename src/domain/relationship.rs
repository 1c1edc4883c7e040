/// A stored edge of a hierarchy.
///
/// `child` sits at position `index` in `parent`'s ordered list of children.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Relationship<M> {
    /// The parent member.
    pub parent: M,
    /// The child member.
    pub child: M,
    /// Position of `child` among the children of `parent`.
    pub index: usize,
}

/// A request to relate `child` under `parent`.
///
/// This is the unit accepted by
/// [`Hierarchy::relate_all`](crate::Hierarchy::relate_all). Without an
/// `index` the child is appended, or stays where it is if it is already a
/// child of `parent`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link<M> {
    /// The parent member.
    pub parent: M,
    /// The child member.
    pub child: M,
    /// Requested position among the children of `parent`.
    ///
    /// Values past the end are clamped to the end.
    pub index: Option<usize>,
}

impl<M> Link<M> {
    /// Creates a request that appends `child` to the children of `parent`.
    #[must_use]
    pub const fn new(parent: M, child: M) -> Self {
        Self {
            parent,
            child,
            index: None,
        }
    }

    /// Requests a specific position among the children of the parent.
    #[must_use]
    pub fn at(self, index: usize) -> Self {
        Self {
            index: Some(index),
            ..self
        }
    }
}

impl<M> From<(M, M)> for Link<M> {
    fn from((parent, child): (M, M)) -> Self {
        Self::new(parent, child)
    }
}

impl<M> From<(M, M, usize)> for Link<M> {
    fn from((parent, child, index): (M, M, usize)) -> Self {
        Self::new(parent, child).at(index)
    }
}

impl<M> From<Relationship<M>> for Link<M> {
    fn from(relationship: Relationship<M>) -> Self {
        Self::new(relationship.parent, relationship.child).at(relationship.index)
    }
}

/// Result of relating a child to a parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkOutcome<M> {
    /// The parent member.
    pub parent: M,
    /// The child member.
    pub child: M,
    /// Final position of `child` among the children of `parent`.
    ///
    /// `None` when the edge was discarded by transitive reduction because
    /// `child` is already reachable from `parent` through a longer path.
    pub index: Option<usize>,
    /// Whether `child` was already a direct child of `parent`.
    pub already_linked: bool,
}

impl<M: Clone> LinkOutcome<M> {
    /// The stored edge, if the relation survived transitive reduction.
    #[must_use]
    pub fn relationship(&self) -> Option<Relationship<M>> {
        self.index.map(|index| Relationship {
            parent: self.parent.clone(),
            child: self.child.clone(),
            index,
        })
    }
}
