use thiserror::Error;

/// Errors that can occur when relating a child to a parent.
///
/// A rejected relation never mutates the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelateError<M> {
    /// The member was given as its own parent.
    #[error("cannot relate a member to itself")]
    Loop {
        /// The member that was related to itself.
        member: M,
    },

    /// The child is the parent's ancestor (or the hierarch), so the edge
    /// would close a cycle.
    #[error("cannot relate an ancestor as a child")]
    Cycle {
        /// The requested parent.
        parent: M,
        /// The requested child, an ancestor of `parent`.
        child: M,
    },
}

impl<M> RelateError<M> {
    /// Returns `true` if this is a [`RelateError::Loop`].
    #[must_use]
    pub const fn is_loop(&self) -> bool {
        matches!(self, Self::Loop { .. })
    }

    /// Returns `true` if this is a [`RelateError::Cycle`].
    #[must_use]
    pub const fn is_cycle(&self) -> bool {
        matches!(self, Self::Cycle { .. })
    }
}
