//! Outline rendering.
//!
//! A member with several parents is printed under each of them. Members that
//! are not reachable from the hierarch are not printed.
//!
//! ```text
//! 0
//! |-- a
//! |   |-- b
//! |   `-- x
//! `-- c
//!     `-- x
//! ```

use std::{
    fmt::{self, Display},
    hash::Hash,
};

use crate::Hierarchy;

impl<M> Display for Hierarchy<M>
where
    M: Clone + Eq + Hash + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hierarch())?;
        write_children(self, f, self.hierarch(), &mut String::new())
    }
}

fn write_children<M>(
    hierarchy: &Hierarchy<M>,
    f: &mut fmt::Formatter<'_>,
    member: &M,
    indent: &mut String,
) -> fmt::Result
where
    M: Clone + Eq + Hash + Display,
{
    let children = hierarchy.children_of(member);

    for (position, child) in children.iter().enumerate() {
        let is_last = position + 1 == children.len();
        let (branch, continuation) = if is_last {
            ("`-- ", "    ")
        } else {
            ("|-- ", "|   ")
        };

        write!(f, "\n{indent}{branch}{child}")?;

        let depth = indent.len();
        indent.push_str(continuation);
        write_children(hierarchy, f, child, indent)?;
        indent.truncate(depth);
    }

    Ok(())
}
