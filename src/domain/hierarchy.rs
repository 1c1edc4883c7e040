//! In-memory ordered overlapping hierarchy.
//!
//! The [`Hierarchy`] stores, for every member, the ordered list of its direct
//! children. Parents, ancestors and descendants are derived from those lists
//! on demand.

use std::{
    collections::{HashMap, HashSet, VecDeque},
    hash::Hash,
};

use tracing::instrument;

use crate::domain::{
    reduce,
    relationship::{Link, LinkOutcome, Relationship},
    RelateError,
};

/// A directed acyclic graph with a single root, ordered children and
/// multiple parents per member.
///
/// The root member, the *hierarch*, is fixed at construction and can never
/// be removed or related as a child. Every other member joins the hierarchy
/// by being related to a parent and leaves it when its last parent edge is
/// removed.
///
/// After every mutation the stored edges are transitively reduced: a child
/// is only attached directly to a parent when it is not already reachable
/// from that parent through a longer path.
///
/// Cloning produces an independent deep copy.
#[derive(Debug, Clone)]
pub struct Hierarchy<M> {
    /// The root member.
    hierarch: M,

    /// Ordered direct children, keyed by member.
    /// Every member, including the hierarch, is a key.
    children: HashMap<M, Vec<M>>,
}

impl<M> Hierarchy<M>
where
    M: Clone + Eq + Hash,
{
    /// Creates a hierarchy whose only member is `hierarch`.
    #[must_use]
    pub fn new(hierarch: M) -> Self {
        Self::with_capacity(hierarch, 1)
    }

    /// Creates a hierarchy with room for `capacity` members before
    /// reallocating.
    #[must_use]
    pub fn with_capacity(hierarch: M, capacity: usize) -> Self {
        let mut children = HashMap::with_capacity(capacity.max(1));
        children.insert(hierarch.clone(), Vec::new());
        Self { hierarch, children }
    }

    /// Creates an independent copy of `source`.
    ///
    /// Later mutation of either hierarchy does not affect the other.
    #[must_use]
    pub fn from_clone(source: &Self) -> Self {
        source.clone()
    }

    /// Rebuilds a hierarchy by replaying `relationships` in child-index
    /// order.
    ///
    /// Every endpoint of an edge becomes a member before any edge is
    /// replayed, so a member with no parents stays without parents instead of
    /// being related under the hierarch. Feeding the output of
    /// [`relationships`](Self::relationships) back in reproduces an
    /// equivalent hierarchy, except for members that have neither parents nor
    /// children: they appear in no edge and cannot be recovered.
    ///
    /// # Errors
    ///
    /// Returns the first [`RelateError`] raised by the replayed edges.
    pub fn from_relationships<I>(hierarch: M, relationships: I) -> Result<Self, RelateError<M>>
    where
        I: IntoIterator<Item = Relationship<M>>,
    {
        let mut relationships: Vec<_> = relationships.into_iter().collect();
        relationships.sort_by_key(|relationship| relationship.index);

        let mut hierarchy = Self::with_capacity(hierarch, relationships.len() + 1);
        for relationship in &relationships {
            hierarchy
                .children
                .entry(relationship.parent.clone())
                .or_default();
            hierarchy
                .children
                .entry(relationship.child.clone())
                .or_default();
        }

        let outcomes = hierarchy.relate_all(relationships.into_iter().map(Link::from));

        match outcomes.into_iter().find_map(Result::err) {
            Some(error) => Err(error),
            None => Ok(hierarchy),
        }
    }

    /// The root member.
    #[must_use]
    pub const fn hierarch(&self) -> &M {
        &self.hierarch
    }

    /// Returns `true` if `member` belongs to the hierarchy.
    #[must_use]
    pub fn contains(&self, member: &M) -> bool {
        self.children.contains_key(member)
    }

    /// Number of members, including the hierarch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Always `false`: the hierarch is a member of every hierarchy.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Relates `child` under `parent`.
    ///
    /// Without an `index` the child is appended, or keeps its current
    /// position if it is already a child of `parent`. With an `index` it is
    /// inserted (or moved) there; indices past the end are clamped to the
    /// end. A `parent` that is not yet a member is first related under the
    /// hierarch.
    ///
    /// After insertion the whole hierarchy is transitively reduced, which may
    /// remove other edges made redundant by this one, or this edge itself
    /// when `child` was already a non-immediate descendant of `parent`.
    ///
    /// Prefer [`relate_all`](Self::relate_all) for many edges: it pays for
    /// the reduction pass once.
    ///
    /// # Errors
    ///
    /// Returns [`RelateError::Loop`] if `parent == child`, and
    /// [`RelateError::Cycle`] if `child` is the hierarch or an ancestor of
    /// `parent`. The hierarchy is unchanged on error.
    #[instrument(skip_all)]
    pub fn relate(
        &mut self,
        parent: M,
        child: M,
        index: Option<usize>,
    ) -> Result<LinkOutcome<M>, RelateError<M>> {
        let outcome = self.insert(parent, child, index)?;
        self.reduce();
        Ok(self.settle(outcome))
    }

    /// Alias of [`relate`](Self::relate).
    ///
    /// # Errors
    ///
    /// See [`relate`](Self::relate).
    pub fn link(
        &mut self,
        parent: M,
        child: M,
        index: Option<usize>,
    ) -> Result<LinkOutcome<M>, RelateError<M>> {
        self.relate(parent, child, index)
    }

    /// Relates every link in order, then runs the reduction pass once.
    ///
    /// Each link is validated and inserted independently: a rejected link
    /// leaves no trace and does not stop the others. Outcomes are returned in
    /// input order and report positions after the reduction.
    #[instrument(skip_all)]
    pub fn relate_all<I>(&mut self, links: I) -> Vec<Result<LinkOutcome<M>, RelateError<M>>>
    where
        I: IntoIterator<Item = Link<M>>,
    {
        let inserted: Vec<_> = links
            .into_iter()
            .map(|link| self.insert(link.parent, link.child, link.index))
            .collect();

        self.reduce();

        inserted
            .into_iter()
            .map(|outcome| outcome.map(|outcome| self.settle(outcome)))
            .collect()
    }

    /// Alias of [`relate_all`](Self::relate_all).
    pub fn link_all<I>(&mut self, links: I) -> Vec<Result<LinkOutcome<M>, RelateError<M>>>
    where
        I: IntoIterator<Item = Link<M>>,
    {
        self.relate_all(links)
    }

    /// Makes `member` part of the hierarchy by relating it under the
    /// hierarch, unless it is already a member.
    ///
    /// Returns `true` if the member was added.
    pub fn ensure_member(&mut self, member: M) -> bool {
        if self.contains(&member) {
            return false;
        }

        // A new leaf under the hierarch shortcuts no path.
        let hierarch = self.hierarch.clone();
        let inserted = self.insert(hierarch, member, None);
        debug_assert!(
            inserted.is_ok(),
            "a new member is always accepted under the hierarch"
        );
        inserted.is_ok()
    }

    /// Removes every edge made redundant by a longer path.
    ///
    /// Returns the number of edges removed. This runs automatically after
    /// [`relate`](Self::relate) and [`relate_all`](Self::relate_all).
    #[instrument(skip_all)]
    pub fn reduce(&mut self) -> usize {
        let redundant: Vec<(M, M)> = reduce::redundant_edges(&self.children)
            .into_iter()
            .map(|(parent, child)| (parent.clone(), child.clone()))
            .collect();

        for (parent, child) in &redundant {
            if let Some(siblings) = self.children.get_mut(parent) {
                siblings.retain(|sibling| sibling != child);
            }
        }

        redundant.len()
    }

    /// Removes the edge from `parent` to `child`.
    ///
    /// A child left without parents is removed from the hierarchy. Its own
    /// children keep their membership even if they become unreachable from
    /// the hierarch.
    ///
    /// Returns `true` if the edge existed. Removing an absent edge is a no-op.
    #[instrument(skip_all)]
    pub fn unrelate(&mut self, parent: &M, child: &M) -> bool {
        let Some(siblings) = self.children.get_mut(parent) else {
            return false;
        };
        let Some(position) = siblings.iter().position(|sibling| sibling == child) else {
            return false;
        };
        siblings.remove(position);

        if *child != self.hierarch && !self.has_parent(child) {
            self.children.remove(child);
            tracing::debug!("removed member left without parents");
        }

        true
    }

    /// Alias of [`unrelate`](Self::unrelate).
    pub fn detach(&mut self, parent: &M, child: &M) -> bool {
        self.unrelate(parent, child)
    }

    /// Ordered direct children of `member`, or `None` if it is not a member.
    #[must_use]
    pub fn children(&self, member: &M) -> Option<Vec<M>> {
        self.children.get(member).cloned()
    }

    /// Direct parents of `member`, or `None` if it is not a member.
    ///
    /// The hierarch has no parents.
    #[must_use]
    pub fn parents(&self, member: &M) -> Option<HashSet<M>> {
        if !self.contains(member) {
            return None;
        }

        Some(
            self.children
                .iter()
                .filter(|(_, siblings)| siblings.contains(member))
                .map(|(parent, _)| parent.clone())
                .collect(),
        )
    }

    /// All members reachable downwards from `member`, excluding itself, or
    /// `None` if it is not a member.
    #[must_use]
    pub fn descendants(&self, member: &M) -> Option<HashSet<M>> {
        let mut queue: VecDeque<&M> = self.children.get(member)?.iter().collect();
        let mut visited: HashSet<&M> = HashSet::new();

        while let Some(next) = queue.pop_front() {
            if !visited.insert(next) {
                continue;
            }

            if let Some(children) = self.children.get(next) {
                queue.extend(children);
            }
        }

        Some(visited.into_iter().cloned().collect())
    }

    /// All members from which `member` is reachable, excluding itself, or
    /// `None` if it is not a member.
    #[must_use]
    pub fn ancestors(&self, member: &M) -> Option<HashSet<M>> {
        if !self.contains(member) {
            return None;
        }

        let parents = self.parent_index();
        let mut queue: VecDeque<&M> = parents.get(member).into_iter().flatten().copied().collect();
        let mut visited: HashSet<&M> = HashSet::new();

        while let Some(next) = queue.pop_front() {
            if !visited.insert(next) {
                continue;
            }

            if let Some(grandparents) = parents.get(next) {
                queue.extend(grandparents);
            }
        }

        Some(visited.into_iter().cloned().collect())
    }

    /// Returns `true` if `member` is reachable downwards from `ancestor`.
    ///
    /// A member is not its own descendant.
    #[must_use]
    pub fn is_descendant_of(&self, member: &M, ancestor: &M) -> bool {
        let Some(children) = self.children.get(ancestor) else {
            return false;
        };

        let mut queue: VecDeque<&M> = children.iter().collect();
        let mut visited: HashSet<&M> = HashSet::new();

        while let Some(next) = queue.pop_front() {
            if next == member {
                return true;
            }
            if !visited.insert(next) {
                continue;
            }
            if let Some(children) = self.children.get(next) {
                queue.extend(children);
            }
        }

        false
    }

    /// All members of the hierarchy, including the hierarch.
    #[must_use]
    pub fn members(&self) -> HashSet<M> {
        self.children.keys().cloned().collect()
    }

    /// Alias of [`members`](Self::members).
    #[must_use]
    pub fn nodes(&self) -> HashSet<M> {
        self.members()
    }

    /// All stored edges, sorted by child index.
    ///
    /// Replaying them in this order (see
    /// [`from_relationships`](Self::from_relationships)) rebuilds the
    /// hierarchy.
    #[must_use]
    pub fn relationships(&self) -> Vec<Relationship<M>> {
        let mut relationships: Vec<_> = self
            .children
            .iter()
            .flat_map(|(parent, children)| {
                children
                    .iter()
                    .enumerate()
                    .map(move |(index, child)| Relationship {
                        parent: parent.clone(),
                        child: child.clone(),
                        index,
                    })
            })
            .collect();
        relationships.sort_by_key(|relationship| relationship.index);
        relationships
    }

    /// Alias of [`relationships`](Self::relationships).
    #[must_use]
    pub fn links(&self) -> Vec<Relationship<M>> {
        self.relationships()
    }
}

impl<M> Hierarchy<M>
where
    M: Clone + Eq + Hash,
{
    /// Validates and inserts a single edge without reducing.
    ///
    /// This is the one insertion path shared by [`Self::relate`],
    /// [`Self::relate_all`] and [`Self::ensure_member`].
    fn insert(
        &mut self,
        parent: M,
        child: M,
        index: Option<usize>,
    ) -> Result<LinkOutcome<M>, RelateError<M>> {
        self.validate(&parent, &child)?;

        self.ensure_member(parent.clone());
        self.children.entry(child.clone()).or_default();

        let siblings = self.children.entry(parent.clone()).or_default();
        let current = siblings.iter().position(|sibling| *sibling == child);

        let position = match (current, index) {
            (Some(current), None) => current,
            (current, index) => {
                if let Some(current) = current {
                    siblings.remove(current);
                }
                let position = index.map_or(siblings.len(), |index| index.min(siblings.len()));
                siblings.insert(position, child.clone());
                position
            }
        };

        Ok(LinkOutcome {
            parent,
            child,
            index: Some(position),
            already_linked: current.is_some(),
        })
    }

    fn validate(&self, parent: &M, child: &M) -> Result<(), RelateError<M>> {
        let error = if parent == child {
            RelateError::Loop {
                member: child.clone(),
            }
        } else if *child == self.hierarch || self.is_descendant_of(parent, child) {
            RelateError::Cycle {
                parent: parent.clone(),
                child: child.clone(),
            }
        } else {
            return Ok(());
        };

        tracing::debug!("rejected relation: {error}");
        Err(error)
    }

    /// Refreshes the outcome's index against the current child lists.
    fn settle(&self, outcome: LinkOutcome<M>) -> LinkOutcome<M> {
        let index = self
            .children
            .get(&outcome.parent)
            .and_then(|siblings| siblings.iter().position(|sibling| *sibling == outcome.child));

        LinkOutcome { index, ..outcome }
    }

    /// Borrowed direct children of `member`; empty for non-members.
    pub(super) fn children_of(&self, member: &M) -> &[M] {
        self.children.get(member).map(Vec::as_slice).unwrap_or_default()
    }

    fn has_parent(&self, member: &M) -> bool {
        self.children
            .values()
            .any(|siblings| siblings.contains(member))
    }

    /// Maps each member to its direct parents.
    fn parent_index(&self) -> HashMap<&M, Vec<&M>> {
        let mut parents: HashMap<&M, Vec<&M>> = HashMap::with_capacity(self.children.len());
        for (parent, children) in &self.children {
            for child in children {
                parents.entry(child).or_default().push(parent);
            }
        }
        parents
    }
}

impl<M> PartialEq for Hierarchy<M>
where
    M: Eq + Hash,
{
    fn eq(&self, other: &Self) -> bool {
        self.hierarch == other.hierarch && self.children == other.children
    }
}

impl<M> Eq for Hierarchy<M> where M: Eq + Hash {}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    /// Builds `0 -> a, 0 -> c, a -> b, a -> x, c -> x`.
    fn diamond() -> Hierarchy<&'static str> {
        let mut hierarchy = Hierarchy::new("0");
        for (parent, child) in [("0", "a"), ("0", "c"), ("a", "b"), ("a", "x"), ("c", "x")] {
            hierarchy.relate(parent, child, None).unwrap();
        }
        hierarchy
    }

    fn set<const N: usize>(members: [&'static str; N]) -> HashSet<&'static str> {
        HashSet::from(members)
    }

    #[test]
    fn new_hierarchy_contains_only_the_hierarch() {
        let hierarchy = Hierarchy::new("root");

        assert_eq!(hierarchy.hierarch(), &"root");
        assert_eq!(hierarchy.members(), set(["root"]));
        assert_eq!(hierarchy.children(&"root"), Some(Vec::new()));
        assert_eq!(hierarchy.parents(&"root"), Some(HashSet::new()));
        assert!(hierarchy.relationships().is_empty());
        assert_eq!(hierarchy.len(), 1);
        assert!(!hierarchy.is_empty());
    }

    #[test]
    fn relating_to_itself_is_a_loop() {
        let mut hierarchy = diamond();
        let before = hierarchy.clone();

        let err = hierarchy.relate("a", "a", None).unwrap_err();

        assert_eq!(err, RelateError::Loop { member: "a" });
        assert_eq!(hierarchy, before);
    }

    #[test]
    fn relating_an_unknown_member_to_itself_is_a_loop() {
        let mut hierarchy = Hierarchy::new("0");

        let err = hierarchy.relate("n", "n", None).unwrap_err();

        assert!(err.is_loop());
        assert!(!hierarchy.contains(&"n"));
    }

    #[test]
    fn relating_an_ancestor_as_child_is_a_cycle() {
        let mut hierarchy = Hierarchy::new("0");
        hierarchy.relate("0", "grandparent", None).unwrap();
        hierarchy.relate("grandparent", "parent", None).unwrap();
        hierarchy.relate("parent", "child", None).unwrap();
        let before = hierarchy.clone();

        let err = hierarchy.relate("child", "grandparent", None).unwrap_err();

        assert_eq!(
            err,
            RelateError::Cycle {
                parent: "child",
                child: "grandparent"
            }
        );
        assert_eq!(hierarchy, before);
    }

    #[test_case("a"; "existing member")]
    #[test_case("new"; "new member")]
    fn relating_the_hierarch_as_child_is_a_cycle(parent: &'static str) {
        let mut hierarchy = diamond();
        let before = hierarchy.clone();

        let err = hierarchy.relate(parent, "0", None).unwrap_err();

        assert!(err.is_cycle());
        assert_eq!(hierarchy, before);
    }

    #[test]
    fn unknown_parent_is_related_under_the_hierarch() {
        let mut hierarchy = Hierarchy::new("0");

        hierarchy.relate("p", "c", None).unwrap();

        assert_eq!(hierarchy.children(&"0"), Some(vec!["p"]));
        assert_eq!(hierarchy.children(&"p"), Some(vec!["c"]));
        assert_eq!(hierarchy.members(), set(["0", "p", "c"]));
    }

    #[test]
    fn ensure_member_only_adds_unknown_members() {
        let mut hierarchy = Hierarchy::new("0");

        assert!(hierarchy.ensure_member("a"));
        assert!(!hierarchy.ensure_member("a"));
        assert!(!hierarchy.ensure_member("0"));

        assert_eq!(hierarchy.children(&"0"), Some(vec!["a"]));
        assert_eq!(hierarchy.parents(&"a"), Some(set(["0"])));
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut hierarchy = Hierarchy::new("0");
        hierarchy.relate("0", "c1", None).unwrap();
        hierarchy.relate("0", "c2", None).unwrap();

        let outcome = hierarchy.relate("0", "c1", None).unwrap();

        assert_eq!(outcome.index, Some(0));
        assert!(outcome.already_linked);
        assert_eq!(hierarchy.children(&"0"), Some(vec!["c1", "c2"]));
    }

    #[test_case(Some(0), &["d", "a", "b", "c"]; "front")]
    #[test_case(Some(1), &["a", "d", "b", "c"]; "middle")]
    #[test_case(Some(3), &["a", "b", "c", "d"]; "end")]
    #[test_case(Some(99), &["a", "b", "c", "d"]; "clamped past end")]
    #[test_case(None, &["a", "b", "c", "d"]; "appended")]
    fn new_child_is_placed_at_index(index: Option<usize>, expected: &[&str]) {
        let mut hierarchy = Hierarchy::new("0");
        for child in ["a", "b", "c"] {
            hierarchy.relate("0", child, None).unwrap();
        }

        hierarchy.relate("0", "d", index).unwrap();

        assert_eq!(hierarchy.children(&"0").unwrap(), expected);
    }

    #[test_case(Some(0), &["c", "a", "b"], 0; "to front")]
    #[test_case(Some(1), &["a", "c", "b"], 1; "to middle")]
    #[test_case(Some(99), &["a", "b", "c"], 2; "clamped stays at end")]
    #[test_case(None, &["a", "b", "c"], 2; "no index keeps position")]
    fn existing_child_is_moved_to_index(index: Option<usize>, expected: &[&str], position: usize) {
        let mut hierarchy = Hierarchy::new("0");
        for child in ["a", "b", "c"] {
            hierarchy.relate("0", child, None).unwrap();
        }

        let outcome = hierarchy.relate("0", "c", index).unwrap();

        assert_eq!(hierarchy.children(&"0").unwrap(), expected);
        assert_eq!(outcome.index, Some(position));
        assert!(outcome.already_linked);
    }

    #[test]
    fn closing_a_diamond_removes_redundant_edges() {
        let mut hierarchy = diamond();

        let outcome = hierarchy.relate("b", "c", None).unwrap();

        assert_eq!(outcome.index, Some(0));
        assert_eq!(hierarchy.children(&"a"), Some(vec!["b"]));
        assert_eq!(hierarchy.children(&"0"), Some(vec!["a"]));
        assert_eq!(hierarchy.children(&"b"), Some(vec!["c"]));
        assert_eq!(hierarchy.children(&"c"), Some(vec!["x"]));
    }

    #[test]
    fn shortcut_to_a_deeper_descendant_is_not_stored() {
        let mut hierarchy = Hierarchy::new("0");
        hierarchy.relate("0", "a", None).unwrap();
        hierarchy.relate("a", "b", None).unwrap();

        let outcome = hierarchy.relate("0", "b", None).unwrap();

        assert_eq!(outcome.index, None);
        assert_eq!(outcome.relationship(), None);
        assert_eq!(hierarchy.children(&"0"), Some(vec!["a"]));
        assert_eq!(hierarchy.parents(&"b"), Some(set(["a"])));
    }

    #[test]
    fn overlapping_parents_are_kept() {
        let mut hierarchy = Hierarchy::new("0");
        hierarchy.relate("0", "a", None).unwrap();
        hierarchy.relate("0", "b", None).unwrap();
        hierarchy.relate("a", "shared", None).unwrap();
        hierarchy.relate("b", "shared", None).unwrap();

        assert_eq!(hierarchy.parents(&"shared"), Some(set(["a", "b"])));
        assert_eq!(hierarchy.ancestors(&"shared"), Some(set(["0", "a", "b"])));
    }

    #[test]
    fn reduce_on_a_reduced_hierarchy_removes_nothing() {
        let mut hierarchy = diamond();
        let before = hierarchy.clone();

        assert_eq!(hierarchy.reduce(), 0);
        assert_eq!(hierarchy, before);
    }

    #[test]
    fn batch_relate_reduces_once_and_reports_final_positions() {
        let mut hierarchy = Hierarchy::new("0");

        let outcomes = hierarchy.relate_all([
            Link::new("0", "a"),
            Link::new("0", "b"),
            Link::new("a", "b"),
            Link::new("b", "b"),
            Link::new("0", "c").at(0),
        ]);

        assert_eq!(outcomes.len(), 5);
        assert_eq!(outcomes[0].as_ref().unwrap().index, Some(1));
        assert_eq!(outcomes[1].as_ref().unwrap().index, None);
        assert_eq!(outcomes[2].as_ref().unwrap().index, Some(0));
        assert!(outcomes[3].as_ref().unwrap_err().is_loop());
        assert_eq!(outcomes[4].as_ref().unwrap().index, Some(0));

        assert_eq!(hierarchy.children(&"0"), Some(vec!["c", "a"]));
        assert_eq!(hierarchy.children(&"a"), Some(vec!["b"]));
    }

    #[test]
    fn batch_relate_validates_against_earlier_links() {
        let mut hierarchy = Hierarchy::new("0");

        let outcomes = hierarchy.link_all([Link::new("a", "b"), Link::new("b", "a")]);

        assert!(outcomes[0].is_ok());
        assert!(outcomes[1].as_ref().unwrap_err().is_cycle());
        assert!(!hierarchy.is_descendant_of(&"a", &"b"));
    }

    #[test]
    fn unrelating_the_last_parent_removes_the_member() {
        let mut hierarchy = Hierarchy::new("0");
        hierarchy.relate("0", "a", None).unwrap();

        assert!(hierarchy.unrelate(&"0", &"a"));

        assert!(!hierarchy.contains(&"a"));
        assert_eq!(hierarchy.children(&"a"), None);
        assert_eq!(hierarchy.members(), set(["0"]));
    }

    #[test]
    fn unrelating_one_of_several_parents_keeps_the_member() {
        let mut hierarchy = Hierarchy::new("0");
        hierarchy.relate("0", "a", None).unwrap();
        hierarchy.relate("0", "b", None).unwrap();
        hierarchy.relate("a", "c", None).unwrap();
        hierarchy.relate("b", "c", None).unwrap();

        assert!(hierarchy.detach(&"a", &"c"));

        assert_eq!(hierarchy.parents(&"c"), Some(set(["b"])));
    }

    #[test]
    fn orphaned_grandchildren_are_retained() {
        let mut hierarchy = Hierarchy::new("0");
        hierarchy.relate("0", "a", None).unwrap();
        hierarchy.relate("a", "b", None).unwrap();

        hierarchy.unrelate(&"0", &"a");

        assert!(!hierarchy.contains(&"a"));
        assert!(hierarchy.contains(&"b"));
        assert_eq!(hierarchy.parents(&"b"), Some(HashSet::new()));
        assert!(!hierarchy.is_descendant_of(&"b", &"0"));
    }

    #[test_case("0", "0"; "hierarch to itself")]
    #[test_case("0", "missing"; "unknown child")]
    #[test_case("missing", "a"; "unknown parent")]
    #[test_case("a", "0"; "hierarch as child")]
    fn unrelating_a_missing_edge_is_a_no_op(parent: &'static str, child: &'static str) {
        let mut hierarchy = diamond();
        let before = hierarchy.clone();

        assert!(!hierarchy.unrelate(&parent, &child));
        assert_eq!(hierarchy, before);
    }

    #[test]
    fn queries_on_unknown_members_are_absent() {
        let hierarchy = diamond();

        assert_eq!(hierarchy.children(&"nope"), None);
        assert_eq!(hierarchy.parents(&"nope"), None);
        assert_eq!(hierarchy.descendants(&"nope"), None);
        assert_eq!(hierarchy.ancestors(&"nope"), None);
    }

    #[test]
    fn descendants_and_ancestors_are_transitive() {
        let hierarchy = diamond();

        assert_eq!(hierarchy.descendants(&"0"), Some(set(["a", "b", "c", "x"])));
        assert_eq!(hierarchy.descendants(&"a"), Some(set(["b", "x"])));
        assert_eq!(hierarchy.descendants(&"x"), Some(HashSet::new()));
        assert_eq!(hierarchy.ancestors(&"x"), Some(set(["0", "a", "c"])));
        assert_eq!(hierarchy.ancestors(&"0"), Some(HashSet::new()));
    }

    #[test]
    fn returned_collections_are_copies() {
        let hierarchy = diamond();

        let mut children = hierarchy.children(&"0").unwrap();
        children.clear();
        let mut members = hierarchy.nodes();
        members.clear();

        assert_eq!(hierarchy.children(&"0"), Some(vec!["a", "c"]));
        assert_eq!(hierarchy.len(), 5);
    }

    #[test]
    fn relationships_report_child_indices() {
        let hierarchy = diamond();

        let relationships: HashSet<_> = hierarchy.links().into_iter().collect();

        assert_eq!(relationships.len(), 5);
        assert!(relationships.contains(&Relationship {
            parent: "0",
            child: "c",
            index: 1
        }));
        assert!(relationships.contains(&Relationship {
            parent: "a",
            child: "x",
            index: 1
        }));
        assert!(hierarchy
            .relationships()
            .windows(2)
            .all(|pair| pair[0].index <= pair[1].index));
    }

    #[test]
    fn clone_is_independent() {
        let original = diamond();
        let mut copy = Hierarchy::from_clone(&original);

        copy.relate("b", "c", None).unwrap();
        copy.unrelate(&"c", &"x");
        copy.relate("x", "y", None).unwrap();

        assert_eq!(original, diamond());
        assert_ne!(copy, original);
    }
}
