use core::fmt;

use super::arena::BranchArena;
use super::dump;
use super::iter::Members;
use crate::MemberInfo;

/// A read-only view of one branch inside a trie.
///
/// Obtained from [`RawTrie::get_branch`](super::RawTrie::get_branch) or
/// [`RawTrie::add`](super::RawTrie::add). Borrowing the trie keeps the view
/// valid; it cannot outlive a mutation.
#[derive(Clone, Copy)]
pub struct BranchRef<'a> {
    arena: &'a BranchArena,
    idx: usize,
    label: Option<char>,
}

impl<'a> BranchRef<'a> {
    pub(crate) fn new(arena: &'a BranchArena, idx: usize, label: Option<char>) -> Self {
        Self { arena, idx, label }
    }

    /// Occurrence count of the entry ending at this branch, 0 if none does.
    pub fn count(&self) -> i64 {
        self.arena.get(self.idx).map_or(0, |b| b.count)
    }

    /// Returns true if a stored entry ends at this branch.
    pub fn is_terminal(&self) -> bool {
        self.count() > 0
    }

    /// The character on the edge leading into this branch. `None` for the root.
    pub fn label(&self) -> Option<char> {
        self.label
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.arena.get(self.idx).map_or(0, |b| b.children.len())
    }

    /// Returns true if no longer entry continues through this branch.
    pub fn is_leaf(&self) -> bool {
        self.child_count() == 0
    }

    /// Follows the edge labelled `ch`.
    pub fn child(&self, ch: char) -> Option<BranchRef<'a>> {
        let child = self.arena.get(self.idx)?.get_child(ch)?;
        Some(BranchRef::new(self.arena, child, Some(ch)))
    }

    /// Iterates over the direct children in character order.
    pub fn children(&self) -> impl Iterator<Item = BranchRef<'a>> + 'a {
        let arena = self.arena;
        arena
            .get(self.idx)
            .map(|b| b.children.as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |&(ch, idx)| BranchRef::new(arena, idx, Some(ch)))
    }

    /// Walks down `path` from this branch.
    pub fn descend(&self, path: &str) -> Option<BranchRef<'a>> {
        path.chars().try_fold(*self, |branch, ch| branch.child(ch))
    }

    /// Every entry in this subtree, each value prefixed with `prefix`.
    ///
    /// `prefix` is normally the path from the root to this branch, which makes
    /// the values complete entries.
    pub fn members(&self, prefix: &str) -> Vec<MemberInfo> {
        self.iter_members(prefix).collect()
    }

    /// Lazy form of [`members`](Self::members).
    pub fn iter_members(&self, prefix: &str) -> Members<'a> {
        Members::new(self.arena, self.idx, prefix.to_owned())
    }

    /// Indented rendering of this subtree. See [`RawTrie::dump`](super::RawTrie::dump).
    pub fn dump(&self) -> String {
        dump::render(self.arena, self.idx, self.label)
    }
}

impl fmt::Debug for BranchRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BranchRef")
            .field("label", &self.label)
            .field("count", &self.count())
            .field("children", &self.child_count())
            .finish()
    }
}
