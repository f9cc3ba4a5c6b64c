//! `Trie` — a [`RawTrie`] shared between threads behind one reader/writer lock.
//!
//! Every query takes the lock in shared mode and every mutation takes it
//! exclusively, so a reader never observes a half-applied insertion or a
//! branch that is being pruned. Queries still run in parallel with each other.

use core::fmt;
use core::ops::Deref;
use std::sync::PoisonError;

use super::branch_ref::BranchRef;
use super::raw::RawTrie;
use crate::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use crate::MemberInfo;

/// A thread-safe counting prefix tree.
///
/// Share it with `Arc<Trie>`; all methods take `&self`.
///
/// ```rust
/// use tallytrie::Trie;
///
/// let trie = Trie::new();
/// trie.add("cat");
/// trie.add("cat");
/// trie.add("car");
///
/// assert_eq!(trie.has_count("cat"), (true, 2));
/// assert!(trie.has_prefix("ca"));
///
/// let mut words = trie.prefix_members_list("ca");
/// words.sort();
/// assert_eq!(words, ["car", "cat"]);
/// ```
pub struct Trie {
    lock: RwLock<RawTrie>,
}

/// A branch handle that keeps the trie locked while it is alive.
///
/// Returned by [`Trie::add`] (exclusive lock) and [`Trie::get_branch`]
/// (shared lock). Drop it before calling other `Trie` methods from the same
/// thread; holding it across such a call deadlocks.
pub struct BranchGuard<G> {
    guard: G,
    idx: usize,
    label: Option<char>,
}

/// Branch handle holding the shared lock.
pub type ReadBranch<'a> = BranchGuard<RwLockReadGuard<'a, RawTrie>>;

/// Branch handle holding the exclusive lock.
pub type WriteBranch<'a> = BranchGuard<RwLockWriteGuard<'a, RawTrie>>;

impl<G> BranchGuard<G>
where
    G: Deref<Target = RawTrie>,
{
    /// Borrows the branch.
    pub fn branch(&self) -> BranchRef<'_> {
        self.guard.branch_at(self.idx, self.label)
    }

    /// Occurrence count of the entry ending at this branch.
    pub fn count(&self) -> i64 {
        self.branch().count()
    }

    /// Returns true if a stored entry ends at this branch.
    pub fn is_terminal(&self) -> bool {
        self.branch().is_terminal()
    }
}

impl<G> fmt::Debug for BranchGuard<G>
where
    G: Deref<Target = RawTrie>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BranchGuard").field(&self.branch()).finish()
    }
}

impl Trie {
    /// Creates an empty trie.
    pub fn new() -> Self {
        Self::from(RawTrie::new())
    }

    /// Acquires the shared lock.
    ///
    /// Use this to run several queries against one consistent state.
    /// A poisoned lock is recovered: no mutation can leave the tree half-built.
    pub fn read(&self) -> RwLockReadGuard<'_, RawTrie> {
        self.lock.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Acquires the exclusive lock.
    pub fn write(&self) -> RwLockWriteGuard<'_, RawTrie> {
        self.lock.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Consumes the lock and returns the tree.
    pub fn into_inner(self) -> RawTrie {
        self.lock.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds one occurrence of `entry` and returns the branch where it ends.
    ///
    /// The empty string is accepted and counts against the root; reject it
    /// upstream if that is unwanted. The returned guard holds the exclusive
    /// lock.
    pub fn add(&self, entry: &str) -> WriteBranch<'_> {
        let mut guard = self.write();
        let idx = guard.add_one(entry);
        BranchGuard {
            guard,
            idx,
            label: entry.chars().next_back(),
        }
    }

    /// Removes one occurrence of `entry`.
    ///
    /// Returns true if the entry was stored before the call. The empty string
    /// is never deleted and always yields false.
    pub fn delete(&self, entry: &str) -> bool {
        if entry.is_empty() {
            return false;
        }
        self.write().delete(entry)
    }

    /// Removes every entry.
    pub fn clear(&self) {
        self.write().clear();
    }

    /// Looks up the branch at the end of `entry`. The guard holds the shared lock.
    pub fn get_branch(&self, entry: &str) -> Option<ReadBranch<'_>> {
        let guard = self.read();
        let idx = guard.locate(entry)?;
        Some(BranchGuard {
            guard,
            idx,
            label: entry.chars().next_back(),
        })
    }

    /// Returns true if `entry` is stored, not merely a prefix.
    pub fn has(&self, entry: &str) -> bool {
        self.read().has(entry)
    }

    /// Like [`has`](Self::has), also returning the count (0 when absent).
    pub fn has_count(&self, entry: &str) -> (bool, i64) {
        self.read().has_count(entry)
    }

    /// Returns true if some stored entry starts with `prefix`, or is `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.read().has_prefix(prefix)
    }

    /// Like [`has_prefix`](Self::has_prefix), also returning the prefix
    /// branch's own count.
    pub fn has_prefix_count(&self, prefix: &str) -> (bool, i64) {
        self.read().has_prefix_count(prefix)
    }

    /// All stored entries with their counts. Order is unspecified.
    pub fn members(&self) -> Vec<MemberInfo> {
        self.read().members()
    }

    /// All stored entries, values only.
    pub fn members_list(&self) -> Vec<String> {
        self.read().members_list()
    }

    /// Entries starting with `prefix`. The empty prefix yields every entry.
    pub fn prefix_members(&self, prefix: &str) -> Vec<MemberInfo> {
        self.read().prefix_members(prefix)
    }

    /// Values-only form of [`prefix_members`](Self::prefix_members).
    pub fn prefix_members_list(&self, prefix: &str) -> Vec<String> {
        self.read().prefix_members_list(prefix)
    }

    /// Number of distinct entries stored.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if no entry is stored.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Number of live branches, root included.
    pub fn node_count(&self) -> usize {
        self.read().node_count()
    }

    /// Indented, one-line-per-branch rendering of the tree. Debug aid only.
    pub fn dump(&self) -> String {
        self.read().dump()
    }

    /// Prints [`dump`](Self::dump) to stdout.
    pub fn print_dump(&self) {
        print!("{}", self.dump());
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl From<RawTrie> for Trie {
    fn from(raw: RawTrie) -> Self {
        Self {
            lock: RwLock::new(raw),
        }
    }
}

impl Clone for Trie {
    fn clone(&self) -> Self {
        Self::from(RawTrie::clone(&self.read()))
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.read();
        f.debug_struct("Trie")
            .field("len", &raw.len())
            .field("nodes", &raw.node_count())
            .finish()
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.write().extend(iter);
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<RawTrie>())
    }
}
