use super::arena::{BranchArena, ROOT};
use super::branch_ref::BranchRef;
use super::dump;
use super::iter::Members;
use super::node::Branch;
use crate::MemberInfo;

/// A counting prefix tree without any synchronization.
///
/// Keys are processed as sequences of `char`, so multi-byte characters take
/// one branch each. Every branch lives in a slot arena; deleting the last
/// occurrence of an entry prunes the branches that no longer lead anywhere.
///
/// Use [`Trie`](crate::Trie) to share a trie between threads.
#[derive(Debug, Clone, Default)]
pub struct RawTrie {
    arena: BranchArena,
    /// Number of distinct entries with a positive count.
    len: usize,
}

impl RawTrie {
    /// Creates an empty trie holding only the root branch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct entries stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no entry is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of live branches, root included.
    pub fn node_count(&self) -> usize {
        self.arena.live()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.arena.reset();
        self.len = 0;
    }

    /// The root branch, representing the empty prefix.
    pub fn root(&self) -> BranchRef<'_> {
        BranchRef::new(&self.arena, ROOT, None)
    }

    /// Adds one occurrence of `entry` and returns the branch where it ends.
    ///
    /// The empty string is accepted and counts against the root itself.
    pub fn add(&mut self, entry: &str) -> BranchRef<'_> {
        let idx = self.add_one(entry);
        self.branch_at(idx, entry.chars().next_back())
    }

    pub(crate) fn add_one(&mut self, entry: &str) -> usize {
        self.add_occurrences(entry, 1)
    }

    /// Adds `count` occurrences of `entry` at once. Non-positive counts are ignored.
    pub(crate) fn add_count(&mut self, entry: &str, count: i64) -> Option<usize> {
        (count > 0).then(|| self.add_occurrences(entry, count))
    }

    fn add_occurrences(&mut self, entry: &str, count: i64) -> usize {
        let idx = self.insert_path(entry);
        if let Some(branch) = self.arena.get_mut(idx) {
            if branch.count == 0 {
                self.len += 1;
            }
            branch.count = branch.count.saturating_add(count);
        }
        idx
    }

    /// Walks `entry` from the root, creating missing branches.
    fn insert_path(&mut self, entry: &str) -> usize {
        let mut current = ROOT;
        for ch in entry.chars() {
            let existing = self.arena.get(current).and_then(|b| b.get_child(ch));
            current = match existing {
                Some(child) => child,
                None => {
                    let child = self.arena.alloc();
                    if let Some(parent) = self.arena.get_mut(current) {
                        parent.add_child(ch, child);
                    }
                    child
                }
            };
        }
        current
    }

    /// Removes one occurrence of `entry`.
    ///
    /// Returns true if the entry was stored before the call, whether or not
    /// its count has now dropped to zero. A branch that only exists as a
    /// prefix of longer entries is not an entry and yields false.
    pub fn delete(&mut self, entry: &str) -> bool {
        let mut ancestors: Vec<(usize, char)> = Vec::new();
        let mut current = ROOT;
        for ch in entry.chars() {
            let Some(child) = self.arena.get(current).and_then(|b| b.get_child(ch)) else {
                return false;
            };
            ancestors.push((current, ch));
            current = child;
        }

        let Some(branch) = self.arena.get_mut(current) else {
            return false;
        };
        if !branch.is_terminal() {
            return false;
        }
        branch.count -= 1;
        if branch.count > 0 {
            return true;
        }
        self.len -= 1;
        self.prune(current, ancestors);
        true
    }

    /// Unlinks `node` and every ancestor left without count or children.
    /// The root has no entry in `ancestors` and is therefore never pruned.
    fn prune(&mut self, mut node: usize, mut ancestors: Vec<(usize, char)>) {
        while let Some((parent, ch)) = ancestors.pop() {
            if !self.arena.get(node).is_some_and(Branch::is_dead) {
                break;
            }
            if let Some(parent_branch) = self.arena.get_mut(parent) {
                parent_branch.remove_child(ch);
            }
            self.arena.free(node);
            node = parent;
        }
    }

    pub(crate) fn locate(&self, path: &str) -> Option<usize> {
        path.chars()
            .try_fold(ROOT, |idx, ch| self.arena.get(idx)?.get_child(ch))
    }

    pub(crate) fn branch_at(&self, idx: usize, label: Option<char>) -> BranchRef<'_> {
        BranchRef::new(&self.arena, idx, label)
    }

    /// Looks up the branch at the end of `entry` without touching counts.
    pub fn get_branch(&self, entry: &str) -> Option<BranchRef<'_>> {
        self.locate(entry)
            .map(|idx| self.branch_at(idx, entry.chars().next_back()))
    }

    /// Returns true if `entry` is stored, not merely a prefix.
    pub fn has(&self, entry: &str) -> bool {
        self.has_count(entry).0
    }

    /// Like [`has`](Self::has), also returning the count (0 when absent).
    pub fn has_count(&self, entry: &str) -> (bool, i64) {
        match self.locate(entry).and_then(|idx| self.arena.get(idx)) {
            Some(branch) if branch.is_terminal() => (true, branch.count),
            _ => (false, 0),
        }
    }

    /// Returns true if some stored entry starts with `prefix`, or is `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.has_prefix_count(prefix).0
    }

    /// Like [`has_prefix`](Self::has_prefix), also returning the count of the
    /// prefix branch itself (not a sum over its descendants).
    ///
    /// The root always exists, so for the empty prefix the answer depends on
    /// whether the trie holds any entry at all.
    pub fn has_prefix_count(&self, prefix: &str) -> (bool, i64) {
        match self.locate(prefix).and_then(|idx| self.arena.get(idx)) {
            Some(branch) if !prefix.is_empty() || !self.is_empty() => (true, branch.count),
            _ => (false, 0),
        }
    }

    /// Lazily iterates over every stored entry.
    pub fn iter(&self) -> Members<'_> {
        Members::new(&self.arena, ROOT, String::new())
    }

    /// Lazily iterates over the entries starting with `prefix`.
    pub fn prefix_iter(&self, prefix: &str) -> Members<'_> {
        match self.locate(prefix) {
            Some(idx) => Members::new(&self.arena, idx, prefix.to_owned()),
            None => Members::empty(&self.arena),
        }
    }

    /// All stored entries with their counts. Order is unspecified.
    pub fn members(&self) -> Vec<MemberInfo> {
        self.iter().collect()
    }

    /// All stored entries, values only. Same order as [`members`](Self::members).
    pub fn members_list(&self) -> Vec<String> {
        self.iter().map(|m| m.value).collect()
    }

    /// Entries starting with `prefix`, values including the prefix.
    /// An unknown prefix yields an empty list; the empty prefix yields everything.
    pub fn prefix_members(&self, prefix: &str) -> Vec<MemberInfo> {
        self.prefix_iter(prefix).collect()
    }

    /// Values-only form of [`prefix_members`](Self::prefix_members).
    pub fn prefix_members_list(&self, prefix: &str) -> Vec<String> {
        self.prefix_iter(prefix).map(|m| m.value).collect()
    }

    /// Indented, one-line-per-branch rendering of the whole tree.
    pub fn dump(&self) -> String {
        dump::render(&self.arena, ROOT, None)
    }

    /// Prints [`dump`](Self::dump) to stdout.
    pub fn print_dump(&self) {
        print!("{}", self.dump());
    }
}

impl<S: AsRef<str>> Extend<S> for RawTrie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for entry in iter {
            self.add(entry.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for RawTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = RawTrie::new();
        trie.extend(iter);
        trie
    }
}

impl<'a> IntoIterator for &'a RawTrie {
    type Item = MemberInfo;
    type IntoIter = Members<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut values: Vec<String>) -> Vec<String> {
        values.sort();
        values
    }

    #[test]
    fn test_add_and_count() {
        let mut trie = RawTrie::new();
        assert_eq!(trie.add("hello").count(), 1);
        assert_eq!(trie.add("hello").count(), 2);
        trie.add("help");

        assert_eq!(trie.has_count("hello"), (true, 2));
        assert_eq!(trie.has_count("help"), (true, 1));
        assert_eq!(trie.has_count("hel"), (false, 0));
        assert_eq!(trie.has_count("helpful"), (false, 0));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_add_returns_terminal_branch() {
        let mut trie = RawTrie::new();
        let branch = trie.add("abc");
        assert_eq!(branch.label(), Some('c'));
        assert!(branch.is_terminal());
        assert!(branch.is_leaf());
    }

    #[test]
    fn test_prefix_queries() {
        let mut trie = RawTrie::new();
        trie.add("car");
        trie.add("cart");

        assert!(trie.has_prefix("ca"));
        assert!(trie.has_prefix("car"));
        assert!(trie.has_prefix("cart"));
        assert!(!trie.has_prefix("carts"));
        assert!(!trie.has_prefix("d"));

        assert_eq!(trie.has_prefix_count("ca"), (true, 0));
        assert_eq!(trie.has_prefix_count("car"), (true, 1));
        assert_eq!(trie.has_prefix_count("x"), (false, 0));
    }

    #[test]
    fn test_empty_prefix() {
        let mut trie = RawTrie::new();
        assert!(!trie.has_prefix(""));
        assert_eq!(trie.has_prefix_count(""), (false, 0));

        trie.add("a");
        assert!(trie.has_prefix(""));
        assert_eq!(trie.has_prefix_count(""), (true, 0));
    }

    #[test]
    fn test_empty_entry_counts_on_root() {
        let mut trie = RawTrie::new();
        let root = trie.add("");
        assert_eq!(root.label(), None);
        assert_eq!(root.count(), 1);

        assert!(trie.has(""));
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.members(), vec![MemberInfo::new("", 1)]);

        assert!(trie.delete(""));
        assert!(!trie.has(""));
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn test_delete_decrements() {
        let mut trie = RawTrie::new();
        trie.add("cat");
        trie.add("cat");

        assert!(trie.delete("cat"));
        assert_eq!(trie.has_count("cat"), (true, 1));
        assert!(trie.delete("cat"));
        assert!(!trie.has("cat"));
        assert!(!trie.delete("cat"));
        assert!(trie.is_empty());
    }

    #[test]
    fn test_delete_prefix_only_branch() {
        let mut trie = RawTrie::new();
        trie.add("cart");
        let before = trie.node_count();

        assert!(!trie.delete("car"));
        assert_eq!(trie.node_count(), before);
        assert!(trie.has("cart"));
    }

    #[test]
    fn test_delete_prunes_unique_tail() {
        let mut trie = RawTrie::new();
        trie.add("car");
        let before = trie.node_count();

        trie.add("cartography");
        assert_eq!(trie.node_count(), before + 8);

        assert!(trie.delete("cartography"));
        assert_eq!(trie.node_count(), before);
        assert!(!trie.has_prefix("cart"));
        assert!(trie.has("car"));
    }

    #[test]
    fn test_delete_keeps_shared_prefix() {
        let mut trie = RawTrie::new();
        trie.add("car");
        trie.add("cat");

        assert!(trie.delete("car"));
        assert!(trie.has("cat"));
        assert!(trie.has_prefix("ca"));
        assert!(!trie.has_prefix("car"));
        assert_eq!(trie.node_count(), 4);
    }

    #[test]
    fn test_delete_inner_entry_keeps_children() {
        let mut trie = RawTrie::new();
        trie.add("car");
        trie.add("cart");

        assert!(trie.delete("car"));
        assert!(!trie.has("car"));
        assert!(trie.has_prefix("car"));
        assert!(trie.has("cart"));
        assert_eq!(trie.node_count(), 5);
    }

    #[test]
    fn test_delete_everything_leaves_bare_root() {
        let mut trie = RawTrie::new();
        for word in ["a", "ab", "abc", "b", "bcd"] {
            trie.add(word);
        }
        for word in ["abc", "a", "bcd", "ab", "b"] {
            assert!(trie.delete(word));
        }
        assert_eq!(trie.node_count(), 1);
        assert_eq!(trie.dump(), "<root> count=0 children=0\n");
    }

    #[test]
    fn test_slots_reused_after_churn() {
        let mut trie = RawTrie::new();
        for _ in 0..10 {
            trie.add("ephemeral");
            trie.delete("ephemeral");
        }
        assert_eq!(trie.node_count(), 1);
    }

    #[test]
    fn test_prefix_members() {
        let trie: RawTrie = ["tea", "ten", "ten", "to", "inn"].into_iter().collect();

        assert_eq!(sorted(trie.prefix_members_list("te")), vec!["tea", "ten"]);
        assert_eq!(
            sorted(trie.prefix_members_list("")),
            vec!["inn", "tea", "ten", "to"]
        );
        assert!(trie.prefix_members_list("z").is_empty());

        let ten: Vec<MemberInfo> = trie.prefix_members("ten");
        assert_eq!(ten, vec![MemberInfo::new("ten", 2)]);
    }

    #[test]
    fn test_clear() {
        let mut trie: RawTrie = ["a", "b"].into_iter().collect();
        trie.clear();
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(trie.members().is_empty());
    }

    #[test]
    fn test_add_count() {
        let mut trie = RawTrie::new();
        assert!(trie.add_count("x", 0).is_none());
        assert_eq!(trie.node_count(), 1);
        assert!(trie.add_count("x", 5).is_some());
        assert_eq!(trie.has_count("x"), (true, 5));
        assert_eq!(trie.len(), 1);
    }
}
