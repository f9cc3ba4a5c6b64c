use super::arena::BranchArena;
use crate::MemberInfo;

/// Depth-first iterator over the entries of a subtree.
///
/// Yields a [`MemberInfo`] for every branch with a positive count. Values are
/// the seed prefix followed by the characters on the path from the subtree
/// root. Siblings are visited in character order.
pub struct Members<'a> {
    arena: &'a BranchArena,
    // Stack of (branch index, next action). Action 0 yields the branch's own
    // entry, action n > 0 descends into child n - 1.
    stack: Vec<(usize, usize)>,
    key_buf: String,
}

impl<'a> Members<'a> {
    pub(crate) fn new(arena: &'a BranchArena, start: usize, prefix: String) -> Self {
        let stack = if arena.get(start).is_some() {
            vec![(start, 0)]
        } else {
            Vec::new()
        };
        Self {
            arena,
            stack,
            key_buf: prefix,
        }
    }

    pub(crate) fn empty(arena: &'a BranchArena) -> Self {
        Self {
            arena,
            stack: Vec::new(),
            key_buf: String::new(),
        }
    }
}

impl Iterator for Members<'_> {
    type Item = MemberInfo;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&(node_idx, action)) = self.stack.last() {
            let last = self.stack.len() - 1;

            let Some(node) = self.arena.get(node_idx) else {
                // Dangling link; skip the whole subtree.
                self.stack.pop();
                if !self.stack.is_empty() {
                    self.key_buf.pop();
                }
                continue;
            };

            if action == 0 {
                self.stack[last].1 += 1;
                if node.is_terminal() {
                    return Some(MemberInfo::new(self.key_buf.clone(), node.count));
                }
                continue;
            }

            if let Some(&(ch, child_idx)) = node.children.get(action - 1) {
                self.stack[last].1 += 1;
                self.key_buf.push(ch);
                self.stack.push((child_idx, 0));
            } else {
                // Done with this branch. The subtree root carries no pushed char.
                self.stack.pop();
                if !self.stack.is_empty() {
                    self.key_buf.pop();
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::trie::RawTrie;

    #[test]
    fn test_iter_reconstructs_keys() {
        let mut trie = RawTrie::new();
        trie.add("apple");
        trie.add("app");
        trie.add("app");
        trie.add("banana");

        let items: Vec<(String, i64)> = trie.iter().map(|m| (m.value, m.count)).collect();

        assert_eq!(
            items,
            vec![
                ("app".to_string(), 2),
                ("apple".to_string(), 1),
                ("banana".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_iter_empty() {
        let trie = RawTrie::new();
        assert_eq!(trie.iter().count(), 0);
    }

    #[test]
    fn test_iter_multibyte() {
        let mut trie = RawTrie::new();
        trie.add("中国");
        trie.add("中");

        let values: Vec<String> = trie.iter().map(|m| m.value).collect();
        assert_eq!(values, vec!["中".to_string(), "中国".to_string()]);
    }
}
