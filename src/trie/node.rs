/// A slot in the branch arena.
/// Either an occupied branch or a link to the next free slot.
#[derive(Debug, Clone)]
pub(crate) enum NodeSlot {
    Occupied(Branch),
    Free(Option<usize>),
}

/// A single node of the trie.
///
/// Each branch carries:
/// - The occurrence count of the entry terminating exactly here (0 if none).
/// - Its children, sorted by the character on the edge.
///
/// Children are linked by index into the arena, never by reference.
#[derive(Debug, Clone, Default)]
pub(crate) struct Branch {
    /// How many times the entry ending at this branch was added, minus deletions.
    pub(crate) count: i64,
    /// Maps `char` -> child index, sorted by `char`.
    pub(crate) children: Vec<(char, usize)>,
}

impl Branch {
    /// Creates an empty, uncounted branch.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns true if an entry ends at this branch.
    #[inline]
    pub(crate) fn is_terminal(&self) -> bool {
        self.count > 0
    }

    /// Returns true if the branch neither ends an entry nor leads to one.
    #[inline]
    pub(crate) fn is_dead(&self) -> bool {
        self.count == 0 && self.children.is_empty()
    }

    /// Links a child, keeping the children sorted.
    pub(crate) fn add_child(&mut self, ch: char, child_idx: usize) {
        match self.children.binary_search_by_key(&ch, |&(c, _)| c) {
            Ok(pos) => self.children[pos] = (ch, child_idx),
            Err(pos) => self.children.insert(pos, (ch, child_idx)),
        }
    }

    /// Finds the child index for a given character.
    pub(crate) fn get_child(&self, ch: char) -> Option<usize> {
        self.children
            .binary_search_by_key(&ch, |&(c, _)| c)
            .ok()
            .map(|pos| self.children[pos].1)
    }

    /// Unlinks a child by character.
    pub(crate) fn remove_child(&mut self, ch: char) -> Option<usize> {
        let pos = self.children.binary_search_by_key(&ch, |&(c, _)| c).ok()?;
        Some(self.children.remove(pos).1)
    }
}
