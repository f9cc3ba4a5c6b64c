use super::node::{Branch, NodeSlot};

/// Index of the root branch. The root is allocated first and never freed.
pub(crate) const ROOT: usize = 0;

/// Slot arena owning every branch of a trie.
///
/// Branches refer to each other by index. Released slots are threaded onto a
/// free list and handed out again by [`BranchArena::alloc`].
#[derive(Debug, Clone)]
pub(crate) struct BranchArena {
    slots: Vec<NodeSlot>,
    free_head: Option<usize>,
    live: usize,
}

impl BranchArena {
    /// Creates an arena holding only the root branch.
    pub(crate) fn new() -> Self {
        Self {
            slots: vec![NodeSlot::Occupied(Branch::new())],
            free_head: None,
            live: 1,
        }
    }

    /// Number of occupied slots, root included.
    #[inline]
    pub(crate) fn live(&self) -> usize {
        self.live
    }

    /// Drops every branch except a fresh root.
    pub(crate) fn reset(&mut self) {
        self.slots.clear();
        self.slots.push(NodeSlot::Occupied(Branch::new()));
        self.free_head = None;
        self.live = 1;
    }

    #[inline]
    pub(crate) fn get(&self, idx: usize) -> Option<&Branch> {
        match self.slots.get(idx)? {
            NodeSlot::Occupied(branch) => Some(branch),
            NodeSlot::Free(_) => None,
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, idx: usize) -> Option<&mut Branch> {
        match self.slots.get_mut(idx)? {
            NodeSlot::Occupied(branch) => Some(branch),
            NodeSlot::Free(_) => None,
        }
    }

    /// Allocates an empty branch, reusing a free slot when one exists.
    pub(crate) fn alloc(&mut self) -> usize {
        self.live += 1;
        if let Some(free_idx) = self.free_head {
            if let Some(slot) = self.slots.get_mut(free_idx) {
                if let NodeSlot::Free(next) = *slot {
                    *slot = NodeSlot::Occupied(Branch::new());
                    self.free_head = next;
                    return free_idx;
                }
            }
            // A free head pointing at an occupied slot means the list is
            // corrupt; abandon it and grow instead.
            debug_assert!(false, "corrupted branch free list");
            self.free_head = None;
        }
        let idx = self.slots.len();
        self.slots.push(NodeSlot::Occupied(Branch::new()));
        idx
    }

    /// Returns a slot to the free list.
    ///
    /// The caller must have unlinked the branch from its parent first.
    pub(crate) fn free(&mut self, idx: usize) {
        debug_assert_ne!(idx, ROOT, "the root branch is never freed");
        if idx == ROOT {
            return;
        }
        if let Some(slot) = self.slots.get_mut(idx) {
            if matches!(slot, NodeSlot::Occupied(_)) {
                *slot = NodeSlot::Free(self.free_head);
                self.free_head = Some(idx);
                self.live -= 1;
            }
        }
    }
}

impl Default for BranchArena {
    fn default() -> Self {
        Self::new()
    }
}
