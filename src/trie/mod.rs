//! Counting prefix tree over `char` sequences.
//!
//! Branches are kept in a slot arena and linked by index. Each branch holds
//! its children sorted by character and the occurrence count of the entry
//! that ends there. Deleting the last occurrence of an entry prunes the
//! branches that no longer lead to any entry.
//!
//! - [`RawTrie`]: the unsynchronized tree, owning the arena.
//! - [`Trie`]: a [`RawTrie`] behind a reader/writer lock, safe to share.
//! - [`BranchRef`]: read-only view of a single branch.

mod arena;
mod branch_ref;
mod dump;
mod iter;
mod node;
mod raw;
mod shared;

pub use branch_ref::BranchRef;
pub use iter::Members;
pub use raw::RawTrie;
pub use shared::{BranchGuard, ReadBranch, Trie, WriteBranch};
