//! # `tallytrie` - Concurrent Counting Prefix Tree
//!
//! A mutable prefix tree over `char` sequences that stores a multiset of
//! strings: every entry carries the number of times it was added. It answers
//! membership, counting and prefix-enumeration queries, which makes it a fit
//! for autocomplete indexes, word-frequency dictionaries and deduplicated
//! string sets with counts.
//!
//! ## Architecture
//!
//! - **Branches** live in a slot arena and link to their children by index.
//!   Children are kept sorted by character; lookups binary-search them.
//! - **Pruning**: deleting the last occurrence of an entry unlinks every
//!   branch that no longer leads to an entry, so insert/delete churn does not
//!   grow memory. Freed slots are reused.
//! - **Locking**: [`Trie`] wraps the unsynchronized [`RawTrie`] in a single
//!   reader/writer lock. Queries share it, `add` and `delete` take it
//!   exclusively. Reads are therefore never torn by a concurrent write.
//! - **I/O glue**: word lists (one entry per line) and snapshots (members
//!   with counts, binary or JSON) live in [`io`].
//!
//! ## Example
//!
//! ```rust
//! use tallytrie::{MemberInfo, Trie};
//!
//! let trie = Trie::new();
//! for word in ["中国人民", "中国无敌", "中国abc", "中美友好"] {
//!     trie.add(word);
//! }
//!
//! let mut under = trie.prefix_members_list("中国");
//! under.sort();
//! assert_eq!(under, ["中国abc", "中国人民", "中国无敌"]);
//!
//! assert!(trie.delete("中美友好"));
//! assert!(!trie.has_prefix("中美"));
//! assert_eq!(trie.prefix_members("中国a"), [MemberInfo::new("中国abc", 1)]);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod io;
pub mod member;
mod sync;
pub mod trie;

pub use config::{DumpFormat, LoadOptions};
pub use error::{Error, Result};
pub use io::LoadStats;
pub use member::MemberInfo;
pub use trie::{BranchGuard, BranchRef, Members, RawTrie, ReadBranch, Trie, WriteBranch};

// Compile-time checks that the shared trie can cross threads.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Trie>();
    assert_send_sync::<RawTrie>();
};
