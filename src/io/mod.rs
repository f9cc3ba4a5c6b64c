//! File and stream glue: word-list loading and snapshot export/import.
//!
//! The two formats are independent. A word list is raw text where every
//! line adds one occurrence; a snapshot stores each member with its count and
//! is read back by its own loader.

pub mod snapshot;
pub mod wordlist;

pub use wordlist::LoadStats;
