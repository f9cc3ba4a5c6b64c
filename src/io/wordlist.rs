//! Newline-delimited word lists.
//!
//! Each line adds one occurrence of the entry it holds; repeated lines count
//! up. This is an ingest-only format: it is not the inverse of a snapshot.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::config::LoadOptions;
use crate::error::{Error, Result};
use crate::{RawTrie, Trie};

/// Line statistics from one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines read.
    pub lines: usize,
    /// Lines that became an added entry.
    pub added: usize,
    /// Lines skipped by [`LoadOptions`].
    pub skipped: usize,
}

/// Feeds every prepared line of `reader` to `add`.
fn for_each_entry<R, F>(mut reader: R, options: &LoadOptions, mut add: F) -> Result<LoadStats>
where
    R: BufRead,
    F: FnMut(&str),
{
    let mut stats = LoadStats::default();
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        stats.lines += 1;
        match options.prepare(&line) {
            Some(entry) => {
                add(entry);
                stats.added += 1;
            }
            None => stats.skipped += 1,
        }
    }
    Ok(stats)
}

impl RawTrie {
    /// Adds one occurrence per line of `reader`.
    ///
    /// Fails on the first read error, including invalid UTF-8; lines read
    /// before the failure stay added.
    pub fn extend_from_reader<R: BufRead>(
        &mut self,
        reader: R,
        options: &LoadOptions,
    ) -> Result<LoadStats> {
        for_each_entry(reader, options, |entry| {
            self.add_one(entry);
        })
    }
}

impl Trie {
    /// Builds a new trie from a word-list file, one entry per line.
    ///
    /// With the default options line terminators are stripped and empty lines
    /// skipped. The last line counts even without a trailing newline.
    pub fn load_word_list(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Trie> {
        let path = path.as_ref();
        let start = Instant::now();

        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let mut raw = RawTrie::new();
        let stats = raw
            .extend_from_reader(BufReader::new(file), options)
            .map_err(|e| e.at_path(path))?;

        info!(
            path = %path.display(),
            words = stats.added,
            skipped = stats.skipped,
            entries = raw.len(),
            elapsed = ?start.elapsed(),
            "loaded word list"
        );
        Ok(Trie::from(raw))
    }

    /// Adds one occurrence per line of `reader` to this trie.
    ///
    /// The exclusive lock is taken per line, so concurrent readers keep
    /// making progress during a long load.
    pub fn extend_from_reader<R: BufRead>(&self, reader: R, options: &LoadOptions) -> Result<LoadStats> {
        let stats = for_each_entry(reader, options, |entry| {
            self.write().add_one(entry);
        })?;
        debug!(lines = stats.lines, added = stats.added, "extended trie from reader");
        Ok(stats)
    }
}
