//! Snapshot files: every member of a trie with its count.
//!
//! Binary layout: 4 magic bytes, 1 version byte, then the postcard encoding
//! of the member list. The JSON form is the same record without a header.
//! Loading a snapshot re-adds each member with its full count, so a dump
//! followed by a load reproduces the original members exactly.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::DumpFormat;
use crate::error::{Error, Result};
use crate::{MemberInfo, RawTrie, Trie};

/// Magic bytes for binary snapshot files
const SNAPSHOT_MAGIC: &[u8; 4] = b"TRIE";

/// Version written by `encode`
const SNAPSHOT_VERSION: u8 = 1;

#[derive(Serialize)]
struct SnapshotRef<'a> {
    members: &'a [MemberInfo],
}

#[derive(Deserialize)]
struct Snapshot {
    members: Vec<MemberInfo>,
}

/// Serializes `members` in the given format.
pub fn encode(members: &[MemberInfo], format: DumpFormat) -> Result<Vec<u8>> {
    let snapshot = SnapshotRef { members };
    match format {
        DumpFormat::Binary => {
            let mut data = Vec::with_capacity(SNAPSHOT_MAGIC.len() + 1);
            data.extend_from_slice(SNAPSHOT_MAGIC);
            data.push(SNAPSHOT_VERSION);
            data.extend_from_slice(&postcard::to_stdvec(&snapshot)?);
            Ok(data)
        }
        DumpFormat::Json => Ok(serde_json::to_vec(&snapshot)?),
    }
}

/// Parses a snapshot and validates every record.
pub fn decode(bytes: &[u8], format: DumpFormat) -> Result<Vec<MemberInfo>> {
    let snapshot: Snapshot = match format {
        DumpFormat::Binary => {
            let body = bytes
                .strip_prefix(SNAPSHOT_MAGIC.as_slice())
                .ok_or_else(|| Error::invalid_snapshot("missing TRIE magic bytes"))?;
            let (&version, body) = body
                .split_first()
                .ok_or_else(|| Error::invalid_snapshot("missing version byte"))?;
            if version != SNAPSHOT_VERSION {
                return Err(Error::invalid_snapshot(format!(
                    "unsupported version {version} (expected {SNAPSHOT_VERSION})"
                )));
            }
            postcard::from_bytes(body)?
        }
        DumpFormat::Json => serde_json::from_slice(bytes)?,
    };

    if let Some(bad) = snapshot.members.iter().find(|m| m.count <= 0) {
        return Err(Error::invalid_snapshot(format!(
            "member {:?} has non-positive count {}",
            bad.value, bad.count
        )));
    }
    Ok(snapshot.members)
}

impl RawTrie {
    /// Builds a trie from decoded members, adding each with its full count.
    pub fn from_members<I>(members: I) -> RawTrie
    where
        I: IntoIterator<Item = MemberInfo>,
    {
        let mut raw = RawTrie::new();
        for member in members {
            raw.add_count(&member.value, member.count);
        }
        raw
    }
}

impl Trie {
    /// Writes a snapshot of every member to `writer`.
    ///
    /// Members are collected under the shared lock, which is released before
    /// any bytes are written.
    pub fn write_snapshot<W: Write>(&self, mut writer: W, format: DumpFormat) -> Result<usize> {
        let members = self.members();
        let bytes = encode(&members, format)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        debug!(members = members.len(), bytes = bytes.len(), %format, "wrote snapshot");
        Ok(members.len())
    }

    /// Reads a snapshot from `reader` into a new trie.
    pub fn read_snapshot<R: Read>(mut reader: R, format: DumpFormat) -> Result<Trie> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let members = decode(&bytes, format)?;
        debug!(members = members.len(), bytes = bytes.len(), %format, "read snapshot");
        Ok(Trie::from(RawTrie::from_members(members)))
    }

    /// Writes a snapshot file, replacing any existing file at `path`.
    pub fn dump_to_file(&self, path: impl AsRef<Path>, format: DumpFormat) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        let written = self
            .write_snapshot(BufWriter::new(file), format)
            .map_err(|e| e.at_path(path))?;
        info!(path = %path.display(), members = written, %format, "dumped trie");
        Ok(())
    }

    /// Loads a snapshot file written by [`dump_to_file`](Self::dump_to_file).
    pub fn load_dump(path: impl AsRef<Path>, format: DumpFormat) -> Result<Trie> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let trie = Trie::read_snapshot(BufReader::new(file), format).map_err(|e| e.at_path(path))?;
        info!(path = %path.display(), entries = trie.len(), %format, "loaded trie dump");
        Ok(trie)
    }
}
