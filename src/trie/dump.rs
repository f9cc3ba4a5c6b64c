//! Human-readable rendering of a subtree. Debug aid only, not a file format.

use core::fmt::Write as _;

use super::arena::BranchArena;

const INDENT: usize = 2;
const ROOT_LABEL: &str = "<root>";

/// Renders the subtree rooted at `start`, one line per branch:
///
/// ```text
/// <root> count=0 children=1
///   c count=0 children=1
///     a count=0 children=1
///       t count=2 children=0
/// ```
///
/// `label` is the character on the edge into `start`, or `None` for the root.
pub(crate) fn render(arena: &BranchArena, start: usize, label: Option<char>) -> String {
    let mut out = String::new();
    // (branch index, edge label, depth)
    let mut stack = vec![(start, label, 0usize)];

    while let Some((idx, label, depth)) = stack.pop() {
        let Some(branch) = arena.get(idx) else {
            continue;
        };

        let _ = write!(out, "{:indent$}", "", indent = depth * INDENT);
        match label {
            Some(ch) => out.push(ch),
            None => out.push_str(ROOT_LABEL),
        }
        let _ = writeln!(
            out,
            " count={} children={}",
            branch.count,
            branch.children.len()
        );

        // Reverse so the smallest character is rendered first.
        for &(ch, child) in branch.children.iter().rev() {
            stack.push((child, Some(ch), depth + 1));
        }
    }

    out
}
