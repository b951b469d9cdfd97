use std::collections::HashSet;

/// Reduce `lines` to a set of trimmed, non-empty lines.
///
/// Blank lines, duplicates, and ordering are deliberately discarded: the
/// result is only ever used for comparison, never for reconstruction, so
/// incidental formatting drift must not show up as a difference.
#[must_use]
pub fn normalize_lines<'a>(lines: &[&'a str]) -> HashSet<&'a str> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect()
}
