use crate::consts::{BEGIN_EDITABLE_MARKER, END_EDITABLE_MARKER};

/// The editable region of a task file, delimited by two sentinel comment
/// lines. `begin` and `end` are the zero-based indices of the marker lines
/// themselves, so the user-owned lines sit strictly between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gap {
    pub begin: usize,
    pub end: usize,
}

impl Gap {
    /// The lines strictly between the markers.
    ///
    /// # Panics
    ///
    /// Panics if the gap does not fit in `lines`; a gap is only meaningful
    /// for the line sequence it was located in.
    #[must_use]
    pub fn editable<'a, 'b>(&self, lines: &'a [&'b str]) -> &'a [&'b str] {
        if self.begin + 1 >= self.end {
            &[]
        } else {
            &lines[self.begin + 1..self.end]
        }
    }

    /// The lines outside the region, marker lines included on both ends.
    ///
    /// # Panics
    ///
    /// Panics if the gap does not fit in `lines`; a gap is only meaningful
    /// for the line sequence it was located in.
    #[must_use]
    pub fn scaffold<'a>(&self, lines: &[&'a str]) -> Vec<&'a str> {
        let mut result = Vec::with_capacity(lines.len() - (self.end - self.begin) + 1);
        result.extend_from_slice(&lines[..=self.begin]);
        result.extend_from_slice(&lines[self.end..]);
        result
    }
}

/// Result of scanning a file for the editable-region markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapScan {
    /// Neither marker, or only one of them, is present: the whole file is
    /// user territory. A legitimate state, not an error.
    Missing,
    /// Both markers found, in order.
    Found(Gap),
    /// Both markers found, but the closing marker precedes the opening one.
    /// The region is unusable; consumers degrade this to [`GapScan::Missing`]
    /// after reporting it.
    OutOfOrder { begin: usize, end: usize },
}

impl GapScan {
    /// The located gap, if the scan produced a usable one.
    #[must_use]
    pub const fn gap(self) -> Option<Gap> {
        match self {
            Self::Found(gap) => Some(gap),
            Self::Missing | Self::OutOfOrder { .. } => None,
        }
    }
}

/// Scan every line for the sentinel markers delimiting the editable region.
///
/// The last occurrence of each marker kind wins; files with several marker
/// pairs are not supported and collapse to the final pair.
#[must_use]
pub fn locate_gap(lines: &[&str]) -> GapScan {
    let mut begin = None;
    let mut end = None;

    for (index, line) in lines.iter().enumerate() {
        if line.contains(BEGIN_EDITABLE_MARKER) {
            begin = Some(index);
        }
        if line.contains(END_EDITABLE_MARKER) {
            end = Some(index);
        }
    }

    match (begin, end) {
        (Some(begin), Some(end)) if begin <= end => GapScan::Found(Gap { begin, end }),
        (Some(begin), Some(end)) => GapScan::OutOfOrder { begin, end },
        _ => GapScan::Missing,
    }
}
