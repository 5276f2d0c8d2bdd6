/// A single home-directory entry considered for dotfile management.
///
/// Candidates are immutable once computed: the scanner fills in name, kind,
/// and size descriptor during its single enumeration pass; everything after
/// that only reads them.
use super::size::format_size;
use compact_str::CompactString;

/// Whether a candidate is a directory or a plain file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Type tag shown in front of each entry in the report listing.
    pub fn tag(self) -> &'static str {
        match self {
            Self::File => "📄 FILE",
            Self::Directory => "📁 DIR",
        }
    }
}

/// Classification outcome. Every candidate lands in exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Exact allow-list match — recommended for dotfile management.
    Safe,
    /// On neither list — needs a human decision before managing.
    Unknown,
    /// Exact or wildcard exclude match, or an entry that could not be read.
    Excluded,
}

/// Outcome of the size query for a single entry.
///
/// Failures are absorbed into explicit sentinel variants rather than
/// propagated as errors, so one unreadable entry can never abort the
/// whole report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeInfo {
    /// Regular-file length in bytes.
    Bytes(u64),
    /// Recursive count of regular files beneath a directory.
    Files(u64),
    /// Broken symlink, special file, or a failed recursive walk.
    Unavailable,
    /// The entry itself could not be stat'ed.
    AccessDenied,
}

impl SizeInfo {
    /// Human-readable descriptor rendered in parentheses in the report.
    pub fn label(&self) -> String {
        match self {
            Self::Bytes(n) => format_size(*n),
            Self::Files(n) => format!("{n} files"),
            Self::Unavailable => "N/A".to_string(),
            Self::AccessDenied => "permission denied".to_string(),
        }
    }
}

/// A dotfile entry. The name includes the leading marker dot and never
/// carries any path components.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Entry name only (NOT the full path), e.g. `.zshrc`.
    pub name: CompactString,
    pub kind: EntryKind,
    pub size: SizeInfo,
}

impl Candidate {
    pub fn new(name: CompactString, kind: EntryKind, size: SizeInfo) -> Self {
        Self { name, kind, size }
    }
}
