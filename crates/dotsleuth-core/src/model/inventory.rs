/// Bucketed inventory — the complete result of one pass over the home
/// directory.
///
/// The three buckets partition the candidate set: every dotfile entry lands
/// in exactly one of them. Populated by a single control flow in the
/// scanner, sorted once at the end, read-only thereafter.
use super::candidate::{Candidate, Category};

#[derive(Debug, Default)]
pub struct Inventory {
    /// Exact allow-list matches — recommended for management.
    pub safe: Vec<Candidate>,
    /// On neither list — review before managing.
    pub unknown: Vec<Candidate>,
    /// Exclude-set matches and unreadable entries.
    pub excluded: Vec<Candidate>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate to the bucket for `category`.
    pub fn push(&mut self, category: Category, candidate: Candidate) {
        match category {
            Category::Safe => self.safe.push(candidate),
            Category::Unknown => self.unknown.push(candidate),
            Category::Excluded => self.excluded.push(candidate),
        }
    }

    /// Sort every bucket in ascending lexicographic order by entry name.
    pub fn sort(&mut self) {
        for bucket in [&mut self.safe, &mut self.unknown, &mut self.excluded] {
            bucket.sort_unstable_by(|a, b| a.name.cmp(&b.name));
        }
    }

    /// Total number of candidates across all buckets.
    pub fn len(&self) -> usize {
        self.safe.len() + self.unknown.len() + self.excluded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
