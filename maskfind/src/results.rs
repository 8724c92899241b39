use serde::Serialize;
use std::collections::HashSet;

/// One recorded match of a needle at a specific line and column.
///
/// Line ordinals are 0-based; columns are 1-based byte offsets of the
/// match's first character within the line. Occurrences are never mutated
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    /// 0-based ordinal of the line within the input file
    pub line: usize,
    /// 1-based column of the match's first character
    pub column: usize,
    /// The concrete needle that matched
    pub needle: String,
}

/// The accumulating, deduplicated collection of occurrences for one scan.
///
/// Owned exclusively by the coordinator while scanning: workers return
/// their per-needle results and a single merge step appends them here, so
/// no two writers ever touch the set at the same instant.
#[derive(Debug, Default)]
pub struct MatchSet {
    occurrences: Vec<Occurrence>,
    seen: HashSet<(usize, usize)>,
}

impl MatchSet {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    /// Merges one line's per-needle scan results.
    ///
    /// Two occurrences at the same (line, column) are the same logical
    /// match even when produced by different needles. Results arrive in
    /// needle scan order, and the first needle to claim a position keeps
    /// it; later claims are dropped.
    pub fn merge_line(&mut self, per_needle: Vec<Vec<Occurrence>>) {
        for occurrences in per_needle {
            for occurrence in occurrences {
                if self.seen.insert((occurrence.line, occurrence.column)) {
                    self.occurrences.push(occurrence);
                }
            }
        }
    }

    /// Consumes the set into a totally ordered sequence: line ascending,
    /// then column ascending. Deduplication guarantees no (line, column)
    /// ties remain, so the order is strict.
    pub fn finalize(mut self) -> Vec<Occurrence> {
        self.occurrences
            .sort_unstable_by_key(|occurrence| (occurrence.line, occurrence.column));
        self.occurrences
    }
}

/// The complete output of one scan run.
#[derive(Debug, Clone, Default)]
pub struct ScanResults {
    /// All occurrences, ordered by (line, column)
    pub occurrences: Vec<Occurrence>,
    /// Number of lines scanned
    pub lines_scanned: usize,
    /// Number of needles the mask expanded into
    pub needles_tried: usize,
}
