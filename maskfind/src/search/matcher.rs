use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{SearchError, SearchResult};
use crate::input::Line;
use crate::results::Occurrence;

/// Substring-search algorithm used for needle scanning.
///
/// All algorithms report the same match positions; they differ only in
/// asymptotic cost. The numeric identifiers match the CLI surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchAlgorithm {
    /// 0: position-by-position comparison
    #[default]
    Naive,
    /// 1: Boyer-Moore with bad-character and good-suffix tables
    BoyerMoore,
    /// 2: Boyer-Moore-Horspool with a single shift table
    Horspool,
}

impl SearchAlgorithm {
    /// Maps a numeric identifier to its algorithm. Each identifier selects
    /// exactly one algorithm; anything outside 0..=2 is rejected.
    pub fn from_id(id: u8) -> SearchResult<Self> {
        match id {
            0 => Ok(Self::Naive),
            1 => Ok(Self::BoyerMoore),
            2 => Ok(Self::Horspool),
            other => Err(SearchError::UnknownAlgorithm(other)),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Naive => write!(f, "naive"),
            Self::BoyerMoore => write!(f, "boyer-moore"),
            Self::Horspool => write!(f, "horspool"),
        }
    }
}

/// Precomputed per-needle search state
#[derive(Debug, Clone)]
enum SearchStrategy {
    Naive,
    BoyerMoore {
        bad_char: Box<[usize; 256]>,
        good_suffix: Vec<usize>,
    },
    Horspool {
        skip: Box<[usize; 256]>,
    },
}

/// Scans lines for one concrete needle.
///
/// The skip tables are computed once at construction and reused across
/// every line the searcher visits.
#[derive(Debug, Clone)]
pub struct NeedleSearcher {
    needle: String,
    strategy: SearchStrategy,
}

impl NeedleSearcher {
    /// Compiles the needle for the requested algorithm.
    ///
    /// Needles come from mask expansion and are never empty; an empty
    /// needle is a caller bug and aborts.
    pub fn compile(needle: String, algorithm: SearchAlgorithm) -> Self {
        assert!(!needle.is_empty(), "needle must not be empty");
        let strategy = match algorithm {
            SearchAlgorithm::Naive => SearchStrategy::Naive,
            SearchAlgorithm::BoyerMoore => SearchStrategy::BoyerMoore {
                bad_char: build_last_occurrence_table(needle.as_bytes()),
                good_suffix: build_good_suffix_table(needle.as_bytes()),
            },
            // Horspool's skip table is the same last-occurrence table,
            // used without the good-suffix rule
            SearchAlgorithm::Horspool => SearchStrategy::Horspool {
                skip: build_last_occurrence_table(needle.as_bytes()),
            },
        };
        Self { needle, strategy }
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// All 0-based start positions of the needle within the haystack,
    /// lowest first. After each recorded match the scan resumes one
    /// position past the match start, so overlapping occurrences are all
    /// reported (needle `aa` in `aaa` matches at 0 and 1).
    pub fn find_positions(&self, haystack: &str) -> Vec<usize> {
        let text = haystack.as_bytes();
        let needle = self.needle.as_bytes();
        match &self.strategy {
            SearchStrategy::Naive => find_naive(text, needle),
            SearchStrategy::BoyerMoore {
                bad_char,
                good_suffix,
            } => find_boyer_moore(text, needle, bad_char, good_suffix),
            SearchStrategy::Horspool { skip } => find_horspool(text, needle, skip),
        }
    }

    /// All occurrences of the needle within one line, columns 1-based.
    pub fn find_all(&self, line: &Line) -> Vec<Occurrence> {
        self.find_positions(&line.text)
            .into_iter()
            .map(|position| Occurrence {
                line: line.ordinal,
                column: position + 1,
                needle: self.needle.clone(),
            })
            .collect()
    }
}

fn find_naive(text: &[u8], needle: &[u8]) -> Vec<usize> {
    let (n, m) = (text.len(), needle.len());
    let mut positions = Vec::new();
    if m > n {
        return positions;
    }
    let mut i = 0;
    while i + m <= n {
        if &text[i..i + m] == needle {
            positions.push(i);
        }
        i += 1;
    }
    positions
}

// Last-occurrence shifts over the needle minus its final byte
fn build_last_occurrence_table(needle: &[u8]) -> Box<[usize; 256]> {
    let m = needle.len();
    let mut table = Box::new([m; 256]);
    for (i, &b) in needle[..m - 1].iter().enumerate() {
        table[b as usize] = m - 1 - i;
    }
    table
}

// Length of the longest suffix of the needle ending at each position
fn suffix_lengths(needle: &[u8]) -> Vec<usize> {
    let m = needle.len();
    let mut suffixes = vec![0usize; m];
    suffixes[m - 1] = m;

    let mut g = m as isize - 1;
    let mut f = m as isize - 1;
    for i in (0..m - 1).rev() {
        let ii = i as isize;
        if ii > g && suffixes[(ii + m as isize - 1 - f) as usize] < (ii - g) as usize {
            suffixes[i] = suffixes[(ii + m as isize - 1 - f) as usize];
        } else {
            if ii < g {
                g = ii;
            }
            f = ii;
            while g >= 0 && needle[g as usize] == needle[(g + m as isize - 1 - f) as usize] {
                g -= 1;
            }
            suffixes[i] = (f - g) as usize;
        }
    }
    suffixes
}

fn build_good_suffix_table(needle: &[u8]) -> Vec<usize> {
    let m = needle.len();
    let suffixes = suffix_lengths(needle);
    let mut table = vec![m; m];

    let mut j = 0;
    for i in (0..m).rev() {
        if suffixes[i] == i + 1 {
            while j < m - 1 - i {
                if table[j] == m {
                    table[j] = m - 1 - i;
                }
                j += 1;
            }
        }
    }
    for i in 0..m.saturating_sub(1) {
        table[m - 1 - suffixes[i]] = m - 1 - i;
    }
    table
}

fn find_boyer_moore(
    text: &[u8],
    needle: &[u8],
    bad_char: &[usize; 256],
    good_suffix: &[usize],
) -> Vec<usize> {
    let (n, m) = (text.len(), needle.len());
    let mut positions = Vec::new();
    if m > n {
        return positions;
    }
    let mut j = 0usize;
    while j + m <= n {
        let mut i = m as isize - 1;
        while i >= 0 && needle[i as usize] == text[j + i as usize] {
            i -= 1;
        }
        if i < 0 {
            positions.push(j);
            j += 1;
        } else {
            let iu = i as usize;
            let bc_shift = bad_char[text[j + iu] as usize] as isize - (m as isize - 1 - i);
            j += good_suffix[iu].max(bc_shift.max(1) as usize);
        }
    }
    positions
}

fn find_horspool(text: &[u8], needle: &[u8], skip: &[usize; 256]) -> Vec<usize> {
    let (n, m) = (text.len(), needle.len());
    let mut positions = Vec::new();
    if m > n {
        return positions;
    }
    let mut j = 0;
    while j + m <= n {
        if &text[j..j + m] == needle {
            positions.push(j);
            j += 1;
        } else {
            j += skip[text[j + m - 1] as usize];
        }
    }
    positions
}
