use memmap2::Mmap;
use std::borrow::Cow;
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

use crate::errors::{SearchError, SearchResult};

// Files under this size are read in one shot; larger ones are memory-mapped
const SMALL_FILE_THRESHOLD: u64 = 32 * 1024; // 32KB

/// One line of the input file together with its position in the file.
///
/// Lines are produced once by [`read_lines`] and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Line {
    /// 0-based position of the line in the file
    pub ordinal: usize,
    /// Line content without the trailing newline
    pub text: String,
}

/// Reads the file into its ordered sequence of lines.
pub fn read_lines(path: &Path) -> SearchResult<Vec<Line>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SearchError::file_not_found(path),
        std::io::ErrorKind::PermissionDenied => SearchError::permission_denied(path),
        _ => SearchError::IoError(e),
    })?;
    let metadata = file.metadata()?;

    let contents = if metadata.len() < SMALL_FILE_THRESHOLD {
        debug!("reading {} in one shot", path.display());
        let bytes = std::fs::read(path)?;
        decode_lossy(&bytes, path)
    } else {
        debug!("memory-mapping {}", path.display());
        let mmap = unsafe { Mmap::map(&file)? };
        decode_lossy(&mmap, path)
    };

    Ok(contents
        .lines()
        .enumerate()
        .map(|(ordinal, text)| Line {
            ordinal,
            text: text.to_string(),
        })
        .collect())
}

fn decode_lossy(bytes: &[u8], path: &Path) -> String {
    let cow = String::from_utf8_lossy(bytes);
    // An Owned cow means at least one invalid sequence was replaced
    if let Cow::Owned(_) = cow {
        warn!("Invalid UTF-8 replaced in file: {}", path.display());
    }
    cow.into_owned()
}
