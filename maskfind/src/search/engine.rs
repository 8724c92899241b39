use rayon::prelude::*;
use tracing::{debug, info};

use super::matcher::NeedleSearcher;
use crate::config::SearchConfig;
use crate::errors::{SearchError, SearchResult};
use crate::input::read_lines;
use crate::mask::Mask;
use crate::results::{MatchSet, Occurrence, ScanResults};

/// Performs a concurrent mask search over the lines of the configured file.
///
/// Mask expansion and line loading run concurrently; both finish before
/// either failure is reported, so a run with a bad mask and a bad path
/// surfaces both problems at once. Scanning then consumes lines in order,
/// fanning each line out across all compiled needles in parallel and
/// merging that line's results before the next line starts, which keeps
/// only one line's fan-out in flight at a time.
pub fn search(config: &SearchConfig) -> SearchResult<ScanResults> {
    info!(
        "Starting scan of {} with mask {:?}",
        config.input_path.display(),
        config.mask
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.thread_count.get())
        .build()
        .map_err(|e| SearchError::ThreadPool(e.to_string()))?;

    pool.install(|| {
        let (needles, lines) = rayon::join(
            || Mask::parse(config.mask.as_str()).map(|mask| mask.expand()),
            || read_lines(&config.input_path),
        );

        let (needles, lines) = match (needles, lines) {
            (Ok(needles), Ok(lines)) => (needles, lines),
            (needles, lines) => {
                let errors: Vec<SearchError> =
                    [needles.err(), lines.err()].into_iter().flatten().collect();
                return Err(SearchError::preparation(errors));
            }
        };

        let searchers: Vec<NeedleSearcher> = needles
            .into_par_iter()
            .map(|needle| NeedleSearcher::compile(needle, config.algorithm))
            .collect();

        debug!(
            "Expanded mask into {} needles, scanning {} lines on {} threads",
            searchers.len(),
            lines.len(),
            config.thread_count
        );

        let mut matches = MatchSet::new();
        for line in &lines {
            // Collect preserves needle order, so the merge below is
            // deterministic: the first needle in expansion order wins a
            // contested (line, column) slot.
            let per_needle: Vec<Vec<Occurrence>> = searchers
                .par_iter()
                .map(|searcher| searcher.find_all(line))
                .collect();

            for occurrence in per_needle.iter().flatten() {
                assert_eq!(
                    occurrence.line, line.ordinal,
                    "scanner reported an occurrence outside the line being scanned"
                );
            }

            matches.merge_line(per_needle);
        }

        info!(
            "Scan complete. Found {} matches across {} lines",
            matches.len(),
            lines.len()
        );

        Ok(ScanResults {
            lines_scanned: lines.len(),
            needles_tried: searchers.len(),
            occurrences: matches.finalize(),
        })
    })
}
