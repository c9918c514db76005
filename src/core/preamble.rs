/// Preamble and license removal
///
/// Texts such as Project Gutenberg books wrap the actual book between a
/// preamble and a license section, both delimited by a line containing a
/// known marker. Every marker line flips the filter between "outside the
/// book" and "inside the book"; only lines read while inside are kept.

use log::{info, warn};

use crate::core::document::Document;

/// State of the preamble toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookRegion {
    /// Reading preamble or license text
    #[default]
    OutsideBook,
    /// Reading the book itself
    InsideBook,
}

impl BookRegion {
    pub fn toggled(self) -> Self {
        match self {
            BookRegion::OutsideBook => BookRegion::InsideBook,
            BookRegion::InsideBook => BookRegion::OutsideBook,
        }
    }

    pub fn is_inside(self) -> bool {
        self == BookRegion::InsideBook
    }
}

/// Advance the toggle by one line.
///
/// Returns the next state and whether the line belongs to the book. Marker
/// lines are never part of the book.
pub fn step(region: BookRegion, line: &str, marker: &str) -> (BookRegion, bool) {
    if line.contains(marker) {
        (region.toggled(), false)
    } else {
        (region, region.is_inside())
    }
}

/// Keep only the book lines of `document`.
///
/// With no marker the document is returned unchanged. A marker that never
/// appears leaves the filter outside the book for the whole text, so the
/// result is empty. An unterminated last region is kept.
pub fn strip_preamble(document: Document, marker: Option<&str>) -> Document {
    let marker = match marker {
        Some(marker) => marker,
        None => return document,
    };

    info!("Deleting preamble and license...");

    let mut region = BookRegion::default();
    let mut markers_found = 0usize;
    let mut book = Vec::new();

    for line in document.iter() {
        let (next, keep) = step(region, line, marker);
        if next != region {
            markers_found += 1;
            info!("book value switched to {}", next.is_inside());
        }
        if keep {
            book.push(line.to_string());
        }
        region = next;
    }

    info!("{} marker line(s) matching {:?} found", markers_found, marker);

    if markers_found == 0 {
        warn!("Marker {:?} not found, no book lines retained", marker);
    } else if region.is_inside() {
        warn!(
            "Odd number of marker lines ({}), keeping text after the last one",
            markers_found
        );
    }

    info!("File data updated successfully ({} of {} lines kept)", book.len(), document.len());

    Document::new(book)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::{Mutex, OnceLock};

    fn doc(lines: &[&str]) -> Document {
        lines.iter().copied().collect()
    }

    /// Logger keeping every message so tests can look for them
    struct CaptureLogger {
        messages: Mutex<Vec<String>>,
    }

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut messages) = self.messages.lock() {
                messages.push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    fn captured_logger() -> &'static CaptureLogger {
        static LOGGER: OnceLock<CaptureLogger> = OnceLock::new();
        let logger = LOGGER.get_or_init(|| CaptureLogger {
            messages: Mutex::new(Vec::new()),
        });
        if log::set_logger(logger).is_ok() {
            log::set_max_level(log::LevelFilter::Info);
        }
        logger
    }

    #[test]
    fn test_region_between_markers() {
        let filtered = strip_preamble(doc(&["x", "M", "a", "b", "M", "c"]), Some("M"));
        assert_eq!(filtered, doc(&["a", "b"]));
    }

    #[test]
    fn test_additional_markers_toggle_again() {
        let filtered = strip_preamble(
            doc(&["x", "M", "a", "b", "M", "c", "M", "d", "M", "e"]),
            Some("M"),
        );
        assert_eq!(filtered, doc(&["a", "b", "d"]));
    }

    #[test]
    fn test_odd_marker_count_keeps_trailing_region() {
        let filtered = strip_preamble(doc(&["x", "M", "a", "M", "b", "M", "c"]), Some("M"));
        assert_eq!(filtered, doc(&["a", "c"]));
    }

    #[test]
    fn test_missing_marker_yields_empty_document() {
        let filtered = strip_preamble(doc(&["a", "b", "c"]), Some("*** START"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_no_marker_passthrough() {
        let original = doc(&["x\n", "M\n", "a\n"]);
        let filtered = strip_preamble(original.clone(), None);
        assert_eq!(filtered, original);
    }

    #[test]
    fn test_marker_match_is_substring_and_case_sensitive() {
        let filtered = strip_preamble(
            doc(&[
                "header\n",
                "*** START OF THE BOOK ***\n",
                "start of chapter one\n",
                "*** END OF THE BOOK ***\n",
                "license\n",
            ]),
            Some("***"),
        );
        assert_eq!(filtered, doc(&["start of chapter one\n"]));

        let filtered = strip_preamble(doc(&["START\n", "a\n"]), Some("start"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_marker_count_logged_for_every_run() {
        let logger = captured_logger();

        strip_preamble(doc(&["x", "<<even>>", "a", "<<even>>"]), Some("<<even>>"));
        strip_preamble(doc(&["x", "a"]), Some("<<absent>>"));

        let messages = logger.messages.lock().unwrap();
        assert!(messages
            .iter()
            .any(|m| m == "2 marker line(s) matching \"<<even>>\" found"));
        assert!(messages
            .iter()
            .any(|m| m == "0 marker line(s) matching \"<<absent>>\" found"));
    }

    #[test]
    fn test_step_reducer() {
        assert_eq!(step(BookRegion::OutsideBook, "M", "M"), (BookRegion::InsideBook, false));
        assert_eq!(step(BookRegion::InsideBook, "M", "M"), (BookRegion::OutsideBook, false));
        assert_eq!(step(BookRegion::InsideBook, "a", "M"), (BookRegion::InsideBook, true));
        assert_eq!(step(BookRegion::OutsideBook, "a", "M"), (BookRegion::OutsideBook, false));
    }
}
