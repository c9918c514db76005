/// Letter frequency analyzer
///
/// This file contains the counting side of the tool: per-letter occurrences,
/// relative frequencies and the optional book statistics. Everything here is a
/// pure function of a [`Document`], so analyzing the same document twice gives
/// identical tables.

use log::{debug, info, warn};
use serde::ser::{Serialize, Serializer};

use crate::core::document::Document;

/// The 26 lowercase Latin letters, in reporting order
pub const ALPHABET: [char; 26] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Position of `letter` in [`ALPHABET`], if it is a lowercase Latin letter
fn letter_index(letter: char) -> Option<usize> {
    if letter.is_ascii_lowercase() {
        Some((letter as u8 - b'a') as usize)
    } else {
        None
    }
}

/// Occurrence count of every letter, in alphabet order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OccurrenceTable {
    counts: [u64; 26],
}

impl OccurrenceTable {
    /// Count of `letter`; zero for anything outside the alphabet
    pub fn get(&self, letter: char) -> u64 {
        letter_index(letter).map_or(0, |i| self.counts[i])
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        ALPHABET.iter().copied().zip(self.counts.iter().copied())
    }

    fn add_line(&mut self, line: &str) {
        for c in line.to_lowercase().chars() {
            if let Some(i) = letter_index(c) {
                self.counts[i] += 1;
            }
        }
    }
}

impl Serialize for OccurrenceTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Relative frequency of every letter, in alphabet order
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrequencyTable {
    values: [f64; 26],
}

impl FrequencyTable {
    /// Normalize `occurrences` by their total.
    ///
    /// A table with no occurrences at all has no meaningful distribution; every
    /// frequency is reported as 0.0 in that case.
    pub fn from_occurrences(occurrences: &OccurrenceTable) -> Self {
        let total = occurrences.total();
        let mut values = [0.0; 26];

        if total > 0 {
            for (value, count) in values.iter_mut().zip(occurrences.counts.iter()) {
                *value = *count as f64 / total as f64;
            }
        }

        Self { values }
    }

    pub fn get(&self, letter: char) -> f64 {
        letter_index(letter).map_or(0.0, |i| self.values[i])
    }

    pub fn values(&self) -> &[f64; 26] {
        &self.values
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        ALPHABET.iter().copied().zip(self.values.iter().copied())
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

/// Basic book statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Stats {
    pub characters: usize,
    pub spaces: usize,
    pub words: usize,
    pub lines: usize,
    pub blank_lines: usize,
}

/// Result of counting letters in a document
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct LetterAnalysis {
    /// Number of characters, line terminators included
    pub characters: usize,
    pub occurrences: OccurrenceTable,
    pub total_occurrences: u64,
    pub frequencies: FrequencyTable,
    /// No letters were found; every frequency is 0.0
    pub degenerate: bool,
}

impl LetterAnalysis {
    /// True when the document held no letters and the frequencies are all zero
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }
}

/// Letter frequency analyzer
#[derive(Debug, Clone, Copy, Default)]
pub struct LetterAnalyzer;

impl LetterAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Count characters and letter occurrences in a document
    ///
    /// # Arguments
    ///
    /// * `document` - Lines to analyze
    ///
    /// # Returns
    ///
    /// Occurrence and frequency tables. When the document contains no letters
    /// the analysis is degenerate and all frequencies are 0.0.
    pub fn analyze(&self, document: &Document) -> LetterAnalysis {
        let characters = count_characters(document);
        info!("{} character(s) found.", characters);

        info!("Counting letter occurrences...");
        let mut occurrences = OccurrenceTable::default();
        for line in document.iter() {
            occurrences.add_line(line);
        }
        info!("Occurrences counted");

        let total_occurrences = occurrences.total();
        debug!("{} letter occurrence(s) in total", total_occurrences);

        if total_occurrences == 0 {
            warn!("No letters found in document, reporting all frequencies as zero");
        }

        LetterAnalysis {
            characters,
            occurrences,
            total_occurrences,
            frequencies: FrequencyTable::from_occurrences(&occurrences),
            degenerate: total_occurrences == 0,
        }
    }

    /// Compute the book statistics of a document
    pub fn compute_stats(&self, document: &Document) -> Stats {
        info!("Elaborating file stats...");

        Stats {
            characters: count_characters(document),
            spaces: document.iter().map(|line| line.matches(' ').count()).sum(),
            words: document.iter().map(count_words).sum(),
            lines: document.len(),
            blank_lines: document.iter().filter(|line| is_blank(line)).count(),
        }
    }
}

/// Whitespace as text tools usually see it: Unicode `White_Space` plus the
/// ASCII file, group, record and unit separators (U+001C to U+001F)
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Number of separator-delimited tokens in `line`
pub fn count_words(line: &str) -> usize {
    line.split(is_separator).filter(|word| !word.is_empty()).count()
}

/// True when `line` holds nothing but separators
pub fn is_blank(line: &str) -> bool {
    line.chars().all(is_separator)
}

/// Sum of line lengths in characters
pub fn count_characters(document: &Document) -> usize {
    document.iter().map(|line| line.chars().count()).sum()
}
