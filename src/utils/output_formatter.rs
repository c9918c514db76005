/// Output formatter for analysis reports
///
/// This module turns an analysis into the plain-text report printed on stdout
/// and exports the same report as JSON.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::core::analyzer::{FrequencyTable, LetterAnalysis, Stats};
use crate::core::error::{AnalysisError, AnalysisResult};

/// Everything produced by one run of the tool
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub input: PathBuf,
    pub skip_marker: Option<String>,
    pub analysis: LetterAnalysis,
    pub stats: Option<Stats>,
    pub elapsed_seconds: f64,
}

/// One `relative frequency of letter <l>: <f>` line per letter, a to z
pub fn format_frequencies(frequencies: &FrequencyTable) -> String {
    let mut output = String::new();
    for (letter, frequency) in frequencies.iter() {
        output.push_str(&format!(
            "relative frequency of letter {}: {}\n",
            letter,
            format_float(frequency)
        ));
    }
    output
}

/// The book stats block
pub fn format_stats(stats: &Stats) -> String {
    format!(
        "book stats:\n\
         number of characters: {}, of which {} are spaces\n\
         number of words: {}\n\
         number of lines: {}, of which {} are empty\n",
        stats.characters, stats.spaces, stats.words, stats.lines, stats.blank_lines
    )
}

pub fn format_elapsed(elapsed_seconds: f64) -> String {
    format!("total elapsed time = {}\n", format_float(elapsed_seconds))
}

/// Shortest round-trip representation of `value`, with at least two exponent
/// digits and an explicit exponent sign in scientific notation (`1e-05`,
/// `1e+16`)
pub fn format_float(value: f64) -> String {
    let repr = format!("{:?}", value);
    let (mantissa, exponent) = match repr.split_once('e') {
        Some(parts) => parts,
        None => return repr,
    };

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}

/// Format the complete text report
///
/// # Arguments
///
/// * `report` - Report to format
///
/// # Returns
///
/// Frequencies, then the stats block if present, then the elapsed time
pub fn format_report(report: &Report) -> String {
    let mut output = format_frequencies(&report.analysis.frequencies);

    if let Some(stats) = &report.stats {
        output.push_str(&format_stats(stats));
    }

    output.push_str(&format_elapsed(report.elapsed_seconds));
    output
}

/// Export a report to a JSON file
///
/// # Arguments
///
/// * `report` - Report to export
/// * `output_path` - Path where the JSON file will be written
///
/// # Returns
///
/// Result indicating success or failure
pub fn export_report_json(report: &Report, output_path: &Path) -> AnalysisResult<()> {
    let export_error = |reason: String| AnalysisError::Export {
        path: output_path.to_path_buf(),
        reason,
    };

    let file = File::create(output_path).map_err(|e| export_error(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .map_err(|e| export_error(e.to_string()))?;
    writer.flush().map_err(|e| export_error(e.to_string()))?;

    info!("Report exported to {}", output_path.display());
    Ok(())
}
