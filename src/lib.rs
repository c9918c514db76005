/// Wordcount - letter frequency analysis for plain-text books
///
/// This library loads a text file, optionally drops the preamble and license
/// around the book itself, and computes the relative frequency of each of the
/// 26 Latin letters together with basic book statistics.

pub mod core;
pub mod utils;

pub use crate::core::analyzer::{
    FrequencyTable, LetterAnalysis, LetterAnalyzer, OccurrenceTable, Stats, ALPHABET,
};
pub use crate::core::chart::{ChartSink, TerminalBarChart};
pub use crate::core::document::Document;
pub use crate::core::error::AnalysisError;
pub use crate::core::preamble::strip_preamble;
pub use crate::utils::file_utils::load_document;
pub use crate::utils::output_formatter::Report;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyze a single file and return its letter frequencies
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `file_path` - Path to the file to analyze
/// * `skip` - Optional marker delimiting the preamble and license
///
/// # Returns
///
/// Occurrence and frequency tables of the (filtered) file
pub fn analyze_file<P: AsRef<std::path::Path>>(
    file_path: P,
    skip: Option<&str>,
) -> anyhow::Result<LetterAnalysis> {
    let document = load_document(file_path.as_ref())?;
    let document = strip_preamble(document, skip);
    Ok(LetterAnalyzer::new().analyze(&document))
}

/// Command-line application functionality
pub mod app {
    use std::io::Write;
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;

    use crate::core::analyzer::{LetterAnalyzer, ALPHABET};
    use crate::core::chart::ChartSink;
    use crate::core::preamble::strip_preamble;
    use crate::utils::file_utils::load_document;
    use crate::utils::output_formatter::{self, Report};

    /// Options for a single run
    #[derive(Debug, Clone, Default)]
    pub struct RunOptions {
        /// Input text file
        pub input: PathBuf,
        /// Render the frequency bar chart
        pub plot: bool,
        /// Print the book stats block
        pub stats: bool,
        /// Marker line delimiting preamble and license
        pub skip: Option<String>,
        /// Also export the report as JSON to this path
        pub json: Option<PathBuf>,
    }

    /// Run the whole pipeline and write the text report to `out`
    ///
    /// Nothing is written to `out` until the report is complete, so a failure
    /// never leaves a partial report behind. The chart, if requested, is drawn
    /// after the report.
    ///
    /// # Arguments
    ///
    /// * `options` - What to analyze and report
    /// * `out` - Destination of the text report
    /// * `chart` - Sink receiving the frequencies when `options.plot` is set
    ///
    /// # Returns
    ///
    /// The report that was written
    pub fn run<W: Write>(
        options: &RunOptions,
        out: &mut W,
        chart: &mut dyn ChartSink,
    ) -> Result<Report> {
        let start_time = Instant::now();

        let document = load_document(&options.input)?;
        let document = strip_preamble(document, options.skip.as_deref());

        let analyzer = LetterAnalyzer::new();
        let analysis = analyzer.analyze(&document);
        let stats = options.stats.then(|| analyzer.compute_stats(&document));

        let report = Report {
            input: options.input.clone(),
            skip_marker: options.skip.clone(),
            analysis,
            stats,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        };

        if let Some(json_path) = &options.json {
            output_formatter::export_report_json(&report, json_path)?;
        }

        out.write_all(output_formatter::format_report(&report).as_bytes())
            .context("Failed to write report")?;
        out.flush().context("Failed to write report")?;

        if options.plot {
            info!("Plotting stuff...");
            chart
                .render(&ALPHABET, report.analysis.frequencies.values())
                .context("Failed to render frequency chart")?;
        }

        info!("All done");
        Ok(report)
    }
}
