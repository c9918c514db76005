/// Bar chart rendering
///
/// The analyzer only hands labels and values to a [`ChartSink`]; how they are
/// drawn is up to the sink. [`TerminalBarChart`] draws horizontal bars of `#`
/// characters, one row per label.

use std::io::Write;

use anyhow::{bail, Result};
use colored::Colorize;

/// Default width of the longest bar, in characters
pub const DEFAULT_BAR_WIDTH: usize = 60;

/// Destination for a labelled bar chart
pub trait ChartSink {
    /// Draw one bar per label; `labels` and `values` have the same length
    fn render(&mut self, labels: &[char], values: &[f64]) -> Result<()>;
}

/// Horizontal bar chart written to a terminal or any other writer
pub struct TerminalBarChart<W: Write> {
    out: W,
    width: usize,
}

impl<W: Write> TerminalBarChart<W> {
    pub fn new(out: W) -> Self {
        Self::with_width(out, DEFAULT_BAR_WIDTH)
    }

    pub fn with_width(out: W, width: usize) -> Self {
        Self { out, width }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Number of `#` characters for `value` when `max` fills the full width
    fn bar_len(&self, value: f64, max: f64) -> usize {
        if max <= 0.0 || !value.is_finite() || value <= 0.0 {
            return 0;
        }
        ((value / max) * self.width as f64).round() as usize
    }
}

impl<W: Write> ChartSink for TerminalBarChart<W> {
    fn render(&mut self, labels: &[char], values: &[f64]) -> Result<()> {
        if labels.len() != values.len() {
            bail!(
                "Chart needs one value per label ({} labels, {} values)",
                labels.len(),
                values.len()
            );
        }

        let max = values.iter().copied().fold(0.0_f64, f64::max);

        writeln!(self.out, "{}", "letter frequency".bold())?;
        for (label, value) in labels.iter().zip(values) {
            let bar = "#".repeat(self.bar_len(*value, max));
            writeln!(self.out, "{} | {} {:.4}", label, bar.green(), value)?;
        }
        self.out.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_plain(labels: &[char], values: &[f64], width: usize) -> String {
        colored::control::set_override(false);
        let mut chart = TerminalBarChart::with_width(Vec::new(), width);
        chart.render(labels, values).unwrap();
        String::from_utf8(chart.into_inner()).unwrap()
    }

    #[test]
    fn test_largest_value_fills_width() {
        let output = render_plain(&['a', 'b'], &[0.75, 0.25], 8);
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "a | ######## 0.7500");
        assert_eq!(lines[2], "b | ### 0.2500");
    }

    #[test]
    fn test_all_zero_values_draw_empty_bars() {
        let output = render_plain(&['a', 'b'], &[0.0, 0.0], 10);
        assert!(!output.contains('#'));
        assert!(output.contains("a |  0.0000"));
    }

    #[test]
    fn test_mismatched_lengths_rejected() {
        let mut chart = TerminalBarChart::new(Vec::new());
        assert!(chart.render(&['a', 'b'], &[1.0]).is_err());
    }
}
