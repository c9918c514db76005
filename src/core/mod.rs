/// Core module for letter frequency analysis
///
/// This module contains the document model, the preamble filter, the letter
/// analyzer and the chart sink used to visualize its results.

pub mod analyzer;
pub mod chart;
pub mod document;
pub mod error;
pub mod preamble;
