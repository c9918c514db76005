/// Utility modules for the letter frequency analyzer
///
/// This module contains utility functions for loading input files and
/// formatting or exporting reports.

pub mod file_utils;
pub mod output_formatter;
