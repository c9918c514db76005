/// Simple example demonstrating how to use the wordcount library

use anyhow::Result;
use std::io;
use wordcount::{analyze_file, ChartSink, TerminalBarChart, ALPHABET};

fn main() -> Result<()> {
    let dir = std::env::temp_dir();
    let file_path = dir.join("wordcount_sample.txt");

    // Create a sample book with a preamble and a license
    std::fs::write(
        &file_path,
        r#"Produced for the wordcount demo.
*** START OF THIS BOOK ***
It was the best of times, it was the worst of times,
it was the age of wisdom, it was the age of foolishness.
*** END OF THIS BOOK ***
Redistribution is permitted under the usual terms.
"#,
    )?;

    println!("Analyzing file: {}", file_path.display());

    let analysis = analyze_file(&file_path, Some("*** "))?;

    println!("{} letters counted", analysis.total_occurrences);
    for (letter, frequency) in analysis.frequencies.iter() {
        if frequency > 0.0 {
            println!("  {}: {:.3}", letter, frequency);
        }
    }

    TerminalBarChart::new(io::stdout()).render(&ALPHABET, analysis.frequencies.values())?;

    std::fs::remove_file(&file_path)?;
    Ok(())
}
