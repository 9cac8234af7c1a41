//! Sample command - write a synthetic survey to CSV.

use std::path::PathBuf;

use colored::Colorize;
use surveyor::input::sample;
use tracing::debug;

pub fn run(
    rows: usize,
    seed: u64,
    output: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if rows == 0 {
        return Err("--rows must be at least 1".into());
    }

    let dataset = sample::generate(rows, seed);
    let columns = dataset.column_names();

    let mut writer = csv::Writer::from_path(&output)?;
    writer.write_record(&columns)?;
    for record in dataset.records() {
        writer.write_record(
            columns
                .iter()
                .map(|&name| record.get(name).map(|v| v.to_text()).unwrap_or_default()),
        )?;
    }
    writer.flush()?;

    debug!(rows, seed, path = %output.display(), "wrote sample survey");

    println!(
        "{} {} responses to {}",
        "Generated".green().bold(),
        rows.to_string().white().bold(),
        output.display().to_string().white()
    );
    if verbose {
        println!("Columns: {}", columns.join(", "));
    }
    println!(
        "Run {} to analyze it",
        format!("surveyor analyze {}", output.display()).cyan().bold()
    );

    Ok(())
}
