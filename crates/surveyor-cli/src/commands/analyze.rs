//! Analyze command - profile a survey export and report the results.

use std::fs;
use std::path::{Path, PathBuf};

use colored::{ColoredString, Colorize};
use surveyor::profile::{
    ColumnStatistics, CorrelationAnalysis, CorrelationStrength, QualityGrade, SatisfactionLevel,
    SatisfactionSummary,
};
use surveyor::{AnalysisConfig, AnalysisResult, SourceMetadata, SurveyReport, Surveyor};
use tracing::info;

pub fn run(
    file: PathBuf,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Validate input file exists
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let config = match config {
        Some(path) => AnalysisConfig::from_json_file(&path)?,
        None => AnalysisConfig::default(),
    };

    if !json {
        println!(
            "{} {}",
            "Analyzing".cyan().bold(),
            file.display().to_string().white()
        );
    }

    let surveyor = Surveyor::with_config(config);
    let (result, source) = surveyor.analyze_file(&file)?;

    if let Some(ref path) = output {
        save(path, &source, &result)?;
        info!(path = %path.display(), "saved analysis");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if let Some(report) = result.report() {
        print_report(&source, report, verbose);
    }

    if let Some(ref path) = output {
        if !json {
            println!();
            println!(
                "{} {}",
                "Saved to".green().bold(),
                path.display().to_string().white()
            );
        }
    }

    match result {
        AnalysisResult::Failed(failure) => Err(failure.error.into()),
        AnalysisResult::Report(_) => Ok(()),
    }
}

/// Write the source metadata and result as one JSON document.
fn save(
    path: &Path,
    source: &SourceMetadata,
    result: &AnalysisResult,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = serde_json::json!({
        "source": source,
        "analysis": result,
    });
    fs::write(path, serde_json::to_string_pretty(&document)?)?;
    Ok(())
}

fn print_report(source: &SourceMetadata, report: &SurveyReport, verbose: bool) {
    let basic = &report.basic_statistics;

    println!();
    println!("{}", "Overview:".yellow().bold());
    println!("  Responses:     {}", basic.total_responses.to_string().white().bold());
    println!("  Questions:     {}", basic.column_count.to_string().white());
    println!("  Response rate: {}", basic.response_rate.to_string().white());
    if verbose {
        println!("  Format:        {:?}", source.format);
        println!("  Hash:          {}", source.hash);
    }

    println!();
    println!("{}", "Columns:".yellow().bold());
    for (name, profile) in &basic.column_analysis {
        println!(
            "  {:24} {:12} {:>6} values {:>6} unique  {}",
            name,
            profile.data_type.to_string().cyan(),
            profile.total_values,
            profile.unique_values,
            column_summary(profile.statistics.as_ref())
        );
    }

    let patterns = &report.response_patterns;
    let consistency = &patterns.response_consistency;
    println!();
    println!("{}", "Response patterns:".yellow().bold());
    println!(
        "  Complete: {}  Partial: {}  Empty: {}  ({:.1}% complete)",
        consistency.complete_responses.to_string().green(),
        consistency.partial_responses.to_string().yellow(),
        consistency.empty_responses.to_string().red(),
        consistency.consistency_rate
    );
    if verbose {
        for (name, rate) in &patterns.completion_rate {
            println!("    {:24} {:.1}% answered", name, rate);
        }
    }
    for (name, count) in &patterns.coercion_mismatches {
        println!(
            "  {} {} non-numeric value(s) ignored in '{}'",
            "!".yellow().bold(),
            count,
            name
        );
    }

    if !report.satisfaction_analysis.is_empty() {
        println!();
        println!("{}", "Satisfaction:".yellow().bold());
        for (name, profile) in &report.satisfaction_analysis {
            match &profile.summary {
                SatisfactionSummary::Numeric {
                    responses,
                    average_score,
                    satisfaction_level,
                    ..
                } => println!(
                    "  {:24} {:.2} avg over {} responses  {}",
                    name,
                    average_score,
                    responses,
                    level_colored(*satisfaction_level)
                ),
                SatisfactionSummary::Categorical {
                    responses,
                    most_common,
                    ..
                } => {
                    let top = most_common
                        .as_ref()
                        .map(|(label, count)| format!("most common '{}' ({})", label, count))
                        .unwrap_or_else(|| "no responses".to_string());
                    println!("  {:24} {} over {} responses", name, top, responses);
                }
            }
        }
    }

    println!();
    println!("{}", "Correlations:".yellow().bold());
    match &report.correlation_analysis {
        CorrelationAnalysis::Insufficient { message, .. } => {
            println!("  {}", message.dimmed());
        }
        CorrelationAnalysis::Computed { top_pairs, .. } => {
            for pair in top_pairs {
                println!(
                    "  {} ~ {}  {:+.3}  {}",
                    pair.columns.0,
                    pair.columns.1,
                    pair.correlation,
                    strength_colored(pair.strength)
                );
            }
        }
    }

    let quality = &report.data_quality;
    println!();
    println!("{}", "Data quality:".yellow().bold());
    println!(
        "  Completeness: {:.1}% ({} of {} cells missing)  {}",
        quality.completeness_rate,
        quality.missing_values,
        quality.total_cells,
        grade_colored(quality.quality_grade)
    );
    for recommendation in &quality.recommendations {
        println!("  - {}", recommendation);
    }
}

fn column_summary(statistics: Option<&ColumnStatistics>) -> String {
    match statistics {
        None => "-".dimmed().to_string(),
        Some(ColumnStatistics::Numeric(s)) => format!(
            "mean {} median {} sd {} [{} .. {}]",
            s.mean, s.median, s.std_dev, s.min, s.max
        ),
        Some(ColumnStatistics::Categorical(s)) => match &s.most_common {
            Some((label, count)) => format!(
                "{} categories, top '{}' ({})",
                s.categories, label, count
            ),
            None => format!("{} categories", s.categories),
        },
        Some(ColumnStatistics::Text(s)) => format!(
            "avg {} chars, {} words",
            s.avg_length, s.avg_word_count
        ),
        Some(ColumnStatistics::Unavailable { error }) => error.red().to_string(),
    }
}

fn level_colored(level: SatisfactionLevel) -> ColoredString {
    let label = level.to_string();
    match level {
        SatisfactionLevel::High => label.green(),
        SatisfactionLevel::Moderate => label.cyan(),
        SatisfactionLevel::Low => label.yellow(),
        SatisfactionLevel::Poor => label.red(),
    }
}

fn strength_colored(strength: CorrelationStrength) -> ColoredString {
    let label = strength.to_string();
    match strength {
        CorrelationStrength::Strong => label.green().bold(),
        CorrelationStrength::Moderate => label.green(),
        CorrelationStrength::Weak => label.yellow(),
        CorrelationStrength::VeryWeak => label.dimmed(),
    }
}

fn grade_colored(grade: QualityGrade) -> ColoredString {
    let label = grade.to_string();
    match grade {
        QualityGrade::Excellent => label.green().bold(),
        QualityGrade::Good => label.green(),
        QualityGrade::Fair => label.yellow(),
        QualityGrade::Poor => label.red().bold(),
    }
}
