// Colored terminal output for analysis reports.
//
// This module handles all terminal-specific formatting: colors, tables,
// summary markers. The main.rs display paths delegate here.

use colored::Colorize;

use crate::analysis::AnalysisResult;
use crate::scoring::recommend::RecommendedAction;

/// Display a single analysis in detail.
pub fn display_analysis(result: &AnalysisResult) {
    println!("\n{}", "=== Risk Analysis ===".bold());
    println!("  Risk score: {:.2}/100", result.risk_score);
    println!(
        "  Recommended action: {}",
        colorize_action(result.recommended_action)
    );
    println!("  Threat probability: {:.4}", result.threat_probability);
    println!("  Bullying probability: {:.4}", result.bullying_probability);
    println!("  Anomaly score: {:.4}", result.anomaly_score);

    let escalation_note = if result.escalation_predicted {
        " (escalation predicted)".red().bold().to_string()
    } else {
        String::new()
    };
    println!(
        "  Escalation probability: {:.4}{}",
        result.escalation_probability, escalation_note
    );

    if result.key_indicators.is_empty() {
        println!("  Indicators: {}", "none".dimmed());
    } else {
        println!("  Indicators:");
        for indicator in &result.key_indicators {
            println!("    - {indicator}");
        }
    }
}

/// Display a batch of analyses as a ranked table plus a tier summary.
pub fn display_batch(results: &[(String, AnalysisResult)]) {
    if results.is_empty() {
        println!("No samples analyzed.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Batch Analysis ({} samples) ===", results.len()).bold()
    );
    println!();

    // Header
    println!(
        "  {:>4}  {:<44} {:>7}  {:<22}  {}",
        "#".dimmed(),
        "Sample".dimmed(),
        "Score".dimmed(),
        "Action".dimmed(),
        "Flags".dimmed(),
    );
    println!("  {}", "-".repeat(88).dimmed());

    for (i, (text, result)) in results.iter().enumerate() {
        let preview = super::truncate_chars(text, 40);
        println!(
            "  {:>4}. {:<44} {:>7.2}  {:<22}  {}",
            i + 1,
            preview,
            result.risk_score,
            colorize_action(result.recommended_action),
            result.key_indicators.len(),
        );
    }

    println!();

    // Summary
    let immediate = count_action(results, RecommendedAction::ImmediateEscalation);
    let review = count_action(results, RecommendedAction::SchedulePoliceReview);
    let monitor = count_action(results, RecommendedAction::MonitorClosely);

    if immediate > 0 {
        println!(
            "  {} {} samples need immediate escalation",
            "!!".red().bold(),
            immediate
        );
    }
    if review > 0 {
        println!(
            "  {} {} samples scheduled for police review",
            "!".bright_red(),
            review
        );
    }
    if monitor > 0 {
        println!("  {} {} samples to monitor closely", "~".yellow(), monitor);
    }
}

fn count_action(results: &[(String, AnalysisResult)], action: RecommendedAction) -> usize {
    results
        .iter()
        .filter(|(_, r)| r.recommended_action == action)
        .count()
}

/// Colorize a recommended action for terminal display.
fn colorize_action(action: RecommendedAction) -> colored::ColoredString {
    match action {
        RecommendedAction::ImmediateEscalation => action.as_str().red().bold(),
        RecommendedAction::SchedulePoliceReview => action.as_str().bright_red(),
        RecommendedAction::MonitorClosely => action.as_str().yellow(),
        RecommendedAction::SafeZone => action.as_str().green(),
    }
}
