use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use bp_monitor_domain::{BloodPressureCategory, BloodPressureInsights};

use crate::config::OutputFormat;

const RECORDS_RULE_WIDTH: usize = 50;
const SUMMARY_RULE_WIDTH: usize = 40;
const METRICS_RULE_WIDTH: usize = 35;

/// One line of the View table
#[derive(Debug, Clone, Serialize)]
pub struct ReadingRow {
    pub date: NaiveDate,
    pub systolic: u16,
    pub diastolic: u16,
    pub category: BloodPressureCategory,
}

/// Render the stored readings, most recent first
pub fn write_readings<W: Write>(out: &mut W, rows: &[ReadingRow], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            if rows.is_empty() {
                writeln!(out, "\n-- No records found. Start by adding a reading. --")?;
                return Ok(());
            }

            writeln!(out, "\n{}", "=".repeat(RECORDS_RULE_WIDTH))?;
            writeln!(out, "         BLOOD PRESSURE MONITORING RECORDS")?;
            writeln!(out, "{}", "=".repeat(RECORDS_RULE_WIDTH))?;
            writeln!(out, "{:<12} {:<10} {:<10} {:<20}", "Date", "Systolic", "Diastolic", "Category")?;
            writeln!(out, "{}", "-".repeat(RECORDS_RULE_WIDTH))?;
            for row in rows {
                writeln!(
                    out,
                    "{:<12} {:<10} {:<10} {:<20}",
                    row.date.to_string(),
                    row.systolic,
                    row.diastolic,
                    row.category.label()
                )?;
            }
            writeln!(out, "{}", "-".repeat(RECORDS_RULE_WIDTH))?;
        }
    }
    Ok(())
}

/// Render the analysis summary, or a placeholder when there is nothing to analyze
pub fn write_insights<W: Write>(
    out: &mut W,
    insights: Option<&BloodPressureInsights>,
    format: OutputFormat,
) -> Result<()> {
    match (format, insights) {
        (OutputFormat::Json, insights) => {
            serde_json::to_writer_pretty(&mut *out, &insights)?;
            writeln!(out)?;
        }
        (OutputFormat::Table, None) => {
            writeln!(out, "\n-- Cannot analyze. No records available. --")?;
        }
        (OutputFormat::Table, Some(insights)) => {
            writeln!(out, "\n{}", "=".repeat(SUMMARY_RULE_WIDTH))?;
            writeln!(out, "           ANALYSIS SUMMARY")?;
            writeln!(out, "{}", "=".repeat(SUMMARY_RULE_WIDTH))?;
            writeln!(out, "Total Readings: {}", insights.reading_count)?;
            writeln!(out, "\n{:<15} {:<10} {:<10}", "Metric", "Systolic", "Diastolic")?;
            writeln!(out, "{}", "-".repeat(METRICS_RULE_WIDTH))?;
            writeln!(
                out,
                "{:<15} {:<10} {:<10}",
                "Average:",
                format!("{:.1}", insights.avg_systolic),
                format!("{:.1}", insights.avg_diastolic)
            )?;
            writeln!(out, "{:<15} {:<10} {:<10}", "Max:", insights.max_systolic, insights.max_diastolic)?;
            writeln!(out, "{:<15} {:<10} {:<10}", "Min:", insights.min_systolic, insights.min_diastolic)?;
            writeln!(out, "{}", "-".repeat(METRICS_RULE_WIDTH))?;
            writeln!(out, "Overall Status based on Average: {}", insights.category)?;
            writeln!(out, "{}", "=".repeat(SUMMARY_RULE_WIDTH))?;
        }
    }
    Ok(())
}
