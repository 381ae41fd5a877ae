use std::io::{BufRead, Write};

use anyhow::Result;
use chrono::Local;
use tracing::debug;

use bp_monitor_domain::{parse_reading_date, BloodPressureServiceTrait};

use crate::config::OutputFormat;

pub mod render;

use render::{write_insights, write_readings, ReadingRow};

/// Options offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Analyze,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::View),
            "3" => Some(MenuChoice::Analyze),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Interactive menu loop over a record store.
///
/// Input and output are generic so a session can be driven from any reader,
/// which is how the tests script it.
pub struct Console<S, R, W> {
    service: S,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<S, R, W> Console<S, R, W>
where
    S: BloodPressureServiceTrait,
    R: BufRead,
    W: Write,
{
    pub fn new(service: S, input: R, output: W, format: OutputFormat) -> Self {
        Self {
            service,
            input,
            output,
            format,
        }
    }

    /// Run until the user picks Exit or input runs out
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "===========================================")?;
        writeln!(self.output, "  🩸 Blood Pressure Monitoring System v1.0 🩺")?;
        writeln!(self.output, "===========================================")?;

        loop {
            writeln!(self.output, "\nSelect an option:")?;
            writeln!(self.output, "1: Add New Reading")?;
            writeln!(self.output, "2: View All Records")?;
            writeln!(self.output, "3: Analyze Statistics")?;
            writeln!(self.output, "4: Exit System")?;

            let Some(choice) = self.prompt("Enter your choice (1-4): ")? else {
                debug!("Input closed, leaving menu loop");
                break;
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::Add) => self.handle_add()?,
                Some(MenuChoice::View) => self.handle_view()?,
                Some(MenuChoice::Analyze) => self.handle_analyze()?,
                Some(MenuChoice::Exit) => break,
                None => {
                    writeln!(self.output, "\n❌ Invalid choice. Please select a number between 1 and 4.")?;
                }
            }
        }

        writeln!(
            self.output,
            "\nThank you for using the Blood Pressure Monitoring System. Goodbye!"
        )?;
        self.output.flush()?;
        Ok(())
    }

    /// Hand back the service and writer once the session is over
    pub fn into_parts(self) -> (S, W) {
        (self.service, self.output)
    }

    fn handle_add(&mut self) -> Result<()> {
        let Some(systolic) = self.prompt("Enter Systolic (e.g., 120): ")? else {
            return Ok(());
        };
        let Some(diastolic) = self.prompt("Enter Diastolic (e.g., 80): ")? else {
            return Ok(());
        };
        let Some(date_raw) = self.prompt("Enter Date (YYYY-MM-DD, or leave blank for today): ")? else {
            return Ok(());
        };

        let date = if date_raw.trim().is_empty() {
            Local::now().date_naive()
        } else {
            match parse_reading_date(&date_raw) {
                Ok(date) => date,
                Err(e) => {
                    writeln!(self.output, "\n❌ Error adding record: {}", e)?;
                    return Ok(());
                }
            }
        };

        match self.service.add(&systolic, &diastolic, Some(date)) {
            Ok(category) => {
                writeln!(
                    self.output,
                    "\n✅ Record added successfully on {}. Category: {}",
                    date, category
                )?;
                if category.is_emergency() {
                    writeln!(
                        self.output,
                        "⚠️  This reading indicates a hypertensive crisis. Seek medical attention immediately."
                    )?;
                }
            }
            Err(e) => {
                writeln!(self.output, "\n❌ Error adding record: {}", e)?;
            }
        }
        Ok(())
    }

    fn handle_view(&mut self) -> Result<()> {
        let rows: Vec<ReadingRow> = self
            .service
            .list_sorted()
            .into_iter()
            .map(|reading| ReadingRow {
                category: self.service.get_severity(&reading),
                date: reading.date,
                systolic: reading.systolic,
                diastolic: reading.diastolic,
            })
            .collect();

        debug!(count = rows.len(), "Rendering records");
        write_readings(&mut self.output, &rows, self.format)
    }

    fn handle_analyze(&mut self) -> Result<()> {
        let insights = self.service.stats();
        write_insights(&mut self.output, insights.as_ref(), self.format)
    }

    /// Print `label` and read one line. `None` means the input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
