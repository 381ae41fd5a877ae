use std::io::Cursor;

use bp_monitor_cli::config::OutputFormat;
use bp_monitor_cli::console::Console;
use bp_monitor_domain::{create_blood_pressure_service, sample_readings, BloodPressureServiceTrait};

// Initialize tracing once for all tests
static INIT: std::sync::Once = std::sync::Once::new();
fn initialize() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Drive a full session from scripted input and return the store size and the transcript
fn run_session(script: &str, seeded: bool, format: OutputFormat) -> (usize, String) {
    initialize();

    let initial = if seeded { sample_readings() } else { Vec::new() };
    let service = create_blood_pressure_service(initial).unwrap();

    let mut output = Vec::new();
    let mut console = Console::new(service, Cursor::new(script.as_bytes()), &mut output, format);
    console.run().unwrap();
    let (service, _) = console.into_parts();

    (service.reading_count(), String::from_utf8(output).unwrap())
}

#[test]
fn test_add_then_view_and_analyze() {
    let script = "1\n120\n80\n2025-11-01\n1\n130\n85\n2025-11-02\n2\n3\n4\n";
    let (count, transcript) = run_session(script, false, OutputFormat::Table);

    assert_eq!(count, 2);
    assert!(transcript.contains("Record added successfully on 2025-11-01. Category: Stage 1 Hypertension"));
    assert!(transcript.contains("BLOOD PRESSURE MONITORING RECORDS"));

    // Most recent first
    let newer = transcript.find("2025-11-02   130").unwrap();
    let older = transcript.find("2025-11-01   120").unwrap();
    assert!(newer < older);

    assert!(transcript.contains("Total Readings: 2"));
    assert!(transcript.contains("Average:        125.0      82.5"));
    assert!(transcript.contains("Overall Status based on Average: Stage 1 Hypertension"));
    assert!(transcript.ends_with("Goodbye!\n"));
}

#[test]
fn test_invalid_input_is_reported_and_not_stored() {
    let script = "1\nabc\n80\n\n1\n251\n80\n\n1\n120\n80\n2025/11/01\n4\n";
    let (count, transcript) = run_session(script, false, OutputFormat::Table);

    assert_eq!(count, 0);
    assert!(transcript.contains("Invalid systolic value 'abc'"));
    assert!(transcript.contains("Systolic must be between 50 and 250"));
    assert!(transcript.contains("Invalid date '2025/11/01'"));
    assert!(!transcript.contains("Record added successfully"));
}

#[test]
fn test_blank_date_defaults_to_today() {
    let today = chrono::Local::now().date_naive();
    let (count, transcript) = run_session("1\n118\n75\n\n4\n", false, OutputFormat::Table);

    assert_eq!(count, 1);
    assert!(transcript.contains(&format!("Record added successfully on {}. Category: Normal", today)));
}

#[test]
fn test_crisis_prints_warning() {
    let (_, transcript) = run_session("1\n185\n100\n2025-11-01\n4\n", false, OutputFormat::Table);

    assert!(transcript.contains("Category: Hypertensive Crisis (EMERGENCY)"));
    assert!(transcript.contains("Seek medical attention immediately"));
}

#[test]
fn test_empty_store_placeholders() {
    let (count, transcript) = run_session("2\n3\n4\n", false, OutputFormat::Table);

    assert_eq!(count, 0);
    assert!(transcript.contains("No records found. Start by adding a reading."));
    assert!(transcript.contains("Cannot analyze. No records available."));
}

#[test]
fn test_invalid_menu_choice() {
    let (_, transcript) = run_session("9\n4\n", true, OutputFormat::Table);
    assert!(transcript.contains("Invalid choice. Please select a number between 1 and 4."));
}

#[test]
fn test_end_of_input_exits() {
    let (count, transcript) = run_session("1\n120\n", true, OutputFormat::Table);

    assert_eq!(count, 4);
    assert!(transcript.ends_with("Goodbye!\n"));
}

#[test]
fn test_json_view_of_sample_data() {
    let (_, transcript) = run_session("2\n4\n", true, OutputFormat::Json);

    let start = transcript.find('[').unwrap();
    let end = transcript.rfind(']').unwrap();
    let rows: serde_json::Value = serde_json::from_str(&transcript[start..=end]).unwrap();

    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["date"], "2025-10-23");
    assert_eq!(rows[0]["category"], "Normal");
    assert_eq!(rows[1]["date"], "2025-10-22");
    assert_eq!(rows[1]["category"], "Hypertension2");
}
