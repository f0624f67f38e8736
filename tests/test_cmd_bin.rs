use std::process::Command;
use std::io::Write;

const EXPECTED_OUTPUT: &str = r"
patron_id,late_fees
17-873-8783,0.25
83-279-0036,4.25
51-712-8941,0.00

";

const INPUT: &str = r"
book_uid,isbn_13,patron_id,date_checkout,date_due,date_returned
0c3cf2a3,978-0-15-602732-8,17-873-8783,05/30/2018,06/13/2018,06/08/2018
15b2dd27,978-0-375-70202-4,83-279-0036,11/08/2018,11/22/2018,11/29/2018
12bf1bce,978-0-06-112241-5,17-873-8783,02/20/2019,03/06/2019,03/07/2019
a1b7d0e6,978-0-14-303943-3,51-712-8941,07/12/2019,07/26/2019,07/26/2019
8b2f1c6c,978-0-452-28423-4,83-279-0036,12/20/2019,01/03/2020,01/13/2020

";

fn normalize_csv(content: &str) -> Vec<String> {
    content.lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

#[test]
fn test_fees_report_binary() {
    let bin_path = env!("CARGO_BIN_EXE_library_fees");

    let mut temp_file = tempfile::NamedTempFile::new()
        .expect("Failed to create temporary file");
    temp_file.write_all(INPUT.as_bytes())
        .expect("Failed to write to temporary file");

    let out_dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let out_path = out_dir.path().join("book_fees.csv");

    let output = Command::new(bin_path)
        .arg(temp_file.path())
        .arg(&out_path)
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(),
        "Binary failed with stderr: {}",
        String::from_utf8_lossy(&output.stderr));

    let expected_lines = normalize_csv(EXPECTED_OUTPUT);

    // Report is echoed to stdout and written to the output file, in first-seen order.
    let printed = String::from_utf8_lossy(&output.stdout);
    assert_eq!(normalize_csv(&printed), expected_lines,
        "Expected:\n{}\n\nActual:\n{}", EXPECTED_OUTPUT, printed);

    let written = std::fs::read_to_string(&out_path).expect("Failed to read report");
    assert_eq!(normalize_csv(&written), expected_lines);
}

#[test]
fn test_binary_uses_bundled_data_by_default() {
    let bin_path = env!("CARGO_BIN_EXE_library_fees");
    let work_dir = tempfile::tempdir().expect("Failed to create temporary directory");

    let output = Command::new(bin_path)
        .current_dir(work_dir.path())
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success(),
        "Binary failed with stderr: {}",
        String::from_utf8_lossy(&output.stderr));
    assert!(work_dir.path().join("book_fees.csv").is_file());
    assert_eq!(normalize_csv(&String::from_utf8_lossy(&output.stdout)), normalize_csv(EXPECTED_OUTPUT));
}

#[test]
fn test_binary_reports_missing_input() {
    let bin_path = env!("CARGO_BIN_EXE_library_fees");
    let work_dir = tempfile::tempdir().expect("Failed to create temporary directory");

    let output = Command::new(bin_path)
        .arg(work_dir.path().join("missing.csv"))
        .arg(work_dir.path().join("out.csv"))
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("input file not found"), "stderr: {}", stderr);
    assert!(!work_dir.path().join("out.csv").exists());
}
