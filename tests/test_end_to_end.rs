/// End-to-end tests for the sj2psi binary
use anyhow::Result;
use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_sj2psi");

// Donor chr1:100 shared by two junctions, acceptor chr1:200 shared by two
const WORKED_EXAMPLE: &str = "\
chr1\t100\t180\t1\t1\t1\t90\t0\t30
chr1\t100\t200\t1\t1\t0\t10\t0\t25
chr1\t130\t200\t1\t1\t1\t40\t0\t33
";

fn column(header: &[&str], name: &str) -> usize {
    header
        .iter()
        .position(|c| *c == name)
        .unwrap_or_else(|| panic!("missing column {name}"))
}

fn parse_table(text: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let mut lines = text.lines();
    let header = lines
        .next()
        .expect("empty output")
        .split('\t')
        .map(String::from)
        .collect();
    let rows = lines
        .map(|l| l.split('\t').map(String::from).collect())
        .collect();
    (header, rows)
}

#[test]
fn test_worked_example_file_to_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("SJ.out.tab");
    let output = temp_dir.path().join("psi.tsv");
    fs::write(&input, WORKED_EXAMPLE)?;

    let status = Command::new(BIN)
        .args([input.to_str().unwrap(), "-o", output.to_str().unwrap(), "--quiet"])
        .status()?;
    assert!(status.success());

    let text = fs::read_to_string(&output)?;
    let (header, rows) = parse_table(&text);
    let header: Vec<&str> = header.iter().map(String::as_str).collect();
    assert_eq!(rows.len(), 3);

    let psi5 = column(&header, "psi5");
    let psi3 = column(&header, "psi3");
    let motif = column(&header, "intron_motif");
    let annotated = column(&header, "annotated");

    let psi5_values: Vec<f64> = rows.iter().map(|r| r[psi5].parse().unwrap()).collect();
    let psi3_values: Vec<f64> = rows.iter().map(|r| r[psi3].parse().unwrap()).collect();
    assert_eq!(psi5_values, vec![0.9, 0.1, 1.0]);
    assert_eq!(psi3_values, vec![1.0, 0.2, 0.8]);

    assert_eq!(rows[0][motif], "GT/AG");
    assert_eq!(rows[0][annotated], "True");
    assert_eq!(rows[1][annotated], "False");
    Ok(())
}

#[test]
fn test_stdin_to_stdout_with_region() -> Result<()> {
    let mut child = Command::new(BIN)
        .args(["--region", "chr1:120-250", "-q"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(WORKED_EXAMPLE.as_bytes())?;
    let output = child.wait_with_output()?;
    assert!(output.status.success());

    let (header, rows) = parse_table(&String::from_utf8(output.stdout)?);
    let header: Vec<&str> = header.iter().map(String::as_str).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][column(&header, "intron_start")], "130");
    // Denominator still counts the junction outside the region
    assert_eq!(rows[0][column(&header, "psi3_denominator")], "50");
    assert_eq!(rows[0][column(&header, "psi3")], "0.8");
    Ok(())
}

#[test]
fn test_thresholds_from_command_line() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("SJ.out.tab");
    fs::write(&input, WORKED_EXAMPLE)?;

    let output = Command::new(BIN)
        .args([input.to_str().unwrap(), "--min-unique", "20", "-q"])
        .output()?;
    assert!(output.status.success());

    let (header, rows) = parse_table(&String::from_utf8(output.stdout)?);
    let header: Vec<&str> = header.iter().map(String::as_str).collect();
    let psi5 = column(&header, "psi5");
    let total = column(&header, "total_filtered_reads");

    assert_eq!(rows[0][psi5], "1");
    assert_eq!(rows[1][total], "NA");
    assert_eq!(rows[1][psi5], "NA");
    Ok(())
}

#[test]
fn test_negative_threshold_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("SJ.out.tab");
    fs::write(&input, WORKED_EXAMPLE)?;

    let output = Command::new(BIN)
        .args([input.to_str().unwrap(), "--min-unique", "-1"])
        .output()?;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("min_unique"), "got: {stderr}");
    Ok(())
}

#[test]
fn test_malformed_input_fails_with_line_number() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("SJ.out.tab");
    fs::write(&input, "chr1\t100\t180\t1\t1\t1\t90\t0\t30\nchr1\t100\t200\n")?;

    let output = Command::new(BIN).arg(input.to_str().unwrap()).output()?;
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "got: {stderr}");
    Ok(())
}

#[test]
fn test_bad_region_fails() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("SJ.out.tab");
    fs::write(&input, WORKED_EXAMPLE)?;

    let output = Command::new(BIN)
        .args([input.to_str().unwrap(), "--region", "chr1-100-200"])
        .output()?;
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid locus"));
    Ok(())
}
