use std::process::{Command, Output};

fn run_tablegen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tablegen"))
        .args(args)
        .output()
        .expect("the tablegen binary should spawn")
}

#[test]
fn no_arg_run_prints_only_the_inverted_table() {
    let output = run_tablegen(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout should be utf8");
    assert!(stdout.ends_with('\n'));

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout should carry exactly one line");

    let line = lines[0];
    assert!(line.starts_with("[0, -6, -12"));
    assert!(line.ends_with(']'));

    let values: Vec<i64> = line
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(", ")
        .map(|entry| entry.parse().expect("every entry should be an integer"))
        .collect();

    assert_eq!(values.len(), 200);
    assert_eq!(values[0], 0);
    assert!(values[100] <= -399);
    assert_eq!(values[199], -6);
    assert!(
        values.iter().all(|&value| value <= 0),
        "only the inverted, non-positive table should be printed"
    );
}

#[test]
fn space_separated_negative_amplitude_is_accepted() {
    let output = run_tablegen(&["--amplitude", "-250"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout should be utf8");
    assert!(stdout.starts_with("[0, 3, 7"));

    let values: Vec<i64> = stdout
        .trim_end()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(", ")
        .map(|entry| entry.parse().expect("every entry should be an integer"))
        .collect();

    assert_eq!(values.len(), 200);
    assert!(values[100] >= 249, "the inverted pass should flip -250 back");
}

#[test]
fn negative_dither_fails_with_the_domain_error() {
    let output = run_tablegen(&["--dither", "-0.5"]);
    assert!(!output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("stdout should be utf8");
    assert!(stdout.is_empty(), "no table should be printed on failure");

    let stderr = String::from_utf8(output.stderr).expect("stderr should be utf8");
    assert!(stderr.contains("dither must be non-negative"));
}
