//! Integration tests for the unifier

use mgu::{run, run_str, FailureReason, MguConfig, MguError, Term};
use std::io::Write;
use std::process::Command;

const TWO_SETS: &str = "#
?x1 = g(?x2)
f(?x1,h(?x1),?x2) = f(g(?x3),?x4,?x3)
#
?y = h(a(),b(),c())
";

fn binding(output: &mgu::RunOutput, set: usize, var: &str) -> String {
    output.sets[set]
        .bindings
        .get(var)
        .map(Term::to_string)
        .unwrap_or_default()
}

#[test]
fn test_two_set_scenario() {
    let output = run_str(TWO_SETS, &MguConfig::default()).unwrap();

    assert_eq!(output.sets.len(), 2);
    assert!(output.sets.iter().all(|s| !s.failed()));

    // ?x1 is bound twice; the second equation's binding replaces the first
    assert_eq!(binding(&output, 0, "?x1"), "g(?x3)");
    assert_eq!(binding(&output, 0, "?x2"), "?x3");
    assert_eq!(binding(&output, 0, "?x4"), "h(?x1)");
    assert_eq!(binding(&output, 1, "?y"), "h(a(),b(),c())");

    assert!(output.report.contains("### MGU for set 1"));
    assert!(output.report.contains("### MGU for set 2"));
    assert!(output.report.contains("   ?y ==> h(a(),b(),c())\n"));
    assert!(output.report.contains(
        "   Rewritten: f(g(?x3),h(g(?x3)),?x3) = f(g(?x3),h(g(?x3)),?x3)\n"
    ));
}

#[test]
fn test_report_keeps_set_order() {
    let input = "#\n?x = f(?x)\n#\n?y = a()\n#\nf(?z) = g(?z)\n#\nf(?x,?y) = f(a())\n";
    let output = run_str(input, &MguConfig::default()).unwrap();

    let reasons: Vec<_> = output
        .sets
        .iter()
        .map(|s| s.failure.as_ref().map(|f| f.reason))
        .collect();
    assert_eq!(
        reasons,
        vec![
            Some(FailureReason::OccursCheck),
            None,
            Some(FailureReason::DifferentFunctions),
            Some(FailureReason::DifferentArities),
        ]
    );

    let positions: Vec<_> = (1..=4)
        .map(|id| {
            let header = if id == 2 {
                format!("### MGU for set {}", id)
            } else {
                format!("### No MGU for set {}", id)
            };
            output.report.find(&header).unwrap()
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_two_hop_rewrite() {
    let output = run_str("#\n?x = ?y\n?y = a()\n", &MguConfig::default()).unwrap();
    assert!(output.report.contains("   Original:  ?x = ?y\n   Rewritten: a() = a()\n"));
}

/// `f(f(...f(a())...))` nested `depth` times
fn nested_term(depth: usize) -> String {
    format!("{}a(){}", "f(".repeat(depth), ")".repeat(depth))
}

#[test]
fn test_deeply_nested_term_reports() {
    let depth = 3_000;
    let term = nested_term(depth);
    let input = format!("#\n?x = {}\n", term);

    let output = run_str(&input, &MguConfig::default()).unwrap();
    assert!(!output.sets[0].failed());
    assert!(output.report.contains(&format!("   ?x ==> {}\n", term)));
    assert!(output
        .report
        .contains(&format!("   Rewritten: {} = {}\n", term, term)));
}

#[test]
fn test_binary_deeply_nested_term() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "#\n?x = {}\n", nested_term(5_000)).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_mgu"))
        .arg(file.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8(out.stdout).unwrap().contains("### MGU for set 1"));
}

#[test]
fn test_symbols_match_on_first_character() {
    let output = run_str("#\nfoo(?x) = fab(a())\n", &MguConfig::default()).unwrap();
    assert!(!output.sets[0].failed());
    assert_eq!(binding(&output, 0, "?x"), "a()");
}

#[test]
fn test_echo_lists_sets() {
    let output = run_str(TWO_SETS, &MguConfig::default()).unwrap();
    assert!(output.echo.starts_with("\n2 expression sets:\n\nSet 1\n?x1 = g(?x2)\n"));
    assert!(output.echo.contains("\nSet 2\n?y = h(a(),b(),c())\n"));
}

#[test]
fn test_run_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TWO_SETS.as_bytes()).unwrap();

    let output = run(&MguConfig::with_input(Some(file.path().to_path_buf()))).unwrap();
    assert_eq!(output.sets.len(), 2);
}

#[test]
fn test_fatal_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = MguConfig::with_input(Some(dir.path().join("nope.in")));
    assert!(matches!(run(&missing), Err(MguError::Read { .. })));

    assert!(matches!(
        run_str("?x = a()", &MguConfig::default()),
        Err(MguError::TooFewLines)
    ));
}

#[test]
fn test_binary_success() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TWO_SETS.as_bytes()).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_mgu"))
        .arg(file.path())
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("2 expression sets:"));
    assert!(stdout.contains("### MGU for set 2"));
}

#[test]
fn test_binary_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.in");

    let out = Command::new(env!("CARGO_BIN_EXE_mgu"))
        .arg(&path)
        .output()
        .unwrap();
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("!!! Cannot read"));
}
