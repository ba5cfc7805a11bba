use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use shamir_recover::{reconstruct_document, Document, Execution, Outcome};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "recover")]
#[command(about = "Reconstruct threshold-shared secrets from a JSON share file", long_about = None)]
struct Args {
    /// JSON file holding one or more named testcases
    input: String,

    /// Report every testcase independently instead of stopping at the first failure
    #[arg(short, long)]
    keep_going: bool,

    /// Reconstruct testcases on a thread pool
    #[arg(short, long)]
    parallel: bool,
}

// "testcase1" -> "Testcase1"
fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn report_all(outcomes: &[Outcome], out: &mut impl Write) -> io::Result<bool> {
    let mut all_ok = true;
    for outcome in outcomes {
        match &outcome.secret {
            Ok(secret) => writeln!(out, "{} secret: {}", display_name(&outcome.name), secret)?,
            Err(e) => {
                all_ok = false;
                error!(testcase = %outcome.name, "{e}");
                writeln!(out, "{} failed: {}", display_name(&outcome.name), e)?;
            }
        }
    }
    Ok(all_ok)
}

// Writes no secrets unless every testcase succeeded
fn report_fail_fast(
    outcomes: &[Outcome],
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    if let Some(failed) = outcomes.iter().find(|o| o.secret.is_err()) {
        if let Err(e) = &failed.secret {
            writeln!(err, "Processing failed: {}", e)?;
        }
        return Ok(false);
    }
    report_all(outcomes, out)
}

fn report(
    outcomes: &[Outcome],
    keep_going: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<bool> {
    if keep_going {
        report_all(outcomes, out)
    } else {
        report_fail_fast(outcomes, out, err)
    }
}

fn run(args: &Args) -> Result<bool> {
    info!("Loading testcases from {}...", args.input);
    let document = Document::from_path(&args.input)
        .with_context(|| format!("Processing failed: cannot load {}", args.input))?;
    info!("Loaded {} testcases", document.len());

    let execution = if args.parallel {
        Execution::Parallel
    } else {
        Execution::Sequential
    };
    let outcomes = reconstruct_document(&document, execution);

    let ok = report(
        &outcomes,
        args.keep_going,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(ok)
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shamir_recover=info".parse()?)
                .add_directive("recover=info".parse()?),
        )
        .init();

    let args = Args::parse();

    Ok(if run(&args)? {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("testcase1"), "Testcase1");
        assert_eq!(display_name("Already"), "Already");
        assert_eq!(display_name(""), "");
    }

    const MIXED: &str = r#"{
        "testcase1": {
            "keys": { "n": 1, "k": 1 },
            "1": { "base": "10", "value": "7" }
        },
        "testcase2": {
            "keys": { "n": 1, "k": 1 },
            "1": { "base": "8", "value": "9" }
        },
        "testcase3": {
            "keys": { "n": 2, "k": 2 },
            "1": { "base": "10", "value": "5" }
        }
    }"#;

    const ALL_GOOD: &str = r#"{
        "testcase1": {
            "keys": { "n": 1, "k": 1 },
            "1": { "base": "16", "value": "ff" }
        },
        "testcase2": {
            "keys": { "n": 3, "k": 3 },
            "1": { "base": "10", "value": "5" },
            "2": { "base": "10", "value": "8" },
            "3": { "base": "10", "value": "11" }
        }
    }"#;

    fn run_report(json: &str, keep_going: bool) -> (bool, String, String) {
        let document = Document::from_json_str(json).unwrap();
        let outcomes = reconstruct_document(&document, Execution::Sequential);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let ok = report(&outcomes, keep_going, &mut out, &mut err).unwrap();
        (ok, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_fail_fast_prints_no_secrets() {
        let (ok, out, err) = run_report(MIXED, false);
        assert!(!ok);
        assert_eq!(out, "");
        // Only the first failure in document order is reported
        assert_eq!(
            err,
            "Processing failed: Interpolation failed: Invalid digit '9' for base 8\n"
        );
    }

    #[test]
    fn test_keep_going_reports_each_testcase() {
        let (ok, out, err) = run_report(MIXED, true);
        assert!(!ok);
        assert_eq!(err, "");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Testcase1 secret: 7",
                "Testcase2 failed: Interpolation failed: Invalid digit '9' for base 8",
                "Testcase3 failed: Interpolation failed: Expected 2 shares, found 1",
            ]
        );
    }

    #[test]
    fn test_all_secrets_printed_on_success() {
        for keep_going in [false, true] {
            let (ok, out, err) = run_report(ALL_GOOD, keep_going);
            assert!(ok);
            assert_eq!(out, "Testcase1 secret: 255\nTestcase2 secret: 2\n");
            assert_eq!(err, "");
        }
    }
}
