//! Non-interactive risk assessment.
//!
//! Reads an assessment input JSON document, scores it and prints the result.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin assess -- --input <file.json> [--format markdown|json|guide] [--export-dir <dir>]
//! ```
//!
//! Input fields use camelCase names; only `age` and `sex` are required:
//!
//! ```json
//! { "age": 50, "sex": "Male", "smoking": true, "bloodPressureMmHg": 150,
//!   "physicalActivity": "Sedentary" }
//! ```
//!
//! Exit codes: 0 on success, 1 on invalid input or I/O failure, 2 on usage errors.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use lifeline::adapters::MarkdownFileExporter;
use lifeline::application::{report, AssessmentService};
use lifeline::{AssessmentInput, LifelineError};

const USAGE: &str =
    "Usage: assess --input <file.json> [--format markdown|json|guide] [--export-dir <dir>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Markdown,
    Json,
    Guide,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    input: PathBuf,
    format: Format,
    export_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Help,
    Assess(Args),
}

/// Parse arguments (without the program name).
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Command, String> {
    let mut input: Option<PathBuf> = None;
    let mut export_dir: Option<PathBuf> = None;
    let mut format = Format::Markdown;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" | "-i" => {
                input = Some(value_for(&mut args, "--input")?);
            }
            "--format" | "-f" => {
                format = match args.next().as_deref() {
                    Some("markdown") | Some("md") => Format::Markdown,
                    Some("json") => Format::Json,
                    Some("guide") => Format::Guide,
                    Some(other) => return Err(format!("Unknown format: {other}")),
                    None => return Err("--format needs a value".to_string()),
                };
            }
            "--export-dir" => {
                export_dir = Some(value_for(&mut args, "--export-dir")?);
            }
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {arg}")),
        }
    }

    let input = input.ok_or_else(|| "Missing --input".to_string())?;
    Ok(Command::Assess(Args {
        input,
        format,
        export_dir,
    }))
}

fn value_for(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<PathBuf, String> {
    match args.next() {
        Some(v) if !v.is_empty() && !v.starts_with("--") => Ok(PathBuf::from(v)),
        _ => Err(format!("{flag} needs a path")),
    }
}

fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Ok(Command::Help) => {
            println!("{USAGE}\n\nScores a cardiovascular risk assessment and prints the report.");
            return;
        }
        Ok(Command::Assess(args)) => args,
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            std::process::exit(2);
        }
    };

    if let Err(e) = run(&args.input, args.format, args.export_dir) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(input_path: &Path, format: Format, export_dir: Option<PathBuf>) -> Result<()> {
    let raw = std::fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read {input_path:?}"))?;
    let input: AssessmentInput = serde_json::from_str(&raw)
        .map_err(LifelineError::from)
        .with_context(|| format!("Failed to parse {input_path:?}"))?;

    let exporter = MarkdownFileExporter::new(export_dir.clone().unwrap_or_default());
    let service = AssessmentService::new(Arc::new(exporter));
    let assessment = service.assess(input)?;

    match format {
        Format::Markdown => print!("{}", report::render_markdown(&assessment)),
        Format::Guide => print!("{}", report::render_discussion_guide(&assessment)),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&assessment).map_err(LifelineError::from)?
        ),
    }

    if export_dir.is_some() {
        let path = service.export(&assessment)?;
        eprintln!("Report written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, String> {
        parse_args(args.iter().map(|a| (*a).to_string()))
    }

    #[test]
    fn test_parses_full_command_line() {
        let command = parse(&["-i", "in.json", "--format", "guide", "--export-dir", "out"]);
        assert_eq!(
            command,
            Ok(Command::Assess(Args {
                input: PathBuf::from("in.json"),
                format: Format::Guide,
                export_dir: Some(PathBuf::from("out")),
            }))
        );
    }

    #[test]
    fn test_defaults_to_markdown() {
        match parse(&["--input", "in.json"]) {
            Ok(Command::Assess(args)) => {
                assert_eq!(args.format, Format::Markdown);
                assert!(args.export_dir.is_none());
            }
            other => panic!("unexpected parse: {other:?}"),
        }
        assert!(matches!(parse(&["-f", "md", "-i", "x"]), Ok(Command::Assess(_))));
        assert!(matches!(parse(&["-f", "json", "-i", "x"]), Ok(Command::Assess(_))));
    }

    #[test]
    fn test_help() {
        assert_eq!(parse(&["--help"]), Ok(Command::Help));
    }

    #[test]
    fn test_unknown_flag() {
        assert_eq!(parse(&["--verbose"]), Err("Unknown arg: --verbose".to_string()));
    }

    #[test]
    fn test_missing_input() {
        assert_eq!(parse(&["--format", "json"]), Err("Missing --input".to_string()));
        assert_eq!(parse(&[]), Err("Missing --input".to_string()));
    }

    #[test]
    fn test_bad_format() {
        assert_eq!(
            parse(&["-i", "in.json", "--format", "pdf"]),
            Err("Unknown format: pdf".to_string())
        );
        assert_eq!(
            parse(&["-i", "in.json", "--format"]),
            Err("--format needs a value".to_string())
        );
    }

    #[test]
    fn test_flags_missing_values() {
        assert_eq!(
            parse(&["-i", "in.json", "--export-dir"]),
            Err("--export-dir needs a path".to_string())
        );
        assert_eq!(
            parse(&["--input", "--format", "json"]),
            Err("--input needs a path".to_string())
        );
    }

    #[test]
    fn test_run_rejects_invalid_input() {
        let dir = tempfile::tempdir().unwrap();

        let out_of_range = dir.path().join("young.json");
        std::fs::write(&out_of_range, r#"{"age": 10, "sex": "Male"}"#).unwrap();
        let err = run(&out_of_range, Format::Json, None).unwrap_err();
        assert!(format!("{err:#}").contains("Age 10"), "{err:#}");

        let misspelled = dir.path().join("typo.json");
        std::fs::write(&misspelled, r#"{"age": 50, "sex": "Male", "smoker": true}"#).unwrap();
        assert!(run(&misspelled, Format::Markdown, None).is_err());

        assert!(run(&dir.path().join("missing.json"), Format::Markdown, None).is_err());
    }

    #[test]
    fn test_run_exports_when_asked() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input.json");
        std::fs::write(&input, r#"{"age": 50, "sex": "Female", "diabetes": true}"#).unwrap();
        let out = dir.path().join("reports");

        run(&input, Format::Guide, Some(out.clone())).unwrap();

        let written: Vec<_> = std::fs::read_dir(&out).unwrap().collect();
        assert_eq!(written.len(), 1);
    }
}
