//! Purpose: `datapeek` CLI entry point.
//! Role: Binary crate root; parses args, runs the summary pipeline, prints lines on stdout.
//! Invariants: Every pipeline failure ends stdout with one `Failed to parse: ...` line.
//! Invariants: Exit code is 0 whenever the pipeline ran, success or caught failure.
//! Invariants: Diagnostics go to stderr through tracing and never touch stdout.
use std::io::{self, Write};
use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use datapeek::core::error::Error;
use datapeek::core::input::DEFAULT_INPUT;
use datapeek::summary::summarize_path;

#[derive(Parser)]
#[command(
    name = "datapeek",
    version,
    about = "Summarize the UTF-16 JSON document in ./data.json",
    long_about = None,
    after_help = r#"OUTPUT
  Array root:   Name: <first.name>  /  Type: <first.type>
  Empty array:  Empty list returned
  Other root:   Error Response:  /  Status  /  Error  /  Message
  Any failure:  Failed to parse: <reason>

  Set RUST_LOG=debug for pipeline diagnostics on stderr."#
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    init_tracing();

    let lines = run(Path::new(DEFAULT_INPUT));
    let mut stdout = io::stdout().lock();
    for line in lines {
        if writeln!(stdout, "{line}").is_err() {
            break;
        }
    }
}

fn run(path: &Path) -> Vec<String> {
    match summarize_path(path) {
        Ok(summary) => summary.lines(),
        Err(failure) => {
            tracing::debug!(
                kind = ?failure.error.kind(),
                printed = failure.printed.len(),
                "summary failed"
            );
            let mut lines = failure.printed;
            lines.push(failure_line(&failure.error));
            lines
        }
    }
}

fn failure_line(err: &Error) -> String {
    format!("Failed to parse: {err}")
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::{failure_line, run};
    use datapeek::core::error::{Error, ErrorKind};

    #[test]
    fn failure_line_has_prefix_and_reason() {
        let err = Error::new(ErrorKind::Decode).with_message("truncated data");
        assert_eq!(failure_line(&err), "Failed to parse: Decode: truncated data");
    }

    #[test]
    fn missing_input_yields_single_failure_line() {
        let temp = tempfile::tempdir().expect("tempdir");
        let lines = run(&temp.path().join("data.json"));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Failed to parse: NotFound"));
    }

    #[test]
    fn scalar_root_prints_header_before_failure() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("data.json");
        let mut bytes = vec![0xff, 0xfe];
        bytes.extend("42".encode_utf16().flat_map(u16::to_le_bytes));
        std::fs::write(&path, bytes).expect("write");

        let lines = run(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Error Response:");
        assert!(lines[1].starts_with("Failed to parse: Shape"));
    }
}
