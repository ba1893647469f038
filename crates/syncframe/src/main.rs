mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "syncframe", version, about = "Bit-synchronous link framer CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_extract_subcommand() {
        let cli = Cli::try_parse_from([
            "syncframe",
            "extract",
            "capture.bits",
            "--markers",
            "markers.json",
            "--chunk-size",
            "512",
        ])
        .expect("extract args should parse");

        assert!(matches!(cli.command, Command::Extract(_)));
    }

    #[test]
    fn parses_access_code_override() {
        let cli = Cli::try_parse_from([
            "syncframe",
            "extract",
            "capture.bits",
            "--markers",
            "markers.json",
            "--access-code",
            "acdda4e2f28c20fc",
        ])
        .expect("access code override should parse");

        match cli.command {
            Command::Extract(args) => {
                assert_eq!(args.access_code.as_deref(), Some("acdda4e2f28c20fc"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_version_subcommand() {
        let cli = Cli::try_parse_from(["syncframe", "version", "--extended"])
            .expect("version args should parse");
        assert!(matches!(cli.command, Command::Version(_)));
    }
}
