mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "userreg",
    version,
    about = "Validate user registration records and print them as canonical JSON",
    long_about = "Checks a registration record (name, age, email, employment, address) \
                  against every field rule and the employment age rule, then prints \
                  the record re-serialized with stable indentation. Rejected records \
                  produce a violation report and exit 60; malformed JSON exits 61."
)]
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
    fn parses_validate_with_inline_json() {
        let cli = Cli::try_parse_from(["userreg", "validate", "--json", "{}", "--indent", "4"])
            .expect("validate args should parse");

        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.json.as_deref(), Some("{}"));
                assert_eq!(args.pipeline_config().indent, 4);
                assert!(!args.pipeline_config().reject_unknown_fields);
                assert_eq!(args.pipeline_config().max_input_bytes, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_path_together_with_inline_json() {
        let err = Cli::try_parse_from(["userreg", "validate", "user.json", "--json", "{}"])
            .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn parses_global_format_after_subcommand() {
        let cli = Cli::try_parse_from(["userreg", "schema", "--strict", "--format", "json"])
            .expect("schema args should parse");
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Command::Schema(ref args) if args.strict));
    }
}
