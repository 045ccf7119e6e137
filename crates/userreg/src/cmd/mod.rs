use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use userreg_pipeline::{PipelineConfig, DEFAULT_INDENT};

use crate::exit::{io_error, CliResult};
use crate::output::OutputFormat;

pub mod schema;
pub mod validate;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a registration record and print its canonical form.
    Validate(ValidateArgs),
    /// Print the JSON Schema of the registration contract, or check a document against it.
    Schema(SchemaArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Validate(args) => validate::run(args, format),
        Command::Schema(args) => schema::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// File containing the record. Reads stdin when omitted or `-`.
    #[arg(conflicts_with = "json")]
    pub path: Option<PathBuf>,
    /// Record given inline.
    #[arg(long)]
    pub json: Option<String>,
    /// Spaces per indentation level in canonical output (0 for compact).
    #[arg(long, env = "USERREG_INDENT", default_value_t = DEFAULT_INDENT)]
    pub indent: usize,
    /// Report keys the record does not declare.
    #[arg(long, env = "USERREG_STRICT_FIELDS")]
    pub strict_fields: bool,
    /// Lowercase the email domain before accepting the record.
    #[arg(long, env = "USERREG_NORMALIZE_EMAIL")]
    pub normalize_email: bool,
    /// Reject inputs larger than this many bytes (no limit when unset).
    #[arg(long, env = "USERREG_MAX_INPUT_BYTES", value_name = "BYTES")]
    pub max_input_bytes: Option<usize>,
}

impl ValidateArgs {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            indent: self.indent,
            reject_unknown_fields: self.strict_fields,
            normalize_email: self.normalize_email,
            max_input_bytes: self.max_input_bytes,
        }
    }
}

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Reject properties the contract does not declare.
    #[arg(long)]
    pub strict: bool,
    /// Check a JSON document against the schema instead of printing it (`-` for stdin).
    #[arg(long, value_name = "PATH")]
    pub check: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Read a document from `path`, or stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> CliResult<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err)),
        _ => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .map_err(|err| io_error("failed reading stdin", err))?;
            Ok(input)
        }
    }
}
