use userreg_schema::{SchemaConfig, UserSchema};

use crate::cmd::{read_input, SchemaArgs};
use crate::exit::{schema_error, CliError, CliResult, INTERNAL, SUCCESS};
use crate::output::OutputFormat;

pub fn run(args: SchemaArgs, format: OutputFormat) -> CliResult<i32> {
    let schema = UserSchema::compile(SchemaConfig {
        strict_mode: args.strict,
    })
    .map_err(|err| schema_error("schema compile failed", err))?;

    if let Some(path) = &args.check {
        let document = read_input(Some(path.as_path()))?;
        schema
            .validate(&document)
            .map_err(|err| schema_error("schema check failed", err))?;
        println!("valid");
        return Ok(SUCCESS);
    }

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(schema.document()),
        OutputFormat::Table | OutputFormat::Pretty => {
            serde_json::to_string_pretty(schema.document())
        }
    }
    .map_err(|err| CliError::new(INTERNAL, format!("failed rendering schema: {err}")))?;
    println!("{rendered}");

    Ok(SUCCESS)
}
