use userreg_pipeline::Pipeline;

use crate::cmd::{read_input, ValidateArgs};
use crate::exit::{pipeline_exit_code, CliResult, SUCCESS};
use crate::output::{print_report, print_user, OutputFormat};

pub fn run(args: ValidateArgs, format: OutputFormat) -> CliResult<i32> {
    let input = match &args.json {
        Some(json) => json.clone(),
        None => read_input(args.path.as_deref())?,
    };

    let pipeline = Pipeline::with_config(args.pipeline_config());
    let outcome = pipeline
        .validate(&input)
        .and_then(|user| pipeline.serialize(&user).map(|canonical| (user, canonical)));

    match outcome {
        Ok((user, canonical)) => {
            tracing::info!(name = user.name(), "registration accepted");
            print_user(&user, &canonical, format);
            Ok(SUCCESS)
        }
        Err(err) => {
            let report = err.report();
            tracing::warn!(kind = report.kind(), "registration rejected");
            print_report(&report, args.indent, format);
            Ok(pipeline_exit_code(&err))
        }
    }
}
