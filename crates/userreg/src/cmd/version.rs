use userreg_pipeline::DEFAULT_INDENT;

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("userreg {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    for (key, value) in build_info() {
        println!("{key}: {value}");
    }
    Ok(SUCCESS)
}

fn build_info() -> Vec<(&'static str, String)> {
    vec![
        ("name", "userreg".to_string()),
        ("version", env!("CARGO_PKG_VERSION").to_string()),
        (
            "target",
            option_env!("USERREG_BUILD_TARGET")
                .unwrap_or("unknown")
                .to_string(),
        ),
        ("git_hash", option_env!("GIT_HASH").unwrap_or("unknown").to_string()),
        ("features", enabled_features().join(",")),
        ("schema_dialect", schema_dialect().to_string()),
        ("default_indent", DEFAULT_INDENT.to_string()),
    ]
}

fn enabled_features() -> Vec<&'static str> {
    let mut features = vec!["cli"];
    if cfg!(feature = "schema") {
        features.push("schema");
    }
    features
}

#[cfg(feature = "schema")]
fn schema_dialect() -> &'static str {
    userreg_schema::SCHEMA_DIALECT
}

#[cfg(not(feature = "schema"))]
fn schema_dialect() -> &'static str {
    "none"
}
