use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use userreg_model::{User, Violation};
use userreg_pipeline::ErrorReport;

#[derive(Clone, Debug, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// Print an accepted record. JSON and pretty formats print the canonical text.
pub fn print_user(user: &User, canonical: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json | OutputFormat::Pretty => println!("{canonical}"),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "VALUE"]);
            for (field, value) in user_rows(user) {
                table.add_row(vec![field.to_string(), value]);
            }
            println!("{table}");
        }
    }
}

/// Print a failure report. JSON reports use the canonical indentation.
pub fn print_report(report: &ErrorReport, indent: usize, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                report
                    .to_json(indent)
                    .unwrap_or_else(|_| format!("{{\"error\":\"{}\"}}", report.kind()))
            );
        }
        OutputFormat::Table => match report {
            ErrorReport::ValidationError { violations } => {
                let mut table = Table::new();
                table
                    .load_preset(UTF8_FULL)
                    .set_content_arrangement(ContentArrangement::Dynamic)
                    .set_header(vec!["FIELD", "KIND", "CONSTRAINT", "MESSAGE"]);
                for violation in violations {
                    table.add_row(violation_row(violation));
                }
                println!("{table}");
            }
            other => print_report(other, indent, OutputFormat::Pretty),
        },
        OutputFormat::Pretty => match report {
            ErrorReport::ParseError {
                message,
                line,
                column,
            } => match (line, column) {
                (Some(line), Some(column)) => {
                    println!("malformed input (line {line}, column {column}): {message}")
                }
                _ => println!("malformed input: {message}"),
            },
            ErrorReport::ValidationError { violations } => {
                println!("validation failed with {} violation(s):", violations.len());
                for violation in violations {
                    println!("  {violation}");
                }
            }
            ErrorReport::InternalError { message } => println!("internal error: {message}"),
        },
    }
}

fn user_rows(user: &User) -> Vec<(&'static str, String)> {
    let address = user.address();
    vec![
        ("name", user.name().to_string()),
        ("age", user.age().to_string()),
        ("email", user.email().to_string()),
        ("is_employed", user.is_employed().to_string()),
        ("address.city", address.city().to_string()),
        ("address.street", address.street().to_string()),
        ("address.house_number", address.house_number().to_string()),
    ]
}

fn violation_row(violation: &Violation) -> Vec<String> {
    vec![
        violation.field_path.to_string(),
        violation.violation_kind.to_string(),
        violation
            .constraint
            .map(|kind| kind.to_string())
            .unwrap_or_else(|| "-".to_string()),
        violation.message.clone(),
    ]
}
