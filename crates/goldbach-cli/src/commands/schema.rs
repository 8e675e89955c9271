//! Handle `goldbach schema`.

use goldbach_core::entities::{AggregateReport, ReportDocument, VerificationRecord};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output;

/// Dump the JSON schema for one of the report types.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name.as_str() {
        "document" => schema_for!(ReportDocument),
        "report" => schema_for!(AggregateReport),
        "record" => schema_for!(VerificationRecord),
        other => anyhow::bail!(
            "unknown schema type '{other}' (expected document, report, or record)"
        ),
    };

    let value = serde_json::to_value(&schema)?;
    output::emit(&value, flags.format, || {
        serde_json::to_string_pretty(&value).unwrap_or_default()
    })
}
