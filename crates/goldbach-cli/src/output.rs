use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
/// The summary text is built lazily; JSON modes never evaluate it.
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    summary: impl FnOnce() -> String,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
        OutputFormat::Summary => Ok(summary()),
    }
}

/// Print a serializable response in the requested format.
pub fn emit<T: Serialize>(
    value: &T,
    format: OutputFormat,
    summary: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    let rendered = render(value, format, summary)?;
    println!("{rendered}");
    Ok(())
}
