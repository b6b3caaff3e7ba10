//! Sample command implementation.

use std::path::PathBuf;

use anyhow::Result;
use rancher_client::format::render_value;
use rancher_config::Config;

use crate::commands::{document_format, resolve_schema};
use crate::formatters::output_result;

pub fn run(
    type_name: &str,
    to: Option<&str>,
    config: &Config,
    output_file: Option<PathBuf>,
) -> Result<()> {
    let format = document_format(to, config.output_format)?;
    let schema = resolve_schema(type_name)?;

    let value = schema.sample()?;
    let output = render_value(format, &value)?;
    output_result(&output, output_file.as_ref())
}
