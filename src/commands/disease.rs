use anyhow::Result;
use std::io::Write;

use crate::disease;

use super::print_json;

/// Print the reference entry for a label, or `null` when the label is unknown.
pub fn disease<W: Write>(label: &str, out: &mut W) -> Result<()> {
    print_json(out, &disease::lookup(label))
}

/// Print every known label with its severity.
pub fn list_diseases<W: Write>(out: &mut W) -> Result<()> {
    for label in disease::labels() {
        if let Some(info) = disease::lookup(label) {
            writeln!(out, "{}\t{}\t{}", label, info.severity, info.name)?;
        }
    }
    Ok(())
}
