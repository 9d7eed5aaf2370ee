//! Season CSV output.
//!
//! One file per season, header plus one row per record. Fields are quoted
//! only when they contain the separator, a quote, or a line break; embedded
//! quotes are doubled.

use std::io::{self, Write};

use crate::record::{CSV_HEADER, Record};

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Writes a single CSV row.
pub fn write_row<W: Write>(mut w: W, row: &[&str]) -> io::Result<()> {
    let mut first = true;
    for field in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(field) {
            let escaped = field.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", field)?;
        }
    }
    writeln!(w)
}

/// Writes the canonical header followed by all records.
pub fn write_records<W: Write>(mut w: W, records: &[Record]) -> io::Result<()> {
    write_row(&mut w, &CSV_HEADER)?;
    for record in records {
        write_row(&mut w, &record.fields())?;
    }
    Ok(())
}
