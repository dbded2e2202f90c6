//! Export helpers for the extracted roster.
//!
//! - `save_roster_tsv` writes `name<TAB>email<TAB>name (signature)` per entry,
//!   no header, no quoting.
//! - `write_listing` writes `name (signature)` per entry, for the console.
use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};

use crate::roster::Roster;

fn tsv_builder() -> WriterBuilder {
    let mut b = WriterBuilder::new();
    b.delimiter(b'\t')
        .has_headers(false)
        .quote_style(QuoteStyle::Never);
    b
}

pub fn write_roster_tsv<W: Write>(roster: &Roster, out: W) -> Result<()> {
    let mut wtr = tsv_builder().from_writer(out);
    for e in roster.entries() {
        wtr.write_record([e.name.as_str(), e.email.as_str(), e.label().as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_roster_tsv<P: AsRef<Path>>(roster: &Roster, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_roster_tsv(roster, file).with_context(|| format!("write {}", path.display()))?;
    log::info!("wrote {} rows to {}", roster.len(), path.display());
    Ok(())
}

pub fn write_listing<W: Write>(roster: &Roster, out: &mut W) -> Result<()> {
    for e in roster.entries() {
        writeln!(out, "{}", e.label())?;
    }
    Ok(())
}
