/// Tab-separated writer for scored junction tables
use crate::error::Result;
use crate::junction::COLUMN_NAMES;
use crate::psi::PsiRecord;
use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Columns appended by the psi calculation, in output order
pub const DERIVED_COLUMN_NAMES: [&str; 7] = [
    "unique_junction_reads_filtered",
    "multimap_junction_reads_filtered",
    "total_filtered_reads",
    "psi5_denominator",
    "psi3_denominator",
    "psi5",
    "psi3",
];

/// Placeholder for missing values
pub const MISSING: &str = "NA";

/// Buffered writer to a file, or stdout when no path is given
pub fn open_output<P: AsRef<Path>>(path: Option<P>) -> Result<Box<dyn Write>> {
    match path {
        Some(p) => Ok(Box::new(BufWriter::new(File::create(p)?))),
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

fn opt<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

/// Write the header and one line per record
pub fn write_psi_table<W: Write>(writer: &mut W, records: &[PsiRecord]) -> Result<()> {
    let header: Vec<&str> = COLUMN_NAMES
        .iter()
        .chain(DERIVED_COLUMN_NAMES.iter())
        .copied()
        .collect();
    writeln!(writer, "{}", header.join("\t"))?;

    for rec in records {
        let j = &rec.junction;
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            j.chrom,
            j.intron_start,
            j.intron_stop,
            j.strand,
            j.intron_motif,
            if j.annotated { "True" } else { "False" },
            j.unique_junction_reads,
            j.multimap_junction_reads,
            j.max_overhang,
            opt(rec.unique_junction_reads_filtered),
            opt(rec.multimap_junction_reads_filtered),
            opt(rec.total_filtered_reads),
            rec.psi5_denominator,
            rec.psi3_denominator,
            opt(rec.psi5),
            opt(rec.psi3),
        )?;
    }
    writer.flush()?;
    Ok(())
}
