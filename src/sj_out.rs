use crate::error::{Result, SjError};
use crate::junction::{IntronMotif, JunctionRecord, Strand, COLUMN_NAMES};
use flate2::read::MultiGzDecoder;
use noodles::bgzf;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// Open a junction table, decompressing by extension (.gz or .bgz)
pub fn open_sj_input<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let ext = path.extension().and_then(|ext| ext.to_str());
    match ext {
        Some("bgz") => Ok(Box::new(BufReader::new(bgzf::io::reader::Reader::new(file)))),
        Some("gz") => Ok(Box::new(BufReader::new(MultiGzDecoder::new(file)))),
        _ => Ok(Box::new(BufReader::new(file))),
    }
}

/// Streaming reader for STAR SJ.out.tab files
pub struct SjReader<R: Read> {
    reader: BufReader<R>,
    line_no: usize,
    skipped: usize,
    buf: Vec<u8>,
}

impl<R: Read> SjReader<R> {
    pub fn new(reader: R) -> Self {
        SjReader {
            reader: BufReader::new(reader),
            line_no: 0,
            skipped: 0,
            buf: Vec::new(),
        }
    }

    /// Next junction, or None at end of input. Blank and `#` lines are skipped.
    pub fn read_record(&mut self) -> Result<Option<JunctionRecord>> {
        loop {
            self.buf.clear();
            if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            let line = std::str::from_utf8(&self.buf)
                .map_err(|_| SjError::schema(self.line_no, "line is not valid UTF-8"))?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                self.skipped += 1;
                continue;
            }
            return parse_sj_line(trimmed, self.line_no).map(Some);
        }
    }

    pub fn read_all(&mut self) -> Result<Vec<JunctionRecord>> {
        let mut records = Vec::new();
        while let Some(record) = self.read_record()? {
            records.push(record);
        }
        log::debug!(
            "Read {} junctions from {} lines ({} blank or comment lines skipped)",
            records.len(),
            self.line_no,
            self.skipped
        );
        Ok(records)
    }
}

fn parse_field<T: FromStr>(fields: &[&str], idx: usize, line_no: usize) -> Result<T> {
    fields[idx].parse().map_err(|_| {
        SjError::schema(
            line_no,
            format!("{} is not an integer: '{}'", COLUMN_NAMES[idx], fields[idx]),
        )
    })
}

/// Parse one whitespace-delimited SJ.out.tab line
pub fn parse_sj_line(line: &str, line_no: usize) -> Result<JunctionRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() != COLUMN_NAMES.len() {
        return Err(SjError::schema(
            line_no,
            format!("expected {} fields, found {}", COLUMN_NAMES.len(), fields.len()),
        ));
    }

    let strand = Strand::from_token(fields[3])
        .ok_or_else(|| SjError::schema(line_no, format!("unknown strand '{}'", fields[3])))?;

    let motif_code: u8 = parse_field(&fields, 4, line_no)?;
    let intron_motif = IntronMotif::from_code(motif_code).ok_or_else(|| {
        SjError::schema(line_no, format!("intron motif code {motif_code} out of range 0-6"))
    })?;

    let annotated = match fields[5] {
        "0" => false,
        "1" => true,
        other => {
            return Err(SjError::schema(
                line_no,
                format!("annotated must be 0 or 1, found '{other}'"),
            ))
        }
    };

    Ok(JunctionRecord {
        chrom: fields[0].to_string(),
        intron_start: parse_field(&fields, 1, line_no)?,
        intron_stop: parse_field(&fields, 2, line_no)?,
        strand,
        intron_motif,
        annotated,
        unique_junction_reads: parse_field(&fields, 6, line_no)?,
        multimap_junction_reads: parse_field(&fields, 7, line_no)?,
        max_overhang: parse_field(&fields, 8, line_no)?,
    })
}

/// Read an SJ.out.tab file (auto-detects compression)
pub fn read_sj_out_tab<P: AsRef<Path>>(path: P) -> Result<Vec<JunctionRecord>> {
    let input = open_sj_input(path)?;
    SjReader::new(input).read_all()
}

/// Read an SJ.out.tab table from stdin
pub fn read_sj_out_stdin() -> Result<Vec<JunctionRecord>> {
    use std::io::stdin;
    SjReader::new(stdin()).read_all()
}
