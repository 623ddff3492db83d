/// Region strings (chr1:1,000-2,000) and junction selection by region
use crate::error::{Result, SjError};
use crate::junction::JunctionRecord;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locus {
    pub chrom: String,
    pub start: u64,
    pub stop: u64,
}

impl Locus {
    /// True when the junction lies strictly inside (start, stop) on the same chromosome
    #[inline]
    pub fn contains(&self, junction: &JunctionRecord) -> bool {
        junction.chrom == self.chrom
            && self.start < junction.intron_start
            && junction.intron_stop < self.stop
    }
}

impl FromStr for Locus {
    type Err = SjError;

    fn from_str(s: &str) -> Result<Self> {
        let cleaned = s.trim().replace(',', "");
        let invalid = || SjError::InvalidLocus(s.to_string());

        // Split at the last ':' so contig names like HLA-A*01:01 survive
        let (chrom, range) = cleaned.rsplit_once(':').ok_or_else(invalid)?;
        let (start, stop) = range.split_once('-').ok_or_else(invalid)?;

        if chrom.is_empty() {
            return Err(invalid());
        }

        Ok(Locus {
            chrom: chrom.to_string(),
            start: start.trim().parse().map_err(|_| invalid())?,
            stop: stop.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// Boolean row selector for the junctions inside `chr_start_stop`
pub fn chr_start_stop_to_sj_ind(chr_start_stop: &str, table: &[JunctionRecord]) -> Result<Vec<bool>> {
    let locus: Locus = chr_start_stop.parse()?;
    Ok(table.iter().map(|j| locus.contains(j)).collect())
}
