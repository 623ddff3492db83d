//! Percent spliced-in scores per splice junction
//!
//! Implements the donor/acceptor usage ratios of Pervouchine et al.,
//! Bioinformatics (2013), doi:10.1093/bioinformatics/bts678.
//!
//! psi5 asks how often a donor site is used with this acceptor compared to
//! all acceptors it is spliced to; psi3 asks the same of an acceptor site
//! and its donors. Given
//!
//! ```text
//! chr1:100-180   90 reads
//! chr1:100-200   10 reads
//! chr1:130-200   40 reads
//! ```
//!
//! the donor chr1:100 carries 100 reads, so psi5 is 0.9 and 0.1 for the
//! first two junctions. The acceptor chr1:200 carries 50 reads, so psi3 is
//! 0.2 and 0.8 for the last two. Sites with a single partner score 1.0.
//!
//! Sites are keyed by (chrom, coordinate) only. Strand is not part of the
//! key, so + and - junctions sharing a coordinate are pooled.
use crate::error::{Result, SjError};
use crate::junction::JunctionRecord;
use std::collections::HashMap;

pub const DEFAULT_MIN_UNIQUE: i64 = 5;
pub const DEFAULT_MIN_MULTIMAP: i64 = 10;

/// Read-count thresholds. A count equal to its threshold passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PsiConfig {
    pub min_unique: i64,
    pub min_multimap: i64,
}

impl Default for PsiConfig {
    fn default() -> Self {
        PsiConfig {
            min_unique: DEFAULT_MIN_UNIQUE,
            min_multimap: DEFAULT_MIN_MULTIMAP,
        }
    }
}

impl PsiConfig {
    pub fn new(min_unique: i64, min_multimap: i64) -> Result<Self> {
        let config = PsiConfig {
            min_unique,
            min_multimap,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_unique < 0 {
            return Err(SjError::InvalidParameter(format!(
                "min_unique must be non-negative, got {}",
                self.min_unique
            )));
        }
        if self.min_multimap < 0 {
            return Err(SjError::InvalidParameter(format!(
                "min_multimap must be non-negative, got {}",
                self.min_multimap
            )));
        }
        Ok(())
    }
}

/// A junction together with its derived psi columns.
///
/// `None` marks a missing value: a count below threshold, or a score
/// whose numerator is missing or whose denominator is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PsiRecord {
    pub junction: JunctionRecord,
    pub unique_junction_reads_filtered: Option<u32>,
    pub multimap_junction_reads_filtered: Option<u32>,
    pub total_filtered_reads: Option<f64>,
    /// Sum of defined totals at the donor site; 0.0 when none are defined
    pub psi5_denominator: f64,
    /// Sum of defined totals at the acceptor site; 0.0 when none are defined
    pub psi3_denominator: f64,
    pub psi5: Option<f64>,
    pub psi3: Option<f64>,
}

#[inline]
fn passes(count: u32, min: i64) -> Option<u32> {
    (i64::from(count) >= min).then_some(count)
}

/// Sum of two optional counts; missing only when both are missing
#[inline]
fn filtered_total(unique: Option<u32>, multimap: Option<u32>) -> Option<f64> {
    match (unique, multimap) {
        (None, None) => None,
        (u, m) => Some(f64::from(u.unwrap_or(0)) + f64::from(m.unwrap_or(0))),
    }
}

#[inline]
fn ratio(total: Option<f64>, denominator: f64) -> Option<f64> {
    if denominator > 0.0 {
        total.map(|t| t / denominator)
    } else {
        None
    }
}

/// Sum defined totals per site, then broadcast the sums back in row order
fn site_denominators<'a, K, F>(
    rows: &'a [JunctionRecord],
    totals: &[Option<f64>],
    key: F,
) -> Vec<f64>
where
    K: std::hash::Hash + Eq,
    F: Fn(&'a JunctionRecord) -> K,
{
    let mut sums: HashMap<K, f64> = HashMap::with_capacity(rows.len());
    for (row, total) in rows.iter().zip(totals) {
        let sum = sums.entry(key(row)).or_insert(0.0);
        if let Some(t) = total {
            *sum += t;
        }
    }
    log::debug!("{} sites across {} junctions", sums.len(), rows.len());

    rows.iter().map(|row| sums[&key(row)]).collect()
}

/// Compute psi5 and psi3 for every junction.
///
/// The input is left untouched; the returned table has one record per
/// input row, in input order. Rows whose counts fail the thresholds stay
/// in the table with missing derived values.
pub fn compute_psi(table: &[JunctionRecord], config: &PsiConfig) -> Result<Vec<PsiRecord>> {
    config.validate()?;

    let unique: Vec<Option<u32>> = table
        .iter()
        .map(|r| passes(r.unique_junction_reads, config.min_unique))
        .collect();
    let multimap: Vec<Option<u32>> = table
        .iter()
        .map(|r| passes(r.multimap_junction_reads, config.min_multimap))
        .collect();
    let totals: Vec<Option<f64>> = unique
        .iter()
        .zip(&multimap)
        .map(|(&u, &m)| filtered_total(u, m))
        .collect();

    // The two groupings only read `totals`, so run them side by side
    let (psi5_denominators, psi3_denominators) = rayon::join(
        || site_denominators(table, &totals, JunctionRecord::donor_site),
        || site_denominators(table, &totals, JunctionRecord::acceptor_site),
    );

    let records: Vec<PsiRecord> = table
        .iter()
        .enumerate()
        .map(|(i, junction)| PsiRecord {
            junction: junction.clone(),
            unique_junction_reads_filtered: unique[i],
            multimap_junction_reads_filtered: multimap[i],
            total_filtered_reads: totals[i],
            psi5_denominator: psi5_denominators[i],
            psi3_denominator: psi3_denominators[i],
            psi5: ratio(totals[i], psi5_denominators[i]),
            psi3: ratio(totals[i], psi3_denominators[i]),
        })
        .collect();

    let undefined = records.iter().filter(|r| r.total_filtered_reads.is_none()).count();
    if undefined > 0 {
        log::debug!(
            "{undefined} of {} junctions below read thresholds ({}, {})",
            records.len(),
            config.min_unique,
            config.min_multimap
        );
    }

    Ok(records)
}

/// `compute_psi` with the default thresholds (5 unique, 10 multimapping)
pub fn compute_psi_default(table: &[JunctionRecord]) -> Result<Vec<PsiRecord>> {
    compute_psi(table, &PsiConfig::default())
}

/// Recompute the derived columns of an already scored table from its raw counts
pub fn recompute_psi(records: &[PsiRecord], config: &PsiConfig) -> Result<Vec<PsiRecord>> {
    let junctions: Vec<JunctionRecord> = records.iter().map(|r| r.junction.clone()).collect();
    compute_psi(&junctions, config)
}
