/// Splice junction records as reported by STAR in SJ.out.tab
use std::fmt;

/// Input columns, in file order
pub const COLUMN_NAMES: [&str; 9] = [
    "chrom",
    "intron_start",
    "intron_stop",
    "strand",
    "intron_motif",
    "annotated",
    "unique_junction_reads",
    "multimap_junction_reads",
    "max_overhang",
];

/// Junction strand. STAR writes 0 (undefined), 1 (+) or 2 (-).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strand {
    Undefined,
    Plus,
    Minus,
}

impl Strand {
    /// Parse either a STAR strand code or a +/-/. symbol
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "0" | "." | "?" => Some(Strand::Undefined),
            "1" | "+" => Some(Strand::Plus),
            "2" | "-" => Some(Strand::Minus),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Strand::Undefined => '.',
            Strand::Plus => '+',
            Strand::Minus => '-',
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Dinucleotide motif at the intron boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntronMotif {
    NonCanonical,
    GtAg,
    CtAc,
    GcAg,
    CtGc,
    AtAc,
    GtAt,
}

impl IntronMotif {
    /// Translate a STAR motif code (0-6). Codes 7 and above have no motif.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(IntronMotif::NonCanonical),
            1 => Some(IntronMotif::GtAg),
            2 => Some(IntronMotif::CtAc),
            3 => Some(IntronMotif::GcAg),
            4 => Some(IntronMotif::CtGc),
            5 => Some(IntronMotif::AtAc),
            6 => Some(IntronMotif::GtAt),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            IntronMotif::NonCanonical => 0,
            IntronMotif::GtAg => 1,
            IntronMotif::CtAc => 2,
            IntronMotif::GcAg => 3,
            IntronMotif::CtGc => 4,
            IntronMotif::AtAc => 5,
            IntronMotif::GtAt => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IntronMotif::NonCanonical => "non-canonical",
            IntronMotif::GtAg => "GT/AG",
            IntronMotif::CtAc => "CT/AC",
            IntronMotif::GcAg => "GC/AG",
            IntronMotif::CtGc => "CT/GC",
            IntronMotif::AtAc => "AT/AC",
            IntronMotif::GtAt => "GT/AT",
        }
    }
}

impl fmt::Display for IntronMotif {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Label for a STAR motif code, or None when the code is out of range
pub fn int_to_intron_motif(code: u8) -> Option<&'static str> {
    IntronMotif::from_code(code).map(IntronMotif::label)
}

/// One line of SJ.out.tab.
///
/// Coordinates are 1-based and inclusive, first and last intronic base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JunctionRecord {
    pub chrom: String,
    pub intron_start: u64,
    pub intron_stop: u64,
    pub strand: Strand,
    pub intron_motif: IntronMotif,
    pub annotated: bool,
    pub unique_junction_reads: u32,
    pub multimap_junction_reads: u32,
    pub max_overhang: u32,
}

impl JunctionRecord {
    /// Unannotated, undefined-strand junction with the given counts.
    /// Handy for building tables by hand.
    pub fn new(
        chrom: impl Into<String>,
        intron_start: u64,
        intron_stop: u64,
        unique_junction_reads: u32,
        multimap_junction_reads: u32,
    ) -> Self {
        JunctionRecord {
            chrom: chrom.into(),
            intron_start,
            intron_stop,
            strand: Strand::Undefined,
            intron_motif: IntronMotif::NonCanonical,
            annotated: false,
            unique_junction_reads,
            multimap_junction_reads,
            max_overhang: 0,
        }
    }

    /// Donor (5') site key
    #[inline]
    pub fn donor_site(&self) -> (&str, u64) {
        (self.chrom.as_str(), self.intron_start)
    }

    /// Acceptor (3') site key
    #[inline]
    pub fn acceptor_site(&self) -> (&str, u64) {
        (self.chrom.as_str(), self.intron_stop)
    }
}
