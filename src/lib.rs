// Library exports for sj2psi
pub mod error;
pub mod junction;
pub mod locus;
pub mod output;
pub mod psi;
pub mod sj_out;

pub use error::{Result, SjError};
pub use junction::{int_to_intron_motif, IntronMotif, JunctionRecord, Strand, COLUMN_NAMES};
pub use locus::{chr_start_stop_to_sj_ind, Locus};
pub use psi::{compute_psi, compute_psi_default, recompute_psi, PsiConfig, PsiRecord};
pub use sj_out::{read_sj_out_stdin, read_sj_out_tab, SjReader};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
