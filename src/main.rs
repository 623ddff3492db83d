use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use sj2psi::output::{open_output, write_psi_table};
use sj2psi::psi::{compute_psi, PsiConfig, DEFAULT_MIN_MULTIMAP, DEFAULT_MIN_UNIQUE};
use sj2psi::sj_out::{read_sj_out_stdin, read_sj_out_tab};
use sj2psi::Locus;

/// sj2psi - percent spliced-in scores from STAR splice junctions
///
/// Reads an SJ.out.tab file and reports psi5 (donor usage) and psi3
/// (acceptor usage) for every junction, after Pervouchine et al. (2013)
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// SJ.out.tab file (may be .gz or .bgz). Reads stdin if omitted
    #[clap(value_name = "SJ_OUT_TAB")]
    input: Option<String>,

    /// Output table (stdout if not specified)
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Minimum uniquely mapped reads for a junction to count
    #[clap(short = 'u', long = "min-unique", default_value_t = DEFAULT_MIN_UNIQUE, allow_hyphen_values = true)]
    min_unique: i64,

    /// Minimum multimapping reads for a junction to count
    #[clap(short = 'm', long = "min-multimap", default_value_t = DEFAULT_MIN_MULTIMAP, allow_hyphen_values = true)]
    min_multimap: i64,

    /// Only report junctions strictly inside this region (chr:start-stop)
    #[clap(short = 'r', long = "region")]
    region: Option<String>,

    /// Quiet mode (warnings and errors only)
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Number of threads for parallel processing
    #[clap(short = 't', long = "threads", default_value = "2")]
    threads: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    // If no input specified and no stdin, print help
    if args.input.is_none() && std::io::stdin().is_terminal() {
        use clap::CommandFactory;
        Args::command().print_help()?;
        std::process::exit(0);
    }

    let config = PsiConfig::new(args.min_unique, args.min_multimap)?;

    // Parse the region up front so a typo fails before reading the input
    let locus = args
        .region
        .as_deref()
        .map(str::parse::<Locus>)
        .transpose()?;

    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()?;

    let junctions = match args.input {
        Some(ref path) => read_sj_out_tab(path).with_context(|| format!("Failed to read {path}"))?,
        None => read_sj_out_stdin().context("Failed to read junctions from stdin")?,
    };
    log::info!("Loaded {} junctions", junctions.len());

    let mut records = compute_psi(&junctions, &config)?;
    let scored = records.iter().filter(|r| r.psi5.is_some()).count();
    log::info!(
        "Scored {scored} of {} junctions (min unique {}, min multimap {})",
        records.len(),
        config.min_unique,
        config.min_multimap
    );

    // Denominators are already fixed, so the region only trims what is reported
    if let Some(locus) = locus {
        records.retain(|r| locus.contains(&r.junction));
        log::info!("{} junctions inside {}:{}-{}", records.len(), locus.chrom, locus.start, locus.stop);
    }

    let mut out = open_output(args.output.as_deref())
        .with_context(|| format!("Failed to open output {:?}", args.output))?;
    write_psi_table(&mut out, &records)?;

    Ok(())
}
