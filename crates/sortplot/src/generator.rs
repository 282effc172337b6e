// File: crates/sortplot/src/generator.rs
// Summary: Regenerates benchmark CSVs by running the instrumented sorts over random arrays.

use std::path::Path;

use anyhow::{Context, Result};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cases::BenchCase;
use crate::charts::ALGORITHMS;
use crate::table::COLUMNS;

pub const MIN_SIZE: usize = 100;
pub const MAX_SIZE: usize = 1000;
pub const SIZE_STEP: usize = 100;
/// Array elements are drawn uniformly from 0..VALUE_RANGE.
pub const VALUE_RANGE: u64 = 10_000;

#[derive(Debug, Default)]
pub struct GenOptions {
    /// Array sizes to benchmark; default is 100..=1000 step 100.
    pub sizes: Option<Vec<usize>>,
    /// Fixed run count per size; default is runs == size.
    pub runs_override: Option<usize>,
    /// Seed for reproducible data files.
    pub seed: Option<u64>,
}

fn sizes(opts: &GenOptions) -> Vec<usize> {
    opts.sizes
        .clone()
        .unwrap_or_else(|| (MIN_SIZE..=MAX_SIZE).step_by(SIZE_STEP).collect())
}

/// Write one case's CSV to `out_path`. For every array size, each algorithm
/// sorts the same sequence of random arrays and the per-run counters are
/// reduced with the case statistic.
pub fn generate_case(case: BenchCase, out_path: &Path, opts: &GenOptions) -> Result<()> {
    let mut rng: StdRng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut wtr = csv::Writer::from_path(out_path)
        .with_context(|| format!("creating {}", out_path.display()))?;
    wtr.write_record(COLUMNS)?;

    for size in sizes(opts) {
        let runs = opts.runs_override.unwrap_or(size);
        let mut samples: Vec<(Vec<u64>, Vec<u64>)> = (0..ALGORITHMS.len())
            .map(|_| (Vec::with_capacity(runs), Vec::with_capacity(runs)))
            .collect();

        for _ in 0..runs {
            let base: Vec<u64> = (0..size).map(|_| rng.gen_range(0..VALUE_RANGE)).collect();
            for (alg, (comps, swaps)) in ALGORITHMS.iter().zip(samples.iter_mut()) {
                let mut arr = base.clone();
                let counters = (alg.sort)(&mut arr);
                debug_assert!(arr.windows(2).all(|w| w[0] <= w[1]));
                comps.push(counters.comparisons);
                swaps.push(counters.swaps);
            }
        }

        let mut record = Vec::with_capacity(COLUMNS.len());
        record.push(size.to_string());
        for (comps, swaps) in &mut samples {
            record.push(case.aggregate(comps).to_string());
            record.push(case.aggregate(swaps).to_string());
        }
        wtr.write_record(&record)?;
        debug!("{}: size {size} aggregated over {runs} runs", case.key());
    }

    wtr.flush()
        .with_context(|| format!("writing {}", out_path.display()))?;
    Ok(())
}
