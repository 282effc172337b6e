// File: crates/sortplot/src/cases.rs
// Summary: The three benchmark cases (median, min, max) with their labels and chart catalogs.

use crate::charts::{ChartKind, ChartSpec, SeriesSpec, ALGORITHMS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchCase {
    Median,
    Min,
    Max,
}

impl BenchCase {
    pub const ALL: [BenchCase; 3] = [BenchCase::Median, BenchCase::Min, BenchCase::Max];

    /// Short key used in file names.
    pub fn key(self) -> &'static str {
        match self {
            BenchCase::Median => "median",
            BenchCase::Min => "min",
            BenchCase::Max => "max",
        }
    }

    /// Statistic name used in titles and axis labels.
    pub fn stat_label(self) -> &'static str {
        match self {
            BenchCase::Median => "Median",
            BenchCase::Min => "Minimum",
            BenchCase::Max => "Maximum",
        }
    }

    /// Name of the CSV this case reads (and the generator writes).
    pub fn data_file(self) -> String {
        format!("sorting_{}_data.csv", self.key())
    }

    /// Reduce per-run samples to the case statistic. The median of an even
    /// count averages the two middle values with integer division, matching
    /// the data files this tool historically consumed.
    pub fn aggregate(self, samples: &mut [u64]) -> u64 {
        if samples.is_empty() {
            return 0;
        }
        match self {
            BenchCase::Median => {
                samples.sort_unstable();
                let n = samples.len();
                if n % 2 == 0 {
                    (samples[n / 2 - 1] + samples[n / 2]) / 2
                } else {
                    samples[n / 2]
                }
            }
            BenchCase::Min => samples.iter().copied().min().unwrap_or(0),
            BenchCase::Max => samples.iter().copied().max().unwrap_or(0),
        }
    }

    /// The two charts rendered for this case, comparisons first. The min and
    /// max cases pin each series to its hex color; median leaves colors to
    /// the theme cycle (which starts with the same four values).
    pub fn chart_specs(self) -> Vec<ChartSpec> {
        let pin_colors = self != BenchCase::Median;
        [ChartKind::Comparisons, ChartKind::Swaps]
            .into_iter()
            .map(|kind| ChartSpec {
                kind,
                title: format!("{} {} vs Array Size", self.stat_label(), kind.metric_label()),
                x_label: "Array Size",
                y_label: format!("{} {}", self.stat_label(), kind.metric_label()),
                file_name: format!("sorting_{}_{}.png", self.key(), kind.file_stem()),
                series: ALGORITHMS
                    .iter()
                    .map(|alg| SeriesSpec {
                        column: kind.column_for(alg),
                        label: alg.label,
                        marker: alg.marker,
                        color: pin_colors.then_some(alg.hex_color),
                    })
                    .collect(),
            })
            .collect()
    }
}
