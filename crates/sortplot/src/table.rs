// File: crates/sortplot/src/table.rs
// Summary: Benchmark CSV table with strict schema validation and column projection.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Column holding the x values.
pub const SIZE_COLUMN: &str = "ArraySize";

/// Required header, in file order.
pub const COLUMNS: [&str; 9] = [
    SIZE_COLUMN,
    "QuickSortComp",
    "QuickSortSwaps",
    "MergeSortComp",
    "MergeSortSwaps",
    "BubbleSortComp",
    "BubbleSortSwaps",
    "HeapSortComp",
    "HeapSortSwaps",
];

#[derive(Debug, Error)]
pub enum TableError {
    #[error("input file not found: {path}")]
    NotFound { path: String },
    #[error("failed to open {path}")]
    Open {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("{path}: missing required column '{column}'")]
    MissingColumn { path: String, column: String },
    #[error("{path}: failed to read row {row}")]
    Row {
        path: String,
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("{path}: row {row}, column '{column}': cannot parse '{value}' as a number")]
    Parse {
        path: String,
        row: usize,
        column: String,
        value: String,
    },
}

/// Column-major benchmark data. Every metric column in the file is kept,
/// row-aligned with the sizes column, so charts can project any of them.
pub struct BenchmarkTable {
    source: PathBuf,
    sizes: Vec<f64>,
    columns: Vec<(String, Vec<f64>)>,
}

impl BenchmarkTable {
    /// Read and validate a benchmark CSV. The header is checked against
    /// [`COLUMNS`] before any row is parsed; extra columns are allowed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| {
                let not_found = matches!(
                    e.kind(),
                    csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound
                );
                if not_found {
                    TableError::NotFound { path: shown.clone() }
                } else {
                    TableError::Open { path: shown.clone(), source: e }
                }
            })?;

        let headers: Vec<String> = rdr
            .headers()
            .map_err(|e| TableError::Open { path: shown.clone(), source: e })?
            .iter()
            .map(str::to_string)
            .collect();
        for required in COLUMNS {
            if !headers.iter().any(|h| h == required) {
                return Err(TableError::MissingColumn {
                    path: shown.clone(),
                    column: required.to_string(),
                });
            }
        }
        let size_idx = headers
            .iter()
            .position(|h| h == SIZE_COLUMN)
            .ok_or_else(|| TableError::MissingColumn {
                path: shown.clone(),
                column: SIZE_COLUMN.to_string(),
            })?;

        let metric_idx: Vec<(usize, String)> = headers
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != size_idx)
            .map(|(i, h)| (i, h.clone()))
            .collect();

        let mut sizes = Vec::new();
        let mut columns: Vec<(String, Vec<f64>)> =
            metric_idx.iter().map(|(_, h)| (h.clone(), Vec::new())).collect();

        for (i, rec) in rdr.records().enumerate() {
            let row = i + 1;
            let rec = rec.map_err(|e| TableError::Row {
                path: shown.clone(),
                row,
                source: e,
            })?;
            sizes.push(parse_field(&rec, size_idx, SIZE_COLUMN, row, &shown)?);
            for ((idx, name), (_, values)) in metric_idx.iter().zip(columns.iter_mut()) {
                values.push(parse_field(&rec, *idx, name, row, &shown)?);
            }
        }

        Ok(Self {
            source: path.to_path_buf(),
            sizes,
            columns,
        })
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn sizes(&self) -> &[f64] {
        &self.sizes
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_slice())
    }

    /// Project (size, metric) pairs in row order, one per data row.
    pub fn points(&self, name: &str) -> Result<Vec<(f64, f64)>, TableError> {
        let col = self.column(name).ok_or_else(|| TableError::MissingColumn {
            path: self.source.display().to_string(),
            column: name.to_string(),
        })?;
        Ok(self.sizes.iter().copied().zip(col.iter().copied()).collect())
    }
}

fn parse_field(
    rec: &csv::StringRecord,
    idx: usize,
    column: &str,
    row: usize,
    path: &str,
) -> Result<f64, TableError> {
    let raw = rec.get(idx).unwrap_or("");
    raw.parse::<f64>().map_err(|_| TableError::Parse {
        path: path.to_string(),
        row,
        column: column.to_string(),
        value: raw.to_string(),
    })
}
