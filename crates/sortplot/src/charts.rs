// File: crates/sortplot/src/charts.rs
// Summary: Declarative chart specs mapping benchmark columns onto styled series.

use plot_core::Marker;

use crate::algorithms::{bubble_sort, heap_sort, merge_sort, quick_sort, SortFn};

/// One benchmarked algorithm: its legend label, the two CSV columns it
/// produces, its marker shape and pinned color, and the instrumented sort
/// itself.
pub struct Algorithm {
    pub label: &'static str,
    pub comp_column: &'static str,
    pub swaps_column: &'static str,
    pub marker: Marker,
    /// Hex color used when a case pins its palette explicitly. The values
    /// equal the first four slots of the light theme cycle, so pinned and
    /// unpinned cases look the same.
    pub hex_color: &'static str,
    pub sort: SortFn,
}

/// Fixed catalog; series order here is legend order.
pub const ALGORITHMS: [Algorithm; 4] = [
    Algorithm {
        label: "QuickSort",
        comp_column: "QuickSortComp",
        swaps_column: "QuickSortSwaps",
        marker: Marker::Circle,
        hex_color: "#1f77b4",
        sort: quick_sort,
    },
    Algorithm {
        label: "MergeSort",
        comp_column: "MergeSortComp",
        swaps_column: "MergeSortSwaps",
        marker: Marker::Square,
        hex_color: "#ff7f0e",
        sort: merge_sort,
    },
    Algorithm {
        label: "BubbleSort",
        comp_column: "BubbleSortComp",
        swaps_column: "BubbleSortSwaps",
        marker: Marker::TriangleUp,
        hex_color: "#2ca02c",
        sort: bubble_sort,
    },
    Algorithm {
        label: "HeapSort",
        comp_column: "HeapSortComp",
        swaps_column: "HeapSortSwaps",
        marker: Marker::Diamond,
        hex_color: "#d62728",
        sort: heap_sort,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Comparisons,
    Swaps,
}

impl ChartKind {
    /// Word used in titles and y-axis labels.
    pub fn metric_label(self) -> &'static str {
        match self {
            ChartKind::Comparisons => "Comparisons",
            ChartKind::Swaps => "Swaps",
        }
    }

    /// Suffix of the output PNG name.
    pub fn file_stem(self) -> &'static str {
        match self {
            ChartKind::Comparisons => "comparisons",
            ChartKind::Swaps => "swaps",
        }
    }

    /// Noun used in the save confirmation line.
    pub fn save_noun(self) -> &'static str {
        match self {
            ChartKind::Comparisons => "comparison",
            ChartKind::Swaps => "swaps",
        }
    }

    pub fn column_for(self, alg: &Algorithm) -> &'static str {
        match self {
            ChartKind::Comparisons => alg.comp_column,
            ChartKind::Swaps => alg.swaps_column,
        }
    }
}

/// One line series of a chart: which column it plots and how it looks.
pub struct SeriesSpec {
    pub column: &'static str,
    pub label: &'static str,
    pub marker: Marker,
    /// Explicit hex color; `None` takes the theme palette slot.
    pub color: Option<&'static str>,
}

/// Everything needed to build and save one chart from a loaded table.
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: &'static str,
    pub y_label: String,
    pub file_name: String,
    pub series: Vec<SeriesSpec>,
}
