// File: crates/sortplot/tests/generator.rs
// Purpose: Generated CSVs must re-load cleanly and carry the expected shape.

use std::path::PathBuf;

use sortplot::cases::BenchCase;
use sortplot::generator::{generate_case, GenOptions};
use sortplot::table::BenchmarkTable;

fn out_path(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out/generator");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

fn small_opts(seed: u64) -> GenOptions {
    GenOptions {
        sizes: None,
        runs_override: Some(3),
        seed: Some(seed),
    }
}

#[test]
fn generated_csv_reloads() {
    let path = out_path("sorting_median_data.csv");
    generate_case(BenchCase::Median, &path, &small_opts(7)).expect("generate");

    let table = BenchmarkTable::load(&path).expect("generated file must satisfy the schema");
    assert_eq!(table.len(), 10);
    let sizes: Vec<f64> = (1..=10).map(|i| (i * 100) as f64).collect();
    assert_eq!(table.sizes(), sizes.as_slice());
}

#[test]
fn bubble_comparisons_are_size_determined() {
    // Bubble sort always runs the full pass structure, so its comparison
    // count is a function of n alone and any statistic lands on n*(n-1)/2.
    let path = out_path("sorting_max_data.csv");
    generate_case(BenchCase::Max, &path, &small_opts(11)).expect("generate");

    let table = BenchmarkTable::load(&path).expect("load");
    let col = table.column("BubbleSortComp").expect("column");
    for (size, comp) in table.sizes().iter().zip(col) {
        let n = *size as u64;
        assert_eq!(*comp as u64, n * (n - 1) / 2);
    }
}

#[test]
fn custom_sizes_replace_the_default_range() {
    let path = out_path("custom_sizes.csv");
    let opts = GenOptions {
        sizes: Some(vec![10, 20, 30]),
        runs_override: Some(2),
        seed: Some(5),
    };
    generate_case(BenchCase::Median, &path, &opts).expect("generate");

    let table = BenchmarkTable::load(&path).expect("load");
    assert_eq!(table.sizes(), &[10.0, 20.0, 30.0]);
}

#[test]
fn same_seed_same_file() {
    let a_path = out_path("seeded_a.csv");
    let b_path = out_path("seeded_b.csv");
    generate_case(BenchCase::Min, &a_path, &small_opts(42)).expect("generate a");
    generate_case(BenchCase::Min, &b_path, &small_opts(42)).expect("generate b");

    let a = std::fs::read(&a_path).expect("read a");
    let b = std::fs::read(&b_path).expect("read b");
    assert_eq!(a, b, "seeded generation must be reproducible");
}

#[test]
fn min_never_exceeds_max() {
    let min_path = out_path("bound_min.csv");
    let max_path = out_path("bound_max.csv");
    generate_case(BenchCase::Min, &min_path, &small_opts(3)).expect("generate min");
    generate_case(BenchCase::Max, &max_path, &small_opts(3)).expect("generate max");

    let min_table = BenchmarkTable::load(&min_path).expect("load min");
    let max_table = BenchmarkTable::load(&max_path).expect("load max");
    // Same seed, same runs: per-run samples are identical, so the min
    // statistic can never land above the max statistic.
    for column in ["QuickSortComp", "MergeSortSwaps", "HeapSortComp"] {
        let mins = min_table.column(column).expect("min column");
        let maxs = max_table.column(column).expect("max column");
        for (lo, hi) in mins.iter().zip(maxs) {
            assert!(lo <= hi, "{column}: min {lo} > max {hi}");
        }
    }
}
